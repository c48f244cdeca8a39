//! Small queries over a product list.

use log::info;

use crate::model::Product;

pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .collect()
}

pub fn product_names(products: &[Product]) -> Vec<String> {
    products.iter().map(|product| product.name.clone()).collect()
}

pub fn calculate_total_price<'a, I>(products: I) -> f64
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(|product| product.price).sum()
}

/// One human-readable line describing `product`
pub fn product_detail_line(product: &Product) -> String {
    format!(
        "{}: ${:.2} ({})",
        product.name, product.price, product.category
    )
}

pub fn log_product_details(products: &[Product]) {
    for product in products {
        info!("{}", product_detail_line(product));
    }
}

/// Names of products costing at least `min_price`, in list order
pub fn get_expensive_products(products: &[Product], min_price: f64) -> Vec<String> {
    products
        .iter()
        .filter(|product| product.price >= min_price)
        .map(|product| product.name.clone())
        .collect()
}
