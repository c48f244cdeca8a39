//! Built-in datasets and loaders for alternative ones.

use std::collections::HashSet;

use log::debug;

use crate::error::{CompanionError, Result};
use crate::model::{Difficulty, Product, Recipe};

fn recipe(
    id: u32,
    title: &str,
    emoji: &str,
    difficulty: Difficulty,
    time: u32,
    description: &str,
    ingredients: &[&str],
) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        emoji: emoji.to_string(),
        difficulty,
        time,
        description: description.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
    }
}

/// The recipe collection shown when no dataset file is given
pub fn recipes() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Classic Spaghetti Carbonara",
            "🍝",
            Difficulty::Easy,
            20,
            "A creamy Italian pasta dish with eggs, cheese, and pancetta",
            &["Spaghetti", "Eggs", "Pecorino Romano", "Pancetta", "Black Pepper"],
        ),
        recipe(
            2,
            "Chocolate Chip Cookies",
            "🍪",
            Difficulty::Easy,
            25,
            "Soft and chewy cookies loaded with chocolate chips",
            &["Flour", "Butter", "Sugar", "Eggs", "Chocolate Chips", "Vanilla"],
        ),
        recipe(
            3,
            "Beef Stir-Fry",
            "🥘",
            Difficulty::Medium,
            30,
            "Quick and delicious Asian-inspired beef with vegetables",
            &["Beef", "Soy Sauce", "Bell Peppers", "Broccoli", "Garlic", "Ginger"],
        ),
        recipe(
            4,
            "Homemade Pizza",
            "🍕",
            Difficulty::Medium,
            45,
            "Fresh pizza with homemade dough and your favorite toppings",
            &["Flour", "Yeast", "Tomato Sauce", "Mozzarella", "Basil"],
        ),
        recipe(
            5,
            "Coq au Vin",
            "🍗",
            Difficulty::Hard,
            120,
            "Classic French dish with chicken braised in red wine",
            &["Chicken", "Red Wine", "Mushrooms", "Pearl Onions", "Bacon", "Thyme"],
        ),
        recipe(
            6,
            "Quick Avocado Toast",
            "🍞",
            Difficulty::Easy,
            5,
            "Simple yet delicious breakfast with crushed avocado on toast",
            &["Bread", "Avocado", "Lemon", "Salt", "Pepper"],
        ),
        recipe(
            7,
            "Thai Green Curry",
            "🍲",
            Difficulty::Hard,
            40,
            "Aromatic and spicy Thai coconut curry with vegetables and chicken",
            &[
                "Coconut Milk",
                "Thai Curry Paste",
                "Chicken",
                "Basil",
                "Lime",
                "Green Chilies",
            ],
        ),
        recipe(
            8,
            "Quinoa Buddha Bowl",
            "🥗",
            Difficulty::Medium,
            25,
            "Nutritious bowl with quinoa, roasted vegetables, and tahini dressing",
            &["Quinoa", "Sweet Potato", "Chickpeas", "Kale", "Tahini", "Lemon"],
        ),
    ]
}

/// The product list used by the query utilities
pub fn products() -> Vec<Product> {
    [
        (1, "Laptop", 999.99, "Electronics"),
        (2, "Smartphone", 699.99, "Electronics"),
        (3, "Headphones", 149.99, "Electronics"),
        (4, "T-shirt", 20.0, "Clothing"),
        (5, "Jeans", 40.0, "Clothing"),
        (6, "Coffee Mug", 12.5, "Home"),
        (7, "Desk Lamp", 35.0, "Home"),
    ]
    .into_iter()
    .map(|(id, name, price, category)| Product {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
    })
    .collect()
}

/// Check ids are unique and every recipe takes some time
pub fn validate_recipes(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id) {
            return Err(CompanionError::InvalidRecord(format!(
                "duplicate recipe id {}",
                recipe.id
            )));
        }
        if recipe.time == 0 {
            return Err(CompanionError::InvalidRecord(format!(
                "recipe {} ('{}') must take at least one minute",
                recipe.id, recipe.title
            )));
        }
    }
    Ok(())
}

/// Check ids are unique and prices are finite and non-negative
pub fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(CompanionError::InvalidRecord(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CompanionError::InvalidRecord(format!(
                "product {} ('{}') has invalid price {}",
                product.id, product.name, product.price
            )));
        }
    }
    Ok(())
}

/// Parse and validate a JSON array of recipes
pub fn recipes_from_json(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    validate_recipes(&recipes)?;
    debug!("Loaded {} recipes from JSON", recipes.len());
    Ok(recipes)
}

/// Parse and validate a JSON array of products
pub fn products_from_json(json: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    validate_products(&products)?;
    debug!("Loaded {} products from JSON", products.len());
    Ok(products)
}
