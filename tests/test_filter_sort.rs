use cooking_companion::catalog;
use cooking_companion::pipeline::{
    apply_filter, apply_sort, compare_titles, filter_by_difficulty, filter_by_time,
    QUICK_MAX_MINUTES,
};
use cooking_companion::{Difficulty, FilterSelector, Recipe, SortSelector};
use std::cmp::Ordering;

fn titles(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.title.clone()).collect()
}

fn ids(recipes: &[&Recipe]) -> Vec<u32> {
    recipes.iter().map(|r| r.id).collect()
}

fn make_recipe(id: u32, title: &str, time: u32) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        emoji: "🍽️".to_string(),
        difficulty: Difficulty::Easy,
        time,
        description: String::new(),
        ingredients: vec![],
    }
}

#[test]
fn test_all_filter_is_identity() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();

    let filtered = apply_filter(&all, FilterSelector::All);
    assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_filter_results_satisfy_predicate() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();

    for selector in FilterSelector::ALL {
        let filtered = apply_filter(&all, selector);
        for recipe in &filtered {
            assert!(recipes.iter().any(|r| r == *recipe));
            match selector {
                FilterSelector::All => {}
                FilterSelector::Easy => assert_eq!(recipe.difficulty, Difficulty::Easy),
                FilterSelector::Medium => assert_eq!(recipe.difficulty, Difficulty::Medium),
                FilterSelector::Hard => assert_eq!(recipe.difficulty, Difficulty::Hard),
                FilterSelector::Quick => assert!(recipe.time <= QUICK_MAX_MINUTES),
            }
        }
    }
}

#[test]
fn test_difficulty_filters() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();

    assert_eq!(ids(&apply_filter(&all, FilterSelector::Easy)), vec![1, 2, 6]);
    assert_eq!(ids(&apply_filter(&all, FilterSelector::Medium)), vec![3, 4, 8]);
    assert_eq!(ids(&apply_filter(&all, FilterSelector::Hard)), vec![5, 7]);
    assert_eq!(
        ids(&filter_by_difficulty(&all, Difficulty::Hard)),
        ids(&apply_filter(&all, FilterSelector::Hard))
    );
}

#[test]
fn test_quick_filter_includes_threshold() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();

    // Beef Stir-Fry takes exactly 30 minutes
    let quick = apply_filter(&all, FilterSelector::Quick);
    assert_eq!(ids(&quick), vec![1, 2, 3, 6, 8]);
    assert_eq!(ids(&filter_by_time(&all, 29)), vec![1, 2, 6, 8]);
}

#[test]
fn test_quick_then_time_sort_is_stable() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();

    let quick = apply_sort(&apply_filter(&all, FilterSelector::Quick), SortSelector::Time);
    assert_eq!(ids(&quick), vec![6, 1, 2, 8, 3]);

    let view = apply_sort(&filter_by_time(&all, 25), SortSelector::Time);
    assert_eq!(
        titles(&view),
        vec![
            "Quick Avocado Toast",
            "Classic Spaghetti Carbonara",
            "Chocolate Chip Cookies",
            "Quinoa Buddha Bowl",
        ]
    );
}

#[test]
fn test_sort_by_name() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();

    let sorted = apply_sort(&all, SortSelector::Name);
    assert_eq!(
        titles(&sorted),
        vec![
            "Beef Stir-Fry",
            "Chocolate Chip Cookies",
            "Classic Spaghetti Carbonara",
            "Coq au Vin",
            "Homemade Pizza",
            "Quick Avocado Toast",
            "Quinoa Buddha Bowl",
            "Thai Green Curry",
        ]
    );
    // source order is untouched
    assert_eq!(recipes[0].title, "Classic Spaghetti Carbonara");
}

#[test]
fn test_sort_none_is_identity() {
    let recipes = catalog::recipes();
    let all: Vec<&Recipe> = recipes.iter().collect();
    assert_eq!(ids(&apply_sort(&all, SortSelector::None)), ids(&all));
}

#[test]
fn test_sorts_are_stable_on_equal_keys() {
    let recipes = vec![
        make_recipe(1, "soup", 10),
        make_recipe(2, "Salad", 5),
        make_recipe(3, "soup", 5),
        make_recipe(4, "Bread", 10),
        make_recipe(5, "soup", 10),
    ];
    let all: Vec<&Recipe> = recipes.iter().collect();

    let by_time = apply_sort(&all, SortSelector::Time);
    assert_eq!(ids(&by_time), vec![2, 3, 1, 4, 5]);

    let by_name = apply_sort(&all, SortSelector::Name);
    assert_eq!(ids(&by_name), vec![4, 2, 1, 3, 5]);
    assert_eq!(by_name.len(), all.len());
}

#[test]
fn test_compare_titles_ignores_case() {
    assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_titles("Éclair", "éclair"), Ordering::Less);
    assert_eq!(compare_titles("Coq au Vin", "Coq au Vin"), Ordering::Equal);
}

#[test]
fn test_compare_titles_folds_accents() {
    assert_eq!(compare_titles("Éclair", "Zucchini Bread"), Ordering::Less);
    assert_eq!(compare_titles("Éclair", "Ezra"), Ordering::Less);
    assert_eq!(compare_titles("Eclairs", "Ezra"), Ordering::Less);
    // unaccented form first when base letters tie
    assert_eq!(compare_titles("Eclair", "Éclair"), Ordering::Less);
    assert_eq!(compare_titles("crème brûlée", "Creme Caramel"), Ordering::Less);
}

#[test]
fn test_sort_by_name_places_accented_titles_with_base_letter() {
    let recipes = vec![
        make_recipe(1, "Zucchini Bread", 50),
        make_recipe(2, "Éclair", 90),
        make_recipe(3, "Apple Pie", 70),
        make_recipe(4, "Ezra's Stew", 60),
    ];
    let all: Vec<&Recipe> = recipes.iter().collect();

    let sorted = apply_sort(&all, SortSelector::Name);
    assert_eq!(ids(&sorted), vec![3, 2, 4, 1]);
}

#[test]
fn test_empty_input_everywhere() {
    let empty: Vec<&Recipe> = vec![];
    for selector in FilterSelector::ALL {
        assert!(apply_filter(&empty, selector).is_empty());
    }
    for selector in SortSelector::ALL {
        assert!(apply_sort(&empty, selector).is_empty());
    }
}
