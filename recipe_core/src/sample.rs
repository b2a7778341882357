//! Built-in sample recipes.
//!
//! Used by the CLI when no recipe file is configured, and by tests.

use crate::types::*;
use crate::RecipeCatalog;
use once_cell::sync::Lazy;

/// Cached sample recipes - built once and reused
static SAMPLE_RECIPES: Lazy<Vec<Recipe>> = Lazy::new(build_sample_recipes);

/// Get a reference to the cached sample recipes, in ascending id order
pub fn sample_recipes() -> &'static [Recipe] {
    &SAMPLE_RECIPES
}

/// Build a catalog pre-loaded with the sample recipes
pub fn build_sample_catalog() -> RecipeCatalog {
    let mut catalog = RecipeCatalog::new();
    catalog.extend(sample_recipes().iter().cloned());
    catalog
}

fn build_sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Spaghetti Carbonara")
            .with_dietary_info(["gluten-free"])
            .with_cuisine("Italian")
            .with_ingredient(Ingredient::new("pasta", "200g", 2.0))
            .with_difficulty(Difficulty::Easy)
            .with_nutrient("calories", 500.0),
        Recipe::new(2, "Chicken Stir-Fry")
            .with_dietary_info(["gluten-free", "low-calorie"])
            .with_cuisine("Chinese")
            .with_ingredient(Ingredient::new("chicken", "300g", 5.0))
            .with_difficulty(Difficulty::Medium)
            .with_nutrient("calories", 350.0),
        Recipe::new(3, "Veggie Salad")
            .with_dietary_info(["vegan", "gluten-free", "low-calorie"])
            .with_cuisine("Mediterranean")
            .with_ingredient(Ingredient::new("lettuce", "1 head", 1.5))
            .with_ingredient(Ingredient::new("tomato", "2", 1.0))
            .with_ingredient(Ingredient::new("olive oil", "2 tbsp", 0.5))
            .with_difficulty(Difficulty::Easy)
            .with_nutrient("calories", 180.0)
            .with_nutrient("fiber", 6.0),
        Recipe::new(4, "Beef Wellington")
            .with_cuisine("British")
            .with_ingredient(Ingredient::new("beef fillet", "800g", 24.0))
            .with_ingredient(Ingredient::new("puff pastry", "500g", 3.0))
            .with_ingredient(Ingredient::new("mushrooms", "250g", 2.5))
            .with_difficulty(Difficulty::Hard)
            .with_nutrient("calories", 720.0)
            .with_nutrient("protein", 45.0),
        Recipe::new(5, "Chana Masala")
            .with_dietary_info(["vegan", "gluten-free"])
            .with_cuisine("Indian")
            .with_ingredient(Ingredient::new("chickpeas", "400g", 1.2))
            .with_ingredient(Ingredient::new("tomato", "3", 1.5))
            .with_ingredient(Ingredient::new("onion", "1", 0.4))
            .with_difficulty(Difficulty::Medium)
            .with_nutrient("calories", 420.0),
    ]
}
