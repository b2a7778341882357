//! Core domain types for the recipe catalog.
//!
//! This module defines the records the catalog stores and returns:
//! - Recipes and their ingredients
//! - Review entries (rating-only or comment-only)
//! - Aggregate statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique recipe identifier
pub type RecipeId = u64;

// ============================================================================
// Recipe Types
// ============================================================================

/// How hard a recipe is to prepare
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Easy,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "hard")]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// A single ingredient line of a recipe
///
/// `cost` is optional so that incomplete records can still be stored;
/// cost calculation rejects them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity.into()),
            cost: Some(cost),
        }
    }
}

/// A recipe record
///
/// Only `id` and `name` are required when deserializing. Collections fall
/// back to empty; `cuisine` and `difficulty` stay `None` when absent so that
/// no query matches a value the record never had.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<BTreeMap<String, f64>>,
}

impl Recipe {
    /// Create a bare recipe with only an id and a name
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dietary_info: Vec::new(),
            cuisine: None,
            ingredients: Vec::new(),
            difficulty: None,
            nutritional_info: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_dietary_info<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_info = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_nutrient(mut self, nutrient: impl Into<String>, value: f64) -> Self {
        self.nutritional_info
            .get_or_insert_with(BTreeMap::new)
            .insert(nutrient.into(), value);
        self
    }

    /// True when every tag in `tags` appears in `dietary_info`
    pub fn satisfies_all(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.dietary_info.contains(tag))
    }
}

// ============================================================================
// Review Types
// ============================================================================

/// Content of a review entry; an entry carries a rating or a comment, never both
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewBody {
    Rating(f64),
    Comment(String),
}

/// A single review entry attached to a recipe
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub recipe_id: RecipeId,
    pub submitted_at: DateTime<Utc>,
    pub body: ReviewBody,
}

impl Review {
    pub fn rating(recipe_id: RecipeId, rating: f64) -> Self {
        Self::with_body(recipe_id, ReviewBody::Rating(rating))
    }

    pub fn comment(recipe_id: RecipeId, text: impl Into<String>) -> Self {
        Self::with_body(recipe_id, ReviewBody::Comment(text.into()))
    }

    fn with_body(recipe_id: RecipeId, body: ReviewBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            submitted_at: Utc::now(),
            body,
        }
    }

    /// The rating carried by this entry, if it is a rating entry
    pub fn rating_value(&self) -> Option<f64> {
        match self.body {
            ReviewBody::Rating(r) => Some(r),
            ReviewBody::Comment(_) => None,
        }
    }

    /// The comment text carried by this entry, if it is a comment entry
    pub fn comment_text(&self) -> Option<&str> {
        match &self.body {
            ReviewBody::Comment(text) => Some(text),
            ReviewBody::Rating(_) => None,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Aggregate review and favorite statistics
///
/// Only recipes with at least one review entry appear in the maps.
/// `number_of_reviews` counts rating entries.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct RecipeStatistics {
    pub average_rating: BTreeMap<RecipeId, f64>,
    pub number_of_reviews: BTreeMap<RecipeId, usize>,
    pub number_of_favorites: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_with_defaults() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 3, "name": "Veggie Salad"}"#).unwrap();
        assert_eq!(recipe.id, 3);
        assert!(recipe.dietary_info.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.cuisine, None);
        assert_eq!(recipe.difficulty, None);
        assert!(recipe.nutritional_info.is_none());
    }

    #[test]
    fn test_full_recipe_record() {
        let json = r#"{
            "id": 1,
            "name": "Spaghetti Carbonara",
            "dietary_info": ["gluten-free"],
            "cuisine": "Italian",
            "ingredients": [{"name": "pasta", "quantity": "200g", "cost": 2.0}],
            "difficulty": "Easy",
            "nutritional_info": {"calories": 500}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.ingredients[0].cost, Some(2.0));
        assert_eq!(recipe.difficulty, Some(Difficulty::Easy));
        assert_eq!(recipe.cuisine.as_deref(), Some("Italian"));
        assert_eq!(recipe.nutritional_info.unwrap()["calories"], 500.0);
    }

    #[test]
    fn test_ingredient_without_cost() {
        let ingredient: Ingredient = serde_json::from_str(r#"{"name": "salt"}"#).unwrap();
        assert_eq!(ingredient.cost, None);
        assert_eq!(ingredient.quantity, None);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());

        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }

    #[test]
    fn test_satisfies_all_is_vacuous_for_empty_tags() {
        let recipe = Recipe::new(1, "Toast");
        assert!(recipe.satisfies_all(&[]));
        assert!(!recipe.satisfies_all(&["vegan".to_string()]));
    }

    #[test]
    fn test_review_entries_carry_one_kind() {
        let rating = Review::rating(1, 4.0);
        assert_eq!(rating.rating_value(), Some(4.0));
        assert_eq!(rating.comment_text(), None);

        let comment = Review::comment(1, "Delicious!");
        assert_eq!(comment.rating_value(), None);
        assert_eq!(comment.comment_text(), Some("Delicious!"));
    }
}
