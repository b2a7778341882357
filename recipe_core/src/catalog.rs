//! In-memory recipe catalog.
//!
//! The catalog owns every piece of state: the recipe records, the review
//! entries per recipe, the favorites set and the shopping list. All
//! operations are synchronous and complete in a single step.
//!
//! Mutating calls on unknown recipe ids are ignored rather than rejected.
//! Computations that need an existing recipe (nutrition, cost) return
//! `Error::NotFound` instead.

use crate::{Error, RecipeId, Recipe, RecipeStatistics, Result, Review};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

/// Recipe store plus reviews, favorites and shopping list
///
/// Recipes are kept ordered by id, so every list-returning query yields
/// results in ascending id order.
#[derive(Debug)]
pub struct RecipeCatalog {
    recipes: BTreeMap<RecipeId, Recipe>,
    reviews: BTreeMap<RecipeId, Vec<Review>>,
    favorites: BTreeSet<RecipeId>,
    shopping_list: Vec<String>,
    rng: StdRng,
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCatalog {
    /// Create an empty catalog whose random source is seeded from entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty catalog with a deterministic random source
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an empty catalog drawing random selections from `rng`
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            recipes: BTreeMap::new(),
            reviews: BTreeMap::new(),
            favorites: BTreeSet::new(),
            shopping_list: Vec::new(),
            rng,
        }
    }

    // ========================================================================
    // Recipe records
    // ========================================================================

    /// Insert a recipe, replacing any existing record with the same id
    pub fn add_recipe(&mut self, recipe: Recipe) {
        let id = recipe.id;
        if self.recipes.insert(id, recipe).is_some() {
            tracing::debug!("Replaced recipe {}", id);
        } else {
            tracing::debug!("Added recipe {}", id);
        }
    }

    /// Add every recipe from `recipes`
    pub fn extend<I>(&mut self, recipes: I)
    where
        I: IntoIterator<Item = Recipe>,
    {
        for recipe in recipes {
            self.add_recipe(recipe);
        }
    }

    pub fn get_recipe_details(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    /// Replace the record stored under `id`; ignored if `id` is unknown
    ///
    /// The new record's own `id` field is stored as given and not checked
    /// against the key.
    pub fn update_recipe(&mut self, id: RecipeId, recipe: Recipe) {
        match self.recipes.get_mut(&id) {
            Some(slot) => {
                *slot = recipe;
                tracing::debug!("Updated recipe {}", id);
            }
            None => tracing::debug!("Ignoring update for unknown recipe {}", id),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipes in ascending id order
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    fn filter<F>(&self, predicate: F) -> Vec<&Recipe>
    where
        F: Fn(&Recipe) -> bool,
    {
        self.recipes.values().filter(|r| predicate(r)).collect()
    }

    /// Recipes whose dietary tags include every tag in `preferences`
    ///
    /// An empty preference list matches every recipe.
    pub fn suggest_recipes(&self, preferences: &[String]) -> Vec<&Recipe> {
        self.filter(|r| r.satisfies_all(preferences))
    }

    /// Exact, case-sensitive match on cuisine
    ///
    /// Recipes without a cuisine never match, not even `""`.
    pub fn search_by_cuisine(&self, cuisine: &str) -> Vec<&Recipe> {
        self.filter(|r| r.cuisine.as_deref() == Some(cuisine))
    }

    /// Recipes without a difficulty never match
    pub fn filter_by_difficulty(&self, level: crate::Difficulty) -> Vec<&Recipe> {
        self.filter(|r| r.difficulty == Some(level))
    }

    /// Recipes with an ingredient whose name equals `name` exactly
    pub fn find_recipe_by_ingredient(&self, name: &str) -> Vec<&Recipe> {
        self.filter(|r| r.ingredients.iter().any(|i| i.name == name))
    }

    /// Case-insensitive substring match on the recipe name
    pub fn find_recipe_by_name(&self, text: &str) -> Vec<&Recipe> {
        let needle = text.to_lowercase();
        self.filter(|r| r.name.to_lowercase().contains(&needle))
    }

    // ========================================================================
    // Reviews and ratings
    // ========================================================================

    fn push_review(&mut self, review: Review) {
        let id = review.recipe_id;
        if !self.recipes.contains_key(&id) {
            tracing::debug!("Ignoring review for unknown recipe {}", id);
            return;
        }
        tracing::debug!("Recorded {:?} for recipe {}", review.body, id);
        self.reviews.entry(id).or_default().push(review);
    }

    /// Record a rating entry; no bounds are enforced on `rating`
    ///
    /// A NaN rating makes the recipe's mean NaN, which ranks above every
    /// real score in `get_top_rated_recipes`.
    pub fn rate_recipe(&mut self, id: RecipeId, rating: f64) {
        self.push_review(Review::rating(id, rating));
    }

    /// Record a text-only review entry
    pub fn review_recipe(&mut self, id: RecipeId, text: impl Into<String>) {
        self.push_review(Review::comment(id, text));
    }

    /// Review entries for `id` in submission order, empty if none
    pub fn get_recipe_reviews(&self, id: RecipeId) -> &[Review] {
        self.reviews.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of all recipes ranked by mean rating, highest first
    ///
    /// Unrated recipes score 0. Ties go to the lower id.
    pub fn get_top_rated_recipes(&self, n: usize) -> Vec<RecipeId> {
        let mut scored: Vec<(RecipeId, f64)> = self
            .recipes
            .keys()
            .map(|&id| {
                let score = mean_rating(self.get_recipe_reviews(id)).unwrap_or(0.0);
                (id, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        scored.into_iter().take(n).map(|(id, _)| id).collect()
    }

    /// Rating averages and counts for every recipe with review activity
    pub fn get_recipe_statistics(&self) -> RecipeStatistics {
        let mut stats = RecipeStatistics {
            number_of_favorites: self.favorites.len(),
            ..Default::default()
        };

        for (&id, reviews) in &self.reviews {
            if reviews.is_empty() {
                continue;
            }
            let rating_count = reviews.iter().filter_map(Review::rating_value).count();
            stats
                .average_rating
                .insert(id, mean_rating(reviews).unwrap_or(0.0));
            stats.number_of_reviews.insert(id, rating_count);
        }

        stats
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Mark a recipe as favorite; ignored if `id` is unknown
    pub fn save_recipe(&mut self, id: RecipeId) {
        if self.recipes.contains_key(&id) {
            self.favorites.insert(id);
            tracing::debug!("Saved recipe {} to favorites", id);
        } else {
            tracing::debug!("Ignoring favorite for unknown recipe {}", id);
        }
    }

    pub fn remove_from_favorites(&mut self, id: RecipeId) {
        if self.favorites.remove(&id) {
            tracing::debug!("Removed recipe {} from favorites", id);
        }
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorite ids in ascending order
    pub fn favorites(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.favorites.iter().copied()
    }

    /// Current records of all favorited recipes
    pub fn get_favorite_recipes(&self) -> Vec<&Recipe> {
        self.favorites
            .iter()
            .filter_map(|id| self.recipes.get(id))
            .collect()
    }

    // ========================================================================
    // Random selection
    // ========================================================================

    fn draw_id(&mut self) -> Result<RecipeId> {
        if self.recipes.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let index = self.rng.gen_range(0..self.recipes.len());
        self.recipes
            .keys()
            .nth(index)
            .copied()
            .ok_or(Error::EmptyCatalog)
    }

    /// Uniformly pick one recipe from the whole catalog
    pub fn suggest_random_recipe(&mut self) -> Result<&Recipe> {
        let id = self.draw_id()?;
        self.recipes.get(&id).ok_or(Error::NotFound(id))
    }

    /// Draw `days` recipes independently, with replacement
    pub fn create_menu_plan(&mut self, days: usize) -> Result<Vec<&Recipe>> {
        let mut ids = Vec::with_capacity(days);
        for _ in 0..days {
            ids.push(self.draw_id()?);
        }
        tracing::debug!("Planned menu for {} days: {:?}", days, ids);

        ids.into_iter()
            .map(|id| self.recipes.get(&id).ok_or(Error::NotFound(id)))
            .collect()
    }

    // ========================================================================
    // Computations
    // ========================================================================

    /// Nutritional values of a recipe, empty if the record has none
    pub fn calculate_nutritional_info(
        &self,
        id: RecipeId,
    ) -> Result<BTreeMap<String, f64>> {
        let recipe = self.get_recipe_details(id).ok_or(Error::NotFound(id))?;
        Ok(recipe.nutritional_info.clone().unwrap_or_default())
    }

    /// Sum of ingredient costs
    ///
    /// Fails if any ingredient has no cost.
    pub fn calculate_recipe_cost(&self, id: RecipeId) -> Result<f64> {
        let recipe = self.get_recipe_details(id).ok_or(Error::NotFound(id))?;
        recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                ingredient.cost.ok_or_else(|| Error::MissingField {
                    recipe_id: id,
                    field: format!("ingredients[{}].cost", ingredient.name),
                })
            })
            .sum()
    }

    // ========================================================================
    // Shopping list
    // ========================================================================

    /// Append ingredient names (duplicates kept) and return the full list
    pub fn add_to_shopping_list<I, S>(&mut self, names: I) -> &[String]
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shopping_list.extend(names.into_iter().map(Into::into));
        &self.shopping_list
    }

    pub fn clear_shopping_list(&mut self) {
        self.shopping_list.clear();
    }

    pub fn shopping_list(&self) -> &[String] {
        &self.shopping_list
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Report records that later operations would trip over
    ///
    /// Nothing is rejected; returns an empty Vec if every record is well-formed.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, recipe) in &self.recipes {
            if *id != recipe.id {
                errors.push(format!(
                    "Recipe key '{}' doesn't match recipe.id '{}'",
                    id, recipe.id
                ));
            }
            if recipe.name.trim().is_empty() {
                errors.push(format!("Recipe '{}' has empty name", id));
            }
            if recipe.cuisine.is_none() {
                errors.push(format!("Recipe '{}' has no cuisine", id));
            }
            if recipe.difficulty.is_none() {
                errors.push(format!("Recipe '{}' has no difficulty", id));
            }
            for ingredient in &recipe.ingredients {
                match ingredient.cost {
                    None => errors.push(format!(
                        "Recipe '{}': ingredient '{}' has no cost",
                        id, ingredient.name
                    )),
                    Some(cost) if cost < 0.0 => errors.push(format!(
                        "Recipe '{}': ingredient '{}' has negative cost {}",
                        id, ingredient.name, cost
                    )),
                    Some(_) => {}
                }
            }
        }

        errors
    }
}

fn mean_rating(reviews: &[Review]) -> Option<f64> {
    let ratings: Vec<f64> = reviews.iter().filter_map(Review::rating_value).collect();
    if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}
