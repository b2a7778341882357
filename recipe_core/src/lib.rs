#![forbid(unsafe_code)]

//! Core domain model and operations for the recipe catalog.
//!
//! This crate provides:
//! - Domain types (recipes, ingredients, reviews, statistics)
//! - The in-memory `RecipeCatalog` with query, rating, favorites and shopping list operations
//! - A lock-guarded handle for multi-threaded hosts
//! - Sample recipes, recipe file import, configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod shared;
pub mod sample;
pub mod import;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::RecipeCatalog;
pub use shared::SharedCatalog;
pub use sample::{build_sample_catalog, sample_recipes};
pub use import::load_recipes;
pub use config::Config;
