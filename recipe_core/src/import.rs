//! Loading recipe records from files.
//!
//! Two formats are accepted:
//! - `.jsonl`: one recipe per line (JSON Lines); unparseable lines are skipped
//! - anything else: a single JSON array of recipes
//!
//! This is host-side input only; the catalog itself is never written back.

use crate::{Recipe, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read recipe records from `path`
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let is_jsonl = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    let recipes = if is_jsonl {
        read_jsonl(path)?
    } else {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))?
    };

    tracing::info!("Loaded {} recipes from {:?}", recipes.len(), path);
    Ok(recipes)
}

fn read_jsonl(path: &Path) -> Result<Vec<Recipe>> {
    let reader = BufReader::new(File::open(path)?);
    let mut recipes = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Recipe>(&line) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => {
                tracing::warn!("Failed to parse recipe at line {}: {}", line_num + 1, e);
            }
        }
    }

    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample_recipes, Error};

    #[test]
    fn test_load_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("recipes.json");
        std::fs::write(&path, serde_json::to_string(sample_recipes()).unwrap()).unwrap();

        let recipes = load_recipes(&path).unwrap();
        assert_eq!(recipes, sample_recipes());
    }

    #[test]
    fn test_load_jsonl_skips_bad_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("recipes.jsonl");
        let contents = r#"{"id": 1, "name": "Spaghetti Carbonara", "cuisine": "Italian"}

{ not json }
{"id": 2, "name": "Chicken Stir-Fry"}
"#;
        std::fs::write(&path, contents).unwrap();

        let recipes = load_recipes(&path).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].cuisine.as_deref(), Some("Italian"));
        assert_eq!(recipes[1].id, 2);
    }

    #[test]
    fn test_malformed_json_array_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("recipes.json");
        std::fs::write(&path, r#"[{"name": "no id"}]"#).unwrap();

        assert!(matches!(load_recipes(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert!(matches!(load_recipes(&path), Err(Error::Io(_))));
    }
}
