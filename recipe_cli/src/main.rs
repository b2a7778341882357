use clap::{Parser, Subcommand};
use recipe_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Query and plan meals from a recipe catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load recipes from a JSON array or JSON Lines file
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Seed for random suggestions and menu plans
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe
    List,

    /// Show one recipe in full
    Show { id: RecipeId },

    /// Recipes matching all given dietary tags
    Suggest {
        /// Dietary tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Recipes of a cuisine (case-sensitive)
    Cuisine { cuisine: String },

    /// Recipes of a difficulty (easy, medium, hard)
    Difficulty { level: Difficulty },

    /// Recipes using an ingredient
    Ingredient { name: String },

    /// Recipes whose name contains the text (case-insensitive)
    Search { text: String },

    /// Pick a random recipe
    Random,

    /// Plan a menu of random recipes
    Menu {
        /// Number of days (defaults to config menu.default_days)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Total ingredient cost of a recipe
    Cost { id: RecipeId },

    /// Nutritional values of a recipe
    Nutrition { id: RecipeId },

    /// Top rated recipe ids
    Top {
        /// How many ids to return
        #[arg(short, default_value_t = 3)]
        n: usize,

        /// Rating to apply first, as ID=SCORE (repeatable)
        #[arg(long = "rate", value_parser = parse_rating)]
        ratings: Vec<(RecipeId, f64)>,
    },

    /// Review and favorite statistics
    Stats {
        /// Rating to apply first, as ID=SCORE (repeatable)
        #[arg(long = "rate", value_parser = parse_rating)]
        ratings: Vec<(RecipeId, f64)>,

        /// Recipe id to mark as favorite (repeatable)
        #[arg(long = "favorite")]
        favorites: Vec<RecipeId>,
    },

    /// Check recipe records for missing or inconsistent fields
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match config.logging.level.as_deref() {
        Some(level) => recipe_core::logging::init_with_level(level),
        None => recipe_core::logging::init(),
    }

    if let Some(path) = cli.recipes.clone() {
        config.catalog.recipes_file = Some(path);
    }
    if let Some(seed) = cli.seed {
        config.catalog.rng_seed = Some(seed);
    }

    let mut catalog = config.build_catalog()?;
    tracing::debug!("Catalog ready with {} recipes", catalog.len());

    let json = cli.json;
    match cli.command {
        Commands::List => print_recipes(&catalog.recipes().collect::<Vec<_>>(), json),
        Commands::Show { id } => {
            let recipe = catalog.get_recipe_details(id).ok_or(Error::NotFound(id))?;
            print_recipe_detail(recipe, json)
        }
        Commands::Suggest { tags } => print_recipes(&catalog.suggest_recipes(&tags), json),
        Commands::Cuisine { cuisine } => {
            print_recipes(&catalog.search_by_cuisine(&cuisine), json)
        }
        Commands::Difficulty { level } => {
            print_recipes(&catalog.filter_by_difficulty(level), json)
        }
        Commands::Ingredient { name } => {
            print_recipes(&catalog.find_recipe_by_ingredient(&name), json)
        }
        Commands::Search { text } => print_recipes(&catalog.find_recipe_by_name(&text), json),
        Commands::Random => {
            let recipe = catalog.suggest_random_recipe()?;
            print_recipe_detail(recipe, json)
        }
        Commands::Menu { days } => {
            let days = days.unwrap_or(config.menu.default_days) as usize;
            let plan = catalog.create_menu_plan(days)?;
            cmd_menu(&plan, json)
        }
        Commands::Cost { id } => {
            let cost = catalog.calculate_recipe_cost(id)?;
            if json {
                println!("{}", serde_json::json!({ "id": id, "cost": cost }));
            } else {
                println!("{:.2}", cost);
            }
            Ok(())
        }
        Commands::Nutrition { id } => {
            let info = catalog.calculate_nutritional_info(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if info.is_empty() {
                println!("No nutritional info for recipe {}", id);
            } else {
                for (nutrient, value) in &info {
                    println!("  {}: {}", nutrient, value);
                }
            }
            Ok(())
        }
        Commands::Top { n, ratings } => {
            apply_ratings(&mut catalog, &ratings);
            let top = catalog.get_top_rated_recipes(n);
            if json {
                println!("{}", serde_json::to_string(&top)?);
            } else {
                for id in top {
                    let name = catalog
                        .get_recipe_details(id)
                        .map(|r| r.name.as_str())
                        .unwrap_or_default();
                    println!("{:>4}  {}", id, name);
                }
            }
            Ok(())
        }
        Commands::Stats { ratings, favorites } => {
            apply_ratings(&mut catalog, &ratings);
            for id in favorites {
                catalog.save_recipe(id);
            }
            cmd_stats(&catalog.get_recipe_statistics(), json)
        }
        Commands::Validate => cmd_validate(&catalog),
    }
}

fn parse_rating(s: &str) -> std::result::Result<(RecipeId, f64), String> {
    let (id, score) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=SCORE, got '{}'", s))?;
    let id = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid recipe id '{}': {}", id, e))?;
    let score = score
        .trim()
        .parse()
        .map_err(|e| format!("invalid score '{}': {}", score, e))?;
    Ok((id, score))
}

fn apply_ratings(catalog: &mut RecipeCatalog, ratings: &[(RecipeId, f64)]) {
    for &(id, score) in ratings {
        catalog.rate_recipe(id, score);
    }
}

fn print_recipes(recipes: &[&Recipe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No matching recipes.");
    }
    for recipe in recipes {
        println!("{}", summary_line(recipe));
    }
    Ok(())
}

fn summary_line(recipe: &Recipe) -> String {
    let mut line = format!("{:>4}  {}", recipe.id, recipe.name);
    if let Some(cuisine) = &recipe.cuisine {
        line.push_str(&format!(" [{}]", cuisine));
    }
    if let Some(difficulty) = recipe.difficulty {
        line.push_str(&format!(" ({})", difficulty));
    }
    line
}

fn print_recipe_detail(recipe: &Recipe, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
        return Ok(());
    }

    println!("{}", recipe.name);
    println!("  Id: {}", recipe.id);
    if let Some(cuisine) = &recipe.cuisine {
        println!("  Cuisine: {}", cuisine);
    }
    if let Some(difficulty) = recipe.difficulty {
        println!("  Difficulty: {}", difficulty);
    }
    if !recipe.dietary_info.is_empty() {
        println!("  Dietary: {}", recipe.dietary_info.join(", "));
    }
    if !recipe.ingredients.is_empty() {
        println!("  Ingredients:");
        for ingredient in &recipe.ingredients {
            let quantity = ingredient.quantity.as_deref().unwrap_or("-");
            match ingredient.cost {
                Some(cost) => println!("    - {} {} ({:.2})", quantity, ingredient.name, cost),
                None => println!("    - {} {}", quantity, ingredient.name),
            }
        }
    }
    if let Some(info) = &recipe.nutritional_info {
        println!("  Nutrition:");
        for (nutrient, value) in info {
            println!("    {}: {}", nutrient, value);
        }
    }
    Ok(())
}

fn cmd_menu(plan: &[&Recipe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    for (day, recipe) in plan.iter().enumerate() {
        println!("Day {}: {}", day + 1, summary_line(recipe).trim_start());
    }
    Ok(())
}

fn cmd_stats(stats: &RecipeStatistics, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Favorites: {}", stats.number_of_favorites);
    if stats.average_rating.is_empty() {
        println!("No reviews recorded.");
    }
    for (id, average) in &stats.average_rating {
        let count = stats.number_of_reviews.get(id).copied().unwrap_or(0);
        println!("{:>4}  avg {:.2} over {} rating(s)", id, average, count);
    }
    Ok(())
}

fn cmd_validate(catalog: &RecipeCatalog) -> Result<()> {
    let errors = catalog.validate();
    if errors.is_empty() {
        println!("✓ {} recipes OK", catalog.len());
        return Ok(());
    }

    eprintln!("Recipe validation errors:");
    for error in &errors {
        eprintln!("  - {}", error);
    }
    Err(Error::Validation(format!(
        "{} problem(s) found",
        errors.len()
    )))
}
