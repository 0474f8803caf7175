mod config;

use aisleplan_core::{consolidate, group_by_aisle, resolve_selection};
use aisleplan_types::catalog::{Recipe, Selection};
use aisleplan_types::list::ShoppingList;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "aisleplan",
    version,
    about = "Build aisle-ordered shopping lists from recipe selections."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Consolidate a recipe selection into shopping-list artifacts.
    Build(BuildArgs),
    /// Load the data file and report problems without writing anything.
    Check(CheckArgs),
    /// List catalog aisles in store-walk order.
    Aisles(AislesArgs),
}

#[derive(Debug, Parser)]
struct BuildArgs {
    /// Catalog + recipes JSON file.
    #[arg(long, default_value = "aisleplan.json")]
    data: Utf8PathBuf,

    /// Output directory (default: ./lists, or [output].dir from aisleplan.toml).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Recipe to include, as NAME or NAME=MULTIPLIER. Repeatable.
    /// Overrides the [selection] list from aisleplan.toml when given.
    #[arg(long = "recipe")]
    recipes: Vec<String>,

    /// Identifier baked into the HTML export (default: today's date).
    #[arg(long)]
    list_id: Option<String>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Catalog + recipes JSON file.
    #[arg(long, default_value = "aisleplan.json")]
    data: Utf8PathBuf,
}

#[derive(Debug, Parser)]
struct AislesArgs {
    /// Catalog + recipes JSON file.
    #[arg(long, default_value = "aisleplan.json")]
    data: Utf8PathBuf,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Check(args) => cmd_check(args),
        Command::Aisles(args) => cmd_aisles(args),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let dataset = aisleplan_import::load_dataset(&args.data)
        .with_context(|| format!("load data from {}", args.data))?;

    let data_dir = args.data.parent().unwrap_or(Utf8Path::new("."));
    let file_config = config::load_or_default(data_dir).context("load aisleplan.toml config")?;
    let merged = file_config.merge_build_args(args.out_dir, &args.recipes);

    anyhow::ensure!(
        !merged.recipes.is_empty(),
        "no recipes selected; pass --recipe or set [selection].recipes in aisleplan.toml"
    );

    let selection = config::parse_recipe_specs(&merged.recipes)?;
    let selection = resolve_recipe_names(&dataset.recipes, selection)?;
    debug!(recipes = selection.entries.len(), "selection resolved");

    let lines = resolve_selection(&dataset.catalog, &dataset.recipes, &selection)
        .context("resolve selection")?;
    let consolidated = consolidate(&lines);
    let sections = group_by_aisle(&consolidated);

    let now = Utc::now();
    let list_id = args
        .list_id
        .unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    let list = ShoppingList::new(consolidated, Some(now));

    fs::create_dir_all(&merged.out_dir)
        .with_context(|| format!("create {}", merged.out_dir))?;

    write_json(&merged.out_dir.join("list.json"), &list)?;
    fs::write(
        merged.out_dir.join("list.md"),
        aisleplan_render::render_list_md(&list, &sections),
    )?;
    fs::write(
        merged.out_dir.join(format!("shopping-list-{list_id}.html")),
        aisleplan_render::render_list_html(&list_id, &sections),
    )?;

    info!(
        lines = list.summary.lines_total,
        aisles = list.summary.aisles_total,
        "wrote shopping list to {}",
        merged.out_dir
    );
    println!(
        "{} lines across {} aisles -> {}",
        list.summary.lines_total, list.summary.aisles_total, merged.out_dir
    );
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let dataset = aisleplan_import::load_dataset(&args.data)
        .with_context(|| format!("load data from {}", args.data))?;

    // Resolving every recipe at once exercises all ingredient and aisle
    // references.
    let everything = Selection {
        entries: dataset
            .recipes
            .iter()
            .map(|r| aisleplan_types::catalog::SelectionEntry {
                recipe_id: r.id.clone(),
                multiplier: 1.0,
            })
            .collect(),
    };
    resolve_selection(&dataset.catalog, &dataset.recipes, &everything)
        .context("dangling reference in recipes")?;

    for ingredient in &dataset.catalog.ingredients {
        anyhow::ensure!(
            dataset.catalog.unit(&ingredient.unit_id).is_some(),
            "ingredient '{}' references unknown unit id '{}'",
            ingredient.name,
            ingredient.unit_id
        );
    }

    println!(
        "ok: {} aisles, {} ingredients, {} recipes",
        dataset.catalog.aisles.len(),
        dataset.catalog.ingredients.len(),
        dataset.recipes.len()
    );
    Ok(())
}

fn cmd_aisles(args: AislesArgs) -> anyhow::Result<()> {
    let dataset = aisleplan_import::load_dataset(&args.data)
        .with_context(|| format!("load data from {}", args.data))?;
    let aisles = dataset.catalog.aisles_in_walk_order();

    match args.format {
        OutputFormat::Text => {
            println!("  {:<6} NAME", "ORDER");
            for aisle in aisles {
                println!("  {:<6} {}", aisle.sort_order, aisle.name);
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = aisles
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name,
                        "sort_order": a.sort_order,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Map selection entries given as recipe names onto recipe ids.
///
/// An entry that matches a recipe id verbatim is kept; otherwise it is
/// matched against recipe names case-insensitively.
fn resolve_recipe_names(recipes: &[Recipe], selection: Selection) -> anyhow::Result<Selection> {
    let mut entries = Vec::with_capacity(selection.entries.len());
    for mut entry in selection.entries {
        if recipes.iter().any(|r| r.id == entry.recipe_id) {
            entries.push(entry);
            continue;
        }

        let wanted = entry.recipe_id.to_lowercase();
        match recipes.iter().find(|r| r.name.to_lowercase() == wanted) {
            Some(recipe) => {
                entry.recipe_id = recipe.id.clone();
                entries.push(entry);
            }
            None => {
                let available: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
                anyhow::bail!(
                    "unknown recipe '{}'; available: {}",
                    entry.recipe_id,
                    available.join(", ")
                );
            }
        }
    }
    Ok(Selection { entries })
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aisleplan_types::catalog::SelectionEntry;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            total_minutes: 0,
            notes: None,
            ingredients: vec![],
        }
    }

    #[test]
    fn recipe_names_resolve_by_id_or_name() {
        let recipes = vec![recipe("baked beans", "Baked beans")];

        let by_id = resolve_recipe_names(&recipes, Selection::single("baked beans")).unwrap();
        assert_eq!(by_id.entries[0].recipe_id, "baked beans");

        let by_name = resolve_recipe_names(&recipes, Selection::single("BAKED BEANS")).unwrap();
        assert_eq!(by_name.entries[0].recipe_id, "baked beans");
    }

    #[test]
    fn unknown_recipe_name_lists_available() {
        let recipes = vec![recipe("pie", "Pie")];
        let err = resolve_recipe_names(&recipes, Selection::single("soup")).unwrap_err();
        assert!(err.to_string().contains("available: Pie"));
    }

    #[test]
    fn multiplier_survives_name_resolution() {
        let recipes = vec![recipe("pie", "Pie")];
        let selection = Selection {
            entries: vec![SelectionEntry {
                recipe_id: "pie".to_string(),
                multiplier: 3.0,
            }],
        };
        let resolved = resolve_recipe_names(&recipes, selection).unwrap();
        assert_eq!(resolved.entries[0].multiplier, 3.0);
    }
}
