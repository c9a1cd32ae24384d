//! Catalog maintenance tasks for the object factory
//!
//! Usage:
//!   cargo xtask export-catalog [--plain] [--out PATH]   # Write the built-in recipes to disk
//!   cargo xtask check-catalog PATH                      # Load and validate a catalog file
//!   cargo xtask list-types                              # Print every object type and its category

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use object_factory::object::ObjectType;
use object_factory::recipe::{load_catalog, save_catalog, save_catalog_plain, Catalog};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Catalog maintenance for the object factory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in recipe catalog to a file
    ExportCatalog {
        /// Write plain RON instead of brotli-compressed
        #[arg(long)]
        plain: bool,
        /// Output path, relative to the project root
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load a catalog file and report whether it is valid
    CheckCatalog {
        path: PathBuf,
    },
    /// Print every object type with its category
    ListTypes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ExportCatalog { plain, out } => export_catalog(plain, out),
        Commands::CheckCatalog { path } => check_catalog(&path),
        Commands::ListTypes => list_types(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn export_catalog(plain: bool, out: Option<PathBuf>) -> Result<()> {
    let root = project_root()?;
    let default_name = if plain { "catalog.ron" } else { "catalog.ron.br" };
    let path = root.join(out.unwrap_or_else(|| PathBuf::from("assets").join(default_name)));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let catalog = Catalog::standard();
    let written = if plain {
        save_catalog_plain(catalog, &path)
    } else {
        save_catalog(catalog, &path)
    };
    written.with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {} recipes to {}", catalog.len(), path.display());
    Ok(())
}

fn check_catalog(path: &Path) -> Result<()> {
    let catalog = load_catalog(path).with_context(|| format!("Failed to load {}", path.display()))?;
    catalog
        .validate()
        .with_context(|| format!("{} failed validation", path.display()))?;

    let missing: Vec<ObjectType> = ObjectType::ALL
        .iter()
        .copied()
        .filter(|t| t.is_buildable() && !catalog.contains(*t))
        .collect();

    println!("{}: {} recipes, valid", path.display(), catalog.len());
    if !missing.is_empty() {
        println!("Not covered (built-in recipes apply): {:?}", missing);
    }
    Ok(())
}

fn list_types() -> Result<()> {
    for object_type in ObjectType::ALL {
        match object_type.category() {
            Some(category) => println!("{:<16} {:?}", object_type.key(), category),
            None => println!("{:<16} -", object_type.key()),
        }
    }
    Ok(())
}
