//! Command-line interface for soma.
//!
//! Provides commands for browsing, searching and auditing the built-in
//! content library, and exporting it as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config;
use crate::domain::{Category, ClinicalRelevance, ComplexityLevel, Entry};
use crate::library::{self, Catalog, FilterOptions, MatchMode};

pub mod render;

/// soma - Leveled medical education content library
#[derive(Parser, Debug)]
#[command(name = "soma")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries in the library
    List {
        /// Only entries in this category (e.g. shock, condition)
        #[arg(short, long)]
        category: Option<Category>,

        /// Maximum number of entries to show (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only published entries
        #[arg(long)]
        published: bool,
    },

    /// Search entries by free text
    Search {
        /// Search query (case-insensitive)
        query: String,

        /// Restrict to one category
        #[arg(short, long)]
        category: Option<Category>,

        /// Require a body system tag (e.g. renal)
        #[arg(short, long)]
        system: Option<String>,

        /// Require a topic tag (e.g. nutrition)
        #[arg(short, long)]
        topic: Option<String>,

        /// Require a clinical relevance (e.g. critical, common)
        #[arg(short, long)]
        relevance: Option<ClinicalRelevance>,

        /// Match each word separately instead of the whole phrase
        #[arg(long)]
        all_words: bool,

        /// Only published entries
        #[arg(long)]
        published: bool,

        /// Maximum number of results to show (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show details of an entry
    Show {
        /// Entry ID
        id: String,

        /// Show the full text of one complexity level (1-5)
        #[arg(short, long)]
        level: Option<ComplexityLevel>,
    },

    /// List categories present in the library
    Categories,

    /// Show an entry's cross references
    Related {
        /// Entry ID
        id: String,
    },

    /// Check content quality (exits with status 1 on errors)
    Audit {
        /// Hide warnings
        #[arg(long)]
        errors_only: bool,
    },

    /// Export entries as JSON
    Export {
        /// Output file (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only entries in this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::List {
                category,
                limit,
                published,
            } => list_entries(category, limit, published),
            Commands::Search {
                query,
                category,
                system,
                topic,
                relevance,
                all_words,
                published,
                limit,
            } => {
                let cfg = config::config()?;
                let mut options = FilterOptions::new()
                    .query(query)
                    .match_mode(if all_words {
                        MatchMode::AllWords
                    } else {
                        cfg.match_mode
                    })
                    .published_only(published || cfg.published_only);
                options.category = category;
                options.system = system;
                options.topic = topic;
                options.clinical_relevance = relevance;

                search_entries(&options, limit.unwrap_or(cfg.limit))
            }
            Commands::Show { id, level } => show_entry(&id, level),
            Commands::Categories => list_categories(),
            Commands::Related { id } => show_related(&id),
            Commands::Audit { errors_only } => run_audit(errors_only),
            Commands::Export { output, category } => export_entries(output, category).await,
            Commands::Config => show_config(),
        }
    }
}

fn catalog() -> Result<&'static Catalog> {
    library::builtin().context("Failed to build the built-in content library")
}

/// List entries
fn list_entries(category: Option<Category>, limit: Option<usize>, published: bool) -> Result<()> {
    let cfg = config::config()?;
    let catalog = catalog()?;

    let mut options = FilterOptions::new().published_only(published || cfg.published_only);
    options.category = category;
    let entries = catalog.filter(&options);

    if entries.is_empty() {
        println!("No entries match.");
        return Ok(());
    }

    let limit = limit.unwrap_or(cfg.limit);
    print!("{}", render::entry_table(entries.iter().copied().take(limit)));

    if entries.len() > limit {
        println!("\nShowing {} of {} entries (use --limit to see more)", limit, entries.len());
    } else {
        println!("\nTotal: {} entries", entries.len());
    }

    Ok(())
}

/// Search entries
fn search_entries(options: &FilterOptions, limit: usize) -> Result<()> {
    let catalog = catalog()?;
    let query = options.query.as_deref().unwrap_or_default();

    let results = catalog.filter(options);
    info!(query, results = results.len(), "Search complete");

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print!("{}", render::entry_table(results.iter().copied().take(limit)));

    Ok(())
}

/// Show one entry or one of its levels
fn show_entry(id: &str, level: Option<ComplexityLevel>) -> Result<()> {
    let catalog = catalog()?;

    let entry = catalog
        .get_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("Entry not found: {}", id))?;

    match level {
        None => print!("{}", render::entry_detail(entry)),
        Some(level) => {
            let content = entry.level(level).ok_or_else(|| {
                let available: Vec<String> = entry.levels.keys().map(|l| l.to_string()).collect();
                anyhow::anyhow!(
                    "Entry {} has no level {} (available: {})",
                    id,
                    level,
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                )
            })?;
            print!("{}", render::level_detail(entry, content));
        }
    }

    Ok(())
}

/// List categories with entry counts
fn list_categories() -> Result<()> {
    let catalog = catalog()?;

    println!("{:<28} {}", "CATEGORY", "ENTRIES");
    println!("{}", "-".repeat(40));

    for category in catalog.categories() {
        println!("{:<28} {}", category.as_str(), catalog.get_by_category(category).len());
    }

    Ok(())
}

/// Show cross references of an entry
fn show_related(id: &str) -> Result<()> {
    let catalog = catalog()?;

    let related = catalog
        .related(id)
        .ok_or_else(|| anyhow::anyhow!("Entry not found: {}", id))?;

    if related.is_empty() {
        println!("{} has no cross references.", id);
        return Ok(());
    }

    println!("{:<12} {:<40} {}", "RELATION", "TARGET", "LABEL");
    println!("{}", "-".repeat(80));

    for resolved in &related {
        let label = match resolved.target {
            Some(target) => target.name.clone(),
            None => format!("{} (not in library)", resolved.reference.label),
        };
        println!(
            "{:<12} {:<40} {}",
            resolved.reference.relationship,
            resolved.reference.target_id.as_str(),
            label
        );
    }

    Ok(())
}

/// Run the content audit
fn run_audit(errors_only: bool) -> Result<()> {
    let catalog = catalog()?;
    let report = catalog.audit();

    for issue in &report.issues {
        if errors_only && issue.severity != library::Severity::Error {
            continue;
        }
        println!("{}", render::audit_line(issue));
    }

    println!(
        "\nChecked {} entries: {} error(s), {} warning(s)",
        report.entries_checked,
        report.error_count(),
        report.warning_count()
    );

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

/// Export entries as pretty JSON
async fn export_entries(output: Option<PathBuf>, category: Option<Category>) -> Result<()> {
    let catalog = catalog()?;

    let entries: Vec<&Entry> = match category {
        Some(category) => catalog.get_by_category(category),
        None => catalog.iter().collect(),
    };

    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize entries")?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            eprintln!("Exported {} entries to {}", entries.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("{}", render::banner(&["Soma Configuration".to_string()]));
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Query:");
    println!("  Published only: {}", cfg.published_only);
    println!("  Match mode:     {}", cfg.match_mode);
    println!();
    println!("Output:");
    println!("  Limit:          {}", cfg.limit);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::try_parse_from([
            "soma",
            "search",
            "septic shock",
            "--category",
            "shock",
            "--relevance",
            "Critical",
            "--all-words",
            "--published",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                query,
                category,
                relevance,
                all_words,
                published,
                ..
            } => {
                assert_eq!(query, "septic shock");
                assert_eq!(category.unwrap().as_str(), "shock");
                assert_eq!(relevance, Some(ClinicalRelevance::Critical));
                assert!(all_words);
                assert!(published);
            }
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_show_level() {
        let cli = Cli::try_parse_from(["soma", "show", "celiac-disease", "--level", "3"]).unwrap();
        match cli.command {
            Commands::Show { id, level } => {
                assert_eq!(id, "celiac-disease");
                assert_eq!(level, Some(ComplexityLevel::ADVANCED));
            }
            other => panic!("Expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_category_and_level() {
        assert!(Cli::try_parse_from(["soma", "list", "--category", "astrology"]).is_err());
        assert!(Cli::try_parse_from(["soma", "show", "x", "--level", "9"]).is_err());
        assert!(Cli::try_parse_from(["soma", "search", "x", "--relevance", "urgent"]).is_err());
    }

    #[tokio::test]
    async fn test_export_writes_json_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("shock.json");

        export_entries(
            Some(path.clone()),
            Some(Category::from(crate::domain::CriticalCareCategory::Shock)),
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<Entry> = serde_json::from_str(&written).unwrap();
        assert_eq!(entries.len(), 5);
    }
}
