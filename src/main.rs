//! Treemark CLI - selection-state annotator for content trees
//!
//! Usage: treemark <COMMAND>
//!
//! Commands:
//!   annotate  Compute checkbox/message annotations for manifest nodes
//!   check     Validate a selection manifest's invariants

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use treemark::ui::{detect_capabilities, render_annotated_node, render_summary, ColoredText};
use treemark::{EnglishMessages, SelectionAnnotator, SelectionManifest, TreemarkError};

/// Treemark - selection-state annotator for content trees
#[derive(Parser, Debug)]
#[command(name = "treemark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output newline-delimited JSON instead of the tree view
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute checkbox/message annotations for manifest nodes
    Annotate {
        /// Path to the selection manifest (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Annotate only the node with this pk
        #[arg(long)]
        node: Option<String>,

        /// Force the ascii icon set
        #[arg(long)]
        ascii: bool,
    },

    /// Validate a selection manifest's invariants
    Check {
        /// Path to the selection manifest (JSON)
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate { file, node, ascii } => cmd_annotate(&file, node, ascii, cli.json),
        Commands::Check { file } => cmd_check(&file, cli.json),
    }
}

fn cmd_annotate(file: &PathBuf, node: Option<String>, ascii: bool, json: bool) -> Result<()> {
    let manifest = SelectionManifest::load(file)?;
    maybe_warn_issues(&manifest, json);

    let selection = manifest.selection_set()?;
    let catalog = EnglishMessages;
    let annotator = SelectionAnnotator::new(&catalog);

    let annotated = match node {
        Some(pk) => {
            let target = manifest
                .node(&pk)
                .ok_or(TreemarkError::UnknownNode { pk })?;
            vec![annotator.annotate(target, &selection)]
        }
        None => annotator.annotate_all(&manifest.nodes, &selection),
    };

    if json {
        for row in &annotated {
            println!("{}", serde_json::to_string(row)?);
        }
        return Ok(());
    }

    let caps = detect_capabilities();
    let unicode = caps.supports_unicode && !ascii;

    println!("🔎 Treemark Annotate");
    println!("Manifest: {}", file.display());
    println!();

    for row in &annotated {
        println!(
            "{}",
            render_annotated_node(row, &catalog, unicode, caps.supports_color)
        );
    }

    println!();
    println!("{}", render_summary(&annotated, unicode));

    Ok(())
}

fn cmd_check(file: &PathBuf, json: bool) -> Result<()> {
    let manifest = SelectionManifest::load(file)?;
    let issues = manifest.validate();

    if json {
        let output = serde_json::json!({
            "event": "check",
            "nodes": manifest.nodes.len(),
            "issues": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
            "success": issues.is_empty()
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let caps = detect_capabilities();

        println!("🩺 Treemark Check");
        println!("Manifest: {}", file.display());
        println!();

        for issue in &issues {
            println!(
                "  {} {}",
                ColoredText::error("✗").render(caps.supports_color),
                issue
            );
        }

        println!(
            "Summary: {} nodes, {} issues",
            manifest.nodes.len(),
            issues.len()
        );

        if issues.is_empty() {
            println!();
            println!("🟢 All checks passed!");
        } else {
            println!();
            println!("🔴 Check found issues. Fix the manifest before annotating.");
        }
    }

    if !issues.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_warn_issues(manifest: &SelectionManifest, json: bool) {
    if json {
        return;
    }

    for issue in manifest.validate() {
        eprintln!("⚠ {}", issue);
    }
}
