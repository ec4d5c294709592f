//! marrow: rename prefixed glTF nodes with an incrementing counter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marrow_core::{plan_renames, rename_matching, Document};
use tracing::info;

/// Input path of the original one-shot script, kept as the default.
const DEFAULT_INPUT: &str = "../resources/scenes/final4.glb";
/// Output path of the original one-shot script, kept as the default.
const DEFAULT_OUTPUT: &str = "../resources/scenes/final_30b_rtm.glb";
const DEFAULT_PREFIX: &str = "Bone";

#[derive(Parser, Debug)]
#[command(
    name = "marrow",
    version,
    about = "Rename prefixed glTF nodes with an incrementing counter"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append an incrementing counter to every node name starting with a prefix
    Rename {
        /// Scene file to read (.glb or .gltf)
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// File to write the renamed scene to
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Name prefix to match, case-sensitively, at the start of the name
        #[arg(long, default_value = DEFAULT_PREFIX, value_parser = non_empty)]
        prefix: String,
        /// Print the planned renames without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List the flat node table of a scene file
    Nodes {
        /// Scene file to read (.glb or .gltf)
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("prefix must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Rename {
            input,
            output,
            prefix,
            dry_run,
        } => rename(&input, &output, &prefix, dry_run),
        Command::Nodes { input } => list_nodes(&input),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn rename(input: &Path, output: &Path, prefix: &str, dry_run: bool) -> Result<()> {
    let mut doc = Document::load(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    info!("loaded {} ({} nodes)", input.display(), doc.gltf.nodes.len());

    if dry_run {
        let plan = plan_renames(&doc.gltf.nodes, prefix);
        for rename in &plan {
            println!("{} -> {}", rename.from, rename.to);
        }
        info!("dry run: {} nodes would be renamed", plan.len());
        return Ok(());
    }

    let renamed = rename_matching(&mut doc.gltf.nodes, prefix);
    info!("renamed {} nodes with prefix {:?}", renamed, prefix);

    doc.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());

    Ok(())
}

fn list_nodes(input: &Path) -> Result<()> {
    let doc = Document::load(input)
        .with_context(|| format!("failed to load {}", input.display()))?;

    for (index, node) in doc.gltf.nodes.iter().enumerate() {
        let name = node.name.as_deref().unwrap_or("(anon)");

        let mut tags = Vec::new();
        if let Some(mesh) = node.mesh {
            tags.push(format!("mesh {}", mesh));
        }
        if let Some(skin) = node.skin {
            tags.push(format!("skin {}", skin));
        }
        if !node.children.is_empty() {
            tags.push(format!("{} children", node.children.len()));
        }

        if tags.is_empty() {
            println!("{:4}  {}", index, name);
        } else {
            println!("{:4}  {}  [{}]", index, name, tags.join(", "));
        }
    }

    Ok(())
}
