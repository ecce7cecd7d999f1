use crate::cli::args::{Cli, Commands, Target};
use crate::config::Config;
use crate::design::source::sample_document;
use crate::design::{DocumentSource, FileSource};
use crate::logging;
use crate::transpiler::naming::to_snake_case;
use crate::transpiler::{self, Component, ComponentTree, ConversionOutput, Dimension, Normalizer};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log_level, cli.verbose)?;

    match cli.command {
        Commands::Convert { input, output_dir, package, class_name, target, node } => {
            let mut config = config;
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(package) = package {
                config.package_name = package;
            }
            if let Some(class_name) = class_name {
                config.class_name = class_name;
            }
            convert_command(&input, &config, &target, node.as_deref(), cli.verbose)
        },
        Commands::Inspect { input, json, node } => {
            inspect_command(&input, json, node.as_deref(), cli.verbose)
        },
        Commands::Sample { output } => {
            sample_command(output.as_deref(), cli.verbose)
        },
    }
}

fn convert_command(input: &Path, config: &Config, targets: &[Target], node: Option<&str>, verbose: bool) -> Result<()> {
    let targets = resolve_targets(targets, &config.targets)?;

    if verbose {
        println!("🔧 Converting design document: {} -> {}", input.display(), config.output_dir.display());
        println!("📦 Package: {}  Class: {}", config.package_name, config.class_name);
    }

    let source = FileSource::new(input);
    let output = transpiler::convert_from(&source, node, &config.emit_options())?;

    let written = write_outputs(&output, &config.output_dir, &config.class_name, &targets)?;

    println!("✅ Converted {} components", output.components.len());
    for path in &written {
        println!("📁 {}", path.display());
    }

    Ok(())
}

fn inspect_command(input: &Path, json: bool, node: Option<&str>, verbose: bool) -> Result<()> {
    if verbose {
        println!("🔍 Inspecting design document: {}", input.display());
    }

    let document = FileSource::new(input).fetch()?;
    let components = Normalizer::new().normalize_node(&document, node)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        print!("{}", render_tree(&components));
        println!("📊 Components: {}", components.len());
    }

    Ok(())
}

fn sample_command(output: Option<&Path>, verbose: bool) -> Result<()> {
    let sample = serde_json::to_string_pretty(&sample_document())?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", sample))
                .with_context(|| format!("Failed to write sample document: {}", path.display()))?;
            println!("✅ Sample design document written to: {}", path.display());
            if verbose {
                println!("📝 Convert it with: figdroid convert {}", path.display());
            }
        }
        None => println!("{}", sample),
    }

    Ok(())
}

/// Explicit `--target` flags win; otherwise the configured target names.
fn resolve_targets(flags: &[Target], configured: &[String]) -> Result<Vec<Target>> {
    if !flags.is_empty() {
        return Ok(flags.to_vec());
    }

    if configured.is_empty() {
        return Ok(Target::ALL.to_vec());
    }

    configured
        .iter()
        .map(|name| Target::parse(name).ok_or_else(|| anyhow!("Unknown target in config: {}", name)))
        .collect()
}

/// File name a target is written to.
pub fn output_file_name(target: Target, class_name: &str) -> String {
    match target.dialect() {
        Some(dialect) => format!("{}.{}", class_name, dialect.file_extension),
        None => format!("{}.xml", to_snake_case(class_name)),
    }
}

/// Writes the selected outputs into `output_dir`, creating it if needed.
pub fn write_outputs(
    output: &ConversionOutput,
    output_dir: &Path,
    class_name: &str,
    targets: &[Target],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut written = Vec::new();
    for &target in targets {
        let content = match target {
            Target::Xml => &output.markup,
            Target::Java => &output.java,
            Target::Kotlin => &output.kotlin,
        };

        let path = output_dir.join(output_file_name(target, class_name));
        if written.contains(&path) {
            continue;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote output");
        written.push(path);
    }

    Ok(written)
}

/// Indented view of every root and its descendants.
pub fn render_tree(components: &[Component]) -> String {
    let tree = ComponentTree::new(components);
    let mut out = String::new();
    for root in tree.roots() {
        write_tree_node(&mut out, &tree, root, 0);
    }
    out
}

fn write_tree_node(out: &mut String, tree: &ComponentTree<'_>, component: &Component, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{}🌳 {} {} ({}) {}x{} @ {},{}\n",
        indent,
        component.widget_kind,
        component.name,
        component.id,
        size_label(component.bounds.layout_width()),
        size_label(component.bounds.layout_height()),
        component.bounds.x,
        component.bounds.y
    ));

    if let Some(text) = &component.properties.text {
        out.push_str(&format!("{}  📝 {:?}\n", indent, text));
    }

    for child in tree.children_of(&component.id) {
        write_tree_node(out, tree, child, depth + 1);
    }
}

fn size_label(dimension: Dimension) -> String {
    match dimension {
        Dimension::WrapContent => "wrap".to_string(),
        Dimension::Fixed(v) => v.to_string(),
    }
}
