use std::path::Path;

use anyhow::Context;
use colored::{Color, Colorize};
use dcm_diff::{diff_datasets, render_header, render_line, DatasetDiff, DiffType, RenderConfig};
use dcm_reader::{DatasetReader, JsonDatasetReader};
use dcm_types::{TagPath, Tree};
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, &cli.format),
        Command::Dump(args) => cmd_dump(args),
        Command::Get(args) => cmd_get(args),
    }
}

fn load(path: &Path) -> anyhow::Result<Tree> {
    JsonDatasetReader::new()
        .read_path(path)
        .with_context(|| format!("loading dataset {}", path.display()))
}

fn color_for(diff_type: DiffType) -> Color {
    match diff_type {
        DiffType::Different => Color::Yellow,
        DiffType::MissingLeft => Color::Magenta,
        DiffType::MissingRight => Color::Cyan,
    }
}

/// Header lines followed by one line per record, uncoloured.
fn diff_lines(result: &DatasetDiff, render: &RenderConfig) -> Vec<String> {
    render_header(render)
        .into_iter()
        .chain(result.iter().map(|d| render_line(d, render)))
        .collect()
}

fn cmd_diff(args: DiffArgs, config: &CliConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let left = load(&args.file_left)?;
    let right = load(&args.file_right)?;
    let result = diff_datasets(&left, &right).with_context(|| {
        format!(
            "comparing {} with {}",
            args.file_left.display(),
            args.file_right.display()
        )
    })?;
    debug!(
        records = result.len(),
        differences = result.differences(),
        missing_left = result.missing_left(),
        missing_right = result.missing_right(),
        "diff complete"
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            let render = config.render_with(args.len_col_tag, args.len_col_val);
            let lines = diff_lines(&result, &render);
            let (header, body) = lines.split_at(2);
            for line in header {
                println!("{line}");
            }
            for (line, d) in body.iter().zip(result.iter()) {
                println!("{}", line.color(color_for(d.diff_type)));
            }
        }
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let tree = load(&args.file)?;
    print!("{tree}");
    Ok(())
}

fn cmd_get(args: GetArgs) -> anyhow::Result<()> {
    let tree = load(&args.file)?;
    let path: TagPath = args.path.parse()?;
    let resolved = tree
        .resolve(&path)
        .with_context(|| format!("resolving {path} in {}", args.file.display()))?;
    match resolved {
        dcm_types::Resolved::Item(item) => print!("{item}"),
        value => println!("{value}"),
    }
    Ok(())
}
