use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dcm",
    about = "DICOM tools: compare, dump and query dataset headers",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format of `diff`; `dump` and `get` always print text
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// TOML file with default column widths
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the difference of two dataset headers
    Diff(DiffArgs),
    /// Dump the header of a dataset
    Dump(DumpArgs),
    /// Print the value at a tag path, e.g. 0008,1115[0].0020,000E
    Get(GetArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// The left file for the diff
    pub file_left: PathBuf,
    /// The right file for the diff
    pub file_right: PathBuf,
    /// Width of the tag column
    #[arg(long, alias = "len_col_tag")]
    pub len_col_tag: Option<usize>,
    /// Width of each value column
    #[arg(long, alias = "len_col_val")]
    pub len_col_val: Option<usize>,
}

#[derive(Args)]
pub struct DumpArgs {
    /// The dataset whose header is dumped
    pub file: PathBuf,
}

#[derive(Args)]
pub struct GetArgs {
    pub file: PathBuf,
    pub path: String,
}
