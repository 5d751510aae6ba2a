use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::chart::ChartKind;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "simpleplot",
    version,
    about = "Plot tab-delimited text in the terminal: pies, bars, bubbles, genome-wide tracks"
)]
pub struct Cli {
    /// Input file (`-` or nothing for stdin, `*.gz` is decompressed)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Chart type; also decides how the input is read
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: ChartKind,

    /// Reference dictionary (`.dict`, `.fai`, VCF header or FASTA with an index)
    #[arg(short = 'R', long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Drop reference contigs shorter than this (negative keeps all)
    #[arg(long = "min-reference-size", value_name = "BP", default_value_t = -1, allow_negative_numbers = true)]
    pub min_reference_size: i64,

    /// Genomic input is `CHROM POS VALUE` instead of `CHROM START END VALUE`
    #[arg(long)]
    pub chrom_position: bool,

    /// Input is the output of `sort | uniq -c`
    #[arg(long)]
    pub sort_unique: bool,

    /// Field delimiter: one character, `\t`/`tab` or `space`
    #[arg(short, long, default_value = "\\t")]
    pub delimiter: String,

    /// Columns per point for bubble charts (`x y` or `x y radius`)
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub columns: usize,

    /// X axis label
    #[arg(long)]
    pub xlabel: Option<String>,

    /// Y axis label
    #[arg(long)]
    pub ylabel: Option<String>,

    /// Chart title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Don't draw the series legend
    #[arg(long)]
    pub hide_legend: bool,

    /// Color (name or `#RRGGBB`)
    #[arg(long, default_value = "industrial")]
    pub color: String,

    /// Write the chart as plain text to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Output width in characters (terminal width if omitted)
    #[arg(long)]
    pub width: Option<usize>,

    /// Output height in rows (terminal height if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// More logging: `-v` info, `-vv` debug
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation() {
        let cli = Cli::try_parse_from(["simpleplot", "-t", "pie"]).unwrap();
        assert_eq!(cli.kind, ChartKind::Pie);
        assert_eq!(cli.file, None);
        assert_eq!(cli.delimiter, "\\t");
        assert_eq!(cli.min_reference_size, -1);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn kinds_are_kebab_case() {
        let cli = Cli::try_parse_from(["simpleplot", "--type", "stacked-xyv", "in.tsv"]).unwrap();
        assert_eq!(cli.kind, ChartKind::StackedXyv);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("in.tsv")));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["simpleplot", "-t", "bubble", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn type_is_required() {
        assert!(Cli::try_parse_from(["simpleplot", "in.tsv"]).is_err());
    }
}
