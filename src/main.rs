#![forbid(unsafe_code)]
//! # Word Association CLI
//!
//! This is the command-line interface for the `word_assoc` crate. It reads a
//! corpus (one line = one document), counts document and pair frequencies in
//! a single pass, scores every co-occurring pair with smoothed mutual
//! information, and prints three ranked views: top pairs by MI, top pairs by
//! co-occurrence, and top associates of a query word.
//!
//! ## Example
//! ```bash
//! cargo run --release -- cacm.txt --query programming --export-format csv
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process;

use word_assoc::{AssocOptions, BlankLines, ExportFormat, analyze_path, export_report};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Corpus file or directory of .txt files (one line = one document)
    #[arg(default_value = word_assoc::DEFAULT_CORPUS)]
    path: PathBuf,

    /// Query word for the associate ranking
    #[arg(long, default_value = "programming")]
    query: String,

    /// Number of pairs in the co-occurrence ranking
    #[arg(long, default_value_t = 10)]
    top_cooc: usize,

    /// Number of pairs in the MI ranking
    #[arg(long, default_value_t = 10)]
    top_mi: usize,

    /// Number of associates in the query ranking
    #[arg(long, default_value_t = 5)]
    top_query: usize,

    /// Count blank lines as empty documents instead of skipping them
    #[arg(long, default_value_t = false)]
    count_blank: bool,

    /// Also export each ranking to a file (txt, csv, tsv, json)
    #[arg(long)]
    export_format: Option<ExportFormat>,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let opts = AssocOptions {
        query_word: cli.query.clone(),
        k_cooc: cli.top_cooc,
        k_mi: cli.top_mi,
        k_query: cli.top_query,
        blank_lines: if cli.count_blank {
            BlankLines::Count
        } else {
            BlankLines::Skip
        },
    };

    let report = match analyze_path(&cli.path, &opts) {
        Ok(report) => report,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", report.summary);

    if let Some(format) = cli.export_format {
        let stem = cli
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("corpus");
        match export_report(&report, &cli.output_dir, stem, format) {
            Ok(paths) => {
                for path in paths {
                    println!("Saved {}", path.display());
                }
            }
            Err(e) => {
                error!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}
