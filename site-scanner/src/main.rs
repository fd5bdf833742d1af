use clap::Parser;
use polars::prelude::*;
use pssm_search::{fasta, par_scan, scan, Background, ScanOptions, ScoringMatrix};
use std::fs;
use std::fs::File;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("search error: {0}")]
    Search(#[from] pssm_search::SearchError),

    #[error("invalid background frequencies: {0}")]
    InvalidBackground(String),

    #[error("unsupported output format: {0} (expected .csv or .parquet)")]
    UnsupportedOutput(String),
}

#[derive(Parser)]
#[command(
    name = "site-scanner",
    about = "Builds a PSSM from aligned binding sites and scans a genome for high-scoring matches",
    long_about = "A tool for locating putative binding sites in genome-scale sequences. \
                  It builds a position-specific scoring matrix from a set of aligned sites, \
                  slides it across every window of each input sequence (optionally on both \
                  strands), and writes the ranked hit table with positions, strands, and \
                  log2-odds scores.",
    version,
    after_help = "Example usage:\n    \
                  site-scanner LexA.sites genome.fna results.csv --both-strands --top-k 25\n    \
                  site-scanner sites.txt genome.fasta hits.parquet --min-score 8.0 --parallel",
    color = clap::ColorChoice::Always
)]
#[derive(Debug)]
struct Args {
    /// Path to the aligned binding-site file
    /// (one site per line; FASTA-style headers are skipped)
    #[arg(value_name = "SITES_FILE")]
    sites_file: String,

    /// Path to the genome FASTA file to scan
    #[arg(value_name = "GENOME_FILE")]
    genome_file: String,

    /// Path for the ranked hit table (.csv or .parquet format)
    /// Will create the output directory if it doesn't exist
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: String,

    /// Scan the reverse-complement strand in addition to the forward strand
    #[arg(long)]
    both_strands: bool,

    /// Keep only the K best-ranked hits per sequence
    #[arg(long, value_name = "K")]
    top_k: Option<usize>,

    /// Drop hits scoring below this log2-odds cutoff before ranking
    #[arg(long, value_name = "SCORE")]
    min_score: Option<f64>,

    /// Background frequencies as "A,C,G,T", e.g. "0.3,0.2,0.2,0.3"
    /// (default: uniform 0.25 each)
    #[arg(long, value_name = "FREQS")]
    background: Option<String>,

    /// Partition each scan across worker threads
    #[arg(long)]
    parallel: bool,
}

fn parse_background(spec: &str) -> Result<Background, ScannerError> {
    let values: Vec<f64> = spec
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ScannerError::InvalidBackground(e.to_string()))?;
    let frequencies: [f64; 4] = values
        .try_into()
        .map_err(|_| ScannerError::InvalidBackground("expected four values".into()))?;
    Background::new(frequencies).map_err(ScannerError::Search)
}

fn scan_genome(
    genome: &DataFrame,
    matrix: &ScoringMatrix,
    options: &ScanOptions,
    parallel: bool,
) -> Result<DataFrame, ScannerError> {
    let labels = genome.column("label")?.str()?;
    let sequences = genome.column("sequence")?.str()?;

    let mut out_labels: Vec<String> = Vec::new();
    let mut out_offsets: Vec<u64> = Vec::new();
    let mut out_strands: Vec<String> = Vec::new();
    let mut out_scores: Vec<f64> = Vec::new();

    for (label, sequence) in labels.into_iter().zip(sequences) {
        let (Some(label), Some(sequence)) = (label, sequence) else {
            continue;
        };

        let hits = if parallel {
            par_scan(matrix, sequence, options)
        } else {
            scan(matrix, sequence, options)
        };
        println!("{}: {} hits ({} bp scanned)", label, hits.len(), sequence.len());
        for hit in hits.iter().take(5) {
            println!("\t{}\t{}\t{:.4}", hit.offset, hit.strand.symbol(), hit.score);
        }

        for hit in &hits {
            out_labels.push(label.to_string());
            out_offsets.push(hit.offset as u64);
            out_strands.push(hit.strand.symbol().to_string());
            out_scores.push(hit.score);
        }
    }

    let df = DataFrame::new(vec![
        Column::new("label".into(), out_labels),
        Column::new("offset".into(), out_offsets),
        Column::new("strand".into(), out_strands),
        Column::new("score".into(), out_scores),
    ])?;

    Ok(df)
}

fn write_output(mut df: DataFrame, path: &str) -> Result<(), ScannerError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match extension {
        "csv" => {
            CsvWriter::new(File::create(path)?).finish(&mut df)?;
        }
        "parquet" => {
            ParquetWriter::new(File::create(path)?).finish(&mut df)?;
        }
        other => return Err(ScannerError::UnsupportedOutput(other.to_string())),
    }
    Ok(())
}

fn main() -> Result<(), ScannerError> {
    let start_time = std::time::Instant::now();

    let args = Args::parse();

    // Create output directory if it doesn't exist
    if let Some(parent) = Path::new(&args.output_file).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let background = args
        .background
        .as_deref()
        .map(parse_background)
        .transpose()?;

    let sites = fasta::read_sites(&args.sites_file)?;
    let matrix = ScoringMatrix::from_sites(&sites, background)?;
    println!(
        "{} sites of length {}, best possible window score {:.4}",
        sites.len(),
        matrix.len(),
        matrix.max_score()
    );

    let genome = fasta::read_fasta(&args.genome_file)?;
    let options = ScanOptions {
        both_strands: args.both_strands,
        top_k: args.top_k,
        min_score: args.min_score,
    };

    let results = scan_genome(&genome, &matrix, &options, args.parallel)?;
    write_output(results, &args.output_file)?;

    let elapsed = start_time.elapsed();
    println!("Total execution time: {:.4} seconds", elapsed.as_secs_f64());

    Ok(())
}
