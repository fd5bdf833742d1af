use crate::alphabet::complement_char;
use crate::error::{Result, SearchError};
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Reads sequences from a FASTA format file into a Polars DataFrame.
///
/// # Arguments
/// * `filename` - Path to the FASTA file to read
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with two columns:
///   - "label": the sequence identifiers (without the '>' prefix)
///   - "sequence": the corresponding sequences, uppercased
///
/// # Errors
/// * Returns `SearchError::InvalidFileFormat` if no sequences are found
/// * Returns `SearchError::DataError` if DataFrame creation fails
/// * Returns `SearchError::Io` for file reading issues
pub fn read_fasta(filename: &str) -> Result<DataFrame> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut records: Vec<(String, String)> = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if let Some(name) = line.strip_prefix('>') {
            if let Some(previous) = header.take() {
                records.push((previous, sequence.to_uppercase()));
                sequence.clear();
            }
            header = Some(name.to_string());
        } else if !line.is_empty() {
            sequence.push_str(line);
        }
    }
    if let Some(last) = header {
        records.push((last, sequence.to_uppercase()));
    }

    if records.is_empty() {
        return Err(SearchError::InvalidFileFormat("no sequences found".into()));
    }

    let (labels, sequences): (Vec<String>, Vec<String>) = records.into_iter().unzip();
    DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new("sequence".into(), sequences),
    ])
    .map_err(|e| SearchError::DataError(e.to_string()))
}

/// Writes sequences from a Polars DataFrame to a FASTA format file.
///
/// # Arguments
/// * `df` - DataFrame with "label" and "sequence" columns
/// * `filename` - Path where the FASTA file should be written
///
/// # Errors
/// * Returns `SearchError::DataError` if required columns are missing
/// * Returns `SearchError::Io` for file writing issues
pub fn write_fasta(df: &DataFrame, filename: &str) -> Result<()> {
    let labels = df
        .column("label")
        .and_then(|c| c.str())
        .map_err(|e| SearchError::DataError(e.to_string()))?;
    let sequences = df
        .column("sequence")
        .and_then(|c| c.str())
        .map_err(|e| SearchError::DataError(e.to_string()))?;

    let mut file = File::create(filename)?;
    for (label, sequence) in labels.into_iter().zip(sequences) {
        if let (Some(label), Some(sequence)) = (label, sequence) {
            writeln!(file, ">{}", label)?;
            writeln!(file, "{}", sequence)?;
        }
    }

    Ok(())
}

/// Reads aligned binding sites from a file, one site per line.
/// FASTA-style `>` header lines and blank lines are skipped, so both
/// plain site lists and site files with headers work.
///
/// # Errors
/// * Returns `SearchError::InvalidFileFormat` if the file holds no sites
/// * Returns `SearchError::Io` for file reading issues
pub fn read_sites(filename: &str) -> Result<Vec<String>> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut sites = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        sites.push(line.to_string());
    }

    if sites.is_empty() {
        return Err(SearchError::InvalidFileFormat("no sites found".into()));
    }
    Ok(sites)
}

/// Generates the reverse complement of a DNA sequence (A↔T, C↔G, order
/// reversed); case is preserved.
///
/// # Errors
/// * Returns `SearchError::InvalidSymbol` for characters outside the
///   nucleotide alphabet
pub fn rev_comp(sequence: &str) -> Result<String> {
    sequence
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            complement_char(c).ok_or_else(|| SearchError::invalid_symbol(sequence.len() - 1 - i, c))
        })
        .collect()
}
