//! Fast PSSM construction and genome-scale binding site search in Rust

pub mod alphabet;
pub mod error;
pub mod fasta;
pub mod pssm;
pub mod rank;
pub mod scan;
pub mod types;

pub use error::{Result, SearchError};
pub use pssm::{Background, ScoringMatrix};
pub use scan::{par_scan, scan, scan_with_cancel, HitIter};
pub use types::{Hit, ScanOptions, Strand};
