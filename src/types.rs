use serde::Serialize;

/// Which genome strand a window was scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// One-letter label used in tabular output.
    pub fn symbol(self) -> &'static str {
        match self {
            Strand::Forward => "F",
            Strand::Reverse => "R",
        }
    }
}

/// One candidate binding site: the window starting at `offset` on
/// `strand`, with its cumulative log-odds `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub offset: usize,
    pub strand: Strand,
    pub score: f64,
}

/// Options controlling a scan.
///
/// `min_score` filters hits before ranking (hits scoring at or above the
/// cutoff are kept); `top_k` truncates the ranked output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanOptions {
    pub both_strands: bool,
    pub top_k: Option<usize>,
    pub min_score: Option<f64>,
}
