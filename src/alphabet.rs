//! The canonical nucleic-acid alphabet and its symbol mappings.
//!
//! Every input symbol is canonicalized exactly once at this boundary:
//! upper- and lowercase bases map to the same [`Nucleotide`], anything
//! else is rejected by the caller according to its own policy (an error
//! at matrix-build time, a disqualified window at scan time).

use phf::phf_map;

/// Number of symbols in the nucleic-acid alphabet.
pub const ALPHABET_SIZE: usize = 4;

/// A canonical DNA base. The discriminant doubles as the row index
/// into a scoring matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

/// Base-pair complements, both cases.
static COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T', 'C' => 'G', 'G' => 'C', 'T' => 'A',
    'a' => 't', 'c' => 'g', 'g' => 'c', 't' => 'a',
};

impl Nucleotide {
    /// All bases in row-index order.
    pub const ALL: [Nucleotide; ALPHABET_SIZE] =
        [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Canonicalizes a raw byte. Returns `None` for anything outside
    /// `ACGTacgt` (ambiguity codes included).
    pub fn from_byte(byte: u8) -> Option<Nucleotide> {
        match byte {
            b'A' | b'a' => Some(Nucleotide::A),
            b'C' | b'c' => Some(Nucleotide::C),
            b'G' | b'g' => Some(Nucleotide::G),
            b'T' | b't' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// Row index of this base in a scoring matrix.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Watson-Crick complement (A↔T, C↔G).
    pub fn complement(self) -> Nucleotide {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::T => Nucleotide::A,
        }
    }
}

/// Complement of a single character, case preserved. `None` for
/// characters outside the alphabet.
pub fn complement_char(c: char) -> Option<char> {
    COMPLEMENT.get(&c).copied()
}
