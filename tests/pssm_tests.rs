use pssm_search::alphabet::Nucleotide;
use pssm_search::error::SearchError;
use pssm_search::pssm::{Background, ScoringMatrix};

#[test]
fn test_matrix_dimensions_and_finite_entries() {
    let sites = ["ACGT", "ACGT", "TGCA"];
    let matrix = ScoringMatrix::from_sites(&sites, None).unwrap();
    assert_eq!(matrix.len(), 4);

    for pos in 0..matrix.len() {
        for base in Nucleotide::ALL {
            assert!(matrix.score(base, pos).is_finite());
        }
    }
}

#[test]
fn test_single_site_still_finite() {
    // the pseudocount prevents log(0) even with one instance
    let matrix = ScoringMatrix::from_sites(&["ACGT"], None).unwrap();
    for pos in 0..matrix.len() {
        for base in Nucleotide::ALL {
            assert!(matrix.score(base, pos).is_finite());
        }
    }
}

#[test]
fn test_empty_site_set_is_invalid_input() {
    let sites: [&str; 0] = [];
    let err = ScoringMatrix::from_sites(&sites, None).unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));
}

#[test]
fn test_mismatched_site_lengths_are_invalid_input() {
    let err = ScoringMatrix::from_sites(&["ACGT", "ACG"], None).unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));
}

#[test]
fn test_zero_length_sites_are_invalid_input() {
    let err = ScoringMatrix::from_sites(&["", ""], None).unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(_)));
}

#[test]
fn test_bad_symbol_in_site_is_reported_with_position() {
    let err = ScoringMatrix::from_sites(&["ACNT"], None).unwrap_err();
    match err {
        SearchError::InvalidSymbol { position, symbol } => {
            assert_eq!(position, 2);
            assert_eq!(symbol, 'N');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_sites_are_case_insensitive() {
    let upper = ScoringMatrix::from_sites(&["ACGT", "ACGT"], None).unwrap();
    let lower = ScoringMatrix::from_sites(&["acgt", "ACgt"], None).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_known_scores_under_uniform_background() {
    // three identical sites: count 3 + 0.25 pseudocount over total 4,
    // so score(A) = log2((3.25/4) / 0.25) = log2(3.25) at every position
    let matrix = ScoringMatrix::from_sites(&["AAAA", "AAAA", "AAAA"], None).unwrap();
    let expected = 3.25f64.log2();
    for pos in 0..4 {
        assert!((matrix.score(Nucleotide::A, pos) - expected).abs() < 1e-12);
    }
    assert!((matrix.max_score() - 4.0 * expected).abs() < 1e-12);
}

#[test]
fn test_background_is_normalized() {
    let background = Background::new([1.0, 1.0, 1.0, 1.0]).unwrap();
    assert!((background.frequency(Nucleotide::A) - 0.25).abs() < 1e-12);

    let skewed = Background::new([0.2, 0.4, 0.4, 0.2]).unwrap();
    assert!((skewed.frequency(Nucleotide::C) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_background_rejects_nonpositive_frequencies() {
    assert!(Background::new([0.0, 0.25, 0.25, 0.5]).is_err());
    assert!(Background::new([-0.1, 0.4, 0.4, 0.3]).is_err());
}

#[test]
fn test_reverse_complement_permutes_rows_and_columns() {
    let matrix = ScoringMatrix::from_sites(&["AACG", "AATG", "CACG"], None).unwrap();
    let rc = matrix.reverse_complement();
    let length = matrix.len();
    for pos in 0..length {
        for base in Nucleotide::ALL {
            assert_eq!(
                rc.score(base, pos),
                matrix.score(base.complement(), length - 1 - pos)
            );
        }
    }
}

#[test]
fn test_reverse_complement_round_trip() {
    let matrix = ScoringMatrix::from_sites(&["ACGTT", "TCGTA", "ACGAA"], None).unwrap();
    assert_eq!(matrix.reverse_complement().reverse_complement(), matrix);
}
