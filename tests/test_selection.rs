//! Unit tests for selection-expression parsing

use nb2pdf::pipeline::selection::{parse, ParseError};

#[test]
fn test_single_number() {
    assert_eq!(parse("3", 5).unwrap(), vec![3]);
}

#[test]
fn test_range_expands_inclusively() {
    assert_eq!(parse("2-4;6", 10).unwrap(), vec![2, 3, 4, 6]);
}

#[test]
fn test_dedup_preserves_first_occurrence() {
    assert_eq!(parse("1;3;1;2", 5).unwrap(), vec![1, 3, 2]);
}

#[test]
fn test_all_aliases_select_everything() {
    let full: Vec<usize> = (1..=7).collect();
    assert_eq!(parse("all", 7).unwrap(), full);
    assert_eq!(parse("", 7).unwrap(), full);
    assert_eq!(parse("  ALL  ", 7).unwrap(), full);
    assert_eq!(parse("*", 7).unwrap(), full);
    assert_eq!(parse("Everything", 7).unwrap(), full);
}

#[test]
fn test_descending_range_expands_high_to_low() {
    assert_eq!(parse("5-2", 6).unwrap(), vec![5, 4, 3, 2]);
}

#[test]
fn test_combined_ranges_and_numbers() {
    assert_eq!(parse("1-3;5;7-9", 10).unwrap(), vec![1, 2, 3, 5, 7, 8, 9]);
}

#[test]
fn test_whitespace_around_clauses() {
    assert_eq!(parse(" 1 ; 2 - 3 ", 5).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_out_of_range_fails_whole_parse() {
    assert!(matches!(
        parse("11", 10),
        Err(ParseError::InvalidSelection { .. })
    ));
    // A single bad index poisons the whole expression, valid clauses included
    assert!(parse("1;2;99", 10).is_err());
    assert!(parse("0", 10).is_err());
}

#[test]
fn test_malformed_clause_fails() {
    assert!(parse("abc", 10).is_err());
    assert!(parse("1;x;3", 10).is_err());
    assert!(parse("1-", 10).is_err());
    assert!(parse("-3", 10).is_err());
    assert!(parse("1.5", 10).is_err());
}

#[test]
fn test_never_returns_out_of_range_or_duplicates() {
    let expressions = ["1-5", "5-1", "2;2;2", "1;1-3;3", "all", ""];
    for expr in expressions {
        let result = parse(expr, 5).unwrap();
        let mut seen = Vec::new();
        for index in result {
            assert!((1..=5).contains(&index), "{expr} produced {index}");
            assert!(!seen.contains(&index), "{expr} produced duplicate {index}");
            seen.push(index);
        }
    }
}
