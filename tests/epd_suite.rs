extern crate plecox;

use plecox::board::epd::{parse_epd_file, PerftCase};

const CANONICAL_EPD: &str = "\
rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400 ;D3 8902
r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1 ;D1 48 ;D2 2039
8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1 ;D1 14 ;D2 191 ;D3 2812
";

#[test]
fn parses_canonical_suite_without_errors() {
    let (cases, errors) = parse_epd_file(CANONICAL_EPD);
    assert!(errors.is_empty());
    assert_eq!(cases.len(), 3);
}

#[test]
fn canonical_suite_matches_expected_node_counts() {
    let (cases, _) = parse_epd_file(CANONICAL_EPD);
    for case in &cases {
        let results = case.run().unwrap();
        for r in &results {
            assert!(
                r.passed(),
                "fen '{}' depth {} expected {} got {}",
                case.fen,
                r.depth,
                r.expected,
                r.actual
            );
        }
    }
}

#[test]
fn kiwipete_case_via_epd() {
    let line = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1 ;D1 48 ;D2 2039 ;D3 97862";
    let case = PerftCase::parse(line).unwrap();
    let results = case.run().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.passed()));
}

#[test]
fn skips_blank_lines_and_comments() {
    let contents = "\n# comment line, ignored\n\nrnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20\n";
    let (cases, errors) = parse_epd_file(contents);
    assert_eq!(cases.len(), 1);
    assert!(errors.is_empty());
}

#[test]
fn reports_malformed_lines_by_line_number() {
    let contents = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20\nthis is not epd\n;D1 5\n";
    let (cases, errors) = parse_epd_file(contents);
    assert_eq!(cases.len(), 1);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].0, 2);
    assert_eq!(errors[1].0, 3);
}
