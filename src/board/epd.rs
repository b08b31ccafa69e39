//! Parsing for EPD (Extended Position Description) perft-suite files.
//!
//! Each non-blank line has the shape `<fen> ;D<depth> <nodes> ;D<depth> <nodes> ...`,
//! e.g. `rnbqkbnr/.../8 w KQkq - 0 1 ;D1 20 ;D2 400 ;D3 8902`. This module parses such
//! a line into a [`PerftCase`] and runs it against [`perft`](super::perft::perft),
//! reporting the first depth that mismatches (if any).

use super::perft::perft;
use super::{Board, PlecoxError};

/// One `;D<n> <count>` expectation parsed out of an EPD perft line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExpectation {
    /// The search depth this expectation applies to.
    pub depth: u16,
    /// The number of leaf nodes `perft` must return at that depth.
    pub nodes: u64,
}

/// A single parsed EPD perft-suite line: a starting position plus the depth/node-count
/// pairs it is expected to produce.
#[derive(Clone, Debug)]
pub struct PerftCase {
    /// The raw FEN field of the line.
    pub fen: String,
    /// The `;D<n> <count>` expectations, in the order they appeared on the line.
    pub expectations: Vec<DepthExpectation>,
}

/// The outcome of running one [`DepthExpectation`] against a [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthResult {
    /// The depth that was run.
    pub depth: u16,
    /// The expected node count from the EPD line.
    pub expected: u64,
    /// The node count `perft` actually returned.
    pub actual: u64,
}

impl DepthResult {
    /// Returns `true` if the actual node count matched the expectation.
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl PerftCase {
    /// Parses a single EPD perft line of the form
    /// `<fen fields> ;D1 20 ;D2 400 ;D3 8902`.
    ///
    /// The FEN must carry all six standard fields, same as any string accepted by
    /// [`Board::from_fen`]. Lines are split on `;`; the first segment is the FEN, and
    /// each subsequent segment must be `D<depth> <nodes>`.
    pub fn parse(line: &str) -> Result<PerftCase, PlecoxError> {
        let line = line.trim();
        let mut segments = line.split(';');

        let fen = segments
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PlecoxError::EpdParseError {
                line: line.to_string(),
                reason: "missing fen field".to_string(),
            })?;

        let mut expectations = Vec::new();
        for segment in segments {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            expectations.push(parse_depth_segment(line, segment)?);
        }

        if expectations.is_empty() {
            return Err(PlecoxError::EpdParseError {
                line: line.to_string(),
                reason: "no ;D<depth> <nodes> segments found".to_string(),
            });
        }

        Ok(PerftCase { fen, expectations })
    }

    /// Builds the starting [`Board`] for this case.
    pub fn board(&self) -> Result<Board, PlecoxError> {
        Board::from_fen(&self.fen)
    }

    /// Runs every expectation in this case against a freshly built board, returning one
    /// [`DepthResult`] per expectation in order. Stops and returns early only on a FEN
    /// parse failure; mismatched node counts are reported, not short-circuited, so a
    /// caller can see every depth's result.
    pub fn run(&self) -> Result<Vec<DepthResult>, PlecoxError> {
        let board = self.board()?;
        Ok(self
            .expectations
            .iter()
            .map(|exp| DepthResult {
                depth: exp.depth,
                expected: exp.nodes,
                actual: perft(&board, exp.depth),
            })
            .collect())
    }
}

fn parse_depth_segment(line: &str, segment: &str) -> Result<DepthExpectation, PlecoxError> {
    let malformed = || PlecoxError::EpdParseError {
        line: line.to_string(),
        reason: format!("malformed depth segment '{}'", segment),
    };

    let mut parts = segment.split_whitespace();
    let depth_tok = parts.next().ok_or_else(malformed)?;
    let nodes_tok = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    if !(depth_tok.starts_with('D') || depth_tok.starts_with('d')) {
        return Err(malformed());
    }
    let depth: u16 = depth_tok[1..].parse().map_err(|_| malformed())?;
    let nodes: u64 = nodes_tok.parse().map_err(|_| malformed())?;

    Ok(DepthExpectation { depth, nodes })
}

/// Parses every non-blank, non-comment (`#`-prefixed) line of an EPD perft-suite file.
///
/// A line that fails to parse is reported via the returned `Vec` of errors, indexed by
/// its 1-based line number; parsing continues so a caller can log every bad line in one
/// pass instead of bailing at the first one (matching how the perft REPL's
/// `go perftsuite` command is meant to tolerate a mix of good and malformed lines).
pub fn parse_epd_file(contents: &str) -> (Vec<PerftCase>, Vec<(usize, PlecoxError)>) {
    let mut cases = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match PerftCase::parse(line) {
            Ok(case) => cases.push(case),
            Err(e) => errors.push((idx + 1, e)),
        }
    }

    (cases, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_depth() {
        let case = PerftCase::parse(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20",
        )
        .unwrap();
        assert_eq!(case.expectations.len(), 1);
        assert_eq!(case.expectations[0].depth, 1);
        assert_eq!(case.expectations[0].nodes, 20);
    }

    #[test]
    fn parses_multiple_depths() {
        let case = PerftCase::parse(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400 ;D3 8902",
        )
        .unwrap();
        assert_eq!(case.expectations.len(), 3);
        assert_eq!(case.expectations[2], DepthExpectation { depth: 3, nodes: 8902 });
    }

    #[test]
    fn rejects_missing_nodes() {
        assert!(PerftCase::parse(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1"
        )
        .is_err());
    }

    #[test]
    fn rejects_missing_fen() {
        assert!(PerftCase::parse(";D1 20").is_err());
    }

    #[test]
    fn runs_start_pos_case() {
        let case = PerftCase::parse(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400",
        )
        .unwrap();
        let results = case.run().unwrap();
        assert!(results.iter().all(|r| r.passed()));
    }

    #[test]
    fn parse_file_skips_blank_and_comment_lines() {
        let contents = "\n# a comment\nrnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20\n\n";
        let (cases, errors) = parse_epd_file(contents);
        assert_eq!(cases.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn parse_file_reports_bad_lines_without_stopping() {
        let contents = "not a valid line\nrnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20\n";
        let (cases, errors) = parse_epd_file(contents);
        assert_eq!(cases.len(), 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, 1);
    }
}
