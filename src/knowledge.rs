//! Ingests the endgame knowledge CSV and seeds `label0`/`label1` for matched positions (C6).
//!
//! The format is a trivial line parser by design (see SPEC_FULL.md §4.6): column 0 is a
//! 64-character board string, column 2 is a signed integer score, other columns are ignored,
//! and the first line is a header that is skipped. No CSV crate is pulled in for this —
//! a hand-rolled comma split is all the format needs.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::board::Board;
use crate::error::HorizonError;
use crate::position_table::PositionTable;
use crate::symmetry::normalize;

/// Summary counters returned after a successful load, for diagnostics/logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct KnowledgeStats {
    pub records_read: usize,
    pub records_matched: usize,
    pub records_inserted_isolated: usize,
}

fn parse_record(line: &str) -> Result<(Board, i32), HorizonError> {
    let columns: Vec<&str> = line.split(',').collect();
    let board_string = columns.get(0).ok_or(HorizonError::MissingColumn(0))?;
    let score_string = columns.get(2).ok_or(HorizonError::MissingColumn(2))?;

    let board = Board::from_board_string(board_string)?;
    let score = score_string
        .trim()
        .parse::<i32>()
        .map_err(|_| HorizonError::InvalidScore((*score_string).to_string()))?;
    Ok((board, score))
}

/// Loads the knowledge CSV at `path`, seeding `label0`/`label1` for every record. Records
/// whose board was never reached during graph construction are inserted as isolated
/// vertices with only their labels set. Records overwrite any existing labels — the
/// knowledge source is authoritative.
pub fn load_knowledge(table: &mut PositionTable, path: &Path) -> Result<KnowledgeStats, HorizonError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();
    lines.next(); // skip the one-line header

    let mut stats = KnowledgeStats::default();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (board, score) = parse_record(line)?;

        let before = table.len();
        let id = table.to_id(normalize(&board));
        if table.len() > before {
            stats.records_inserted_isolated += 1;
        } else {
            stats.records_matched += 1;
        }

        table.set_label0(id, if score >= 0 { 1 } else { -1 });
        table.set_label1(id, if score > 0 { 1 } else { -1 });

        stats.records_read += 1;
    }

    info!(
        "knowledge: read {} records ({} matched existing vertices, {} inserted as isolated vertices)",
        stats.records_read, stats.records_matched, stats.records_inserted_isolated
    );
    Ok(stats)
}

/// Like [`load_knowledge`], but a missing file at `path` is treated as "no knowledge
/// available" (logged, not fatal) rather than an error — any other I/O failure still is.
pub fn try_load_knowledge(
    table: &mut PositionTable,
    path: &Path,
) -> Result<Option<KnowledgeStats>, HorizonError> {
    match fs::metadata(path) {
        Ok(_) => load_knowledge(table, path).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "knowledge file {} not found; solving with graph-only labels",
                path.display()
            );
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_csv(contents: &str) -> tempfile_path::TempCsv {
        tempfile_path::TempCsv::new(contents)
    }

    // a tiny self-contained temp-file helper, avoiding a dependency on the `tempfile` crate
    // for a handful of short-lived test fixtures
    mod tempfile_path {
        use std::fs;
        use std::path::{Path, PathBuf};

        pub struct TempCsv {
            path: PathBuf,
        }

        impl TempCsv {
            pub fn new(contents: &str) -> Self {
                let mut path = std::env::temp_dir();
                let unique = format!(
                    "othello_horizon_test_{:?}_{}.csv",
                    std::thread::current().id(),
                    contents.len()
                );
                path.push(unique);
                fs::write(&path, contents).expect("failed to write temp csv");
                Self { path }
            }

            pub fn path(&self) -> &Path {
                &self.path
            }
        }

        impl Drop for TempCsv {
            fn drop(&mut self) {
                let _ = fs::remove_file(&self.path);
            }
        }
    }

    fn opening_row(score: i32) -> String {
        format!("{},ignored,{},ignored\n", Board::standard_opening().board_string(), score)
    }

    #[test]
    fn loads_and_seeds_matched_record() {
        let mut table = PositionTable::new();
        let id = table.to_id(normalize(&Board::standard_opening()));

        let csv = format!("header\n{}", opening_row(5));
        let file = write_temp_csv(&csv);

        let stats = load_knowledge(&mut table, file.path()).unwrap();
        assert_eq!(stats.records_read, 1);
        assert_eq!(stats.records_matched, 1);
        assert_eq!(stats.records_inserted_isolated, 0);
        assert_eq!(table.label0(id), 1);
        assert_eq!(table.label1(id), 1);
    }

    #[test]
    fn unreached_record_becomes_isolated_vertex() {
        let mut table = PositionTable::new();
        assert_eq!(table.len(), 0);

        let csv = format!("header\n{}", opening_row(-5));
        let file = write_temp_csv(&csv);

        let stats = load_knowledge(&mut table, file.path()).unwrap();
        assert_eq!(stats.records_inserted_isolated, 1);
        assert_eq!(table.len(), 1);
        let id = table.to_id(normalize(&Board::standard_opening()));
        assert_eq!(table.label0(id), -1);
        assert_eq!(table.label1(id), -1);
    }

    #[test]
    fn negative_score_sets_negative_labels_zero_score_splits_thresholds() {
        let mut table = PositionTable::new();
        let csv = format!("header\n{}", opening_row(0));
        let file = write_temp_csv(&csv);
        load_knowledge(&mut table, file.path()).unwrap();
        let id = table.to_id(normalize(&Board::standard_opening()));
        assert_eq!(table.label0(id), 1); // score >= 0
        assert_eq!(table.label1(id), -1); // not score > 0
    }

    #[test]
    fn missing_default_file_is_non_fatal() {
        let mut table = PositionTable::new();
        let missing = Path::new("/nonexistent/path/knowledge_does_not_exist.csv");
        let result = try_load_knowledge(&mut table, missing).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn malformed_score_is_reported() {
        let mut table = PositionTable::new();
        let csv = format!(
            "header\n{},ignored,not-a-number,ignored\n",
            Board::standard_opening().board_string()
        );
        let file = write_temp_csv(&csv);
        let err = load_knowledge(&mut table, file.path()).unwrap_err();
        match err {
            HorizonError::InvalidScore(_) => {}
            other => panic!("expected InvalidScore, got {other:?}"),
        }
    }
}
