use std::path::Path;

use anyhow::Result;
use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

use othello_horizon::board::Board;
use othello_horizon::cli::HorizonOptions;
use othello_horizon::fixpoint::{root_labels, solve};
use othello_horizon::graph_builder::build_graph;
use othello_horizon::knowledge::try_load_knowledge;
use othello_horizon::position_table::PositionTable;

fn main() -> Result<()> {
    let options = HorizonOptions::parse();

    let _logger = Logger::try_with_str(options.log_level.as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(if cfg!(debug_assertions) {
            AdaptiveFormat::WithThread
        } else {
            AdaptiveFormat::Default
        })
        .start()?;

    let start = match &options.board {
        Some(s) => Board::from_board_string(s)?,
        None => Board::standard_opening(),
    };

    let mut table = PositionTable::new();
    let root = build_graph(&mut table, start, options.depth);
    log::info!(
        "graph built: {} positions, {} edges",
        table.len(),
        table.edge_count()
    );

    let knowledge_path = Path::new(&options.knowledge);
    if let Some(stats) = try_load_knowledge(&mut table, knowledge_path)? {
        log::info!(
            "knowledge loaded: {} records ({} matched, {} isolated)",
            stats.records_read,
            stats.records_matched,
            stats.records_inserted_isolated
        );
    }

    solve(&mut table);

    let (label0, label1) = root_labels(&table, root);
    log::debug!(
        "root label state: label0={} label1={} board={}",
        label0,
        label1,
        table.board(root).debug_string()
    );
    println!("{},{}", label0, label1);

    Ok(())
}
