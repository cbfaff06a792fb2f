//! Builds the full position graph reachable from an Othello position out to a bounded
//! depth, then labels every position by two independent backward-induction thresholds:
//! "can the mover force a result >= 0" and "can the mover force a result > 0".
//!
//! # Basic Usage
//!
//! ```
//! use othello_horizon::board::Board;
//! use othello_horizon::fixpoint::{root_labels, solve};
//! use othello_horizon::graph_builder::build_graph;
//! use othello_horizon::position_table::PositionTable;
//!
//! let mut table = PositionTable::new();
//! let root = build_graph(&mut table, Board::standard_opening(), 2);
//! solve(&mut table);
//! let (label0, label1) = root_labels(&table, root);
//! assert!(label0 == 0 || label0 == 1 || label0 == -1);
//! assert!(label1 == 0 || label1 == 1 || label1 == -1);
//! ```

pub mod board;
pub mod cli;
pub mod error;
pub mod fixpoint;
pub mod graph_builder;
pub mod knowledge;
pub mod position_table;
pub mod symmetry;
