//! Breadth-layered expansion of the position graph from the initial position up to a
//! bounded depth (C5).
//!
//! # Notes
//! Every board reached via a real move strictly increases the total disc count, so a
//! canonical board's "depth" (in real plies) is a function of its popcount alone — the same
//! canonical board can never be first reached at two different layers. This is why per-layer
//! "is this a new id" tracking is sufficient for the `visited` deduplication the layering
//! algorithm calls for; no cross-layer bookkeeping is needed.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::board::{Board, BOARD_SIZE};
use crate::position_table::{PositionId, PositionTable};
use crate::symmetry::normalize;

fn sign_ge_zero(v: i32) -> i8 {
    if v >= 0 {
        1
    } else {
        -1
    }
}

fn sign_gt_zero(v: i32) -> i8 {
    if v > 0 {
        1
    } else {
        -1
    }
}

/// Inserts `b` into the table; if this is the board's first appearance, also remembers it
/// for expansion in the next layer.
fn insert_and_track(
    table: &mut PositionTable,
    b: Board,
    next_layer: &mut Vec<(Board, PositionId)>,
) -> PositionId {
    let before = table.len();
    let id = table.to_id(b);
    if table.len() > before {
        next_layer.push((b, id));
    }
    id
}

/// Expands one board at the current layer, recording edges and collecting any newly reached
/// boards into `next_layer`.
fn expand_one(
    table: &mut PositionTable,
    b: Board,
    b_id: PositionId,
    next_layer: &mut Vec<(Board, PositionId)>,
) {
    let moves = b.moves();
    if !moves.is_empty() {
        for mv in moves {
            let (x, y) = (mv % BOARD_SIZE, mv / BOARD_SIZE);
            let successor = normalize(&b.apply(x, y).flip_turn());
            let successor_id = insert_and_track(table, successor, next_layer);
            table.add_edge(b_id, successor_id);
        }
        return;
    }

    // mover must pass; the pass position is its own vertex (not part of next_layer — it
    // gets expanded inline here, preserving the one-ply-per-edge turn-flip invariant)
    let pass_board = normalize(&b.flip_turn());
    let pass_id = table.to_id(pass_board);
    table.add_edge(b_id, pass_id);

    let pass_moves = pass_board.moves();
    if pass_moves.is_empty() {
        let v = b.value();
        table.set_label0(b_id, sign_ge_zero(v));
        table.set_label1(b_id, sign_gt_zero(v));
        return;
    }

    for mv in pass_moves {
        let (x, y) = (mv % BOARD_SIZE, mv / BOARD_SIZE);
        let successor = normalize(&pass_board.apply(x, y).flip_turn());
        let successor_id = insert_and_track(table, successor, next_layer);
        table.add_edge(pass_id, successor_id);
    }
}

/// Finalizes a depth-D frontier board without expanding it further: records its pass edge
/// (if it has no legal move) and marks it terminal only if both sides are then stuck.
fn finalize_frontier(table: &mut PositionTable, b: Board, b_id: PositionId) {
    if !b.moves().is_empty() {
        return;
    }
    let pass_board = normalize(&b.flip_turn());
    let pass_id = table.to_id(pass_board);
    table.add_edge(b_id, pass_id);

    if pass_board.moves().is_empty() {
        let v = b.value();
        table.set_label0(b_id, sign_ge_zero(v));
        table.set_label1(b_id, sign_gt_zero(v));
    }
}

/// Expands the position graph from `start` to depth `depth`, returning the root's id.
///
/// `start` need not already be canonical; it is normalized here.
pub fn build_graph(table: &mut PositionTable, start: Board, depth: usize) -> PositionId {
    let root = normalize(&start);
    let root_id = table.to_id(root);

    let progress = ProgressBar::new(depth as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40.cyan/blue} layer {pos}/{len}")
    {
        progress.set_style(style);
    }

    let mut layer: Vec<(Board, PositionId)> = vec![(root, root_id)];
    for k in 0..depth {
        let mut next_layer: Vec<(Board, PositionId)> = Vec::new();
        for &(b, b_id) in &layer {
            expand_one(table, b, b_id, &mut next_layer);
        }
        info!(
            "layer {} expanded to {} new positions ({} total, {} edges)",
            k + 1,
            next_layer.len(),
            table.len(),
            table.edge_count()
        );
        progress.inc(1);
        layer = next_layer;
    }

    for &(b, b_id) in &layer {
        finalize_frontier(table, b, b_id);
    }
    progress.finish_and_clear();

    root_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_graph_is_a_single_unexpanded_root() {
        let mut table = PositionTable::new();
        let root = build_graph(&mut table, Board::standard_opening(), 0);
        // finalize_frontier runs on layer[0] = { root }, which has moves, so nothing else
        // is added
        assert_eq!(table.len(), 1);
        assert_eq!(table.next(root).len(), 0);
    }

    #[test]
    fn shallow_graph_has_consistent_adjacency() {
        let mut table = PositionTable::new();
        build_graph(&mut table, Board::standard_opening(), 3);
        for id in 0..table.len() as PositionId {
            for &succ in table.next(id) {
                assert!(table.prev(succ).contains(&id));
            }
            for &pred in table.prev(id) {
                assert!(table.next(pred).contains(&id));
            }
        }
    }

    #[test]
    fn graph_grows_monotonically_with_depth() {
        let mut shallow = PositionTable::new();
        build_graph(&mut shallow, Board::standard_opening(), 2);
        let mut deep = PositionTable::new();
        build_graph(&mut deep, Board::standard_opening(), 4);
        assert!(deep.len() >= shallow.len());
    }
}
