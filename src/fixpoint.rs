//! Dual-threshold backward induction over the position graph (C7).
//!
//! Two independent labelings — threshold-0 (`label0`, "can force >= 0") and threshold-1
//! (`label1`, "can force > 0") — are propagated from seeded vertices back toward the root
//! using predecessor-driven relaxation with per-node outgoing counters. The two labelings
//! use entirely separate queues and counters and never influence each other.

use std::collections::VecDeque;

use crate::position_table::{PositionId, PositionTable};

#[derive(Clone, Copy)]
enum Threshold {
    Zero,
    One,
}

fn label_of(table: &PositionTable, id: PositionId, which: Threshold) -> i8 {
    match which {
        Threshold::Zero => table.label0(id),
        Threshold::One => table.label1(id),
    }
}

fn set_label(table: &mut PositionTable, id: PositionId, which: Threshold, value: i8) {
    match which {
        Threshold::Zero => table.set_label0(id, value),
        Threshold::One => table.set_label1(id, value),
    }
}

/// Drains `queue`, relaxing predecessors of each popped vertex under outgoing counters `out`.
fn drain(table: &mut PositionTable, which: Threshold, out: &mut [usize], queue: &mut VecDeque<PositionId>) {
    while let Some(i) = queue.pop_front() {
        let label_i = label_of(table, i, which);
        debug_assert_ne!(label_i, 0, "dequeued vertex must have a determined label");

        let preds: Vec<PositionId> = table.prev(i).to_vec();
        for j in preds {
            let ju = j as usize;
            if label_of(table, j, which) != 0 || out[ju] == 0 {
                continue;
            }
            if label_i > 0 {
                // i is winning for its mover, i.e. losing for j's mover reaching it;
                // this does not prove j winning, only removes one candidate proof
                out[ju] -= 1;
                if out[ju] == 0 {
                    set_label(table, j, which, -1);
                    queue.push_back(j);
                }
            } else {
                // i is losing for its mover, so j has a move to a losing position: j wins
                out[ju] = 0;
                set_label(table, j, which, 1);
                queue.push_back(j);
            }
        }
    }
}

/// Runs the dual fixpoint to quiescence over every vertex currently in `table`.
///
/// Call only after the graph is fully built (C5) and knowledge has been loaded (C6); the
/// solver performs no further graph mutation, only label updates.
pub fn solve(table: &mut PositionTable) {
    let n = table.len();

    let mut out0: Vec<usize> = (0..n as PositionId).map(|i| table.next(i).len()).collect();
    let mut out1 = out0.clone();

    let mut q0: VecDeque<PositionId> = VecDeque::new();
    let mut q1: VecDeque<PositionId> = VecDeque::new();

    for i in 0..n as PositionId {
        let iu = i as usize;
        if table.label0(i) != 0 {
            out0[iu] = 0;
            q0.push_back(i);
        }
        if table.label1(i) != 0 {
            out1[iu] = 0;
            q1.push_back(i);
        }
    }

    // interleave the two queues arbitrarily; each is internally processed to quiescence
    // across the full loop, never influencing the other's counters or labels
    while !q0.is_empty() || !q1.is_empty() {
        if !q0.is_empty() {
            let mut batch = VecDeque::new();
            std::mem::swap(&mut batch, &mut q0);
            drain(table, Threshold::Zero, &mut out0, &mut batch);
        }
        if !q1.is_empty() {
            let mut batch = VecDeque::new();
            std::mem::swap(&mut batch, &mut q1);
            drain(table, Threshold::One, &mut out1, &mut batch);
        }
    }
}

/// The final `(label0, label1)` pair at `root`.
pub fn root_labels(table: &PositionTable, root: PositionId) -> (i8, i8) {
    (table.label0(root), table.label1(root))
}
