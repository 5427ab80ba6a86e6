//! Ordered intersection of ascending index sequences.
//!
//! Dimensions each contribute an ascending, duplicate-free list of surviving
//! item indices. Composing them must not re-run label functions (which may be
//! expensive), so the engine folds this merge-style intersection over the
//! per-dimension lists instead.

use crate::definition::ItemIndex;

/// Intersects two ascending, duplicate-free index sequences, preserving
/// ascending order. Linear in `a.len() + b.len()`: a single pointer walks
/// `b` forward while `a` is scanned once.
pub fn intersect_sorted(a: &[ItemIndex], b: &[ItemIndex]) -> Vec<ItemIndex> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let mut p = 0;

    for &idx in a {
        while p < b.len() && b[p] < idx {
            p += 1;
        }
        if p >= b.len() {
            break;
        }
        if b[p] == idx {
            out.push(idx);
        }
    }

    out
}
