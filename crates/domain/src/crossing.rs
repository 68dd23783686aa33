//! Crossing detection — sign transitions in a shifted series.
//!
//! The scan walks adjacent pairs left to right. Exact-zero readings are
//! resolved against the last nonzero sign seen so far, so a series that dips
//! onto the threshold and returns to the same side yields no crossing, while
//! one that passes *through* a zero run yields exactly one.

use serde::{Deserialize, Serialize};

use crate::sign::{Direction, Sign};
use crate::time::Timestamp;

/// A transition between two consecutive readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingEvent<T = Timestamp> {
    /// Timestamp of the left reading of the pair.
    pub at: T,
    /// Side of the threshold the series moves into.
    pub direction: Direction,
}

/// Accumulator threaded through the scan.
#[derive(Debug)]
struct ScanState<T> {
    /// Last nonzero left-hand sign; [`Sign::Zero`] until one has been seen.
    last_nonzero: Sign,
    events: Vec<CrossingEvent<T>>,
}

/// Decide whether the pair `(left, right)` is a crossing.
///
/// A zero on the left defers to `last_nonzero`. When no nonzero sign has
/// been observed yet, any move off zero counts.
#[must_use]
pub fn step(last_nonzero: Sign, left: Sign, right: Sign) -> Option<Direction> {
    let effective_left = if left.is_zero() { last_nonzero } else { left };
    match (effective_left, right) {
        (Sign::Negative | Sign::Zero, Sign::Positive) => Some(Direction::Positive),
        (Sign::Positive | Sign::Zero, Sign::Negative) => Some(Direction::Negative),
        _ => None,
    }
}

/// Scan `(timestamp, sign)` points and emit crossings in time order.
///
/// Returns at most `points.len() - 1` events, each stamped with a
/// timestamp taken from the input.
#[must_use]
pub fn detect_crossings<T: Copy>(points: &[(T, Sign)]) -> Vec<CrossingEvent<T>> {
    let initial = ScanState {
        last_nonzero: Sign::Zero,
        events: Vec::new(),
    };
    let state = points.windows(2).fold(initial, |mut state, pair| {
        let (at, left) = pair[0];
        let (_, right) = pair[1];
        if let Some(direction) = step(state.last_nonzero, left, right) {
            state.events.push(CrossingEvent { at, direction });
        }
        if !left.is_zero() {
            state.last_nonzero = left;
        }
        state
    });
    state.events
}
