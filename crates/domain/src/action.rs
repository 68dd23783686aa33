//! Window actions and the mapping from crossings to actions.

use serde::{Deserialize, Serialize};

use crate::crossing::detect_crossings;
use crate::reading::Series;
use crate::sign::{Direction, Sign};
use crate::time::Timestamp;

/// What to do with the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Open,
    Close,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Close => f.write_str("close"),
        }
    }
}

/// How a threshold is being watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The threshold is an upper comfort bound: close when it gets warmer.
    Cooling,
    /// The threshold is a lower comfort bound: close when it gets colder.
    Heating,
}

impl Mode {
    #[must_use]
    pub fn from_cooling(cooling: bool) -> Self {
        if cooling { Self::Cooling } else { Self::Heating }
    }

    /// The comfort band edge this mode watches.
    #[must_use]
    pub fn bound(self) -> Bound {
        match self {
            Self::Cooling => Bound::Upper,
            Self::Heating => Bound::Lower,
        }
    }
}

/// Which edge of the comfort band produced an action.
///
/// The declaration order is the tie-break order: upper-bound actions come
/// before lower-bound actions at the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Upper,
    Lower,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

/// An action due at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledAction {
    pub at: Timestamp,
    pub action: Action,
    pub bound: Bound,
    /// Threshold whose crossing produced this action.
    pub threshold: f64,
}

/// Map a crossing direction to an action.
///
/// | mode    | positive | negative |
/// |---------|----------|----------|
/// | cooling | close    | open     |
/// | heating | open     | close    |
#[must_use]
pub fn map_crossing(direction: Direction, mode: Mode) -> Action {
    match (mode, direction) {
        (Mode::Cooling, Direction::Positive) | (Mode::Heating, Direction::Negative) => {
            Action::Close
        }
        (Mode::Cooling, Direction::Negative) | (Mode::Heating, Direction::Positive) => {
            Action::Open
        }
    }
}

/// Shift `series` by `threshold`, detect crossings and map each to an action
/// for `mode`.
#[must_use]
pub fn crossings_to_actions(series: &Series, threshold: f64, mode: Mode) -> Vec<ScheduledAction> {
    let signs: Vec<_> = series
        .shifted(threshold)
        .map(|(at, value)| (at, Sign::of(value)))
        .collect();
    detect_crossings(&signs)
        .into_iter()
        .map(|event| ScheduledAction {
            at: event.at,
            action: map_crossing(event.direction, mode),
            bound: mode.bound(),
            threshold,
        })
        .collect()
}
