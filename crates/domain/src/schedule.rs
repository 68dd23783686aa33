//! Schedule building — merge the upper and lower bound watches.

use crate::action::{Mode, ScheduledAction, crossings_to_actions};
use crate::reading::Series;

/// Build the time-ordered list of window actions for `series`.
///
/// The upper bound (`max_temperature`, cooling) is watched when the series
/// mean lies above `min_temperature`; the lower bound (`min_temperature`,
/// heating) when the mean lies below `max_temperature`. With the mean
/// strictly inside the band both watches run. An empty series has no mean
/// and yields no actions.
///
/// Ties on timestamp are broken by [`Bound`](crate::action::Bound): upper
/// before lower. Within one bound, crossings keep their scan order.
#[must_use]
pub fn build_schedule(
    series: &Series,
    min_temperature: f64,
    max_temperature: f64,
) -> Vec<ScheduledAction> {
    let Some(mean) = series.mean() else {
        return Vec::new();
    };

    let mut actions = Vec::new();
    if mean > min_temperature {
        actions.extend(crossings_to_actions(series, max_temperature, Mode::Cooling));
    }
    if mean < max_temperature {
        actions.extend(crossings_to_actions(series, min_temperature, Mode::Heating));
    }
    actions.sort_by_key(|a| (a.at, a.bound));
    actions
}
