//! Window plan — initial state plus the merged action schedule.

use serde::{Deserialize, Serialize};

use crate::action::{Action, ScheduledAction};
use crate::band::ComfortBand;
use crate::initial_state::assume_start;
use crate::reading::Series;
use crate::schedule::build_schedule;

/// Everything reported for one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowPlan {
    /// Assumed window state before the first action.
    pub initial: Action,
    /// Actions in ascending time order.
    pub actions: Vec<ScheduledAction>,
}

/// Compute the plan for `series` within `band`.
#[must_use]
pub fn plan(series: &Series, band: &ComfortBand) -> WindowPlan {
    let (min, max) = (band.min_temperature(), band.max_temperature());
    WindowPlan {
        initial: assume_start(series, min, max),
        actions: build_schedule(series, min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Reading;
    use crate::time::hour_of;
    use chrono::NaiveDate;

    #[test]
    fn should_report_closed_and_no_actions_for_empty_series() {
        let p = plan(&Series::empty(), &ComfortBand::default());
        assert_eq!(p.initial, Action::Close);
        assert!(p.actions.is_empty());
    }

    #[test]
    fn should_not_filter_schedule_by_initial_state() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
        let series = Series::new(
            [15.0, 18.0, 19.0, 22.0, 20.0]
                .iter()
                .zip(0..)
                .map(|(&t, h)| Reading::new(hour_of(day, h), t))
                .collect(),
        )
        .unwrap();
        let p = plan(&series, &ComfortBand::default());
        assert_eq!(p.initial, Action::Close);
        assert_eq!(
            p.actions.iter().map(|a| a.action).collect::<Vec<_>>(),
            vec![Action::Open, Action::Close, Action::Open]
        );
    }
}
