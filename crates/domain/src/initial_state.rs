//! Assumed starting state of the window.

use crate::action::Action;
use crate::reading::Series;

/// Estimate the window state at the start of `series`.
///
/// Only the first raw reading is inspected: outside the band the window is
/// assumed closed, inside it open. An empty series is assumed closed.
/// Reported for display only; it does not filter the schedule.
#[must_use]
pub fn assume_start(series: &Series, min_temperature: f64, max_temperature: f64) -> Action {
    match series.first() {
        None => Action::Close,
        Some(first) if first.temperature > max_temperature => Action::Close,
        Some(first) if first.temperature < min_temperature => Action::Close,
        Some(_) => Action::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Reading;
    use crate::time::hour_of;
    use chrono::NaiveDate;

    fn starting_at(temperature: f64) -> Series {
        let day = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
        Series::new(vec![
            Reading::new(hour_of(day, 0), temperature),
            Reading::new(hour_of(day, 1), 19.0),
        ])
        .unwrap()
    }

    #[test]
    fn should_assume_closed_when_series_is_empty() {
        assert_eq!(assume_start(&Series::empty(), 17.0, 21.0), Action::Close);
    }

    #[test]
    fn should_assume_closed_when_first_reading_is_too_cold() {
        assert_eq!(assume_start(&starting_at(15.0), 17.0, 21.0), Action::Close);
    }

    #[test]
    fn should_assume_closed_when_first_reading_is_too_warm() {
        assert_eq!(assume_start(&starting_at(23.0), 17.0, 21.0), Action::Close);
    }

    #[test]
    fn should_assume_open_when_first_reading_is_comfortable() {
        assert_eq!(assume_start(&starting_at(19.0), 17.0, 21.0), Action::Open);
    }

    #[test]
    fn should_assume_open_on_band_edges() {
        assert_eq!(assume_start(&starting_at(17.0), 17.0, 21.0), Action::Open);
        assert_eq!(assume_start(&starting_at(21.0), 17.0, 21.0), Action::Open);
    }
}
