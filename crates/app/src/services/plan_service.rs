//! Plan service — fetch a forecast and turn it into a window plan.

use ventcast_domain::action::Bound;
use ventcast_domain::band::ComfortBand;
use ventcast_domain::error::VentcastError;
use ventcast_domain::plan::{WindowPlan, plan};
use ventcast_domain::query::ForecastQuery;
use ventcast_domain::reading::Series;

use crate::ports::WeatherSource;

/// Application service computing window plans from a weather source.
pub struct PlanService<S> {
    source: S,
}

impl<S: WeatherSource> PlanService<S> {
    /// Create a new service backed by the given weather source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the forecast for `query` and plan window actions within `band`.
    ///
    /// # Errors
    ///
    /// Returns [`VentcastError::Source`] when the weather source fails, or
    /// [`VentcastError::Validation`] when it delivers an invalid series.
    #[tracing::instrument(skip(self, query, band), fields(query = %query))]
    pub async fn plan_for(
        &self,
        query: &ForecastQuery,
        band: &ComfortBand,
    ) -> Result<WindowPlan, VentcastError> {
        let series = self.source.fetch_series(query).await?;
        Ok(Self::plan_series(&series, band))
    }

    /// Plan window actions for a series already in hand.
    #[must_use]
    pub fn plan_series(series: &Series, band: &ComfortBand) -> WindowPlan {
        match series.mean() {
            Some(mean) => tracing::info!(
                readings = series.len(),
                mean,
                min = band.min_temperature(),
                max = band.max_temperature(),
                "planning window actions"
            ),
            None => tracing::warn!("weather source returned an empty series"),
        }

        let result = plan(series, band);

        let upper = result
            .actions
            .iter()
            .filter(|a| a.bound == Bound::Upper)
            .count();
        tracing::debug!(
            initial = %result.initial,
            upper,
            lower = result.actions.len() - upper,
            "crossings found"
        );
        for action in &result.actions {
            tracing::debug!(
                at = %action.at,
                action = %action.action,
                bound = %action.bound,
                threshold = action.threshold,
                "scheduled"
            );
        }
        result
    }
}
