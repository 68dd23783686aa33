//! Weather source port — where forecast temperature series come from.

use std::future::Future;

use ventcast_domain::error::VentcastError;
use ventcast_domain::query::ForecastQuery;
use ventcast_domain::reading::Series;

/// Supplier of forecast temperature series.
///
/// Implementations live in adapter crates (e.g. `adapter_brightsky`). They
/// must fail with a distinguishable error instead of handing malformed data
/// to the scheduling core; a returned [`Series`] is already validated.
pub trait WeatherSource: Send + Sync {
    /// Fetch the hourly temperature series for `query`.
    fn fetch_series(
        &self,
        query: &ForecastQuery,
    ) -> impl Future<Output = Result<Series, VentcastError>> + Send;
}
