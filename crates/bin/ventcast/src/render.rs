//! Presentation — convert plan timestamps to a local zone and format them.

use std::fmt::Display;

use chrono::TimeZone;
use serde::Serialize;
use ventcast_domain::action::{Action, Bound, ScheduledAction};
use ventcast_domain::plan::WindowPlan;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn window_state(action: Action) -> &'static str {
    match action {
        Action::Open => "open",
        Action::Close => "closed",
    }
}

/// Human-readable plan, one action per line.
pub fn text<Tz>(plan: &WindowPlan, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = format!("initial state: window {}\n", window_state(plan.initial));
    if plan.actions.is_empty() {
        out.push_str("no window changes needed\n");
        return out;
    }
    for action in &plan.actions {
        out.push_str(&format!(
            "{} {} window ({} bound {}°C)\n",
            action.at.with_timezone(tz).format(TIME_FORMAT),
            action.action,
            action.bound,
            action.threshold
        ));
    }
    out
}

#[derive(Serialize)]
struct LocalPlan {
    initial: Action,
    actions: Vec<LocalAction>,
}

#[derive(Serialize)]
struct LocalAction {
    at: String,
    action: Action,
    bound: Bound,
    threshold: f64,
}

impl LocalAction {
    fn new<Tz>(action: &ScheduledAction, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            at: action.at.with_timezone(tz).to_rfc3339(),
            action: action.action,
            bound: action.bound,
            threshold: action.threshold,
        }
    }
}

/// Pretty-printed JSON plan with local RFC 3339 timestamps.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails.
pub fn json<Tz>(plan: &WindowPlan, tz: &Tz) -> serde_json::Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = LocalPlan {
        initial: plan.initial,
        actions: plan
            .actions
            .iter()
            .map(|a| LocalAction::new(a, tz))
            .collect(),
    };
    serde_json::to_string_pretty(&local)
}
