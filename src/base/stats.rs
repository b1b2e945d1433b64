//! Derived progress figures. Everything here is recomputed on demand from
//! the history and the goal; nothing is persisted.

use crate::base;

const WEEK_DAYS: u16 = 7;
const MONTH_DAYS: u16 = 30;

pub fn goal_reached(today_intake: base::Milliliters, goal: base::Milliliters) -> bool {
    today_intake >= goal
}

/// Fraction of `goal` consumed on `reference`.
pub fn daily_progress(
    history: &base::History,
    goal: base::Milliliters,
    reference: base::Date,
) -> f64 {
    ratio(history.intake_on(reference), goal, 1)
}

/// Fraction of the theoretical maximum (`goal * 7`) consumed over the 7
/// calendar days ending at `reference` inclusive. Days with no entry
/// contribute zero.
pub fn weekly_progress(
    history: &base::History,
    goal: base::Milliliters,
    reference: base::Date,
) -> f64 {
    window_progress(history, goal, reference, WEEK_DAYS)
}

/// Same as [`weekly_progress`], over a trailing 30-day window.
pub fn monthly_progress(
    history: &base::History,
    goal: base::Milliliters,
    reference: base::Date,
) -> f64 {
    window_progress(history, goal, reference, MONTH_DAYS)
}

/// Fraction of recorded days meeting or exceeding the goal. Zero for an
/// empty history.
pub fn goal_completion_rate(history: &base::History, goal: base::Milliliters) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let met = history
        .iter()
        .filter(|e| goal_reached(e.intake(), goal))
        .count();
    met as f64 / history.len() as f64
}

fn window_progress(
    history: &base::History,
    goal: base::Milliliters,
    reference: base::Date,
    days: u16,
) -> f64 {
    let window = base::Interval::trailing_days(reference, days);
    let total = history
        .slice_spanning_interval(window)
        .iter()
        .map(base::Entry::intake)
        .sum::<base::Milliliters>();
    ratio(total, goal, days)
}

fn ratio(total: base::Milliliters, goal: base::Milliliters, days: u16) -> f64 {
    let denom = goal.0 * days as u64;
    if denom == 0 {
        return 0.0;
    }
    total.0 as f64 / denom as f64
}
