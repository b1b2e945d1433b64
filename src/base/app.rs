use crate::base;
use crate::base::stats;

/// The whole application state: persisted history, the daily goal, and the
/// in-memory running total for the current day. Derived figures are computed
/// from here on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub history: base::History,
    pub goal: base::Milliliters,
    pub today: base::Date,
    /// Running total for `today`. Kept in lockstep with the history entry
    /// for `today`, which is replaced wholesale on every change.
    pub today_total: base::Milliliters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    IntakeAdded(base::Milliliters),
    TodayReset,
    GoalChanged(base::Milliliters),
}

impl State {
    pub fn new(history: base::History, goal: base::Milliliters, today: base::Date) -> Self {
        let today_total = history.intake_on(today);
        Self {
            history,
            goal,
            today,
            today_total,
        }
    }

    pub fn goal_reached(&self) -> bool {
        stats::goal_reached(self.today_total, self.goal)
    }

    /// Pure state transition. Events that violate an invariant (zero intake,
    /// intake past a reached goal, a total past the representable maximum,
    /// non-positive goal) leave the state unchanged.
    pub fn update(self, event: Event) -> Self {
        match event {
            Event::IntakeAdded(amount) => {
                if amount == base::Milliliters(0)
                    || self.goal_reached()
                    || self.today_total.checked_add(amount).is_none()
                {
                    return self;
                }
                let mut history = self.history;
                let today_total = history.record(self.today, amount);
                Self {
                    history,
                    today_total,
                    ..self
                }
            }
            Event::TodayReset => {
                let mut history = self.history;
                history.reset(self.today);
                Self {
                    history,
                    today_total: base::Milliliters(0),
                    ..self
                }
            }
            Event::GoalChanged(goal) => {
                if goal == base::Milliliters(0) {
                    return self;
                }
                Self { goal, ..self }
            }
        }
    }
}
