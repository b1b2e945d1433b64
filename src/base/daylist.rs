use crate::base;

/// Renders the per-day history: one row per recorded day with its intake,
/// percent of goal, and a goal met/missed marker.
pub struct Daylist<'a> {
    charset: &'a base::Charset,
    goal: base::Milliliters,
    history: &'a base::History,
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub goal: base::Milliliters,
    pub history: base::History,
}

impl Config {
    pub fn to_daylist(&self) -> Daylist<'_> {
        let alignment_charlen = self
            .history
            .iter()
            .map(|e| e.intake().charlen() + base::util::MIN_DASHES_COUNT)
            .max()
            .unwrap_or_default();
        Daylist {
            charset: &self.charset,
            goal: self.goal,
            history: &self.history,
            alignment_charlen,
        }
    }
}

impl Daylist<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, e: &base::Entry) -> std::fmt::Result {
        write!(w, "{} ", e.date())?;
        for _ in 0..(self.alignment_charlen - e.intake().charlen()) {
            w.write_char(self.charset.dash)?;
        }
        write!(w, " {} ml", e.intake())?;

        let ratio = if self.goal.0 == 0 {
            0.0
        } else {
            e.intake().0 as f64 / self.goal.0 as f64
        };
        write!(w, " {:>6.2}%", ratio * 100.0)?;

        let met = base::stats::goal_reached(e.intake(), self.goal);
        let mut marker = if met {
            self.charset.goal_met.to_string()
        } else {
            self.charset.goal_missed.to_string()
        };
        if self.charset.color {
            marker = if met {
                colored::Colorize::green(marker.as_str()).to_string()
            } else {
                colored::Colorize::red(marker.as_str()).to_string()
            };
        }
        writeln!(w, " {}", marker)?;
        Ok(())
    }
}

impl std::fmt::Display for Daylist<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.history.iter().try_for_each(|e| self.draw(f, e))
    }
}
