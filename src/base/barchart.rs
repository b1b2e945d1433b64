use crate::base;

pub struct Barchart {
    charset: base::Charset,
    bounds: base::Interval,
    unit: base::Datepart,
    totals: std::collections::BTreeMap<base::Date, base::Milliliters>,
    label_charlen: usize,
    max_val: base::Milliliters,
    max_barlen: usize,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub bounds: base::Interval,
    pub unit: base::Datepart,
    pub term_width: usize,
    pub history: base::History,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let bounds = self.history.spanned_interval().intersection(self.bounds);
        let mut totals = std::collections::BTreeMap::<base::Date, base::Milliliters>::new();
        for interval in bounds.iter(self.unit) {
            let total = self
                .history
                .slice_spanning_interval(interval)
                .iter()
                .map(base::Entry::intake)
                .sum::<base::Milliliters>();
            totals.insert(interval.start, total);
        }

        let label_charlen = match self.unit {
            base::Datepart::Year => 4,  // yyyy
            base::Datepart::Month => 8, // yyyy mmm
            base::Datepart::Day => 10,  // yyyy-mm-dd
        };
        let max_val = totals.values().copied().max().unwrap_or_default();
        let max_barlen = self.term_width.max(base::util::MIN_TERM_WIDTH)
            - label_charlen // max 10
            - base::util::BOUNDING_SPACES_COUNT
            - 1 // vertical divider just before bar
            - max_val.charlen();

        Barchart {
            charset: self.charset.clone(),
            bounds,
            unit: self.unit,
            totals,
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn label(&self, dt: base::Date) -> String {
        let fmt = match self.unit {
            base::Datepart::Year => time::macros::format_description!("[year]"),
            base::Datepart::Month => time::macros::format_description!("[year] [month repr:short]"),
            base::Datepart::Day => time::macros::format_description!("[year]-[month]-[day]"),
        };
        dt.format(fmt).expect("formatting should succeed")
    }

    fn barlen(&self, val: base::Milliliters) -> usize {
        if self.max_val.0 == 0 {
            return 0;
        }
        let x = (val.0 as f64) / (self.max_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, dt: base::Date) -> std::fmt::Result {
        let label = self.label(dt);
        for _ in label.len()..self.label_charlen {
            w.write_char(' ')?;
        }
        write!(w, "{} {}", label, self.charset.chart_axis)?;
        let val = self.totals.get(&dt).copied().unwrap_or_default();
        let barlen = self.barlen(val);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::cyan(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)?;
        Ok(())
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for interval in self.bounds.iter(self.unit) {
            self.draw(f, interval.start)?;
        }
        Ok(())
    }
}
