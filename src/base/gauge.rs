use crate::base;

/// Renders labelled progress bars, one row per figure. Percentages print
/// with two decimals; bar fill is clamped to the 0.0 to 1.0 range even when
/// the underlying ratio exceeds it.
pub struct Gauge<'a> {
    charset: &'a base::Charset,
    heading: &'a str,
    rows: &'a [Row],
    bar_width: usize,
    alignment_charlen: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub ratio: f64,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub heading: String,
    pub rows: Vec<Row>,
    pub bar_width: usize,
}

impl Config {
    pub fn to_gauge(&self) -> Gauge<'_> {
        let alignment_charlen = self
            .rows
            .iter()
            .map(|r| r.label.len() + base::util::MIN_DASHES_COUNT)
            .max()
            .unwrap_or_default();
        Gauge {
            charset: &self.charset,
            heading: &self.heading,
            rows: &self.rows,
            bar_width: self.bar_width,
            alignment_charlen,
        }
    }
}

impl Gauge<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, row: &Row) -> std::fmt::Result {
        w.write_str(&row.label)?;
        w.write_char(' ')?;
        for _ in 0..(self.alignment_charlen - row.label.len()) {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;

        let filled = (row.ratio.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize;
        let mut bar = self.charset.gauge_filled.to_string().repeat(filled);
        if self.charset.color {
            bar = if row.ratio >= 1.0 {
                colored::Colorize::green(bar.as_str()).to_string()
            } else {
                colored::Colorize::cyan(bar.as_str()).to_string()
            };
        }
        w.write_char('[')?;
        w.write_str(&bar)?;
        for _ in filled..self.bar_width {
            w.write_char(self.charset.gauge_empty)?;
        }
        w.write_char(']')?;

        writeln!(w, " {:>6.2}%", row.ratio * 100.0)?;
        Ok(())
    }
}

impl std::fmt::Display for Gauge<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.heading.is_empty() {
            writeln!(f, "{}", self.heading)?;
        }
        self.rows.iter().try_for_each(|row| self.draw(f, row))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    fn row(label: &str, ratio: f64) -> Row {
        Row {
            label: label.into(),
            ratio,
        }
    }

    #[rstest]
    #[case(
        Config {
            charset: base::Charset::default(),
            heading: String::new(),
            rows: vec![],
            bar_width: 10,
        },
        ""
    )]
    #[case(
        Config {
            charset: base::Charset::default(),
            heading: "Today: 900 / 1,500 ml (60.00%)".into(),
            rows: vec![
                row("Weekly average", 0.6),
                row("Monthly average", 0.4),
                row("Goal completion", 0.75),
            ],
            bar_width: 10,
        },
        indoc!("
            Today: 900 / 1,500 ml (60.00%)
            Weekly average --- [======....]  60.00%
            Monthly average -- [====......]  40.00%
            Goal completion -- [========..]  75.00%
        ")
    )]
    #[case(
        Config {
            charset: base::Charset::default(),
            heading: String::new(),
            rows: vec![row("Overflow", 1.3333333)],
            bar_width: 4,
        },
        "Overflow -- [====] 133.33%\n"
    )]
    #[case(
        Config {
            charset: base::Charset::default(),
            heading: String::new(),
            rows: vec![row("Empty", 0.0)],
            bar_width: 4,
        },
        "Empty -- [....]   0.00%\n"
    )]
    fn test_to_string(#[case] config: Config, #[case] want: &str) {
        assert_eq!(config.to_gauge().to_string(), want)
    }
}
