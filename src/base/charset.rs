#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub chart_axis: char,
    pub chart_bar: char,
    pub gauge_filled: char,
    pub gauge_empty: char,
    pub goal_met: &'static str,
    pub goal_missed: &'static str,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            chart_axis: '|',
            chart_bar: '#',
            gauge_filled: '=',
            gauge_empty: '.',
            goal_met: "[x]",
            goal_missed: "[ ]",
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            chart_axis: '\u{2502}',
            chart_bar: '\u{2588}',
            gauge_filled: '\u{2588}',
            gauge_empty: '\u{2591}',
            goal_met: "\u{2714}",
            goal_missed: "\u{2718}",
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}
