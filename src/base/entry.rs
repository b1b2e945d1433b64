use crate::base::Date;
use crate::base::Milliliters;

/// A single day's total water intake. Field names match the storage blob
/// format, a JSON array of `{"date": ..., "intake": ...}` objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    date: Date,
    intake: Milliliters,
}

impl Entry {
    pub fn new(date: Date, intake: Milliliters) -> Self {
        Self { date, intake }
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn intake(&self) -> Milliliters {
        self.intake
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Entry {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
