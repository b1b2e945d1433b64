use crate::base;

/// Per-day intake history. Entries are kept sorted by date, with at most one
/// entry per distinct date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(Vec<base::Entry>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts by date and, when several entries share a date, keeps the last
    /// one given, mirroring upsert semantics.
    fn from_vec(mut inner: Vec<base::Entry>) -> Self {
        inner.sort_by_key(base::Entry::date);
        inner.reverse();
        inner.dedup_by_key(|e| e.date());
        inner.reverse();
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn spanned_interval(&self) -> base::Interval {
        let start = match self.0.first() {
            Some(e) => e.date(),
            None => return base::Interval::EMPTY,
        };
        let end = match self.0.last() {
            Some(e) => e.date(),
            None => unreachable!(),
        };
        base::Interval { start, end }
    }

    pub fn get(&self, dt: base::Date) -> Option<&base::Entry> {
        let i = self.0.binary_search_by_key(&dt, base::Entry::date).ok()?;
        Some(&self.0[i])
    }

    /// Returns the recorded intake for the given date, or zero if the date
    /// has no entry.
    pub fn intake_on(&self, dt: base::Date) -> base::Milliliters {
        self.get(dt).map(base::Entry::intake).unwrap_or_default()
    }

    pub fn slice_spanning_interval(&self, interval: base::Interval) -> &[base::Entry] {
        if interval.is_empty() {
            return &[];
        }
        let i = self.0.partition_point(|e| e.date() < interval.start);
        let j = i + self.0[i..].partition_point(|e| e.date() <= interval.end);
        &self.0[i..j]
    }

    /// Replaces the entry for the given date with one holding the given
    /// total, inserting if absent. All other entries are left unchanged.
    pub fn set_total(&mut self, dt: base::Date, total: base::Milliliters) {
        self.reset(dt);
        let i = self.0.partition_point(|e| e.date() < dt);
        self.0.insert(i, base::Entry::new(dt, total));
    }

    /// Adds the given amount to the date's running total and returns the new
    /// total, saturating at the maximum representable amount. The date's entry
    /// is replaced wholesale; afterwards, exactly one entry exists for the
    /// date.
    pub fn record(&mut self, dt: base::Date, amount: base::Milliliters) -> base::Milliliters {
        let total = self.intake_on(dt).saturating_add(amount);
        self.set_total(dt, total);
        total
    }

    /// Removes and returns the entry for the given date, leaving all prior
    /// days untouched. Returns `None` if the date has no entry.
    pub fn reset(&mut self, dt: base::Date) -> Option<base::Entry> {
        let i = self.0.binary_search_by_key(&dt, base::Entry::date).ok()?;
        Some(self.0.remove(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Entry> {
        self.0.iter()
    }
}

impl IntoIterator for History {
    type Item = base::Entry;
    type IntoIter = std::vec::IntoIter<base::Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Entry> for History {
    fn from_iter<T: IntoIterator<Item = base::Entry>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Entry> for History {
    fn from_iter<T: IntoIterator<Item = &'a base::Entry>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl std::fmt::Display for History {
    /// Writes the storage blob format, a single JSON array. Writes a
    /// terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("more than one entry for {0}")]
    DuplicateDate(base::Date),
}

impl std::str::FromStr for History {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut inner = serde_json::from_str::<Vec<base::Entry>>(s)?;
        inner.sort_by_key(base::Entry::date);
        for w in inner.windows(2) {
            if w[0].date() == w[1].date() {
                return Err(ParseError::DuplicateDate(w[0].date()));
            }
        }
        Ok(Self(inner))
    }
}

impl TryFrom<&str> for History {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
