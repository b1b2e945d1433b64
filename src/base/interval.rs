use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Interval {
    /// The largest possible interval.
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    /// The window of `len` calendar days ending at `end` inclusive. If the
    /// window would reach past the minimum date, it is truncated there.
    pub fn trailing_days(end: base::Date, len: u16) -> Self {
        let start = end
            .shift(base::Datepart::Day, -(len as i32 - 1))
            .unwrap_or(base::Date::MIN);
        Self { start, end }
    }

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Returns an iterator over subintervals.
    ///
    /// Subintervals try to span the beginning to the end of calendar
    /// years/months. For example, iterating by year over \[2000-04-15,
    /// 2003-08-10] will yield \[2000-04-15, 2000-12-31], \[2001-01-01,
    /// 2001-12-31], etc.
    pub fn iter(self, part: base::Datepart) -> impl Iterator<Item = Self> {
        struct Iter {
            bounds: Interval,
            part: base::Datepart,
            next: Option<Interval>,
        }

        impl Iterator for Iter {
            type Item = Interval;

            fn next(&mut self) -> Option<Self::Item> {
                let ret = self.next;
                if let Some(i) = self.next {
                    self.next = i.start.shift(self.part, 1).and_then(|dt| {
                        let start = dt.first_of(self.part);
                        let end = dt.last_of(self.part).min(self.bounds.end);
                        if start <= end {
                            Some(Interval { start, end })
                        } else {
                            None
                        }
                    })
                }
                ret
            }
        }

        Iter {
            bounds: self,
            part,
            next: match self.is_empty() {
                true => None,
                false => Some(Self {
                    start: self.start,
                    end: self.start.last_of(part).min(self.end),
                }),
            },
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((left, right)) => (
                if left.is_empty() {
                    base::Date::MIN
                } else {
                    left.parse::<base::Date>().map_err(Self::Err::Left)?
                },
                if right.is_empty() {
                    base::Date::MAX
                } else {
                    right.parse::<base::Date>().map_err(Self::Err::Right)?
                },
            ),
            None => {
                let dt = s.parse::<base::Date>()?;
                let part = match s.as_bytes()[0] as char {
                    'y' | 'Y' => base::Datepart::Year,
                    'm' | 'M' => base::Datepart::Month,
                    _ => base::Datepart::Day,
                };
                (dt.first_of(part), dt.last_of(part))
            }
        };
        Ok(Self { start, end })
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
