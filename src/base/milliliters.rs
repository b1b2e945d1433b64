use crate::base::util;

/// Integral representation of a volume of water, in whole milliliters.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Milliliters(pub u64);

impl Milliliters {
    /// Returns `ml.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let len = util::count_digits(self.0);
        len + (len - 1) / 3 // commas
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_mul(self, n: u64) -> Option<Self> {
        self.0.checked_mul(n).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Milliliters {
    /// Formats with thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut n = self.0;
        let mut bytes = Vec::<u8>::new();
        let mut i = 0;
        loop {
            if i > 0 && i % 3 == 0 {
                bytes.push(b',');
            }
            bytes.push(b'0' + (n % 10) as u8);
            n /= 10;
            i += 1;
            if n == 0 {
                break;
            }
        }
        bytes.reverse();
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

impl std::str::FromStr for Milliliters {
    type Err = std::num::ParseIntError;

    /// Parses a milliliter quantity from a human-readable string, which may
    /// contain comma thousands separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.replace(',', "").parse::<u64>().map(Self)
    }
}

impl TryFrom<&str> for Milliliters {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
