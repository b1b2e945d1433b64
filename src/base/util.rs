/// Narrowest terminal the chart layout math is willing to believe in.
pub const MIN_TERM_WIDTH: usize = 60;

/// One space on each side of a printed value.
pub const BOUNDING_SPACES_COUNT: usize = 2;

/// Shortest run of alignment dashes between a label and its value.
pub const MIN_DASHES_COUNT: usize = 2;

pub fn count_digits(n: u64) -> usize {
    let mut n = n;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
