use std::{cmp::Ordering, fmt};

/// Storage shelf number (positive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShelfId(pub u32);

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical item code: decimal digits without leading zeros, left-padded to
/// three characters ("7" -> "007", "1000" -> "1000").
///
/// Ordering is numeric for any width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemCode(String);

impl ItemCode {
    pub const WIDTH: usize = 3;

    /// Canonicalize a token made only of ASCII digits.
    ///
    /// Returns `None` for empty tokens or tokens containing anything else.
    /// Only ASCII `0-9` count: other Unicode decimal digits such as the
    /// Arabic-Indic `٢` are rejected, so those tokens are ignored like words.
    pub fn from_digits(token: &str) -> Option<Self> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = token.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(format!("{digits:0>width$}", width = Self::WIDTH)))
    }

    pub fn from_number(n: u64) -> Self {
        Self(format!("{n:0width$}", width = Self::WIDTH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if it fits in `u64`.
    pub fn number(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Significant digits (no padding zeros).
    fn significant(&self) -> &str {
        let s = self.0.trim_start_matches('0');
        if s.is_empty() {
            "0"
        } else {
            s
        }
    }
}

impl Ord for ItemCode {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl PartialOrd for ItemCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
