//! Raw report text -> item codes.

use crate::domain::ItemCode;

/// Split a report on whitespace and commas and canonicalize every all-digit
/// token. Other tokens are dropped silently.
///
/// Duplicates and input order are preserved:
/// `"1 4 5, 3 3"` -> `["001", "004", "005", "003", "003"]`.
pub fn normalize_input(raw: &str) -> Vec<ItemCode> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(ItemCode::from_digits)
        .collect()
}
