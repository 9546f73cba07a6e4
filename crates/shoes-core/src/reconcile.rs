//! Reconciliation of a removal report against the catalog.
//!
//! Pure and stateless: every call derives a fresh [`Reconciliation`] from the
//! catalog and one report string. Bad input is never an error; it shows up as
//! ignored tokens, duplicates or unknown codes in the result.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use crate::{
    catalog::Catalog,
    domain::{ItemCode, ShelfId},
    normalize::normalize_input,
    ranges::format_ranges,
};

/// What is left on one shelf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShelfRemainder {
    pub shelf: ShelfId,
    /// Remaining codes, numerically ascending.
    pub codes: Vec<ItemCode>,
}

impl ShelfRemainder {
    pub fn count(&self) -> usize {
        self.codes.len()
    }

    pub fn ranges(&self) -> String {
        format_ranges(&self.codes)
    }
}

/// Outcome of one report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    pub total_remaining: usize,
    /// Codes entered more than once, ascending, unique.
    pub duplicates: Vec<ItemCode>,
    /// Entered codes that no shelf holds, ascending, unique.
    pub invalid: Vec<ItemCode>,
    /// Non-empty shelves only, shelf-ascending.
    pub shelves: Vec<ShelfRemainder>,
}

/// Codes that occur more than once, numerically ascending.
pub fn find_duplicates(entries: &[ItemCode]) -> Vec<ItemCode> {
    let mut counts: HashMap<&ItemCode, usize> = HashMap::new();
    for code in entries {
        *counts.entry(code).or_default() += 1;
    }
    let mut dups: Vec<ItemCode> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(code, _)| code.clone())
        .collect();
    dups.sort();
    dups
}

/// Distinct removed codes missing from the catalog, numerically ascending.
pub fn find_invalid(catalog: &Catalog, removed: &HashSet<ItemCode>) -> Vec<ItemCode> {
    let mut invalid: Vec<ItemCode> = removed
        .iter()
        .filter(|code| !catalog.contains(code))
        .cloned()
        .collect();
    invalid.sort();
    invalid
}

/// Per-shelf catalog contents minus the removed set. Emptied shelves are skipped.
pub fn remaining_by_shelf(catalog: &Catalog, removed: &HashSet<ItemCode>) -> Vec<ShelfRemainder> {
    catalog
        .shelves()
        .filter_map(|(shelf, codes)| {
            let mut left: Vec<ItemCode> = codes
                .iter()
                .filter(|code| !removed.contains(*code))
                .cloned()
                .collect();
            if left.is_empty() {
                return None;
            }
            left.sort();
            Some(ShelfRemainder { shelf, codes: left })
        })
        .collect()
}

impl Catalog {
    /// Reconcile a raw removal report against this catalog.
    pub fn reconcile(&self, raw: &str) -> Reconciliation {
        let entries = normalize_input(raw);
        let removed: HashSet<ItemCode> = entries.iter().cloned().collect();

        let duplicates = find_duplicates(&entries);
        let invalid = find_invalid(self, &removed);
        let shelves = remaining_by_shelf(self, &removed);
        let total_remaining = shelves.iter().map(ShelfRemainder::count).sum();

        Reconciliation {
            total_remaining,
            duplicates,
            invalid,
            shelves,
        }
    }
}

/// Reconcile and render in one step: report text in, reply text out.
pub fn reconcile(catalog: &Catalog, raw: &str) -> String {
    catalog.reconcile(raw).to_string()
}

fn join_codes(codes: &[ItemCode]) -> String {
    codes
        .iter()
        .map(ItemCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Reconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "В стеллажах осталось {} т/б.", self.total_remaining)?;

        if !self.duplicates.is_empty() {
            write!(f, "\nПовторно введены: {}", join_codes(&self.duplicates))?;
        }

        if !self.invalid.is_empty() {
            write!(f, "\n❌ В парке нет башмаков: {}", join_codes(&self.invalid))?;
        }

        for shelf in &self.shelves {
            write!(
                f,
                "\n{} стеллаж: {} т/б — {}",
                shelf.shelf,
                shelf.count(),
                shelf.ranges()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ItemCode {
        ItemCode::from_digits(s).unwrap()
    }

    fn strs(codes: &[ItemCode]) -> Vec<&str> {
        codes.iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn duplicates_are_sorted_and_unique() {
        let entries: Vec<ItemCode> = ["010", "002", "010", "002", "010", "005"]
            .iter()
            .map(|s| code(s))
            .collect();
        assert_eq!(strs(&find_duplicates(&entries)), vec!["002", "010"]);
        assert!(find_duplicates(&[code("001"), code("002")]).is_empty());
    }

    #[test]
    fn duplicate_input_removes_each_code_once() {
        let r = Catalog::builtin().reconcile("1 1 2");
        assert_eq!(strs(&r.duplicates), vec!["001"]);
        assert!(r.invalid.is_empty());
        assert_eq!(r.total_remaining, 281 - 2);

        let shelf16 = r.shelves.iter().find(|s| s.shelf == ShelfId(16)).unwrap();
        assert_eq!(shelf16.count(), 8);
        assert_eq!(shelf16.ranges(), "с 003 по 010");
    }

    #[test]
    fn invalid_codes_do_not_touch_shelves() {
        let catalog = Catalog::builtin();
        let r = catalog.reconcile("9999 0 282 9999");
        assert_eq!(strs(&r.invalid), vec!["000", "282", "9999"]);
        assert_eq!(strs(&r.duplicates), vec!["9999"]);
        assert_eq!(r.total_remaining, catalog.len());
        assert_eq!(r.shelves.len(), catalog.shelf_count());
    }

    #[test]
    fn garbage_input_leaves_full_catalog() {
        let catalog = Catalog::builtin();
        let r = catalog.reconcile("hello world");
        assert_eq!(r.total_remaining, 281);
        assert!(r.duplicates.is_empty());
        assert!(r.invalid.is_empty());

        let text = r.to_string();
        assert!(text.starts_with("В стеллажах осталось 281 т/б.\n1 стеллаж: 51 т/б — с 231 по 281\n"));
        assert!(!text.contains("Повторно"));
        assert!(!text.contains("❌"));
        assert_eq!(text.lines().count(), 1 + 17);
    }

    #[test]
    fn emptied_shelf_is_omitted() {
        let r = Catalog::builtin().reconcile("21,22,23,24,25,26,27,28,29,30,30");
        assert!(r.shelves.iter().all(|s| s.shelf != ShelfId(3)));
        assert_eq!(strs(&r.duplicates), vec!["030"]);
        assert_eq!(r.total_remaining, 281 - 10);
        assert_eq!(r.shelves.len(), 16);
    }

    #[test]
    fn order_does_not_matter() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.reconcile("1 4 5"), catalog.reconcile("5 1 4"));
    }

    #[test]
    fn shelf_gaps_render_as_ranges() {
        let r = Catalog::builtin().reconcile("251 253");
        let shelf1 = &r.shelves[0];
        assert_eq!(shelf1.shelf, ShelfId(1));
        assert_eq!(shelf1.count(), 49);
        assert_eq!(shelf1.ranges(), "с 231 по 250, 252, с 254 по 281");
    }

    #[test]
    fn full_report_layout() {
        let catalog =
            Catalog::from_shelves(vec![(1, vec!["001", "002", "003"]), (2, vec!["010", "011"])])
                .unwrap();
        let text = reconcile(&catalog, "2, 2 10 11 77 x");
        assert_eq!(
            text,
            "В стеллажах осталось 2 т/б.\n\
             Повторно введены: 002\n\
             ❌ В парке нет башмаков: 077\n\
             1 стеллаж: 2 т/б — 001, 003"
        );
    }

    #[test]
    fn everything_removed_leaves_header_only() {
        let catalog = Catalog::from_shelves(vec![(1, vec!["001", "002"])]).unwrap();
        assert_eq!(reconcile(&catalog, "1 2"), "В стеллажах осталось 0 т/б.");
    }
}
