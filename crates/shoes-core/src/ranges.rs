//! Range notation for shelf remainders: `с 231 по 250, 252, с 254 по 260`.

use crate::domain::ItemCode;

/// Rendered in place of an empty range list.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Closed range of consecutive codes. `start == end` for a single code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeRange {
    pub start: ItemCode,
    pub end: ItemCode,
}

impl CodeRange {
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

/// Sort codes numerically and merge runs of consecutive values.
///
/// Codes too wide for `u64` never join a run.
pub fn compress_ranges(codes: &[ItemCode]) -> Vec<CodeRange> {
    let mut sorted = codes.to_vec();
    sorted.sort();
    sorted.dedup();

    let mut out: Vec<CodeRange> = Vec::new();
    for code in sorted {
        if let Some(last) = out.last_mut() {
            let follows = match (last.end.number(), code.number()) {
                (Some(prev), Some(n)) => prev.checked_add(1) == Some(n),
                _ => false,
            };
            if follows {
                last.end = code;
                continue;
            }
        }
        out.push(CodeRange {
            start: code.clone(),
            end: code,
        });
    }
    out
}

/// Format codes as comma-separated ranges, or [`EMPTY_PLACEHOLDER`].
pub fn format_ranges(codes: &[ItemCode]) -> String {
    let parts: Vec<String> = compress_ranges(codes)
        .into_iter()
        .map(|r| {
            if r.is_single() {
                r.start.to_string()
            } else {
                format!("с {} по {}", r.start, r.end)
            }
        })
        .collect();

    if parts.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(nums: impl IntoIterator<Item = u64>) -> Vec<ItemCode> {
        nums.into_iter().map(ItemCode::from_number).collect()
    }

    #[test]
    fn mixed_runs_and_singletons() {
        let input = codes((231..=250).chain([252]).chain(254..=260));
        assert_eq!(format_ranges(&input), "с 231 по 250, 252, с 254 по 260");
    }

    #[test]
    fn unsorted_input_is_sorted_numerically() {
        let input = codes([10, 2, 1, 3, 9]);
        assert_eq!(format_ranges(&input), "с 001 по 003, с 009 по 010");
    }

    #[test]
    fn single_value_keeps_padding() {
        assert_eq!(format_ranges(&codes([7])), "007");
        assert_eq!(format_ranges(&codes([5, 7])), "005, 007");
    }

    #[test]
    fn two_consecutive_values_form_a_range() {
        assert_eq!(format_ranges(&codes([99, 100])), "с 099 по 100");
    }

    #[test]
    fn empty_input_uses_placeholder() {
        assert_eq!(format_ranges(&[]), EMPTY_PLACEHOLDER);
        assert!(compress_ranges(&[]).is_empty());
    }

    #[test]
    fn compress_reports_bounds() {
        let r = compress_ranges(&codes([1, 2, 3, 5]));
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].start.as_str(), "001");
        assert_eq!(r[0].end.as_str(), "003");
        assert!(r[1].is_single());
    }
}
