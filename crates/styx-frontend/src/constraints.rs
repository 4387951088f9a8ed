// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric and list-length constraint collection (spec §4.1 step 5).

use serde_json::Value;
use styx_ir::NumberBound;

use crate::descriptor::{bool_flag, opt_f64, opt_u32};

/// Collected `min-list-entries`/`max-list-entries` for a list-modified input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListBounds {
    /// `min-list-entries`, if declared.
    pub min_entries: Option<u32>,
    /// `max-list-entries`, if declared.
    pub max_entries: Option<u32>,
}

/// Collect `min-list-entries`/`max-list-entries` from `input`.
#[must_use]
pub fn list_bounds(input: &Value) -> ListBounds {
    ListBounds {
        min_entries: opt_u32(input, "min-list-entries"),
        max_entries: opt_u32(input, "max-list-entries"),
    }
}

/// Collect an integer input's bounds, folding exclusive bounds to
/// inclusive by ±1 (spec §4.1 step 5, §9 Open Question (i): integers fold,
/// floats preserve exclusivity).
#[must_use]
pub fn int_bounds(input: &Value) -> (Option<i64>, Option<i64>) {
    let min = opt_f64(input, "minimum").map(|v| v as i64);
    let max = opt_f64(input, "maximum").map(|v| v as i64);
    let min = min.map(|v| {
        if bool_flag(input, "exclusive-minimum") {
            v + 1
        } else {
            v
        }
    });
    let max = max.map(|v| {
        if bool_flag(input, "exclusive-maximum") {
            v - 1
        } else {
            v
        }
    });
    (min, max)
}

/// Collect a float input's bounds, preserving exclusivity as a flag on
/// each [`NumberBound`] rather than folding it.
#[must_use]
pub fn float_bounds(input: &Value) -> (Option<NumberBound<f64>>, Option<NumberBound<f64>>) {
    let min = opt_f64(input, "minimum").map(|v| NumberBound {
        value: v,
        exclusive: bool_flag(input, "exclusive-minimum"),
    });
    let max = opt_f64(input, "maximum").map(|v| NumberBound {
        value: v,
        exclusive: bool_flag(input, "exclusive-maximum"),
    });
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_exclusive_bounds_fold_to_inclusive() {
        let input = json!({"minimum": 5, "maximum": 10, "exclusive-minimum": true, "exclusive-maximum": true});
        assert_eq!(int_bounds(&input), (Some(6), Some(9)));
    }

    #[test]
    fn integer_inclusive_bounds_pass_through() {
        let input = json!({"minimum": 5, "maximum": 10});
        assert_eq!(int_bounds(&input), (Some(5), Some(10)));
    }

    #[test]
    fn float_exclusivity_is_preserved_not_folded() {
        let input = json!({"minimum": 5.0, "exclusive-minimum": true});
        let (min, _) = float_bounds(&input);
        let min = min.unwrap();
        assert_eq!(min.value, 5.0);
        assert!(min.exclusive);
    }
}
