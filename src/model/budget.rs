//! Data models for budget lines and their derived totals

use serde::{Deserialize, Serialize};

/// A single budget line with an estimated and an actual amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub item: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub estimated: f64,
    #[serde(default)]
    pub actual: f64,
}

fn default_category() -> String {
    "General".to_string()
}

/// Summed amounts across all budget lines
///
/// Derived on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetTotals {
    pub estimated: f64,
    pub actual: f64,
}

impl BudgetTotals {
    pub fn of(items: &[BudgetItem]) -> BudgetTotals {
        items.iter().fold(BudgetTotals::default(), |acc, item| {
            BudgetTotals {
                estimated: acc.estimated + item.estimated,
                actual: acc.actual + item.actual,
            }
        })
    }
}

/// Coerce free-text input to an amount, web-form style: anything that does
/// not parse as a number becomes 0
pub fn coerce_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Format an amount the way the exports expect: no trailing ".0" on whole
/// numbers
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, estimated: f64, actual: f64) -> BudgetItem {
        BudgetItem {
            id: id.to_string(),
            item: format!("item {}", id),
            category: default_category(),
            estimated,
            actual,
        }
    }

    #[test]
    fn test_totals_empty() {
        let totals = BudgetTotals::of(&[]);
        assert_eq!(totals.estimated, 0.0);
        assert_eq!(totals.actual, 0.0);
    }

    #[test]
    fn test_totals_sums_both_columns() {
        let items = vec![item("a", 100.0, 50.0), item("b", 200.0, 0.0)];
        let totals = BudgetTotals::of(&items);
        assert_eq!(totals.estimated, 300.0);
        assert_eq!(totals.actual, 50.0);
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("125"), 125.0);
        assert_eq!(coerce_amount(" 12.5 "), 12.5);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount(""), 0.0);
    }

    #[test]
    fn test_format_amount_drops_trailing_zero() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(50.5), "50.5");
    }

    #[test]
    fn test_missing_category_defaults_to_general() {
        let parsed: BudgetItem =
            serde_json::from_str(r#"{"id":"id_1","item":"Ice","estimated":20}"#).unwrap();
        assert_eq!(parsed.category, "General");
        assert_eq!(parsed.actual, 0.0);
    }
}
