//! Gap distribution between columns.
//!
//! The configured gap is not a literal margin between columns. Every seam
//! between two adjacent columns gets `gap / count` of padding on each side,
//! so the whitespace between columns `i` and `i + 1` is `2 * gap / count`.
//! The outer edges (before the first column, after the last) never get
//! padding.
//!
//! For three columns and a gap of 30 the insets are:
//!
//! ```text
//! | col 0 |  | col 1 |  | col 2 |
//!  0    10    10   10    10    0
//! ```
//!
//! The divisor is the column count, not the seam count. Existing templates
//! are laid out with this rule, so it must not change.

use crate::config::{ColumnsCount, LayoutConfig};

/// Left and right inset of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSpacing {
    pub before: f64,
    pub after: f64,
}

impl CellSpacing {
    /// Total horizontal inset of the cell.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.before + self.after
    }
}

/// Padding on the leading (left) side of the column at `index`.
#[must_use]
pub fn padding_before(index: usize, gap: f64, count: ColumnsCount) -> f64 {
    if index == 0 {
        return 0.0;
    }
    gap / count.as_f64()
}

/// Padding on the trailing (right) side of the column at `index`.
#[must_use]
pub fn padding_after(index: usize, gap: f64, count: ColumnsCount) -> f64 {
    if index == count.get() - 1 {
        return 0.0;
    }
    gap / count.as_f64()
}

/// Both insets for the column at `index` under `config`.
#[must_use]
pub fn cell_spacing(index: usize, config: &LayoutConfig) -> CellSpacing {
    CellSpacing {
        before: padding_before(index, config.columns_gap, config.columns_count),
        after: padding_after(index, config.columns_gap, config.columns_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(gap: f64, count: ColumnsCount) -> Vec<(f64, f64)> {
        (0..count.get())
            .map(|i| (padding_before(i, gap, count), padding_after(i, gap, count)))
            .collect()
    }

    #[test]
    fn test_three_columns_gap_thirty() {
        assert_eq!(
            sides(30.0, ColumnsCount::Three),
            vec![(0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
        );
    }

    #[test]
    fn test_two_columns_divide_by_count() {
        // A 20px gap gives 10px per side, 20px total between the columns.
        assert_eq!(sides(20.0, ColumnsCount::Two), vec![(0.0, 10.0), (10.0, 0.0)]);
    }

    #[test]
    fn test_four_columns() {
        assert_eq!(
            sides(8.0, ColumnsCount::Four),
            vec![(0.0, 2.0), (2.0, 2.0), (2.0, 2.0), (2.0, 0.0)]
        );
    }

    #[test]
    fn test_zero_gap_is_all_zero() {
        for count in [ColumnsCount::Two, ColumnsCount::Three, ColumnsCount::Four] {
            assert!(
                sides(0.0, count)
                    .iter()
                    .all(|&(before, after)| before == 0.0 && after == 0.0)
            );
        }
    }

    #[test]
    fn test_cell_spacing_uses_config() {
        let config = LayoutConfig {
            columns_count: ColumnsCount::Three,
            columns_gap: 30.0,
            ..LayoutConfig::default()
        };
        let middle = cell_spacing(1, &config);
        assert_eq!(middle, CellSpacing { before: 10.0, after: 10.0 });
        assert_eq!(middle.total(), 20.0);
        assert_eq!(cell_spacing(0, &config).before, 0.0);
        assert_eq!(cell_spacing(2, &config).after, 0.0);
    }

    #[test]
    fn test_non_integral_share() {
        let share = padding_after(0, 10.0, ColumnsCount::Three);
        assert_eq!(share, 10.0 / 3.0);
    }
}
