//! Property-based tests for the spacing and resolution invariants.
//!
//! Uses proptest to check the gap distribution rule and default resolution
//! over generated configurations.

use proptest::prelude::*;

use columns_container::config::{ColumnsContainerProps, resolve_props};
use columns_container::prelude::*;
use columns_container::spacing::cell_spacing;

// ============================================================================
// Custom Strategies
// ============================================================================

fn columns_count() -> impl Strategy<Value = ColumnsCount> {
    prop_oneof![
        Just(ColumnsCount::Two),
        Just(ColumnsCount::Three),
        Just(ColumnsCount::Four),
    ]
}

fn vertical_align() -> impl Strategy<Value = VerticalAlign> {
    prop_oneof![
        Just(VerticalAlign::Top),
        Just(VerticalAlign::Middle),
        Just(VerticalAlign::Bottom),
    ]
}

fn gap() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..1000.0, (0u32..500).prop_map(f64::from)]
}

fn fixed_widths() -> impl Strategy<Value = FixedWidths> {
    prop::array::uniform4(prop::option::of(0.0f64..800.0)).prop_map(FixedWidths::new)
}

fn props() -> impl Strategy<Value = ColumnsContainerProps> {
    (
        prop::option::of(fixed_widths()),
        prop::option::of(columns_count()),
        prop::option::of(gap()),
        prop::option::of(vertical_align()),
    )
        .prop_map(
            |(fixed_widths, columns_count, columns_gap, content_alignment)| ColumnsContainerProps {
                fixed_widths,
                columns_count,
                columns_gap,
                content_alignment,
            },
        )
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ============================================================================
// Spacing
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn total_inset_is_two_gap_shares_per_seam(count in columns_count(), gap in gap()) {
        let c = count.get();
        let total: f64 = (0..c)
            .map(|i| padding_before(i, gap, count) + padding_after(i, gap, count))
            .sum();
        let expected = 2.0 * gap * (count.as_f64() - 1.0) / count.as_f64();
        prop_assert!(approx_eq(total, expected), "total={total} expected={expected}");
    }

    #[test]
    fn outer_edges_are_zero(count in columns_count(), gap in gap()) {
        prop_assert_eq!(padding_before(0, gap, count), 0.0);
        prop_assert_eq!(padding_after(count.get() - 1, gap, count), 0.0);
    }

    #[test]
    fn interior_sides_are_gap_over_count(count in columns_count(), gap in gap()) {
        let share = gap / count.as_f64();
        for i in 1..count.get() - 1 {
            prop_assert_eq!(padding_before(i, gap, count), share);
            prop_assert_eq!(padding_after(i, gap, count), share);
        }
        prop_assert_eq!(padding_after(0, gap, count), share);
        prop_assert_eq!(padding_before(count.get() - 1, gap, count), share);
    }

    #[test]
    fn seam_whitespace_is_two_shares(count in columns_count(), gap in gap()) {
        for i in 0..count.get() - 1 {
            let seam = padding_after(i, gap, count) + padding_before(i + 1, gap, count);
            prop_assert_eq!(seam, 2.0 * (gap / count.as_f64()));
        }
    }
}

// ============================================================================
// Resolution and layout
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn resolution_is_idempotent(props in props()) {
        prop_assert_eq!(resolve_props(Some(&props)), resolve_props(Some(&props)));
    }

    #[test]
    fn defaults_apply_per_field(props in props()) {
        let config = resolve_props(Some(&props));
        prop_assert_eq!(config.columns_count, props.columns_count.unwrap_or(ColumnsCount::Two));
        prop_assert_eq!(config.columns_gap, props.columns_gap.unwrap_or(0.0));
        prop_assert_eq!(
            config.content_alignment,
            props.content_alignment.unwrap_or(VerticalAlign::Middle)
        );
        prop_assert_eq!(config.fixed_widths, props.fixed_widths);
    }

    #[test]
    fn layout_has_one_cell_per_column(props in props(), supplied in 0usize..6) {
        let columns: Vec<String> = (0..supplied).map(|i| format!("c{i}")).collect();
        let block = ColumnsContainer::from_data(
            ColumnsContainerData { style: None, props: Some(props) },
            columns.clone(),
        );
        let config = block.config();
        let layout = block.layout();

        prop_assert_eq!(layout.cells.len(), config.columns_count.get());
        for (index, cell) in layout.cells.iter().enumerate() {
            prop_assert_eq!(cell.index, index);
            prop_assert_eq!(cell.content, columns.get(index));
            prop_assert_eq!(cell.width, config.fixed_width(index));
            prop_assert_eq!(cell.vertical_align, config.content_alignment);
            let spacing = cell_spacing(index, &config);
            prop_assert_eq!(cell.padding_left, spacing.before);
            prop_assert_eq!(cell.padding_right, spacing.after);
        }
    }

    #[test]
    fn html_has_one_td_per_column(props in props()) {
        let block = ColumnsContainer::from_data(
            ColumnsContainerData { style: None, props: Some(props) },
            vec![Markup::new("<p>x</p>")],
        );
        let html = block.render_html();
        prop_assert_eq!(html.matches("<td ").count(), block.config().columns_count.get());
        prop_assert_eq!(html.matches("<p>x</p>").count(), 1);
    }
}
