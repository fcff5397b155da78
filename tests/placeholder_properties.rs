//! Coverage and ordering properties of placeholder generation, checked over
//! hand-written and generated layouts.

mod fixtures;
use fixtures::*;

use gridfill::grid::{build_occupancy, get_empty_placeholders, pad_layout, row_count};
use gridfill::models::LayoutItem;
use std::collections::HashMap;

/// Counts how many times each cell is covered by the given items.
fn coverage<'a>(items: impl Iterator<Item = &'a LayoutItem>) -> HashMap<(usize, usize), usize> {
    let mut cells = HashMap::new();
    for item in items {
        for row in item.y..item.y + item.h {
            for col in item.x..item.x + item.w {
                *cells.entry((row, col)).or_insert(0) += 1;
            }
        }
    }
    cells
}

fn layouts_under_test() -> Vec<(Vec<LayoutItem>, usize)> {
    let mut cases = vec![
        (two_widgets(), 3),
        (two_widgets(), 4),
        (dashboard(), 4),
        (dashboard(), 6),
        (lone_placeholder(), 1),
        (lone_placeholder(), 3),
        (Vec::new(), 3),
    ];
    for seed in 0..40 {
        let columns = 1 + (seed as usize % 6);
        let rows = seed as usize % 5;
        cases.push((generated_layout(seed, rows, columns), columns));
    }
    cases
}

#[test]
fn test_placeholders_and_items_tile_the_grid_exactly() {
    for (layout, columns) in layouts_under_test() {
        let placeholders = get_empty_placeholders(&layout, columns).unwrap();
        let rows = row_count(&layout);

        let cells = coverage(
            layout
                .iter()
                .filter(|item| !item.placeholder)
                .chain(placeholders.iter()),
        );

        assert_eq!(
            cells.len(),
            rows * columns,
            "every cell should be covered for {layout:?} with {columns} columns"
        );
        for row in 0..rows {
            for col in 0..columns {
                assert_eq!(
                    cells.get(&(row, col)),
                    Some(&1),
                    "cell ({row}, {col}) should be covered exactly once for {layout:?}"
                );
            }
        }
    }
}

#[test]
fn test_placeholders_are_unit_cells_in_row_major_order() {
    for (layout, columns) in layouts_under_test() {
        let placeholders = get_empty_placeholders(&layout, columns).unwrap();

        for item in &placeholders {
            assert!(item.placeholder);
            assert_eq!((item.w, item.h), (1, 1));
            assert_eq!(item.i, format!("placeholder-{}-{}", item.y, item.x));
        }

        let positions: Vec<(usize, usize)> = placeholders.iter().map(|p| (p.y, p.x)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(positions, sorted, "placeholders must be strictly row-major");
    }
}

#[test]
fn test_placeholder_count_matches_empty_cells() {
    for (layout, columns) in layouts_under_test() {
        let matrix = build_occupancy(&layout, columns).unwrap();
        let placeholders = get_empty_placeholders(&layout, columns).unwrap();
        assert_eq!(placeholders.len(), matrix.empty_count());
        assert_eq!(matrix.rows(), row_count(&layout));
    }
}

#[test]
fn test_materialized_placeholders_leave_no_gaps() {
    for (layout, columns) in layouts_under_test() {
        let placeholders = get_empty_placeholders(&layout, columns).unwrap();

        let mut filled: Vec<LayoutItem> = layout
            .iter()
            .filter(|item| !item.placeholder)
            .cloned()
            .collect();
        filled.extend(
            placeholders
                .into_iter()
                .map(|item| item.with_placeholder(false)),
        );

        assert!(
            get_empty_placeholders(&filled, columns).unwrap().is_empty(),
            "a fully filled layout should have no empty cells: {filled:?}"
        );
    }
}

#[test]
fn test_padding_is_a_fixed_point() {
    for (layout, columns) in layouts_under_test() {
        let once = pad_layout(&layout, columns).unwrap();
        let twice = pad_layout(&once, columns).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_input_is_not_modified() {
    let layout = dashboard();
    let before = layout.clone();
    let _ = get_empty_placeholders(&layout, 4).unwrap();
    assert_eq!(layout, before);
}

#[test]
fn test_dashboard_placeholders() {
    let ids: Vec<String> = get_empty_placeholders(&dashboard(), 4)
        .unwrap()
        .into_iter()
        .map(|item| item.i)
        .collect();
    assert_eq!(
        ids,
        vec![
            "placeholder-0-2",
            "placeholder-0-3",
            "placeholder-1-0",
            "placeholder-1-3",
            "placeholder-2-1",
            "placeholder-3-1",
        ]
    );
}

#[test]
fn test_concurrent_calls_agree() {
    let layout = dashboard();
    let expected = get_empty_placeholders(&layout, 4).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| get_empty_placeholders(&layout, 4).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
