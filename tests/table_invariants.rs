use knapsack_dp::{solve_dp, DpTable};
use proptest::prelude::*;

fn assert_monotone(table: &DpTable<u32>) -> Result<(), TestCaseError> {
    let (rows, cols) = table.dimensions();
    for i in 0..rows {
        for j in 0..cols {
            if i > 0 {
                prop_assert!(table[(i, j)] >= table[(i - 1, j)], "item axis at ({}, {})", i, j);
            }
            if j > 0 {
                prop_assert!(table[(i, j)] >= table[(i, j - 1)], "capacity axis at ({}, {})", i, j);
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn table_shape_and_borders(
        items in prop::collection::vec((1u64..15, 0u32..40), 0..10),
        capacity in 0u64..40,
    ) {
        let (weights, values): (Vec<u64>, Vec<u32>) = items.into_iter().unzip();
        let solution = solve_dp(&weights, &values, capacity).unwrap();
        let table = &solution.table;

        prop_assert_eq!(table.dimensions(), (weights.len() + 1, capacity as usize + 1));
        prop_assert_eq!(table.len(), table.num_rows() * table.num_cols());
        prop_assert!(table.row(0).unwrap().iter().all(|&v| v == 0));
        // Positive weights only, so column 0 is zero everywhere.
        prop_assert!(table.rows().all(|row| row[0] == 0));
        prop_assert_eq!(table[(weights.len(), capacity as usize)], solution.max_value);
        assert_monotone(table)?;
    }

    #[test]
    fn table_is_monotone_with_zero_weights(
        items in prop::collection::vec((0u64..6, 0u32..40), 0..10),
        capacity in 0u64..25,
    ) {
        let (weights, values): (Vec<u64>, Vec<u32>) = items.into_iter().unzip();
        let solution = solve_dp(&weights, &values, capacity).unwrap();
        assert_monotone(&solution.table)?;
        prop_assert_eq!(solution.total_value(&values), solution.max_value);
    }

    #[test]
    fn grid_view_matches_cells(
        items in prop::collection::vec((1u64..10, 0u32..20), 0..6),
        capacity in 0u64..15,
    ) {
        let (weights, values): (Vec<u64>, Vec<u32>) = items.into_iter().unzip();
        let table = solve_dp(&weights, &values, capacity).unwrap().table;
        let grid = table.to_grid();
        prop_assert_eq!(grid.len(), table.num_rows());
        for (i, row) in grid.iter().enumerate() {
            prop_assert_eq!(row.len(), table.num_cols());
            for (j, &cell) in row.iter().enumerate() {
                prop_assert_eq!(Some(cell), table.get(i, j));
            }
        }
    }
}
