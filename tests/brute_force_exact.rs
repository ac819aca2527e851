use knapsack_dp::{compare, DpSolver, Instance};
use proptest::prelude::*;

fn brute_force(weights: &[u64], values: &[u32], capacity: u64) -> u32 {
    let n = weights.len();
    let mut best = 0;
    for mask in 0u32..(1u32 << n) {
        let mut weight = 0u64;
        let mut value = 0u32;
        for i in 0..n {
            if mask & (1 << i) != 0 {
                weight += weights[i];
                value += values[i];
            }
        }
        if weight <= capacity && value > best {
            best = value;
        }
    }
    best
}

fn items(max_len: usize) -> impl Strategy<Value = Vec<(u64, u32)>> {
    prop::collection::vec((0u64..20, 0u32..50), 0..=max_len)
}

proptest! {
    #[test]
    fn dp_matches_brute_force(items in items(12), capacity in 0u64..60) {
        let (weights, values): (Vec<u64>, Vec<u32>) = items.into_iter().unzip();
        let instance = Instance::new(&weights, &values, capacity).unwrap();
        let cmp = compare(&DpSolver::new(), &instance).unwrap();
        prop_assert_eq!(cmp.dp.max_value, brute_force(&weights, &values, capacity));
    }

    #[test]
    fn selections_are_feasible_and_consistent(items in items(15), capacity in 0u64..80) {
        let (weights, values): (Vec<u64>, Vec<u32>) = items.into_iter().unzip();
        let instance = Instance::new(&weights, &values, capacity).unwrap();
        let cmp = compare(&DpSolver::new(), &instance).unwrap();

        prop_assert!(cmp.dp.total_weight(&weights) <= capacity);
        prop_assert!(cmp.greedy.total_weight(&weights) <= capacity);
        prop_assert_eq!(cmp.dp.total_value(&values), cmp.dp.max_value);
        prop_assert_eq!(cmp.greedy.total_value(&values), cmp.greedy.max_value);
        prop_assert!(cmp.dp.max_value >= cmp.greedy.max_value);

        // DP reports ascending indices; greedy never repeats an item.
        prop_assert!(cmp.dp.selected_items.windows(2).all(|w| w[0] < w[1]));
        let mut seen = cmp.greedy.selected_items.clone();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), cmp.greedy.selected_items.len());
    }

    #[test]
    fn greedy_takes_every_item_when_all_fit(items in items(15)) {
        let (weights, values): (Vec<u64>, Vec<u32>) = items.into_iter().unzip();
        let capacity: u64 = weights.iter().sum();
        let instance = Instance::new(&weights, &values, capacity).unwrap();
        let cmp = compare(&DpSolver::new(), &instance).unwrap();
        prop_assert_eq!(cmp.greedy.selected_items.len(), weights.len());
        prop_assert_eq!(cmp.greedy.max_value, values.iter().sum::<u32>());
        prop_assert_eq!(cmp.dp.max_value, cmp.greedy.max_value);
    }
}
