//! Example: where the greedy heuristic falls short of the exact optimum.
//!
//! Run with:
//! `cargo run --example compare`

use knapsack_dp::{compare, DpSolver, Instance};

fn main() {
    let weights = [10, 20, 30];
    let values = [60u32, 100, 120];
    let capacity = 50;

    let instance = match Instance::new(&weights, &values, capacity) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("invalid instance: {err}");
            std::process::exit(2);
        }
    };

    let cmp = match compare(&DpSolver::new(), &instance) {
        Ok(cmp) => cmp,
        Err(err) => {
            eprintln!("solve failed: {err}");
            std::process::exit(1);
        }
    };

    println!("capacity: {capacity}");
    println!("dp:     {}", cmp.dp);
    println!("greedy: {}", cmp.greedy);
    println!(
        "gap: {} ({:.1}% of optimum reached)",
        cmp.gap(),
        100.0 * cmp.greedy_ratio()
    );

    // Print the table with item rows and capacity columns.
    println!();
    print!("{:>6}", "");
    for j in 0..cmp.dp.table.num_cols() {
        print!("{j:>5}");
    }
    println!();
    for (i, row) in cmp.dp.table.rows().enumerate() {
        let label = if i == 0 {
            "-".to_string()
        } else {
            format!("#{}", i - 1)
        };
        print!("{label:>6}");
        for cell in row {
            print!("{cell:>5}");
        }
        println!();
    }
}
