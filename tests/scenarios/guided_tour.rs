//! Scenario: Guided Tour
//!
//! Journey: a reader learning SOLID goes through every principle.
//!
//! Steps:
//! 1. Lists the principles to find their keys
//! 2. Runs each principle on its own
//! 3. Runs the whole tour as JSON for a notebook
//!
//! Success Criteria:
//! - Every run succeeds and shows both halves
//! - The JSON tour has one event per principle

use crate::common::*;

/// SCENARIO: reader tours all five principles
#[test]
fn scenario_guided_tour() {
    let env = TestEnv::new();

    // Step 1: find the keys
    let list = env.run(&["list"]);
    assert!(list.success, "list failed: {}", list.stderr);
    let keys: Vec<String> = list
        .stdout
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1).map(str::to_string))
        .collect();
    assert_eq!(keys, vec!["srp", "ocp", "lsp", "isp", "dip"]);

    // Step 2: each principle alone shows both halves
    for key in &keys {
        let result = env.run(&["run", key]);
        assert!(result.success, "run {key} failed: {}", result.stderr);
        assert!(result.stdout.contains("  violating:\n"), "{key}: {}", result.stdout);
        assert!(result.stdout.contains("  corrected:\n"), "{key}: {}", result.stdout);
    }

    // Step 3: the whole tour as JSON
    let tour = env.run(&["run", "--format", "json"]);
    assert!(tour.success, "tour failed: {}", tour.stderr);
    assert_eq!(tour.stdout.lines().count(), 5);
}
