//! FK-aware topological sort for determining table seeding order.
//!
//! Tables that are referenced by other tables (parents) must be seeded first.
//! Uses Kahn's algorithm for the topological sort.

use std::collections::{HashMap, HashSet, VecDeque};

use drizzle_core::SQLTableInfo;

/// Compute seeding order for tables using topological sort.
///
/// Returns table names in order such that parent tables come before children.
/// If cycles exist, the cyclic tables are appended at the end (they require
/// a two-pass insert-then-update strategy).
pub fn seeding_order(tables: &[&dyn SQLTableInfo]) -> Vec<String> {
    let table_names: HashSet<&str> = tables.iter().map(|t| t.name()).collect();

    // Build adjacency: table -> tables it depends on (via FK)
    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();

    for &table in tables {
        in_degree.entry(table.name()).or_insert(0);
        for dep in table.dependencies() {
            let dep_name = dep.name();
            if table_names.contains(dep_name) && dep_name != table.name() {
                *in_degree.entry(table.name()).or_insert(0) += 1;
                dependents.entry(dep_name).or_default().push(table.name());
            }
        }
    }

    // Kahn's algorithm
    let mut queue: VecDeque<&str> = in_degree
        .iter()
        .filter(|(_, deg)| **deg == 0)
        .map(|(&name, _)| name)
        .collect();

    // Sort the initial queue for deterministic ordering
    let mut initial: Vec<&str> = queue.drain(..).collect();
    initial.sort();
    queue.extend(initial);

    let mut result: Vec<String> = Vec::with_capacity(tables.len());

    while let Some(name) = queue.pop_front() {
        result.push(name.to_string());
        if let Some(deps) = dependents.get(name) {
            let mut next = Vec::new();
            for &dep in deps {
                let deg = in_degree.get_mut(dep).unwrap();
                *deg -= 1;
                if *deg == 0 {
                    next.push(dep);
                }
            }
            // Sort for deterministic ordering
            next.sort();
            queue.extend(next);
        }
    }

    // Any remaining tables have cycles â€” append them at the end
    for &table in tables {
        if !result.iter().any(|r| r == table.name()) {
            result.push(table.name().to_string());
        }
    }

    result
}
