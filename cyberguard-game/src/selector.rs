//! Scenario selection logic
use crate::data::{Scenario, ScenarioCatalog};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Result of a selection: the chosen scenario (options already shuffled)
/// and the updated used-id set.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedScenario {
    pub scenario: Scenario,
    pub used_ids: HashSet<String>,
}

/// Pick the next scenario, avoiding repeats until the catalog is exhausted.
///
/// `available` is the catalog minus `used_ids`; when every scenario has been
/// presented once the cycle resets and the whole catalog is eligible again.
/// The chosen scenario is cloned and its options shuffled with a fair
/// permutation, leaving the catalog's canonical ordering untouched.
///
/// # Panics
///
/// Panics if the catalog is empty. The catalog is fixed at process start, so
/// an empty one is a configuration error, not a runtime condition.
pub fn select_scenario<R: Rng>(
    catalog: &ScenarioCatalog,
    used_ids: &HashSet<String>,
    rng: &mut R,
) -> SelectedScenario {
    assert!(
        !catalog.is_empty(),
        "scenario catalog must not be empty at selection time"
    );

    let available: Vec<&Scenario> = catalog
        .scenarios
        .iter()
        .filter(|scenario| !used_ids.contains(&scenario.id))
        .collect();

    // Cycle exhaustion: every scenario has been seen, start a fresh cycle.
    let (pool, mut next_used) = if available.is_empty() {
        log::debug!("scenario cycle exhausted, resetting used-id set");
        (catalog.scenarios.iter().collect(), HashSet::new())
    } else {
        (available, used_ids.clone())
    };

    let index = rng.gen_range(0..pool.len());
    let mut scenario = pool[index].clone();
    scenario.options.shuffle(rng);
    next_used.insert(scenario.id.clone());

    log::debug!(
        "selected scenario {} ({} of {} eligible)",
        scenario.id,
        pool.len(),
        catalog.len()
    );

    SelectedScenario {
        scenario,
        used_ids: next_used,
    }
}
