//! Civilization growth rule.
//!
//! A deterministic, pure, total function from `(civilization, elapsed)` to
//! the next civilization snapshot. All divisions are integer (floor)
//! division; there is no randomness and no hidden state. The rule folds
//! over the single previous snapshot, not the full history, so applying it
//! twice with the same `elapsed` compounds growth twice -- intentional
//! replay-once-per-tick semantics, not idempotence.

use galaxy_types::Civilization;

/// Elapsed ticks required per technology level gained.
const TECH_TICKS_PER_LEVEL: u64 = 100;

/// Divisor in the population growth term: `population * elapsed / 1000`.
const POPULATION_GROWTH_DIVISOR: u64 = 1000;

/// Divisor in the resource yield term: `technology * elapsed / 10`.
const RESOURCE_YIELD_DIVISOR: u64 = 10;

/// Apply `elapsed` simulated ticks of growth to a civilization snapshot.
///
/// Computes the next snapshot:
///
/// - technology: `+ floor(elapsed / 100)`
/// - population: `+ floor(population * elapsed / 1000)`
/// - resources:  `+ floor(technology * elapsed / 10)` (pre-growth technology)
/// - `last_update` is overwritten with `elapsed` -- the delta applied, not
///   an accumulated clock. Replay-style bookkeeping: cumulative time
///   belongs to the external sequencer, not to the record.
///
/// Saturating arithmetic keeps the function total: inputs near `u64::MAX`
/// clamp instead of wrapping. All reference-range inputs follow the exact
/// formulas above.
pub fn apply_growth(civilization: &Civilization, elapsed: u64) -> Civilization {
    let technology_gain = elapsed.checked_div(TECH_TICKS_PER_LEVEL).unwrap_or(0);

    let population_gain = civilization
        .population
        .saturating_mul(elapsed)
        .checked_div(POPULATION_GROWTH_DIVISOR)
        .unwrap_or(0);

    // Resource yield scales with the technology level before this update.
    let resource_gain = civilization
        .technology_level
        .saturating_mul(elapsed)
        .checked_div(RESOURCE_YIELD_DIVISOR)
        .unwrap_or(0);

    Civilization {
        owner: civilization.owner.clone(),
        name: civilization.name.clone(),
        technology_level: civilization.technology_level.saturating_add(technology_gain),
        population: civilization.population.saturating_add(population_gain),
        resources: civilization.resources.saturating_add(resource_gain),
        last_update: elapsed,
    }
}
