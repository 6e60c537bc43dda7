//! Weight guard: carried weight against the grid's cap.
//!
//! A cap of `0.0` means unlimited. Entries whose definition cannot be resolved
//! contribute nothing to the total.

use crate::action::ActionError;
use crate::env::{ItemDefinition, ItemOracle};
use crate::state::GridState;

/// Sum of `quantity × weight_kg` over every resolvable entry.
pub fn total_weight(state: &GridState, items: &dyn ItemOracle) -> f32 {
    state
        .entries()
        .iter()
        .filter_map(|entry| {
            items
                .definition(entry.item_id.as_str())
                .map(|definition| entry.weight_kg(definition))
        })
        .sum()
}

/// Returns true iff a cap is set and `total_kg` is strictly above it.
#[inline]
pub fn exceeds_cap(total_kg: f32, cap_kg: f32) -> bool {
    cap_kg > 0.0 && total_kg > cap_kg
}

pub fn exceeds_weight(state: &GridState, items: &dyn ItemOracle) -> bool {
    exceeds_cap(total_weight(state, items), state.max_weight_kg())
}

/// Kilograms that can still be added, or `None` when the grid is unlimited.
pub fn remaining_capacity_kg(state: &GridState, items: &dyn ItemOracle) -> Option<f32> {
    state
        .is_weight_limited()
        .then(|| (state.max_weight_kg() - total_weight(state, items)).max(0.0))
}

/// How many of `wanted` additional units of `definition` fit under the cap.
/// Returns `wanted` when no cap applies.
///
/// The float quotient is only a starting guess; the result is adjusted until
/// `total + n × weight` agrees with [`exceeds_cap`], so it never contradicts
/// the post-commit check.
pub fn units_within_cap(
    state: &GridState,
    items: &dyn ItemOracle,
    definition: &ItemDefinition,
    wanted: u32,
) -> u32 {
    let cap_kg = state.max_weight_kg();
    if cap_kg <= 0.0 || definition.weight_kg <= 0.0 {
        return wanted;
    }

    let total_kg = total_weight(state, items);
    let fits = |units: u32| !exceeds_cap(total_kg + definition.weight_kg * units as f32, cap_kg);

    let estimate = ((cap_kg - total_kg) / definition.weight_kg).floor();
    let mut units = if estimate > 0.0 {
        (estimate.min(wanted as f32) as u32).min(wanted)
    } else {
        0
    };
    while units > 0 && !fits(units) {
        units -= 1;
    }
    while units < wanted && fits(units + 1) {
        units += 1;
    }
    units
}

/// Fails with [`ActionError::WeightExceeded`] when the state is over its cap.
pub fn check(state: &GridState, items: &dyn ItemOracle) -> Result<(), ActionError> {
    let total_kg = total_weight(state, items);
    let cap_kg = state.max_weight_kg();
    if exceeds_cap(total_kg, cap_kg) {
        return Err(ActionError::WeightExceeded { total_kg, cap_kg });
    }
    Ok(())
}
