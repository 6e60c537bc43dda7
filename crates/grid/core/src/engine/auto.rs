//! Auto-add: stack first, then search for slots one entry at a time.

use crate::action::{ActionError, resolve};
use crate::env::GridEnv;
use crate::search;
use crate::stacking;
use crate::state::{GridEntry, GridState, ItemId};
use crate::weight;

/// Why auto-placement stopped before placing every unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum StopReason {
    #[strum(serialize = "no space")]
    NoSpace,
    #[strum(serialize = "weight cap reached")]
    WeightCap,
}

/// Accounting for one auto-add call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoPlacement {
    /// Units asked for, after coercion to at least one.
    pub requested: u32,
    /// Units that could not be placed.
    pub leftover: u32,
    /// Units merged into stacks that existed before the call.
    pub stacked: u32,
    /// Indices of entries created by the call, in creation order.
    pub created: Vec<usize>,
    pub stop: Option<StopReason>,
}

impl AutoPlacement {
    /// Units that went into newly created entries.
    pub fn placed(&self) -> u32 {
        self.requested - self.leftover - self.stacked
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.leftover == 0
    }
}

/// Result of a pickup attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupOutcome {
    Collected { amount: u32 },
    /// Some or all units did not fit; `collected` may be zero.
    Partial { collected: u32, leftover: u32 },
}

impl PickupOutcome {
    pub fn leftover(&self) -> u32 {
        match self {
            Self::Collected { .. } => 0,
            Self::Partial { leftover, .. } => *leftover,
        }
    }
}

impl From<&AutoPlacement> for PickupOutcome {
    fn from(placement: &AutoPlacement) -> Self {
        if placement.is_complete() {
            Self::Collected {
                amount: placement.requested,
            }
        } else {
            Self::Partial {
                collected: placement.requested - placement.leftover,
                leftover: placement.leftover,
            }
        }
    }
}

/// Places `amount` units of `item_id` wherever they fit.
///
/// Units are merged into existing stacks first. The rest are placed one
/// entry at a time: the first free slot gets a single unit, which is then
/// topped up from the remainder to a full stack. Every merge and top-up is
/// limited to what the weight cap allows, so the cap holds after each step
/// and whatever was placed before a stop stays committed.
///
/// # Errors
///
/// Only [`ActionError::UnknownItem`]; the grid is untouched in that case.
pub(super) fn add_auto(
    state: &mut GridState,
    env: &GridEnv<'_>,
    item_id: &ItemId,
    amount: u32,
    allow_rotate: bool,
) -> Result<AutoPlacement, ActionError> {
    let definition = resolve(env, item_id)?;
    let items = env.items();

    let requested = amount.max(1);
    let budget = weight::units_within_cap(state, items, definition, requested);
    let merge = stacking::merge_into_stacks(state.entries_mut(), definition, budget);

    let mut placement = AutoPlacement {
        requested,
        stacked: merge.absorbed,
        ..AutoPlacement::default()
    };
    let mut remaining = requested - merge.absorbed;

    while remaining > 0 {
        let Some(slot) = search::find_slot(state, items, definition, allow_rotate) else {
            placement.stop = Some(StopReason::NoSpace);
            break;
        };

        state.entries_mut().push(GridEntry::new(
            definition.id.clone(),
            1,
            slot.position,
            slot.rotated(),
        ));
        if weight::exceeds_weight(state, items) {
            state.entries_mut().pop();
            placement.stop = Some(StopReason::WeightCap);
            break;
        }

        remaining -= 1;
        let index = state.len() - 1;
        placement.created.push(index);

        let wanted = remaining.min(definition.stack_limit() - 1);
        let extra = weight::units_within_cap(state, items, definition, wanted);
        let Some(entry) = state.entries_mut().get_mut(index) else {
            break;
        };
        entry.quantity += extra;
        remaining -= extra;

        // Summing per entry can round differently from the budget estimate.
        while weight::exceeds_weight(state, items) {
            match state.entries_mut().get_mut(index) {
                Some(entry) if entry.quantity > 1 => {
                    entry.quantity -= 1;
                    remaining += 1;
                }
                _ => break,
            }
        }
    }

    placement.leftover = remaining;
    tracing::debug!(
        item = %item_id,
        requested,
        stacked = placement.stacked,
        created = placement.created.len(),
        leftover = placement.leftover,
        stop = ?placement.stop,
        "auto-add finished"
    );
    Ok(placement)
}
