use crate::action::{ActionError, GridTransition, resolve};
use crate::env::GridEnv;
use crate::state::{CellPos, GridEntry, GridState, ItemId};
use crate::{placement, stacking, weight};

/// Adds units of an item at an explicit anchor.
///
/// Units first top up existing stacks of the same item. Whatever is left is
/// placed as one new entry at `position`, clamped to a single stack; any
/// surplus beyond that stack is dropped and counted in [`AddOutcome::Placed`].
/// Use auto-placement to spread an amount over several entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddAction {
    pub item_id: ItemId,
    pub amount: u32,
    pub position: CellPos,
    pub rotated: bool,
}

impl AddAction {
    /// Amounts below one are treated as one.
    pub fn new(item_id: impl Into<ItemId>, amount: u32, position: CellPos, rotated: bool) -> Self {
        Self {
            item_id: item_id.into(),
            amount: amount.max(1),
            position,
            rotated,
        }
    }
}

/// What a successful [`AddAction`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Every unit went into existing stacks; no entry was created.
    Stacked { touched: Vec<usize> },

    /// A new entry was appended.
    Placed {
        index: usize,
        quantity: u32,
        /// Units that exceeded one stack and were discarded.
        dropped: u32,
    },
}

impl AddOutcome {
    /// Index of the created entry, if any.
    pub fn placed_index(&self) -> Option<usize> {
        match self {
            Self::Placed { index, .. } => Some(*index),
            Self::Stacked { .. } => None,
        }
    }
}

impl GridTransition for AddAction {
    type Error = ActionError;
    type Result = AddOutcome;

    fn pre_validate(&self, _state: &GridState, env: &GridEnv<'_>) -> Result<(), Self::Error> {
        resolve(env, &self.item_id).map(|_| ())
    }

    fn apply(&self, state: &mut GridState, env: &GridEnv<'_>) -> Result<Self::Result, Self::Error> {
        let definition = resolve(env, &self.item_id)?;

        let merge = stacking::merge_into_stacks(state.entries_mut(), definition, self.amount);
        if merge.is_complete() {
            return Ok(AddOutcome::Stacked {
                touched: merge.touched,
            });
        }

        placement::check_definition(
            state,
            env.items(),
            definition,
            self.position,
            self.rotated,
            None,
        )?;

        let quantity = merge.remaining.min(definition.stack_limit());
        state.entries_mut().push(GridEntry::new(
            definition.id.clone(),
            quantity,
            self.position,
            self.rotated,
        ));

        Ok(AddOutcome::Placed {
            index: state.len() - 1,
            quantity,
            dropped: merge.remaining - quantity,
        })
    }

    fn post_validate(&self, state: &GridState, env: &GridEnv<'_>) -> Result<(), Self::Error> {
        weight::check(state, env.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemCatalog, ItemDefinition};

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_definitions([
            ItemDefinition::new("ammo9mm").with_max_stack(30).with_weight(0.02),
            ItemDefinition::new("pistol").with_footprint(2, 1),
        ])
    }

    #[test]
    fn amount_is_coerced_to_one() {
        let action = AddAction::new("pistol", 0, CellPos::ORIGIN, false);
        assert_eq!(action.amount, 1);
    }

    #[test]
    fn new_entry_is_clamped_to_one_stack() {
        let items = catalog();
        let env = GridEnv::new(&items);
        let mut state = GridState::new(10, 6, 0.0).unwrap();

        let action = AddAction::new("ammo9mm", 45, CellPos::new(4, 2), false);
        action.pre_validate(&state, &env).unwrap();
        let outcome = action.apply(&mut state, &env).unwrap();
        action.post_validate(&state, &env).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Placed {
                index: 0,
                quantity: 30,
                dropped: 15
            }
        );
        assert_eq!(state.entries()[0].position, CellPos::new(4, 2));
    }

    #[test]
    fn stacked_add_ignores_target_position() {
        let items = catalog();
        let env = GridEnv::new(&items);
        let mut state = GridState::new(10, 6, 0.0)
            .unwrap()
            .with_entries(vec![GridEntry::new("ammo9mm", 10, CellPos::ORIGIN, false)]);

        let action = AddAction::new("ammo9mm", 5, CellPos::new(-9, -9), false);
        let outcome = action.apply(&mut state, &env).unwrap();

        assert_eq!(outcome, AddOutcome::Stacked { touched: vec![0] });
        assert_eq!(state.entries()[0].quantity, 15);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn unknown_item_fails_pre_validation() {
        let items = catalog();
        let env = GridEnv::new(&items);
        let state = GridState::new(4, 4, 0.0).unwrap();

        let action = AddAction::new("ghost", 1, CellPos::ORIGIN, false);
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(ActionError::UnknownItem(ItemId::from("ghost")))
        );
    }
}
