use crate::action::{ActionError, GridTransition, entry_at};
use crate::env::GridEnv;
use crate::state::{GridEntry, GridState};

/// Takes an entry out of the grid. Later entries shift down by one index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveAction {
    pub index: usize,
}

impl RemoveAction {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl GridTransition for RemoveAction {
    type Error = ActionError;
    type Result = GridEntry;

    fn pre_validate(&self, state: &GridState, _env: &GridEnv<'_>) -> Result<(), Self::Error> {
        entry_at(state, self.index).map(|_| ())
    }

    fn apply(&self, state: &mut GridState, _env: &GridEnv<'_>) -> Result<GridEntry, Self::Error> {
        entry_at(state, self.index)?;
        Ok(state.entries_mut().remove(self.index))
    }
}

/// Uses up units from a stack. An entry that reaches zero is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumeAction {
    pub index: usize,
    pub amount: u32,
}

impl ConsumeAction {
    /// Amounts below one are treated as one.
    pub fn new(index: usize, amount: u32) -> Self {
        Self {
            index,
            amount: amount.max(1),
        }
    }
}

impl GridTransition for ConsumeAction {
    type Error = ActionError;
    /// Units left in the entry; zero means it was removed.
    type Result = u32;

    fn pre_validate(&self, state: &GridState, _env: &GridEnv<'_>) -> Result<(), Self::Error> {
        let entry = entry_at(state, self.index)?;
        if entry.quantity < self.amount {
            return Err(ActionError::InsufficientQuantity {
                index: self.index,
                requested: self.amount,
                available: entry.quantity,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GridState, _env: &GridEnv<'_>) -> Result<u32, Self::Error> {
        let len = state.len();
        let entry = state
            .entries_mut()
            .get_mut(self.index)
            .ok_or(ActionError::EntryNotFound {
                index: self.index,
                len,
            })?;

        let left = entry.quantity.saturating_sub(self.amount);
        entry.quantity = left;
        if left == 0 {
            state.entries_mut().remove(self.index);
        }
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemCatalog, ItemDefinition};
    use crate::state::CellPos;

    fn setup() -> (ItemCatalog, GridState) {
        let items = ItemCatalog::from_definitions([
            ItemDefinition::new("ammo9mm").with_max_stack(30),
            ItemDefinition::new("knife"),
        ]);
        let state = GridState::new(4, 2, 0.0).unwrap().with_entries(vec![
            GridEntry::new("ammo9mm", 12, CellPos::ORIGIN, false),
            GridEntry::new("knife", 1, CellPos::new(1, 0), false),
        ]);
        (items, state)
    }

    #[test]
    fn remove_shifts_later_indices() {
        let (items, mut state) = setup();
        let env = GridEnv::new(&items);

        let removed = RemoveAction::new(0).apply(&mut state, &env).unwrap();
        assert_eq!(removed.quantity, 12);
        assert_eq!(state.len(), 1);
        assert_eq!(state.entries()[0].item_id.as_str(), "knife");
    }

    #[test]
    fn consume_decrements_then_removes() {
        let (items, mut state) = setup();
        let env = GridEnv::new(&items);

        assert_eq!(ConsumeAction::new(0, 5).apply(&mut state, &env), Ok(7));
        assert_eq!(ConsumeAction::new(0, 7).apply(&mut state, &env), Ok(0));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn consume_rejects_overdraw() {
        let (items, state) = setup();
        let env = GridEnv::new(&items);

        assert_eq!(
            ConsumeAction::new(1, 2).pre_validate(&state, &env),
            Err(ActionError::InsufficientQuantity {
                index: 1,
                requested: 2,
                available: 1
            })
        );
    }
}
