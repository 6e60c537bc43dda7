use crate::env::ItemDefinition;
use crate::state::{CellPos, CellRect, ItemId};

/// One placed stack of items.
///
/// Entries are addressed by their index in [`GridState::entries`]; they carry
/// no identity of their own.
///
/// [`GridState::entries`]: crate::state::GridState::entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridEntry {
    pub item_id: ItemId,
    pub quantity: u32,
    /// Top-left cell of the footprint.
    pub position: CellPos,
    /// Width and height are swapped when set.
    pub rotated: bool,
}

impl GridEntry {
    pub fn new(item_id: impl Into<ItemId>, quantity: u32, position: CellPos, rotated: bool) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            position,
            rotated,
        }
    }

    /// Cells covered by this entry given its definition.
    pub fn rect(&self, definition: &ItemDefinition) -> CellRect {
        let (width, height) = definition.effective_size(self.rotated);
        CellRect::new(self.position, width, height)
    }

    /// Units that can still be merged into this entry.
    #[inline]
    pub fn spare_capacity(&self, definition: &ItemDefinition) -> u32 {
        definition.stack_limit().saturating_sub(self.quantity)
    }

    /// Weight of the whole stack.
    #[inline]
    pub fn weight_kg(&self, definition: &ItemDefinition) -> f32 {
        definition.weight_kg * self.quantity.max(1) as f32
    }
}
