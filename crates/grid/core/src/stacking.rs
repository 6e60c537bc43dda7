//! Stack merger.
//!
//! Incoming units are poured into existing entries of the same item before any
//! new placement is attempted. Stacks are visited in insertion order and
//! filled first-fit: no preference is given to fuller or emptier stacks.

use crate::env::ItemDefinition;
use crate::state::GridEntry;

/// Result of pouring units into existing stacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackMerge {
    /// Units moved into existing entries.
    pub absorbed: u32,
    /// Units that found no spare capacity.
    pub remaining: u32,
    /// Indices of the entries that grew, in the order they were filled.
    pub touched: Vec<usize>,
}

impl StackMerge {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Distributes `amount` units of `definition` over matching entries.
///
/// Non-stackable items are never merged. Only entry quantities change; no
/// footprint moves, so placement validity is unaffected.
pub fn merge_into_stacks(
    entries: &mut [GridEntry],
    definition: &ItemDefinition,
    amount: u32,
) -> StackMerge {
    let mut merge = StackMerge {
        remaining: amount,
        ..StackMerge::default()
    };
    if !definition.is_stackable() {
        return merge;
    }

    for (index, entry) in entries.iter_mut().enumerate() {
        if merge.remaining == 0 {
            break;
        }
        if entry.item_id != definition.id {
            continue;
        }

        let put = entry.spare_capacity(definition).min(merge.remaining);
        if put == 0 {
            continue;
        }

        entry.quantity += put;
        merge.absorbed += put;
        merge.remaining -= put;
        merge.touched.push(index);
    }

    merge
}
