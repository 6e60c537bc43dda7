use crate::state::ItemId;

/// Read-only registry of item definitions.
///
/// The engine receives an oracle by reference and never mutates it. Loading,
/// hot-reloading or async readiness is the implementor's concern; the engine
/// only needs the two lookups below.
pub trait ItemOracle {
    /// Resolves an identifier to its definition, or `None` if unknown.
    fn definition(&self, id: &str) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Width and height of an item in cells, before rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the `(width, height)` the item occupies in the given orientation.
    #[inline]
    pub const fn oriented(self, rotated: bool) -> (u32, u32) {
        if rotated {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Static description of an item kind.
///
/// # Stacking
///
/// `max_stack` bounds the quantity a single grid entry may hold:
/// - Weapons, tools: `max_stack = 1` (never stack)
/// - Ammunition, consumables: `max_stack > 1`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub footprint: Footprint,
    #[cfg_attr(feature = "serde", serde(default = "default_rotatable"))]
    pub rotatable: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_max_stack"))]
    pub max_stack: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_weight_kg"))]
    pub weight_kg: f32,
}

#[cfg(feature = "serde")]
fn default_rotatable() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_max_stack() -> u32 {
    1
}

#[cfg(feature = "serde")]
fn default_weight_kg() -> f32 {
    1.0
}

impl ItemDefinition {
    /// Creates a rotatable, non-stackable 1×1 item weighing one kilogram.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            footprint: Footprint::UNIT,
            rotatable: true,
            max_stack: 1,
            weight_kg: 1.0,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_footprint(mut self, width: u32, height: u32) -> Self {
        self.footprint = Footprint::new(width, height);
        self
    }

    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn with_weight(mut self, weight_kg: f32) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Returns true if more than one unit fits in a single entry.
    #[inline]
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    /// Largest quantity a single entry of this item may hold (at least 1).
    #[inline]
    pub fn stack_limit(&self) -> u32 {
        self.max_stack.max(1)
    }

    /// Returns the `(width, height)` the item occupies in the given orientation.
    #[inline]
    pub fn effective_size(&self, rotated: bool) -> (u32, u32) {
        self.footprint.oriented(rotated)
    }

    /// Name shown to players: the display name, or the id when it is empty.
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_size_swaps_when_rotated() {
        let rifle = ItemDefinition::new("rifle").with_footprint(4, 1);
        assert_eq!(rifle.effective_size(false), (4, 1));
        assert_eq!(rifle.effective_size(true), (1, 4));
    }

    #[test]
    fn label_falls_back_to_id() {
        let knife = ItemDefinition::new("knife");
        assert_eq!(knife.label(), "knife");
        assert_eq!(knife.with_display_name("Combat Knife").label(), "Combat Knife");
    }

    #[test]
    fn stack_limit_never_below_one() {
        let odd = ItemDefinition::new("odd").with_max_stack(0);
        assert_eq!(odd.stack_limit(), 1);
        assert!(!odd.is_stackable());
    }
}
