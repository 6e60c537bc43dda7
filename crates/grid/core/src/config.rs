/// Grid configuration: dimensions and carry limit for one container.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of columns in the grid.
    pub cells_wide: u32,
    /// Number of rows in the grid.
    pub cells_high: u32,
    /// Total carry limit in kilograms. `0.0` means unlimited.
    pub max_weight_kg: f32,
}

impl GridConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CELLS_WIDE: u32 = 10;
    pub const DEFAULT_CELLS_HIGH: u32 = 6;
    pub const UNLIMITED_WEIGHT: f32 = 0.0;

    pub fn new() -> Self {
        Self {
            cells_wide: Self::DEFAULT_CELLS_WIDE,
            cells_high: Self::DEFAULT_CELLS_HIGH,
            max_weight_kg: Self::UNLIMITED_WEIGHT,
        }
    }

    pub fn with_size(cells_wide: u32, cells_high: u32) -> Self {
        Self {
            cells_wide,
            cells_high,
            ..Self::new()
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
