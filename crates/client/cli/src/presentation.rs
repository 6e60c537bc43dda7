//! Plain-text rendering of a grid for the terminal.

use std::fmt::Write;

use grid_core::{CellPos, GridState, ItemOracle, weight};

const GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const EMPTY: char = '.';
const OVERFLOW: char = '#';

/// Glyph used for the entry at `index` in the map and the legend.
pub fn glyph(index: usize) -> char {
    GLYPHS.get(index).map_or(OVERFLOW, |&byte| char::from(byte))
}

/// Draws the cell map followed by a legend and a weight line.
pub fn render(state: &GridState, items: &dyn ItemOracle) -> String {
    let mut out = String::new();

    for y in 0..state.height() {
        for x in 0..state.width() {
            let cell = CellPos::new(x as i32, y as i32);
            out.push(state.index_at(items, cell).map_or(EMPTY, glyph));
        }
        out.push('\n');
    }

    for (index, entry) in state.entries().iter().enumerate() {
        let label = items
            .definition(entry.item_id.as_str())
            .map_or(entry.item_id.as_str(), |definition| definition.label());
        let _ = writeln!(
            out,
            "{} [{index}] {label} x{} at {}{}",
            glyph(index),
            entry.quantity,
            entry.position,
            if entry.rotated { " (rotated)" } else { "" },
        );
    }

    let total = weight::total_weight(state, items);
    let _ = match weight::remaining_capacity_kg(state, items) {
        Some(_) => writeln!(out, "weight {total:.2} / {:.2} kg", state.max_weight_kg()),
        None => writeln!(out, "weight {total:.2} kg (no limit)"),
    };

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::{GridEngine, ItemCatalog, ItemDefinition};

    #[test]
    fn draws_footprints_with_entry_glyphs() {
        let items = ItemCatalog::from_definitions([
            ItemDefinition::new("pistol")
                .with_display_name("Pistol")
                .with_footprint(2, 1),
            ItemDefinition::new("knife").with_weight(0.5),
        ]);
        let mut state = GridState::new(4, 2, 3.0).unwrap();
        let mut engine = GridEngine::new(&mut state, &items);
        engine.try_add("pistol", 1, CellPos::new(1, 0), false).unwrap();
        engine.try_add("knife", 1, CellPos::new(3, 1), false).unwrap();

        let text = render(&state, &items);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], ".aa.");
        assert_eq!(lines[1], "...b");
        assert_eq!(lines[2], "a [0] Pistol x1 at (1, 0)");
        assert_eq!(lines[3], "b [1] knife x1 at (3, 1)");
        assert_eq!(lines[4], "weight 1.50 / 3.00 kg");
    }

    #[test]
    fn glyphs_run_out_gracefully() {
        assert_eq!(glyph(0), 'a');
        assert_eq!(glyph(26), 'A');
        assert_eq!(glyph(500), '#');
    }
}
