//! Drives the engine with a deterministic stream of mixed requests and checks
//! the placement invariants after every step.

use grid_core::{CellPos, GridEngine, GridState, ItemCatalog, ItemDefinition, ItemOracle};

const IDS: [&str; 5] = ["ammo9mm", "pistol", "rifle", "brick", "crate"];

fn catalog() -> ItemCatalog {
    ItemCatalog::from_definitions([
        ItemDefinition::new("ammo9mm").with_max_stack(30).with_weight(0.02),
        ItemDefinition::new("pistol").with_footprint(2, 1).with_weight(0.9),
        ItemDefinition::new("rifle").with_footprint(4, 1).with_weight(3.2),
        ItemDefinition::new("brick").with_weight(0.6),
        ItemDefinition::new("crate")
            .with_footprint(2, 2)
            .with_rotatable(false)
            .with_weight(2.0),
    ])
}

/// Small linear congruential generator; keeps the run reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % u64::from(bound)) as u32
    }

    fn position(&mut self) -> CellPos {
        CellPos::new(self.next(9) as i32 - 1, self.next(7) as i32 - 1)
    }
}

fn step(engine: &mut GridEngine<'_>, rng: &mut Lcg) -> bool {
    let id = IDS[rng.next(IDS.len() as u32) as usize];
    let len = engine.state().len().max(1) as u32;

    match rng.next(6) {
        0 => engine
            .try_add(id, rng.next(40), rng.position(), rng.next(2) == 1)
            .is_ok(),
        1 => engine.add_auto(id, rng.next(50), rng.next(2) == 1).is_ok(),
        2 => engine
            .try_move(rng.next(len) as usize, rng.position(), rng.next(2) == 1)
            .is_ok(),
        3 => engine.consume(rng.next(len) as usize, rng.next(20)).is_ok(),
        4 => engine.remove(rng.next(len + 1) as usize).is_ok(),
        _ => engine.pickup(id, rng.next(10)).is_ok(),
    }
}

#[test]
fn random_requests_preserve_invariants() {
    let items = catalog();

    for cap in [0.0, 8.0] {
        let mut state = GridState::new(7, 5, cap).unwrap();
        let mut rng = Lcg(0x5eed ^ cap as u64);

        for round in 0..600 {
            let before = state.clone();
            let committed = {
                let mut engine = GridEngine::new(&mut state, &items);
                step(&mut engine, &mut rng)
            };

            if let Err(error) = state.audit(&items) {
                panic!("round {round} (cap {cap}): {error}");
            }
            if !committed {
                assert_eq!(state, before, "round {round}: failed request changed the grid");
            }
        }
    }
}

#[test]
fn index_at_agrees_with_footprints() {
    let items = catalog();
    let mut state = GridState::new(7, 5, 0.0).unwrap();
    let mut rng = Lcg(42);
    {
        let mut engine = GridEngine::new(&mut state, &items);
        for _ in 0..40 {
            step(&mut engine, &mut rng);
        }
    }

    let engine = GridEngine::new(&mut state, &items);
    for y in 0..5 {
        for x in 0..7 {
            let cell = CellPos::new(x, y);
            match engine.index_at(cell) {
                Some(index) => {
                    let entry = &engine.state().entries()[index];
                    let definition = items.definition(entry.item_id.as_str()).unwrap();
                    let rect = entry.rect(definition);
                    assert!(rect.contains(cell));
                }
                None => assert!(engine.can_place("brick", cell, false, None)),
            }
        }
    }
}
