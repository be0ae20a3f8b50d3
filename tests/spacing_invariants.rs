//! Property tests for the column grid: random add/hide streams must leave
//! every visible neighbour pair at least `min_span` apart, keep ids stable,
//! leave generated anchors alone, and replay deterministically.

use column_grid::{
    ElementId, GridConfig, GridStatus, LayoutGrid, Origin, SpacingViolation, ViolationKind,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { x: f64, y: f64 },
    AddAnchor { x: f64 },
    Hide { id: ElementId },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-50.0f64..50.0, -5.0f64..5.0).prop_map(|(x, y)| Op::Add { x, y }),
        1 => (-50.0f64..50.0).prop_map(|x| Op::AddAnchor { x }),
        2 => (1usize..40).prop_map(|id| Op::Hide { id }),
    ]
}

fn config_strategy() -> impl Strategy<Value = GridConfig> {
    (0.0f64..4.0, 0.1f64..10.0)
        .prop_map(|(min, extra)| GridConfig::new(min + extra, min).expect("min < max by construction"))
}

fn replay(config: GridConfig, ops: &[Op]) -> LayoutGrid<Vec<SpacingViolation>> {
    let mut grid = LayoutGrid::with_observer(config, Vec::new());
    for op in ops {
        apply(&mut grid, op);
    }
    grid
}

fn apply(grid: &mut LayoutGrid<Vec<SpacingViolation>>, op: &Op) {
    match *op {
        Op::Add { x, y } => {
            grid.add_element(x, y);
        }
        Op::AddAnchor { x } => {
            grid.add_generated_element(x, 0.0);
        }
        Op::Hide { id } => {
            grid.hide_element(id);
        }
    }
}

fn assert_min_spacing(grid: &LayoutGrid<Vec<SpacingViolation>>) {
    let min_span = grid.config().min_span();
    for pair in grid.visible_elements().windows(2) {
        let gap = pair[1].x() - pair[0].x();
        assert!(
            gap >= min_span,
            "elements {} and {} are {} apart (min {})",
            pair[0].id(),
            pair[1].id(),
            gap,
            min_span
        );
    }
}

proptest! {
    #[test]
    fn visible_neighbours_respect_min_span(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut grid = LayoutGrid::with_observer(config, Vec::new());
        for op in &ops {
            apply(&mut grid, op);
            assert_min_spacing(&grid);
        }
    }

    #[test]
    fn ids_are_sequential_and_never_reused(
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let grid = replay(GridConfig::default(), &ops);
        let ids: Vec<ElementId> = grid.elements().iter().map(|e| e.id()).collect();
        let expected: Vec<ElementId> = (1..=ids.len()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn hide_never_touches_anchors(
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut grid = replay(GridConfig::default(), &ops);
        let anchors: Vec<(ElementId, bool)> = grid
            .elements()
            .iter()
            .filter(|e| e.origin() == Origin::Generated)
            .map(|e| (e.id(), e.is_visible()))
            .collect();
        for &(id, visible) in &anchors {
            grid.hide_element(id);
            prop_assert_eq!(grid.element(id).unwrap().is_visible(), visible);
        }
    }

    #[test]
    fn replay_is_deterministic(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let first = replay(config, &ops);
        let second = replay(config, &ops);
        prop_assert_eq!(first.status(), second.status());
        prop_assert_eq!(first.observer(), second.observer());
    }

    #[test]
    fn snapshots_are_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let grid = replay(GridConfig::default(), &ops);
        let snapshot: GridStatus = grid.status();
        prop_assert_eq!(&grid.status(), &snapshot);
        prop_assert_eq!(grid.elements().len(), snapshot.entries.len());
    }

    #[test]
    fn under_span_events_name_a_hidden_element(
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let grid = replay(GridConfig::default(), &ops);
        for violation in grid.observer() {
            if violation.kind == ViolationKind::UnderSpan {
                prop_assert!(!grid.element(violation.second).unwrap().is_visible());
            }
        }
    }
}
