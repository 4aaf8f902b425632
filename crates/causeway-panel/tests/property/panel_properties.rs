//! Property tests: edge resolution over random pending sets, selection
//! encoding round-trips, and effect formatting.

use proptest::prelude::*;

use causeway_core::{CausalGraph, Direction, EdgeKey};
use causeway_panel::view::format_effect;
use causeway_panel::EdgeResolver;

const NODES: usize = 8;

/// Distinct unordered node pairs.
fn pair_set() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::btree_set(
        (0..NODES, 0..NODES)
            .prop_filter("distinct endpoints", |(a, b)| a != b)
            .prop_map(|(a, b)| (a.min(b), a.max(b))),
        0..NODES,
    )
    .prop_map(|set| set.into_iter().collect())
}

/// Encode every pair bidirectionally, as the host delivers unresolved edges.
fn build(pairs: &[(usize, usize)]) -> (CausalGraph, Vec<EdgeKey>) {
    let mut graph = CausalGraph::new();
    let mut edges = Vec::new();
    for &(i, j) in pairs {
        let a = format!("n{i}");
        let b = format!("n{j}");
        graph.add_arc(&a, &b);
        graph.add_arc(&b, &a);
        edges.push(EdgeKey::new(a, b));
    }
    (graph, edges)
}

fn flip(direction: Direction) -> Direction {
    match direction {
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    }
}

proptest! {
    // Each resolution shrinks the pending set by exactly one and leaves
    // exactly one arc between the endpoints; one of the two directions is
    // always accepted; the fully resolved graph is acyclic.
    #[test]
    fn resolving_every_edge_yields_an_acyclic_graph(
        pairs in pair_set(),
        dirs in prop::collection::vec(any::<bool>(), NODES),
    ) {
        let (mut graph, edges) = build(&pairs);
        let mut resolver = EdgeResolver::new(edges.clone());

        for (i, edge) in edges.iter().enumerate() {
            let preferred = if dirs[i % NODES] {
                Direction::Right
            } else {
                Direction::Left
            };
            let before = resolver.pending_count();
            if resolver.resolve(&mut graph, edge, preferred).is_err() {
                let fallback = resolver.resolve(&mut graph, edge, flip(preferred));
                prop_assert!(fallback.is_ok(), "both directions rejected for {edge}");
            }
            prop_assert_eq!(resolver.pending_count(), before - 1);

            let forward = graph.contains_arc(edge.left(), edge.right());
            let backward = graph.contains_arc(edge.right(), edge.left());
            prop_assert!(forward ^ backward, "expected exactly one arc for {edge}");
        }

        prop_assert!(resolver.is_complete());
        prop_assert!(graph.find_cycles().is_empty());
    }

    // The selection encoding round-trips through parse for ordinary names.
    #[test]
    fn selection_encoding_round_trips(
        a in "[A-Za-z][A-Za-z0-9_]{0,7}",
        b in "[A-Za-z][A-Za-z0-9_]{0,7}",
    ) {
        let edge = EdgeKey::new(a, b);
        let parsed = edge.encoded().parse::<EdgeKey>();
        prop_assert_eq!(parsed.ok(), Some(edge));
    }

    // Formatting never strays more than half a display unit from the value.
    #[test]
    fn formatted_effects_stay_close(value in -1.0e6_f64..1.0e6) {
        let rendered = format_effect(value);
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert!((parsed - value).abs() <= 0.0051, "{value} rendered as {rendered}");
    }
}
