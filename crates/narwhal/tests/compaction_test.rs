use narwhal::compaction::constraint_graph;
use narwhal::{
    CompactionOptions, ConstraintEdge, ConstraintGraph, Drawing, Error, LongestPathCompaction,
    RoutingChannel,
};

fn path_graph(lengths: &[i32]) -> ConstraintGraph<i32> {
    let mut g = constraint_graph();
    for (i, &len) in lengths.iter().enumerate() {
        g.set_edge_with_label(
            format!("n{i}"),
            format!("n{}", i + 1),
            ConstraintEdge::basic(len),
        );
    }
    g
}

fn positions(g: &ConstraintGraph<i32>, d: &Drawing<i32>) -> Vec<i32> {
    g.nodes().map(|v| d.get(v).unwrap()).collect()
}

fn total_length(g: &ConstraintGraph<i32>, d: &Drawing<i32>) -> i32 {
    g.edges()
        .map(|e| d.get(&e.w).unwrap() - d.get(&e.v).unwrap())
        .sum()
}

fn assert_feasible(g: &ConstraintGraph<i32>, d: &Drawing<i32>) {
    g.for_each_edge_ix(|_, _, e, label| {
        let (pv, pw) = (d.get(&e.v).unwrap(), d.get(&e.w).unwrap());
        assert!(
            pw - pv >= label.length,
            "constraint {} -> {} ({}) violated: {pv} / {pw}",
            e.v,
            e.w,
            label.length
        );
    });
}

/// Two chains that only meet at a shared sink, plus a loose branch that longest paths leave
/// far from its successor.
fn loose_graph() -> ConstraintGraph<i32> {
    let mut g = constraint_graph();
    g.set_edge_with_label("a", "b", ConstraintEdge::basic(2));
    g.set_edge_with_label("b", "c", ConstraintEdge::basic(10));
    g.set_edge_with_label("x", "y", ConstraintEdge::basic(1));
    g.set_edge_with_label("y", "c", ConstraintEdge::basic(1));
    g
}

#[test]
fn constructive_places_a_path_at_prefix_sums() {
    let g = path_graph(&[5, 3, 2]);
    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    assert_eq!(positions(&g, &d), vec![0, 5, 8, 10]);
}

#[test]
fn constructive_takes_the_longest_incoming_path() {
    let mut g = constraint_graph();
    g.set_edge_with_label("a", "b", ConstraintEdge::basic(1));
    g.set_edge_with_label("b", "d", ConstraintEdge::basic(1));
    g.set_edge_with_label("a", "c", ConstraintEdge::basic(4));
    g.set_edge_with_label("c", "d", ConstraintEdge::basic(1));
    g.set_node("e", ());

    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    assert_feasible(&g, &d);
    assert_eq!(d.get("a"), Some(0));
    assert_eq!(d.get("b"), Some(1));
    assert_eq!(d.get("c"), Some(4));
    assert_eq!(d.get("d"), Some(5));
    assert_eq!(d.get("e"), Some(0));
}

#[test]
fn constructive_is_minimal() {
    let g = loose_graph();
    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    for v in g.nodes() {
        let expected = g
            .edges()
            .filter(|e| e.w == v)
            .map(|e| d.get(&e.v).unwrap() + g.edge_by_key(e).unwrap().length)
            .max()
            .unwrap_or(0);
        assert_eq!(d.get(v), Some(expected), "node {v}");
    }
}

#[test]
fn constructive_handles_edges_inserted_against_topological_order() {
    let mut g = constraint_graph();
    g.set_node("d", ());
    g.set_node("c", ());
    g.set_edge_with_label("c", "d", ConstraintEdge::basic(3));
    g.set_edge_with_label("b", "c", ConstraintEdge::basic(2));
    g.set_edge_with_label("a", "b", ConstraintEdge::basic(1));

    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    assert_eq!(d.get("a"), Some(0));
    assert_eq!(d.get("b"), Some(1));
    assert_eq!(d.get("c"), Some(3));
    assert_eq!(d.get("d"), Some(6));
}

#[test]
fn visibility_edges_respect_the_routing_separation() {
    let mut g = constraint_graph();
    g.set_edge_with_label("a", "b", ConstraintEdge::visibility(2));
    g.set_edge_with_label("b", "c", ConstraintEdge::basic(2));
    g.set_edge_with_label("c", "d", ConstraintEdge::visibility(15));

    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::new(10), &mut d)
        .unwrap();

    assert_eq!(positions(&g, &d), vec![0, 10, 12, 27]);
}

#[test]
fn positive_cycle_is_fatal_and_leaves_the_drawing_alone() {
    let mut g = path_graph(&[1, 1]);
    g.set_edge_with_label("n2", "n0", ConstraintEdge::basic(1));

    let mut d = Drawing::new();
    d.set("n0", 42);
    let err = LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap_err();

    assert!(matches!(err, Error::PositiveCycle { .. }));
    assert_eq!(d.len(), 1);
    assert_eq!(d.get("n0"), Some(42));
}

#[test]
fn positive_self_loop_is_fatal() {
    let mut g: ConstraintGraph<i32> = constraint_graph();
    g.set_edge_with_label("a", "a", ConstraintEdge::basic(1));

    let err = LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut Drawing::new())
        .unwrap_err();
    match err {
        Error::PositiveCycle { node } => assert_eq!(node, "a"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_length_cycle_is_feasible() {
    let mut g = constraint_graph();
    g.set_edge_with_label("s", "a", ConstraintEdge::basic(4));
    g.set_edge_with_label("a", "b", ConstraintEdge::basic(0));
    g.set_edge_with_label("b", "a", ConstraintEdge::basic(0));

    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    assert_eq!(d.get("a"), Some(4));
    assert_eq!(d.get("b"), Some(4));
}

#[test]
fn empty_constraint_graph_is_a_no_op() {
    let g: ConstraintGraph<i32> = constraint_graph();
    let mut d = Drawing::new();
    let engine = LongestPathCompaction::default();
    engine
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();
    engine
        .improvement_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();
    assert!(d.is_empty());
}

#[test]
fn floating_point_lengths_are_supported() {
    let mut g: ConstraintGraph<f64> = constraint_graph();
    g.set_edge_with_label("a", "b", ConstraintEdge::basic(1.5));
    g.set_edge_with_label("b", "c", ConstraintEdge::basic(0.25));

    let mut d = Drawing::new();
    LongestPathCompaction::default()
        .constructive_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();
    assert_eq!(d.get("c"), Some(1.75));
}

#[test]
fn improvement_slides_a_group_to_its_loose_edge() {
    let g = loose_graph();
    let routing = RoutingChannel::default();
    let engine = LongestPathCompaction::default();
    let mut d = Drawing::new();
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();
    assert_eq!(d.get("x"), Some(0));
    assert_eq!(d.get("y"), Some(1));
    assert_eq!(total_length(&g, &d), 24);

    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();

    // {a, b, c} comes first in topological order and has one incoming boundary edge.
    assert_feasible(&g, &d);
    assert_eq!(d.get("a"), Some(-10));
    assert_eq!(d.get("b"), Some(-8));
    assert_eq!(d.get("c"), Some(2));
    assert_eq!(d.get("x"), Some(0));
    assert_eq!(d.get("y"), Some(1));
    assert_eq!(total_length(&g, &d), 14);
}

#[test]
fn improvement_moves_a_group_past_the_drawing_extent() {
    let mut g = constraint_graph();
    g.set_edge_with_label("v", "m", ConstraintEdge::basic(100));
    g.set_edge_with_label("v", "w", ConstraintEdge::basic(1));
    g.set_edge_with_label("s", "w", ConstraintEdge::basic(50));

    let routing = RoutingChannel::default();
    let engine = LongestPathCompaction::default();
    let mut d = Drawing::new();
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();
    assert_eq!(total_length(&g, &d), 200);

    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();

    assert_feasible(&g, &d);
    assert_eq!(d.get("v"), Some(49));
    assert_eq!(d.get("m"), Some(149));
    assert_eq!(d.get("s"), Some(0));
    assert_eq!(d.get("w"), Some(50));
    assert_eq!(total_length(&g, &d), 151);
}

#[test]
fn preserve_extent_blocks_moves_that_grow_the_drawing() {
    let mut g = constraint_graph();
    g.set_edge_with_label("v", "m", ConstraintEdge::basic(100));
    g.set_edge_with_label("v", "w", ConstraintEdge::basic(1));
    g.set_edge_with_label("s", "w", ConstraintEdge::basic(50));

    let routing = RoutingChannel::default();
    let mut engine = LongestPathCompaction::default();
    engine.set_preserve_extent(true);
    let mut d = Drawing::new();
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();
    let before = d.clone();

    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();
    assert_eq!(d, before);
}

#[test]
fn preserve_extent_still_pulls_a_loose_branch_forward() {
    let g = loose_graph();
    let routing = RoutingChannel::default();
    let mut engine = LongestPathCompaction::default();
    engine.set_preserve_extent(true);
    let mut d = Drawing::new();
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();

    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();

    assert_feasible(&g, &d);
    assert_eq!(d.get("a"), Some(0));
    assert_eq!(d.get("b"), Some(2));
    assert_eq!(d.get("c"), Some(12));
    assert_eq!(d.get("x"), Some(10));
    assert_eq!(d.get("y"), Some(11));
    assert_eq!(total_length(&g, &d), 14);
}

fn fan_graph() -> (ConstraintGraph<i32>, Drawing<i32>) {
    let mut g = constraint_graph();
    g.set_edge_with_label("a", "b", ConstraintEdge::basic(10));
    g.set_edge_with_label("a", "c", ConstraintEdge::basic(1));
    g.set_edge_with_label("c", "d", ConstraintEdge::basic(1));

    let mut d = Drawing::new();
    d.set("a", 0);
    d.set("b", 10);
    d.set("c", 5);
    d.set("d", 9);
    (g, d)
}

#[test]
fn improvement_starts_from_a_feasible_drawing() {
    let (g, mut d) = fan_graph();

    LongestPathCompaction::default()
        .improvement_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    // {a, b} slides forward by 4, then {a, b, c} by 3.
    assert_feasible(&g, &d);
    assert_eq!(d.get("a"), Some(7));
    assert_eq!(d.get("b"), Some(17));
    assert_eq!(d.get("c"), Some(8));
    assert_eq!(d.get("d"), Some(9));
    assert_eq!(total_length(&g, &d), 12);
}

#[test]
fn preserve_extent_pushes_a_sink_back() {
    let (g, mut d) = fan_graph();

    let mut engine = LongestPathCompaction::default();
    engine.set_preserve_extent(true);
    engine
        .improvement_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();

    assert_feasible(&g, &d);
    assert_eq!(d.get("a"), Some(0));
    assert_eq!(d.get("b"), Some(10));
    assert_eq!(d.get("c"), Some(1));
    assert_eq!(d.get("d"), Some(2));
}

#[test]
fn improvement_never_lengthens_and_stays_feasible() {
    let mut g = constraint_graph();
    let edges = [
        ("s", "a", 3),
        ("s", "b", 1),
        ("a", "c", 2),
        ("b", "c", 1),
        ("b", "d", 7),
        ("c", "e", 1),
        ("d", "e", 2),
        ("f", "d", 1),
        ("f", "g", 2),
        ("g", "e", 1),
    ];
    for (v, w, len) in edges {
        g.set_edge_with_label(v, w, ConstraintEdge::basic(len));
    }

    let routing = RoutingChannel::default();
    let engine = LongestPathCompaction::default();
    let mut d = Drawing::new();
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();
    let before = total_length(&g, &d);

    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();
    assert_feasible(&g, &d);
    let after = total_length(&g, &d);
    assert!(after <= before);

    // Converged: another pass changes nothing.
    let settled = d.clone();
    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();
    assert_eq!(d, settled);
    assert_eq!(total_length(&g, &d), after);
}

#[test]
fn improvement_respects_the_step_limit() {
    let mut g = constraint_graph();
    g.set_edge_with_label("a", "z", ConstraintEdge::basic(10));
    g.set_edge_with_label("p", "z", ConstraintEdge::basic(1));
    g.set_edge_with_label("q", "z", ConstraintEdge::basic(2));

    let routing = RoutingChannel::default();
    let mut d = Drawing::new();
    let mut engine = LongestPathCompaction::default();
    engine.set_max_improvement_steps(1);
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();
    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();

    // One move: {a, z} backs off by the smaller incoming slack.
    assert_eq!(d.get("a"), Some(-8));
    assert_eq!(d.get("z"), Some(2));
    assert_eq!(d.get("p"), Some(0));
    assert_eq!(d.get("q"), Some(0));

    engine.set_max_improvement_steps(0);
    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();
    assert_feasible(&g, &d);
    assert_eq!(d.get("a"), Some(-9));
    assert_eq!(d.get("z"), Some(1));
    assert_eq!(d.get("q"), Some(-1));
    assert_eq!(d.get("p"), Some(0));
    assert_eq!(total_length(&g, &d), 13);
}

#[test]
fn improvement_is_disabled_without_tighten() {
    let g = loose_graph();
    let routing = RoutingChannel::default();
    let engine = LongestPathCompaction::with_options(CompactionOptions {
        tighten: false,
        ..Default::default()
    });
    let mut d = Drawing::new();
    engine.constructive_heuristics(&g, &routing, &mut d).unwrap();
    let before = d.clone();

    engine.improvement_heuristics(&g, &routing, &mut d).unwrap();
    assert_eq!(d, before);
}

#[test]
fn improvement_recomputes_an_infeasible_drawing() {
    let g = path_graph(&[5, 3, 2]);
    let mut d = Drawing::new();
    d.set("n0", 0);
    d.set("n1", 1);
    d.set("n2", 2);
    d.set("n3", 3);

    LongestPathCompaction::default()
        .improvement_heuristics(&g, &RoutingChannel::default(), &mut d)
        .unwrap();
    assert_eq!(positions(&g, &d), vec![0, 5, 8, 10]);
}

#[test]
fn improvement_reports_a_positive_cycle() {
    let mut g = path_graph(&[1]);
    g.set_edge_with_label("n1", "n0", ConstraintEdge::basic(1));

    let err = LongestPathCompaction::default()
        .improvement_heuristics(&g, &RoutingChannel::default(), &mut Drawing::new())
        .unwrap_err();
    assert!(matches!(err, Error::PositiveCycle { .. }));
}
