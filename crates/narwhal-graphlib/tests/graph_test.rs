use narwhal_graphlib::{EdgeKey, Graph, GraphOptions};

fn key(v: &str, w: &str) -> EdgeKey {
    EdgeKey::new(v, w, None::<String>)
}

#[test]
fn set_edge_creates_missing_endpoints_in_order() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions::default());
    g.set_edge_with_label("b", "a", 7);

    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(g.edge_by_key(&key("b", "a")), Some(&7));
    assert_eq!(g.edge_by_key(&key("a", "b")), None);
}

#[test]
fn implicit_endpoints_get_default_labels() {
    let mut g: Graph<i32, i32, ()> = Graph::new(GraphOptions::default());
    g.set_node("a", 5);
    g.set_edge("a", "b");

    assert_eq!(g.node("a"), Some(&5));
    assert_eq!(g.node("b"), Some(&0));
    assert_eq!(g.edge_by_key(&key("a", "b")), Some(&0));
}

#[test]
fn set_edge_without_label_keeps_the_existing_one() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions::default());
    g.set_edge_with_label("a", "b", 3);
    g.set_edge("a", "b");

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_by_key(&key("a", "b")), Some(&3));
}

#[test]
fn multigraph_keeps_named_parallel_edges_apart() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions { multigraph: true });
    g.set_edge_named("a", "b", Some("x"), Some(1));
    g.set_edge_named("a", "b", Some("y"), Some(2));

    assert!(g.is_multigraph());
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge_by_key(&EdgeKey::new("a", "b", Some("x"))), Some(&1));
    assert_eq!(g.edge_by_key(&EdgeKey::new("a", "b", Some("y"))), Some(&2));
    assert_eq!(g.edge_by_key(&key("a", "b")), None);
}

#[test]
fn simple_graph_ignores_edge_names() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions::default());
    g.set_edge_named("a", "b", Some("x"), Some(1));
    g.set_edge_named("a", "b", Some("y"), Some(2));

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_by_key(&key("a", "b")), Some(&2));
    assert_eq!(g.edge_by_key(&EdgeKey::new("a", "b", Some("z"))), Some(&2));
    assert_eq!(g.edges().next().and_then(|k| k.name.clone()), None);
}

#[test]
fn edge_mut_by_key_updates_the_label() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions::default());
    g.set_edge_key(key("a", "b"), 1);

    if let Some(label) = g.edge_mut_by_key(&key("a", "b")) {
        *label = 4;
    }
    assert_eq!(g.edge_by_key(&key("a", "b")), Some(&4));
    assert!(g.edge_mut_by_key(&key("b", "a")).is_none());
}

#[test]
fn edge_indices_point_at_endpoints() {
    let mut g: Graph<(), (), ()> = Graph::new(GraphOptions::default());
    g.set_node("c", ());
    g.set_edge("a", "c");
    g.set_edge("c", "b");

    let mut seen = Vec::new();
    g.for_each_edge_ix(|v_ix, w_ix, k, _| {
        assert_eq!(g.node_id_by_ix(v_ix), Some(k.v.as_str()));
        assert_eq!(g.node_id_by_ix(w_ix), Some(k.w.as_str()));
        seen.push((v_ix, w_ix));
    });
    assert_eq!(seen, vec![(1, 0), (0, 2)]);

    let mut around_c = Vec::new();
    g.for_each_neighbor_ix(0, |ix| around_c.push(ix));
    assert_eq!(around_c, vec![2, 1]);
}

#[test]
fn clone_is_independent_of_the_source() {
    let mut g: Graph<i32, i32, ()> = Graph::new(GraphOptions::default());
    g.set_edge_with_label("a", "b", 1);

    let mut h = g.clone();
    h.set_node("a", 5);
    h.set_edge("b", "c");

    assert_eq!(g.node("a"), Some(&0));
    assert!(g.node("c").is_none());
    assert_eq!(h.node("a"), Some(&5));
    assert_eq!(h.node_count(), 3);
    assert_eq!(h.edge_by_key(&key("a", "b")), Some(&1));
}
