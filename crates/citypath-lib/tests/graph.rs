use citypath_lib::{Edge, Graph};

#[test]
fn edges_are_stored_symmetrically() {
    let mut graph = Graph::new();
    graph.add_edge("X", "Y", 7.0);

    assert_eq!(
        graph.neighbours("X"),
        [Edge {
            target: "Y".to_string(),
            distance: 7.0
        }]
    );
    assert_eq!(
        graph.neighbours("Y"),
        [Edge {
            target: "X".to_string(),
            distance: 7.0
        }]
    );
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.location_count(), 2);
}

#[test]
fn neighbours_keep_insertion_order() {
    let mut graph = Graph::new();
    graph.add_edge("hub", "c", 3.0);
    graph.add_edge("a", "hub", 1.0);
    graph.add_edge("hub", "b", 2.0);

    let targets: Vec<_> = graph
        .neighbours("hub")
        .iter()
        .map(|edge| (edge.target.as_str(), edge.distance))
        .collect();
    assert_eq!(targets, vec![("c", 3.0), ("a", 1.0), ("b", 2.0)]);
}

#[test]
fn parallel_edges_are_kept() {
    let mut graph = Graph::new();
    graph.add_edge("philadelphia", "newYork", 101.0);
    graph.add_edge("newYork", "philadelphia", 101.0);

    assert_eq!(graph.neighbours("philadelphia").len(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn contains_only_locations_with_edges() {
    let mut graph = Graph::new();
    graph.add_edge("a", "b", 1.0);

    assert!(graph.contains("a"));
    assert!(graph.contains("b"));
    assert!(!graph.contains("c"));
    assert!(graph.neighbours("c").is_empty());
}
