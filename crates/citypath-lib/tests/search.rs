mod common;

use citypath_lib::{
    load_network, search, CycleGuard, NotFoundReason, SearchMode, SearchOptions, SearchRequest,
    SearchStatus,
};

use common::{fixtures_dir, flat_network};

fn triangle() -> citypath_lib::RoadNetwork {
    flat_network(&[("A", "B", 10.0), ("B", "C", 5.0), ("A", "C", 20.0)])
}

/// Two routes into X: direct (10) and through Y (2 + 3).
fn converging() -> citypath_lib::RoadNetwork {
    flat_network(&[
        ("S", "X", 10.0),
        ("S", "Y", 2.0),
        ("Y", "X", 3.0),
        ("X", "T", 5.0),
        ("S", "T", 30.0),
    ])
}

/// Triangle a-b-c with an expensive spur to d.
fn loop_with_spur() -> citypath_lib::RoadNetwork {
    flat_network(&[
        ("a", "b", 1.0),
        ("b", "c", 1.0),
        ("c", "a", 1.0),
        ("c", "d", 100.0),
    ])
}

#[test]
fn uniform_prefers_cheaper_two_hop_route() {
    let network = triangle();
    let outcome = search(&network, &SearchRequest::uniform("A", "C")).expect("search runs");

    assert_eq!(outcome.path(), ["A", "B", "C"]);
    assert_eq!(outcome.total_distance(), Some(15.0));
    assert_eq!(outcome.expanded, vec!["A", "B"]);
}

#[test]
fn unknown_source_yields_empty_path_for_every_mode() {
    let network = triangle();
    for mode in SearchMode::ALL {
        let outcome = search(&network, &SearchRequest::new(mode, "Z", "C")).expect("search runs");
        assert!(outcome.path().is_empty(), "{mode} returned a path");
        assert_eq!(outcome.not_found_reason(), Some(NotFoundReason::UnknownSource));
        assert!(outcome.expanded.is_empty());
    }
}

#[test]
fn unknown_destination_yields_empty_path_for_every_mode() {
    let network = triangle();
    for mode in SearchMode::ALL {
        let outcome = search(&network, &SearchRequest::new(mode, "A", "Z")).expect("search runs");
        assert!(outcome.path().is_empty());
        assert_eq!(
            outcome.not_found_reason(),
            Some(NotFoundReason::UnknownDestination)
        );
    }
}

#[test]
fn source_equal_to_destination_is_a_single_node_path() {
    let network = triangle();
    for mode in SearchMode::ALL {
        let outcome = search(&network, &SearchRequest::new(mode, "B", "B")).expect("search runs");
        assert_eq!(outcome.path(), ["B"]);
        assert_eq!(outcome.total_distance(), Some(0.0));
        assert!(outcome.expanded.is_empty());
    }
}

#[test]
fn pruning_keeps_the_cheapest_converging_route() {
    let network = converging();
    for mode in [SearchMode::Uniform, SearchMode::Astar] {
        let outcome = search(&network, &SearchRequest::new(mode, "S", "T")).expect("search runs");
        assert_eq!(outcome.path(), ["S", "Y", "X", "T"], "{mode}");
        assert_eq!(outcome.total_distance(), Some(10.0));
        // The direct S-X candidate is dominated and never expanded.
        assert_eq!(outcome.expanded, vec!["S", "Y", "X"], "{mode}");
    }
}

#[test]
fn greedy_finds_a_route_that_is_not_cheapest() {
    let network = converging();
    let greedy = search(&network, &SearchRequest::greedy("S", "T")).expect("search runs");
    let uniform = search(&network, &SearchRequest::uniform("S", "T")).expect("search runs");

    assert_eq!(greedy.path(), ["S", "T"]);
    assert_eq!(greedy.total_distance(), Some(30.0));
    assert!(greedy.total_distance() >= uniform.total_distance());
}

#[test]
fn parent_guard_allows_longer_loops() {
    let network = loop_with_spur();
    let outcome = search(&network, &SearchRequest::uniform("a", "d")).expect("search runs");

    assert_eq!(outcome.path(), ["a", "c", "d"]);
    assert_eq!(outcome.total_distance(), Some(101.0));
    let revisits = outcome.expanded.iter().filter(|name| *name == "a").count();
    assert!(revisits > 1, "weak guard should revisit the source");
}

#[test]
fn full_path_guard_never_revisits() {
    let network = loop_with_spur();
    let options = SearchOptions {
        cycle_guard: CycleGuard::FullPath,
        ..SearchOptions::default()
    };
    for mode in [SearchMode::Uniform, SearchMode::Astar] {
        let request = SearchRequest::new(mode, "a", "d").with_options(options);
        let outcome = search(&network, &request).expect("search runs");

        assert_eq!(outcome.path(), ["a", "c", "d"]);
        assert_eq!(outcome.total_distance(), Some(101.0));
        assert_eq!(outcome.expanded, vec!["a", "b", "c", "b"]);
    }
}

#[test]
fn expansion_limit_stops_the_search() {
    let network = triangle();
    let request = SearchRequest::uniform("A", "C").with_options(SearchOptions {
        max_expansions: 1,
        ..SearchOptions::default()
    });
    let outcome = search(&network, &request).expect("search runs");

    assert!(outcome.path().is_empty());
    assert_eq!(
        outcome.status,
        SearchStatus::NotFound(NotFoundReason::ExpansionLimit)
    );
    assert_eq!(outcome.expanded, vec!["A"]);
}

#[test]
fn disconnected_components_are_unreachable() {
    let network = load_network(&fixtures_dir().join("islands")).expect("fixture loads");
    for mode in SearchMode::ALL {
        let outcome =
            search(&network, &SearchRequest::new(mode, "north", "south")).expect("search runs");
        assert!(outcome.path().is_empty());
        assert_eq!(outcome.not_found_reason(), Some(NotFoundReason::Unreachable));
    }
}

#[test]
fn heuristic_fixture_modes() {
    let network = load_network(&fixtures_dir().join("triangle")).expect("fixture loads");

    let astar = search(&network, &SearchRequest::astar("A", "C")).expect("search runs");
    assert_eq!(astar.path(), ["A", "B", "C"]);
    assert_eq!(astar.total_distance(), Some(15.0));

    // The direct candidate ends on C itself, whose estimate is zero.
    let greedy = search(&network, &SearchRequest::greedy("A", "C")).expect("search runs");
    assert_eq!(greedy.path(), ["A", "C"]);
    assert_eq!(greedy.total_distance(), Some(20.0));
    assert_eq!(greedy.expanded, vec!["A"]);
}

#[test]
fn missing_coordinate_is_a_hard_failure() {
    let mut network = triangle();
    network.add_edge("C", "D", 1.0);

    let err = search(&network, &SearchRequest::astar("A", "D")).unwrap_err();
    assert!(err.to_string().contains("unknown location: D"), "{err}");

    // Uniform never consults the heuristic.
    let outcome = search(&network, &SearchRequest::uniform("A", "D")).expect("search runs");
    assert_eq!(outcome.path(), ["A", "B", "C", "D"]);
    assert_eq!(outcome.total_distance(), Some(16.0));
}

#[test]
fn outcome_records_request() {
    let network = triangle();
    let outcome = search(&network, &SearchRequest::greedy("A", "C")).expect("search runs");
    assert_eq!(outcome.mode, SearchMode::Greedy);
    assert_eq!(outcome.source, "A");
    assert_eq!(outcome.destination, "C");
}

#[test]
fn network_is_shared_across_threads() {
    let network = std::sync::Arc::new(triangle());
    let handles: Vec<_> = SearchMode::ALL
        .into_iter()
        .map(|mode| {
            let network = std::sync::Arc::clone(&network);
            std::thread::spawn(move || {
                search(&network, &SearchRequest::new(mode, "A", "C"))
                    .expect("search runs")
                    .is_found()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread completes"));
    }
}
