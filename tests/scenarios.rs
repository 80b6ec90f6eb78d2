//! End-to-end scenarios: build or load a graph, mutate it, and check both
//! analyses against each other.

use allocgraph::prelude::*;
use std::path::PathBuf;

fn load_sample(name: &str) -> AllocationGraph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/samples")
        .join(name);
    let json = std::fs::read_to_string(&path).unwrap();
    AllocationGraph::from_json(&json, &Limits::default()).unwrap()
}

#[test]
fn classic_deadlock_sample_matches_preset() {
    let graph = load_sample("classic_deadlock.json");
    assert_eq!(
        graph.to_document(),
        AllocationGraph::classic_deadlock().to_document()
    );
}

#[test]
fn scenario_classic_deadlock() {
    let graph = AllocationGraph::classic_deadlock();

    let deadlock = detect_deadlock(&graph);
    assert_eq!(deadlock.nodes, vec!["P1", "P2"]);
    let mut edges = deadlock.edges.clone();
    edges.sort();
    assert_eq!(edges, vec!["e1", "e2", "e3", "e4"]);

    let safety = evaluate_safety(&graph);
    assert!(!safety.is_safe());
    assert_eq!(safety.sequence(), None);
}

#[test]
fn scenario_request_withdrawn() {
    let mut graph = AllocationGraph::classic_deadlock();
    graph.remove_edge("e4").unwrap();

    assert!(detect_deadlock(&graph).is_empty());
    let safety = evaluate_safety(&graph);
    let sequence = safety.sequence().unwrap();
    assert_eq!(sequence.len(), 2);
    assert!(sequence.iter().any(|p| p == "P1"));
    assert!(sequence.iter().any(|p| p == "P2"));
}

#[test]
fn scenario_shared_resource() {
    let mut graph = AllocationGraph::new();
    let p1 = graph.add_process();
    let p2 = graph.add_process();
    let r1 = graph.add_resource(2);
    graph.add_edge(&r1, &p1, EdgeKind::Allocation).unwrap();
    graph.add_edge(&r1, &p2, EdgeKind::Allocation).unwrap();

    assert_eq!(availability(&graph).get(&r1), 0);
    assert!(detect_deadlock(&graph).is_empty());
    assert!(evaluate_safety(&graph).is_safe());
}

#[test]
fn wait_for_cycle_with_spare_instances_is_still_safe() {
    let graph = load_sample("print_spooler.json");

    let deadlock = detect_deadlock(&graph);
    assert_eq!(deadlock.nodes, vec!["editor", "backup"]);
    assert_eq!(
        deadlock.edges,
        vec![
            "want-tape-editor",
            "hold-tape-backup",
            "want-disk-backup",
            "hold-disk-editor"
        ]
    );

    // Multi-instance resources: the cycle is necessary but not sufficient.
    let safety = evaluate_safety(&graph);
    assert_eq!(
        safety.sequence(),
        Some(&["spooler".to_string(), "backup".into(), "editor".into()][..])
    );
}

#[test]
fn removing_a_deadlocked_process_clears_it_everywhere() {
    let mut graph = AllocationGraph::classic_deadlock();
    graph.remove_node("P1").unwrap();

    assert!(graph.edges().all(|e| !e.touches("P1")));
    assert!(!detect_deadlock(&graph).contains_node("P1"));
    let safety = evaluate_safety(&graph);
    assert_eq!(safety.sequence(), Some(&["P2".to_string()][..]));
    assert_eq!(allocation_matrix(&graph).row("P1"), None);
}

#[test]
fn safe_sequences_replay() {
    let mut graph = AllocationGraph::new();
    let processes: Vec<String> = (0..5).map(|_| graph.add_process()).collect();
    let resources: Vec<String> = (1..=3).map(|n| graph.add_resource(n)).collect();

    // Each process holds one instance of R(i % 3) and wants one of R((i + 1) % 3).
    for (i, p) in processes.iter().enumerate() {
        let held = &resources[i % 3];
        let wanted = &resources[(i + 1) % 3];
        if availability(&graph).get(held) > 0 {
            graph.add_edge(held, p, EdgeKind::Allocation).unwrap();
        }
        graph.add_edge(p, wanted, EdgeKind::Request).unwrap();
    }

    let report = evaluate_safety(&graph);
    let sequence = report.sequence().unwrap();
    assert_eq!(sequence, &["P2", "P1", "P3", "P4", "P5"]);
    assert!(is_safe_sequence(&graph, sequence));
    // Declaration order is not safe: P1 waits on R2, held by P2 and P5.
    assert!(!is_safe_sequence(&graph, &processes));
}

#[test]
fn analyses_are_idempotent_and_pure() {
    let graph = load_sample("print_spooler.json");
    let before = graph.clone();

    assert_eq!(detect_deadlock(&graph), detect_deadlock(&graph));
    assert_eq!(evaluate_safety(&graph), evaluate_safety(&graph));
    assert_eq!(graph, before);
}

#[test]
fn capacity_edits_feed_the_analyses() {
    let mut graph = AllocationGraph::classic_deadlock();
    assert_eq!(graph.adjust_instances("R1", 1).unwrap(), 2);

    // P2 can now take the spare R1 instance, then release R2 for P1.
    assert!(evaluate_safety(&graph).is_safe());
    // The wait-for graph ignores spare capacity.
    assert!(detect_deadlock(&graph).is_deadlocked());

    assert_eq!(graph.set_instances("R1", -5).unwrap(), 1);
    assert!(!evaluate_safety(&graph).is_safe());
}

#[test]
fn limits_reject_oversized_documents() {
    let json = AllocationGraph::classic_deadlock().to_json().unwrap();
    let err = AllocationGraph::from_json(&json, &Limits::new(4, 2)).unwrap_err();
    assert!(matches!(err, Error::LimitExceeded { what: "edges", count: 4, limit: 2 }));
    assert!(AllocationGraph::from_json(&json, &Limits::unbounded()).is_ok());
}

#[test]
fn graph_snapshots_can_cross_threads() {
    fn assert_snapshot<T: Send + Sync + Clone>() {}
    assert_snapshot::<AllocationGraph>();

    let graph = AllocationGraph::classic_deadlock();
    let snapshot = graph.clone();
    let report = std::thread::spawn(move || detect_deadlock(&snapshot))
        .join()
        .unwrap();
    assert_eq!(report, detect_deadlock(&graph));
}
