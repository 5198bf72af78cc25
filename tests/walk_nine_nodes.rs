// tests/walk_nine_nodes.rs

use std::path::PathBuf;
use std::time::Duration;

use graphwalk::graph::load_graph;
use graphwalk::walk::{TokioTimer, WalkOptions, Walker};
use graphwalk_test_utils::{init_tracing, ManualTimer, RecordingSink};

fn nine_nodes() -> graphwalk::graph::Graph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/nine-nodes.json");
    load_graph(path).unwrap()
}

/// Nodes announced at positions `range`, sorted, all stamped `second`.
fn group_at(lines: &[(String, String)], range: std::ops::Range<usize>, second: u32) -> Vec<String> {
    let prefix = format!("[16:00:{second:02}.");
    let mut nodes: Vec<String> = lines[range]
        .iter()
        .map(|(ts, node)| {
            assert!(ts.starts_with(&prefix), "{node} stamped {ts}, expected {prefix}");
            node.clone()
        })
        .collect();
    nodes.sort();
    nodes
}

fn assert_nine_node_schedule(lines: &[(String, String)]) {
    assert_eq!(lines.len(), 18);

    assert_eq!(lines[0], ("[16:00:00.000]".to_string(), "A".to_string()));
    assert_eq!(group_at(lines, 1..2, 1), ["G"]);
    assert_eq!(group_at(lines, 2..3, 2), ["B"]);
    assert_eq!(group_at(lines, 3..6, 6), ["D", "E", "F"]);
    assert_eq!(group_at(lines, 6..7, 7), ["C"]);
    assert_eq!(group_at(lines, 7..10, 8), ["C", "G", "H"]);
    assert_eq!(group_at(lines, 10..11, 9), ["H"]);
    assert_eq!(group_at(lines, 11..12, 10), ["F"]);
    assert_eq!(group_at(lines, 12..14, 11), ["F", "I"]);
    assert_eq!(group_at(lines, 14..16, 13), ["F", "H"]);
    assert_eq!(group_at(lines, 16..17, 14), ["H"]);
    assert_eq!(group_at(lines, 17..18, 16), ["H"]);
}

#[tokio::test]
async fn nine_node_graph_with_manual_clock() {
    init_tracing();

    let graph = nine_nodes();
    let mut walker = Walker::new(ManualTimer::new(), RecordingSink::new(), WalkOptions::default());

    let summary = walker.walk(&graph).await.unwrap();

    assert_eq!(summary.visits, 18);
    assert_eq!(summary.elapsed, Duration::from_secs(16));
    assert_nine_node_schedule(&walker.sink().lines());
}

#[tokio::test(start_paused = true)]
async fn nine_node_graph_with_paused_tokio_clock() {
    init_tracing();

    let graph = nine_nodes();
    let mut walker = Walker::new(TokioTimer, RecordingSink::new(), WalkOptions::default());

    let started = tokio::time::Instant::now();
    let summary = walker.walk(&graph).await.unwrap();
    let took = started.elapsed();

    assert_eq!(summary.visits, 18);
    assert!(
        took >= Duration::from_secs(16) && took < Duration::from_secs(17),
        "walk took {took:?}"
    );
    assert_nine_node_schedule(&walker.sink().lines());
}

#[tokio::test]
async fn every_announcement_is_stamped_in_non_decreasing_order() {
    init_tracing();

    let graph = nine_nodes();
    let mut walker = Walker::new(ManualTimer::new(), RecordingSink::new(), WalkOptions::default());
    walker.walk(&graph).await.unwrap();

    let times: Vec<Duration> = walker.sink().announced().iter().map(|(_, t)| *t).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]), "{times:?}");
}
