// tests/cycles.rs
//
// Cycles are legal and are never detected: a walk over a reachable cycle
// does not finish on its own. These tests stop such walks from the outside.

use std::time::Duration;

use tokio::time::timeout;

use graphwalk::errors::GraphwalkError;
use graphwalk::walk::{TokioTimer, WalkOptions, Walker};
use graphwalk_test_utils::{init_tracing, GraphBuilder, ManualTimer, RecordingSink};

#[tokio::test]
async fn zero_weight_self_loop_keeps_announcing() {
    init_tracing();

    let graph = GraphBuilder::new()
        .root("A", &[("B", 0.0)])
        .node("B", &[("B", 0.0)])
        .build();

    let mut walker = Walker::new(
        ManualTimer::new(),
        RecordingSink::failing_after(1000),
        WalkOptions::default(),
    );

    // The walk only ends because the sink gives up.
    let result = walker.walk(&graph).await;
    assert!(matches!(result, Err(GraphwalkError::Other(_))), "{result:?}");

    let (timer, sink) = walker.into_parts();
    assert_eq!(sink.announced().len(), 1000);
    assert!(sink.nodes()[1..].iter().all(|n| *n == "B"));
    assert_eq!(timer.elapsed(), Duration::ZERO);
    assert_eq!(timer.sleeps(), 0);
}

#[tokio::test]
async fn zero_weight_two_node_cycle_alternates() {
    init_tracing();

    let graph = GraphBuilder::new()
        .root("A", &[("B", 0.0)])
        .node("B", &[("C", 0.0)])
        .node("C", &[("B", 0.0)])
        .build();

    let mut walker = Walker::new(
        ManualTimer::new(),
        RecordingSink::failing_after(101),
        WalkOptions::default(),
    );

    assert!(walker.walk(&graph).await.is_err());

    let nodes = walker.sink().nodes();
    assert_eq!(nodes.len(), 101);
    for pair in nodes[1..].chunks(2) {
        assert_eq!(pair, ["B", "C"]);
    }
}

#[tokio::test(start_paused = true)]
async fn positive_weight_cycle_runs_until_stopped() {
    init_tracing();

    let graph = GraphBuilder::new()
        .root("A", &[("B", 1.0)])
        .node("B", &[("C", 1.0)])
        .node("C", &[("B", 1.0)])
        .build();

    let mut walker = Walker::new(TokioTimer, RecordingSink::new(), WalkOptions::default());

    let outcome = timeout(Duration::from_secs(60), walker.walk(&graph)).await;
    assert!(outcome.is_err(), "walk over a cycle should not finish");

    // One visit per second of virtual time.
    let visits = walker.sink().announced().len();
    assert!((55..=62).contains(&visits), "{visits} visits in 60s");
}
