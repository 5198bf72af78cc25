// tests/property_walk.rs

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use proptest::prelude::*;

use graphwalk::graph::Graph;
use graphwalk::walk::{WalkOptions, Walker};
use graphwalk_test_utils::{block_on, GraphBuilder, ManualTimer, RecordingSink};

/// Edges as `(from, to, weight_secs)`.
type EdgeList = Vec<(usize, usize, u64)>;

// Strategy to generate a random DAG rooted at node 0.
// We ensure acyclicity by only allowing node i to point at nodes i+1..N.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, EdgeList)> {
    (2..=max_nodes).prop_flat_map(|num_nodes| {
        let edges_strat = proptest::collection::vec(
            (any::<usize>(), any::<usize>(), 0..4u64),
            0..(num_nodes * 2),
        );

        edges_strat.prop_map(move |raw_edges| {
            let mut seen = HashSet::new();
            let mut edges = Vec::new();
            for (a, b, w) in raw_edges {
                // Sanitize: from < to, no duplicate (from, to) pairs.
                let from = a % (num_nodes - 1);
                let to = from + 1 + b % (num_nodes - 1 - from);
                if seen.insert((from, to)) {
                    edges.push((from, to, w));
                }
            }
            (num_nodes, edges)
        })
    })
}

fn name(i: usize) -> String {
    format!("n{i}")
}

fn build_graph(num_nodes: usize, edges: &EdgeList) -> Graph {
    let mut builder = GraphBuilder::new();
    for i in 0..num_nodes {
        let names: Vec<String> = edges
            .iter()
            .filter(|(from, _, _)| *from == i)
            .map(|(_, to, _)| name(*to))
            .collect();
        let out: Vec<(&str, f64)> = edges
            .iter()
            .filter(|(from, _, _)| *from == i)
            .zip(names.iter())
            .map(|((_, _, w), n)| (n.as_str(), *w as f64))
            .collect();

        builder = if i == 0 {
            builder.root(&name(i), &out)
        } else {
            builder.node(&name(i), &out)
        };
    }
    builder.build()
}

/// Arrival times for every node: one entry per path from the root.
fn expected_arrivals(edges: &EdgeList) -> BTreeMap<String, Vec<Duration>> {
    let mut arrivals: BTreeMap<String, Vec<Duration>> = BTreeMap::new();
    let mut stack = vec![(0usize, 0u64)];

    while let Some((node, at)) = stack.pop() {
        arrivals
            .entry(name(node))
            .or_default()
            .push(Duration::from_secs(at));
        for (from, to, w) in edges {
            if *from == node {
                stack.push((*to, at + w));
            }
        }
    }

    for times in arrivals.values_mut() {
        times.sort();
    }
    arrivals
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_path_produces_exactly_one_visit_at_its_length(
        (num_nodes, edges) in dag_strategy(8)
    ) {
        let graph = build_graph(num_nodes, &edges);
        let mut walker = Walker::new(ManualTimer::new(), RecordingSink::new(), WalkOptions::default());

        let summary = block_on(walker.walk(&graph)).unwrap();
        let sink = walker.sink();

        let mut actual: BTreeMap<String, Vec<Duration>> = BTreeMap::new();
        for (node, at) in sink.announced() {
            actual.entry(node.clone()).or_default().push(*at);
        }
        for times in actual.values_mut() {
            times.sort();
        }

        let expected = expected_arrivals(&edges);
        prop_assert_eq!(summary.visits as usize, sink.announced().len());
        prop_assert_eq!(&actual, &expected);

        let latest = expected.values().flatten().max().copied().unwrap_or_default();
        prop_assert_eq!(summary.elapsed, latest);
    }

    #[test]
    fn announcements_never_go_back_in_time(
        (num_nodes, edges) in dag_strategy(8)
    ) {
        let graph = build_graph(num_nodes, &edges);
        let mut walker = Walker::new(ManualTimer::new(), RecordingSink::new(), WalkOptions::default());

        block_on(walker.walk(&graph)).unwrap();

        let times: Vec<Duration> = walker.sink().announced().iter().map(|(_, t)| *t).collect();
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]), "{:?}", times);
    }
}
