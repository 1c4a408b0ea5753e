//! Property checks: any flow the solver returns satisfies F0-F3, and the
//! solver finds a flow exactly when an exhaustive search does.

use std::collections::BTreeSet;

use proptest::prelude::*;
use qf_core::{NodeId, NodeSet};
use qf_flow::{FlowError, OpenGraph, check_flow};
use qf_graph::GraphBuilder;

#[derive(Debug, Clone)]
struct Case {
    n: usize,
    edges: Vec<(usize, usize)>,
    inputs: Vec<usize>,
    outputs: Vec<usize>,
}

/// Small connected graphs: a random spanning tree plus random chords.
fn connected_case() -> impl Strategy<Value = Case> {
    (2usize..=7)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(any::<usize>(), n - 1),
                prop::collection::vec(any::<bool>(), n * (n - 1) / 2),
                any::<u8>(),
                1u8..=u8::MAX,
            )
        })
        .prop_map(|(n, parents, chords, imask, omask)| {
            let mut edges = BTreeSet::new();
            for (k, raw) in parents.iter().enumerate() {
                let child = k + 1;
                edges.insert((raw % child, child));
            }
            let mut bit = 0;
            for a in 0..n {
                for b in (a + 1)..n {
                    if chords[bit] {
                        edges.insert((a, b));
                    }
                    bit += 1;
                }
            }
            let pick = |mask: u8| (0..n).filter(|i| mask & (1 << i) != 0).collect();
            Case {
                n,
                edges: edges.into_iter().collect(),
                inputs: pick(imask),
                outputs: pick(omask),
            }
        })
}

fn build(case: &Case) -> Result<OpenGraph, FlowError> {
    let mut builder = GraphBuilder::new();
    let ids = builder.add_nodes((0..case.n).map(|i| i.to_string()));
    for &(a, b) in &case.edges {
        builder.add_edge(ids[a], ids[b]);
    }
    let graph = builder.build()?;
    let set = |xs: &[usize]| -> NodeSet { xs.iter().map(|&i| ids[i]).collect() };
    OpenGraph::new(graph, set(&case.inputs), set(&case.outputs))
}

/// Exhaustive search over every map f from non-outputs to adjacent
/// non-inputs, accepting the first whose induced order is acyclic: i before
/// f(i), and i before every other neighbor of f(i).
fn flow_exists(case: &Case) -> bool {
    let mut adj = vec![0u16; case.n];
    for &(a, b) in &case.edges {
        adj[a] |= 1 << b;
        adj[b] |= 1 << a;
    }
    let domain: Vec<usize> = (0..case.n).filter(|i| !case.outputs.contains(i)).collect();
    let mut f = vec![0; domain.len()];
    search(case, &adj, &domain, 0, 0, &mut f)
}

fn search(
    case: &Case,
    adj: &[u16],
    domain: &[usize],
    at: usize,
    used: u16,
    f: &mut [usize],
) -> bool {
    let Some(&i) = domain.get(at) else {
        return acyclic(case.n, adj, domain, f);
    };
    for t in 0..case.n {
        // A shared target would put its two sources before each other.
        if adj[i] & (1 << t) == 0 || used & (1 << t) != 0 || case.inputs.contains(&t) {
            continue;
        }
        f[at] = t;
        if search(case, adj, domain, at + 1, used | (1 << t), f) {
            return true;
        }
    }
    false
}

fn acyclic(n: usize, adj: &[u16], domain: &[usize], f: &[usize]) -> bool {
    let mut after = vec![0u16; n];
    for (&i, &t) in domain.iter().zip(f) {
        after[i] |= (adj[t] | (1 << t)) & !(1 << i);
    }
    // Repeatedly drop nodes with no remaining predecessor.
    let mut left: u16 = (1 << n) - 1;
    while left != 0 {
        let Some(free) = (0..n).find(|&v| {
            left & (1 << v) != 0 && (0..n).all(|u| left & (1 << u) == 0 || after[u] & (1 << v) == 0)
        }) else {
            return false;
        };
        left &= !(1 << free);
    }
    true
}

proptest! {
    #[test]
    fn found_flows_satisfy_conditions(case in connected_case()) {
        match build(&case) {
            Ok(og) => {
                let g = og.graph();
                prop_assert!(check_flow(g, og.inputs(), og.outputs(), og.flow()).is_ok());

                for i in og.non_outputs() {
                    let fi = og.flow_target(i).expect("non-output has a target");
                    let ci = og.class_of(i).unwrap();
                    prop_assert!(g.has_edge(i, fi));
                    prop_assert!(ci < og.class_of(fi).unwrap());
                    for &j in g.neighbors(fi) {
                        prop_assert!(j == i || og.class_of(j).unwrap() >= ci);
                    }
                    prop_assert!(!og.inputs().contains(&fi));
                }

                let listed: usize = og.classes().iter().map(|c| c.len()).sum();
                prop_assert_eq!(listed, g.node_count());
                prop_assert_eq!(og.classes().last().unwrap(), og.outputs());
                prop_assert!(flow_exists(&case));
            }
            Err(FlowError::NotFound { covered, total }) => {
                prop_assert!(covered < total);
                prop_assert!(!flow_exists(&case), "solver missed a flow");
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn solver_is_deterministic(case in connected_case()) {
        let first = build(&case);
        let second = build(&case);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.flow(), b.flow());
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "solver disagreed with itself"),
        }
    }

    #[test]
    fn all_outputs_gives_trivial_flow(case in connected_case()) {
        let all: Vec<usize> = (0..case.n).collect();
        let case = Case { outputs: all.clone(), inputs: all, ..case };
        let og = build(&case).unwrap();
        prop_assert!(og.flow().is_trivial());
        prop_assert_eq!(og.classes().len(), 1);
    }
}

#[test]
fn unknown_output_id_is_invalid() {
    let graph = GraphBuilder::from_labeled_edges([(0, 1)]).unwrap();
    let inputs: NodeSet = [graph.node_by_name("0").unwrap()].into();
    let outputs: NodeSet = [NodeId::from_index(5)].into();
    let err = OpenGraph::new(graph, inputs, outputs).unwrap_err();
    assert!(matches!(err, FlowError::InvalidOpenGraph { .. }));
}
