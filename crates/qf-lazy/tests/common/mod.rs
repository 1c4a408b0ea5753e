//! Example open graphs shared by the integration tests.
#![allow(dead_code)]

use qf_core::{IoType, NodeId};
use qf_flow::OpenGraph;
use qf_graph::GraphBuilder;
use qf_lazy::LazyScheduler;

pub const IO_TYPES: [(IoType, IoType); 4] = [
    (IoType::Quantum, IoType::Quantum),
    (IoType::Quantum, IoType::Classical),
    (IoType::Classical, IoType::Quantum),
    (IoType::Classical, IoType::Classical),
];

pub fn open(edges: &[(u32, u32)], inputs: &[u32], outputs: &[u32]) -> OpenGraph {
    let graph = GraphBuilder::from_labeled_edges(edges.iter().copied()).unwrap();
    let names = |xs: &[u32]| xs.iter().map(|x| x.to_string()).collect::<Vec<_>>();
    OpenGraph::with_labels(graph, names(inputs), names(outputs)).unwrap()
}

pub fn scheduler(og: OpenGraph) -> LazyScheduler {
    LazyScheduler::new(og)
}

pub fn id(s: &LazyScheduler, label: u32) -> NodeId {
    s.graph().node_by_name(&label.to_string()).unwrap()
}

/// 1 - 2 - 3 - 4 - 5
pub fn path() -> OpenGraph {
    open(&[(1, 2), (2, 3), (3, 4), (4, 5)], &[1], &[5])
}

/// 1 - 3 - 5
///     |
/// 2 - 4 - 6
pub fn h_graph() -> OpenGraph {
    open(&[(1, 3), (3, 5), (2, 4), (4, 6), (3, 4)], &[1, 2], &[5, 6])
}

/// CNOT pattern; node 2 is both input and output.
pub fn cnot() -> OpenGraph {
    open(&[(1, 3), (2, 3), (3, 4)], &[1, 2], &[2, 4])
}

/// From "Determinism in the one-way model".
pub fn kashefi_duncan() -> OpenGraph {
    open(
        &[(2, 3), (2, 5), (3, 4), (1, 5), (3, 6), (5, 6), (5, 7)],
        &[1, 2],
        &[4, 6, 7],
    )
}

/// The blind oracular computation demo graph.
pub fn boqc_demo() -> OpenGraph {
    open(
        &[(1, 5), (2, 3), (3, 4), (3, 6), (5, 6), (5, 7), (2, 5), (4, 7)],
        &[1, 2],
        &[4, 6, 7],
    )
}

/// Brickwork state with `height` rows and `width` columns.
pub fn brickwork(height: u32, width: u32) -> OpenGraph {
    let at = |h: u32, w: u32| h + w * height;
    let mut edges = Vec::new();
    for w in 1..width {
        for h in 0..height {
            edges.push((at(h, w - 1), at(h, w)));
        }
    }
    for w in (2..width).step_by(2) {
        for h in 0..height.saturating_sub(1) {
            let even_rung = matches!(w % 8, 2 | 4) && h % 2 == 0;
            let odd_rung = matches!(w % 8, 6 | 0) && h % 2 == 1;
            if even_rung || odd_rung {
                edges.push((at(h, w), at(h + 1, w)));
            }
        }
    }
    let inputs: Vec<u32> = (0..height).collect();
    let outputs: Vec<u32> = (0..height).map(|h| at(h, width - 1)).collect();
    open(&edges, &inputs, &outputs)
}

/// Three-qubit exact Grover search pattern.
pub fn exact_grover() -> OpenGraph {
    let rows: [&[u32]; 3] = [
        &[
            1, 4, 6, 8, 10, 11, 13, 19, 21, 23, 26, 28, 30, 32, 35, 38, 41, 43, 45, 47, 49, 55, 57,
            59, 62, 64, 66, 68, 75, 77, 79, 81, 87, 89, 92, 94, 96,
        ],
        &[
            2, 5, 7, 9, 15, 17, 20, 22, 24, 27, 29, 31, 33, 36, 39, 42, 44, 46, 51, 53, 56, 58, 60,
            63, 65, 67, 69, 71, 73, 76, 78, 83, 85, 88, 90, 91,
        ],
        &[
            3, 12, 14, 16, 18, 25, 34, 37, 40, 48, 50, 52, 54, 61, 70, 72, 74, 80, 82, 84, 86, 93,
            95, 97,
        ],
    ];
    let mut edges: Vec<(u32, u32)> = rows
        .iter()
        .flat_map(|row| row.windows(2).map(|w| (w[0], w[1])))
        .collect();
    edges.extend([
        (6, 7),
        (19, 20),
        (15, 16),
        (23, 24),
        (32, 33),
        (38, 40),
        (39, 40),
        (44, 43),
        (55, 56),
        (51, 52),
        (59, 60),
        (71, 72),
        (75, 76),
        (79, 80),
        (83, 84),
        (87, 88),
        (92, 93),
    ]);
    open(&edges, &[1, 2, 3], &[96, 91, 97])
}

/// Every example, by name.
pub fn all_examples() -> Vec<(&'static str, OpenGraph)> {
    vec![
        ("path", path()),
        ("h_graph", h_graph()),
        ("cnot", cnot()),
        ("kashefi_duncan", kashefi_duncan()),
        ("boqc_demo", boqc_demo()),
        ("brickwork", brickwork(5, 8)),
        ("exact_grover", exact_grover()),
    ]
}
