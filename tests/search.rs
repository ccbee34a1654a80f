use rand::{rngs::StdRng, Rng, SeedableRng};
use travel_paths::{
    graphs::{vec_graph::VecGraph, Edge, Graph, Vertex},
    search::{
        bfs, brute_force, dijkstra,
        path::total_weight,
        validation::{random_request, validate_path},
    },
};

#[derive(Clone, Debug, PartialEq)]
struct Leg {
    tail: Vertex,
    head: Vertex,
    weight: f64,
}

impl Leg {
    fn new(tail: Vertex, head: Vertex, weight: f64) -> Leg {
        Leg { tail, head, weight }
    }
}

impl Edge for Leg {
    fn source(&self) -> Vertex {
        self.tail
    }

    fn target(&self) -> Vertex {
        self.head
    }
}

fn graph_from(edges: &[(Vertex, Vertex, f64)]) -> VecGraph<Leg> {
    VecGraph::from_edges(
        edges
            .iter()
            .map(|&(tail, head, weight)| Leg::new(tail, head, weight)),
    )
}

fn random_graph(rng: &mut StdRng) -> VecGraph<Leg> {
    let vertices: Vertex = rng.gen_range(2..9);
    let edges = rng.gen_range(0..25);

    let mut graph = VecGraph::new();
    graph.add_vertex(vertices - 1);
    for _ in 0..edges {
        // guarantee that tail != head
        let tail = rng.gen_range(0..vertices);
        let mut head = rng.gen_range(0..vertices - 1);
        if head >= tail {
            head += 1;
        }
        graph.add_edge(tail, Leg::new(tail, head, rng.gen_range(0.0..10.0)));
    }

    graph
}

#[test]
fn path_to_self_is_empty() {
    let graph = graph_from(&[(0, 1, 1.0), (1, 0, 1.0)]);

    assert!(bfs::path(&graph, 0, 0).is_empty());
    assert!(dijkstra::shortest_path(&graph, 0, 0, |leg| leg.weight).is_empty());
}

#[test]
fn single_vertex_without_edges() {
    let mut graph: VecGraph<Leg> = VecGraph::new();
    graph.add_vertex(0);

    assert!(bfs::path(&graph, 0, 0).is_empty());
    assert!(dijkstra::shortest_path(&graph, 0, 0, |leg| leg.weight).is_empty());
}

#[test]
fn unreachable_destination_yields_empty_path() {
    // 2, 3 and 4 live in a component 0 cannot reach.
    let mut graph = graph_from(&[(0, 1, 1.0), (3, 2, 1.0)]);
    graph.add_vertex(4);

    assert!(bfs::path(&graph, 0, 2).is_empty());
    assert!(bfs::path(&graph, 0, 4).is_empty());
    assert!(dijkstra::shortest_path(&graph, 0, 2, |leg| leg.weight).is_empty());
    assert!(dijkstra::shortest_path(&graph, 0, 4, |leg| leg.weight).is_empty());
}

#[test]
fn bfs_returns_fewest_edges() {
    // Four-hop chain 0 -> 1 -> 2 -> 3 -> 4 versus the two-hop 0 -> 5 -> 4.
    let graph = graph_from(&[
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (0, 5, 1.0),
        (5, 4, 1.0),
    ]);

    let path = bfs::path(&graph, 0, 4);

    assert_eq!(path.len(), 2);
    assert_eq!(path.len(), brute_force::minimum_hops(&graph, 0, 4).unwrap());
    validate_path(&graph, 0, 4, &path).unwrap();
}

#[test]
fn dijkstra_prefers_light_detour_over_heavy_direct_edge() {
    let graph = graph_from(&[(0, 2, 10.0), (0, 1, 2.0), (1, 2, 3.0)]);

    let path = dijkstra::shortest_path(&graph, 0, 2, |leg| leg.weight);

    assert_eq!(path.len(), 2);
    assert_eq!(total_weight(&path, |leg| leg.weight), 5.0);
    validate_path(&graph, 0, 2, &path).unwrap();
}

#[test]
fn bfs_matches_brute_force_on_random_graphs() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng);
        let Some((source, target)) = random_request(&graph, &mut rng) else {
            continue;
        };

        let path = bfs::path(&graph, source, target);
        validate_path(&graph, source, target, &path).unwrap();

        match brute_force::minimum_hops(&graph, source, target) {
            Some(hops) => assert_eq!(path.len(), hops, "seed {seed}"),
            None => assert!(path.is_empty(), "seed {seed}"),
        }
    }
}

#[test]
fn dijkstra_matches_brute_force_on_random_graphs() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng);
        let Some((source, target)) = random_request(&graph, &mut rng) else {
            continue;
        };

        let path = dijkstra::shortest_path(&graph, source, target, |leg| leg.weight);
        validate_path(&graph, source, target, &path).unwrap();

        match brute_force::minimum_weight(&graph, source, target, &|leg: &Leg| leg.weight) {
            Some(minimum) => {
                let weight = total_weight(&path, |leg| leg.weight);
                assert!(
                    (weight - minimum).abs() < 1e-9,
                    "seed {seed}: {weight} != {minimum}"
                );
            }
            None => assert!(path.is_empty(), "seed {seed}"),
        }
    }
}

#[test]
fn repeated_queries_return_equal_paths() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng);
    let (source, target) = random_request(&graph, &mut rng).unwrap();

    let first = dijkstra::shortest_path(&graph, source, target, |leg| leg.weight);
    let second = dijkstra::shortest_path(&graph, source, target, |leg| leg.weight);
    assert_eq!(first, second);

    let first = bfs::path(&graph, source, target);
    let second = bfs::path(&graph, source, target);
    assert_eq!(first, second);
}
