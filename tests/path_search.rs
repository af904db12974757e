//! Constrained breadth-first path search tests.

use stratagraph::graph::{find_path, find_path_by, Graph};
use stratagraph::types::{EdgeId, ErrorKind, GraphError, VertexId};

/// v1..v4 (ids 0-3); e1 = (v1, v2, 1), e2 = (v2, v3, 2), e3 = (v3, v1, 2). v4 isolated.
fn triangle() -> (Graph<&'static str, u32>, [VertexId; 4], [EdgeId; 3]) {
    let mut g = Graph::new();
    let v1 = g.add_vertex("v1");
    let v2 = g.add_vertex("v2");
    let v3 = g.add_vertex("v3");
    let v4 = g.add_vertex("v4");
    let e1 = g.add_edge(v1, v2, 1).unwrap();
    let e2 = g.add_edge(v2, v3, 2).unwrap();
    let e3 = g.add_edge(v3, v1, 2).unwrap();
    (g, [v1, v2, v3, v4], [e1, e2, e3])
}

#[test]
fn test_direct_edge() {
    let (g, [v1, v2, ..], [e1, ..]) = triangle();
    assert_eq!(v1, VertexId(0));
    assert_eq!(find_path(&g, v1, v2).unwrap(), vec![e1]);
}

#[test]
fn test_isolated_target() {
    let (g, [v1, _, _, v4], _) = triangle();
    match find_path(&g, v1, v4).unwrap_err() {
        GraphError::NoPathFound { start, target } => {
            assert_eq!(start, v1);
            assert_eq!(target, v4);
        }
        e => panic!("Expected NoPathFound error, got {:?}", e),
    }
}

#[test]
fn test_predicate_forces_detour() {
    let (g, [v1, v2, ..], [_, e2, e3]) = triangle();
    let path = find_path_by(&g, v1, v2, |w| *w >= 2).unwrap();
    assert_eq!(path, vec![e3, e2]);

    // creation direction is kept: e3 was added as (v3, v1)
    let first = g.edge(path[0]).unwrap();
    assert_eq!((first.from(), first.to()), (VertexId(2), v1));
}

#[test]
fn test_predicate_rejects_everything() {
    let (g, [v1, _, v3, _], _) = triangle();
    let err = g.find_path_by(v1, v3, |w| *w >= 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoPathFound);
}

#[test]
fn test_source_equals_target() {
    let (g, [v1, ..], _) = triangle();
    assert!(g.find_path(v1, v1).unwrap().is_empty());
}

#[test]
fn test_unknown_endpoints() {
    let (g, [v1, ..], _) = triangle();
    match g.find_path(v1, VertexId(99)).unwrap_err() {
        GraphError::VertexNotFound(id) => assert_eq!(id, VertexId(99)),
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }
    assert!(g.find_path(VertexId(99), v1).is_err());
}

#[test]
fn test_path_is_ordered_source_to_target() {
    // chain a - b - c - d built with mixed directions
    let mut g: Graph<char, ()> = Graph::new();
    let a = g.add_vertex('a');
    let b = g.add_vertex('b');
    let c = g.add_vertex('c');
    let d = g.add_vertex('d');
    let ab = g.add_edge(a, b, ()).unwrap();
    let cb = g.add_edge(c, b, ()).unwrap();
    let cd = g.add_edge(c, d, ()).unwrap();

    assert_eq!(g.find_path(a, d).unwrap(), vec![ab, cb, cd]);
    assert_eq!(g.find_path(d, a).unwrap(), vec![cd, cb, ab]);
}

#[test]
fn test_fewest_hops_wins() {
    // long way: s - x - y - t, short way: s - t added last
    let mut g: Graph<u8, ()> = Graph::new();
    let s = g.add_vertex(0);
    let x = g.add_vertex(1);
    let y = g.add_vertex(2);
    let t = g.add_vertex(3);
    g.add_edge(s, x, ()).unwrap();
    g.add_edge(x, y, ()).unwrap();
    g.add_edge(y, t, ()).unwrap();
    let direct = g.add_edge(t, s, ()).unwrap();

    assert_eq!(g.find_path(s, t).unwrap(), vec![direct]);
}

#[test]
fn test_ties_follow_insertion_order() {
    // two 2-hop routes s - a - t and s - b - t; the one via the earlier edge wins
    let mut g: Graph<u8, ()> = Graph::new();
    let s = g.add_vertex(0);
    let a = g.add_vertex(1);
    let b = g.add_vertex(2);
    let t = g.add_vertex(3);
    let sb = g.add_edge(s, b, ()).unwrap();
    let sa = g.add_edge(s, a, ()).unwrap();
    let at = g.add_edge(a, t, ()).unwrap();
    let bt = g.add_edge(b, t, ()).unwrap();

    assert_eq!(g.find_path(s, t).unwrap(), vec![sb, bt]);
    g.remove_edge(sb).unwrap();
    assert_eq!(g.find_path(s, t).unwrap(), vec![sa, at]);
}

#[test]
fn test_parallel_edges_prefer_admissible_one() {
    let mut g: Graph<u8, u32> = Graph::new();
    let a = g.add_vertex(0);
    let b = g.add_vertex(1);
    g.add_edge(a, b, 1).unwrap();
    let wide = g.add_edge(b, a, 100).unwrap();

    assert_eq!(g.find_path_by(a, b, |capacity| *capacity >= 50).unwrap(), vec![wide]);
}

#[test]
fn test_path_after_removal() {
    let (mut g, [v1, v2, v3, _], [e1, e2, e3]) = triangle();
    g.remove_edge(e1).unwrap();
    assert_eq!(g.find_path(v1, v2).unwrap(), vec![e3, e2]);
    g.remove_vertex_with_edges(v3).unwrap();
    assert_eq!(g.find_path(v1, v2).unwrap_err().kind(), ErrorKind::NoPathFound);
}
