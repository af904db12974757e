//! Element store and adjacency maintenance tests.

use stratagraph::graph::{Graph, GraphBuilder, Store};
use stratagraph::types::{EdgeId, ErrorKind, GraphError, VertexId};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Store Tests ====================

#[test]
fn test_store_ids_start_at_zero_and_increase() {
    let mut store: Store<VertexId, &str> = Store::new();
    let a = store.insert_with(|_| "a");
    let b = store.insert_with(|_| "b");
    let c = store.insert_with(|_| "c");
    assert_eq!((a, b, c), (VertexId(0), VertexId(1), VertexId(2)));
    assert_eq!(store.len(), 3);
    assert_eq!(store.next_id(), 3);
}

#[test]
fn test_store_never_reuses_ids() {
    let mut store: Store<EdgeId, u32> = Store::new();
    for i in 0..3 {
        store.insert_with(|_| i);
    }
    assert_eq!(store.remove(EdgeId(2)), Some(2));
    assert_eq!(store.remove(EdgeId(2)), None);
    let next = store.insert_with(|_| 99);
    assert_eq!(next, EdgeId(3));
    assert!(!store.contains(EdgeId(2)));
}

#[test]
fn test_store_iterates_in_ascending_id_order() {
    let mut store: Store<VertexId, char> = Store::new();
    for c in ['x', 'y', 'z', 'w'] {
        store.insert_with(|_| c);
    }
    store.remove(VertexId(1));
    let ids: Vec<VertexId> = store.ids().collect();
    assert_eq!(ids, vec![VertexId(0), VertexId(2), VertexId(3)]);
    let values: Vec<char> = store.values().copied().collect();
    assert_eq!(values, vec!['x', 'z', 'w']);
}

#[test]
fn test_store_pair_mut() {
    let mut store: Store<VertexId, u32> = Store::new();
    for i in 0..4 {
        store.insert_with(|_| i * 10);
    }
    store.remove(VertexId(1));

    let (high, low) = store.get_pair_mut(VertexId(3), VertexId(0)).unwrap();
    assert_eq!((*high, *low), (30, 0));
    std::mem::swap(high, low);
    assert_eq!(store.get(VertexId(0)), Some(&30));

    assert!(store.get_pair_mut(VertexId(2), VertexId(2)).is_none());
    assert!(store.get_pair_mut(VertexId(0), VertexId(1)).is_none());
}

// ==================== Vertex Tests ====================

#[test]
fn test_vertex_ids_after_removal() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v0 = g.add_vertex(10);
    g.add_vertex(11);
    g.add_vertex(12);
    g.remove_vertex(v0).unwrap();
    let v3 = g.add_vertex(13);
    assert_eq!(v3, VertexId(3));
    assert_eq!(g.vertex_count(), 3);
    assert!(!g.has_vertex(v0));
}

#[test]
fn test_vertex_lookup_missing() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v = g.add_vertex(1);
    assert_eq!(*g.vertex(v).unwrap().payload(), 1);

    match g.vertex(VertexId(7)).unwrap_err() {
        GraphError::VertexNotFound(id) => assert_eq!(id, VertexId(7)),
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }

    g.remove_vertex(v).unwrap();
    assert_eq!(g.vertex(v).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_remove_vertex_twice_is_invalid_handle() {
    let mut g: Graph<i32, i32> = Graph::new();
    let v = g.add_vertex(1);
    assert_eq!(g.remove_vertex(v).unwrap(), 1);
    match g.remove_vertex(v).unwrap_err() {
        GraphError::InvalidVertexHandle(id) => assert_eq!(id, v),
        e => panic!("Expected InvalidVertexHandle error, got {:?}", e),
    }
}

#[test]
fn test_remove_vertex_with_neighbors_fails() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let b = g.add_vertex(2);
    let e = g.add_edge(a, b, 5).unwrap();

    match g.remove_vertex(a).unwrap_err() {
        GraphError::NotEmpty { vertex, neighbors } => {
            assert_eq!(vertex, a);
            assert_eq!(neighbors, 1);
        }
        e => panic!("Expected NotEmpty error, got {:?}", e),
    }
    // nothing changed
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);

    g.remove_edge(e).unwrap();
    assert_eq!(g.remove_vertex(a).unwrap(), 1);
    assert_eq!(g.remove_vertex(b).unwrap(), 2);
    assert_eq!(g.vertex_count(), 0);
}

#[test]
fn test_vertex_payload_mut() {
    let mut g: Graph<String, ()> = Graph::new();
    let v = g.add_vertex("router".to_string());
    g.vertex_payload_mut(v).unwrap().push_str("-1");
    assert_eq!(g.vertex(v).unwrap().payload(), "router-1");
}

// ==================== Edge Tests ====================

#[test]
fn test_edge_endpoints_and_adjacency() {
    init_logger();
    let mut g: Graph<&str, u32> = Graph::new();
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let e = g.add_edge(a, b, 7).unwrap();

    let edge = g.edge(e).unwrap();
    assert_eq!(edge.from(), a);
    assert_eq!(edge.to(), b);
    assert_eq!(*edge.payload(), 7);

    assert_eq!(g.neighbors(a).unwrap(), &[b]);
    assert_eq!(g.neighbors(b).unwrap(), &[a]);

    // every edge is both in and out on both endpoints
    for v in [a, b] {
        let vertex = g.vertex(v).unwrap();
        assert_eq!(vertex.in_edges(), &[e]);
        assert_eq!(vertex.out_edges(), &[e]);
    }

    assert_eq!(g.between(a, b).unwrap(), e);
    assert_eq!(g.between(b, a).unwrap(), e);
}

#[test]
fn test_add_edge_unknown_endpoint_changes_nothing() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let result = g.add_edge(a, VertexId(42), 0);
    match result.unwrap_err() {
        GraphError::VertexNotFound(id) => assert_eq!(id, VertexId(42)),
        e => panic!("Expected VertexNotFound error, got {:?}", e),
    }
    assert_eq!(g.edge_count(), 0);
    assert!(!g.vertex(a).unwrap().has_neighbors());

    // the failed add did not consume an id
    let b = g.add_vertex(2);
    assert_eq!(g.add_edge(a, b, 0).unwrap(), EdgeId(0));
}

#[test]
fn test_remove_edge_restores_adjacency() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let b = g.add_vertex(2);
    let c = g.add_vertex(3);
    let ab = g.add_edge(a, b, 0).unwrap();
    let ac = g.add_edge(a, c, 0).unwrap();

    assert_eq!(g.remove_edge(ab).unwrap(), 0);
    assert_eq!(g.neighbors(a).unwrap(), &[c]);
    assert!(g.neighbors(b).unwrap().is_empty());
    assert_eq!(g.vertex(a).unwrap().out_edges(), &[ac]);
    assert!(g.vertex(b).unwrap().in_edges().is_empty());

    match g.remove_edge(ab).unwrap_err() {
        GraphError::InvalidEdgeHandle(id) => assert_eq!(id, ab),
        e => panic!("Expected InvalidEdgeHandle error, got {:?}", e),
    }
}

#[test]
fn test_parallel_edges_duplicate_neighbors() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let b = g.add_vertex(2);
    let first = g.add_edge(a, b, 1).unwrap();
    let second = g.add_edge(b, a, 2).unwrap();

    assert_eq!(g.neighbors(a).unwrap(), &[b, b]);
    assert_eq!(g.between(a, b).unwrap(), first);
    assert_eq!(g.edges_between(b, a), vec![first, second]);

    g.remove_edge(first).unwrap();
    assert_eq!(g.neighbors(a).unwrap(), &[b]);
    assert_eq!(g.between(a, b).unwrap(), second);
}

#[test]
fn test_self_loop_adjacency() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let e = g.add_edge(a, a, 0).unwrap();

    let vertex = g.vertex(a).unwrap();
    assert_eq!(vertex.neighbors(), &[a, a]);
    assert_eq!(vertex.out_edges(), &[e, e]);
    assert!(g.edge(e).unwrap().is_self_loop());
    assert_eq!(g.between(a, a).unwrap(), e);

    g.remove_edge(e).unwrap();
    assert!(!g.vertex(a).unwrap().has_neighbors());
    assert!(g.vertex(a).unwrap().in_edges().is_empty());
}

#[test]
fn test_between_missing() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let b = g.add_vertex(2);
    match g.between(a, b).unwrap_err() {
        GraphError::NoEdgeBetween(x, y) => assert_eq!((x, y), (a, b)),
        e => panic!("Expected NoEdgeBetween error, got {:?}", e),
    }
    assert_eq!(g.between(a, b).unwrap_err().kind(), ErrorKind::NotFound);
}

// ==================== Cascading Removal Tests ====================

#[test]
fn test_remove_vertex_with_edges() {
    init_logger();
    let mut g: Graph<i32, i32> = Graph::new();
    let hub = g.add_vertex(0);
    let leaves: Vec<VertexId> = (1..=3).map(|i| g.add_vertex(i)).collect();
    for &leaf in &leaves {
        g.add_edge(hub, leaf, 0).unwrap();
    }
    let kept = g.add_edge(leaves[0], leaves[1], 9).unwrap();

    assert_eq!(g.remove_vertex_with_edges(hub).unwrap(), 0);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(kept));
    assert_eq!(g.neighbors(leaves[0]).unwrap(), &[leaves[1]]);
    assert!(g.neighbors(leaves[2]).unwrap().is_empty());
}

#[test]
fn test_remove_vertex_with_parallel_edges_and_self_loop() {
    let mut g: Graph<i32, i32> = Graph::new();
    let a = g.add_vertex(1);
    let b = g.add_vertex(2);
    g.add_edge(a, b, 0).unwrap();
    g.add_edge(a, b, 0).unwrap();
    g.add_edge(b, a, 0).unwrap();
    g.add_edge(a, a, 0).unwrap();
    let other = g.add_edge(b, b, 0).unwrap();

    g.remove_vertex_with_edges(a).unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex_count(), 1);
    assert!(g.has_edge(other));
    assert_eq!(g.neighbors(b).unwrap(), &[b, b]);
}

#[test]
fn test_remove_vertex_with_edges_unknown() {
    let mut g: Graph<i32, i32> = Graph::new();
    assert_eq!(
        g.remove_vertex_with_edges(VertexId(0)).unwrap_err().kind(),
        ErrorKind::InvalidHandle
    );
}

// ==================== Builder & Dump Tests ====================

#[test]
fn test_builder_predicts_ids() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_vertex("a");
    let b = builder.add_vertex("b");
    builder.link(a, b, 1.5).link(b, a, 2.5);
    let g = builder.build().unwrap();

    assert_eq!(g.vertex(a).unwrap().payload(), &"a");
    assert_eq!(g.edges_between(a, b).len(), 2);
}

#[test]
fn test_builder_rejects_unknown_vertex() {
    let mut builder: GraphBuilder<&str, f64> = GraphBuilder::new();
    let a = builder.add_vertex("a");
    builder.link(a, VertexId(5), 1.0);
    assert!(builder.build().is_err());
}

#[test]
fn test_display_adjacency_listing() {
    let mut g: Graph<&str, ()> = Graph::new();
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    g.add_vertex("d");
    g.add_edge(a, b, ()).unwrap();
    g.add_edge(a, c, ()).unwrap();

    let dump = g.to_string();
    let expected = "Graph(n=4, m=2)\n a -> [ b, c ]\n b -> [ a ]\n c -> [ a ]\n d -> [ ]\n";
    assert_eq!(dump, expected);
}
