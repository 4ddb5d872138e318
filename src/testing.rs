/// Container-invariant suite run for every flavor: random edge editing must
/// keep the outgoing/incoming adjacency mirrored and all counters honest.
macro_rules! test_container_ops {
    ($env:ident, $graph:ty) => {
        mod $env {
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            use crate::prelude::*;

            #[test]
            fn random_edge_editing_keeps_adjacency_mirrored() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5u32, 10, 20] {
                    let mut graph: $graph = Graph::new();
                    for i in 0..n {
                        graph.add_node(i.to_string(), i as i32).unwrap();
                    }

                    let mut present = vec![vec![false; n as usize]; n as usize];
                    for _ in 0..(4 * n) {
                        let u = rng.random_range(0..n) as usize;
                        let v = rng.random_range(0..n) as usize;
                        let (su, sv) = (u.to_string(), v.to_string());

                        if present[u][v] {
                            graph.remove_edge(&su, &sv).unwrap();
                            present[u][v] = false;
                        } else {
                            graph.add_edge(&su, &sv, "payload").unwrap();
                            present[u][v] = true;
                        }

                        let m: usize = present.iter().flatten().filter(|&&b| b).count();
                        assert_eq!(graph.number_of_edges() as usize, m);
                    }

                    for u in 0..n as usize {
                        let uid = graph.node_id(&u.to_string()).unwrap();
                        let out_row: usize = present[u].iter().filter(|&&b| b).count();
                        let in_col: usize = (0..n as usize).filter(|&s| present[s][u]).count();

                        assert_eq!(graph.out_degree_of(uid) as usize, out_row);
                        assert_eq!(graph.in_degree_of(uid) as usize, in_col);

                        for v in 0..n as usize {
                            let vid = graph.node_id(&v.to_string()).unwrap();
                            assert_eq!(graph.has_edge(uid, vid), present[u][v]);
                        }
                    }
                }
            }

            #[test]
            fn removing_every_node_empties_the_container() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);
                let n = 15u32;

                let mut graph: $graph = Graph::new();
                for i in 0..n {
                    graph.add_node(i.to_string(), i as i32).unwrap();
                }
                for _ in 0..(3 * n) {
                    let u = rng.random_range(0..n).to_string();
                    let v = rng.random_range(0..n).to_string();
                    let _ = graph.add_edge(&u, &v, "payload");
                }

                for i in 0..n {
                    assert!(graph.remove_node(&i.to_string()).is_some());
                    assert!(graph.remove_node(&i.to_string()).is_none());
                }
                assert!(graph.is_empty());
                assert_eq!(graph.number_of_edges(), 0);
            }

            #[test]
            fn snapshot_round_trip_preserves_content() {
                let rng = &mut Pcg64Mcg::seed_from_u64(11);
                let n = 10u32;

                let mut graph: $graph = Graph::new();
                for i in 0..n {
                    graph.add_node(i.to_string(), i as i32).unwrap();
                }
                for _ in 0..(3 * n) {
                    let u = rng.random_range(0..n).to_string();
                    let v = rng.random_range(0..n).to_string();
                    let _ = graph.add_edge(&u, &v, "payload");
                }

                let first = graph.snapshot();
                let rebuilt = <$graph>::from_snapshot(first.clone()).unwrap();
                assert_eq!(rebuilt.snapshot(), first);
            }
        }
    };
}

pub(crate) use test_container_ops;
