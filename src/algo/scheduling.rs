/*!
Activity-network scheduling: earliest occurrence times (PERT) and the
critical path (CPM).

Both build on the topological order and therefore require an acyclic
network. Edge weights are durations; nodes are events. The earliest time of
an event is the heaviest incoming chain: `max(time[p] + w)` over all live
incoming edges, `0` for sources. CPM additionally records which predecessor
realizes each maximum and walks those links back from the latest event.
*/

use tracing::debug;

use crate::{
    EdgeId, INVALID_NODE, NodeId, Weight,
    network::{Network, WeightFn, stored_weight},
};

/// The critical path of an acyclic network: the schedule's total duration
/// and the chain of events realizing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPath {
    /// Earliest possible completion time of the whole schedule
    pub duration: Weight,
    /// Event names along the critical chain, in schedule order
    pub path: Vec<String>,
}

impl<D, E, S> Network<D, E, S> {
    /// Earliest occurrence time per event, as `(name, time)` pairs in
    /// topological order. Returns an empty list on cyclic input.
    pub fn pert(&self) -> Vec<(String, Weight)> {
        self.pert_with(stored_weight)
    }

    /// [`Network::pert`] under a custom weight function
    pub fn pert_with(&self, wf: impl WeightFn<D, E, S>) -> Vec<(String, Weight)> {
        let live = |eid: EdgeId| self.derived_weight(eid, &wf) > 0.0;
        let Some(order) = self.topo_ids(&live) else {
            debug!("cyclic input, no schedule");
            return Vec::new();
        };

        let (times, _) = self.forward_pass(&order, &wf);
        order
            .into_iter()
            .map(|u| {
                (
                    self.node_name(u).unwrap().to_owned(),
                    times[u as usize],
                )
            })
            .collect()
    }

    /// Critical path of the schedule. Returns `None` on cyclic input.
    pub fn cpm(&self) -> Option<CriticalPath> {
        self.cpm_with(stored_weight)
    }

    /// [`Network::cpm`] under a custom weight function
    pub fn cpm_with(&self, wf: impl WeightFn<D, E, S>) -> Option<CriticalPath> {
        let live = |eid: EdgeId| self.derived_weight(eid, &wf) > 0.0;
        let order = self.topo_ids(&live)?;
        let (times, preds) = self.forward_pass(&order, &wf);

        let Some(&last) = order
            .iter()
            .max_by(|&&a, &&b| {
                times[a as usize]
                    .partial_cmp(&times[b as usize])
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        else {
            return Some(CriticalPath {
                duration: 0.0,
                path: Vec::new(),
            });
        };

        let mut chain = vec![last];
        let mut u = last;
        while preds[u as usize] != INVALID_NODE {
            u = preds[u as usize];
            chain.push(u);
        }
        chain.reverse();

        Some(CriticalPath {
            duration: times[last as usize],
            path: chain
                .into_iter()
                .map(|u| self.node_name(u).unwrap().to_owned())
                .collect(),
        })
    }

    /// Computes earliest times and the argmax predecessor per node, over a
    /// topological order
    fn forward_pass(
        &self,
        order: &[NodeId],
        wf: &impl WeightFn<D, E, S>,
    ) -> (Vec<Weight>, Vec<NodeId>) {
        let bound = self.slot_bound();
        let mut times = vec![0.0; bound];
        let mut preds = vec![INVALID_NODE; bound];

        for &u in order {
            for (p, eid) in self.masked_in_edges_of(u, &|eid| self.derived_weight(eid, wf) > 0.0)
            {
                let candidate = times[p as usize] + self.derived_weight(eid, wf);
                if candidate > times[u as usize] {
                    times[u as usize] = candidate;
                    preds[u as usize] = p;
                }
            }
        }

        (times, preds)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// start -> mid (3), start -> side (1), mid -> end (2), side -> end (1)
    fn schedule() -> Network<(), ()> {
        let mut net = Network::new();
        for name in ["start", "mid", "side", "end"] {
            net.add_node(name, ()).unwrap();
        }
        net.add_edge_weighted("start", "mid", (), 3.0).unwrap();
        net.add_edge_weighted("start", "side", (), 1.0).unwrap();
        net.add_edge_weighted("mid", "end", (), 2.0).unwrap();
        net.add_edge_weighted("side", "end", (), 1.0).unwrap();
        net
    }

    #[test]
    fn earliest_times_take_the_heaviest_chain() {
        let times = schedule().pert();
        let lookup = |name: &str| {
            times
                .iter()
                .find(|(n, _)| n == name)
                .map(|&(_, t)| t)
                .unwrap()
        };

        assert_eq!(lookup("start"), 0.0);
        assert_eq!(lookup("mid"), 3.0);
        assert_eq!(lookup("side"), 1.0);
        assert_eq!(lookup("end"), 5.0);
    }

    #[test]
    fn cyclic_input_yields_no_schedule() {
        let mut net = schedule();
        net.add_edge_weighted("end", "start", (), 1.0).unwrap();
        assert!(net.pert().is_empty());
        assert!(net.cpm().is_none());
    }

    #[test]
    fn critical_path_walks_the_argmax_chain() {
        let cpm = schedule().cpm().unwrap();
        assert_eq!(cpm.duration, 5.0);
        assert_eq!(cpm.path, vec!["start", "mid", "end"]);
    }

    #[test]
    fn empty_network_has_an_empty_schedule() {
        let net: Network<(), ()> = Network::new();
        assert!(net.pert().is_empty());
        let cpm = net.cpm().unwrap();
        assert_eq!(cpm.duration, 0.0);
        assert!(cpm.path.is_empty());
    }

    #[test]
    fn weight_override_rebalances_the_chains() {
        let net = schedule();
        // stretch the side route
        let cpm = net
            .cpm_with(|w, _, _| if w == 1.0 { 10.0 } else { w })
            .unwrap();
        assert_eq!(cpm.duration, 20.0);
        assert_eq!(cpm.path, vec!["start", "side", "end"]);
    }
}
