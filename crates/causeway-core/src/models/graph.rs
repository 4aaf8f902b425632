//! Directed causal graph as an ordered adjacency mapping.
//!
//! The panel works on an owned copy initialized from the host props; the
//! host's own graph value is never mutated. Cycle checks run a DFS
//! reachability pre-check before any arc insertion, with a Tarjan SCC audit
//! available for the fully resolved graph.

use std::collections::BTreeMap;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::Dfs;
use petgraph::Directed;
use serde::{Deserialize, Serialize};

use super::edge::{Direction, EdgeKey};
use crate::errors::GraphError;

/// Adjacency mapping from node name to the ordered nodes it points to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CausalGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an adjacency mapping, giving every referenced node an entry.
    pub fn from_adjacency(adjacency: BTreeMap<String, Vec<String>>) -> Self {
        let mut graph = Self { adjacency };
        let referenced: Vec<String> = graph
            .adjacency
            .values()
            .flatten()
            .filter(|name| !graph.adjacency.contains_key(*name))
            .cloned()
            .collect();
        for name in referenced {
            graph.ensure_node(&name);
        }
        graph
    }

    /// The raw adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<String, Vec<String>> {
        &self.adjacency
    }

    /// Whether `name` appears as a node entry or inside any adjacency list.
    pub fn has_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
            || self
                .adjacency
                .values()
                .any(|targets| targets.iter().any(|t| t == name))
    }

    /// Nodes `node` points to, in insertion order.
    pub fn children(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert a node entry if absent.
    pub fn ensure_node(&mut self, name: &str) {
        self.adjacency.entry(name.to_string()).or_default();
    }

    pub fn contains_arc(&self, from: &str, to: &str) -> bool {
        self.children(from).iter().any(|t| t == to)
    }

    /// Add the arc `from -> to` if not already present.
    pub fn add_arc(&mut self, from: &str, to: &str) {
        self.ensure_node(to);
        let targets = self.adjacency.entry(from.to_string()).or_default();
        if !targets.iter().any(|t| t == to) {
            targets.push(to.to_string());
        }
    }

    /// Remove the arc `from -> to`. Returns whether it was present.
    pub fn remove_arc(&mut self, from: &str, to: &str) -> bool {
        match self.adjacency.get_mut(from) {
            Some(targets) => match targets.iter().position(|t| t == to) {
                Some(index) => {
                    targets.remove(index);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Total number of arcs.
    pub fn arc_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Orient a pending edge: leave exactly one arc between its endpoints,
    /// pointing per `direction`, undoing any default or bidirectional
    /// encoding. Pure mutation; cycle policy lives with the caller via
    /// `would_close_cycle`.
    pub fn orient(&mut self, edge: &EdgeKey, direction: Direction) -> Result<(), GraphError> {
        for name in [edge.left(), edge.right()] {
            if !self.has_node(name) {
                return Err(GraphError::UnknownNode {
                    name: name.to_string(),
                });
            }
        }
        let (from, to) = direction.orient(edge);
        if from == to {
            return Err(GraphError::CycleDetected {
                path: format!("{from} -> {to}"),
            });
        }
        self.remove_arc(edge.left(), edge.right());
        self.remove_arc(edge.right(), edge.left());
        self.add_arc(from, to);
        Ok(())
    }

    /// Whether adding `from -> to` would close a directed cycle, ignoring
    /// every arc between the endpoint pairs in `exclude` (both orientations).
    /// Callers exclude the pairs still pending resolution so only committed
    /// arcs count.
    pub fn would_close_cycle(&self, from: &str, to: &str, exclude: &[EdgeKey]) -> bool {
        if from == to {
            return true;
        }
        let (graph, indices) = self.indexed_excluding(exclude);
        match (indices.get(to), indices.get(from)) {
            (Some(&start), Some(&goal)) => has_path(&graph, start, goal),
            _ => false,
        }
    }

    /// Strongly connected components with more than one node, i.e. cycles.
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        let (graph, _) = self.indexed_excluding(&[]);
        tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| scc.into_iter().map(|ix| graph[ix].to_string()).collect())
            .collect()
    }

    /// Build a petgraph view, excluding all arcs between the given node
    /// pairs (both orientations).
    fn indexed_excluding<'a>(
        &'a self,
        exclude: &[EdgeKey],
    ) -> (
        StableGraph<&'a str, (), Directed>,
        BTreeMap<&'a str, NodeIndex>,
    ) {
        let mut graph = StableGraph::new();
        let mut indices: BTreeMap<&str, NodeIndex> = BTreeMap::new();
        for (node, targets) in &self.adjacency {
            indices
                .entry(node.as_str())
                .or_insert_with(|| graph.add_node(node.as_str()));
            for target in targets {
                indices
                    .entry(target.as_str())
                    .or_insert_with(|| graph.add_node(target.as_str()));
            }
        }
        for (node, targets) in &self.adjacency {
            for target in targets {
                let skip = exclude.iter().any(|pair| {
                    (node == pair.left() && target == pair.right())
                        || (node == pair.right() && target == pair.left())
                });
                if !skip {
                    graph.add_edge(indices[node.as_str()], indices[target.as_str()], ());
                }
            }
        }
        (graph, indices)
    }
}

/// DFS-based reachability: can we reach `to` from `from`?
fn has_path(graph: &StableGraph<&str, (), Directed>, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bidirectional_pair() -> CausalGraph {
        let mut graph = CausalGraph::new();
        graph.add_arc("A", "B");
        graph.add_arc("B", "A");
        graph
    }

    #[test]
    fn orient_right_leaves_a_single_forward_arc() {
        let mut graph = bidirectional_pair();
        graph
            .orient(&EdgeKey::new("A", "B"), Direction::Right)
            .unwrap();
        assert!(graph.contains_arc("A", "B"));
        assert!(!graph.contains_arc("B", "A"));
        assert_eq!(graph.arc_count(), 1);
    }

    #[test]
    fn orient_left_leaves_a_single_backward_arc() {
        let mut graph = bidirectional_pair();
        graph
            .orient(&EdgeKey::new("A", "B"), Direction::Left)
            .unwrap();
        assert!(graph.contains_arc("B", "A"));
        assert!(!graph.contains_arc("A", "B"));
        assert_eq!(graph.arc_count(), 1);
    }

    #[test]
    fn orient_rejects_unknown_nodes() {
        let mut graph = bidirectional_pair();
        let err = graph
            .orient(&EdgeKey::new("A", "Z"), Direction::Right)
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { .. }));
    }

    #[test]
    fn cycle_check_sees_committed_arcs_only() {
        // Committed chain B -> C -> A; pending pair A <-> B.
        let mut graph = bidirectional_pair();
        graph.add_arc("B", "C");
        graph.add_arc("C", "A");
        let pending = vec![EdgeKey::new("A", "B")];

        // A -> B joins the chain into a cycle; B -> A does not.
        assert!(graph.would_close_cycle("A", "B", &pending));
        assert!(!graph.would_close_cycle("B", "A", &pending));
    }

    #[test]
    fn cycle_check_ignores_other_pending_pairs() {
        // Pending pairs A <-> B and B <-> C: the B <-> C encoding alone must
        // not make A -> B look cyclic.
        let mut graph = bidirectional_pair();
        graph.add_arc("B", "C");
        graph.add_arc("C", "B");
        let pending = vec![EdgeKey::new("A", "B"), EdgeKey::new("B", "C")];
        assert!(!graph.would_close_cycle("A", "B", &pending));
        assert!(!graph.would_close_cycle("B", "A", &pending));
    }

    #[test]
    fn find_cycles_flags_unresolved_pairs() {
        let graph = bidirectional_pair();
        assert_eq!(graph.find_cycles().len(), 1);

        let mut resolved = graph.clone();
        resolved
            .orient(&EdgeKey::new("A", "B"), Direction::Right)
            .unwrap();
        assert!(resolved.find_cycles().is_empty());
    }

    #[test]
    fn serde_round_trips_as_a_plain_mapping() {
        let mut graph = CausalGraph::new();
        graph.add_arc("A", "B");
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"A":["B"],"B":[]}"#);
        let back: CausalGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }
}
