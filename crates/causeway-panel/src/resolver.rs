//! EdgeResolver — reducer over the set of edges still awaiting a direction.
//!
//! Selection input is parsed once into an `EdgeKey`; every resolution
//! synchronously orients the working graph and shrinks the pending set, so
//! completion is always readable from committed state.

use causeway_core::errors::GraphError;
use causeway_core::{CausalGraph, Direction, EdgeKey, PanelResult};

/// Tracks the undirected edges not yet assigned a direction.
#[derive(Debug, Clone, Default)]
pub struct EdgeResolver {
    pending: Vec<EdgeKey>,
}

impl EdgeResolver {
    pub fn new(pending: Vec<EdgeKey>) -> Self {
        Self { pending }
    }

    /// Edges still awaiting a direction, in host order.
    pub fn pending(&self) -> &[EdgeKey] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether every edge has been resolved (or none were supplied).
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Parse a host selection string and check it names a pending edge.
    pub fn select(&self, raw: &str) -> Result<EdgeKey, GraphError> {
        let edge: EdgeKey = raw.parse()?;
        if self.position(&edge).is_none() {
            return Err(GraphError::EdgeNotPending {
                left: edge.left().to_string(),
                right: edge.right().to_string(),
            });
        }
        Ok(edge)
    }

    /// Orient a pending edge on the working graph and drop it from the
    /// pending set. On any error both the graph and the set are untouched.
    ///
    /// An orientation that would close a cycle through already-committed
    /// arcs is rejected; arcs still encoding other pending pairs don't
    /// count.
    pub fn resolve(
        &mut self,
        graph: &mut CausalGraph,
        edge: &EdgeKey,
        direction: Direction,
    ) -> PanelResult<()> {
        let index = self
            .position(edge)
            .ok_or_else(|| GraphError::EdgeNotPending {
                left: edge.left().to_string(),
                right: edge.right().to_string(),
            })?;
        let (from, to) = direction.orient(edge);
        if graph.would_close_cycle(from, to, &self.pending) {
            return Err(GraphError::CycleDetected {
                path: format!("{to} -> ... -> {from} -> {to}"),
            }
            .into());
        }
        graph.orient(edge, direction)?;
        self.pending.remove(index);
        tracing::debug!(
            "resolver: oriented {edge} ({:?}), {} pending",
            direction,
            self.pending.len()
        );
        Ok(())
    }

    /// Identity match on both endpoints.
    fn position(&self, edge: &EdgeKey) -> Option<usize> {
        self.pending
            .iter()
            .position(|e| e.left() == edge.left() && e.right() == edge.right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_graph(left: &str, right: &str) -> CausalGraph {
        let mut graph = CausalGraph::new();
        graph.add_arc(left, right);
        graph.add_arc(right, left);
        graph
    }

    #[test]
    fn select_rejects_unknown_edges() {
        let resolver = EdgeResolver::new(vec![EdgeKey::new("A", "B")]);
        let err = resolver.select("B,C").unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotPending { .. }));
    }

    #[test]
    fn select_matches_endpoint_order() {
        // (B, A) is not the pending (A, B); identity is on both endpoints.
        let resolver = EdgeResolver::new(vec![EdgeKey::new("A", "B")]);
        assert!(resolver.select("B,A").is_err());
        assert!(resolver.select("A,B").is_ok());
    }

    #[test]
    fn resolve_shrinks_pending_and_orients() {
        let mut graph = pair_graph("A", "B");
        let mut resolver = EdgeResolver::new(vec![EdgeKey::new("A", "B")]);
        let edge = resolver.select("A,B").unwrap();

        resolver
            .resolve(&mut graph, &edge, Direction::Right)
            .unwrap();
        assert!(resolver.is_complete());
        assert!(graph.contains_arc("A", "B"));
        assert!(!graph.contains_arc("B", "A"));
    }

    #[test]
    fn cycle_closing_orientation_is_rejected() {
        // Committed chain B -> C -> A plus the pending pair A <-> B.
        let mut graph = pair_graph("A", "B");
        graph.add_arc("B", "C");
        graph.add_arc("C", "A");
        let mut resolver = EdgeResolver::new(vec![EdgeKey::new("A", "B")]);
        let before = graph.clone();

        let edge = resolver.select("A,B").unwrap();
        let err = resolver
            .resolve(&mut graph, &edge, Direction::Right)
            .unwrap_err();
        assert!(err.to_string().contains("cycle"));
        assert_eq!(graph, before);
        assert_eq!(resolver.pending_count(), 1);

        // The opposite orientation commits cleanly.
        resolver
            .resolve(&mut graph, &edge, Direction::Left)
            .unwrap();
        assert!(graph.find_cycles().is_empty());
    }

    #[test]
    fn failed_resolution_leaves_everything_untouched() {
        let mut graph = pair_graph("A", "B");
        let mut resolver = EdgeResolver::new(vec![EdgeKey::new("A", "B")]);
        let before = graph.clone();

        let edge = EdgeKey::new("A", "B");
        resolver
            .resolve(&mut graph, &edge, Direction::Right)
            .unwrap();
        // Second resolution of the same edge: no longer pending.
        let err = resolver
            .resolve(&mut graph, &edge, Direction::Left)
            .unwrap_err();
        assert!(err.to_string().contains("not pending"));
        assert_ne!(graph, before);
        assert!(graph.contains_arc("A", "B"));
    }
}
