use std::collections::{BTreeMap, BTreeSet, VecDeque};

use sod_core::{EdgeId, Hypergraph, NodeId, SodError};

use crate::flags::CleanupOptions;
use crate::ids::{canonicalize_nodes, is_sorted_subset, make_edge, make_node};

/// Immutable undirected hypergraph snapshot.
///
/// Members are stored sorted and duplicate free. Every derived view
/// ([`subhypergraph`](Self::subhypergraph), [`cleanup`](Self::cleanup), ...)
/// returns a new snapshot; the only in-place edits are the crate-private
/// rewiring primitives used on graphs owned by a null model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HypergraphImpl {
    nodes: BTreeMap<NodeId, BTreeSet<EdgeId>>,
    edges: BTreeMap<EdgeId, Vec<NodeId>>,
}

impl HypergraphImpl {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hypergraph from member lists, assigning edge ids `0..`.
    pub fn from_edge_lists<I, E, T>(edges: I) -> Result<Self, SodError>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self::from_edge_map(
            edges
                .into_iter()
                .enumerate()
                .map(|(idx, members)| (make_edge(idx), members.into_iter().map(Into::into))),
        )
    }

    /// Builds a hypergraph from explicit `(edge id, members)` pairs.
    pub fn from_edge_map<I, E>(edges: I) -> Result<Self, SodError>
    where
        I: IntoIterator<Item = (EdgeId, E)>,
        E: IntoIterator<Item = NodeId>,
    {
        let mut graph = Self::new();
        for (id, members) in edges {
            graph.insert_edge(id, canonicalize_nodes(members))?;
        }
        Ok(graph)
    }

    /// Returns a copy of the graph with the given nodes registered, keeping
    /// any that do not belong to an edge as isolates.
    pub fn with_nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        for node in nodes {
            self.nodes.entry(node).or_default();
        }
        self
    }

    fn insert_edge(&mut self, id: EdgeId, members: Vec<NodeId>) -> Result<(), SodError> {
        if members.is_empty() {
            return Err(SodError::graph("empty-edge", "hyperedges require at least one member")
                .with_context("edge", id));
        }
        if self.edges.contains_key(&id) {
            return Err(SodError::graph("duplicate-edge-id", "edge identifier already in use")
                .with_context("edge", id));
        }
        for node in &members {
            self.nodes.entry(*node).or_default().insert(id);
        }
        self.edges.insert(id, members);
        Ok(())
    }

    /// Replaces the members of an existing edge. Callers own the graph and
    /// are responsible for keeping it valid.
    pub(crate) fn overwrite_edge(
        &mut self,
        id: EdgeId,
        members: Vec<NodeId>,
    ) -> Result<(), SodError> {
        let previous = self.edges.get_mut(&id).ok_or_else(|| unknown_edge(id))?;
        let old = std::mem::replace(previous, members.clone());
        for node in old {
            if let Some(memberships) = self.nodes.get_mut(&node) {
                memberships.remove(&id);
            }
        }
        for node in members {
            self.nodes.entry(node).or_default().insert(id);
        }
        Ok(())
    }

    /// Iterates `(edge id, members)` pairs in edge-id order.
    pub fn edge_members(&self) -> impl Iterator<Item = (EdgeId, &[NodeId])> + '_ {
        self.edges.iter().map(|(id, members)| (*id, members.as_slice()))
    }

    /// Number of edges containing `node`.
    pub fn degree(&self, node: NodeId) -> Result<usize, SodError> {
        Ok(self.memberships(node)?.len())
    }

    /// Member sets of every edge with at least `min_size` members, in edge-id order.
    pub fn edges_with_min_size(&self, min_size: usize) -> Vec<&[NodeId]> {
        self.edges
            .values()
            .filter(|members| members.len() >= min_size)
            .map(Vec::as_slice)
            .collect()
    }

    /// Number of edges with at least `min_size` members.
    pub fn count_edges_with_min_size(&self, min_size: usize) -> usize {
        self.edges
            .values()
            .filter(|members| members.len() >= min_size)
            .count()
    }

    /// Edges whose member set is not a strict subset of any other edge.
    ///
    /// An edge duplicated under several ids is reported once, under its
    /// smallest id.
    pub fn maximal_edges(&self) -> Vec<EdgeId> {
        let mut maximal = Vec::new();
        for (id, members) in &self.edges {
            if self.is_maximal(*id, members) {
                maximal.push(*id);
            }
        }
        maximal
    }

    fn is_maximal(&self, id: EdgeId, members: &[NodeId]) -> bool {
        // The rarest member bounds the candidate supersets.
        let Some(pivot) = members
            .iter()
            .filter_map(|node| self.nodes.get(node))
            .min_by_key(|memberships| memberships.len())
        else {
            return true;
        };
        for other in pivot {
            if *other == id {
                continue;
            }
            let other_members = &self.edges[other];
            if !is_sorted_subset(members, other_members) {
                continue;
            }
            if other_members.len() > members.len() || *other < id {
                return false;
            }
        }
        true
    }

    /// Induced sub-hypergraph on `nodes`: the given nodes that exist in the
    /// graph plus every edge whose members all lie within them.
    pub fn subhypergraph(&self, nodes: &BTreeSet<NodeId>) -> HypergraphImpl {
        let mut sub = HypergraphImpl::new();
        let mut candidates = BTreeSet::new();
        for node in nodes {
            if let Some(memberships) = self.nodes.get(node) {
                sub.nodes.entry(*node).or_default();
                candidates.extend(memberships.iter().copied());
            }
        }
        for edge in candidates {
            let members = &self.edges[&edge];
            if members.iter().all(|node| nodes.contains(node)) {
                for node in members {
                    sub.nodes.entry(*node).or_default().insert(edge);
                }
                sub.edges.insert(edge, members.clone());
            }
        }
        sub
    }

    /// Keeps only edges of order at most `max_order` (size at most `max_order + 1`).
    pub fn truncate_order(&self, max_order: usize) -> HypergraphImpl {
        let edges = self
            .edges
            .iter()
            .filter(|(_, members)| members.len() <= max_order + 1)
            .map(|(id, members)| (*id, members.clone()));
        Self::rebuild(edges, self.nodes.keys().copied())
    }

    /// Number of edges containing both `a` and `b`.
    pub fn edge_multiplicity(&self, a: NodeId, b: NodeId) -> Result<usize, SodError> {
        let left = self.memberships(a)?;
        let right = self.memberships(b)?;
        Ok(left.intersection(right).count())
    }

    /// Returns a cleaned copy of the graph according to `opts`.
    pub fn cleanup(&self, opts: &CleanupOptions) -> HypergraphImpl {
        let mut seen: BTreeSet<&[NodeId]> = BTreeSet::new();
        let mut kept = Vec::new();
        for (id, members) in &self.edges {
            if !opts.singletons && members.len() == 1 {
                continue;
            }
            if !opts.multiedges && !seen.insert(members.as_slice()) {
                continue;
            }
            kept.push((*id, members.clone()));
        }
        let nodes: Vec<NodeId> = if opts.isolates {
            self.nodes.keys().copied().collect()
        } else {
            Vec::new()
        };
        let mut graph = Self::rebuild(kept, nodes);

        if opts.connected {
            let component = graph.largest_component();
            graph = graph.subhypergraph(&component);
        }
        if opts.relabel {
            graph = graph.relabel();
        }
        graph
    }

    /// Node set of the largest connected component; ties favour the
    /// component holding the smallest node id.
    pub fn largest_component(&self) -> BTreeSet<NodeId> {
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        let mut best: BTreeSet<NodeId> = BTreeSet::new();
        for start in self.nodes.keys() {
            if visited.contains(start) {
                continue;
            }
            let mut component = BTreeSet::new();
            let mut queue = VecDeque::from([*start]);
            visited.insert(*start);
            while let Some(node) = queue.pop_front() {
                component.insert(node);
                for edge in &self.nodes[&node] {
                    for neighbour in &self.edges[edge] {
                        if visited.insert(*neighbour) {
                            queue.push_back(*neighbour);
                        }
                    }
                }
            }
            if component.len() > best.len() {
                best = component;
            }
        }
        best
    }

    /// Relabels nodes and edges to `0..` preserving their relative order.
    pub fn relabel(&self) -> HypergraphImpl {
        let node_map: BTreeMap<NodeId, NodeId> = self
            .nodes
            .keys()
            .enumerate()
            .map(|(idx, node)| (*node, make_node(idx)))
            .collect();
        let edges = self.edges.values().enumerate().map(|(idx, members)| {
            (
                make_edge(idx),
                members.iter().map(|node| node_map[node]).collect::<Vec<_>>(),
            )
        });
        Self::rebuild(edges, node_map.values().copied())
    }

    fn rebuild<I, N>(edges: I, nodes: N) -> HypergraphImpl
    where
        I: IntoIterator<Item = (EdgeId, Vec<NodeId>)>,
        N: IntoIterator<Item = NodeId>,
    {
        let mut graph = HypergraphImpl::new().with_nodes(nodes);
        for (id, members) in edges {
            for node in &members {
                graph.nodes.entry(*node).or_default().insert(id);
            }
            graph.edges.insert(id, members);
        }
        graph
    }
}

impl Hypergraph for HypergraphImpl {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.nodes.keys().copied())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_> {
        Box::new(self.edges.keys().copied())
    }

    fn members(&self, edge: EdgeId) -> Result<&[NodeId], SodError> {
        self.edges
            .get(&edge)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_edge(edge))
    }

    fn memberships(&self, node: NodeId) -> Result<&BTreeSet<EdgeId>, SodError> {
        self.nodes.get(&node).ok_or_else(|| {
            SodError::graph("unknown-node", "node does not exist").with_context("node", node)
        })
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

fn unknown_edge(edge: EdgeId) -> SodError {
    SodError::graph("unknown-edge", "edge does not exist").with_context("edge", edge)
}
