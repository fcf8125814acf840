use super::Gav;
use std::collections::{HashMap, HashSet};

/// Index of a node inside a [`DependencyGraph`].
///
/// Node identity is positional: two nodes may carry the same coordinate and
/// still be distinct, each with its own dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct GraphNode {
    gav: Gav,
    dependencies: Vec<NodeId>,
}

/// Arena-backed dependency graph rooted at the analysed project.
///
/// Edges may form diamonds and cycles; consumers that walk the graph must
/// guard against revisits themselves.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    root: NodeId,
}

impl DependencyGraph {
    /// Creates a graph holding only its root node.
    pub fn new(root: Gav) -> Self {
        Self {
            nodes: vec![GraphNode {
                gav: root,
                dependencies: Vec::new(),
            }],
            root: NodeId(0),
        }
    }

    /// Builds a graph from a coordinate-keyed adjacency map.
    ///
    /// Each distinct coordinate becomes one node. Coordinates that only occur
    /// as dependencies become leaves.
    pub fn from_adjacency(root: &Gav, adjacency: &HashMap<Gav, Vec<Gav>>) -> Self {
        let mut graph = Self::new(root.clone());
        let mut ids: HashMap<Gav, NodeId> = HashMap::new();
        ids.insert(root.clone(), graph.root);

        let mut pending = vec![root.clone()];
        let mut expanded: HashSet<Gav> = HashSet::new();

        while let Some(gav) = pending.pop() {
            if !expanded.insert(gav.clone()) {
                continue;
            }
            let Some(children) = adjacency.get(&gav) else {
                continue;
            };
            let parent = ids[&gav];
            for child in children {
                let child_id = match ids.get(child) {
                    Some(id) => *id,
                    None => {
                        let id = graph.add_node(child.clone());
                        ids.insert(child.clone(), id);
                        id
                    }
                };
                graph.nodes[parent.0].dependencies.push(child_id);
                pending.push(child.clone());
            }
        }

        graph
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn add_node(&mut self, gav: Gav) -> NodeId {
        self.nodes.push(GraphNode {
            gav,
            dependencies: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Coordinate of `id`.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    pub fn gav(&self, id: NodeId) -> &Gav {
        &self.nodes[id.0].gav
    }

    /// Direct dependencies of `id`, in insertion order.
    pub fn dependencies(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].dependencies
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.dependencies.len()).sum()
    }

    /// First node carrying `gav`, if any.
    pub fn find(&self, gav: &Gav) -> Option<NodeId> {
        self.nodes.iter().position(|n| &n.gav == gav).map(NodeId)
    }

    /// Copy of the subgraph reachable from `id`, with `id` as its root.
    pub fn rerooted_at(&self, id: NodeId) -> Self {
        let mut graph = Self::new(self.gav(id).clone());
        let mut mapping: HashMap<NodeId, NodeId> = HashMap::new();
        mapping.insert(id, graph.root);

        let mut pending = vec![id];
        let mut expanded: HashSet<NodeId> = HashSet::new();
        while let Some(old) = pending.pop() {
            if !expanded.insert(old) {
                continue;
            }
            let new_parent = mapping[&old];
            for &child in self.dependencies(old) {
                let new_child = *mapping
                    .entry(child)
                    .or_insert_with(|| graph.add_node(self.gav(child).clone()));
                graph.nodes[new_parent.0].dependencies.push(new_child);
                pending.push(child);
            }
        }

        graph
    }
}
