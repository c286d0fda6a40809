// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Campus graph and shortest-path search

use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Paths of the built-in sample campus: `(from, to, distance in metres)`.
pub const SAMPLE_PATHS: [(&str, &str, f64); 9] = [
    ("Main Gate", "Library", 200.0),
    ("Main Gate", "Admin Block", 150.0),
    ("Library", "Canteen", 100.0),
    ("Library", "Engineering Faculty", 250.0),
    ("Admin Block", "Auditorium", 300.0),
    ("Canteen", "Hostel", 400.0),
    ("Engineering Faculty", "IT Faculty", 200.0),
    ("IT Faculty", "Science Faculty", 350.0),
    ("Science Faculty", "Auditorium", 300.0),
];

/// Result of a shortest-path query.
///
/// An empty `path` with an infinite `distance` means there is no route,
/// either because an endpoint is not on the map or because the two
/// locations are disconnected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Locations from start to destination, inclusive
    pub path: Vec<String>,
    /// Sum of the path's edge weights
    pub distance: f64,
}

impl Route {
    /// The "no route" sentinel
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    /// Whether a route was found
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges travelled
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the route
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_found() {
            return f.write_str("no route");
        }
        write!(f, "{} ({} m)", self.path.join(" -> "), self.distance)
    }
}

/// One undirected path between two locations, as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    /// One endpoint
    pub from: String,
    /// Other endpoint
    pub to: String,
    /// Walking distance
    pub distance: f64,
}

/// On-disk representation of a campus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampusStore {
    /// All locations, including isolated ones
    #[serde(default)]
    pub locations: Vec<String>,
    /// All paths
    #[serde(default)]
    pub paths: Vec<PathRecord>,
}

/// Weighted undirected campus map backed by petgraph
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    graph: UnGraph<String, f64>,
    node_indices: HashMap<String, NodeIndex>,
}

impl CampusGraph {
    /// Create an empty campus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The nine-location sample campus
    #[must_use]
    pub fn sample() -> Self {
        let mut campus = Self::new();
        for (from, to, distance) in SAMPLE_PATHS {
            campus.insert_path(from, to, distance);
        }
        campus
    }

    /// Build a campus from its stored form
    pub fn from_store(store: &CampusStore) -> Result<Self> {
        let mut campus = Self::new();
        for name in &store.locations {
            campus.add_location(name);
        }
        for record in &store.paths {
            campus.add_path(&record.from, &record.to, record.distance)?;
        }
        Ok(campus)
    }

    /// Convert to the stored form
    #[must_use]
    pub fn to_store(&self) -> CampusStore {
        let locations = self.locations().into_iter().map(String::from).collect();
        let paths = self
            .graph
            .edge_references()
            .map(|edge| PathRecord {
                from: self.graph[edge.source()].clone(),
                to: self.graph[edge.target()].clone(),
                distance: *edge.weight(),
            })
            .collect();
        CampusStore { locations, paths }
    }

    /// Load a campus from a JSON file, falling back to the sample campus
    /// when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("{} not found, using sample campus", path.display());
            return Ok(Self::sample());
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let store: CampusStore = serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_store(&store)
    }

    /// Save the campus as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(&self.to_store()).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Add a location, returning its node index. Existing locations are kept.
    pub fn add_location(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Connect two locations in both directions, creating them if needed.
    /// Re-adding an existing pair replaces its distance.
    pub fn add_path(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: distance,
            });
        }
        self.insert_path(from, to, distance);
        Ok(())
    }

    fn insert_path(&mut self, from: &str, to: &str, distance: f64) {
        let a = self.add_location(from);
        let b = self.add_location(to);
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph[edge] = distance,
            None => {
                self.graph.add_edge(a, b, distance);
            }
        }
    }

    /// Whether `name` is a location on this campus
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Location names in insertion order
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Direct neighbours of a location, nearest first
    #[must_use]
    pub fn neighbors(&self, name: &str) -> Vec<(&str, f64)> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };
        let mut out: Vec<(&str, f64)> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.graph[other].as_str(), *edge.weight())
            })
            .collect();
        out.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        out
    }

    /// Direct distance between two adjacent locations
    #[must_use]
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        let a = *self.node_indices.get(from)?;
        let b = *self.node_indices.get(to)?;
        self.graph.find_edge(a, b).map(|edge| self.graph[edge])
    }

    /// Number of locations
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of paths
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if the campus has no locations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Dijkstra's shortest path from `start` to `destination`.
    ///
    /// Never fails: unknown endpoints and disconnected locations both yield
    /// [`Route::unreachable`].
    #[must_use]
    pub fn shortest_path(&self, start: &str, destination: &str) -> Route {
        let (Some(&source), Some(&target)) = (
            self.node_indices.get(start),
            self.node_indices.get(destination),
        ) else {
            debug!(start, destination, "route endpoint not on campus");
            return Route::unreachable();
        };

        let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
        let mut previous: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = BinaryHeap::new();
        let mut seq = 0usize;

        distances.insert(source, 0.0);
        queue.push(QueueEntry {
            cost: 0.0,
            seq,
            node: source,
        });

        while let Some(QueueEntry { cost, node, .. }) = queue.pop() {
            if node == target {
                break;
            }
            if cost > distances.get(&node).copied().unwrap_or(f64::INFINITY) {
                continue;
            }
            for edge in self.graph.edges(node) {
                let next = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                let candidate = cost + *edge.weight();
                if candidate < distances.get(&next).copied().unwrap_or(f64::INFINITY) {
                    distances.insert(next, candidate);
                    previous.insert(next, node);
                    seq += 1;
                    queue.push(QueueEntry {
                        cost: candidate,
                        seq,
                        node: next,
                    });
                }
            }
        }

        let Some(&distance) = distances.get(&target) else {
            debug!(start, destination, "no route");
            return Route::unreachable();
        };

        let mut nodes = vec![target];
        let mut current = target;
        while current != source {
            match previous.get(&current) {
                Some(&prev) => {
                    nodes.push(prev);
                    current = prev;
                }
                None => return Route::unreachable(),
            }
        }
        nodes.reverse();

        Route {
            path: nodes.into_iter().map(|idx| self.graph[idx].clone()).collect(),
            distance,
        }
    }

    /// Export to DOT format for Graphviz, optionally highlighting a route
    #[must_use]
    pub fn to_dot(&self, highlight: Option<&Route>) -> String {
        let route_nodes: HashSet<&str> = highlight
            .map(|r| r.path.iter().map(String::as_str).collect())
            .unwrap_or_default();
        let route_legs: HashSet<(&str, &str)> = highlight
            .map(|r| r.legs().flat_map(|(a, b)| [(a, b), (b, a)]).collect())
            .unwrap_or_default();

        let mut dot = String::from("graph campus {\n");
        dot.push_str("  label=\"Campus Map\";\n");
        dot.push_str("  node [shape=ellipse, style=filled, fillcolor=lightblue];\n");
        dot.push_str("  edge [color=gray];\n\n");

        for name in self.locations() {
            let id = dot_id(name);
            if route_nodes.contains(name) {
                dot.push_str(&format!("  {id} [fillcolor=orange];\n"));
            } else {
                dot.push_str(&format!("  {id};\n"));
            }
        }

        dot.push('\n');

        for edge in self.graph.edge_references() {
            let from = self.graph[edge.source()].as_str();
            let to = self.graph[edge.target()].as_str();
            let weight = edge.weight();
            let (a, b) = (dot_id(from), dot_id(to));
            if route_legs.contains(&(from, to)) {
                dot.push_str(&format!(
                    "  {a} -- {b} [label=\"{weight}\", color=red, penwidth=3];\n"
                ));
            } else {
                dot.push_str(&format!("  {a} -- {b} [label=\"{weight}\"];\n"));
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Quoted DOT identifier; backslashes and double quotes are escaped
fn dot_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 2);
    id.push('"');
    for c in name.chars() {
        if matches!(c, '"' | '\\') {
            id.push('\\');
        }
        id.push(c);
    }
    id.push('"');
    id
}

/// Priority queue entry; `seq` keeps pops stable among equal costs.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: f64,
    seq: usize,
    node: NodeIndex,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the cheapest, then oldest, entry.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
