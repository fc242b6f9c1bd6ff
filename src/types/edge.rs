//! Edge direction, neighbor records and the serialized edge-list format.

use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// Whether an inserted edge is mirrored onto the second endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Both endpoints list each other.
    #[default]
    Undirected,
    /// Only the source lists the target.
    Directed,
}

impl EdgeDirection {
    /// Map the boolean `directed` flag used by edge-list documents.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }
}

impl std::fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry of a vertex's neighbor list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor<V> {
    /// The adjacent vertex.
    pub vertex: V,
    /// Edge weight (1.0 for unweighted insertion).
    pub weight: f64,
}

impl<V> Neighbor<V> {
    /// Create a neighbor record with the default weight.
    pub fn new(vertex: V) -> Self {
        Self {
            vertex,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Create a neighbor record with an explicit weight.
    pub fn weighted(vertex: V, weight: f64) -> Self {
        Self { vertex, weight }
    }
}

/// A single edge as read from an edge-list document or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Per-edge override; falls back to the document-level flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl EdgeSpec {
    /// Parse the compact command-line form.
    ///
    /// `A-B` is undirected, `A>B` directed, and either may carry a `:weight`
    /// suffix (`A-B:4`). Without an explicit marker `directed` stays `None`.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let (pair, weight) = match text.rsplit_once(':') {
            Some((pair, w)) => {
                let weight = w
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| GraphError::InvalidEdge(text.to_string()))?;
                (pair, weight)
            }
            None => (text, DEFAULT_WEIGHT),
        };

        let (from, to, directed) = if let Some((a, b)) = pair.split_once('>') {
            (a, b, Some(true))
        } else if let Some((a, b)) = pair.split_once('-') {
            (a, b, None)
        } else {
            return Err(GraphError::InvalidEdge(text.to_string()));
        };

        let from = from.trim();
        let to = to.trim();
        let is_separator = |c: char| c == '-' || c == '>';
        if from.is_empty()
            || to.is_empty()
            || from.contains(is_separator)
            || to.contains(is_separator)
        {
            return Err(GraphError::InvalidEdge(text.to_string()));
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            directed,
        })
    }

    /// Resolve the direction of this edge against a document-level default.
    pub fn direction(&self, default_directed: bool) -> EdgeDirection {
        EdgeDirection::from_directed(self.directed.unwrap_or(default_directed))
    }
}

/// An edge-list document: optional isolated vertices plus edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    /// Default direction for edges that do not specify one.
    #[serde(default)]
    pub directed: bool,
    /// Vertices registered before any edge, in order.
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}
