//! Shortest-path result types.

use serde::Serialize;

use super::{Cost, UNREACHABLE_SENTINEL};

/// Total cost of a shortest path, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cost", rename_all = "snake_case")]
pub enum Distance {
    /// The target is reachable at this total cost.
    Finite(Cost),
    /// No path leads from the start to the target.
    Unreachable,
}

impl Distance {
    /// The finite cost, if any.
    pub fn finite(&self) -> Option<Cost> {
        match self {
            Self::Finite(cost) => Some(*cost),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Integer encoding where `-1` stands for unreachable.
    pub fn as_sentinel(&self) -> Cost {
        self.finite().unwrap_or(UNREACHABLE_SENTINEL)
    }
}

impl From<Option<Cost>> for Distance {
    fn from(cost: Option<Cost>) -> Self {
        match cost {
            Some(cost) => Self::Finite(cost),
            None => Self::Unreachable,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(cost) => write!(f, "{}", cost),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// The vertex sequence of a shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "vertices", rename_all = "snake_case")]
pub enum Route {
    /// Vertices from start to end, both inclusive.
    Vertices(Vec<String>),
    /// The end vertex cannot be reached from the start.
    NoPath,
}

impl Route {
    /// The vertex sequence, if a path exists.
    pub fn vertices(&self) -> Option<&[String]> {
        match self {
            Self::Vertices(keys) => Some(keys.as_slice()),
            Self::NoPath => None,
        }
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> Option<usize> {
        self.vertices().map(|keys| keys.len().saturating_sub(1))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertices(keys) => write!(f, "{}", keys.join(" -> ")),
            Self::NoPath => write!(f, "None"),
        }
    }
}

/// Result of a single shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Total cost from start to end.
    pub cost: Distance,
    /// The path itself.
    pub route: Route,
}
