//! Classification value types.

use serde::{Deserialize, Serialize};

/// How a graph relates to Eulerian walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EulerClass {
    /// Admits a closed walk using every edge exactly once.
    Eulerian,
    /// Admits an open walk using every edge exactly once, but no closed one.
    SemiEulerian,
    /// Admits neither.
    Neither,
}

impl EulerClass {
    /// Whether a closed walk over every edge exists.
    #[must_use]
    pub fn admits_circuit(self) -> bool {
        self == EulerClass::Eulerian
    }

    /// Whether some walk (open or closed) over every edge exists.
    #[must_use]
    pub fn admits_path(self) -> bool {
        self != EulerClass::Neither
    }
}

/// Degree-parity report used to explain a classification.
///
/// Produced by [`degree_summary`](crate::classify::degree_summary);
/// connectivity is reported separately by
/// [`is_connected`](crate::classify::is_connected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeSummary {
    /// Parity counts of an undirected graph. Self-loops count twice.
    Undirected {
        /// Vertices of odd degree. Zero permits a circuit, two a path.
        odd_degree: usize,
    },
    /// Balance counts of a directed graph.
    Directed {
        /// Vertices with out-degree = in-degree + 1 (candidate path starts).
        excess_out: usize,
        /// Vertices with in-degree = out-degree + 1 (candidate path ends).
        excess_in: usize,
        /// Vertices off balance by more than one in either direction.
        unbalanced: usize,
    },
}

impl DegreeSummary {
    /// Whether the degree condition for a circuit holds.
    #[must_use]
    pub fn balanced(&self) -> bool {
        match *self {
            DegreeSummary::Undirected { odd_degree } => odd_degree == 0,
            DegreeSummary::Directed {
                excess_out,
                excess_in,
                unbalanced,
            } => excess_out == 0 && excess_in == 0 && unbalanced == 0,
        }
    }
}
