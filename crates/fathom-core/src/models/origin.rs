use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backend produced a candidate.
///
/// Ordering is the fixed tie-break priority: Vector > Graph > Keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Dense vector similarity search.
    Vector,
    /// Entity-graph relationship traversal.
    Graph,
    /// Lexical/keyword search.
    Keyword,
}

impl Origin {
    /// Tie-break priority: lower is preferred.
    pub fn priority(self) -> u8 {
        match self {
            Origin::Vector => 0,
            Origin::Graph => 1,
            Origin::Keyword => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Origin::Vector => "vector",
            Origin::Graph => "graph",
            Origin::Keyword => "keyword",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
