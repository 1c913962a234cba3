use serde::{Deserialize, Serialize};

use crate::model::{AccessType, GraphEdge};

/// Cost multiplier for staircases when stairs should be avoided
pub const STAIRS_PENALTY: f64 = 4.0;
/// Cost multiplier for outdoor edges when indoor routes are preferred
pub const OUTDOOR_PENALTY: f64 = 1.5;

/// Routing preference selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoutingPreference {
    /// Plain effective length
    #[default]
    Shortest,
    /// Only wheelchair accessible edges, no staircases
    Accessible,
    /// Staircases are allowed but penalized
    AvoidStairs,
    /// Outdoor edges are penalized
    PreferIndoor,
}

/// Routing cost of `edge` under `preference`.
/// `None` means the edge must not be used.
pub fn edge_cost(edge: &GraphEdge, preference: RoutingPreference) -> Option<f64> {
    let length = edge.length();
    if !length.is_finite() || length < 0.0 {
        return None;
    }

    match preference {
        RoutingPreference::Shortest => Some(length),
        RoutingPreference::Accessible => {
            if edge.is_stairs() || edge.wheelchair() == AccessType::NotAccessible {
                None
            } else {
                Some(length)
            }
        }
        RoutingPreference::AvoidStairs => {
            if edge.is_stairs() {
                Some(length * STAIRS_PENALTY)
            } else {
                Some(length)
            }
        }
        RoutingPreference::PreferIndoor => {
            if edge.is_indoor() {
                Some(length)
            } else {
                Some(length * OUTDOOR_PENALTY)
            }
        }
    }
}

impl GraphEdge {
    /// Whether the pathfinder may use this edge under `preference`
    pub fn is_traversable(&self, preference: RoutingPreference) -> bool {
        edge_cost(self, preference).is_some()
    }
}
