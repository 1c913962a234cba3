//! Data model of the pedestrian route graph
//!
//! Contains the edge type consumed by the pathfinder and its accessibility attributes.

pub mod accessibility;
pub mod edge;

pub use accessibility::{AccessType, StaircaseInfo};
pub use edge::{GraphEdge, LEVEL_UNSET, WALK_PATH_FACTOR};
