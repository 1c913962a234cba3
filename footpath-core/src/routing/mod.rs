//! Contract between route graph edges and the pathfinder.
//!
//! The pathfinder itself lives outside this crate. It asks [`edge_cost`]
//! how expensive an edge is under the routing preference selected by the user.

mod preference;

pub use preference::{OUTDOOR_PENALTY, RoutingPreference, STAIRS_PENALTY, edge_cost};
