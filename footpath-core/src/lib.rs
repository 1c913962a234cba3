//! Edge model of a pedestrian route graph spanning indoor and outdoor areas.
//!
//! Edges carry the attributes a pathfinder needs to compute shortest,
//! accessible or preference-weighted routes: effective length, bearing,
//! wheelchair suitability, staircase and elevator information, floor level
//! and surface type.

pub mod enrichment;
mod error;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod validation;

pub use error::Error;
pub use petgraph::graph::NodeIndex;

pub use enrichment::{EdgeSurvey, apply_surveys, read_surveys};
pub use model::{AccessType, GraphEdge, LEVEL_UNSET, StaircaseInfo};
pub use routing::{RoutingPreference, edge_cost};
pub use validation::{Inconsistency, ValidationReport, validate_edges};
