// Re-export key components
pub use crate::enrichment::{EdgeSurvey, apply_surveys, read_surveys};
pub use crate::model::{AccessType, GraphEdge, StaircaseInfo};
pub use crate::routing::{RoutingPreference, edge_cost};
pub use crate::validation::{Inconsistency, ValidationReport, validate_edges};

// Core types for the route graph
pub use crate::Error;
pub use crate::NodeIndex;
pub use crate::model::{LEVEL_UNSET, WALK_PATH_FACTOR};
