//! Refinement of edge attributes after the graph has been built,
//! e.g. from building accessibility surveys.

mod survey;

pub use survey::{EdgeSurvey, apply_surveys, read_surveys};
