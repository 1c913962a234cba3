//! Consistency checks for edge attributes.
//!
//! Edge setters accept every value. This pass reports combinations that the
//! enrichment data should not have produced, without rejecting the edge.

use hashbrown::HashMap;
use log::{debug, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::Error;
use crate::model::{AccessType, GraphEdge, StaircaseInfo};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Inconsistency {
    #[error("edge has an unset endpoint")]
    MissingEndpoint,
    #[error("edge connects a node to itself")]
    SelfLoop,
    #[error("invalid length {0}")]
    InvalidLength(f64),
    #[error("invalid bearing {0}")]
    InvalidBearing(f64),
    #[error("elevator edge has {0} counted steps")]
    ElevatorWithSteps(u32),
    #[error("staircase is marked wheelchair accessible")]
    AccessibleStairs,
    #[error("steps are replaced by an elevator, but the edge is not an elevator")]
    ElevatorStepsWithoutElevator,
    #[error("steps are replaced by an elevator, but the edge is still marked as stairs")]
    ElevatorStepsOnStairs,
    #[error("{0} counted steps are marked wheelchair accessible")]
    AccessibleCountedSteps(u32),
}

impl GraphEdge {
    /// Lists every suspicious attribute combination of this edge
    pub fn inconsistencies(&self) -> Vec<Inconsistency> {
        let mut found = Vec::new();

        match self.endpoints() {
            None => found.push(Inconsistency::MissingEndpoint),
            Some((a, b)) if a == b => found.push(Inconsistency::SelfLoop),
            Some(_) => {}
        }

        let length = self.length();
        if !length.is_finite() || length < 0.0 {
            found.push(Inconsistency::InvalidLength(length));
        }
        if !self.bearing().is_finite() {
            found.push(Inconsistency::InvalidBearing(self.bearing()));
        }

        match self.staircase() {
            StaircaseInfo::Counted(steps) if self.is_elevator() => {
                found.push(Inconsistency::ElevatorWithSteps(steps));
            }
            StaircaseInfo::ViaElevator if !self.is_elevator() => {
                found.push(Inconsistency::ElevatorStepsWithoutElevator);
            }
            _ => {}
        }

        if self.is_stairs() && self.staircase() == StaircaseInfo::ViaElevator {
            found.push(Inconsistency::ElevatorStepsOnStairs);
        }

        // Deserialized edges do not pass through the steps/wheelchair coupling
        if self.wheelchair() == AccessType::Accessible {
            if self.is_stairs() {
                found.push(Inconsistency::AccessibleStairs);
            }
            if let Some(steps) = self.staircase().count() {
                found.push(Inconsistency::AccessibleCountedSteps(steps));
            }
        }

        found
    }

    /// Fails with the first inconsistency found
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentEdge`] if any check in
    /// [`GraphEdge::inconsistencies`] does not pass
    pub fn validate(&self) -> Result<(), Error> {
        match self.inconsistencies().into_iter().next() {
            Some(issue) => Err(Error::InconsistentEdge(issue)),
            None => Ok(()),
        }
    }
}

/// Outcome of [`validate_edges`]
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    /// Edge position and the issue found on it
    pub issues: Vec<(usize, Inconsistency)>,
    /// Pairs of positions holding the same undirected edge
    pub duplicates: Vec<(usize, usize)>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.duplicates.is_empty()
    }
}

/// Checks all edges of a graph and logs what was found.
/// Never fails: the report is left to the caller to act on.
pub fn validate_edges(edges: &[GraphEdge]) -> ValidationReport {
    let issues: Vec<(usize, Inconsistency)> = edges
        .par_iter()
        .enumerate()
        .flat_map_iter(|(idx, edge)| {
            edge.inconsistencies()
                .into_iter()
                .map(move |issue| (idx, issue))
        })
        .collect();

    let duplicates = find_duplicates(edges);

    for (idx, issue) in &issues {
        debug!("Edge #{idx}: {issue}");
    }
    for (first, second) in &duplicates {
        debug!("Edge #{second} duplicates edge #{first}");
    }

    if !issues.is_empty() || !duplicates.is_empty() {
        warn!(
            "{} of {} edges have inconsistent attributes, {} duplicate edges found",
            count_edges(&issues),
            edges.len(),
            duplicates.len()
        );
    }

    ValidationReport { issues, duplicates }
}

fn find_duplicates(edges: &[GraphEdge]) -> Vec<(usize, usize)> {
    let mut seen: HashMap<&GraphEdge, usize> = HashMap::with_capacity(edges.len());
    let mut duplicates = Vec::new();

    // Incomplete edges all compare equal and are reported as MissingEndpoint instead
    for (idx, edge) in edges.iter().enumerate() {
        if edge.endpoints().is_none() {
            continue;
        }
        match seen.entry(edge) {
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(idx);
            }
            hashbrown::hash_map::Entry::Occupied(entry) => {
                duplicates.push((*entry.get(), idx));
            }
        }
    }

    duplicates
}

fn count_edges(issues: &[(usize, Inconsistency)]) -> usize {
    let mut count = 0;
    let mut last = None;
    // issues are grouped by edge position
    for (idx, _) in issues {
        if last != Some(*idx) {
            count += 1;
            last = Some(*idx);
        }
    }
    count
}
