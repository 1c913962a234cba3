use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hashbrown::HashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::model::{AccessType, GraphEdge};

/// Surveyed attributes of a single edge.
///
/// The edge is identified by its endpoint pair in either order.
/// Every attribute is optional; missing ones are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSurvey {
    pub node0: usize,
    pub node1: usize,
    pub stairs: Option<bool>,
    pub elevator: Option<bool>,
    /// Legacy step encoding: `>0` counted, `0` none, `-1` unknown, `-2` elevator
    pub steps: Option<i32>,
    /// Legacy wheelchair code
    pub wheelchair: Option<i16>,
    pub level: Option<f32>,
    pub indoor: Option<bool>,
    pub wall_path: Option<bool>,
    pub walk_path: Option<bool>,
    /// Raw geometric length, scaled like any other assigned length
    pub length: Option<f64>,
}

impl EdgeSurvey {
    fn key(&self) -> (usize, usize) {
        sorted_pair(self.node0, self.node1)
    }
}

fn sorted_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

impl GraphEdge {
    /// Applies surveyed attributes.
    ///
    /// Path type goes before length, so a surveyed walk path gets its length
    /// scaled. Steps go after the wheelchair code, so a counted staircase
    /// always ends up not accessible.
    pub fn apply_survey(&mut self, survey: &EdgeSurvey) {
        if let Some(wall_path) = survey.wall_path {
            self.set_wall_path(wall_path);
        }
        if let Some(walk_path) = survey.walk_path {
            self.set_walk_path(walk_path);
        }
        if let Some(code) = survey.wheelchair {
            self.set_wheelchair(AccessType::from_code(code));
        }
        if let Some(stairs) = survey.stairs {
            self.set_stairs(stairs);
        }
        if let Some(elevator) = survey.elevator {
            self.set_elevator(elevator);
        }
        if let Some(steps) = survey.steps {
            self.set_steps(steps);
        }
        if let Some(level) = survey.level {
            self.set_level(level);
        }
        if let Some(indoor) = survey.indoor {
            self.set_indoor(indoor);
        }
        if let Some(length) = survey.length {
            self.set_length(length);
        }
    }
}

/// Reads a JSON array of edge surveys
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid survey JSON
pub fn read_surveys(path: &Path) -> Result<Vec<EdgeSurvey>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;

    let surveys: Vec<EdgeSurvey> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        Error::InvalidData(format!("Malformed survey file '{}': {}", path.display(), e))
    })?;

    info!("Read {} edge surveys from {}", surveys.len(), path.display());
    Ok(surveys)
}

/// Applies each survey to the edge with the same endpoints.
/// Returns the number of surveys that matched an edge.
pub fn apply_surveys(edges: &mut [GraphEdge], surveys: &[EdgeSurvey]) -> usize {
    let index: HashMap<(usize, usize), usize> = edges
        .iter()
        .enumerate()
        .filter_map(|(idx, edge)| {
            let (a, b) = edge.endpoints()?;
            Some((sorted_pair(a.index(), b.index()), idx))
        })
        .collect();

    let mut applied = 0;
    for survey in surveys {
        if let Some(&idx) = index.get(&survey.key()) {
            edges[idx].apply_survey(survey);
            applied += 1;
        } else {
            warn!(
                "Survey for edge {} - {} does not match any edge in the graph",
                survey.node0, survey.node1
            );
        }
    }

    if applied < surveys.len() {
        warn!(
            "{} of {} surveys could not be applied",
            surveys.len() - applied,
            surveys.len()
        );
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StaircaseInfo;
    use petgraph::graph::NodeIndex;

    fn edge(a: usize, b: usize) -> GraphEdge {
        GraphEdge::new(
            NodeIndex::new(a),
            NodeIndex::new(b),
            10.0,
            0.0,
            AccessType::Accessible,
            0.0,
            false,
        )
    }

    #[test]
    fn empty_survey_changes_nothing() {
        let mut edge = edge(0, 1);
        edge.apply_survey(&EdgeSurvey::default());
        assert_eq!(edge.length(), 10.0);
        assert_eq!(edge.wheelchair(), AccessType::Accessible);
        assert_eq!(edge.level(), 0.0);
        assert!(!edge.is_stairs());
    }

    #[test]
    fn steps_override_surveyed_wheelchair_code() {
        let mut edge = edge(0, 1);
        edge.apply_survey(&EdgeSurvey {
            stairs: Some(true),
            steps: Some(8),
            wheelchair: Some(1),
            ..Default::default()
        });
        assert!(edge.is_stairs());
        assert_eq!(edge.staircase(), StaircaseInfo::Counted(8));
        assert_eq!(edge.wheelchair(), AccessType::NotAccessible);
    }

    #[test]
    fn surveyed_walk_path_length_is_scaled() {
        let mut edge = edge(0, 1);
        edge.apply_survey(&EdgeSurvey {
            walk_path: Some(true),
            length: Some(12.5),
            indoor: Some(true),
            level: Some(3.0),
            ..Default::default()
        });
        assert_eq!(edge.length(), 25.0);
        assert!(edge.is_indoor());
        assert_eq!(edge.level(), 3.0);
    }

    #[test]
    fn surveys_match_edges_in_either_direction() {
        let mut edges = vec![edge(0, 1), edge(1, 2)];
        let surveys = vec![
            EdgeSurvey {
                node0: 2,
                node1: 1,
                elevator: Some(true),
                steps: Some(-2),
                ..Default::default()
            },
            EdgeSurvey {
                node0: 5,
                node1: 6,
                stairs: Some(true),
                ..Default::default()
            },
        ];

        assert_eq!(apply_surveys(&mut edges, &surveys), 1);
        assert!(!edges[0].is_elevator());
        assert!(edges[1].is_elevator());
        assert_eq!(edges[1].staircase(), StaircaseInfo::ViaElevator);
    }

    #[test]
    fn reads_partial_records() {
        let path =
            std::env::temp_dir().join(format!("footpath-surveys-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"node0": 0, "node1": 1, "steps": 14, "stairs": true},
                {"node0": 1, "node1": 2, "wall_path": true}]"#,
        )
        .unwrap();

        let surveys = read_surveys(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(surveys.len(), 2);
        assert_eq!(surveys[0].steps, Some(14));
        assert_eq!(surveys[0].wheelchair, None);
        assert_eq!(surveys[1].wall_path, Some(true));
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let path = std::env::temp_dir().join(format!("footpath-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let result = read_surveys(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_surveys(Path::new("/nonexistent/footpath/surveys.json"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
