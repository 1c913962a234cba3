//! Route graph edge with geometric, accessibility and structural attributes

use std::fmt;
use std::hash::{Hash, Hasher};

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::accessibility::{AccessType, StaircaseInfo};

/// Level value of an edge that has not been assigned a floor yet
pub const LEVEL_UNSET: f32 = f32::MAX;

/// Cost multiplier applied by [`GraphEdge::set_length`] to walk paths
pub const WALK_PATH_FACTOR: f64 = 2.0;

/// Undirected connection between two nodes of the route graph.
///
/// Endpoints are indices into the node arena owned by the containing graph.
/// The bearing is measured from `node0` towards `node1`. The stored length is
/// the effective routing cost, which may exceed the geometric distance.
///
/// Two edges are equal when they connect the same pair of nodes, in either
/// order. No other attribute takes part in the comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    node0: Option<NodeIndex>,
    node1: Option<NodeIndex>,
    length: f64,
    bearing: f64,
    wheelchair: AccessType,
    staircase: StaircaseInfo,
    is_stairs: bool,
    is_elevator: bool,
    wall_path: bool,
    walk_path: bool,
    level: f32,
    is_indoor: bool,
}

impl Default for GraphEdge {
    fn default() -> Self {
        GraphEdge {
            node0: None,
            node1: None,
            length: 0.0,
            bearing: 0.0,
            wheelchair: AccessType::Accessible,
            staircase: StaircaseInfo::None,
            is_stairs: false,
            is_elevator: false,
            wall_path: false,
            walk_path: false,
            level: LEVEL_UNSET,
            is_indoor: false,
        }
    }
}

impl GraphEdge {
    /// Edge without endpoints, to be completed by the graph builder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a fully parameterized edge.
    ///
    /// `length` is stored as given: the walk path rule only applies
    /// through [`GraphEdge::set_length`].
    pub fn new(
        node0: NodeIndex,
        node1: NodeIndex,
        length: f64,
        bearing: f64,
        wheelchair: AccessType,
        level: f32,
        is_indoor: bool,
    ) -> Self {
        GraphEdge {
            node0: Some(node0),
            node1: Some(node1),
            length,
            bearing,
            wheelchair,
            level,
            is_indoor,
            ..Self::default()
        }
    }

    pub fn node0(&self) -> Option<NodeIndex> {
        self.node0
    }

    pub fn node1(&self) -> Option<NodeIndex> {
        self.node1
    }

    /// Both endpoints, if the edge is complete
    pub fn endpoints(&self) -> Option<(NodeIndex, NodeIndex)> {
        Some((self.node0?, self.node1?))
    }

    /// Effective length used as routing cost
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Compass direction from `node0` to `node1`
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn wheelchair(&self) -> AccessType {
        self.wheelchair
    }

    pub fn staircase(&self) -> StaircaseInfo {
        self.staircase
    }

    /// Step information in the legacy integer encoding
    pub fn steps(&self) -> i32 {
        self.staircase.steps()
    }

    pub fn is_stairs(&self) -> bool {
        self.is_stairs
    }

    pub fn is_elevator(&self) -> bool {
        self.is_elevator
    }

    pub fn is_wall_path(&self) -> bool {
        self.wall_path
    }

    pub fn is_walk_path(&self) -> bool {
        self.walk_path
    }

    /// Floor level, [`LEVEL_UNSET`] until assigned
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn has_level(&self) -> bool {
        self.level != LEVEL_UNSET
    }

    pub fn is_indoor(&self) -> bool {
        self.is_indoor
    }

    pub fn set_node0(&mut self, node: NodeIndex) {
        self.node0 = Some(node);
    }

    pub fn set_node1(&mut self, node: NodeIndex) {
        self.node1 = Some(node);
    }

    /// Stores a raw geometric length as routing cost.
    ///
    /// Walk paths cost [`WALK_PATH_FACTOR`] times their length. The flag is read
    /// at call time, so it has to be set before the length for the factor to apply.
    pub fn set_length(&mut self, length: f64) {
        self.length = if self.walk_path {
            length * WALK_PATH_FACTOR
        } else {
            length
        };
    }

    pub fn set_bearing(&mut self, bearing: f64) {
        self.bearing = bearing;
    }

    pub fn set_wheelchair(&mut self, wheelchair: AccessType) {
        self.wheelchair = wheelchair;
    }

    /// Replaces the step information.
    /// A counted staircase is never wheelchair accessible; a count of zero means no steps.
    pub fn set_staircase(&mut self, staircase: StaircaseInfo) {
        self.staircase = match staircase {
            StaircaseInfo::Counted(n) => StaircaseInfo::counted(n),
            other => other,
        };
        if matches!(self.staircase, StaircaseInfo::Counted(_)) {
            self.wheelchair = AccessType::NotAccessible;
        }
    }

    /// [`GraphEdge::set_staircase`] taking the legacy step encoding
    pub fn set_steps(&mut self, steps: i32) {
        self.set_staircase(StaircaseInfo::from_steps(steps));
    }

    pub fn set_stairs(&mut self, is_stairs: bool) {
        self.is_stairs = is_stairs;
    }

    pub fn set_elevator(&mut self, is_elevator: bool) {
        self.is_elevator = is_elevator;
    }

    pub fn set_wall_path(&mut self, wall_path: bool) {
        self.wall_path = wall_path;
    }

    pub fn set_walk_path(&mut self, walk_path: bool) {
        self.walk_path = walk_path;
    }

    pub fn set_level(&mut self, level: f32) {
        self.level = level;
    }

    pub fn set_indoor(&mut self, is_indoor: bool) {
        self.is_indoor = is_indoor;
    }

    /// Marks the edge as a staircase with `steps` steps and revokes wheelchair access.
    /// Zero steps records a staircase of unknown length.
    pub fn declare_staircase(&mut self, steps: u16) {
        self.is_stairs = true;
        self.staircase = match StaircaseInfo::counted(u32::from(steps)) {
            StaircaseInfo::None => StaircaseInfo::Unknown,
            counted => counted,
        };
        self.wheelchair = AccessType::NotAccessible;
    }

    /// Marks the edge as served by an elevator.
    ///
    /// Leaves the stairs flag and wheelchair access alone: an edge first
    /// declared as a staircase stays inaccessible until both are reset, and
    /// [`GraphEdge::inconsistencies`] reports the leftover stairs flag.
    pub fn declare_elevator(&mut self) {
        self.is_elevator = true;
        self.staircase = StaircaseInfo::ViaElevator;
    }

    /// Whether `node` is one of the endpoints
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.node0 == Some(node) || self.node1 == Some(node)
    }

    /// Endpoint on the other side of `node`
    pub fn opposite(&self, node: NodeIndex) -> Option<NodeIndex> {
        if self.node0 == Some(node) {
            self.node1
        } else if self.node1 == Some(node) {
            self.node0
        } else {
            None
        }
    }

    fn sorted_endpoints(&self) -> (Option<NodeIndex>, Option<NodeIndex>) {
        if self.node0 <= self.node1 {
            (self.node0, self.node1)
        } else {
            (self.node1, self.node0)
        }
    }
}

impl PartialEq for GraphEdge {
    fn eq(&self, other: &Self) -> bool {
        (self.node0 == other.node0 && self.node1 == other.node1)
            || (self.node0 == other.node1 && self.node1 == other.node0)
    }
}

impl Eq for GraphEdge {}

impl Hash for GraphEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_endpoints().hash(state);
    }
}

struct Endpoint(Option<NodeIndex>);

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(f, "{}", node.index()),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Edge({} to {}):",
            Endpoint(self.node0),
            Endpoint(self.node1)
        )?;
        writeln!(f, "    Length: {}", self.length)?;
        writeln!(f, "    Bearing: {}", self.bearing)?;
        if self.is_stairs {
            writeln!(f, "    Staircase with: {} steps", self.steps())?;
        }
        if self.is_elevator {
            writeln!(f, "    Elevator: yes")?;
        }
        if self.has_level() {
            write!(f, "    Level: {}", self.level)
        } else {
            write!(f, "    Level: unset")
        }
    }
}
