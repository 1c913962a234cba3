//! Accessibility attributes of an edge: wheelchair suitability and staircase information

use serde::{Deserialize, Serialize};

/// Wheelchair suitability of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessType {
    /// Passable by wheelchair
    #[default]
    Accessible,
    /// Not passable by wheelchair (stairs, steep ramps, ...)
    NotAccessible,
    /// No information available
    Unknown,
}

impl AccessType {
    /// Decodes the legacy signed wheelchair code.
    /// Positive values are accessible, negative ones are not, zero is unspecified.
    pub fn from_code(code: i16) -> Self {
        match code {
            c if c > 0 => AccessType::Accessible,
            c if c < 0 => AccessType::NotAccessible,
            _ => AccessType::Unknown,
        }
    }

    /// Legacy signed wheelchair code (`1`, `-1` or `0`)
    pub fn code(self) -> i16 {
        match self {
            AccessType::Accessible => 1,
            AccessType::NotAccessible => -1,
            AccessType::Unknown => 0,
        }
    }

    pub fn is_accessible(self) -> bool {
        self == AccessType::Accessible
    }
}

/// What is known about steps along an edge.
///
/// Serialized in the legacy integer encoding, so decoding always goes
/// through [`StaircaseInfo::from_steps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum StaircaseInfo {
    /// No steps
    #[default]
    None,
    /// Exact number of steps, always greater than zero
    Counted(u32),
    /// Steps present, count unknown
    Unknown,
    /// An elevator replaces the steps
    ViaElevator,
}

impl StaircaseInfo {
    /// Legacy code for [`StaircaseInfo::Unknown`]
    pub const UNKNOWN_STEPS: i32 = -1;
    /// Legacy code for [`StaircaseInfo::ViaElevator`]
    pub const ELEVATOR_STEPS: i32 = -2;

    /// Decodes the legacy step count.
    ///
    /// `>0` is an exact count, `0` means no steps, `-2` an elevator. Every other
    /// negative value is treated as an unknown count and reads back as `-1`.
    pub fn from_steps(steps: i32) -> Self {
        match steps {
            0 => StaircaseInfo::None,
            Self::ELEVATOR_STEPS => StaircaseInfo::ViaElevator,
            n if n > 0 => StaircaseInfo::Counted(n.unsigned_abs()),
            _ => StaircaseInfo::Unknown,
        }
    }

    /// Exact step count; zero collapses to [`StaircaseInfo::None`]
    pub fn counted(steps: u32) -> Self {
        if steps == 0 {
            StaircaseInfo::None
        } else {
            StaircaseInfo::Counted(steps)
        }
    }

    /// Legacy step count as understood by older graph exports.
    /// Counts above `i32::MAX` saturate.
    pub fn steps(self) -> i32 {
        match self {
            StaircaseInfo::None => 0,
            StaircaseInfo::Counted(n) => i32::try_from(n).unwrap_or(i32::MAX),
            StaircaseInfo::Unknown => Self::UNKNOWN_STEPS,
            StaircaseInfo::ViaElevator => Self::ELEVATOR_STEPS,
        }
    }

    /// Number of counted steps, if any
    pub fn count(self) -> Option<u32> {
        match self {
            StaircaseInfo::Counted(n) => Some(n),
            _ => None,
        }
    }
}

impl From<i32> for StaircaseInfo {
    fn from(steps: i32) -> Self {
        StaircaseInfo::from_steps(steps)
    }
}

impl From<StaircaseInfo> for i32 {
    fn from(staircase: StaircaseInfo) -> Self {
        staircase.steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheelchair_codes() {
        assert_eq!(AccessType::from_code(1), AccessType::Accessible);
        assert_eq!(AccessType::from_code(3), AccessType::Accessible);
        assert_eq!(AccessType::from_code(-1), AccessType::NotAccessible);
        assert_eq!(AccessType::from_code(-7), AccessType::NotAccessible);
        assert_eq!(AccessType::from_code(0), AccessType::Unknown);
        assert_eq!(AccessType::NotAccessible.code(), -1);
        assert_eq!(AccessType::default(), AccessType::Accessible);
    }

    #[test]
    fn legacy_step_codes() {
        assert_eq!(StaircaseInfo::from_steps(0), StaircaseInfo::None);
        assert_eq!(StaircaseInfo::from_steps(12), StaircaseInfo::Counted(12));
        assert_eq!(StaircaseInfo::from_steps(-1), StaircaseInfo::Unknown);
        assert_eq!(StaircaseInfo::from_steps(-2), StaircaseInfo::ViaElevator);
        assert_eq!(StaircaseInfo::from_steps(-9), StaircaseInfo::Unknown);

        assert_eq!(StaircaseInfo::Counted(12).steps(), 12);
        assert_eq!(StaircaseInfo::ViaElevator.steps(), -2);
        assert_eq!(StaircaseInfo::Unknown.steps(), -1);
    }

    #[test]
    fn zero_count_is_no_steps() {
        assert_eq!(StaircaseInfo::counted(0), StaircaseInfo::None);
        assert_eq!(StaircaseInfo::counted(4).count(), Some(4));
        assert_eq!(StaircaseInfo::ViaElevator.count(), None);
    }

    #[test]
    fn decoding_normalizes_zero_count() {
        let decoded: StaircaseInfo = serde_json::from_str("0").unwrap();
        assert_eq!(decoded, StaircaseInfo::None);
        assert_eq!(decoded.count(), None);

        let encoded = serde_json::to_string(&StaircaseInfo::Counted(0)).unwrap();
        assert_eq!(encoded, "0");
        let decoded: StaircaseInfo = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, StaircaseInfo::None);
    }

    #[test]
    fn legacy_encoding_on_the_wire() {
        assert_eq!(serde_json::to_string(&StaircaseInfo::Counted(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&StaircaseInfo::ViaElevator).unwrap(), "-2");
        let decoded: StaircaseInfo = serde_json::from_str("-5").unwrap();
        assert_eq!(decoded, StaircaseInfo::Unknown);
        assert!(serde_json::from_str::<StaircaseInfo>(r#"{"Counted":0}"#).is_err());
    }
}
