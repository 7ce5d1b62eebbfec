//! Placement side of a floating box relative to its anchor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::placement::PlacementError;

/// The side of the anchor a floating box is placed on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Right,
    Left,
}

impl Side {
    /// Auto-selection order; earlier entries win ties
    pub const PREFERENCE: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];

    /// Attribute value and CSS class for this side
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Right => "right",
            Side::Left => "left",
        }
    }

    /// Class attached to the floating box so the arrow can be styled per side
    pub fn css_class(&self) -> &'static str {
        self.as_str()
    }

    /// True for sides that place the box beside the anchor
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Parse an optional attribute value into an explicit side request.
    ///
    /// Absent and empty values mean "choose automatically" and yield `None`.
    pub fn parse_request(raw: Option<&str>) -> Result<Option<Side>, PlacementError> {
        match raw {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl FromStr for Side {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "right" => Ok(Side::Right),
            "left" => Ok(Side::Left),
            other => Err(PlacementError::InvalidConfiguration {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sides() {
        for side in Side::PREFERENCE {
            assert_eq!(side.as_str().parse::<Side>().unwrap(), side);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Top".parse::<Side>().is_err());
    }

    #[test]
    fn test_parse_request_empty_means_auto() {
        assert_eq!(Side::parse_request(None).unwrap(), None);
        assert_eq!(Side::parse_request(Some("")).unwrap(), None);
        assert_eq!(Side::parse_request(Some("left")).unwrap(), Some(Side::Left));
    }

    #[test]
    fn test_parse_request_rejects_unknown() {
        let err = Side::parse_request(Some("diagonal")).unwrap_err();
        assert_eq!(
            err,
            PlacementError::InvalidConfiguration {
                value: "diagonal".to_string()
            }
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
        let side: Side = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(side, Side::Bottom);
    }
}
