//! Type-safe axis vocabulary.
//!
//! Every demographic or behavioral dimension a respondent can be bucketed
//! over is one variant of [`Axis`]. UI selectors and catalog files name
//! axes as strings; they are parsed into this closed set at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One dimension over which respondents are bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Age band (`cage2`), ordinal.
    Age,
    /// Household income band (`q11`), ordinal.
    Income,
    /// Health conditions (`q3_*`), multi-valued.
    Health,
    /// Device ownership (`q1_*`), multi-valued.
    Device,
    /// Reasons for going online, multi-valued.
    Usage,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::Age,
        Axis::Income,
        Axis::Health,
        Axis::Device,
        Axis::Usage,
    ];

    /// Returns the canonical selector name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Age => "age",
            Axis::Income => "income",
            Axis::Health => "health",
            Axis::Device => "device",
            Axis::Usage => "usage",
        }
    }

    /// Human-readable axis title for chart labels.
    pub fn title(&self) -> &'static str {
        match self {
            Axis::Age => "Age group",
            Axis::Income => "Income band",
            Axis::Health => "Health issues",
            Axis::Device => "Device",
            Axis::Usage => "Usage reason",
        }
    }

    /// Ordinal axes have a fixed display order independent of the data.
    pub fn is_ordinal(&self) -> bool {
        matches!(self, Axis::Age | Axis::Income)
    }

    /// Lenient selector parsing for UI-supplied names.
    ///
    /// Accepts canonical names and the raw survey column selectors
    /// (`cage2`, `q11`). Anything else yields `None`.
    pub fn from_selector(value: &str) -> Option<Axis> {
        value.parse().ok()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();

        match normalized.as_str() {
            "age" | "cage2" => Ok(Axis::Age),
            "income" | "q11" => Ok(Axis::Income),
            "health" => Ok(Axis::Health),
            "device" => Ok(Axis::Device),
            "usage" => Ok(Axis::Usage),
            _ => Err(ModelError::UnknownAxis(s.to_string())),
        }
    }
}

/// Which multi-valued indicator set feeds the map and heatmap views.
///
/// Both sets are aggregated up front; switching mode never re-scans rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Device,
    Usage,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Device => "device",
            Mode::Usage => "usage",
        }
    }

    /// The indicator axis this mode exposes.
    pub fn indicator_axis(&self) -> Axis {
        match self {
            Mode::Device => Axis::Device,
            Mode::Usage => Axis::Usage,
        }
    }

    /// Whether `axis` is visible while this mode is active.
    ///
    /// Demographic axes are always visible; of the two indicator axes only
    /// the active one is.
    pub fn exposes(&self, axis: Axis) -> bool {
        match axis {
            Axis::Device | Axis::Usage => axis == self.indicator_axis(),
            Axis::Age | Axis::Income | Axis::Health => true,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "device" => Ok(Mode::Device),
            "usage" => Ok(Mode::Usage),
            _ => Err(ModelError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_column_selectors() {
        assert_eq!("age".parse::<Axis>(), Ok(Axis::Age));
        assert_eq!(" Income ".parse::<Axis>(), Ok(Axis::Income));
        assert_eq!("cage2".parse::<Axis>(), Ok(Axis::Age));
        assert_eq!("q11".parse::<Axis>(), Ok(Axis::Income));
        assert_eq!(
            "weight".parse::<Axis>(),
            Err(ModelError::UnknownAxis("weight".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
        }
    }

    #[test]
    fn selector_is_lenient() {
        assert_eq!(Axis::from_selector("health"), Some(Axis::Health));
        assert_eq!(Axis::from_selector("helth"), None);
    }

    #[test]
    fn mode_hides_the_other_indicator_axis() {
        assert!(Mode::Device.exposes(Axis::Device));
        assert!(!Mode::Device.exposes(Axis::Usage));
        assert!(Mode::Usage.exposes(Axis::Usage));
        assert!(Mode::Usage.exposes(Axis::Age));
    }
}
