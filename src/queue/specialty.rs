//! The closed set of service specialties

use crate::queue::error::QueueError;
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Service categories, each owning exactly one intake queue
///
/// The set is closed: boundary input naming anything else is rejected with
/// [`QueueError::UnknownSpecialty`] before any queue state is touched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize,
)]
pub enum Specialty {
    #[strum(serialize = "Cardiology")]
    #[serde(rename = "Cardiology")]
    Cardiology,

    #[strum(serialize = "Neurology")]
    #[serde(rename = "Neurology")]
    Neurology,

    #[strum(serialize = "General Physician")]
    #[serde(rename = "General Physician")]
    GeneralPhysician,
}

impl Specialty {
    /// Parse a boundary-supplied specialty name against the closed set
    pub fn parse(name: &str) -> Result<Self, QueueError> {
        Self::from_str(name).map_err(|_| QueueError::UnknownSpecialty {
            name: name.to_string(),
        })
    }

    /// All specialties in declaration order (the specialty selection listing)
    pub fn all() -> Vec<Specialty> {
        Self::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_match_service_categories() {
        assert_eq!(Specialty::Cardiology.to_string(), "Cardiology");
        assert_eq!(Specialty::Neurology.to_string(), "Neurology");
        assert_eq!(Specialty::GeneralPhysician.to_string(), "General Physician");
    }

    #[test]
    fn test_parse_round_trips_every_specialty() {
        for specialty in Specialty::all() {
            assert_eq!(Specialty::parse(&specialty.to_string()).unwrap(), specialty);
        }
    }

    #[test]
    fn test_parse_rejects_names_outside_the_set() {
        match Specialty::parse("Dermatology") {
            Err(QueueError::UnknownSpecialty { name }) => assert_eq!(name, "Dermatology"),
            other => panic!("Expected UnknownSpecialty, got {other:?}"),
        }
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Specialty::GeneralPhysician).unwrap();
        assert_eq!(json, "\"General Physician\"");
    }
}
