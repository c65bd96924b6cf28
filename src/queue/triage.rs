//! Symptom-to-specialty classification
//!
//! A static lookup table drives intake routing: the first submitted
//! symptom found in the table decides the specialty, and anything else
//! falls back to the general physician queue. The rule is deterministic
//! so repeat submissions classify identically.

use crate::queue::specialty::Specialty;

/// Symptoms offered on the intake form, in display order
pub const SYMPTOMS: &[&str] = &[
    "Chest Pain",
    "Shortness of Breath",
    "Headache",
    "Dizziness",
    "Fever",
    "Cough",
];

/// Fallback when no submitted symptom matches the table
pub const DEFAULT_SPECIALTY: Specialty = Specialty::GeneralPhysician;

const SYMPTOM_MAP: &[(&str, Specialty)] = &[
    ("Chest Pain", Specialty::Cardiology),
    ("Shortness of Breath", Specialty::Cardiology),
    ("Headache", Specialty::Neurology),
    ("Dizziness", Specialty::Neurology),
    ("Fever", Specialty::GeneralPhysician),
    ("Cough", Specialty::GeneralPhysician),
];

/// Assign a specialty from the submitted symptom list
pub fn assign_specialty<S: AsRef<str>>(symptoms: &[S]) -> Specialty {
    for symptom in symptoms {
        if let Some((_, specialty)) = SYMPTOM_MAP
            .iter()
            .find(|(name, _)| *name == symptom.as_ref())
        {
            return *specialty;
        }
    }
    DEFAULT_SPECIALTY
}
