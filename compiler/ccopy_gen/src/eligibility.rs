//! Per-class opt-in and safety gate.

use std::fmt;

use ccopy_ir::ClassDescriptor;

use crate::{InjectConfig, MarkerMatch};

/// Outcome of the eligibility check, with the first failing condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// The class declares its own copy constructor.
    UserCopyConstructor,
    /// Forward declaration, or a definition whose body never closed.
    IncompleteDefinition,
    /// None of the direct bases is the marker.
    MissingMarker { marker: String },
}

impl Eligibility {
    #[inline]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Eligible => f.write_str("eligible"),
            Eligibility::UserCopyConstructor => f.write_str("user-declared copy constructor found"),
            Eligibility::IncompleteDefinition => f.write_str("not a complete definition"),
            Eligibility::MissingMarker { marker } => write!(f, "no {marker} marker base"),
        }
    }
}

/// Check the three opt-in conditions in order and report the first failure.
///
/// Only direct bases are inspected for the marker.
pub fn check_eligibility(class: &ClassDescriptor, config: &InjectConfig) -> Eligibility {
    if class.has_user_copy_constructor {
        Eligibility::UserCopyConstructor
    } else if !class.is_complete_definition {
        Eligibility::IncompleteDefinition
    } else if !carries_marker(&class.bases, &config.marker, config.marker_match) {
        Eligibility::MissingMarker {
            marker: config.marker.clone(),
        }
    } else {
        Eligibility::Eligible
    }
}

#[inline]
pub fn is_eligible(class: &ClassDescriptor, config: &InjectConfig) -> bool {
    check_eligibility(class, config).is_eligible()
}

/// Whether any base in `bases` names `marker`.
///
/// A leading `::` is ignored on both sides. Template specializations never
/// match. See [`MarkerMatch`] for qualified bases.
pub fn carries_marker(bases: &[String], marker: &str, matching: MarkerMatch) -> bool {
    let marker = marker.trim().trim_start_matches("::");
    if marker.is_empty() {
        return false;
    }
    bases.iter().any(|base| base_matches(base, marker, matching))
}

fn base_matches(base: &str, marker: &str, matching: MarkerMatch) -> bool {
    let base = base.trim().trim_start_matches("::");
    if base == marker {
        return true;
    }
    matching == MarkerMatch::Suffix
        && !marker.contains("::")
        && base.rsplit("::").next() == Some(marker)
}

#[cfg(test)]
mod tests;
