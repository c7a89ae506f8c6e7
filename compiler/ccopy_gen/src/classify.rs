//! Field classification: which copy group a field's type belongs to.

use ccopy_ir::{GroupLabel, TypeDescriptor};

/// Map a field's declared type to its copy group.
///
/// First match wins: union, enumeration and pointer types stay in the
/// default group; record types held by value go to `c4_fields`; anything
/// else falls back to the default group.
pub fn classify(ty: &TypeDescriptor) -> GroupLabel {
    if ty.is_union() || ty.is_enumeration() || ty.is_pointer() {
        GroupLabel::DefaultGroup
    } else if ty.is_record() {
        GroupLabel::C4Fields
    } else {
        GroupLabel::DefaultGroup
    }
}
