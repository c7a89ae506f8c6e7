//! Field partitioning into copy groups.

use ccopy_ir::{Field, GroupPartition};
use tracing::trace;

use crate::classify;

/// Assign every field to the copy group its type classifies into.
///
/// Fields are visited in declaration order, so groups appear in the order
/// their label is first produced and each group lists its fields in
/// declaration order. No fields means no groups.
pub fn partition(fields: &[Field]) -> GroupPartition {
    let mut partition = GroupPartition::new();
    for field in fields {
        let label = classify(&field.ty);
        trace!(field = %field.name, ty = %field.ty, group = %label, "classified field");
        partition.insert(label, &field.name);
    }
    partition
}
