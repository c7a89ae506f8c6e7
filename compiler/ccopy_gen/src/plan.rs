//! The generate-or-skip decision.

use ccopy_ir::GroupPartition;

/// Fewest copy groups for which a concurrent copy constructor pays off.
pub const MIN_CONCURRENT_GROUPS: usize = 2;

/// Whether `partition` warrants a generated concurrent copy constructor.
///
/// With a single group (or none) the compiler's implicit copy constructor
/// already does the same work sequentially.
#[inline]
pub fn should_generate_concurrent_body(partition: &GroupPartition) -> bool {
    partition.len() >= MIN_CONCURRENT_GROUPS
}
