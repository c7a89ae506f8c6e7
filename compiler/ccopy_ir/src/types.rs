//! Classification-relevant view of a field's declared type.
//!
//! The declaration source computes `TypeFlags` once per field; the core only
//! ever queries them. Flags are not enforced to be exclusive here. The
//! classifier applies them in a fixed priority order instead.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Type category flags consulted by the field classifier.
    ///
    /// An empty set means a scalar or otherwise unclassified type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// A union type.
        const IS_UNION = 1 << 0;
        /// An enumeration (scoped or unscoped).
        const IS_ENUM = 1 << 1;
        /// A pointer, including pointers to functions.
        const IS_POINTER = 1 << 2;
        /// A class or struct (aggregate) type held by value.
        const IS_RECORD = 1 << 3;
    }
}

/// A field's declared type: its source spelling plus category flags.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    spelling: String,
    flags: TypeFlags,
}

impl TypeDescriptor {
    pub fn new(spelling: impl Into<String>, flags: TypeFlags) -> Self {
        TypeDescriptor {
            spelling: spelling.into(),
            flags,
        }
    }

    /// A type with no category flags (`int`, `double`, references, arrays).
    pub fn scalar(spelling: impl Into<String>) -> Self {
        Self::new(spelling, TypeFlags::empty())
    }

    pub fn record(spelling: impl Into<String>) -> Self {
        Self::new(spelling, TypeFlags::IS_RECORD)
    }

    pub fn enumeration(spelling: impl Into<String>) -> Self {
        Self::new(spelling, TypeFlags::IS_ENUM)
    }

    pub fn union(spelling: impl Into<String>) -> Self {
        Self::new(spelling, TypeFlags::IS_UNION)
    }

    pub fn pointer(spelling: impl Into<String>) -> Self {
        Self::new(spelling, TypeFlags::IS_POINTER)
    }

    /// The type as written in the source, e.g. `std::string` or `Node*`.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    #[inline]
    pub fn is_union(&self) -> bool {
        self.flags.contains(TypeFlags::IS_UNION)
    }

    #[inline]
    pub fn is_enumeration(&self) -> bool {
        self.flags.contains(TypeFlags::IS_ENUM)
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.flags.contains(TypeFlags::IS_POINTER)
    }

    #[inline]
    pub fn is_record(&self) -> bool {
        self.flags.contains(TypeFlags::IS_RECORD)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling)
    }
}
