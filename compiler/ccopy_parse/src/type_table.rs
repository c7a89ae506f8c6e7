//! Names declared in the source unit and what kind of type they denote.
//!
//! Lookups are by unqualified name: `ns::Color` and `Color` resolve the
//! same. Names nobody declared and that are not known scalars are assumed
//! to be class types from some header (`std::string`, `QVector<int>`).

use ccopy_ir::TypeFlags;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct TypeTable {
    declared: FxHashMap<String, TypeFlags>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as denoting a type with `flags`. Later declarations win,
    /// so a definition can refine an earlier elaborated mention.
    pub fn declare(&mut self, name: &str, flags: TypeFlags) {
        self.declared.insert(unqualified(name).to_owned(), flags);
    }

    /// Declare `name` only if it is not yet known.
    pub fn declare_if_absent(&mut self, name: &str, flags: TypeFlags) {
        self.declared
            .entry(unqualified(name).to_owned())
            .or_insert(flags);
    }

    pub fn lookup(&self, name: &str) -> Option<TypeFlags> {
        self.declared.get(unqualified(name)).copied()
    }

    /// Classify a (possibly qualified, possibly templated) type name.
    pub fn resolve(&self, name: &str) -> TypeFlags {
        if let Some(flags) = self.lookup(name) {
            return flags;
        }
        let simple = unqualified(name);
        if is_builtin_scalar(simple) || is_scalar_typedef(simple) {
            TypeFlags::empty()
        } else {
            TypeFlags::IS_RECORD
        }
    }
}

/// Last `::` segment of a name with template arguments removed.
pub fn unqualified(name: &str) -> &str {
    let without_args = name.split('<').next().unwrap_or(name);
    without_args
        .rsplit("::")
        .next()
        .unwrap_or(without_args)
        .trim()
}

/// Builtin type keywords. These lex as identifiers.
pub fn is_builtin_scalar(word: &str) -> bool {
    matches!(
        word,
        "void"
            | "bool"
            | "char"
            | "wchar_t"
            | "char8_t"
            | "char16_t"
            | "char32_t"
            | "short"
            | "int"
            | "long"
            | "signed"
            | "unsigned"
            | "float"
            | "double"
            | "auto"
            | "__int128"
    )
}

/// Standard typedefs that alias scalar types.
fn is_scalar_typedef(word: &str) -> bool {
    matches!(
        word,
        "size_t"
            | "ssize_t"
            | "ptrdiff_t"
            | "intptr_t"
            | "uintptr_t"
            | "intmax_t"
            | "uintmax_t"
            | "nullptr_t"
            | "byte"
            | "int8_t"
            | "int16_t"
            | "int32_t"
            | "int64_t"
            | "uint8_t"
            | "uint16_t"
            | "uint32_t"
            | "uint64_t"
            | "int_fast8_t"
            | "int_fast16_t"
            | "int_fast32_t"
            | "int_fast64_t"
            | "uint_fast8_t"
            | "uint_fast16_t"
            | "uint_fast32_t"
            | "uint_fast64_t"
            | "int_least8_t"
            | "int_least16_t"
            | "int_least32_t"
            | "int_least64_t"
            | "uint_least8_t"
            | "uint_least16_t"
            | "uint_least32_t"
            | "uint_least64_t"
            | "time_t"
            | "clock_t"
            | "off_t"
    )
}
