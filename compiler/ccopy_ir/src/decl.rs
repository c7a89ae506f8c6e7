//! Class and field descriptors supplied by a declaration source.

use super::{Span, TypeDescriptor};

/// A non-static data member of a class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    /// Member name, unique within its class.
    pub name: String,
    pub ty: TypeDescriptor,
    /// Location of the member's name in the source.
    pub span: Span,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Field {
            name: name.into(),
            ty,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Everything the core needs to know about one class declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassDescriptor {
    pub name: String,
    /// Data members in declaration order.
    pub fields: Vec<Field>,
    /// Direct base class spellings, access and `virtual` specifiers removed.
    pub bases: Vec<String>,
    pub has_user_copy_constructor: bool,
    /// `false` for forward declarations.
    pub is_complete_definition: bool,
    /// Byte offset where generated text is inserted (the closing brace).
    pub insertion_offset: u32,
    pub span: Span,
}

impl ClassDescriptor {
    /// A complete class definition with no fields or bases yet.
    pub fn definition(name: impl Into<String>, insertion_offset: u32) -> Self {
        ClassDescriptor {
            name: name.into(),
            fields: Vec::new(),
            bases: Vec::new(),
            has_user_copy_constructor: false,
            is_complete_definition: true,
            insertion_offset,
            span: Span::DUMMY,
        }
    }

    /// A forward declaration (`class Name;`).
    pub fn forward(name: impl Into<String>, span: Span) -> Self {
        ClassDescriptor {
            name: name.into(),
            fields: Vec::new(),
            bases: Vec::new(),
            has_user_copy_constructor: false,
            is_complete_definition: false,
            insertion_offset: span.end,
            span,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    #[must_use]
    pub fn with_user_copy_constructor(mut self) -> Self {
        self.has_user_copy_constructor = true;
        self
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
