//! Collaborator seams.
//!
//! The core never parses or writes text itself. It pulls class descriptors
//! from a `DeclarationSource` and pushes generated text into a `TextEmitter`.

use super::ClassDescriptor;

/// Supplies the class declarations of one source unit.
pub trait DeclarationSource {
    /// Every class declaration, in declaration order.
    fn class_declarations(&self) -> Vec<ClassDescriptor>;
}

/// Receives generated text at source offsets and persists the result.
pub trait TextEmitter {
    type Error;

    /// Insert `text` at `offset`, after anything already inserted there.
    fn insert_text_after(&mut self, offset: u32, text: &str);

    /// Called once after every class has been visited.
    fn finalize(&mut self) -> Result<(), Self::Error>;
}
