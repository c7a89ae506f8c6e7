//! Class declaration scanner for C++ sources.
//!
//! Provides the concrete declaration source for the generator: it lexes a
//! source unit, finds every named class and struct declaration (including
//! nested ones), and describes each with its data members, direct bases,
//! copy-constructor status and the offset of its closing brace.
//!
//! This is deliberately not a C++ parser. Function bodies, templates and
//! initializers are stepped over with bracket matching; only the shapes
//! that matter for copy-constructor generation are understood.

mod cursor;
mod scanner;
mod type_table;

use ccopy_ir::{ClassDescriptor, DeclarationSource, TokenList};
use tracing::debug;

pub use cursor::Cursor;
pub use type_table::TypeTable;

/// Class declarations found in one source unit, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationUnit {
    classes: Vec<ClassDescriptor>,
}

impl TranslationUnit {
    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    /// First class declaration named `name`.
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl DeclarationSource for TranslationUnit {
    fn class_declarations(&self) -> Vec<ClassDescriptor> {
        self.classes.clone()
    }
}

/// Lex and scan a source unit.
pub fn scan(source: &str) -> TranslationUnit {
    let tokens = ccopy_lexer::lex(source);
    scan_tokens(&tokens, source)
}

/// Scan an already lexed source unit.
pub fn scan_tokens(tokens: &TokenList, source: &str) -> TranslationUnit {
    let classes = scanner::Scanner::new(tokens, source).scan();
    debug!(
        tokens = tokens.len(),
        classes = classes.len(),
        "scanned translation unit"
    );
    TranslationUnit { classes }
}
