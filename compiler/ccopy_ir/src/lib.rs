//! ccopy IR - Declaration Model
//!
//! Shared data structures for the copy-constructor generator:
//! - Spans and tokens produced by the lexer
//! - Class, field and type descriptors produced by the declaration source
//! - Copy groups and generated bodies produced by the core
//! - The two collaborator seams: [`DeclarationSource`] and [`TextEmitter`]
//!
//! # Design Philosophy
//!
//! - **Read-only input**: descriptors are built once by a declaration source
//!   and never mutated by the core.
//! - **Closed vocabularies**: group labels and type traits are enums and
//!   flags, never free-form strings.

mod decl;
mod group;
mod span;
mod token;
mod traits;
mod types;

pub use decl::{ClassDescriptor, Field};
pub use group::{CopyGroup, GeneratedBody, GroupLabel, GroupPartition};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use traits::{DeclarationSource, TextEmitter};
pub use types::{TypeDescriptor, TypeFlags};
