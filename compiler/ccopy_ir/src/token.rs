//! Token types for the declaration lexer.
//!
//! Tokens carry no payload; identifier and literal text is recovered by
//! slicing the source with the token's span.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Token kinds relevant to class declarations.
///
/// Anything the scanner never needs to tell apart is folded into `Other`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Ident,
    Number,
    String,
    Char,

    // Keywords
    Class,
    Struct,
    Union,
    Enum,
    Public,
    Protected,
    Private,
    Virtual,
    Const,
    Volatile,
    Static,
    Typedef,
    Using,
    Namespace,
    Template,
    Typename,
    Friend,
    Operator,
    Explicit,
    Inline,
    Constexpr,
    Mutable,
    Extern,
    StaticAssert,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    ColonColon,
    Comma,
    Star,
    Amp,
    AmpAmp,
    Lt,
    Gt,
    Eq,
    Tilde,

    /// Any other operator character.
    Other,
    /// Bytes the lexer could not recognise.
    Error,
    Eof,
}

impl TokenKind {
    /// Human-readable name for trace output.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string literal",
            TokenKind::Char => "char literal",
            TokenKind::Class => "class",
            TokenKind::Struct => "struct",
            TokenKind::Union => "union",
            TokenKind::Enum => "enum",
            TokenKind::Public => "public",
            TokenKind::Protected => "protected",
            TokenKind::Private => "private",
            TokenKind::Virtual => "virtual",
            TokenKind::Const => "const",
            TokenKind::Volatile => "volatile",
            TokenKind::Static => "static",
            TokenKind::Typedef => "typedef",
            TokenKind::Using => "using",
            TokenKind::Namespace => "namespace",
            TokenKind::Template => "template",
            TokenKind::Typename => "typename",
            TokenKind::Friend => "friend",
            TokenKind::Operator => "operator",
            TokenKind::Explicit => "explicit",
            TokenKind::Inline => "inline",
            TokenKind::Constexpr => "constexpr",
            TokenKind::Mutable => "mutable",
            TokenKind::Extern => "extern",
            TokenKind::StaticAssert => "static_assert",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::Comma => ",",
            TokenKind::Star => "*",
            TokenKind::Amp => "&",
            TokenKind::AmpAmp => "&&",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::Tilde => "~",
            TokenKind::Other => "operator",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of file",
        }
    }

    /// Whether this token introduces a class-key (`class`, `struct`, `union`).
    #[inline]
    pub fn is_class_key(self) -> bool {
        matches!(self, TokenKind::Class | TokenKind::Struct | TokenKind::Union)
    }

    /// Whether this token is an access specifier keyword.
    #[inline]
    pub fn is_access_specifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public | TokenKind::Protected | TokenKind::Private
        )
    }

    /// Whether this token is a cv-qualifier.
    #[inline]
    pub fn is_cv_qualifier(self) -> bool {
        matches!(self, TokenKind::Const | TokenKind::Volatile)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A list of tokens ending in `Eof`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over token kinds, mostly useful in tests.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
