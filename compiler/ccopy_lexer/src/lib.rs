//! Lexer for C++ class declarations using logos.
//!
//! Produces a `TokenList` covering just enough of C++ to find class
//! definitions, their bases and their data members. Comments and
//! preprocessor lines are trivia.

use ccopy_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // Directive up to end of line, following backslash continuations
    #[regex(r"#([^\n\\]|\\[^\n]|\\\r?\n)*")]
    Preprocessor,

    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("union")]
    Union,
    #[token("enum")]
    Enum,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("virtual")]
    Virtual,
    #[token("const")]
    Const,
    #[token("volatile")]
    Volatile,
    #[token("static")]
    Static,
    #[token("typedef")]
    Typedef,
    #[token("using")]
    Using,
    #[token("namespace")]
    Namespace,
    #[token("template")]
    Template,
    #[token("typename")]
    Typename,
    #[token("friend")]
    Friend,
    #[token("operator")]
    Operator,
    #[token("explicit")]
    Explicit,
    #[token("inline")]
    Inline,
    #[token("constexpr")]
    Constexpr,
    #[token("mutable")]
    Mutable,
    #[token("extern")]
    Extern,
    #[token("static_assert")]
    StaticAssert,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("~")]
    Tilde,

    #[regex(r"[-+/%^|!?.]")]
    Other,

    // Loose on purpose: digit separators, suffixes and exponents all fold in
    #[regex(r"[0-9][0-9a-zA-Z_.']*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)+'")]
    Char,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex source code into a `TokenList`.
///
/// Never fails: unrecognised bytes become `TokenKind::Error` tokens and the
/// list always ends with `Eof`.
///
/// # Panics
///
/// Panics if the source exceeds `u32::MAX` bytes.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment | RawToken::Preprocessor) => {}
            Ok(raw) => result.push(Token::new(convert_token(raw), span)),
            Err(()) => result.push(Token::new(TokenKind::Error, span)),
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    result
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Class => TokenKind::Class,
        RawToken::Struct => TokenKind::Struct,
        RawToken::Union => TokenKind::Union,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Public => TokenKind::Public,
        RawToken::Protected => TokenKind::Protected,
        RawToken::Private => TokenKind::Private,
        RawToken::Virtual => TokenKind::Virtual,
        RawToken::Const => TokenKind::Const,
        RawToken::Volatile => TokenKind::Volatile,
        RawToken::Static => TokenKind::Static,
        RawToken::Typedef => TokenKind::Typedef,
        RawToken::Using => TokenKind::Using,
        RawToken::Namespace => TokenKind::Namespace,
        RawToken::Template => TokenKind::Template,
        RawToken::Typename => TokenKind::Typename,
        RawToken::Friend => TokenKind::Friend,
        RawToken::Operator => TokenKind::Operator,
        RawToken::Explicit => TokenKind::Explicit,
        RawToken::Inline => TokenKind::Inline,
        RawToken::Constexpr => TokenKind::Constexpr,
        RawToken::Mutable => TokenKind::Mutable,
        RawToken::Extern => TokenKind::Extern,
        RawToken::StaticAssert => TokenKind::StaticAssert,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::ColonColon => TokenKind::ColonColon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Star => TokenKind::Star,
        RawToken::Amp => TokenKind::Amp,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Other => TokenKind::Other,
        RawToken::Number => TokenKind::Number,
        RawToken::String => TokenKind::String,
        RawToken::Char => TokenKind::Char,
        RawToken::Ident => TokenKind::Ident,
        // Trivia is filtered before conversion
        RawToken::LineComment | RawToken::BlockComment | RawToken::Preprocessor => {
            TokenKind::Other
        }
    }
}

#[cfg(test)]
mod tests;
