use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds().collect()
}

#[test]
fn test_class_header() {
    assert_eq!(
        kinds("class Widget : public C4 {"),
        vec![
            TokenKind::Class,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Public,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        kinds("classy structure"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn test_double_colon_and_ampersands() {
    assert_eq!(
        kinds("std::string& a && b"),
        vec![
            TokenKind::Ident,
            TokenKind::ColonColon,
            TokenKind::Ident,
            TokenKind::Amp,
            TokenKind::Ident,
            TokenKind::AmpAmp,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_trivia() {
    let source = "int a; // trailing\n/* block\n spanning */ int b;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_preprocessor_lines_are_trivia() {
    let source = "#include <thread>\n#define TWO_LINES a \\\n  b\nclass A;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Class,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        kinds(r#"x = 0x1F'00u; s = "a\"b"; c = '\n';"#),
        vec![
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Char,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_template_closers_stay_separate() {
    assert_eq!(
        kinds("a<b<c>>"),
        vec![
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unknown_character_is_error_token() {
    let tokens = lex("int @ x;");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].span, Span::new(4, 5));
}

#[test]
fn test_spans_cover_source_text() {
    let source = "struct Point { int x; };";
    let tokens = lex(source);
    assert_eq!(&source[tokens[1].span.to_range()], "Point");
    let eof = tokens[tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(24));
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}
