//! Token cursor for navigating the token stream.
//!
//! Provides lookahead, consumption and the bracket-skipping helpers the
//! scanner uses to step over everything that is not a class declaration.

use ccopy_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over a lexed source unit.
///
/// Invariant: the token list ends with `Eof`, and the cursor never moves
/// past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    /// Current position, used for progress tracking.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Source text of the current token.
    pub fn current_text(&self) -> &'a str {
        self.text(self.current())
    }

    /// Token `n` positions ahead; `Eof` when past the end.
    pub fn peek(&self, n: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.pos + n).min(last)]
    }

    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.peek(n).kind
    }

    /// Source text covered by a token.
    pub fn text(&self, token: Token) -> &'a str {
        self.source.get(token.span.to_range()).unwrap_or("")
    }

    /// Tokens from `start` up to (not including) the current position.
    pub fn tokens_since(&self, start: usize) -> &'a [Token] {
        &self.tokens.as_slice()[start..self.pos]
    }

    /// Source text from the token at `start` through the previous token.
    pub fn text_since(&self, start: usize) -> &'a str {
        if start >= self.pos {
            return "";
        }
        let from = self.tokens[start].span.start as usize;
        let to = self.tokens[self.pos - 1].span.end as usize;
        self.source.get(from..to).unwrap_or("")
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Whether the current token is the identifier `word`.
    pub fn check_word(&self, word: &str) -> bool {
        self.check(TokenKind::Ident) && self.current_text() == word
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume and return the current token. Stays put at `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Skip a bracketed group starting at the current `(`, `[` or `{`.
    ///
    /// Leaves the cursor after the matching closer, or at `Eof` if the group
    /// is unterminated. Any other token is consumed on its own.
    pub fn skip_balanced(&mut self) {
        let open = self.current_kind();
        let close = match open {
            TokenKind::LParen => TokenKind::RParen,
            TokenKind::LBracket => TokenKind::RBracket,
            TokenKind::LBrace => TokenKind::RBrace,
            _ => {
                self.advance();
                return;
            }
        };

        let mut depth = 0usize;
        loop {
            let kind = self.current_kind();
            if kind == TokenKind::Eof {
                return;
            }
            self.advance();
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// Skip a template argument or parameter list starting at `<`.
    ///
    /// Stops early at `;` or `}` so a stray `<` cannot swallow the rest of
    /// a class body.
    pub fn skip_angle_group(&mut self) {
        if !self.check(TokenKind::Lt) {
            return;
        }
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                TokenKind::Eof | TokenKind::Semicolon | TokenKind::RBrace => return,
                TokenKind::Lt => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::Gt => {
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    self.skip_balanced();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Skip one declaration.
    ///
    /// Consumes through the terminating `;` at bracket depth zero, or through
    /// a brace group that is not followed by `;` or `,` (a function body).
    /// Stops without consuming at `}` or `Eof`.
    pub fn skip_declaration(&mut self) {
        loop {
            match self.current_kind() {
                TokenKind::Eof | TokenKind::RBrace => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::LBrace => {
                    self.skip_balanced();
                    if !matches!(
                        self.current_kind(),
                        TokenKind::Semicolon | TokenKind::Comma
                    ) {
                        return;
                    }
                }
                TokenKind::LParen | TokenKind::LBracket => self.skip_balanced(),
                _ => {
                    self.advance();
                }
            }
        }
    }
}
