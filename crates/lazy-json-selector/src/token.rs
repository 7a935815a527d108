//! Selector token types.

use std::fmt;

/// Kind of a selector token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Lexing failed; the token text holds the message.
    Error,
    /// `.`
    Dot,
    /// Whitespace between tokens. Reserved; the lexer never emits it.
    Space,
    /// `]`
    RightBracket,
    /// `[`
    LeftBracket,
    /// Object property name: `hello` in `hello.world`
    Property,
    /// Array index inside brackets: `3` in `[3]`
    Number,
    /// Quoted key inside brackets: `foo bar` in `['foo bar']`
    String,
    /// End of the selector.
    End,
}

impl TokenKind {
    /// Stable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Error => "Error",
            TokenKind::Dot => "Dot",
            TokenKind::Space => "Space",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::Property => "Property",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::End => "End",
        }
    }

    /// Whether the lexer stops after a token of this kind.
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::End | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by [`SelectorLexer`](crate::SelectorLexer).
///
/// `text` borrows the exact matched slice of the selector. Quoted strings
/// lose their surrounding quotes but keep any backslash escapes verbatim.
/// For [`TokenKind::Error`] the text is the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
