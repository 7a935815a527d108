//! Selector lexer.
//!
//! A small state machine over the selector string. Each state consumes input,
//! queues zero or more tokens and names the next state. Tokens are pulled
//! through [`Iterator`]; nothing runs ahead of the consumer.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::token::{Token, TokenKind};

const UNCLOSED_BRACKET: &str = "unclosed bracket";
const UNCLOSED_QUOTED_STRING: &str = "unclosed quoted string";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Property,
    InsideBracket,
    InsideSingleQuoted,
    InsideDoubleQuoted,
}

/// Pull-based tokenizer for selector strings.
///
/// Yields tokens up to and including the first [`TokenKind::End`] or
/// [`TokenKind::Error`], then `None` forever.
#[derive(Debug, Clone)]
pub struct SelectorLexer<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
    state: Option<State>,
    queue: VecDeque<Token<'a>>,
}

impl<'a> SelectorLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            state: Some(State::Text),
            queue: VecDeque::with_capacity(2),
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Text => self.lex_text(),
            State::Property => self.lex_property(),
            State::InsideBracket => self.lex_inside_bracket(),
            State::InsideSingleQuoted => self.lex_inside_quoted('\''),
            State::InsideDoubleQuoted => self.lex_inside_quoted('"'),
        }
    }

    fn lex_text(&mut self) -> Option<State> {
        match self.advance() {
            Some('.') => {
                self.emit(TokenKind::Dot);
                Some(State::Property)
            }
            Some('[') => {
                self.emit(TokenKind::LeftBracket);
                Some(State::InsideBracket)
            }
            Some(']') => {
                self.emit(TokenKind::RightBracket);
                Some(State::Text)
            }
            // The consumed char stays pending and heads the property run.
            Some(_) => Some(State::Property),
            None => {
                if self.pos > self.start {
                    self.emit(TokenKind::Property);
                }
                self.emit(TokenKind::End);
                None
            }
        }
    }

    fn lex_property(&mut self) -> Option<State> {
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.advance();
        }
        // Emitted even when empty: `a.` ends with Property("").
        self.emit(TokenKind::Property);
        Some(State::Text)
    }

    fn lex_inside_bracket(&mut self) -> Option<State> {
        loop {
            match self.peek() {
                Some(']') => {
                    if self.pos > self.start {
                        self.emit(TokenKind::Number);
                    }
                    return Some(State::Text);
                }
                Some('"') => {
                    self.advance();
                    self.ignore();
                    return Some(State::InsideDoubleQuoted);
                }
                Some('\'') => {
                    self.advance();
                    self.ignore();
                    return Some(State::InsideSingleQuoted);
                }
                Some(_) => {
                    self.advance();
                }
                None => return self.error(UNCLOSED_BRACKET),
            }
        }
    }

    fn lex_inside_quoted(&mut self, quote: char) -> Option<State> {
        loop {
            match self.peek() {
                Some('\\') => {
                    self.advance();
                    if self.peek() == Some(quote) {
                        self.advance();
                    }
                }
                Some(c) if c == quote => {
                    if self.pos > self.start {
                        self.emit(TokenKind::String);
                    }
                    self.advance();
                    self.ignore();
                    return Some(State::Text);
                }
                Some(_) => {
                    self.advance();
                }
                None => return self.error(UNCLOSED_QUOTED_STRING),
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn emit(&mut self, kind: TokenKind) {
        let text = &self.input[self.start..self.pos];
        self.queue.push_back(Token::new(kind, text));
        self.start = self.pos;
    }

    fn error(&mut self, message: &'static str) -> Option<State> {
        tracing::debug!(selector = self.input, pos = self.pos, reason = message, "selector lex error");
        self.queue.push_back(Token::new(TokenKind::Error, message));
        None
    }
}

impl<'a> Iterator for SelectorLexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            self.state = self.step(state);
        }
    }
}

impl FusedIterator for SelectorLexer<'_> {}

/// Start tokenizing `input`.
pub fn lex(input: &str) -> SelectorLexer<'_> {
    SelectorLexer::new(input)
}

/// Tokenize `input` fully, including the final End or Error token.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    lex(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_selector() {
        assert_eq!(tokenize(""), vec![Token::new(TokenKind::End, "")]);
    }

    #[test]
    fn test_single_property() {
        assert_eq!(
            tokenize("hello"),
            vec![
                Token::new(TokenKind::Property, "hello"),
                Token::new(TokenKind::End, ""),
            ]
        );
    }

    #[test]
    fn test_pull_one_at_a_time() {
        let mut lexer = lex("a.b");
        assert_eq!(lexer.next(), Some(Token::new(TokenKind::Property, "a")));
        assert_eq!(lexer.position(), 1);
        assert_eq!(lexer.next(), Some(Token::new(TokenKind::Dot, ".")));
        assert_eq!(lexer.next(), Some(Token::new(TokenKind::Property, "b")));
        assert_eq!(lexer.next(), Some(Token::new(TokenKind::End, "")));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_trailing_dot_emits_empty_property() {
        assert_eq!(
            tokenize("a."),
            vec![
                Token::new(TokenKind::Property, "a"),
                Token::new(TokenKind::Dot, "."),
                Token::new(TokenKind::Property, ""),
                Token::new(TokenKind::End, ""),
            ]
        );
    }

    #[test]
    fn test_dot_before_bracket_emits_empty_property() {
        assert_eq!(
            kinds(".[0]"),
            vec![
                TokenKind::Dot,
                TokenKind::Property,
                TokenKind::LeftBracket,
                TokenKind::Number,
                TokenKind::RightBracket,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_empty_brackets() {
        assert_eq!(
            kinds("[]"),
            vec![TokenKind::LeftBracket, TokenKind::RightBracket, TokenKind::End]
        );
    }

    #[test]
    fn test_unclosed_quote_is_error() {
        let tokens = tokenize("['abc");
        assert_eq!(
            tokens.last(),
            Some(&Token::new(TokenKind::Error, UNCLOSED_QUOTED_STRING))
        );
        let tokens = tokenize("[\"abc");
        assert_eq!(
            tokens.last(),
            Some(&Token::new(TokenKind::Error, UNCLOSED_QUOTED_STRING))
        );
    }

    #[test]
    fn test_non_ascii_in_quotes() {
        assert_eq!(
            tokenize("['héllo wörld']")[1],
            Token::new(TokenKind::String, "héllo wörld")
        );
    }
}
