//! Tokenizer for lazy-json path selectors.
//!
//! A selector describes a walk through a JSON document: dotted property
//! names, numeric indices in brackets and quoted keys in brackets.
//!
//! # Example
//!
//! ```
//! use lazy_json_selector::{tokenize, Token, TokenKind};
//!
//! let tokens = tokenize("hello.world[3]['foo bar']");
//! assert_eq!(tokens[0], Token::new(TokenKind::Property, "hello"));
//! assert_eq!(tokens[4], Token::new(TokenKind::Number, "3"));
//! assert_eq!(tokens[7], Token::new(TokenKind::String, "foo bar"));
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
//! ```

mod lexer;
pub use lexer::{lex, tokenize, SelectorLexer};

mod token;
pub use token::{Token, TokenKind};
