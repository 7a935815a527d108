//! Core logic of the `json-get` command.
//!
//! `json-get` reads a document on stdin and walks it one argument at a time:
//! arguments made of ASCII digits are array indices, everything else is an
//! object key.

use thiserror::Error;

use crate::error::{DecodeError, Error};
use crate::node::Node;
use crate::types::Type;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Path(#[from] Error),

    #[error("json{path}: malformed value")]
    Malformed { path: String },
}

/// A single navigation step given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> Segment<'a> {
    pub fn parse(arg: &'a str) -> Self {
        if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = arg.parse() {
                return Segment::Index(index);
            }
        }
        Segment::Key(arg)
    }
}

/// Walk `root` along `args`.
pub fn walk<S: AsRef<str>>(root: &Node, args: &[S]) -> Node {
    args.iter()
        .fold(root.clone(), |node, arg| match Segment::parse(arg.as_ref()) {
            Segment::Key(key) => node.get(key),
            Segment::Index(index) => node.get_n(index),
        })
}

/// Render a node for output: strings unquoted, everything else as raw JSON.
pub fn render(node: &Node) -> Result<String, CliError> {
    if let Some(err) = node.parse_error() {
        return Err(err.clone().into());
    }
    match node.json_type() {
        Type::String => Ok(node.as_string()),
        Type::Error => Err(CliError::Malformed {
            path: node.path().to_string(),
        }),
        _ => Ok(String::from_utf8_lossy(node.raw()).into_owned()),
    }
}

/// Decode `doc`, walk it along `args` and render the result.
pub fn lookup<S: AsRef<str>>(doc: &[u8], args: &[S]) -> Result<String, CliError> {
    let root = Node::decode(doc)?;
    render(&walk(&root, args))
}
