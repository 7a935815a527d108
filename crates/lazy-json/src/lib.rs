//! Lazy JSON navigation.
//!
//! Wrap a JSON buffer in a [`Node`] and walk into it with [`Node::get`] and
//! [`Node::get_n`]. Nothing is decoded until a step needs it, and a failed
//! step does not stop the walk: the error rides along on every node derived
//! from it and is reported, with the full path, when asked for.
//!
//! # Example
//!
//! ```
//! use lazy_json::{ErrorKind, Node, Type};
//!
//! let doc = r#"{"hello": [{"name": "world 1", "size": 123}, {"name": "world 2"}]}"#;
//! let root = Node::decode(doc.as_bytes()).unwrap();
//!
//! assert_eq!(root.get("hello").get_n(1).get("name").as_string(), "world 2");
//! assert_eq!(root.get("hello").get_n(0).get("size").as_int(), 123);
//! assert_eq!(root.get("hello").length(), 2);
//!
//! let missing = root.get("hello").get_n(10).get("name");
//! assert_eq!(missing.json_type(), Type::Error);
//! assert_eq!(missing.path(), ".hello[10].name");
//!
//! let err = missing.parse_error().unwrap();
//! assert_eq!(err.kind(), ErrorKind::Undefined);
//! assert_eq!(err.to_string(), "json.hello[10]: undefined");
//! ```

pub mod cli;

mod error;
pub use error::{DecodeError, Error, ErrorKind};

mod node;
pub use node::Node;

mod number;
pub use number::is_json_number;

pub mod path;

mod types;
pub use types::Type;

pub use lazy_json_selector as selector;
