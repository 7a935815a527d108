//! Lazily decoded JSON nodes.
//!
//! A [`Node`] is a handle onto a span of JSON source bytes plus the path that
//! led to it. Its type is sniffed from the first significant byte; contents
//! are decoded only when a child or a leaf value is asked for.
//!
//! Navigation never fails outright. A failed step returns a node that carries
//! the error, and every node derived from it carries the same error while its
//! path keeps growing.

use std::fmt;
use std::io::Read;
use std::ops::Range;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::error::{DecodeError, Error, ErrorKind};
use crate::number::is_json_number;
use crate::path::{index_path, key_path};
use crate::types::Type;

/// Object key → span of the member value within the shared buffer.
type ObjectView = IndexMap<String, Range<usize>>;

/// A lazily typed, possibly errored handle onto JSON bytes.
///
/// Children share the parent's buffer. Cloning is cheap apart from the
/// cached object view, which is cloned along with the node.
#[derive(Clone)]
pub struct Node {
    buf: Arc<[u8]>,
    span: Range<usize>,
    path: String,
    error: Option<Error>,
    object: OnceLock<Option<ObjectView>>,
}

impl Node {
    /// An empty root node of type [`Type::Undefined`].
    pub fn new() -> Self {
        Self::from_raw(Vec::<u8>::new())
    }

    /// Wrap raw JSON bytes without validating them.
    ///
    /// Surrounding JSON whitespace is trimmed; anything else is kept as is
    /// and classified by [`Node::json_type`].
    pub fn from_raw(bytes: impl Into<Arc<[u8]>>) -> Self {
        let buf = bytes.into();
        let span = trim_span(&buf);
        Self {
            buf,
            span,
            path: String::new(),
            error: None,
            object: OnceLock::new(),
        }
    }

    /// Copy `bytes` into a new root node without validating them.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_raw(bytes)
    }

    /// Read a whole document from `reader` and wrap it as the root node.
    ///
    /// The document must be exactly one valid JSON value.
    pub fn decode<R: Read>(mut reader: R) -> Result<Self, DecodeError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        serde_json::from_slice::<&RawValue>(&buf)?;
        Ok(Self::from_raw(buf))
    }

    /// Replace this node's bytes wholesale with a validated JSON value.
    ///
    /// Clears the cached object view and any carried error. The path is kept.
    pub fn fill(&mut self, bytes: impl Into<Arc<[u8]>>) -> Result<(), DecodeError> {
        let buf = bytes.into();
        serde_json::from_slice::<&RawValue>(&buf)?;
        self.span = trim_span(&buf);
        self.buf = buf;
        self.error = None;
        self.object = OnceLock::new();
        Ok(())
    }

    /// The exact bytes of this node's value.
    pub fn raw(&self) -> &[u8] {
        &self.buf[self.span.clone()]
    }

    /// Root-relative path of this node, e.g. `.hello[0].name`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The error carried by this node, if any.
    pub fn parse_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Sniff the type of this node.
    pub fn json_type(&self) -> Type {
        if self.error.is_some() {
            return Type::Error;
        }
        let raw = self.raw();
        match raw.first() {
            None => Type::Undefined,
            Some(b'"') => Type::String,
            Some(b'{') => Type::Object,
            Some(b'[') => Type::Array,
            Some(_) => match raw {
                b"true" | b"false" => Type::Bool,
                b"null" => Type::Null,
                _ if is_json_number(raw) => Type::Number,
                _ => Type::Error,
            },
        }
    }

    /// Navigate into object member `key`.
    pub fn get(&self, key: &str) -> Node {
        let path = key_path(&self.path, key);
        if let Some(err) = &self.error {
            return self.errored(path, err.clone());
        }
        if self.json_type() != Type::Object {
            let err = Error::new(ErrorKind::NotObject, self.path.clone());
            return self.errored(path, err);
        }
        match self.object_view().and_then(|fields| fields.get(key)) {
            Some(span) => self.child(path, span.clone()),
            None => {
                let err = Error::new(ErrorKind::Undefined, path.clone());
                self.errored(path, err)
            }
        }
    }

    /// Navigate into array element `index` (zero-based).
    ///
    /// Unlike [`Node::get`], every call decodes the array afresh.
    pub fn get_n(&self, index: usize) -> Node {
        let path = index_path(&self.path, index);
        if let Some(err) = &self.error {
            return self.errored(path, err.clone());
        }
        if self.json_type() != Type::Array {
            let err = Error::new(ErrorKind::NotArray, self.path.clone());
            return self.errored(path, err);
        }
        match self.array_spans().and_then(|items| items.get(index).cloned()) {
            Some(span) => self.child(path, span),
            None => {
                let err = Error::new(ErrorKind::Undefined, path.clone());
                self.errored(path, err)
            }
        }
    }

    /// Top-level keys of an object node, in document order.
    ///
    /// Empty for every other type.
    pub fn keys(&self) -> Vec<String> {
        if self.json_type() != Type::Object {
            return Vec::new();
        }
        self.object_view()
            .map(|fields| fields.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Length of a string or array node; `-1` for every other type.
    ///
    /// For strings this is the byte length of the quoted literal minus the
    /// two quotes, so escapes count as written and multi-byte characters
    /// count per byte.
    pub fn length(&self) -> isize {
        match self.json_type() {
            Type::String => self.span.len() as isize - 2,
            Type::Array => self
                .array_spans()
                .map(|items| items.len() as isize)
                .unwrap_or(-1),
            _ => -1,
        }
    }

    pub fn is_null(&self) -> bool {
        self.json_type() == Type::Null
    }

    /// Decoded string value, or `""` if this is not a string.
    pub fn as_string(&self) -> String {
        self.leaf()
    }

    /// Decoded number value, or `0.0` if this is not a number.
    pub fn as_number(&self) -> f64 {
        self.leaf()
    }

    /// [`Node::as_number`] truncated toward zero.
    pub fn as_int(&self) -> i64 {
        self.as_number() as i64
    }

    /// Decoded boolean value, or `false` if this is not a bool.
    pub fn as_bool(&self) -> bool {
        self.leaf()
    }

    /// Fully decode this node into `T`.
    ///
    /// A carried error is returned as [`DecodeError::Path`].
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        if let Some(err) = &self.error {
            return Err(err.clone().into());
        }
        Ok(serde_json::from_slice(self.raw())?)
    }

    fn leaf<T: DeserializeOwned + Default>(&self) -> T {
        match serde_json::from_slice(self.raw()) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(path = %self.path, error = %err, "leaf decode failed");
                T::default()
            }
        }
    }

    fn object_view(&self) -> Option<&ObjectView> {
        self.object.get_or_init(|| self.decode_object()).as_ref()
    }

    fn decode_object(&self) -> Option<ObjectView> {
        #[cfg(test)]
        decode_count::OBJECT_DECODES.with(|count| count.set(count.get() + 1));

        tracing::trace!(path = %self.path, len = self.span.len(), "decoding object");
        match serde_json::from_slice::<IndexMap<String, &RawValue>>(self.raw()) {
            Ok(fields) => Some(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, self.span_of(value)))
                    .collect(),
            ),
            Err(err) => {
                tracing::debug!(path = %self.path, error = %err, "malformed object");
                None
            }
        }
    }

    fn array_spans(&self) -> Option<Vec<Range<usize>>> {
        tracing::trace!(path = %self.path, len = self.span.len(), "decoding array");
        match serde_json::from_slice::<Vec<&RawValue>>(self.raw()) {
            Ok(items) => Some(items.into_iter().map(|item| self.span_of(item)).collect()),
            Err(err) => {
                tracing::debug!(path = %self.path, error = %err, "malformed array");
                None
            }
        }
    }

    /// Span of a raw value borrowed from this node's bytes.
    fn span_of(&self, value: &RawValue) -> Range<usize> {
        let text = value.get();
        let start = text.as_ptr() as usize - self.buf.as_ptr() as usize;
        start..start + text.len()
    }

    fn child(&self, path: String, span: Range<usize>) -> Node {
        Node {
            buf: Arc::clone(&self.buf),
            span,
            path,
            error: None,
            object: OnceLock::new(),
        }
    }

    fn errored(&self, path: String, error: Error) -> Node {
        Node {
            buf: Arc::clone(&self.buf),
            span: 0..0,
            path,
            error: Some(error),
            object: OnceLock::new(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.json_type())
            .field("path", &self.path)
            .field("raw", &String::from_utf8_lossy(self.raw()))
            .field("error", &self.error)
            .finish()
    }
}

fn is_json_whitespace(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn trim_span(bytes: &[u8]) -> Range<usize> {
    let start = bytes
        .iter()
        .position(|b| !is_json_whitespace(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !is_json_whitespace(b))
        .map_or(start, |i| i + 1);
    start..end
}
