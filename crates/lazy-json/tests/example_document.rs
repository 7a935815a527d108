use lazy_json::{DecodeError, ErrorKind, Node, Type};
use serde::Deserialize;
use std::collections::HashMap;

const BODY: &str = r#"{
    "hello": [
      {
        "name": "world 1",
        "size": 123
      },
      {
        "name": "world 2"
      },
      {
        "name": "world 3"
      }
    ]
  }"#;

const DUMMY: &str = r#"{
  "number": 1234.56,
  "string": "foo bar",
  "arrayOfString": ["one", "two", "three", "four"],
  "object": {"foo": "bar", "hello": "world", "answer": 42},
  "true": true,
  "false": false,
  "null": null
}"#;

#[derive(Debug, Deserialize)]
struct Namer {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Dummy {
    number: f64,
    string: String,
    #[serde(rename = "arrayOfString")]
    array_of_string: Vec<String>,
    object: HashMap<String, serde_json::Value>,
}

fn body() -> Node {
    Node::decode(BODY.as_bytes()).expect("valid document")
}

#[test]
fn example_walkthrough() {
    let data = body();

    assert_eq!(data.get("hello").get_n(1).get("name").as_string(), "world 2");
    assert_eq!(data.get("hello").get_n(0).get("size").as_int(), 123);

    let namer: Namer = data.get("hello").get_n(2).deserialize().unwrap();
    assert_eq!(namer.name, "world 3");

    let hello = data.get("hello");
    assert!(hello.parse_error().is_none());
    assert_eq!(hello.length(), 3);

    let cases = [
        (data.get("foo").get_n(0), "json.foo: undefined"),
        (
            data.get("hello").get("notexists").get("name"),
            "json.hello: not an object",
        ),
        (
            data.get("hello").get_n(0).get("notexists").get("name"),
            "json.hello[0].notexists: undefined",
        ),
        (
            data.get("hello").get_n(10).get_n(0).get("name"),
            "json.hello[10]: undefined",
        ),
    ];
    for (node, message) in cases {
        let err = node.parse_error().expect("walk carries an error");
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn example_small_document() {
    let root = Node::decode(r#"{"hello":[{"name":"world 2"}]}"#.as_bytes()).unwrap();
    assert_eq!(root.get("hello").get_n(0).get("name").as_string(), "world 2");
    assert_eq!(root.get("hello").get_n(0).get("name").path(), ".hello[0].name");
}

#[test]
fn example_raw_is_trimmed_document() {
    let data = body();
    assert_eq!(data.raw(), BODY.trim().as_bytes());
    assert_eq!(data.path(), "");
    assert_eq!(data.json_type(), Type::Object);
}

#[test]
fn example_deserialize_dummy() {
    let root = Node::decode(DUMMY.as_bytes()).unwrap();
    let dummy: Dummy = root.deserialize().unwrap();
    assert_eq!(dummy.number, 1234.56);
    assert_eq!(dummy.string, "foo bar");
    assert_eq!(dummy.array_of_string, vec!["one", "two", "three", "four"]);
    assert_eq!(dummy.object["foo"], "bar");
    assert_eq!(dummy.object["hello"], "world");
    assert_eq!(dummy.object["answer"], 42);

    let strings: Vec<String> = root.get("arrayOfString").deserialize().unwrap();
    assert_eq!(strings.len(), 4);

    assert_eq!(root.get("true").json_type(), Type::Bool);
    assert!(root.get("true").as_bool());
    assert!(root.get("null").is_null());
    assert_eq!(root.get("object").get("answer").as_number(), 42.0);
}

#[test]
fn example_deserialize_reports_carried_error() {
    let root = body();
    let err = root
        .get("missing")
        .get("name")
        .deserialize::<Namer>()
        .unwrap_err();
    match err {
        DecodeError::Path(err) => {
            assert_eq!(err.kind(), ErrorKind::Undefined);
            assert_eq!(err.to_string(), "json.missing: undefined");
        }
        other => panic!("expected path error, got {other:?}"),
    }

    assert!(matches!(
        root.get("hello").deserialize::<Namer>(),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn example_decode_rejects_invalid_documents() {
    for doc in ["", "{", "404 not found", "[1, 2", "{} {}"] {
        assert!(
            matches!(Node::decode(doc.as_bytes()), Err(DecodeError::Json(_))),
            "doc {doc:?}"
        );
    }
}

#[test]
fn example_decode_reports_io_errors() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }
    assert!(matches!(Node::decode(Broken), Err(DecodeError::Io(_))));
}

#[test]
fn example_empty_node() {
    let node = Node::new();
    assert_eq!(node.json_type(), Type::Undefined);
    assert!(node.parse_error().is_none());
    assert_eq!(node.length(), -1);
    assert_eq!(
        node.get("a").parse_error().unwrap().kind(),
        ErrorKind::NotObject
    );
    assert_eq!(Node::default().json_type(), Type::Undefined);
}

#[test]
fn example_selector_is_reexported() {
    use lazy_json::selector::{tokenize, TokenKind};
    let kinds: Vec<TokenKind> = tokenize("hello[0].name").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Property,
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::RightBracket,
            TokenKind::Dot,
            TokenKind::Property,
            TokenKind::End,
        ]
    );
}
