//! JSON dataset documents.
//!
//! A document is an array of element objects:
//!
//! ```json
//! [
//!   {"tag": "0010,0010", "description": "Patient's Name", "value": "Doe^John"},
//!   {"tag": "0028,0030", "description": "Pixel Spacing", "value": [2.2, 2.2]},
//!   {"tag": "0008,1115", "description": "Referenced Series Sequence",
//!    "items": [[{"tag": "0020,000E", "value": "1.2.3"}]]}
//! ]
//! ```
//!
//! `value` maps `null` (or a missing key) to an empty scalar, integers to
//! `Int`, other numbers to `Float`, strings to `Text`, arrays to `Multi` and
//! `{"bytes": "<hex>"}` to `Bytes`. `items` holds one element array per
//! sequence item.

use dcm_types::{Element, Scalar, Tag, Tree, Value};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ReadError, ReadResult};
use crate::traits::DatasetReader;

/// Reader for JSON dataset documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDatasetReader;

impl JsonDatasetReader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetReader for JsonDatasetReader {
    fn read_str(&self, input: &str) -> ReadResult<Tree> {
        let raw: Vec<RawElement> = serde_json::from_str(input)?;
        let tree = build_tree(raw)?;
        debug!(elements = tree.len(), "parsed JSON dataset");
        Ok(tree)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElement {
    tag: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    items: Option<Vec<Vec<RawElement>>>,
}

fn build_tree(raw: Vec<RawElement>) -> ReadResult<Tree> {
    let mut tree = Tree::new();
    for element in raw {
        tree.insert(build_element(element)?)?;
    }
    Ok(tree)
}

fn build_element(raw: RawElement) -> ReadResult<Element> {
    let RawElement {
        tag: tag_text,
        description,
        value,
        items,
    } = raw;
    let tag: Tag = tag_text.parse()?;
    let invalid = |reason: String| ReadError::InvalidElement {
        tag: tag_text.clone(),
        reason,
    };

    let value = match (value, items) {
        (Some(_), Some(_)) => return Err(invalid("has both `value` and `items`".into())),
        (None, Some(items)) => Value::Sequence(
            items
                .into_iter()
                .map(build_tree)
                .collect::<ReadResult<Vec<Tree>>>()?,
        ),
        (None, None) => Value::Scalar(Scalar::Empty),
        (Some(v), None) => Value::Scalar(scalar_from_json(&v).map_err(invalid)?),
    };
    Ok(Element::new(tag, description, value))
}

fn scalar_from_json(value: &serde_json::Value) -> Result<Scalar, String> {
    use serde_json::Value as Json;

    match value {
        Json::Null => Ok(Scalar::Empty),
        Json::Number(n) => n
            .as_i64()
            .map(Scalar::Int)
            .or_else(|| n.as_f64().map(Scalar::Float))
            .ok_or_else(|| format!("unrepresentable number {n}")),
        Json::String(s) => Ok(Scalar::text(s.as_str())),
        Json::Array(values) => values
            .iter()
            .map(scalar_from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Scalar::Multi),
        Json::Object(map) => match (map.len(), map.get("bytes")) {
            (1, Some(Json::String(hex_text))) => hex::decode(hex_text)
                .map(Scalar::Bytes)
                .map_err(|e| format!("invalid hex bytes: {e}")),
            _ => Err("objects other than {\"bytes\": \"<hex>\"} are not values".into()),
        },
        Json::Bool(_) => Err("boolean values are not supported".into()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use dcm_types::TypeError;

    use super::*;

    const DOCUMENT: &str = r#"[
        {"tag": "0010,0010", "description": "Patient's Name", "value": "Doe^John"},
        {"tag": "(0020, 0013)", "description": "Instance Number", "value": 4},
        {"tag": "00280030", "description": "Pixel Spacing", "value": [2.2, 2.2]},
        {"tag": "0010,0030", "description": "Patient's Birth Date", "value": null},
        {"tag": "7FE0,0010", "description": "Pixel Data", "value": {"bytes": "00ff"}},
        {"tag": "0008,1115", "description": "Referenced Series Sequence", "items": [
            [{"tag": "0020,000E", "description": "Series Instance UID", "value": "1.2.3"}],
            []
        ]}
    ]"#;

    fn read(input: &str) -> ReadResult<Tree> {
        JsonDatasetReader::new().read_str(input)
    }

    #[test]
    fn reads_all_value_shapes() {
        let tree = read(DOCUMENT).unwrap();
        assert_eq!(tree.len(), 6);

        let name = tree.get(Tag::new(0x0010, 0x0010)).unwrap();
        assert_eq!(name.description, "Patient's Name");
        assert_eq!(name.value, Value::Scalar(Scalar::text("Doe^John")));

        assert_eq!(*tree.value(Tag::new(0x0020, 0x0013)), Value::Scalar(Scalar::Int(4)));
        assert_eq!(
            *tree.value(Tag::new(0x0028, 0x0030)),
            Value::Scalar(Scalar::Multi(vec![Scalar::Float(2.2), Scalar::Float(2.2)]))
        );
        assert_eq!(*tree.value(Tag::new(0x0010, 0x0030)), Value::Scalar(Scalar::Empty));
        assert_eq!(
            *tree.value(Tag::new(0x7FE0, 0x0010)),
            Value::Scalar(Scalar::Bytes(vec![0x00, 0xff]))
        );

        let seq = tree.get(Tag::new(0x0008, 0x1115)).unwrap();
        assert_eq!(seq.sequence_len(), Some(2));
        let item = seq.item(0).unwrap();
        assert_eq!(*item.value(Tag::new(0x0020, 0x000E)), Value::Scalar(Scalar::text("1.2.3")));
        assert!(seq.item(1).unwrap().is_empty());
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let tree = read(r#"[{"tag": "0008,0060", "value": "NM"}]"#).unwrap();
        assert_eq!(tree.get(Tag::new(0x0008, 0x0060)).unwrap().description, "");
    }

    #[test]
    fn duplicate_tag_rejected_at_any_level() {
        let top = r#"[{"tag": "0010,0010", "value": "a"}, {"tag": "(0010,0010)", "value": "b"}]"#;
        assert!(matches!(
            read(top),
            Err(ReadError::Type(TypeError::DuplicateTag(t))) if t == Tag::new(0x0010, 0x0010)
        ));

        let nested = r#"[{"tag": "0008,1115", "items": [[
            {"tag": "0020,000E", "value": "1"}, {"tag": "0020,000E", "value": "2"}
        ]]}]"#;
        assert!(matches!(read(nested), Err(ReadError::Type(TypeError::DuplicateTag(_)))));
    }

    #[test]
    fn rejects_value_and_items_together() {
        let doc = r#"[{"tag": "0008,1115", "value": "x", "items": []}]"#;
        assert!(matches!(read(doc), Err(ReadError::InvalidElement { .. })));
    }

    #[test]
    fn rejects_unsupported_values() {
        for doc in [
            r#"[{"tag": "0008,0060", "value": true}]"#,
            r#"[{"tag": "0008,0060", "value": {"text": "x"}}]"#,
            r#"[{"tag": "0008,0060", "value": {"bytes": "zz"}}]"#,
        ] {
            assert!(matches!(read(doc), Err(ReadError::InvalidElement { .. })), "{doc}");
        }
    }

    #[test]
    fn rejects_bad_tags_and_shapes() {
        assert!(matches!(
            read(r#"[{"tag": "PatientName", "value": "x"}]"#),
            Err(ReadError::Type(TypeError::InvalidTag(_)))
        ));
        assert!(matches!(read(r#"{"tag": "0010,0010"}"#), Err(ReadError::Json(_))));
        assert!(matches!(
            read(r#"[{"tag": "0010,0010", "vr": "PN"}]"#),
            Err(ReadError::Json(_))
        ));
    }

    #[test]
    fn read_path_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let tree = JsonDatasetReader::new().read_path(file.path()).unwrap();
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn read_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = JsonDatasetReader::new().read_path(&path).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
