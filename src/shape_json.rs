//! Purpose: Shared shape-summary JSON serializer for the `inspect` command.
//! Exports: `shape_json`.
//! Role: Keep the summary envelope shape consistent across output modes.
//! Invariants: Stable key names for v0 summary payloads; fields are additive-only.
//! Invariants: `source` is emitted only when the input came from a named file.

use std::path::Path;

use hostjson::api::Shape;
use serde_json::{Map, Value, json};

pub(crate) fn shape_json(shape: &Shape, source: Option<&Path>) -> Value {
    let mut map = Map::new();
    if let Some(path) = source {
        map.insert("source".to_string(), json!(path.display().to_string()));
    }
    map.insert("kind".to_string(), json!(shape.kind.label()));
    map.insert("maps".to_string(), json!(shape.maps));
    map.insert("arrays".to_string(), json!(shape.arrays));
    map.insert("scalars".to_string(), json!(shape.scalars));
    map.insert("keys".to_string(), json!(shape.keys));
    map.insert("nodes".to_string(), json!(shape.nodes()));
    map.insert("max_depth".to_string(), json!(shape.max_depth));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::shape_json;
    use hostjson::api::{convert, shape};
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn shape_json_has_required_fields() {
        let value = convert(json!({"a": [1, 2], "b": {}}));
        let out = shape_json(&shape(&value), None);
        assert_eq!(
            out,
            json!({
                "kind": "map",
                "maps": 2,
                "arrays": 1,
                "scalars": 2,
                "keys": 2,
                "nodes": 5,
                "max_depth": 2,
            })
        );
    }

    #[test]
    fn shape_json_reports_source_path() {
        let value = convert(json!(null));
        let out = shape_json(&shape(&value), Some(Path::new("doc.json")));
        assert_eq!(out["source"], "doc.json");
        assert_eq!(out["kind"], "null");
        assert_eq!(out["max_depth"], 0);
    }
}
