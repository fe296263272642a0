// Structural summary of a converted value graph.
// Counts include the root; depth counts container levels only.
use crate::core::value::{HostValue, ValueKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shape {
    pub kind: ValueKind,
    pub maps: u64,
    pub arrays: u64,
    pub scalars: u64,
    pub keys: u64,
    pub max_depth: usize,
}

impl Shape {
    pub fn nodes(&self) -> u64 {
        self.maps + self.arrays + self.scalars
    }
}

pub fn shape(value: &HostValue) -> Shape {
    let mut out = Shape {
        kind: value.kind(),
        maps: 0,
        arrays: 0,
        scalars: 0,
        keys: 0,
        max_depth: 0,
    };
    out.max_depth = visit(value, &mut out);
    out
}

fn visit(value: &HostValue, out: &mut Shape) -> usize {
    match value {
        HostValue::Map(map) => {
            out.maps += 1;
            out.keys += map.len() as u64;
            1 + map.values().map(|child| visit(child, out)).max().unwrap_or(0)
        }
        HostValue::Array(items) => {
            out.arrays += 1;
            1 + items.iter().map(|child| visit(child, out)).max().unwrap_or(0)
        }
        _ => {
            out.scalars += 1;
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shape;
    use crate::core::convert::convert;
    use crate::core::value::ValueKind;
    use serde_json::json;

    #[test]
    fn scalar_root_has_zero_depth() {
        let s = shape(&convert(json!("x")));
        assert_eq!(s.kind, ValueKind::String);
        assert_eq!(s.scalars, 1);
        assert_eq!(s.max_depth, 0);
        assert_eq!(s.nodes(), 1);
    }

    #[test]
    fn nested_counts_and_depth() {
        let s = shape(&convert(json!({"a": [1, {"b": 2}], "c": []})));
        assert_eq!(s.kind, ValueKind::Map);
        assert_eq!(s.maps, 2);
        assert_eq!(s.arrays, 2);
        assert_eq!(s.scalars, 2);
        assert_eq!(s.keys, 3);
        assert_eq!(s.max_depth, 3);
    }

    #[test]
    fn empty_containers_count_one_level() {
        let s = shape(&convert(json!([])));
        assert_eq!(s.arrays, 1);
        assert_eq!(s.max_depth, 1);
        assert_eq!(s.keys, 0);
    }
}
