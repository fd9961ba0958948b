//! Field path to source line mapping.
//!
//! Paths use dotted keys and bracketed sequence indices, e.g.
//! `spec.http[0].route[1].destination.host`. For a mapping entry the line
//! is that of its key; for a sequence item it is the line the item starts on.

use marked_yaml::{LoadError, Node, Span};

use crate::resource::FieldsMap;

/// Build the fields map of a single YAML document.
///
/// `first_line` is the 1-based line in the enclosing file where the
/// document starts, so the recorded lines are file lines.
pub fn build_fields_map(document: &str, first_line: usize) -> Result<FieldsMap, LoadError> {
    let root = marked_yaml::parse_yaml(0, document)?;
    let mut map = FieldsMap::new();
    collect(&root, "", first_line.saturating_sub(1), &mut map);
    Ok(map)
}

fn collect(node: &Node, path: &str, offset: usize, out: &mut FieldsMap) {
    match node {
        Node::Mapping(mapping) => {
            for (key, value) in mapping.iter() {
                let child = if path.is_empty() {
                    key.as_str().to_string()
                } else {
                    format!("{}.{}", path, key.as_str())
                };
                if let Some(line) = start_line(key.span()) {
                    out.insert(child.clone(), line + offset);
                }
                collect(value, &child, offset, out);
            }
        }
        Node::Sequence(sequence) => {
            for (i, item) in sequence.iter().enumerate() {
                let child = format!("{}[{}]", path, i);
                if let Some(line) = start_line(item.span()) {
                    out.insert(child.clone(), line + offset);
                }
                collect(item, &child, offset, out);
            }
        }
        Node::Scalar(_) => {}
    }
}

fn start_line(span: &Span) -> Option<usize> {
    span.start().map(|m| m.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = r#"apiVersion: networking.istio.io/v1alpha3
kind: VirtualService
metadata:
  name: reviews
spec:
  hosts:
    - reviews
  http:
    - route:
        - destination:
            host: reviews
            subset: v1
        - destination:
            host: reviews
            subset: v2
"#;

    #[test]
    fn records_nested_field_lines() {
        let map = build_fields_map(VS, 1).unwrap();
        assert_eq!(map.get("kind"), Some(&2));
        assert_eq!(map.get("metadata.name"), Some(&4));
        assert_eq!(map.get("spec.hosts[0]"), Some(&7));
        assert_eq!(map.get("spec.http[0].route[0].destination.host"), Some(&11));
        assert_eq!(map.get("spec.http[0].route[1].destination.host"), Some(&14));
        assert_eq!(map.get("spec.http[0].route[1].destination.subset"), Some(&15));
    }

    #[test]
    fn lines_are_offset_by_document_start() {
        let map = build_fields_map(VS, 21).unwrap();
        assert_eq!(map.get("kind"), Some(&22));
        assert_eq!(map.get("spec.http[0].route[1].destination.host"), Some(&34));
    }

    #[test]
    fn absent_paths_are_not_recorded() {
        let map = build_fields_map(VS, 1).unwrap();
        assert!(map.get("spec.http[0].mirror.host").is_none());
    }
}
