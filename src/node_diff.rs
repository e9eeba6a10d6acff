//! First-difference search between two JSON documents

use crate::difference::NodeDifference;
use crate::node::{JsonDocument, JsonObject, JsonPath, Node};
use crate::numeric;
use crate::options::JsonOptions;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Property name as written in the document, and its value
type Property<'n> = (&'n str, &'n Node);

/// Compares JSON trees under one set of options
pub struct NodeComparer<'a> {
    options: &'a JsonOptions,
}

impl<'a> NodeComparer<'a> {
    pub fn new(options: &'a JsonOptions) -> Self {
        Self { options }
    }

    /// Find the first difference between two documents, starting with the
    /// absent/null cases at the root.
    pub fn compare_root(
        &self,
        expected: &JsonDocument,
        actual: &JsonDocument,
    ) -> Option<NodeDifference> {
        let root = JsonPath::root();
        let expected_root = expected.root();
        let actual_root = actual.root();

        let difference = if is_null(expected_root) && expected_root == actual_root {
            None
        } else if is_null(actual_root) {
            Some(NodeDifference::ActualIsNull {
                path: root,
                expected: render(expected_root),
            })
        } else if is_null(expected_root) {
            Some(NodeDifference::ExpectedIsNull {
                path: root,
                actual: render(actual_root),
            })
        } else {
            match (expected_root, actual_root) {
                (Some(expected), Some(actual)) => self.compare_node(expected, actual, &root),
                _ => None,
            }
        };

        match &difference {
            Some(difference) => log::debug!("First JSON difference: {}", difference),
            None => log::debug!("JSON documents are equal"),
        }
        difference
    }

    /// Compare two nodes, dispatching on the actual side's variant
    pub fn compare_node(
        &self,
        expected: &Node,
        actual: &Node,
        path: &JsonPath,
    ) -> Option<NodeDifference> {
        log::trace!("Comparing {} at {}", actual.kind(), path);
        match (expected, actual) {
            (Node::Object(expected), Node::Object(actual)) => {
                self.compare_objects(expected, actual, path)
            }
            (Node::Array(expected), Node::Array(actual)) => {
                self.compare_arrays(expected, actual, path)
            }
            (expected, actual) if expected.is_scalar() && actual.is_scalar() => {
                self.compare_scalars(expected, actual, path)
            }
            (expected, actual) => Some(other_type(expected, actual, path)),
        }
    }

    fn compare_objects(
        &self,
        expected: &JsonObject,
        actual: &JsonObject,
        path: &JsonPath,
    ) -> Option<NodeDifference> {
        let expected = self.filtered(expected);
        let actual = self.filtered(actual);

        if let Some((name, _)) = expected
            .iter()
            .find(|(key, _)| !actual.contains_key(*key))
            .map(|(_, property)| property)
        {
            return Some(NodeDifference::ActualMissesProperty {
                path: path.clone(),
                property: name.to_string(),
            });
        }

        if let Some((name, _)) = actual
            .iter()
            .find(|(key, _)| !expected.contains_key(*key))
            .map(|(_, property)| property)
        {
            return Some(NodeDifference::ExpectedMissesProperty {
                path: path.clone(),
                property: name.to_string(),
            });
        }

        expected.iter().find_map(|(key, (name, expected_value))| {
            let (_, actual_value) = actual.get(key)?;
            self.compare_node(expected_value, actual_value, &path.child(name))
        })
    }

    fn compare_arrays(
        &self,
        expected: &[Node],
        actual: &[Node],
        path: &JsonPath,
    ) -> Option<NodeDifference> {
        if expected.len() != actual.len() {
            return Some(NodeDifference::DifferentLength {
                path: path.clone(),
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        let sortable = |items: &[Node]| {
            items.iter().all(Node::is_scalar)
                || items.iter().all(|item| matches!(item, Node::Object(_)))
        };
        let same_shape = |items: &[Node]| items.iter().all(Node::is_scalar);

        if !self.options.array_order().is_ignored()
            || !sortable(expected)
            || !sortable(actual)
            || same_shape(expected) != same_shape(actual)
        {
            return expected
                .iter()
                .zip(actual)
                .enumerate()
                .find_map(|(i, (e, a))| self.compare_node(e, a, &path.index(i)));
        }

        let expected = self.sorted(expected);
        let actual = self.sorted(actual);
        expected
            .into_iter()
            .zip(actual)
            .find_map(|((i, e), (_, a))| self.compare_node(e, a, &path.index(i)))
    }

    fn compare_scalars(
        &self,
        expected: &Node,
        actual: &Node,
        path: &JsonPath,
    ) -> Option<NodeDifference> {
        if expected.kind() != actual.kind() {
            return Some(other_type(expected, actual, path));
        }

        let equal = match (expected, actual) {
            (Node::Number(e), Node::Number(a)) => {
                numeric::values_equal(&e.to_string(), &a.to_string())
            }
            (Node::String(e), Node::String(a)) => e == a,
            (Node::Bool(e), Node::Bool(a)) => e == a,
            (Node::Null, Node::Null) => true,
            _ => false,
        };

        if equal {
            None
        } else {
            Some(NodeDifference::ActualOtherValue {
                path: path.clone(),
                expected: expected.to_json_string(),
                actual: actual.to_json_string(),
            })
        }
    }

    /// Properties keyed by their folded name, ignored names removed
    fn filtered<'n>(&self, object: &'n JsonObject) -> IndexMap<String, Property<'n>> {
        object
            .iter()
            .filter(|(name, _)| !self.options.is_ignored(name))
            .map(|(name, value)| (self.options.fold_key(name), (name.as_str(), value)))
            .collect()
    }

    /// Elements with their source index, ordered by canonical text.
    /// The sort is stable, so equal keys keep their source order.
    fn sorted<'n>(&self, items: &'n [Node]) -> Vec<(usize, &'n Node)> {
        let mut keyed: Vec<(String, usize, &Node)> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (self.canonical(item), i, item))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, i, item)| (i, item)).collect()
    }

    /// Compact JSON with ignored properties removed and object keys folded
    /// and sorted. Array elements keep their order.
    fn canonical(&self, node: &Node) -> String {
        match node {
            Node::Object(object) => {
                let entries: BTreeMap<String, String> = object
                    .iter()
                    .filter(|(name, _)| !self.options.is_ignored(name))
                    .map(|(name, value)| (self.options.fold_key(name), self.canonical(value)))
                    .collect();
                let body = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}:{}", serde_json::Value::from(key.as_str()), value)
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{{{}}}", body)
            }
            Node::Array(items) => {
                let body = items
                    .iter()
                    .map(|item| self.canonical(item))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("[{}]", body)
            }
            scalar => scalar.to_json_string(),
        }
    }
}

fn is_null(node: Option<&Node>) -> bool {
    matches!(node, None | Some(Node::Null))
}

fn render(node: Option<&Node>) -> String {
    node.map(Node::to_json_string)
        .unwrap_or_else(|| "(absent)".to_string())
}

fn other_type(expected: &Node, actual: &Node, path: &JsonPath) -> NodeDifference {
    NodeDifference::ActualOtherType {
        path: path.clone(),
        expected_type: expected.kind(),
        actual_type: actual.kind(),
        expected: expected.to_json_string(),
        actual: actual.to_json_string(),
    }
}
