//! Tree model and loader for JSON documents

use crate::error::{AssertdiffError, Result};
use crate::options::{fold_key, JsonOptions};
use indexmap::IndexMap;
use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Number;
use std::collections::HashSet;
use std::fmt;

/// Variant tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// A parsed JSON value
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Object(JsonObject),
    Array(Vec<Node>),
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
            Self::String(_) => NodeKind::String,
            Self::Number(_) => NodeKind::Number,
            Self::Bool(_) => NodeKind::Bool,
            Self::Null => NodeKind::Null,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Object(_) | Self::Array(_))
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Compact JSON text of this node
    pub fn to_json_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::String(value) => serializer.serialize_str(value),
            Self::Number(value) => value.serialize(serializer),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

/// An object's properties in source order
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObject {
    properties: IndexMap<String, Node>,
    case_insensitive: bool,
}

impl JsonObject {
    /// Look up a property, ignoring case when the document was loaded that way
    pub fn get(&self, name: &str) -> Option<&Node> {
        if !self.case_insensitive {
            return self.properties.get(name);
        }
        let folded = name.to_lowercase();
        self.properties
            .iter()
            .find(|(key, _)| key.to_lowercase() == folded)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.properties.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A loaded JSON document; `root` is `None` when the text held no value
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    root: Option<Node>,
}

impl JsonDocument {
    /// Parse JSON text.
    ///
    /// Empty or whitespace-only text is an absent document rather than an
    /// error. Duplicate property names fail the load, and with
    /// case-insensitive keys so do names that differ only by case.
    pub fn load(text: &str, options: &JsonOptions) -> Result<Self> {
        if text.trim().is_empty() {
            log::debug!("Loaded absent JSON document");
            return Ok(Self { root: None });
        }

        let seed = NodeSeed {
            case_insensitive: options.case_insensitive_keys(),
        };
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let root = seed
            .deserialize(&mut deserializer)
            .and_then(|node| deserializer.end().map(|_| node))
            .map_err(|e| AssertdiffError::json_parse(e.to_string(), text))?;

        log::debug!("Loaded JSON document with {} root", root.kind());
        Ok(Self { root: Some(root) })
    }

    /// Load from an already-built `serde_json::Value`
    pub fn from_value(value: &serde_json::Value, options: &JsonOptions) -> Result<Self> {
        Self::load(&value.to_string(), options)
    }

    pub fn absent() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_absent(&self) -> bool {
        self.root.is_none()
    }

    /// Compact JSON text; empty for an absent document
    pub fn to_json_string(&self) -> String {
        self.root
            .as_ref()
            .map(Node::to_json_string)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
struct NodeSeed {
    case_insensitive: bool,
}

impl<'de> DeserializeSeed<'de> for NodeSeed {
    type Value = Node;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Node, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Node, E> {
        Ok(Node::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Node, E> {
        Ok(Node::Number(value.into()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Node, E> {
        Ok(Node::Number(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Node, E> {
        Number::from_f64(value)
            .map(Node::Number)
            .ok_or_else(|| E::custom(format!("number {} is not finite", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Node, E> {
        Ok(Node::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Node, E> {
        Ok(Node::String(value))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(self)? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut properties = IndexMap::new();
        let mut seen = HashSet::new();
        while let Some(key) = map.next_key::<String>()? {
            if !seen.insert(fold_key(&key, self.case_insensitive)) {
                return Err(de::Error::custom(format!("duplicate property '{}'", key)));
            }
            let value = map.next_value_seed(self)?;
            properties.insert(key, value);
        }
        Ok(Node::Object(JsonObject {
            properties,
            case_insensitive: self.case_insensitive,
        }))
    }
}

/// Location of a node, rendered as a JSON pointer (`/orders/0/id`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Property(String),
    Index(usize),
}

impl JsonPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, name: &str) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Property(name.to_string()));
        path
    }

    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Index(index));
        path
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                PathSegment::Property(name) => {
                    write!(f, "/{}", name.replace('~', "~0").replace('/', "~1"))?
                }
                PathSegment::Index(index) => write!(f, "/{}", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for JsonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
