use std::collections::HashMap;

use serde::Deserialize;

/// Top-level document returned by the Overpass interpreter.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementCollection {
    pub elements: Vec<Element>,
}

/// A reference from a relation to another element, annotated with the
/// role it plays there (e.g. `stop`, `stop_entry_only`, `platform`).
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(rename = "ref")]
    pub member_ref: i64,
    pub role: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

/// A point element with geographic coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeElement {
    pub id: i64,
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WayElement {
    pub id: i64,
    #[serde(default)]
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// An element grouping members under shared tags (here, one subway
/// route). `members` is required; a relation without it is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationElement {
    pub id: i64,
    pub members: Vec<Member>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl RelationElement {
    /// Members whose role contains `stop` as a substring, in member
    /// order. `stop_entry_only` qualifies, `platform` does not.
    pub fn stop_members(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|member| member.role.contains("stop"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(NodeElement),
    Way(WayElement),
    Relation(RelationElement),
}
