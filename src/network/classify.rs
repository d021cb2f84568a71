use std::collections::HashMap;

use crate::overpass::elements::{Element, NodeElement, RelationElement};

/// Relations carrying a `route` tag, in source order. Presence of the
/// key is enough: the Overpass query already restricts the value.
pub fn select_routes(elements: &[Element]) -> Vec<RelationElement> {
    elements
        .iter()
        .filter_map(|element| match element {
            Element::Relation(relation) if relation.tags.contains_key("route") => {
                Some(relation.clone())
            }
            _ => None,
        })
        .collect()
}

/// Point nodes keyed by id. A later duplicate overwrites an earlier one.
pub fn index_nodes(elements: &[Element]) -> HashMap<i64, NodeElement> {
    elements
        .iter()
        .filter_map(|element| match element {
            Element::Node(node) => Some((node.id, node.clone())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod test {

    use crate::overpass::elements::ElementCollection;

    use super::*;

    fn elements(msg: &str) -> Vec<Element> {
        serde_json::from_str::<ElementCollection>(msg).unwrap().elements
    }

    #[test]
    fn test_select_routes_by_tag_presence() {
        let elements = elements(
            r#"{
                "elements": [
                    {"type": "relation", "id": 1, "tags": {"route": "subway"}, "members": []},
                    {"type": "relation", "id": 2, "tags": {"network": "BVG"}, "members": []},
                    {"type": "relation", "id": 3, "tags": {"route": "light_rail"}, "members": []},
                    {"type": "node", "id": 4, "lat": 52.5, "lon": 13.3}
                ]
            }"#,
        );

        let routes = select_routes(&elements);
        let ids = routes.iter().map(|route| route.id).collect::<Vec<_>>();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_index_nodes_last_duplicate_wins() {
        let elements = elements(
            r#"{
                "elements": [
                    {"type": "node", "id": 1, "lat": 52.5, "lon": 13.3, "tags": {"name": "Old"}},
                    {"type": "way", "id": 2, "nodes": [1]},
                    {"type": "node", "id": 1, "lat": 52.6, "lon": 13.4, "tags": {"name": "New"}}
                ]
            }"#,
        );

        let nodes = index_nodes(&elements);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[&1].tags.get("name"), Some(&"New".to_string()));
        assert_eq!(nodes[&1].lat, 52.6);
    }
}
