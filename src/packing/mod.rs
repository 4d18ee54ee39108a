//! The packing list itself: three fixed items and the functions that turn
//! them into a display tree.

use crate::view::{Node, ITEM_CLASS};

pub const HEADING: &str = "My Packing List";

/// Appended to the name of anything still waiting to go in the bag
pub const NEED_TO_PACK_SUFFIX: &str = "(need to pack)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingItem {
    pub name: &'static str,
    pub is_packed: bool,
}

pub const ITEMS: [PackingItem; 3] = [
    PackingItem { name: "Passport", is_packed: true },
    PackingItem { name: "Socks", is_packed: true },
    PackingItem { name: "Charger", is_packed: false },
];

/// Text shown for a single entry
pub fn item_text(name: &str, is_packed: bool) -> String {
    if is_packed {
        name.to_string()
    } else {
        format!("{} {}", name, NEED_TO_PACK_SUFFIX)
    }
}

pub fn item(name: &str, is_packed: bool) -> Node {
    Node::ListItem {
        class: ITEM_CLASS.to_string(),
        text: item_text(name, is_packed),
        packed: is_packed,
    }
}

/// Heading followed by the bulleted list of `ITEMS`, in declaration order
pub fn packing_list() -> Node {
    Node::Section {
        children: vec![
            Node::Heading {
                level: 1,
                text: HEADING.to_string(),
            },
            Node::List {
                children: ITEMS.iter().map(|i| item(i.name, i.is_packed)).collect(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_item_is_just_the_name() {
        assert_eq!(item_text("Passport", true), "Passport");
    }

    #[test]
    fn unpacked_item_gets_suffix() {
        assert_eq!(item_text("Charger", false), "Charger (need to pack)");
    }

    #[test]
    fn item_node_carries_class_and_flag() {
        assert_eq!(
            item("Socks", true),
            Node::ListItem {
                class: "item".to_string(),
                text: "Socks".to_string(),
                packed: true,
            }
        );
    }

    #[test]
    fn list_has_three_entries_in_order() {
        let tree = packing_list();
        let entries: Vec<(String, bool)> = tree
            .list_items()
            .into_iter()
            .map(|n| match n {
                Node::ListItem { text, packed, .. } => (text.clone(), *packed),
                other => panic!("unexpected node {:?}", other),
            })
            .collect();

        assert_eq!(
            entries,
            vec![
                ("Passport".to_string(), true),
                ("Socks".to_string(), true),
                ("Charger (need to pack)".to_string(), false),
            ]
        );
    }

    #[test]
    fn heading_is_fixed() {
        let tree = packing_list();
        assert_eq!(tree.heading(), Some("My Packing List"));
        assert!(matches!(
            &tree.children()[0],
            Node::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        let first = packing_list();
        let second = packing_list();
        assert_eq!(first, second);
        assert_eq!(first.to_markup(), second.to_markup());
    }

    #[test]
    fn markup_matches_element_structure() {
        assert_eq!(
            packing_list().to_markup(),
            "<section><h1>My Packing List</h1><ul>\
             <li class=\"item\">Passport</li>\
             <li class=\"item\">Socks</li>\
             <li class=\"item\">Charger (need to pack)</li>\
             </ul></section>"
        );
    }
}
