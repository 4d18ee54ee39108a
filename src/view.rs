//! Display tree produced by rendering
//!
//! A `Node` is a plain description of what to show. The terminal view, the
//! plain-text printer, the markup printer and the JSON output all read the
//! same tree.

use serde::Serialize;

/// CSS-style class carried by every list entry
pub const ITEM_CLASS: &str = "item";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Section { children: Vec<Node> },
    Heading { level: u8, text: String },
    List { children: Vec<Node> },
    ListItem {
        class: String,
        text: String,
        packed: bool,
    },
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children } | Node::List { children } => children.as_slice(),
            Node::Heading { .. } | Node::ListItem { .. } => &[],
        }
    }

    /// All list entries below this node, in document order
    pub fn list_items(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_items(&mut out);
        out
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a Node>) {
        if let Node::ListItem { .. } = self {
            out.push(self);
        }
        for child in self.children() {
            child.collect_items(out);
        }
    }

    /// First heading found below (or at) this node
    pub fn heading(&self) -> Option<&str> {
        match self {
            Node::Heading { text, .. } => Some(text.as_str()),
            _ => self.children().iter().find_map(Node::heading),
        }
    }

    /// HTML-like markup, e.g. `<section><h1>..</h1><ul><li class="item">..</li></ul></section>`
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Section { children } => {
                out.push_str("<section>");
                children.iter().for_each(|c| c.write_markup(out));
                out.push_str("</section>");
            }
            Node::Heading { level, text } => {
                out.push_str(&format!("<h{}>{}</h{}>", level, escape(text), level));
            }
            Node::List { children } => {
                out.push_str("<ul>");
                children.iter().for_each(|c| c.write_markup(out));
                out.push_str("</ul>");
            }
            Node::ListItem { class, text, .. } => {
                out.push_str(&format!(
                    "<li class=\"{}\">{}</li>",
                    escape(class),
                    escape(text)
                ));
            }
        }
    }

    /// Plain text: headings on their own line, list entries indented behind `bullet`
    pub fn to_plain_text(&self, bullet: &str) -> String {
        let mut lines = Vec::new();
        self.write_plain(bullet, &mut lines);
        lines.join("\n")
    }

    fn write_plain(&self, bullet: &str, lines: &mut Vec<String>) {
        match self {
            Node::Heading { text, .. } => lines.push(text.clone()),
            Node::ListItem { text, .. } => lines.push(format!("  {} {}", bullet, text)),
            Node::Section { children } | Node::List { children } => {
                children.iter().for_each(|c| c.write_plain(bullet, lines));
            }
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Section {
            children: vec![
                Node::Heading { level: 1, text: "Trip".to_string() },
                Node::List {
                    children: vec![
                        Node::ListItem {
                            class: ITEM_CLASS.to_string(),
                            text: "Hat".to_string(),
                            packed: true,
                        },
                        Node::ListItem {
                            class: ITEM_CLASS.to_string(),
                            text: "Map & <compass>".to_string(),
                            packed: false,
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn list_items_in_document_order() {
        let tree = sample();
        let items = tree.list_items();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], Node::ListItem { packed: true, .. }));
        assert!(matches!(items[1], Node::ListItem { packed: false, .. }));
        assert_eq!(tree.heading(), Some("Trip"));
    }

    #[test]
    fn markup_escapes_text() {
        assert_eq!(
            sample().to_markup(),
            "<section><h1>Trip</h1><ul><li class=\"item\">Hat</li>\
             <li class=\"item\">Map &amp; &lt;compass&gt;</li></ul></section>"
        );
    }

    #[test]
    fn plain_text_uses_bullet() {
        assert_eq!(
            sample().to_plain_text("-"),
            "Trip\n  - Hat\n  - Map & <compass>"
        );
    }

    #[test]
    fn json_is_tagged_by_type() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "section");
        assert_eq!(value["children"][0]["type"], "heading");
        assert_eq!(value["children"][1]["children"][1]["type"], "list_item");
        assert_eq!(value["children"][1]["children"][1]["packed"], false);
    }
}
