use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{Catalog, NodeId};

/// Conversion of a catalog subtree into a printable `termtree::Tree`.
pub trait TreeDisplay {
    fn to_tree(&self, root: NodeId, show_kind: bool) -> Tree<String>;
}

impl TreeDisplay for Catalog {
    #[instrument(level = "debug", skip(self))]
    fn to_tree(&self, root: NodeId, show_kind: bool) -> Tree<String> {
        fn label(catalog: &Catalog, id: NodeId, show_kind: bool) -> String {
            match catalog.component(id) {
                Ok(component) if show_kind => format!("[{}] {}", component.kind(), component),
                Ok(component) => component.to_string(),
                Err(e) => e.to_string(),
            }
        }

        fn build_tree(catalog: &Catalog, id: NodeId, show_kind: bool) -> Tree<String> {
            let leaves: Vec<_> = catalog
                .get_children(id)
                .unwrap_or_default()
                .iter()
                .map(|&child| build_tree(catalog, child, show_kind))
                .collect();
            Tree::new(label(catalog, id, show_kind)).with_leaves(leaves)
        }

        build_tree(self, root, show_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiscographyBuilder;

    #[test]
    fn given_small_tree_when_rendering_then_nested_labels() {
        let (catalog, root) = DiscographyBuilder::new("X")
            .album("A", ["a1"])
            .build()
            .unwrap();

        let rendered = catalog.to_tree(root, false).to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "X");
        assert!(lines[1].ends_with("A"));
        assert!(lines[2].ends_with("a1"));
    }

    #[test]
    fn given_show_kind_when_rendering_then_labels_prefixed() {
        let (catalog, root) = DiscographyBuilder::new("X")
            .album("A", ["a1"])
            .build()
            .unwrap();

        let rendered = catalog.to_tree(root, true).to_string();
        assert!(rendered.starts_with("[discography] X"));
        assert!(rendered.contains("[album] A"));
        assert!(rendered.contains("[song] a1"));
    }
}
