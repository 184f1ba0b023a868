use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::component::{ComponentKind, MusicComponent};
use crate::domain::error::{DomainError, DomainResult};

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node in a [`Catalog`].
///
/// Node identity is handle identity: two songs with the same title are
/// still two distinct nodes. A handle only resolves in the catalog that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    catalog: u64,
    index: Index,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "#{slot}.{generation}")
    }
}

/// Tree node in the arena-based catalog.
#[derive(Debug)]
pub struct MusicNode {
    /// Discography, album or song payload
    pub component: MusicComponent,
    /// Back-reference to the parent, None for roots and detached nodes
    parent: Option<NodeId>,
    /// Child handles in insertion order, duplicates allowed
    children: Vec<NodeId>,
}

impl MusicNode {
    fn new(component: MusicComponent) -> Self {
        Self {
            component,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena owning every node of one or more catalog trees.
///
/// Children are held as ordered handle lists, the parent link is a plain
/// handle that never keeps anything alive. Nodes are never freed: detaching
/// a node from its parent only clears the links, the handle stays valid.
#[derive(Debug)]
pub struct Catalog {
    id: u64,
    arena: Arena<MusicNode>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            id: NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
        }
    }

    fn handle(&self, index: Index) -> NodeId {
        NodeId {
            catalog: self.id,
            index,
        }
    }

    /// Creates a detached node: no parent, no children.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, component: MusicComponent) -> NodeId {
        let index = self.arena.insert(MusicNode::new(component));
        self.handle(index)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&MusicNode> {
        if id.catalog != self.id {
            return None;
        }
        self.arena.get(id.index)
    }

    fn require(&self, id: NodeId) -> DomainResult<&MusicNode> {
        self.node(id).ok_or(DomainError::UnknownNode(id))
    }

    fn require_mut(&mut self, id: NodeId) -> DomainResult<&mut MusicNode> {
        if id.catalog != self.id {
            return Err(DomainError::UnknownNode(id));
        }
        self.arena.get_mut(id.index).ok_or(DomainError::UnknownNode(id))
    }

    pub fn component(&self, id: NodeId) -> DomainResult<&MusicComponent> {
        self.require(id).map(|node| &node.component)
    }

    pub fn component_mut(&mut self, id: NodeId) -> DomainResult<&mut MusicComponent> {
        self.require_mut(id).map(|node| &mut node.component)
    }

    /// Appends `child` to the children of `parent` and points the child back at it.
    ///
    /// The child's previous parent, if any, is overwritten without detaching
    /// the child from that parent's children list. No cycle or type checks.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        let previous = self.require(child)?.parent;
        self.require_mut(parent)?.children.push(child);
        self.require_mut(child)?.parent = Some(parent);

        if let Some(previous) = previous.filter(|&p| p != parent) {
            debug!(
                %child,
                %previous,
                %parent,
                "re-parented without detaching from previous parent"
            );
        }
        Ok(())
    }

    /// Removes the first occurrence of `child` from the children of `parent`.
    ///
    /// Returns `false` when `child` is not a child of `parent`; in that case
    /// nothing changes, including the child's parent link.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomainResult<bool> {
        self.require(child)?;
        let parent_node = self.require_mut(parent)?;
        let Some(position) = parent_node.children.iter().position(|&c| c == child) else {
            debug!(%parent, %child, "not a child, nothing removed");
            return Ok(false);
        };
        parent_node.children.remove(position);
        self.require_mut(child)?.parent = None;
        Ok(true)
    }

    /// Child of `parent` at a 0-based position.
    #[instrument(level = "trace", skip(self))]
    pub fn get_child(&self, parent: NodeId, index: usize) -> DomainResult<NodeId> {
        let children = &self.require(parent)?.children;
        children
            .get(index)
            .copied()
            .ok_or(DomainError::IndexOutOfRange {
                index,
                len: children.len(),
            })
    }

    /// Read-only view of the children of `parent` in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn get_children(&self, parent: NodeId) -> DomainResult<&[NodeId]> {
        self.require(parent).map(|node| node.children.as_slice())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn parent(&self, id: NodeId) -> DomainResult<Option<NodeId>> {
        self.require(id).map(|node| node.parent)
    }

    /// Borrowed navigation view of one node.
    pub fn view(&self, id: NodeId) -> DomainResult<NodeRef<'_>> {
        let node = self.require(id)?;
        Ok(NodeRef {
            catalog: self,
            id,
            node,
        })
    }

    /// Nodes without a parent, in creation order.
    #[instrument(level = "trace", skip(self))]
    pub fn roots(&self) -> Vec<NodeId> {
        self.arena
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| self.handle(index))
            .collect()
    }

    /// Walks parent links upward, starting with the parent of `id`.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            catalog: self,
            next: self.node(id).and_then(|node| node.parent),
        }
    }

    /// Names from `id` up to its root, `id` first.
    #[instrument(level = "debug", skip(self))]
    pub fn lineage(&self, id: NodeId) -> DomainResult<Vec<&str>> {
        let node = self.require(id)?;
        let mut names = vec![node.component.name()];
        names.extend(self.ancestors(id).map(|(_, n)| n.component.name()));
        Ok(names)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self, root: NodeId) -> TreeIterator<'_> {
        TreeIterator::new(self, root)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self, root: NodeId) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, root)
    }

    /// Number of nodes reachable from `root`, `root` included.
    #[instrument(level = "debug", skip(self))]
    pub fn count(&self, root: NodeId) -> usize {
        self.iter(root).count()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, root: NodeId) -> usize {
        self.node(root)
            .map(|node| {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.depth(child))
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Names of all childless nodes below `root`, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self, root: NodeId) -> Vec<&str> {
        self.iter(root)
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.component.name())
            .collect()
    }
}

/// Borrowed view of a catalog node for upward and downward navigation.
///
/// Equality is node identity within the same catalog.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    catalog: &'a Catalog,
    id: NodeId,
    node: &'a MusicNode,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn component(&self) -> &'a MusicComponent {
        &self.node.component
    }

    pub fn kind(&self) -> ComponentKind {
        self.node.component.kind()
    }

    pub fn name(&self) -> &'a str {
        self.node.component.name()
    }

    pub fn title(&self) -> Option<&'a str> {
        self.node.component.title()
    }

    pub fn artist(&self) -> Option<&'a str> {
        self.node.component.artist()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node
            .parent
            .and_then(|parent| self.catalog.view(parent).ok())
    }

    pub fn child(&self, index: usize) -> DomainResult<NodeRef<'a>> {
        let id = self.catalog.get_child(self.id, index)?;
        self.catalog.view(id)
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let catalog = self.catalog;
        let node = self.node;
        node.children
            .iter()
            .filter_map(move |&child| catalog.view(child).ok())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("component", &self.node.component)
            .finish()
    }
}

pub struct Ancestors<'a> {
    catalog: &'a Catalog,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a MusicNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.catalog.node(id)?;
        self.next = node.parent;
        Some((id, node))
    }
}

pub struct TreeIterator<'a> {
    catalog: &'a Catalog,
    stack: Vec<NodeId>,
}

impl<'a> TreeIterator<'a> {
    fn new(catalog: &'a Catalog, root: NodeId) -> Self {
        let mut stack = Vec::new();
        if catalog.contains(root) {
            stack.push(root);
        }
        Self { catalog, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeId, &'a MusicNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.catalog.node(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    catalog: &'a Catalog,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(catalog: &'a Catalog, root: NodeId) -> Self {
        let mut stack = Vec::new();
        if catalog.contains(root) {
            stack.push((root, false));
        }
        Self { catalog, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (NodeId, &'a MusicNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.catalog.node(current) {
                if visited {
                    return Some((current, node));
                }
                self.stack.push((current, true));
                for &child in node.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}
