//! Arena-backed tree with stable node ids.
//!
//! Every node lives in one `Vec` and is addressed by a [`NodeId`]. Nodes are
//! linked both ways: each parent keeps an ordered child list, and each child
//! keeps `prev`/`next` sibling links. Both views describe the same order and
//! every mutation keeps them in agreement.
//!
//! The tree is append-only. There is no removal API; [`Tree::make_parent`]
//! moves an existing subtree under another node without copying it, and every
//! id handed out stays valid for the lifetime of the tree.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

/// Index of a node inside a [`Tree<T>`].
///
/// The payload type is part of the id, so an id taken from a tree of
/// expressions cannot be used to index a tree of anything else.
#[repr(transparent)]
pub struct NodeId<T> {
    raw: u32,
    _payload: PhantomData<fn() -> T>,
}

impl<T> NodeId<T> {
    #[inline]
    const fn new(raw: u32) -> Self {
        NodeId {
            raw,
            _payload: PhantomData,
        }
    }

    /// Position of the node in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.raw as usize
    }

    /// Raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.raw
    }
}

// Manual impls: derives would demand the same traits from `T`.
impl<T> Clone for NodeId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeId<T> {}

impl<T> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for NodeId<T> {}

impl<T> Hash for NodeId<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> fmt::Debug for NodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.raw)
    }
}

/// A node: payload plus structural links.
#[derive(Clone, Debug)]
pub struct Node<T> {
    parent: Option<NodeId<T>>,
    prev: Option<NodeId<T>>,
    next: Option<NodeId<T>>,
    children: Vec<NodeId<T>>,
    value: T,
}

impl<T> Node<T> {
    fn leaf(parent: Option<NodeId<T>>, prev: Option<NodeId<T>>, value: T) -> Self {
        Node {
            parent,
            prev,
            next: None,
            children: Vec::new(),
            value,
        }
    }

    pub fn parent(&self) -> Option<NodeId<T>> {
        self.parent
    }

    pub fn prev_sibling(&self) -> Option<NodeId<T>> {
        self.prev
    }

    pub fn next_sibling(&self) -> Option<NodeId<T>> {
        self.next
    }

    /// Children in order, first to last.
    pub fn children(&self) -> &[NodeId<T>] {
        &self.children
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// A broken link found by [`Tree::check_links`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TreeShapeError {
    #[error("node {child} is listed under {parent} but its parent link is {actual:?}")]
    ParentMismatch {
        parent: u32,
        child: u32,
        actual: Option<u32>,
    },
    #[error("node {node} has {link} link {actual:?}, expected {expected:?}")]
    SiblingMismatch {
        node: u32,
        link: &'static str,
        actual: Option<u32>,
        expected: Option<u32>,
    },
    #[error("node {node} names {parent} as parent but is missing from its child list")]
    MissingFromParent { node: u32, parent: u32 },
    #[error("node {node} has no parent but the root is {root:?}")]
    Orphan { node: u32, root: Option<u32> },
}

/// Arena tree of `T` payloads.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of nodes ever pushed.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId<T>> {
        self.root
    }

    #[inline]
    pub fn node(&self, id: NodeId<T>) -> &Node<T> {
        &self.nodes[id.index()]
    }

    /// Payload of a node.
    #[inline]
    pub fn get(&self, id: NodeId<T>) -> &T {
        &self.nodes[id.index()].value
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId<T> {
        let raw = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("tree exceeded {} nodes", u32::MAX));
        self.nodes.push(node);
        NodeId::new(raw)
    }

    /// Push a root node.
    ///
    /// On an empty tree this creates the first node. Otherwise the new node
    /// becomes the root and the previous root becomes its only child.
    pub fn push_root(&mut self, value: T) -> NodeId<T> {
        let old_root = self.root;
        let mut node = Node::leaf(None, None, value);
        node.children.extend(old_root);
        let id = self.alloc(node);
        if let Some(old_root) = old_root {
            self.nodes[old_root.index()].parent = Some(id);
        }
        self.root = Some(id);
        id
    }

    /// Append a new leaf as the last child of `parent`. O(1).
    pub fn push_child(&mut self, parent: NodeId<T>, value: T) -> NodeId<T> {
        let prev = self.last_child(parent);
        let id = self.alloc(Node::leaf(Some(parent), prev, value));
        if let Some(prev) = prev {
            self.nodes[prev.index()].next = Some(id);
        }
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Move `node` (with its whole subtree) to the end of `new_parent`'s
    /// children.
    ///
    /// `node` is unlinked from its sibling chain and from its old parent's
    /// child list first. `new_parent` must not lie inside the subtree rooted
    /// at `node`; that would close a cycle. Debug builds assert this, release
    /// builds trust the caller. The parser only ever passes a node created
    /// moments earlier as `new_parent`, which cannot be a descendant.
    pub fn make_parent(&mut self, new_parent: NodeId<T>, node: NodeId<T>) {
        debug_assert!(
            !self.is_ancestor_or_self(node, new_parent),
            "make_parent({new_parent:?}, {node:?}) would create a cycle"
        );
        self.detach(node);

        let prev = self.last_child(new_parent);
        if let Some(prev) = prev {
            self.nodes[prev.index()].next = Some(node);
        }
        let moved = &mut self.nodes[node.index()];
        moved.parent = Some(new_parent);
        moved.prev = prev;
        self.nodes[new_parent.index()].children.push(node);
    }

    /// Unlink `node` from its parent and siblings, leaving its subtree intact.
    fn detach(&mut self, node: NodeId<T>) {
        let Node {
            parent, prev, next, ..
        } = self.nodes[node.index()];

        if let Some(prev) = prev {
            self.nodes[prev.index()].next = next;
        }
        if let Some(next) = next {
            self.nodes[next.index()].prev = prev;
        }
        if let Some(parent) = parent {
            let children = &mut self.nodes[parent.index()].children;
            // Reparented nodes sit near the tail of their old list.
            if let Some(pos) = children.iter().rposition(|&child| child == node) {
                children.remove(pos);
            }
        }

        let detached = &mut self.nodes[node.index()];
        detached.parent = None;
        detached.prev = None;
        detached.next = None;
    }

    /// Whether `ancestor` is `node` or one of its ancestors. O(depth).
    pub fn is_ancestor_or_self(&self, ancestor: NodeId<T>, node: NodeId<T>) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    #[inline]
    pub fn parent(&self, node: NodeId<T>) -> Option<NodeId<T>> {
        self.nodes[node.index()].parent
    }

    #[inline]
    pub fn next_sibling(&self, node: NodeId<T>) -> Option<NodeId<T>> {
        self.nodes[node.index()].next
    }

    #[inline]
    pub fn prev_sibling(&self, node: NodeId<T>) -> Option<NodeId<T>> {
        self.nodes[node.index()].prev
    }

    #[inline]
    pub fn first_child(&self, node: NodeId<T>) -> Option<NodeId<T>> {
        self.nodes[node.index()].children.first().copied()
    }

    /// Last child, read from the tail of the child list. O(1).
    #[inline]
    pub fn last_child(&self, node: NodeId<T>) -> Option<NodeId<T>> {
        self.nodes[node.index()].children.last().copied()
    }

    /// The `index`-th child, found by walking the sibling chain. O(index).
    pub fn child(&self, node: NodeId<T>, index: usize) -> Option<NodeId<T>> {
        let mut current = self.first_child(node);
        for _ in 0..index {
            current = self.next_sibling(current?);
        }
        current
    }

    /// Children of `node` in order, following the sibling chain.
    pub fn children(&self, node: NodeId<T>) -> Children<'_, T> {
        Children {
            tree: self,
            next: self.first_child(node),
        }
    }

    /// Next node in pre-order after `node`, or `None` once the walk is done.
    ///
    /// Descends to the first child when there is one; otherwise climbs to the
    /// nearest ancestor-or-self that has a next sibling and moves there.
    pub fn next_preorder(&self, node: NodeId<T>) -> Option<NodeId<T>> {
        if let Some(first) = self.first_child(node) {
            return Some(first);
        }
        let mut current = node;
        loop {
            let links = &self.nodes[current.index()];
            if let Some(next) = links.next {
                return Some(next);
            }
            current = links.parent?;
        }
    }

    /// Pre-order walk of the whole tree, starting at the root.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            tree: self,
            next: self.root,
        }
    }

    /// Number of parent hops from `node` up to the top. O(depth).
    pub fn depth(&self, node: NodeId<T>) -> usize {
        let mut depth = 0;
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Verify that child lists and sibling chains agree for every node.
    pub fn check_links(&self) -> Result<(), TreeShapeError> {
        for (index, node) in self.nodes.iter().enumerate() {
            let id = self.id_at(index);

            for (pos, &child) in node.children.iter().enumerate() {
                let links = self.node(child);
                if links.parent != Some(id) {
                    return Err(TreeShapeError::ParentMismatch {
                        parent: id.raw(),
                        child: child.raw(),
                        actual: links.parent.map(NodeId::raw),
                    });
                }
                let expected_prev = pos.checked_sub(1).map(|p| node.children[p]);
                check_sibling(child, "prev", links.prev, expected_prev)?;
                let expected_next = node.children.get(pos + 1).copied();
                check_sibling(child, "next", links.next, expected_next)?;
            }

            match node.parent {
                Some(parent) if !self.node(parent).children.contains(&id) => {
                    return Err(TreeShapeError::MissingFromParent {
                        node: id.raw(),
                        parent: parent.raw(),
                    });
                }
                Some(_) => {}
                None if self.root != Some(id) => {
                    return Err(TreeShapeError::Orphan {
                        node: id.raw(),
                        root: self.root.map(NodeId::raw),
                    });
                }
                None => {
                    check_sibling(id, "prev", node.prev, None)?;
                    check_sibling(id, "next", node.next, None)?;
                }
            }
        }
        Ok(())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "alloc guarantees every index fits in u32"
    )]
    fn id_at(&self, index: usize) -> NodeId<T> {
        debug_assert!(index < self.nodes.len());
        NodeId::new(index as u32)
    }
}

fn check_sibling<T>(
    node: NodeId<T>,
    link: &'static str,
    actual: Option<NodeId<T>>,
    expected: Option<NodeId<T>>,
) -> Result<(), TreeShapeError> {
    if actual == expected {
        Ok(())
    } else {
        Err(TreeShapeError::SiblingMismatch {
            node: node.raw(),
            link,
            actual: actual.map(NodeId::raw),
            expected: expected.map(NodeId::raw),
        })
    }
}

impl<T> Index<NodeId<T>> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId<T>) -> &T {
        self.get(id)
    }
}

/// Iterator over a node's children along the sibling chain.
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId<T>>,
}

impl<T> Iterator for Children<'_, T> {
    type Item = NodeId<T>;

    fn next(&mut self) -> Option<NodeId<T>> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

/// Pre-order iterator, driven by [`Tree::next_preorder`].
pub struct Preorder<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId<T>>,
}

impl<T> Iterator for Preorder<'_, T> {
    type Item = NodeId<T>;

    fn next(&mut self) -> Option<NodeId<T>> {
        let current = self.next?;
        self.next = self.tree.next_preorder(current);
        Some(current)
    }
}
