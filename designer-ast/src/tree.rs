//! Structural queries and edits over [`Node`] trees.
//!
//! Traversal is pre-order over `children`; attributes are not visited.
//! Trees own their children, so they are always finite and acyclic.

use thiserror::Error;

use crate::ast::{ElementNode, Node};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("no element with id `{0}`")]
    ParentNotFound(String),

    #[error("insert index {index} is out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub fn is_element_node(node: &Node) -> bool {
    matches!(node, Node::Element(_))
}

pub fn is_text_node(node: &Node) -> bool {
    matches!(node, Node::Text(_))
}

/// First node, in pre-order, that satisfies `predicate`.
pub fn find_node<'a, F>(node: &'a Node, predicate: F) -> Option<&'a Node>
where
    F: Fn(&Node) -> bool,
{
    find_node_with(node, &predicate)
}

fn find_node_with<'a>(node: &'a Node, predicate: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
    if predicate(node) {
        return Some(node);
    }
    node.children()?
        .iter()
        .find_map(|child| find_node_with(child, predicate))
}

/// Every node satisfying `predicate`, in pre-order.
pub fn find_all_nodes<'a, F>(node: &'a Node, predicate: F) -> Vec<&'a Node>
where
    F: Fn(&Node) -> bool,
{
    let mut out = Vec::new();
    collect_matches(node, &predicate, &mut out);
    out
}

fn collect_matches<'a>(node: &'a Node, predicate: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
    if predicate(node) {
        out.push(node);
    }
    for child in node.children().unwrap_or_default() {
        collect_matches(child, predicate, out);
    }
}

pub fn count_nodes(node: &Node) -> usize {
    1 + node
        .children()
        .unwrap_or_default()
        .iter()
        .map(count_nodes)
        .sum::<usize>()
}

/// A childless node has depth 1.
pub fn get_depth(node: &Node) -> usize {
    1 + node
        .children()
        .unwrap_or_default()
        .iter()
        .map(get_depth)
        .max()
        .unwrap_or(0)
}

pub fn find_node_mut<'a, F>(node: &'a mut Node, predicate: F) -> Option<&'a mut Node>
where
    F: Fn(&Node) -> bool,
{
    find_node_mut_with(node, &predicate)
}

fn find_node_mut_with<'a>(
    node: &'a mut Node,
    predicate: &dyn Fn(&Node) -> bool,
) -> Option<&'a mut Node> {
    if predicate(node) {
        return Some(node);
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|child| find_node_mut_with(child, predicate))
}

fn has_id(node: &Node, id: &str) -> bool {
    node.as_element()
        .and_then(|el| el.id.as_deref())
        .is_some_and(|own| own == id)
}

pub fn find_element_by_id<'a>(node: &'a Node, id: &str) -> Option<&'a ElementNode> {
    find_node(node, |n| has_id(n, id)).and_then(Node::as_element)
}

pub fn find_element_by_id_mut<'a>(node: &'a mut Node, id: &str) -> Option<&'a mut ElementNode> {
    find_node_mut(node, |n| has_id(n, id)).and_then(Node::as_element_mut)
}

/// Detach the first element carrying `id`. The node passed in is never
/// removed itself, only its descendants.
pub fn remove_node_by_id(node: &mut Node, id: &str) -> Option<Node> {
    let children = node.children_mut()?;
    for pos in 0..children.len() {
        if has_id(&children[pos], id) {
            tracing::debug!(id, "removing node");
            return Some(children.remove(pos));
        }
        if let Some(found) = remove_node_by_id(&mut children[pos], id) {
            return Some(found);
        }
    }
    None
}

/// Insert `child` at `index` among the children of the element `parent_id`.
pub fn insert_child(
    node: &mut Node,
    parent_id: &str,
    index: usize,
    child: Node,
) -> Result<(), TreeError> {
    let parent = find_element_by_id_mut(node, parent_id)
        .ok_or_else(|| TreeError::ParentNotFound(parent_id.to_string()))?;
    let len = parent.children.len();
    if index > len {
        return Err(TreeError::IndexOutOfBounds { index, len });
    }
    tracing::debug!(parent_id, index, "inserting node");
    parent.children.insert(index, child);
    Ok(())
}
