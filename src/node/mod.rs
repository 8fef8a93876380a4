mod iter;


use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::cmp;
use std::fmt;
use super::student::{ByKey, Student};

pub use self::iter::Iter;

pub type Link = Option<Box<Node>>;

/// A node of the tree, owning one student and its two subtrees.
#[derive(Clone)]
pub struct Node {
    left: Link,
    right: Link,
    height: usize,
    student: Student,
}

impl Node {
    fn new(student: Student) -> Self {
        Node { left: None, right: None, height: 1, student: student }
    }

    /// Returns the student stored in this node.
    pub fn student(&self) -> &Student { &self.student }

    /// Returns the node's left child, if any.
    pub fn left(&self) -> Option<&Node> { self.left.as_deref() }

    /// Returns the node's right child, if any.
    pub fn right(&self) -> Option<&Node> { self.right.as_deref() }

    /// Returns the cached height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize { self.height }

    /// Returns `height(right) - height(left)`.
    pub fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }
}

pub fn height(link: &Link) -> usize { link.as_ref().map_or(0, |node| node.height) }

// Promote the left child to subtree root, if there is one
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut save = match node.left.take() {
        None => return node,
        Some(save) => save,
    };

    trace!("rotate right at {}", node.student.key());
    node.left = save.right.take();
    node.update_height();
    save.right = Some(node);
    save.update_height();
    save
}

// Promote the right child to subtree root, if there is one
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut save = match node.right.take() {
        None => return node,
        Some(save) => save,
    };

    trace!("rotate left at {}", node.student.key());
    node.right = save.left.take();
    node.update_height();
    save.left = Some(node);
    save.update_height();
    save
}

/// Restores the AVL property at `node`, whose subtrees must already be balanced and differ in
/// height by at most two, and returns the new subtree root.
fn balance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();

    let factor = node.balance_factor();
    if factor >= 2 {
        if node.right.as_ref().map_or(false, |right| right.balance_factor() < 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else if factor <= -2 {
        if node.left.as_ref().map_or(false, |left| left.balance_factor() > 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else {
        node
    }
}

/// Inserts `student` below `link` and returns the rebalanced subtree root.
///
/// Students whose key equals a node's key descend to the right.
pub fn insert(link: Link, student: Student) -> Box<Node> {
    match link {
        None => Box::new(Node::new(student)),
        Some(mut node) => {
            if ByKey.compares_lt(&student, &node.student) {
                node.left = Some(insert(node.left.take(), student));
            } else {
                node.right = Some(insert(node.right.take(), student));
            }

            balance(node)
        }
    }
}

/// Removes one student with the given key from below `link`, returning the rebalanced subtree
/// and the removed student. The subtree is returned unchanged if no student has the key.
pub fn remove(link: Link, key: f64) -> (Link, Option<Student>) {
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    match ByKey.compare(&key, &node.student) {
        Less => {
            let (left, student) = remove(node.left.take(), key);
            node.left = left;
            (Some(balance(node)), student)
        }
        Greater => {
            let (right, student) = remove(node.right.take(), key);
            node.right = right;
            (Some(balance(node)), student)
        }
        Equal => {
            let Node { left, right, student, .. } = *node;

            let replacement = match right {
                None => left,
                Some(right) => {
                    let (mut successor, right) = remove_min(right);
                    successor.left = left;
                    successor.right = right;
                    Some(balance(successor))
                }
            };

            (replacement, Some(student))
        }
    }
}

/// Detaches the leftmost node of the subtree rooted at `node`. Returns the detached node, with
/// both links empty, and what remains of the subtree, rebalanced.
fn remove_min(mut node: Box<Node>) -> (Box<Node>, Link) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (node, right)
        }
        Some(left) => {
            let (min, left) = remove_min(left);
            node.left = left;
            (min, Some(balance(node)))
        }
    }
}

/// Returns a student with the given key, if any. Among several students sharing the key, the
/// first one met on the search path is returned.
pub fn find(link: &Link, key: f64) -> Option<&Student> {
    let mut link = link;

    while let Some(ref node) = *link {
        match ByKey.compare(&key, &node.student) {
            Less => link = &node.left,
            Greater => link = &node.right,
            Equal => return Some(&node.student),
        }
    }

    None
}

pub trait Dir {
    fn forward(node: &Node) -> &Link;

    /// Returns the last node reached by following `forward` from `link`.
    fn extremum(link: &Link) -> Option<&Node> {
        let mut node = link.as_deref()?;
        while let Some(next) = Self::forward(node).as_deref() { node = next; }
        Some(node)
    }
}

pub enum Left {}

impl Dir for Left {
    fn forward(node: &Node) -> &Link { &node.left }
}

pub enum Right {}

impl Dir for Right {
    fn forward(node: &Node) -> &Link { &node.right }
}

/// Visits every student below `link` in ascending key order.
pub fn in_order<F>(link: &Link, visit: &mut F) where F: FnMut(&Student) {
    if let Some(ref node) = *link {
        in_order(&node.left, visit);
        visit(&node.student);
        in_order(&node.right, visit);
    }
}

/// Visits every student below `link`, each node before its subtrees, stopping at the first
/// error.
pub fn try_pre_order<F, E>(link: &Link, visit: &mut F) -> Result<(), E>
    where F: FnMut(&Student) -> Result<(), E> {

    if let Some(ref node) = *link {
        visit(&node.student)?;
        try_pre_order(&node.left, visit)?;
        try_pre_order(&node.right, visit)?;
    }

    Ok(())
}

/// Draws the subtree sideways: right subtrees above their parent, left subtrees below.
pub fn draw<W>(node: &Node, prefix: &str, lower: bool, out: &mut W) -> fmt::Result
    where W: fmt::Write {

    if let Some(ref right) = node.right {
        let prefix = format!("{}{}", prefix, if lower { "│   " } else { "    " });
        draw(right, &prefix, false, out)?;
    }

    writeln!(out, "{}{}{}", prefix, if lower { "└── " } else { "┌── " }, node.student)?;

    if let Some(ref left) = node.left {
        let prefix = format!("{}{}", prefix, if lower { "    " } else { "│   " });
        draw(left, &prefix, true, out)?;
    }

    Ok(())
}
