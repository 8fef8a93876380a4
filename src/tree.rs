//! A roster of students ordered by average grade, stored in an AVL tree.

use std::fmt::{self, Debug, Display};
use std::iter::{self, IntoIterator};
use super::error::{Error, Result};
use super::node::{self, Dir, Left, Node, Right};
use super::student::Student;

/// A roster of students ordered by average grade, stored in an AVL tree.
///
/// Several students may share a grade. A student whose grade equals a node's grade is placed in
/// that node's right subtree, so equal grades are adjacent in key order, but their order relative
/// to each other is unspecified.
#[derive(Clone, Default)]
pub struct Tree {
    root: node::Link,
    len: usize,
}

impl Tree {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Student, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(Student::new("Nikita", "4217", 2, 19, 91.0));
    /// tree.insert(Student::new("Dima", "4217", 2, 19, 5.0));
    /// tree.insert(Student::new("Liza", "4217", 2, 19, 65.0));
    ///
    /// let names: Vec<&str> = tree.iter().map(Student::name).collect();
    /// assert_eq!(names, ["Dima", "Liza", "Nikita"]);
    /// ```
    pub fn new() -> Self { Tree { root: None, len: 0 } }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of students in the tree.
    pub fn len(&self) -> usize { self.len }

    /// Removes every student from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the root node, if any, for inspecting the tree's shape.
    pub fn root(&self) -> Option<&Node> { self.root.as_deref() }

    pub(crate) fn root_link(&self) -> &node::Link { &self.root }

    /// Inserts a student. Insertion always succeeds, whether or not the grade is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Student, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Student::new("Nastya", "4217", 2, 19, 86.0));
    /// tree.insert(Student::new("Natasha", "4217", 2, 19, 86.0));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, student: Student) {
        self.root = Some(node::insert(self.root.take(), student));
        self.len += 1;
    }

    /// Removes a student with the given grade and returns it, or `Ok(None)` if no student has
    /// that grade. When several students share the grade, one of them is removed.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyTree`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Error, Student, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(matches!(tree.remove(5.0), Err(Error::EmptyTree)));
    ///
    /// tree.insert(Student::new("Dima", "4217", 2, 19, 5.0));
    /// assert!(tree.remove(6.0).unwrap().is_none());
    /// assert_eq!(tree.remove(5.0).unwrap().map(|s| s.key()), Some(5.0));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: f64) -> Result<Option<Student>> {
        if self.is_empty() { return Err(Error::EmptyTree); }

        let (root, student) = node::remove(self.root.take(), key);
        self.root = root;
        if student.is_some() { self.len -= 1; }
        Ok(student)
    }

    /// Returns a student with the given grade, or `None` if the tree holds no such student.
    ///
    /// When several students share the grade, any one of them may be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Student, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.find(97.0).is_none());
    ///
    /// tree.insert(Student::new("Umar", "4217", 2, 19, 97.0));
    /// assert_eq!(tree.find(97.0).map(Student::name), Some("Umar"));
    /// ```
    pub fn find(&self, key: f64) -> Option<&Student> { node::find(&self.root, key) }

    /// Returns the student with the lowest grade.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyTree`] if the tree is empty.
    pub fn minimum(&self) -> Result<&Student> {
        Left::extremum(&self.root).map(Node::student).ok_or(Error::EmptyTree)
    }

    /// Returns the student with the highest grade.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyTree`] if the tree is empty.
    pub fn maximum(&self) -> Result<&Student> {
        Right::extremum(&self.root).map(Node::student).ok_or(Error::EmptyTree)
    }

    /// Calls `visit` on every student in ascending order of grade.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Student, Tree};
    ///
    /// let tree: Tree = [12.0, 5.0, 47.0].iter()
    ///     .map(|&grade| Student::new("s", "4217", 2, 19, grade))
    ///     .collect();
    ///
    /// let mut grades = vec![];
    /// tree.symmetric_traversal(|s| grades.push(s.key()));
    /// assert_eq!(grades, [5.0, 12.0, 47.0]);
    /// ```
    pub fn symmetric_traversal<F>(&self, mut visit: F) where F: FnMut(&Student) {
        node::in_order(&self.root, &mut visit);
    }

    /// Returns an iterator over the students in ascending order of grade.
    ///
    /// The iterator is lazy, so it may be dropped part way through; calling `iter` again starts
    /// over from the lowest grade.
    pub fn iter(&self) -> Iter { Iter(node::Iter::new(&self.root, self.len)) }

    /// Returns the tree drawn sideways, one student per line, with each right subtree above its
    /// parent and each left subtree below.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Student, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.render(), "Tree is empty\n");
    ///
    /// tree.insert(Student::new("Dima", "4217", 2, 19, 5.0));
    /// assert_eq!(tree.render(), "└── Student(Dima, 4217, 2, 19, 5)\n");
    /// ```
    pub fn render(&self) -> String { self.to_string() }
}

impl Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root {
            None => writeln!(f, "Tree is empty"),
            Some(ref root) => node::draw(root, "", true, f),
        }
    }
}

impl Extend<Student> for Tree {
    fn extend<I: IntoIterator<Item=Student>>(&mut self, it: I) {
        for student in it { self.insert(student); }
    }
}

impl iter::FromIterator<Student> for Tree {
    fn from_iter<I: IntoIterator<Item=Student>>(it: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(it);
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Student;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}

/// An iterator over the tree's students in ascending order of grade.
///
/// Acquire through [`Tree::iter`](struct.Tree.html#method.iter).
#[derive(Clone)]
pub struct Iter<'a>(node::Iter<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Student;
    fn next(&mut self) -> Option<&'a Student> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
