use super::{Link, Node};
use super::super::student::Student;

/// A lazy in-order walk over borrowed nodes.
///
/// The stack holds the path of nodes whose student has not been yielded yet, deepest last.
#[derive(Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    size: usize,
}

impl<'a> Iter<'a> {
    pub fn new(root: &'a Link, size: usize) -> Iter<'a> {
        let mut it = Iter { stack: Vec::new(), size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: &'a Link) {
        while let Some(ref node) = *link {
            self.stack.push(&**node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<&'a Student> {
        let node = self.stack.pop()?;
        self.size -= 1;
        self.descend(&node.right);
        Some(&node.student)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
