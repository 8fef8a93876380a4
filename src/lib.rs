//! A roster of students indexed by average grade.
//!
//! [`Tree`] keeps [`Student`]s in an AVL tree ordered by average grade, supporting insertion,
//! removal, lookup, minimum and maximum queries, in-order traversal, and saving to and loading
//! from a plain comma-separated text file.
//!
//! ```
//! use gradebook::{Student, Tree};
//!
//! let mut tree = Tree::new();
//!
//! for &grade in &[97.0, 5.0, 12.0, 47.0, 91.0] {
//!     tree.insert(Student::new("student", "4217", 2, 19, grade));
//! }
//!
//! assert_eq!(tree.minimum().unwrap().key(), 5.0);
//! assert_eq!(tree.maximum().unwrap().key(), 97.0);
//!
//! tree.remove(5.0).unwrap();
//! assert!(tree.find(5.0).is_none());
//! assert_eq!(tree.minimum().unwrap().key(), 12.0);
//! ```

mod error;
mod node;
mod persist;
mod student;
mod tree;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::{Error, ParseErrorKind, Result};
pub use node::Node;
pub use student::{ByKey, Student};
pub use tree::{Iter, Tree};
