use gradebook::{Error, Node, ParseErrorKind, Student, Tree};
use std::io::Write;
use tempfile::NamedTempFile;

fn roster() -> Vec<Student> {
    vec![
        Student::new("Umar", "4217", 2, 19, 97.0),
        Student::new("Dima", "4217", 2, 19, 5.0),
        Student::new("Aleksandr", "4217", 3, 19, 12.0),
        Student::new("Sherzod", "4217", 2, 19, 47.0),
        Student::new("Nikita", "4217", 2, 19, 91.0),
        Student::new("Liza", "4217", 2, 19, 65.0),
        Student::new("Neforochek", "4217", 2, 19, 10.0),
        Student::new("Nastya", "4217", 2, 19, 86.0),
        Student::new("Natasha", "4217", 2, 19, 76.0),
        Student::new("Vlad Laikhtman", "4217", 2, 19, 44.0),
    ]
}

fn assert_balanced(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let left = assert_balanced(node.left());
            let right = assert_balanced(node.right());
            assert!((right as isize - left as isize).abs() <= 1);
            assert_eq!(node.height(), 1 + left.max(right));
            node.height()
        }
    }
}

fn grades(tree: &Tree) -> Vec<f64> { tree.iter().map(Student::key).collect() }

#[test]
fn inserts_sample_roster_in_order() {
    let tree: Tree = roster().into_iter().collect();

    assert_balanced(tree.root());
    assert_eq!(grades(&tree), [5.0, 10.0, 12.0, 44.0, 47.0, 65.0, 76.0, 86.0, 91.0, 97.0]);
    assert_eq!(tree.len(), 10);
}

#[test]
fn remove_then_find() {
    let mut tree: Tree = roster().into_iter().collect();

    assert_eq!(tree.remove(5.0).unwrap().map(|s| s.name().to_owned()), Some("Dima".to_owned()));
    assert!(tree.find(5.0).is_none());
    assert_eq!(tree.minimum().unwrap().key(), 10.0);
    assert_eq!(tree.minimum().unwrap().name(), "Neforochek");
    assert_eq!(tree.maximum().unwrap().name(), "Umar");
    assert_balanced(tree.root());
}

#[test]
fn empty_tree_fails_loudly() {
    let mut tree = Tree::new();

    assert!(matches!(tree.minimum(), Err(Error::EmptyTree)));
    assert!(matches!(tree.maximum(), Err(Error::EmptyTree)));
    assert!(matches!(tree.remove(1.0), Err(Error::EmptyTree)));
    assert!(tree.find(1.0).is_none());
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn drains_to_empty() {
    let mut tree: Tree = roster().into_iter().collect();

    for student in roster() {
        assert!(tree.remove(student.key()).unwrap().is_some());
        assert_balanced(tree.root());
    }

    assert!(tree.is_empty());
    assert!(matches!(tree.remove(5.0), Err(Error::EmptyTree)));
}

#[test]
fn iteration_can_stop_early_and_restart() {
    let tree: Tree = roster().into_iter().collect();

    let first: Vec<&str> = tree.iter().take_while(|s| s.key() < 40.0).map(Student::name).collect();
    assert_eq!(first, ["Dima", "Neforochek", "Aleksandr"]);
    assert_eq!(tree.iter().next().map(Student::name), Some("Dima"));
    assert_eq!((&tree).into_iter().count(), 10);
}

#[test]
fn save_and_load_round_trip() {
    let tree: Tree = roster().into_iter().collect();
    let file = NamedTempFile::new().unwrap();

    tree.save(file.path()).unwrap();

    let mut loaded = Tree::new();
    assert_eq!(loaded.load(file.path()).unwrap(), 10);
    assert_eq!(loaded.iter().collect::<Vec<_>>(), tree.iter().collect::<Vec<_>>());
    assert_balanced(loaded.root());
}

#[test]
fn saved_file_has_one_line_per_student() {
    let tree: Tree = roster().into_iter().take(3).collect();
    let file = NamedTempFile::new().unwrap();
    tree.save(file.path()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(text, "Aleksandr,4217,3,19,12\nDima,4217,2,19,5\nUmar,4217,2,19,97\n");
}

#[test]
fn short_line_fails_without_corrupting_tree() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Umar,4217,2,19,97").unwrap();
    writeln!(file, "Dima,4217,2,19,5").unwrap();
    writeln!(file, "Aleksandr,4217,3").unwrap();
    writeln!(file, "Sherzod,4217,2,19,47").unwrap();
    file.flush().unwrap();

    let mut tree = Tree::new();
    match tree.load(file.path()) {
        Err(Error::Parse { line, kind }) => {
            assert_eq!(line, 3);
            assert_eq!(kind, ParseErrorKind::FieldCount(3));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    assert_eq!(tree.len(), 2);
    assert_eq!(grades(&tree), [5.0, 97.0]);
    assert_balanced(tree.root());

    tree.insert(Student::new("Liza", "4217", 2, 19, 65.0));
    assert_eq!(grades(&tree), [5.0, 65.0, 97.0]);
}

#[test]
fn blank_line_fails_like_a_malformed_one() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Umar,4217,2,19,97").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Dima,4217,2,19,5").unwrap();
    file.flush().unwrap();

    let mut tree = Tree::new();
    match tree.load(file.path()) {
        Err(Error::Parse { line, kind }) => {
            assert_eq!(line, 2);
            assert_eq!(kind, ParseErrorKind::FieldCount(1));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    assert_eq!(grades(&tree), [97.0]);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut tree = Tree::new();

    match tree.load(dir.path().join("missing.txt")) {
        Err(Error::Io(err)) => assert!(err.to_string().contains("missing.txt")),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn renders_sideways() {
    let tree: Tree = roster().into_iter().take(3).collect();

    assert_eq!(tree.render(),
               "│   ┌── Student(Umar, 4217, 2, 19, 97)\n\
                └── Student(Aleksandr, 4217, 3, 19, 12)\n    \
                └── Student(Dima, 4217, 2, 19, 5)\n");
}
