//! The record type stored in the tree.

use compare::Compare;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use super::error::ParseErrorKind;

/// A student, indexed by average grade.
///
/// Students are immutable once constructed. The tree orders them by [`key`](#method.key) alone;
/// the text fields play no part in ordering and may repeat freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    name: String,
    group: String,
    course: i64,
    age: i64,
    average_grade: f64,
}

impl Student {
    /// Creates a student.
    ///
    /// # Examples
    ///
    /// ```
    /// let student = gradebook::Student::new("Umar", "4217", 2, 19, 97.0);
    /// assert_eq!(student.key(), 97.0);
    /// assert_eq!(student.to_string(), "Student(Umar, 4217, 2, 19, 97)");
    /// ```
    pub fn new<N, G>(name: N, group: G, course: i64, age: i64, average_grade: f64) -> Self
        where N: Into<String>, G: Into<String> {

        Student {
            name: name.into(),
            group: group.into(),
            course: course,
            age: age,
            average_grade: average_grade,
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn group(&self) -> &str { &self.group }

    pub fn course(&self) -> i64 { self.course }

    pub fn age(&self) -> i64 { self.age }

    pub fn average_grade(&self) -> f64 { self.average_grade }

    /// Returns the ordering key, which is the student's average grade.
    pub fn key(&self) -> f64 { self.average_grade }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Student({}, {}, {}, {}, {})",
               self.name, self.group, self.course, self.age, self.average_grade)
    }
}

/// Parses one line of the roster format: `name,group,course,age,average_grade`.
///
/// Commas cannot be escaped, so a name or group containing a comma does not survive a round
/// trip through this format.
impl FromStr for Student {
    type Err = ParseErrorKind;

    fn from_str(line: &str) -> Result<Self, ParseErrorKind> {
        let fields: Vec<&str> = line.split(',').collect();
        let (name, group, course, age, grade) = match fields[..] {
            [name, group, course, age, grade] => (name, group, course, age, grade),
            _ => return Err(ParseErrorKind::FieldCount(fields.len())),
        };

        fn integer(field: &'static str, value: &str) -> Result<i64, ParseErrorKind> {
            value.trim().parse().map_err(|_| ParseErrorKind::Integer {
                field: field,
                value: value.to_owned(),
            })
        }

        let average_grade = grade.trim().parse()
            .map_err(|_| ParseErrorKind::Key(grade.to_owned()))?;

        Ok(Student::new(name, group, integer("course", course)?, integer("age", age)?,
                        average_grade))
    }
}

/// Orders students, and bare keys against students, by average grade.
///
/// Grades are compared with `f64::total_cmp`, so every key, including NaN, has a fixed place in
/// the order. A consequence is that `-0.0` sorts strictly before `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey;

impl Compare<Student> for ByKey {
    fn compare(&self, l: &Student, r: &Student) -> Ordering { l.key().total_cmp(&r.key()) }
}

impl Compare<f64, Student> for ByKey {
    fn compare(&self, key: &f64, r: &Student) -> Ordering { key.total_cmp(&r.key()) }
}
