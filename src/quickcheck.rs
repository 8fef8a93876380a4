use ::quickcheck::{Arbitrary, Gen};
use super::student::Student;
use super::tree::Tree;

const NAMES: &[&str] = &["Umar", "Dima", "Aleksandr", "Sherzod", "Nikita", "Liza", "Nastya"];
const GROUPS: &[&str] = &["4217", "4218", "4311"];

/// Grades are drawn from a small range of halves so that generated trees hold duplicates.
impl Arbitrary for Student {
    fn arbitrary(g: &mut Gen) -> Self {
        let name = g.choose(NAMES).copied().unwrap_or("Dima");
        let group = g.choose(GROUPS).copied().unwrap_or("4217");
        let course = i64::from(u8::arbitrary(g) % 6) + 1;
        let age = i64::from(u8::arbitrary(g) % 10) + 17;
        let grade = f64::from(i8::arbitrary(g)) / 2.0;
        Student::new(name, group, course, age, grade)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let student = self.clone();
        Box::new(self.average_grade().shrink().map(move |grade| {
            Student::new(student.name(), student.group(), student.course(), student.age(), grade)
        }))
    }
}

impl Arbitrary for Tree {
    fn arbitrary(g: &mut Gen) -> Self { Vec::<Student>::arbitrary(g).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<Student> = self.iter().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
