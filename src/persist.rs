//! Saving and loading rosters as plain text.
//!
//! A roster file holds one student per line as `name,group,course,age,average_grade`, with no
//! header. Commas inside names or groups are not escaped, so such students cannot be saved
//! faithfully.

use fs_err::File;
use log::{debug, warn};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use super::error::{Error, Result};
use super::node;
use super::student::Student;
use super::tree::Tree;

fn write_student<W>(writer: &mut W, student: &Student) -> std::io::Result<()> where W: Write {
    writeln!(writer, "{},{},{},{},{}", student.name(), student.group(), student.course(),
             student.age(), student.average_grade())
}

impl Tree {
    /// Writes every student to `writer`, one per line, in pre-order.
    ///
    /// Grades are written in the shortest form that reads back as the same `f64`, so loading the
    /// output reproduces the same students.
    pub fn write_to<W>(&self, mut writer: W) -> Result<()> where W: Write {
        node::try_pre_order(self.root_link(),
                            &mut |student: &Student| write_student(&mut writer, student))?;
        writer.flush()?;
        Ok(())
    }

    /// Saves the tree to the file at `path`, replacing its contents.
    pub fn save<P>(&self, path: P) -> Result<()> where P: AsRef<Path> {
        let path = path.as_ref();
        self.write_to(BufWriter::new(File::create(path)?))?;
        debug!("saved {} students to {}", self.len(), path.display());
        Ok(())
    }

    /// Replaces the tree's contents with the students read from `reader` and returns how many
    /// were read.
    ///
    /// Lines may end in `\n` or `\r\n`; nothing else is stripped, so names keep any surrounding
    /// spaces. A blank line has one field and is rejected like any other malformed line.
    /// Students are inserted one by one as their lines are parsed, so if a line is malformed the
    /// tree keeps the students read before it and remains balanced.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Parse`] on the first malformed line, or [`Error::Io`] if reading
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradebook::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let count = tree.read_from("Dima,4217,2,19,5\nUmar,4217,2,19,97\n".as_bytes()).unwrap();
    /// assert_eq!(count, 2);
    /// assert_eq!(tree.maximum().unwrap().name(), "Umar");
    ///
    /// let err = tree.read_from("Liza,4217,2,19,65\nNikita,4217\n".as_bytes()).unwrap_err();
    /// assert!(matches!(err, Error::Parse { line: 2, .. }));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn read_from<R>(&mut self, reader: R) -> Result<usize> where R: BufRead {
        self.clear();

        for (index, line) in reader.lines().enumerate() {
            let student = line?.parse::<Student>().map_err(|kind| {
                warn!("stopped loading at line {}: {}", index + 1, kind);
                Error::Parse { line: index + 1, kind: kind }
            })?;
            self.insert(student);
        }

        Ok(self.len())
    }

    /// Replaces the tree's contents with the roster saved at `path`.
    ///
    /// See [`read_from`](#method.read_from) for the handling of malformed lines.
    pub fn load<P>(&mut self, path: P) -> Result<usize> where P: AsRef<Path> {
        let path = path.as_ref();
        let count = self.read_from(BufReader::new(File::open(path)?))?;
        debug!("loaded {} students from {}", count, path.display());
        Ok(count)
    }
}
