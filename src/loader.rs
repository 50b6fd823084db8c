use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::gradebook::Gradebook;
use crate::models::{Assignment, Student, Submission};
use crate::roster::Roster;

pub const STUDENTS_FILE: &str = "students.txt";
pub const ASSIGNMENTS_FILE: &str = "assignments.txt";
pub const SUBMISSIONS_FILE: &str = "submissions.txt";

/// Load the three tables from `dir` and index them.
pub fn load_dir(dir: &Path) -> Result<Gradebook> {
    let students = read_table(dir, STUDENTS_FILE, load_students)?;
    let assignments = read_table(dir, ASSIGNMENTS_FILE, load_assignments)?;
    let submissions = read_table(dir, SUBMISSIONS_FILE, load_submissions)?;

    info!(
        students = students.len(),
        assignments = assignments.len(),
        submissions = submissions.len(),
        dir = %dir.display(),
        "loaded gradebook tables"
    );

    Ok(Gradebook::new(students, assignments, submissions))
}

fn read_table<T>(
    dir: &Path,
    file_name: &str,
    parse: fn(File) -> std::result::Result<T, csv::Error>,
) -> Result<T> {
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|source| Error::MissingFile {
        path: path.clone(),
        source,
    })?;
    parse(file).map_err(|source| Error::Read { path, source })
}

/// Parse `<id>,<name>` or `<name>,<id>` lines, split once on the first
/// comma. The purely numeric half is the id; a line without exactly one
/// numeric half is dropped.
pub fn load_students<R: Read>(reader: R) -> std::result::Result<Roster<Student>, csv::Error> {
    let mut students = Roster::new();
    for_each_record(reader, "students", Trim::None, |record| {
        if record.len() < 2 {
            return false;
        }
        let first = record[0].trim();
        let rest = record.iter().skip(1).collect::<Vec<_>>().join(",");
        let second = rest.trim();
        let (id, name) = match (is_numeric(first), is_numeric(second)) {
            (true, false) => (first, second),
            (false, true) => (second, first),
            _ => return false,
        };
        if name.is_empty() {
            return false;
        }
        students.insert(Student {
            id: id.to_string(),
            name: name.to_string(),
        });
        true
    })?;
    Ok(students)
}

/// Parse `<id>,<name>,<points>` lines. Points must be a positive integer.
pub fn load_assignments<R: Read>(
    reader: R,
) -> std::result::Result<Roster<Assignment>, csv::Error> {
    let mut assignments = Roster::new();
    for_each_record(reader, "assignments", Trim::All, |record| {
        if record.len() != 3 {
            return false;
        }
        match record.deserialize::<Assignment>(None) {
            Ok(assignment) if assignment.points > 0 => {
                assignments.insert(assignment);
                true
            }
            _ => false,
        }
    })?;
    Ok(assignments)
}

/// Parse `<student_id>,<assignment_id>,<fraction>` lines. Duplicates are kept.
pub fn load_submissions<R: Read>(reader: R) -> std::result::Result<Vec<Submission>, csv::Error> {
    let mut submissions = Vec::new();
    for_each_record(reader, "submissions", Trim::All, |record| {
        if record.len() != 3 {
            return false;
        }
        match record.deserialize::<Submission>(None) {
            Ok(submission) if submission.fraction.is_finite() => {
                submissions.push(submission);
                true
            }
            _ => false,
        }
    })?;
    Ok(submissions)
}

/// Feed every decodable line to `accept` as comma-separated fields. Quote
/// characters are plain text, so a record never spans more than one line.
/// Lines `accept` rejects and lines the reader cannot decode are dropped;
/// only I/O failures escape.
fn for_each_record<R, F>(
    reader: R,
    table: &str,
    trim: Trim,
    mut accept: F,
) -> std::result::Result<(), csv::Error>
where
    R: Read,
    F: FnMut(&StringRecord) -> bool,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(trim)
        .from_reader(reader);

    let mut dropped = 0usize;
    for result in reader.records() {
        match result {
            Ok(record) => {
                if !accept(&record) {
                    dropped += 1;
                    debug!(
                        table,
                        line = ?record.position().map(|p| p.line()),
                        "dropping malformed line"
                    );
                }
            }
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                dropped += 1;
                debug!(table, %err, "dropping undecodable line");
            }
        }
    }

    if dropped > 0 {
        debug!(table, dropped, "skipped malformed lines");
    }
    Ok(())
}

fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}
