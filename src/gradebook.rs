use std::collections::HashMap;

use crate::models::{Assignment, Student, Submission};
use crate::roster::Roster;

/// `(other id, fraction)` pairs in file order.
pub type ScoreList = Vec<(String, f64)>;

/// Loaded tables plus the submission indices built from them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradebook {
    students: Roster<Student>,
    assignments: Roster<Assignment>,
    by_assignment: HashMap<String, ScoreList>,
    by_student: HashMap<String, ScoreList>,
    submission_count: usize,
}

impl Gradebook {
    pub fn new(
        students: Roster<Student>,
        assignments: Roster<Assignment>,
        submissions: Vec<Submission>,
    ) -> Self {
        let mut by_assignment: HashMap<String, ScoreList> = HashMap::new();
        let mut by_student: HashMap<String, ScoreList> = HashMap::new();
        let submission_count = submissions.len();

        for submission in submissions {
            by_assignment
                .entry(submission.assignment_id.clone())
                .or_default()
                .push((submission.student_id.clone(), submission.fraction));
            by_student
                .entry(submission.student_id)
                .or_default()
                .push((submission.assignment_id, submission.fraction));
        }

        Self {
            students,
            assignments,
            by_assignment,
            by_student,
            submission_count,
        }
    }

    pub fn students(&self) -> &Roster<Student> {
        &self.students
    }

    pub fn assignments(&self) -> &Roster<Assignment> {
        &self.assignments
    }

    /// `(assignment id, fraction)` for every submission by this student.
    pub fn submissions_for_student(&self, student_id: &str) -> &[(String, f64)] {
        self.by_student
            .get(student_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(student id, fraction)` for every submission to this assignment.
    pub fn submissions_for_assignment(&self, assignment_id: &str) -> &[(String, f64)] {
        self.by_assignment
            .get(assignment_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn submission_count(&self) -> usize {
        self.submission_count
    }
}
