use std::fmt::Write;

use chrono::NaiveDate;

use crate::gradebook::Gradebook;
use crate::grades;

pub fn build_report(book: &Gradebook, generated_on: NaiveDate) -> String {
    let class_grades = grades::class_grades(book);

    let mut output = String::new();

    let _ = writeln!(output, "# Course Grade Report");
    let _ = writeln!(
        output,
        "Generated on {} from {} students, {} assignments, {} submissions",
        generated_on,
        book.students().len(),
        book.assignments().len(),
        book.submission_count()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Student Grades");

    if class_grades.is_empty() {
        let _ = writeln!(output, "No students loaded.");
    } else {
        for grade in class_grades.iter() {
            match grade.percentage {
                Some(percentage) => {
                    let _ = writeln!(
                        output,
                        "- {} ({}): {}%",
                        grade.student_name, grade.student_id, percentage
                    );
                }
                None => {
                    let _ = writeln!(
                        output,
                        "- {} ({}): no graded submissions",
                        grade.student_name, grade.student_id
                    );
                }
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Assignment Statistics");

    if book.assignments().is_empty() {
        let _ = writeln!(output, "No assignments loaded.");
    } else {
        for assignment in book.assignments().iter() {
            let count = book.submissions_for_assignment(&assignment.id).len();
            match grades::assignment_stats(book, &assignment.id) {
                Some(stats) => {
                    let _ = writeln!(
                        output,
                        "- {} ({} points): min {}%, avg {}%, max {}% across {} submissions",
                        assignment.name, assignment.points, stats.min, stats.avg, stats.max, count
                    );
                }
                None => {
                    let _ = writeln!(
                        output,
                        "- {} ({} points): no submissions",
                        assignment.name, assignment.points
                    );
                }
            }
        }
    }

    output
}
