use tracing::debug;

use crate::gradebook::Gradebook;
use crate::models::{AssignmentStats, StudentGrade};

/// Round half away from zero to a whole percentage.
pub fn round_percent(value: f64) -> i64 {
    value.round() as i64
}

/// Points-weighted course percentage for a student.
///
/// Submissions to assignments missing from the assignment table are left out
/// of both earned and possible points. Returns `None` when nothing remains to
/// grade, which is distinct from a real 0%.
pub fn course_percentage(book: &Gradebook, student_id: &str) -> Option<i64> {
    let mut earned = 0.0;
    let mut possible = 0.0;

    for (assignment_id, fraction) in book.submissions_for_student(student_id) {
        let Some(assignment) = book.assignments().get(assignment_id) else {
            debug!(
                student_id,
                assignment_id = assignment_id.as_str(),
                "skipping submission for unknown assignment"
            );
            continue;
        };
        let points = f64::from(assignment.points);
        earned += fraction * points;
        possible += points;
    }

    if possible == 0.0 {
        return None;
    }
    Some(round_percent(earned / possible * 100.0))
}

/// Raw percentage scores (fraction x 100) submitted for an assignment.
pub fn assignment_scores(book: &Gradebook, assignment_id: &str) -> Vec<f64> {
    book.submissions_for_assignment(assignment_id)
        .iter()
        .map(|(_, fraction)| fraction * 100.0)
        .collect()
}

/// Unweighted min/avg/max for an assignment; the average is taken over the
/// unrounded scores and rounded once.
pub fn assignment_stats(book: &Gradebook, assignment_id: &str) -> Option<AssignmentStats> {
    let scores = assignment_scores(book, assignment_id);
    if scores.is_empty() {
        return None;
    }

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;

    Some(AssignmentStats {
        min: round_percent(min),
        avg: round_percent(avg),
        max: round_percent(max),
    })
}

/// Course percentage for every student, in roster order.
pub fn class_grades(book: &Gradebook) -> Vec<StudentGrade> {
    book.students()
        .iter()
        .map(|student| StudentGrade {
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            percentage: course_percentage(book, &student.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Student, Submission};

    fn fixture(assignments: &[(&str, u32)], submissions: &[(&str, &str, f64)]) -> Gradebook {
        let students = ["1", "2", "3"]
            .iter()
            .map(|id| Student {
                id: id.to_string(),
                name: format!("Student {id}"),
            })
            .collect();
        let assignments = assignments
            .iter()
            .map(|(id, points)| Assignment {
                id: id.to_string(),
                name: format!("Assignment {id}"),
                points: *points,
            })
            .collect();
        let submissions = submissions
            .iter()
            .map(|(sid, aid, fraction)| Submission {
                student_id: sid.to_string(),
                assignment_id: aid.to_string(),
                fraction: *fraction,
            })
            .collect();
        Gradebook::new(students, assignments, submissions)
    }

    #[test]
    fn course_percentage_weights_by_points() {
        let book = fixture(&[("A", 100), ("B", 50)], &[("1", "A", 0.9), ("1", "B", 0.5)]);
        // (90 + 25) / 150 = 76.67%
        assert_eq!(course_percentage(&book, "1"), Some(77));
    }

    #[test]
    fn course_percentage_ignores_submission_order() {
        let forward = fixture(
            &[("A", 100), ("B", 50), ("C", 20)],
            &[("1", "A", 0.9), ("1", "B", 0.5), ("1", "C", 0.3)],
        );
        let reversed = fixture(
            &[("A", 100), ("B", 50), ("C", 20)],
            &[("1", "C", 0.3), ("1", "B", 0.5), ("1", "A", 0.9)],
        );
        assert_eq!(
            course_percentage(&forward, "1"),
            course_percentage(&reversed, "1")
        );
    }

    #[test]
    fn no_submissions_is_none_not_zero() {
        let book = fixture(&[("A", 100)], &[("2", "A", 0.0)]);
        assert_eq!(course_percentage(&book, "1"), None);
        assert_eq!(course_percentage(&book, "2"), Some(0));
    }

    #[test]
    fn unknown_assignment_is_excluded() {
        let book = fixture(&[("A", 100)], &[("1", "A", 0.8), ("1", "ghost", 0.0)]);
        assert_eq!(course_percentage(&book, "1"), Some(80));

        let only_ghost = fixture(&[("A", 100)], &[("1", "ghost", 1.0)]);
        assert_eq!(course_percentage(&only_ghost, "1"), None);
    }

    #[test]
    fn single_submission_stats() {
        let book = fixture(&[("A", 100)], &[("1", "A", 0.8)]);
        assert_eq!(
            assignment_stats(&book, "A"),
            Some(AssignmentStats {
                min: 80,
                avg: 80,
                max: 80
            })
        );
    }

    #[test]
    fn stats_average_unrounded_scores() {
        // 12.4 + 12.4 + 13.4 = 38.2 / 3 = 12.73 -> 13; averaging rounded
        // values (12, 12, 13) would give 12.
        let book = fixture(
            &[("A", 10)],
            &[("1", "A", 0.124), ("2", "A", 0.124), ("3", "A", 0.134)],
        );
        assert_eq!(
            assignment_stats(&book, "A"),
            Some(AssignmentStats {
                min: 12,
                avg: 13,
                max: 13
            })
        );
    }

    #[test]
    fn stats_are_unweighted_by_points() {
        let book = fixture(&[("A", 10)], &[("1", "A", 0.5), ("2", "A", 1.0)]);
        let stats = assignment_stats(&book, "A").unwrap();
        assert_eq!((stats.min, stats.avg, stats.max), (50, 75, 100));
    }

    #[test]
    fn stats_without_submissions_are_none() {
        let book = fixture(&[("A", 100)], &[]);
        assert_eq!(assignment_stats(&book, "A"), None);
        assert!(assignment_scores(&book, "A").is_empty());
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(round_percent(62.5), 63);
        assert_eq!(round_percent(0.5), 1);
        assert_eq!(round_percent(76.4), 76);
    }

    #[test]
    fn class_grades_follow_roster_order() {
        let book = fixture(&[("A", 100)], &[("3", "A", 0.7), ("1", "A", 0.9)]);
        let grades: Vec<(String, Option<i64>)> = class_grades(&book)
            .into_iter()
            .map(|g| (g.student_id, g.percentage))
            .collect();
        assert_eq!(
            grades,
            vec![
                ("1".to_string(), Some(90)),
                ("2".to_string(), None),
                ("3".to_string(), Some(70)),
            ]
        );
    }
}
