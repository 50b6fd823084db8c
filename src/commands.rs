use std::io;

use crate::error::Error;
use crate::gradebook::Gradebook;
use crate::grades;
use crate::lookup::find_id_by_name;
use crate::models::AssignmentStats;
use crate::present::{Presenter, HISTOGRAM_BINS};

pub fn percentage_line(percentage: Option<i64>) -> String {
    match percentage {
        Some(value) => format!("{value}%"),
        None => "None%".to_string(),
    }
}

pub fn stats_lines(stats: Option<AssignmentStats>) -> Vec<String> {
    match stats {
        Some(stats) => vec![
            format!("Min: {}%", stats.min),
            format!("Avg: {}%", stats.avg),
            format!("Max: {}%", stats.max),
        ],
        None => vec!["No submissions recorded".to_string()],
    }
}

/// Resolve a student name and show their course percentage.
pub fn show_student_grade(
    book: &Gradebook,
    name: &str,
    presenter: &mut dyn Presenter,
) -> anyhow::Result<()> {
    match find_id_by_name(book.students(), name) {
        Some(id) => {
            let line = percentage_line(grades::course_percentage(book, id));
            presenter.show_text(&[line])?;
        }
        None => not_found(
            Error::StudentNotFound {
                name: name.to_string(),
            },
            presenter,
        )?,
    }
    Ok(())
}

/// Resolve an assignment name and show its min/avg/max.
pub fn show_assignment_stats(
    book: &Gradebook,
    name: &str,
    presenter: &mut dyn Presenter,
) -> anyhow::Result<()> {
    match find_id_by_name(book.assignments(), name) {
        Some(id) => presenter.show_text(&stats_lines(grades::assignment_stats(book, id)))?,
        None => not_found(assignment_not_found(name), presenter)?,
    }
    Ok(())
}

/// Resolve an assignment name and chart its score distribution.
pub fn show_assignment_graph(
    book: &Gradebook,
    name: &str,
    presenter: &mut dyn Presenter,
) -> anyhow::Result<()> {
    let Some(id) = find_id_by_name(book.assignments(), name) else {
        not_found(assignment_not_found(name), presenter)?;
        return Ok(());
    };
    let title = book
        .assignments()
        .get(id)
        .map(|a| a.name.as_str())
        .unwrap_or(name);
    let scores = grades::assignment_scores(book, id);
    presenter.show_histogram(&scores, title, &HISTOGRAM_BINS)?;
    Ok(())
}

fn assignment_not_found(name: &str) -> Error {
    Error::AssignmentNotFound {
        name: name.to_string(),
    }
}

fn not_found(err: Error, presenter: &mut dyn Presenter) -> io::Result<()> {
    if let Error::StudentNotFound { name } | Error::AssignmentNotFound { name } = &err {
        tracing::debug!(name = name.as_str(), "lookup failed");
    }
    presenter.show_text(&[err.to_string()])
}
