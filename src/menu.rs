use std::io::{self, BufRead, Write};

use crate::commands::{show_assignment_graph, show_assignment_stats, show_student_grade};
use crate::gradebook::Gradebook;
use crate::present::Presenter;

pub trait Menu {
    /// Show the choices and return the trimmed selection.
    fn prompt_selection(&mut self) -> io::Result<String>;

    fn prompt_text(&mut self, label: &str) -> io::Result<String>;
}

pub struct StdinMenu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinMenu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_trimmed(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Menu for StdinMenu<R, W> {
    fn prompt_selection(&mut self) -> io::Result<String> {
        writeln!(
            self.output,
            "1. Student grade\n2. Assignment statistics\n3. Assignment graph"
        )?;
        write!(self.output, "\nEnter your selection: ")?;
        self.output.flush()?;
        self.read_trimmed()
    }

    fn prompt_text(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_trimmed()
    }
}

/// One pass of the interactive menu. Unrecognised selections do nothing.
pub fn run_menu(
    book: &Gradebook,
    menu: &mut dyn Menu,
    presenter: &mut dyn Presenter,
) -> anyhow::Result<()> {
    match menu.prompt_selection()?.as_str() {
        "1" => {
            let name = menu.prompt_text("What is the student's name: ")?;
            show_student_grade(book, &name, presenter)
        }
        "2" => {
            let name = menu.prompt_text("What is the assignment name: ")?;
            show_assignment_stats(book, &name, presenter)
        }
        "3" => {
            let name = menu.prompt_text("What is the assignment name: ")?;
            show_assignment_graph(book, &name, presenter)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_assignments, load_students, load_submissions};
    use crate::present::TerminalPresenter;
    use std::io::Cursor;

    fn sample_book() -> Gradebook {
        let students = load_students("1,Avery Lee\nJules Moreno,2\n3,Kiara Patel\n".as_bytes());
        let assignments = load_assignments("a1,Lab 1,100\na2,Essay,50\n".as_bytes());
        let submissions = load_submissions(
            "1,a1,0.9\n1,a2,0.5\n2,a1,0.2\n2,a2,1.0\n".as_bytes(),
        );
        Gradebook::new(
            students.unwrap(),
            assignments.unwrap(),
            submissions.unwrap(),
        )
    }

    fn run(input: &str) -> (String, String) {
        let book = sample_book();
        let mut prompts = Vec::new();
        let mut presenter = TerminalPresenter::new(Vec::new(), 10);
        {
            let mut menu = StdinMenu::new(Cursor::new(input.as_bytes()), &mut prompts);
            run_menu(&book, &mut menu, &mut presenter).unwrap();
        }
        (
            String::from_utf8(prompts).unwrap(),
            String::from_utf8(presenter.into_inner()).unwrap(),
        )
    }

    #[test]
    fn student_grade_is_case_insensitive() {
        let (prompts, output) = run("1\nAVERY LEE\n");
        assert!(prompts.contains("Enter your selection: "));
        assert!(prompts.contains("What is the student's name: "));
        assert_eq!(output, "77%\n");
    }

    #[test]
    fn student_without_submissions_shows_none() {
        let (_, output) = run("1\nkiara patel\n");
        assert_eq!(output, "None%\n");
    }

    #[test]
    fn unknown_student_is_reported() {
        let (_, output) = run("1\nNobody\n");
        assert_eq!(output, "Student not found\n");
    }

    #[test]
    fn assignment_stats_are_listed() {
        let (_, output) = run("2\nlab 1\n");
        assert_eq!(output, "Min: 20%\nAvg: 55%\nMax: 90%\n");
    }

    #[test]
    fn unknown_assignment_is_reported() {
        let (_, output) = run("3\nFinal\n");
        assert_eq!(output, "Assignment not found\n");
    }

    #[test]
    fn graph_uses_stored_assignment_name() {
        let (_, output) = run("3\nESSAY\n");
        assert!(output.starts_with("Essay\n"));
        assert!(output.contains("  75-100  | ########## 1"));
    }

    #[test]
    fn other_selections_do_nothing() {
        let (prompts, output) = run("7\n");
        assert!(!prompts.contains("name"));
        assert!(output.is_empty());
    }
}
