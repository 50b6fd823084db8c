use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod gradebook;
mod grades;
mod loader;
mod lookup;
mod menu;
mod models;
mod present;
mod report;
mod roster;

use gradebook::Gradebook;
use lookup::find_id_by_name;
use present::TerminalPresenter;

const DEFAULT_BAR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "course-gradebook")]
#[command(about = "Course grades and assignment statistics from flat-file tables", long_about = None)]
struct Cli {
    /// Directory holding students.txt, assignments.txt and submissions.txt
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,
    /// Overall course percentage for a student
    Grade {
        #[arg(long)]
        student: String,
        #[arg(long)]
        json: bool,
    },
    /// Min, average and max score for an assignment
    Stats {
        #[arg(long)]
        assignment: String,
        #[arg(long)]
        json: bool,
    },
    /// Histogram of an assignment's scores
    Graph {
        #[arg(long)]
        assignment: String,
        #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
        width: usize,
    },
    /// Write a markdown report for the whole class
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let book = loader::load_dir(&cli.data_dir)
        .with_context(|| format!("failed to load gradebook from {}", cli.data_dir.display()))?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut menu = menu::StdinMenu::new(io::stdin().lock(), io::stdout());
            let mut presenter = TerminalPresenter::new(io::stdout(), DEFAULT_BAR_WIDTH);
            menu::run_menu(&book, &mut menu, &mut presenter)?;
        }
        Commands::Grade { student, json } => {
            if json {
                print_grade_json(&book, &student)?;
            } else {
                let mut presenter = TerminalPresenter::new(io::stdout(), DEFAULT_BAR_WIDTH);
                commands::show_student_grade(&book, &student, &mut presenter)?;
            }
        }
        Commands::Stats { assignment, json } => {
            if json {
                print_stats_json(&book, &assignment)?;
            } else {
                let mut presenter = TerminalPresenter::new(io::stdout(), DEFAULT_BAR_WIDTH);
                commands::show_assignment_stats(&book, &assignment, &mut presenter)?;
            }
        }
        Commands::Graph { assignment, width } => {
            let mut presenter = TerminalPresenter::new(io::stdout(), width);
            commands::show_assignment_graph(&book, &assignment, &mut presenter)?;
        }
        Commands::Report { out } => {
            let report = report::build_report(&book, chrono::Local::now().date_naive());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn print_grade_json(book: &Gradebook, name: &str) -> anyhow::Result<()> {
    let Some(id) = find_id_by_name(book.students(), name) else {
        println!("{}", error::Error::StudentNotFound { name: name.to_string() });
        return Ok(());
    };
    let student = book.students().get(id).context("student id vanished")?;
    let value = json!({
        "student": student,
        "percentage": grades::course_percentage(book, id),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_stats_json(book: &Gradebook, name: &str) -> anyhow::Result<()> {
    let Some(id) = find_id_by_name(book.assignments(), name) else {
        println!("{}", error::Error::AssignmentNotFound { name: name.to_string() });
        return Ok(());
    };
    let assignment = book.assignments().get(id).context("assignment id vanished")?;
    let stats = grades::assignment_stats(book, id);
    let value = json!({
        "assignment": assignment,
        "submissions": book.submissions_for_assignment(id).len(),
        "min": stats.map(|s| s.min),
        "avg": stats.map(|s| s.avg),
        "max": stats.map(|s| s.max),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
