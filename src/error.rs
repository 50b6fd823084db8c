use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required table file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The table was opened but reading it failed part way
    #[error("failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Student not found")]
    StudentNotFound { name: String },

    #[error("Assignment not found")]
    AssignmentNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
