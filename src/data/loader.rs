//! Question file loading.
//!
//! The primary format is CSV with a header row:
//!
//! ```text
//! question,optA,optB,optC,answer
//! What is 2 + 2?,3,4,5,B
//! ```
//!
//! A JSON array of objects with the same field names is accepted too. The
//! format is picked from the file extension.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Choice, Question, QuestionStore};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported question file extension: {0}")]
    UnsupportedFormat(String),
}

/// One row of the question table.
#[derive(Debug, Deserialize)]
struct QuestionRow {
    question: String,
    #[serde(rename = "optA")]
    opt_a: String,
    #[serde(rename = "optB")]
    opt_b: String,
    #[serde(rename = "optC")]
    opt_c: String,
    answer: String,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        let options = vec![
            Choice::new('A', row.opt_a),
            Choice::new('B', row.opt_b),
            Choice::new('C', row.opt_c),
        ];
        Question::new(row.question, options, row.answer)
    }
}

/// Load the question store from `path`.
///
/// A missing file is not an error: it yields an empty store, and the quiz
/// opens straight onto the 0/0 result screen.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<QuestionStore, LoadError> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, starting with no questions", path.display());
            return Ok(QuestionStore::default());
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let store = match extension.as_str() {
        "csv" | "" => parse_csv(content.as_bytes())?,
        "json" => parse_json(&content)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    info!("Loaded {} questions from {}", store.len(), path.display());
    Ok(store)
}

/// Parse CSV with a header row. Rows that cannot be read are skipped.
pub fn parse_csv<R: Read>(reader: R) -> Result<QuestionStore, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    csv_reader.headers()?;

    let mut questions = Vec::new();
    for (line, row) in csv_reader.deserialize::<QuestionRow>().enumerate() {
        match row {
            Ok(row) => questions.push(check(row.into())),
            // Line 1 is the header.
            Err(err) => warn!("Skipping question row {}: {}", line + 2, err),
        }
    }

    Ok(QuestionStore::new(questions))
}

pub fn parse_json(content: &str) -> Result<QuestionStore, LoadError> {
    let rows: Vec<QuestionRow> = serde_json::from_str(content)?;
    Ok(rows.into_iter().map(|row| check(row.into())).collect::<Vec<_>>().into())
}

fn check(question: Question) -> Question {
    if !question.has_valid_key() {
        debug!(
            "Answer key {:?} for {:?} matches no option",
            question.correct_key, question.prompt
        );
    }
    question
}
