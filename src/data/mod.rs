mod loader;

pub use loader::{load_questions, parse_csv, parse_json, LoadError};
