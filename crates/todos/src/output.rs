//! Rendering of command results.
//!
//! [`OutputMode`] selects between a plain column layout for people and a
//! pretty-printed JSON document for scripts.

use serde::Serialize;
use thiserror::Error;
use todo_store::{Todo, TodoId};
use unicode_width::UnicodeWidthStr;

/// Controls how results are written.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// One aligned line per record
    #[default]
    Text,
    /// Records serialized as JSON
    Json,
}

/// Errors from rendering output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a list of records.
///
/// JSON output is an array (`[]` when empty); text output is one line per
/// record, or `No todos.` when empty.
pub fn render_todos(todos: &[Todo], mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Json => to_json(&todos),
        OutputMode::Text if todos.is_empty() => Ok("No todos.".to_string()),
        OutputMode::Text => Ok(text_table(todos)),
    }
}

/// Renders a single record.
pub fn render_todo(todo: &Todo, mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Json => to_json(todo),
        OutputMode::Text => Ok(text_table(std::slice::from_ref(todo))),
    }
}

/// Renders the ids of newly inserted records.
pub fn render_ids(ids: &[TodoId], mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Json if ids.len() == 1 => to_json(&serde_json::json!({ "_id": ids[0] })),
        OutputMode::Json => to_json(&ids),
        OutputMode::Text => Ok(ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn text_table(todos: &[Todo]) -> String {
    let owner_width = column_width(todos, |t| &t.owner);
    let category_width = column_width(todos, |t| &t.category);

    todos
        .iter()
        .map(|todo| {
            format!(
                "{}  [{}]  {}  {}  {}",
                todo.id,
                if todo.status { "x" } else { " " },
                pad_to_width(&todo.owner, owner_width),
                pad_to_width(&todo.category, category_width),
                todo.body,
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Widest display width of a column, in terminal cells.
fn column_width(todos: &[Todo], field: impl Fn(&Todo) -> &String) -> usize {
    todos
        .iter()
        .map(|todo| field(todo).width())
        .max()
        .unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(padding))
}
