//! Command-line interface.
//!
//! ```text
//! todos list [--filter NAME=VALUE]...   filtered listing
//! todos get <ID>                        single record by id
//! todos add --owner .. --status .. --body .. --category ..
//! todos seed                            insert the reference records
//! ```
//!
//! Global flags: `--config`, `--store`, `--output`, `--debug`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use todo_store::{JsonFileStore, NewTodo, TodoStore};

use crate::config::Config;
use crate::filter::{parse_pair, BuilderOptions, FilterBuilder, FilterRequest};
use crate::output::{render_ids, render_todo, render_todos, OutputMode};

#[derive(Debug, Parser)]
#[command(name = "todos", version, about = "Query and record todos")]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/todos/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Collection file, overriding the configured store path
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List todos matching every given filter
    List {
        /// Filter parameter: status, owner, body or category
        #[arg(long = "filter", short = 'f', value_name = "NAME=VALUE", value_parser = parse_pair)]
        filters: Vec<(String, String)>,
    },
    /// Show one todo by id
    Get {
        /// Record identifier
        id: String,
    },
    /// Add a todo and print its id
    Add {
        #[arg(long)]
        owner: String,
        /// true / complete or false / incomplete
        #[arg(long)]
        status: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        category: String,
    },
    /// Insert the reference records
    Seed,
}

/// The reference records inserted by `todos seed`.
pub fn reference_todos() -> Vec<NewTodo> {
    vec![
        NewTodo::new("Chris", true, "UMM", "pokemon"),
        NewTodo::new("Pat", false, "IBM", "groceries"),
        NewTodo::new("Jamie", true, "Frogs, Inc.", "salad"),
        NewTodo::new("Sam", false, "Frogs, Inc.", "salad"),
    ]
}

/// Loads configuration, opens the store and runs the command.
pub fn run(cli: Cli) -> anyhow::Result<String> {
    let config = Config::load(cli.config.as_deref())?;
    let path = cli.store.unwrap_or(config.store.path);
    let store = JsonFileStore::open(&path)
        .with_context(|| format!("failed to open todo store at {}", path.display()))?;

    execute(
        &store,
        &cli.command,
        BuilderOptions::from(&config.filter),
        cli.output,
    )
}

/// Runs `command` against `store` and returns the rendered result.
pub fn execute<S>(
    store: &S,
    command: &Command,
    options: BuilderOptions,
    mode: OutputMode,
) -> anyhow::Result<String>
where
    S: TodoStore + ?Sized,
{
    match command {
        Command::List { filters } => {
            let request: FilterRequest = filters.iter().cloned().collect();
            let query = FilterBuilder::with_options(options).build(&request);
            let todos = store.find(&query)?;
            Ok(render_todos(&todos, mode)?)
        }
        Command::Get { id } => {
            let id = store.parse_id(id)?;
            let todo = store.resolve(&id)?;
            Ok(render_todo(&todo, mode)?)
        }
        Command::Add {
            owner,
            status,
            body,
            category,
        } => {
            let todo = NewTodo::from_raw(owner, status, body, category)?;
            let id = store.insert(todo)?;
            Ok(render_ids(&[id], mode)?)
        }
        Command::Seed => {
            let ids = reference_todos()
                .into_iter()
                .map(|todo| store.insert(todo))
                .collect::<Result<Vec<_>, _>>()?;
            tracing::info!(count = ids.len(), "seeded reference todos");
            Ok(render_ids(&ids, mode)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_store::{InMemoryStore, StoreError, TodoId};

    fn seeded() -> InMemoryStore {
        InMemoryStore::seeded(reference_todos()).unwrap()
    }

    fn list(filters: &[(&str, &str)]) -> Command {
        Command::List {
            filters: filters
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn owners(json: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let mut owners: Vec<String> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["owner"].as_str().unwrap().to_string())
            .collect();
        owners.sort();
        owners
    }

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from([
            "todos",
            "list",
            "--filter",
            "status=true",
            "-f",
            "category=[P, G]",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::List {
                filters: vec![
                    ("status".to_string(), "true".to_string()),
                    ("category".to_string(), "[P, G]".to_string()),
                ]
            }
        );
    }

    #[test]
    fn rejects_malformed_filter() {
        assert!(Cli::try_parse_from(["todos", "list", "--filter", "status"]).is_err());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["todos", "get", "abc", "--output", "json", "--debug"]).unwrap();
        assert_eq!(cli.output, OutputMode::Json);
        assert!(cli.debug);
        assert_eq!(cli.command, Command::Get { id: "abc".into() });
    }

    #[test]
    fn list_filters_by_status() {
        let out = execute(
            &seeded(),
            &list(&[("status", "true")]),
            BuilderOptions::default(),
            OutputMode::Json,
        )
        .unwrap();
        assert_eq!(owners(&out), vec!["Chris", "Jamie"]);
    }

    #[test]
    fn list_respects_case_option() {
        let store = seeded();
        let command = list(&[("owner", "sam")]);

        let out = execute(&store, &command, BuilderOptions::default(), OutputMode::Json).unwrap();
        assert_eq!(owners(&out), vec!["Sam"]);

        let strict = BuilderOptions {
            case_insensitive: false,
        };
        let out = execute(&store, &command, strict, OutputMode::Json).unwrap();
        assert!(owners(&out).is_empty());
    }

    #[test]
    fn list_with_bad_pattern_fails() {
        let err = execute(
            &seeded(),
            &list(&[("body", "(")]),
            BuilderOptions::default(),
            OutputMode::Text,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::Query(_))
        ));
    }

    #[test]
    fn get_distinguishes_missing_from_invalid() {
        let store = seeded();

        let missing = Command::Get {
            id: TodoId::generate().to_string(),
        };
        let err = execute(&store, &missing, BuilderOptions::default(), OutputMode::Text)
            .unwrap_err();
        assert!(err.downcast_ref::<StoreError>().unwrap().is_not_found());

        let invalid = Command::Get { id: "sam".into() };
        let err = execute(&store, &invalid, BuilderOptions::default(), OutputMode::Text)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::InvalidId { .. })
        ));
    }

    #[test]
    fn add_then_get() {
        let store = InMemoryStore::new();
        let add = Command::Add {
            owner: "Brian".into(),
            status: "complete".into(),
            body: "umm".into(),
            category: "brian@yahoo.com".into(),
        };
        let id = execute(&store, &add, BuilderOptions::default(), OutputMode::Text).unwrap();

        let out = execute(
            &store,
            &Command::Get { id },
            BuilderOptions::default(),
            OutputMode::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["owner"], "Brian");
        assert_eq!(value["status"], true);
    }

    #[test]
    fn add_rejects_unknown_status_word() {
        let add = Command::Add {
            owner: "Brian".into(),
            status: "maybe".into(),
            body: "umm".into(),
            category: "x".into(),
        };
        let store = InMemoryStore::new();
        assert!(execute(&store, &add, BuilderOptions::default(), OutputMode::Text).is_err());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn seed_inserts_reference_records() {
        let store = InMemoryStore::new();
        let out = execute(&store, &Command::Seed, BuilderOptions::default(), OutputMode::Text)
            .unwrap();

        assert_eq!(out.lines().count(), 4);
        assert_eq!(store.len().unwrap(), 4);
    }
}
