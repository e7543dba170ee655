//! Command runs against a JSON file store.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use todos::cli::{run, Cli};

fn config_in(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn todos(args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["todos"];
    argv.extend_from_slice(args);
    run(Cli::try_parse_from(argv)?)
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

/// Runs `args` against the given config file and store.
fn todos_in(config: &str, store: &str, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = args.to_vec();
    argv.extend_from_slice(&["--config", config, "--store", store]);
    todos(&argv)
}

#[test]
fn seed_list_get_add() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "");
    let store = dir.path().join("data/todos.json").display().to_string();

    let seeded = todos_in(&config, &store, &["seed"]).unwrap();
    assert_eq!(seeded.lines().count(), 4);
    assert!(Path::new(&store).exists());

    let listed = todos_in(&config, &store, &["list", "-f", "category=[S]", "-o", "json"]).unwrap();
    assert_eq!(owners(&listed), vec!["Jamie", "Pat", "Sam"]);

    let id = todos_in(
        &config,
        &store,
        &[
            "add", "--owner", "Brian", "--status", "complete", "--body", "umm", "--category", "x",
        ],
    )
    .unwrap();
    let got = todos_in(&config, &store, &["get", id.as_str(), "-o", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&got).unwrap();
    assert_eq!(value["owner"], "Brian");
    assert_eq!(value["_id"], id.as_str());

    let done = todos_in(&config, &store, &["list", "--filter", "status=true", "-o", "json"]).unwrap();
    assert_eq!(owners(&done), vec!["Brian", "Chris", "Jamie"]);
}

#[test]
fn case_sensitivity_follows_config() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("todos.json");
    let store = store.display().to_string();
    let strict = config_in(&dir, "[filter]\ncase_insensitive = false\n");

    todos_in(&strict, &store, &["seed"]).unwrap();
    let listed = todos_in(&strict, &store, &["list", "-f", "category=[S]", "-o", "json"]).unwrap();
    assert!(owners(&listed).is_empty());
}

#[test]
fn store_path_from_config() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("configured.json");
    let config = config_in(&dir, &format!("[store]\npath = {:?}\n", store.display().to_string()));

    todos(&["seed", "--config", config.as_str()]).unwrap();
    assert!(store.exists());
}

#[test]
fn get_reports_missing_and_invalid_ids_differently() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "");
    let store = dir.path().join("todos.json").display().to_string();

    let missing = todos_in(&config, &store, &["get", "67e55044-10b1-426f-9247-bb680e5fe0c8"])
        .unwrap_err();
    assert!(missing.to_string().contains("not found"));

    let invalid = todos_in(&config, &store, &["get", "sam"]).unwrap_err();
    assert!(!invalid.to_string().contains("not found"));
}

#[test]
fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, "");
    let store = dir.path().join("todos.json").display().to_string();

    let text = todos_in(&config, &store, &["list"]).unwrap();
    assert_eq!(text, "No todos.");
}
