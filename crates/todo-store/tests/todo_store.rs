//! Integration tests for the TodoStore trait.

use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use todo_seeker::{Pattern, Query};
use todo_store::{InMemoryStore, JsonFileStore, NewTodo, StoreError, Todo, TodoId, TodoStore};

// ============================================================================
// Test fixtures
// ============================================================================

fn fixture_todos() -> Vec<NewTodo> {
    vec![
        NewTodo::new("Chris", true, "UMM", "pokemon"),
        NewTodo::new("Pat", false, "IBM", "groceries"),
        NewTodo::new("Jamie", true, "Frogs, Inc.", "salad"),
        NewTodo::new("Sam", false, "Frogs, Inc.", "salad"),
    ]
}

fn sorted_owners(todos: &[Todo]) -> Vec<String> {
    let mut owners: Vec<String> = todos.iter().map(|t| t.owner.clone()).collect();
    owners.sort();
    owners
}

/// Runs the same contract checks against any backend.
fn check_contract(store: &dyn TodoStore) {
    for todo in fixture_todos() {
        store.insert(todo).unwrap();
    }

    // Unfiltered find returns everything
    let all = store.all().unwrap();
    assert_eq!(sorted_owners(&all), vec!["Chris", "Jamie", "Pat", "Sam"]);

    // Conjunctive find
    let query = Query::new()
        .and_eq("status", false)
        .and_regex("category", Pattern::new("SALAD").case_insensitive(true));
    assert_eq!(sorted_owners(&store.find(&query).unwrap()), vec!["Sam"]);

    // Lookup by id string
    let sam = all.iter().find(|t| t.owner == "Sam").unwrap();
    let found = store.lookup(&sam.id.to_string()).unwrap();
    assert_eq!(found.as_ref(), Some(sam));

    // Absent but well-formed id
    let missing = TodoId::generate().to_string();
    assert_eq!(store.lookup(&missing).unwrap(), None);

    // Malformed id is invalid input, not not-found
    let err = store.lookup("58895985099029320e5242a0").unwrap_err();
    assert!(matches!(err, StoreError::InvalidId { .. }));
}

// ============================================================================
// Contract tests
// ============================================================================

#[test]
fn in_memory_store_contract() {
    check_contract(&InMemoryStore::new());
}

#[test]
fn json_file_store_contract() {
    let dir = TempDir::new().unwrap();
    check_contract(&JsonFileStore::open(dir.path().join("todos.json")).unwrap());
}

#[test]
fn insert_then_find_contains_record_exactly_once() {
    let store = InMemoryStore::seeded(fixture_todos()).unwrap();
    let id = store
        .insert(NewTodo::new("Brian", true, "umm", "brian@yahoo.com"))
        .unwrap();

    let all = store.all().unwrap();
    let matching: Vec<&Todo> = all.iter().filter(|t| t.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].owner, "Brian");
    assert!(matching[0].status);
    assert_eq!(matching[0].body, "umm");
    assert_eq!(matching[0].category, "brian@yahoo.com");
    assert_eq!(all.len(), 5);
}

#[test]
fn resolve_missing_is_not_found() {
    let store = InMemoryStore::new();
    let id = TodoId::generate();

    let err = store.resolve(&id).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains(&id.to_string()));
}

#[test]
fn parse_id_valid_and_invalid() {
    let store = InMemoryStore::new();
    let id = TodoId::generate();

    assert_eq!(store.parse_id(&id.to_string()).unwrap(), id);
    assert!(store.parse_id("").is_err());
    assert!(store.parse_id("sam").is_err());
}

#[test]
fn malformed_pattern_surfaces_from_find() {
    let store = InMemoryStore::seeded(fixture_todos()).unwrap();
    let err = store
        .find(&Query::new().and_regex("category", "[P, G"))
        .unwrap_err();

    assert!(matches!(err, StoreError::Query(_)));
    assert!(err.to_string().contains("[P, G"));
}

#[test]
fn concurrent_inserts_get_unique_ids() {
    let store = Arc::new(InMemoryStore::new());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..25)
                    .map(|i| {
                        store
                            .insert(NewTodo::new(format!("owner-{n}"), i % 2 == 0, "b", "c"))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<TodoId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len().unwrap(), 200);
}
