//! Todo collection persisted as a JSON array file.
//!
//! The file holds the serialized records (`[{"_id": ..., "owner": ...}, ...]`)
//! in insertion order. It is read when the store is opened and again before
//! every insert, so records written through other handles or processes are
//! kept. Inserts hold an exclusive lock on a sibling `<name>.lock` file while
//! they reload, append and rewrite; the new contents go to a uniquely named
//! temporary file in the same directory which is then renamed over the
//! original.
//!
//! Reads are served from the snapshot taken at open or at this handle's last
//! insert.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tempfile::NamedTempFile;
use todo_seeker::Query;

use crate::error::{Result, StoreError};
use crate::memory::{read_lock, write_lock, Collection};
use crate::record::{NewTodo, Todo, TodoId};
use crate::store::TodoStore;

/// A todo store backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    collection: RwLock<Collection>,
}

impl JsonFileStore {
    /// Opens the collection at `path`.
    ///
    /// A missing or blank file is an empty collection; the file is created on
    /// the first insert.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let todos = load(&path)?;
        tracing::debug!(path = %path.display(), count = todos.len(), "opened todo collection");
        Ok(JsonFileStore {
            path,
            collection: RwLock::new(Collection::from_todos(todos)),
        })
    }

    /// Returns the path of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Takes the cross-process writer lock, held until the file is dropped.
    fn lock_writers(&self) -> Result<File> {
        fs::create_dir_all(self.directory()).map_err(|e| self.io_error(e))?;
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(lock_path(&self.path))
            .map_err(|e| self.io_error(e))?;
        lock.lock().map_err(|e| self.io_error(e))?;
        Ok(lock)
    }

    fn persist(&self, todos: &[Todo]) -> Result<()> {
        let json = serde_json::to_string_pretty(todos).map_err(|source| {
            StoreError::Serialization {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = NamedTempFile::new_in(self.directory()).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.write_all(b"\n"))
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

fn load(path: &Path) -> Result<Vec<Todo>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&contents).map_err(|source| StoreError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "todos.json".into());
    name.push(".lock");
    path.with_file_name(name)
}

impl TodoStore for JsonFileStore {
    fn find(&self, query: &Query) -> Result<Vec<Todo>> {
        let collection = read_lock(&self.collection)?;
        let found = collection.find(query)?;
        tracing::debug!(query = %query, matched = found.len(), "file find");
        Ok(found)
    }

    fn get(&self, id: &TodoId) -> Result<Option<Todo>> {
        Ok(read_lock(&self.collection)?.get(id))
    }

    fn insert(&self, todo: NewTodo) -> Result<TodoId> {
        let mut collection = write_lock(&self.collection)?;
        let _writers = self.lock_writers()?;

        *collection = Collection::from_todos(load(&self.path)?);
        let id = collection.insert(todo);
        if let Err(err) = self.persist(collection.todos()) {
            collection.undo_insert(&id);
            return Err(err);
        }
        tracing::debug!(%id, path = %self.path.display(), "inserted todo");
        Ok(id)
    }
}
