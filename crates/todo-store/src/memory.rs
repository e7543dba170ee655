//! In-memory todo collection.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use todo_seeker::{Query, Queryable};

use crate::error::{Result, StoreError};
use crate::record::{NewTodo, Todo, TodoId};
use crate::store::TodoStore;

/// Insertion-ordered list of records shared by the store backends.
#[derive(Debug, Default, Clone)]
pub(crate) struct Collection {
    todos: Vec<Todo>,
}

impl Collection {
    pub(crate) fn from_todos(todos: Vec<Todo>) -> Self {
        Collection { todos }
    }

    pub(crate) fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub(crate) fn find(&self, query: &Query) -> Result<Vec<Todo>> {
        Ok(query.filter_cloned(&self.todos, Todo::accessor)?)
    }

    pub(crate) fn get(&self, id: &TodoId) -> Option<Todo> {
        self.todos.iter().find(|todo| todo.id == *id).cloned()
    }

    pub(crate) fn contains(&self, id: &TodoId) -> bool {
        self.todos.iter().any(|todo| todo.id == *id)
    }

    /// Appends the record under an id no other record carries.
    pub(crate) fn insert(&mut self, todo: NewTodo) -> TodoId {
        let mut id = TodoId::generate();
        while self.contains(&id) {
            id = TodoId::generate();
        }
        self.todos.push(todo.with_id(id));
        id
    }

    /// Removes the most recently inserted record.
    pub(crate) fn undo_insert(&mut self, id: &TodoId) {
        if self.todos.last().is_some_and(|todo| todo.id == *id) {
            self.todos.pop();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.todos.len()
    }
}

pub(crate) fn read_lock(lock: &RwLock<Collection>) -> Result<RwLockReadGuard<'_, Collection>> {
    lock.read()
        .map_err(|_| StoreError::Unavailable("collection lock poisoned".to_string()))
}

pub(crate) fn write_lock(lock: &RwLock<Collection>) -> Result<RwLockWriteGuard<'_, Collection>> {
    lock.write()
        .map_err(|_| StoreError::Unavailable("collection lock poisoned".to_string()))
}

/// A todo store held entirely in memory.
///
/// Useful for tests and as a reference implementation of [`TodoStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collection: RwLock<Collection>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `todos`, in the given order.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        InMemoryStore {
            collection: RwLock::new(Collection::from_todos(todos)),
        }
    }

    /// Creates a store and inserts each new todo in turn.
    pub fn seeded<I>(todos: I) -> Result<Self>
    where
        I: IntoIterator<Item = NewTodo>,
    {
        let store = Self::new();
        for todo in todos {
            store.insert(todo)?;
        }
        Ok(store)
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> Result<usize> {
        Ok(read_lock(&self.collection)?.len())
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl TodoStore for InMemoryStore {
    fn find(&self, query: &Query) -> Result<Vec<Todo>> {
        let collection = read_lock(&self.collection)?;
        let found = collection.find(query)?;
        tracing::debug!(query = %query, matched = found.len(), "in-memory find");
        Ok(found)
    }

    fn get(&self, id: &TodoId) -> Result<Option<Todo>> {
        Ok(read_lock(&self.collection)?.get(id))
    }

    fn insert(&self, todo: NewTodo) -> Result<TodoId> {
        let id = write_lock(&self.collection)?.insert(todo);
        tracing::debug!(%id, "inserted todo");
        Ok(id)
    }
}
