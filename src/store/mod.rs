//! Task storage with pluggable backends.
//!
//! Supports:
//! - `sqlite`: SQLite database (persistent, the default)
//! - `memory`: in-memory storage (non-persistent, for testing)

mod memory;
mod sqlite;

pub use memory::InMemoryTaskStore;
pub use sqlite::SqliteTaskStore;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::task::{Task, TaskCreate, TaskError, TaskUpdate};

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse the wire-level value, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A validated page request: which slice to return and how to order it.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Page index (0-based)
    pub page: u32,

    /// Page size; 0 yields an empty page without error
    pub size: u32,

    /// Task attribute to sort by, wire-level name
    pub property: String,

    /// Sort direction
    pub direction: SortDirection,
}

/// One page of tasks plus collection-wide counts.
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub items: Vec<Task>,

    /// Full row count, regardless of page size
    pub total_elements: u64,

    /// Number of pages at the requested size
    pub total_pages: u64,

    /// Requested page index
    pub number: u32,
}

/// Map a wire-level sort property to its SQL column name.
///
/// Unknown names never reach the SQL layer; callers turn `None` into a
/// validation error.
pub fn sort_column(property: &str) -> Option<&'static str> {
    match property {
        "id" => Some("id"),
        "title" => Some("title"),
        "description" => Some("description"),
        "dueDate" => Some("due_date"),
        "completed" => Some("completed"),
        _ => None,
    }
}

/// Number of pages needed for `total` elements at `size` per page.
pub(crate) fn total_pages(total: u64, size: u32) -> u64 {
    if size == 0 {
        0
    } else {
        total.div_ceil(u64::from(size))
    }
}

/// Task store trait - implemented by all storage backends.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Whether this store persists data across restarts.
    fn is_persistent(&self) -> bool;

    /// Return one sorted page of tasks plus collection-wide counts.
    async fn find_page(&self, page: &PageRequest) -> Result<TaskPage, TaskError>;

    /// Look up a single task by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, TaskError>;

    /// Insert a new task with `completed = false`; the store assigns the id.
    async fn insert(&self, params: &TaskCreate) -> Result<Task, TaskError>;

    /// Replace all mutable fields of the task with this id.
    ///
    /// Returns `None` if no such row exists. Lookup and write happen inside
    /// one storage transaction.
    async fn update(&self, id: i64, params: &TaskUpdate) -> Result<Option<Task>, TaskError>;

    /// Delete the task with this id. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, TaskError>;
}

/// Task store type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStoreType {
    Memory,
    #[default]
    Sqlite,
}

impl TaskStoreType {
    /// Parse from environment variable value.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => Self::Memory,
            "sqlite" | "db" => Self::Sqlite,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Create a task store based on type and configuration.
pub async fn create_task_store(
    store_type: TaskStoreType,
    data_dir: PathBuf,
) -> Result<Arc<dyn TaskStore>, TaskError> {
    match store_type {
        TaskStoreType::Memory => Ok(Arc::new(InMemoryTaskStore::new())),
        TaskStoreType::Sqlite => {
            let store = SqliteTaskStore::new(data_dir).await?;
            Ok(Arc::new(store))
        }
    }
}
