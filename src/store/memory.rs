//! In-memory task store (non-persistent).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{sort_column, total_pages, PageRequest, SortDirection, TaskPage, TaskStore};
use crate::task::{Task, TaskCreate, TaskError, TaskUpdate};

#[derive(Clone)]
pub struct InMemoryTaskStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    tasks: HashMap<i64, Task>,
    next_id: i64,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                tasks: HashMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordering matching the SQL backend: requested property with the
/// direction applied, then id ascending as tie-breaker.
fn compare(a: &Task, b: &Task, property: &str, direction: SortDirection) -> Ordering {
    let primary = match property {
        "title" => a.title.cmp(&b.title),
        "description" => a.description.cmp(&b.description),
        "dueDate" => a.due_date.cmp(&b.due_date),
        "completed" => a.completed.cmp(&b.completed),
        _ => a.id.cmp(&b.id),
    };
    let primary = match direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    fn is_persistent(&self) -> bool {
        false
    }

    async fn find_page(&self, page: &PageRequest) -> Result<TaskPage, TaskError> {
        if sort_column(&page.property).is_none() {
            return Err(TaskError::Validation(vec![format!(
                "unknown sort property: {}",
                page.property
            )]));
        }

        let inner = self.inner.read().await;
        let total = inner.tasks.len() as u64;

        let mut tasks: Vec<Task> = inner.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| compare(a, b, &page.property, page.direction));

        let items = if page.size == 0 {
            Vec::new()
        } else {
            tasks
                .into_iter()
                .skip(page.page as usize * page.size as usize)
                .take(page.size as usize)
                .collect()
        };

        Ok(TaskPage {
            items,
            total_elements: total,
            total_pages: total_pages(total, page.size),
            number: page.page,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, TaskError> {
        Ok(self.inner.read().await.tasks.get(&id).cloned())
    }

    async fn insert(&self, params: &TaskCreate) -> Result<Task, TaskError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let task = Task {
            id,
            title: params.title.clone(),
            description: params.description.clone(),
            due_date: params.due_date,
            completed: false,
        };
        inner.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: i64, params: &TaskUpdate) -> Result<Option<Task>, TaskError> {
        let mut inner = self.inner.write().await;
        let Some(task) = inner.tasks.get_mut(&id) else {
            return Ok(None);
        };
        task.title = params.title.clone();
        task.description = params.description.clone();
        task.due_date = params.due_date;
        task.completed = params.completed;
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, TaskError> {
        Ok(self.inner.write().await.tasks.remove(&id).is_some())
    }
}
