//! Task service: store orchestration with the "must exist" contract.
//!
//! Every id-based operation fails with `TaskError::NotFound` when the id
//! has no row. Mutations are single store calls, each running inside one
//! storage transaction, so a failed write never leaves partial state
//! visible to later reads.

use std::sync::Arc;

use crate::store::{PageRequest, TaskPage, TaskStore};
use crate::task::{Task, TaskCreate, TaskError, TaskUpdate};

/// Orchestrates store access for task operations.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// List one sorted page of tasks.
    pub async fn find_tasks(&self, page: &PageRequest) -> Result<TaskPage, TaskError> {
        self.store.find_page(page).await
    }

    /// Fetch a task, failing with `NotFound` if the id has no row.
    pub async fn find_by_id(&self, id: i64) -> Result<Task, TaskError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound { id })
    }

    /// Create a task; `completed` always starts false.
    pub async fn create(&self, params: TaskCreate) -> Result<Task, TaskError> {
        let task = self.store.insert(&params).await?;
        tracing::info!(id = task.id, "task created");
        Ok(task)
    }

    /// Replace all mutable fields of an existing task.
    pub async fn update(&self, id: i64, params: TaskUpdate) -> Result<Task, TaskError> {
        self.store
            .update(id, &params)
            .await?
            .ok_or(TaskError::NotFound { id })
    }

    /// Delete an existing task.
    pub async fn delete(&self, id: i64) -> Result<(), TaskError> {
        if !self.store.delete(id).await? {
            return Err(TaskError::NotFound { id });
        }
        tracing::info!(id, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTaskStore;
    use chrono::{DateTime, Utc};

    fn service() -> TaskService {
        TaskService::new(Arc::new(InMemoryTaskStore::new()))
    }

    fn due(date: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(date)
            .expect("valid test date")
            .with_timezone(&Utc)
    }

    fn create_params() -> TaskCreate {
        TaskCreate {
            title: "t1".to_string(),
            description: "d1".to_string(),
            due_date: due("2024-02-18T18:35:24Z"),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found_with_id() {
        let service = service();
        let err = service.find_by_id(3).await.expect_err("must fail");
        assert!(matches!(err, TaskError::NotFound { id: 3 }));
        assert!(err.to_string().contains('3'));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service();
        let err = service
            .update(
                7,
                TaskUpdate {
                    title: "t".to_string(),
                    description: "d".to_string(),
                    due_date: due("2024-02-18T18:35:24Z"),
                    completed: true,
                },
            )
            .await
            .expect_err("must fail");
        assert!(matches!(err, TaskError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = service();
        let err = service.delete(11).await.expect_err("must fail");
        assert!(matches!(err, TaskError::NotFound { id: 11 }));
    }

    /// The lifecycle scenario: create assigns an id and defaults
    /// completed, update overwrites, delete makes the id unknown.
    #[tokio::test]
    async fn test_create_update_delete_lifecycle() {
        let service = service();

        let created = service.create(create_params()).await.expect("create failed");
        assert!(created.id > 0);
        assert!(!created.completed);

        let fetched = service
            .find_by_id(created.id)
            .await
            .expect("fetch after create failed");
        assert_eq!(fetched, created);

        let updated = service
            .update(
                created.id,
                TaskUpdate {
                    title: "t2".to_string(),
                    description: created.description.clone(),
                    due_date: created.due_date,
                    completed: true,
                },
            )
            .await
            .expect("update failed");
        assert_eq!(updated.title, "t2");
        assert!(updated.completed);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.due_date, created.due_date);

        service.delete(created.id).await.expect("delete failed");
        let err = service
            .find_by_id(created.id)
            .await
            .expect_err("deleted id must be unknown");
        assert!(matches!(err, TaskError::NotFound { .. }));
    }
}
