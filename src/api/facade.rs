//! Web facade translating service records into response payloads.
//!
//! Pure pass-through: no business rules live here and service errors
//! propagate unchanged.

use crate::service::TaskService;
use crate::store::PageRequest;
use crate::task::{TaskCreate, TaskError, TaskUpdate};

use super::types::{PageResponse, TaskResponse};

/// Converts between the service layer and wire-shaped payloads.
#[derive(Clone)]
pub struct TaskFacade {
    service: TaskService,
}

impl TaskFacade {
    pub fn new(service: TaskService) -> Self {
        Self { service }
    }

    pub async fn find_tasks(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<TaskResponse>, TaskError> {
        Ok(self.service.find_tasks(page).await?.into())
    }

    pub async fn create(&self, params: TaskCreate) -> Result<TaskResponse, TaskError> {
        Ok(self.service.create(params).await?.into())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<TaskResponse, TaskError> {
        Ok(self.service.find_by_id(id).await?.into())
    }

    pub async fn update(&self, id: i64, params: TaskUpdate) -> Result<TaskResponse, TaskError> {
        Ok(self.service.update(id, params).await?.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), TaskError> {
        self.service.delete(id).await
    }
}
