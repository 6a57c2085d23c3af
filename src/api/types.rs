//! API request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::TaskPage;
use crate::task::Task;

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title (must not be blank)
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Due date as an ISO-8601 instant
    pub due_date: DateTime<Utc>,
}

/// Request body for updating a task. Every field is replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
}

/// Pagination and sorting query parameters for task listings.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// Page index (0-based)
    #[serde(default)]
    pub page: u32,

    /// Page size
    #[serde(default = "default_page_size")]
    pub size: u32,

    /// Task attribute to sort by
    #[serde(default = "default_sort_property")]
    pub property: String,

    /// Sort direction, `ASC` or `DESC`
    #[serde(default = "default_sort_direction")]
    pub direction: String,
}

fn default_page_size() -> u32 {
    10
}

fn default_sort_property() -> String {
    "id".to_string()
}

fn default_sort_direction() -> String {
    "ASC".to_string()
}

/// A single task as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// ISO-8601 instant
    pub due_date: DateTime<Utc>,
    pub completed: bool,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            due_date: t.due_date,
            completed: t.completed,
        }
    }
}

/// One page of response items plus collection-wide counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_pages: u64,
    pub total_elements: u64,
    /// Page index of this slice
    pub number: u32,
}

impl From<TaskPage> for PageResponse<TaskResponse> {
    fn from(page: TaskPage) -> Self {
        Self {
            content: page.items.into_iter().map(Into::into).collect(),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
            number: page.number,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Which store backend is serving requests
    pub store: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: 3,
            title: "title3".to_string(),
            description: "description3".to_string(),
            due_date: DateTime::parse_from_rfc3339("2024-03-30T18:35:24Z")
                .expect("valid test date")
                .with_timezone(&Utc),
            completed: false,
        }
    }

    /// Wire shape: camelCase keys and an RFC 3339 instant.
    #[test]
    fn test_task_response_serializes_to_wire_shape() {
        let json = serde_json::to_value(TaskResponse::from(task())).expect("serialize failed");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "title3",
                "description": "description3",
                "dueDate": "2024-03-30T18:35:24Z",
                "completed": false,
            })
        );
    }

    #[test]
    fn test_page_response_from_task_page() {
        let page = TaskPage {
            items: vec![task()],
            total_elements: 15,
            total_pages: 5,
            number: 0,
        };
        let json = serde_json::to_value(PageResponse::from(page)).expect("serialize failed");
        assert_eq!(json["totalElements"], 15);
        assert_eq!(json["totalPages"], 5);
        assert_eq!(json["number"], 0);
        assert_eq!(json["content"][0]["id"], 3);
    }

    #[test]
    fn test_create_request_accepts_iso_instant() {
        let req: CreateTaskRequest = serde_json::from_str(
            r#"{"title":"t1","description":"d1","dueDate":"2024-02-18T18:35:24.00Z"}"#,
        )
        .expect("deserialize failed");
        assert_eq!(req.title, "t1");
        assert_eq!(req.due_date.timestamp(), 1708281324);
    }

    #[test]
    fn test_create_request_rejects_missing_due_date() {
        let result: Result<CreateTaskRequest, _> =
            serde_json::from_str(r#"{"title":"t1","description":"d1"}"#);
        assert!(result.is_err());
    }
}
