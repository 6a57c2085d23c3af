//! SQLite-backed task store.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::{sort_column, total_pages, PageRequest, TaskPage, TaskStore};
use crate::task::{Task, TaskCreate, TaskError, TaskUpdate};

const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    due_date TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);
"#;

pub struct SqliteTaskStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTaskStore {
    pub async fn new(data_dir: PathBuf) -> Result<Self, TaskError> {
        let db_path = data_dir.join("tasks.db");

        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| TaskError::Storage(format!("Failed to create data dir: {}", e)))?;

        let conn = tokio::task::spawn_blocking(move || {
            let conn = Connection::open(&db_path).map_err(|e| {
                TaskError::Storage(format!("Failed to open SQLite database: {}", e))
            })?;

            conn.execute_batch(SCHEMA)
                .map_err(|e| TaskError::Storage(format!("Failed to run schema: {}", e)))?;

            Ok::<_, TaskError>(conn)
        })
        .await
        .map_err(join_err)??;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn storage_err(e: rusqlite::Error) -> TaskError {
    TaskError::Storage(e.to_string())
}

fn join_err(e: tokio::task::JoinError) -> TaskError {
    TaskError::Storage(format!("Task join error: {}", e))
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        completed: row.get(4)?,
    })
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    fn is_persistent(&self) -> bool {
        true
    }

    async fn find_page(&self, page: &PageRequest) -> Result<TaskPage, TaskError> {
        let column = sort_column(&page.property).ok_or_else(|| {
            TaskError::Validation(vec![format!("unknown sort property: {}", page.property)])
        })?;
        let order = page.direction.as_sql();
        let conn = self.conn.clone();
        let req = page.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();

            let total: i64 = conn
                .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
                .map_err(storage_err)?;

            let mut items = Vec::new();
            if req.size > 0 {
                // Column and direction both come from fixed whitelists,
                // never from raw input.
                let sql = format!(
                    "SELECT id, title, description, due_date, completed FROM tasks
                     ORDER BY {} {}, id ASC
                     LIMIT ?1 OFFSET ?2",
                    column, order
                );
                let mut stmt = conn.prepare(&sql).map_err(storage_err)?;
                let offset = i64::from(req.page) * i64::from(req.size);
                items = stmt
                    .query_map(params![i64::from(req.size), offset], row_to_task)
                    .map_err(storage_err)?
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(storage_err)?;
            }

            Ok(TaskPage {
                items,
                total_elements: total as u64,
                total_pages: total_pages(total as u64, req.size),
                number: req.page,
            })
        })
        .await
        .map_err(join_err)?
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, TaskError> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.query_row(
                "SELECT id, title, description, due_date, completed FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()
            .map_err(storage_err)
        })
        .await
        .map_err(join_err)?
    }

    async fn insert(&self, params: &TaskCreate) -> Result<Task, TaskError> {
        let conn = self.conn.clone();
        let p = params.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.execute(
                "INSERT INTO tasks (title, description, due_date, completed)
                 VALUES (?1, ?2, ?3, 0)",
                params![p.title, p.description, p.due_date],
            )
            .map_err(storage_err)?;

            Ok(Task {
                id: conn.last_insert_rowid(),
                title: p.title,
                description: p.description,
                due_date: p.due_date,
                completed: false,
            })
        })
        .await
        .map_err(join_err)?
    }

    async fn update(&self, id: i64, params: &TaskUpdate) -> Result<Option<Task>, TaskError> {
        let conn = self.conn.clone();
        let p = params.clone();

        // Lookup and overwrite run in one transaction so a failed write
        // never leaves a partially updated row visible.
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.blocking_lock();
            let tx = conn.transaction().map_err(storage_err)?;

            let exists: Option<i64> = tx
                .query_row("SELECT id FROM tasks WHERE id = ?1", params![id], |row| {
                    row.get(0)
                })
                .optional()
                .map_err(storage_err)?;
            if exists.is_none() {
                return Ok(None);
            }

            tx.execute(
                "UPDATE tasks SET title = ?1, description = ?2, due_date = ?3, completed = ?4
                 WHERE id = ?5",
                params![p.title, p.description, p.due_date, p.completed, id],
            )
            .map_err(storage_err)?;
            tx.commit().map_err(storage_err)?;

            Ok(Some(Task {
                id,
                title: p.title,
                description: p.description,
                due_date: p.due_date,
                completed: p.completed,
            }))
        })
        .await
        .map_err(join_err)?
    }

    async fn delete(&self, id: i64) -> Result<bool, TaskError> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            let rows = conn
                .execute("DELETE FROM tasks WHERE id = ?1", params![id])
                .map_err(storage_err)?;
            Ok(rows > 0)
        })
        .await
        .map_err(join_err)?
    }
}
