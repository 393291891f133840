/// Whole-document JSON file store
use crate::error::{Result, StorageError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tasklist_core::{timestamp, CoreError, Document, NewTask, Task, TaskId, TaskStore, User};
use tokio::{fs, sync::Mutex};

/// `TaskStore` backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a fresh document containing `users` and no tasks
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub async fn initialize(&self, users: Vec<User>, force: bool) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !force {
            let exists = fs::try_exists(&self.path)
                .await
                .map_err(|source| StorageError::Read {
                    path: self.path.clone(),
                    source,
                })?;
            if exists {
                return Err(StorageError::AlreadyExists(self.path.clone()));
            }
        }
        self.save(&Document::with_users(users)).await
    }

    /// Read the whole document
    ///
    /// A missing file reads as an empty document.
    pub async fn load(&self) -> Result<Document> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Document missing, starting empty");
                return Ok(Document::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the document on disk
    async fn save(&self, document: &Document) -> Result<()> {
        let data = serde_json::to_vec_pretty(document)?;
        let tmp = self.temp_path();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| self.write_error(source))?;
        }
        fs::write(&tmp, data).await.map_err(|source| self.write_error(source))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| self.write_error(source))?;

        tracing::debug!(
            path = %self.path.display(),
            tasks = document.tasks.len(),
            "Document written"
        );
        Ok(())
    }

    /// Read, mutate, and (if `mutate` reports a change) write back, holding
    /// the write lock throughout
    async fn update<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Document) -> Result<(T, bool)>,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        let (out, changed) = mutate(&mut document)?;
        if changed {
            self.save(&document).await?;
        }
        Ok(out)
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "db.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl TaskStore for JsonFileStore {
    async fn list_tasks(&self) -> tasklist_core::Result<Vec<Task>> {
        Ok(self.load().await?.tasks)
    }

    async fn get_task(&self, id: TaskId) -> tasklist_core::Result<Option<Task>> {
        Ok(self.load().await?.task(id).cloned())
    }

    async fn create_task(&self, task: NewTask) -> tasklist_core::Result<Task> {
        let stored = self
            .update(|doc| Ok((doc.insert_task(task, timestamp::now()), true)))
            .await?;
        tracing::info!(id = %stored.id, author = %stored.author, "Task created");
        Ok(stored)
    }

    async fn replace_task(&self, id: TaskId, task: Task) -> tasklist_core::Result<Task> {
        let stored = self
            .update(|doc| match doc.replace_task(id, task) {
                Some(stored) => Ok((stored, true)),
                None => Err(CoreError::not_found("Task", id).into()),
            })
            .await?;
        tracing::info!(id = %id, completed = stored.completed, "Task replaced");
        Ok(stored)
    }

    async fn patch_task(
        &self,
        id: TaskId,
        patch: Map<String, Value>,
    ) -> tasklist_core::Result<Task> {
        let stored = self
            .update(|doc| match doc.patch_task(id, patch)? {
                Some(stored) => Ok((stored, true)),
                None => Err(CoreError::not_found("Task", id).into()),
            })
            .await?;
        tracing::info!(id = %id, "Task patched");
        Ok(stored)
    }

    async fn delete_task(&self, id: TaskId) -> tasklist_core::Result<usize> {
        // The document is rewritten even when nothing matched, like every
        // other mutating request.
        let removed = self
            .update(|doc| Ok((doc.remove_tasks(id), true)))
            .await?;
        tracing::info!(id = %id, removed, "Task deleted");
        Ok(removed)
    }

    async fn find_user(
        &self,
        username: &str,
        password: &str,
    ) -> tasklist_core::Result<Option<User>> {
        Ok(self.load().await?.find_user(username, password).cloned())
    }

    async fn list_users(&self) -> tasklist_core::Result<Vec<User>> {
        Ok(self.load().await?.users)
    }
}
