//! GitHub Actions event log.
//!
//! The webhook receiver appends [`ActionsEvent`] records to a JSON file and
//! the PR agent reads them back. The file holds a JSON array in arrival
//! order, capped at the most recent `max_events` entries.

use crate::error::{Error, Result};
use crate::files;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// One received webhook delivery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionsEvent {
    /// Receipt time, RFC 3339 UTC.
    pub timestamp: String,
    /// Value of the `X-GitHub-Event` header.
    pub event_type: String,
    /// Payload `action` field.
    #[serde(default)]
    pub action: Option<String>,
    /// Raw `workflow_run` object.
    #[serde(default)]
    pub workflow_run: Option<Value>,
    /// Raw `check_run` object.
    #[serde(default)]
    pub check_run: Option<Value>,
    /// `repository.full_name`.
    #[serde(default)]
    pub repository: Option<String>,
    /// `sender.login`.
    #[serde(default)]
    pub sender: Option<String>,
}

impl ActionsEvent {
    /// Build an event record from a webhook payload.
    pub fn from_webhook(event_type: Option<&str>, payload: &Value) -> Self {
        let string_at = |pointer: &str| {
            payload
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let object_at = |key: &str| payload.get(key).filter(|v| !v.is_null()).cloned();

        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            event_type: event_type.unwrap_or("unknown").to_string(),
            action: string_at("/action"),
            workflow_run: object_at("workflow_run"),
            check_run: object_at("check_run"),
            repository: string_at("/repository/full_name"),
            sender: string_at("/sender/login"),
        }
    }
}

/// Latest known state of one workflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatus {
    /// Workflow name.
    pub name: String,
    /// Run status (`queued`, `in_progress`, `completed`).
    pub status: Value,
    /// Run conclusion (`success`, `failure`, ...), null while running.
    pub conclusion: Value,
    /// Run number.
    pub run_number: Value,
    /// Last update time as sent by GitHub.
    pub updated_at: Value,
    /// Link to the run.
    pub html_url: Value,
}

impl WorkflowStatus {
    fn from_run(name: &str, run: &Value) -> Self {
        let field = |key: &str| run.get(key).cloned().unwrap_or(Value::Null);
        Self {
            name: name.to_string(),
            status: field("status"),
            conclusion: field("conclusion"),
            run_number: field("run_number"),
            updated_at: field("updated_at"),
            html_url: field("html_url"),
        }
    }

    fn updated_key(&self) -> &str {
        self.updated_at.as_str().unwrap_or_default()
    }
}

/// File-backed event log.
///
/// Appends through one store are serialized; the file is replaced
/// atomically on every write.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    max_events: usize,
    write_lock: Mutex<()>,
}

impl EventStore {
    /// Create a store over `path` retaining at most `max_events` entries.
    ///
    /// A path without the `.json` extension is stored under the extension
    /// replaced, matching what [`files::write_file_json`] writes.
    pub fn new(path: impl Into<PathBuf>, max_events: usize) -> Self {
        Self {
            path: files::json_path(path.into()),
            max_events: max_events.max(1),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retention cap.
    pub fn max_events(&self) -> usize {
        self.max_events
    }

    /// Returns `true` once the backing file exists.
    pub fn exists(&self) -> bool {
        files::file_exists(&self.path)
    }

    /// Load every stored event; a missing file is an empty log.
    pub async fn load(&self) -> Result<Vec<ActionsEvent>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        files::read_file_json(&self.path).await
    }

    /// Append an event, dropping the oldest entries beyond the cap.
    ///
    /// Returns the number of events stored after the append.
    pub async fn append(&self, event: ActionsEvent) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        let mut events = self.load().await?;
        events.push(event);
        if events.len() > self.max_events {
            let excess = events.len() - self.max_events;
            events.drain(..excess);
        }

        files::write_file_json(&self.path, &events).await?;
        tracing::debug!(path = %self.path.display(), count = events.len(), "Stored event");
        Ok(events.len())
    }

    /// The last `limit` events in arrival order.
    pub async fn recent(&self, limit: usize) -> Result<Vec<ActionsEvent>> {
        let mut events = self.load().await?;
        let start = events.len().saturating_sub(limit);
        Ok(events.split_off(start))
    }

    /// Latest status per workflow, optionally restricted to one name.
    ///
    /// Fails with a not-found error when no events have been received.
    pub async fn workflow_status(&self, workflow_name: Option<&str>) -> Result<Vec<WorkflowStatus>> {
        let events = self.load().await?;
        if events.is_empty() {
            return Err(Error::not_found("GitHub Actions events", "none received yet"));
        }
        Ok(latest_workflow_runs(&events, workflow_name))
    }
}

/// Group `workflow_run` events by name, keeping the most recently updated.
///
/// `updated_at` values are compared as strings; GitHub sends ISO 8601 UTC
/// timestamps, which order lexically. Result order is first appearance.
pub fn latest_workflow_runs(events: &[ActionsEvent], workflow_name: Option<&str>) -> Vec<WorkflowStatus> {
    let mut latest: Vec<WorkflowStatus> = Vec::new();

    let runs = events
        .iter()
        .filter_map(|e| e.workflow_run.as_ref())
        .filter(|run| !run.is_null());

    for run in runs {
        let Some(name) = run.get("name").and_then(Value::as_str) else {
            continue;
        };
        if workflow_name.is_some_and(|wanted| wanted != name) {
            continue;
        }

        let candidate = WorkflowStatus::from_run(name, run);
        match latest.iter_mut().find(|s| s.name == name) {
            Some(existing) if candidate.updated_key() > existing.updated_key() => {
                *existing = candidate;
            }
            Some(_) => {}
            None => latest.push(candidate),
        }
    }

    latest
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn run_event(name: &str, status: &str, conclusion: Option<&str>, updated_at: &str) -> ActionsEvent {
        ActionsEvent::from_webhook(
            Some("workflow_run"),
            &json!({
                "action": "completed",
                "workflow_run": {
                    "name": name,
                    "status": status,
                    "conclusion": conclusion,
                    "run_number": 7,
                    "updated_at": updated_at,
                    "html_url": format!("https://github.com/o/r/actions/{name}")
                },
                "repository": {"full_name": "o/r"},
                "sender": {"login": "octocat"}
            }),
        )
    }

    #[test]
    fn test_from_webhook_extracts_fields() {
        let event = run_event("CI", "completed", Some("success"), "2025-01-01T00:00:00Z");
        assert_eq!(event.event_type, "workflow_run");
        assert_eq!(event.action.as_deref(), Some("completed"));
        assert_eq!(event.repository.as_deref(), Some("o/r"));
        assert_eq!(event.sender.as_deref(), Some("octocat"));
        assert!(event.workflow_run.is_some());
        assert!(event.check_run.is_none());
        assert!(event.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_from_webhook_defaults() {
        let event = ActionsEvent::from_webhook(None, &json!({"zen": "Keep it simple"}));
        assert_eq!(event.event_type, "unknown");
        assert!(event.action.is_none());
        assert!(event.repository.is_none());
        assert!(event.sender.is_none());
    }

    #[test]
    fn test_latest_workflow_runs_keeps_newest() {
        let events = vec![
            run_event("CI", "in_progress", None, "2025-01-01T10:00:00Z"),
            run_event("Deploy", "completed", Some("failure"), "2025-01-01T09:00:00Z"),
            run_event("CI", "completed", Some("success"), "2025-01-01T11:00:00Z"),
            run_event("CI", "queued", None, "2025-01-01T08:00:00Z"),
        ];

        let statuses = latest_workflow_runs(&events, None);
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].name, "CI");
        assert_eq!(statuses[0].conclusion, json!("success"));
        assert_eq!(statuses[1].name, "Deploy");
    }

    #[test]
    fn test_latest_workflow_runs_filter_and_skip() {
        let mut no_run = ActionsEvent::from_webhook(Some("push"), &json!({}));
        no_run.workflow_run = None;
        let events = vec![
            no_run,
            run_event("CI", "completed", Some("success"), "2025-01-01T11:00:00Z"),
            run_event("Lint", "completed", Some("success"), "2025-01-01T11:00:00Z"),
        ];

        let statuses = latest_workflow_runs(&events, Some("Lint"));
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].name, "Lint");

        assert!(latest_workflow_runs(&events, Some("Missing")).is_empty());
    }

    #[tokio::test]
    async fn test_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::new(dir.path().join("events.json"), 100);

        assert!(!store.exists());
        assert!(store.load().await.unwrap().is_empty());
        assert!(store.recent(10).await.unwrap().is_empty());

        let err = store.workflow_status(None).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_store_append_caps_history() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::new(dir.path().join("nested/events.json"), 3);

        for i in 0..5 {
            let event = ActionsEvent::from_webhook(Some("ping"), &json!({ "action": format!("a{i}") }));
            store.append(event).await.unwrap();
        }

        let events = store.load().await.unwrap();
        let actions: Vec<_> = events.iter().map(|e| e.action.clone().unwrap()).collect();
        assert_eq!(actions, vec!["a2", "a3", "a4"]);
    }

    #[tokio::test]
    async fn test_store_non_json_path_keeps_history() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::new(dir.path().join("events.log"), 100);
        assert_eq!(store.path(), dir.path().join("events.json"));

        for i in 0..3 {
            let event = ActionsEvent::from_webhook(Some("ping"), &json!({ "action": format!("a{i}") }));
            assert_eq!(store.append(event).await.unwrap(), i + 1);
        }

        assert_eq!(store.load().await.unwrap().len(), 3);
        assert_eq!(store.recent(10).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_store_recent_limits() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::new(dir.path().join("events.json"), 100);
        for i in 0..4 {
            let event = ActionsEvent::from_webhook(Some("ping"), &json!({ "action": format!("a{i}") }));
            store.append(event).await.unwrap();
        }

        let recent = store.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action.as_deref(), Some("a2"));
        assert_eq!(recent[1].action.as_deref(), Some("a3"));

        assert_eq!(store.recent(50).await.unwrap().len(), 4);
        assert!(store.recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_concurrent_appends_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(EventStore::new(dir.path().join("events.json"), 100));

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let event = ActionsEvent::from_webhook(Some("ping"), &json!({ "action": i.to_string() }));
                store.append(event).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.load().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_store_empty_array_has_no_status() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "[]").unwrap();

        let store = EventStore::new(path, 100);
        assert!(store.workflow_status(None).await.unwrap_err().is_not_found());
    }
}
