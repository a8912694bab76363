//! SQLite persistence for submitted applications.
//!
//! A connection is opened per call, and every method is blocking. Handlers run
//! the methods through `actix_web::web::block`.
//!
//! Interview slots are stored as a JSON array of slot labels in the
//! `interview_times` column. Timestamps are stored as text by rusqlite's chrono
//! support. `submitted_at` is taken from the request. `created_at` and
//! `updated_at` are set by the store.

use crate::error::AppError;
use chrono::Utc;
use common::model::application::{NewApplication, StoredApplication};
use common::model::interview::InterviewSlot;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS recruit_applications (
        id                  TEXT PRIMARY KEY,
        name                TEXT NOT NULL,
        student_id          TEXT NOT NULL,
        contact             TEXT NOT NULL,
        motivation          TEXT NOT NULL,
        activities          TEXT NOT NULL,
        interview_times     TEXT NOT NULL,
        additional_comments TEXT,
        interview_notes     TEXT,
        submitted_at        TEXT NOT NULL,
        created_at          TEXT NOT NULL,
        updated_at          TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS recruit_applications_created_at
        ON recruit_applications (created_at);
";

const COLUMNS: &str = "id, name, student_id, contact, motivation, activities, interview_times, \
     additional_comments, interview_notes, submitted_at, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct ApplicationStore {
    path: PathBuf,
}

impl ApplicationStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> Result<Connection, AppError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the table if it does not exist yet.
    pub fn migrate(&self) -> Result<(), AppError> {
        self.connect()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn insert(&self, application: NewApplication) -> Result<StoredApplication, AppError> {
        let conn = self.connect()?;
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let interview_times = serde_json::to_string(&application.interview_times)?;

        conn.execute(
            &format!(
                "INSERT INTO recruit_applications ({COLUMNS}) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
            ),
            params![
                &id,
                &application.name,
                &application.student_id,
                &application.contact,
                &application.motivation,
                &application.activities,
                &interview_times,
                &application.additional_comments,
                &application.interview_notes,
                &application.submitted_at,
                &now,
                &now,
            ],
        )?;

        Ok(StoredApplication {
            id,
            name: application.name,
            student_id: application.student_id,
            contact: application.contact,
            motivation: application.motivation,
            activities: application.activities,
            interview_times: application.interview_times,
            additional_comments: application.additional_comments,
            interview_notes: application.interview_notes,
            submitted_at: application.submitted_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// All applications, newest first.
    pub fn list(&self) -> Result<Vec<StoredApplication>, AppError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM recruit_applications ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], read_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get(&self, id: &str) -> Result<Option<StoredApplication>, AppError> {
        let conn = self.connect()?;
        let application = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM recruit_applications WHERE id = ?1"),
                params![id],
                read_row,
            )
            .optional()?;
        Ok(application)
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<StoredApplication> {
    let interview_times: String = row.get(6)?;
    let interview_times: Vec<InterviewSlot> = serde_json::from_str(&interview_times)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(StoredApplication {
        id: row.get(0)?,
        name: row.get(1)?,
        student_id: row.get(2)?,
        contact: row.get(3)?,
        motivation: row.get(4)?,
        activities: row.get(5)?,
        interview_times,
        additional_comments: row.get(7)?,
        interview_notes: row.get(8)?,
        submitted_at: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn store() -> (TempDir, ApplicationStore) {
        let dir = TempDir::new().unwrap();
        let store = ApplicationStore::new(dir.path().join("recruit.sqlite"));
        store.migrate().unwrap();
        (dir, store)
    }

    fn application(name: &str) -> NewApplication {
        NewApplication {
            name: name.to_string(),
            student_id: "20250001".into(),
            contact: "010-1234-5678".into(),
            motivation: "맥주".into(),
            activities: "양조".into(),
            interview_times: vec![InterviewSlot::MondayEighteen, InterviewSlot::TuesdayTwenty],
            additional_comments: None,
            interview_notes: Some("수요일 불가".into()),
            submitted_at: Utc.with_ymd_and_hms(2025, 9, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn inserted_application_reads_back() {
        let (_dir, store) = store();
        let stored = store.insert(application("홍길동")).unwrap();

        let fetched = store.get(&stored.id).unwrap().unwrap();
        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.name, "홍길동");
        assert_eq!(fetched.interview_notes.as_deref(), Some("수요일 불가"));
        assert_eq!(
            fetched.interview_times,
            vec![InterviewSlot::MondayEighteen, InterviewSlot::TuesdayTwenty]
        );
        assert_eq!(fetched.additional_comments, None);
        assert_eq!(fetched.submitted_at, application("x").submitted_at);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn list_is_newest_first() {
        let (_dir, store) = store();
        store.insert(application("first")).unwrap();
        store.insert(application("second")).unwrap();
        store.insert(application("third")).unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[test]
    fn missing_id_is_none() {
        let (_dir, store) = store();
        assert!(store.get("nope").unwrap().is_none());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn migrate_is_idempotent() {
        let (_dir, store) = store();
        store.insert(application("kept")).unwrap();
        store.migrate().unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
