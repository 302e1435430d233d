//! Roadmap CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, params_from_iter, types::Type, OptionalExtension};

use crate::{
    error::{ComposerError, DatabaseResultExt, Result},
    models::{Level, Roadmap, RoadmapFilter, RoadmapPayload, RoadmapSummary},
};

const INSERT_ROADMAP_SQL: &str = "INSERT INTO roadmaps (title, description, category, level, duration, instructor, skills, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const INSERT_ROADMAP_COURSE_SQL: &str =
    "INSERT INTO roadmap_courses (roadmap_id, position, course_id) VALUES (?1, ?2, ?3)";
const SELECT_ROADMAP_SQL: &str = "SELECT id, title, description, category, level, duration, instructor, skills, created_at FROM roadmaps WHERE id = ?1";
const SELECT_ROADMAP_COURSES_SQL: &str =
    "SELECT course_id FROM roadmap_courses WHERE roadmap_id = ?1 ORDER BY position";
const DELETE_ROADMAP_SQL: &str = "DELETE FROM roadmaps WHERE id = ?1";
const SUMMARY_COLUMNS: &str = "id, title, category, level, duration, course_count, created_at";

/// Escapes LIKE wildcards so the pattern matches `raw` literally.
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn parse_level(index: usize, raw: &str) -> rusqlite::Result<Level> {
    raw.parse::<Level>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            format!("Invalid level: {raw}").into(),
        )
    })
}

fn parse_timestamp(index: usize, raw: &str) -> rusqlite::Result<Timestamp> {
    raw.parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Stores an accepted roadmap payload together with its ordered course
    /// ids.
    ///
    /// # Errors
    ///
    /// * `ComposerError::InvalidInput` - When the payload lists no courses or
    ///   its course count disagrees with the id list
    /// * `ComposerError::Database` - When the insert fails
    pub fn save_roadmap(&mut self, payload: &RoadmapPayload) -> Result<Roadmap> {
        if payload.course_ids.is_empty() {
            return Err(ComposerError::invalid_input("course_ids")
                .with_reason("A roadmap needs at least one course"));
        }
        if payload.course_count != payload.course_ids.len() {
            return Err(ComposerError::invalid_input("course_count").with_reason(format!(
                "Course count {} does not match {} course id(s)",
                payload.course_count,
                payload.course_ids.len()
            )));
        }

        let skills = serde_json::to_string(&payload.skills)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ROADMAP_SQL,
            params![
                payload.title,
                payload.description,
                payload.category,
                payload.level.as_str(),
                payload.duration,
                payload.instructor,
                skills,
                &now_str
            ],
        )
        .db_context("Failed to insert roadmap")?;

        let id = tx.last_insert_rowid() as u64;

        for (position, course_id) in payload.course_ids.iter().enumerate() {
            tx.execute(
                INSERT_ROADMAP_COURSE_SQL,
                params![id as i64, position as i64, course_id],
            )
            .db_context("Failed to insert roadmap course")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Roadmap {
            id,
            payload: payload.clone(),
            created_at: now,
        })
    }

    /// Retrieves a saved roadmap by its ID.
    pub fn get_roadmap(&self, id: u64) -> Result<Option<Roadmap>> {
        let row = self
            .connection
            .query_row(SELECT_ROADMAP_SQL, params![id as i64], |row| {
                let level: String = row.get(4)?;
                let created_at: String = row.get(8)?;
                Ok((
                    row.get::<_, i64>(0)? as u64,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    parse_level(4, &level)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, Option<String>>(7)?,
                    parse_timestamp(8, &created_at)?,
                ))
            })
            .optional()
            .db_context("Failed to get roadmap")?;

        let Some((id, title, description, category, level, duration, instructor, skills, created_at)) =
            row
        else {
            return Ok(None);
        };

        let skills: Vec<String> = match skills {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        let course_ids = self.get_roadmap_courses(id)?;

        Ok(Some(Roadmap {
            id,
            payload: RoadmapPayload {
                title,
                description,
                category,
                level,
                duration,
                instructor,
                skills,
                course_count: course_ids.len(),
                course_ids,
            },
            created_at,
        }))
    }

    /// Course ids of a saved roadmap in roadmap order.
    fn get_roadmap_courses(&self, roadmap_id: u64) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ROADMAP_COURSES_SQL)
            .db_context("Failed to prepare query")?;

        let course_ids = stmt
            .query_map(params![roadmap_id as i64], |row| row.get(0))
            .db_context("Failed to query roadmap courses")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch roadmap courses")?;

        Ok(course_ids)
    }

    /// Lists saved roadmaps, oldest first, with optional filtering.
    pub fn list_roadmaps(&self, filter: Option<&RoadmapFilter>) -> Result<Vec<RoadmapSummary>> {
        let mut conditions = Vec::new();
        let mut values: Vec<String> = Vec::new();

        if let Some(filter) = filter {
            if let Some(category) = &filter.category {
                values.push(category.clone());
                conditions.push(format!("category = ?{}", values.len()));
            }
            if let Some(title) = &filter.title_contains {
                values.push(format!("%{}%", escape_like(&title.to_lowercase())));
                conditions.push(format!("LOWER(title) LIKE ?{} ESCAPE '\\'", values.len()));
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM roadmap_summaries{where_clause} ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                let level: String = row.get(3)?;
                let created_at: String = row.get(6)?;
                Ok(RoadmapSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    category: row.get(2)?,
                    level: parse_level(3, &level)?,
                    duration: row.get(4)?,
                    course_count: row.get::<_, i64>(5)? as usize,
                    created_at: parse_timestamp(6, &created_at)?,
                })
            })
            .db_context("Failed to query roadmaps")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch roadmaps")?;

        Ok(summaries)
    }

    /// Permanently deletes a saved roadmap and its course list.
    ///
    /// # Errors
    ///
    /// * `ComposerError::RoadmapNotFound` - When no roadmap has the id
    pub fn delete_roadmap(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_ROADMAP_SQL, params![id as i64])
            .db_context("Failed to delete roadmap")?;

        if deleted == 0 {
            return Err(ComposerError::RoadmapNotFound { id });
        }
        Ok(())
    }
}
