//! Condiment model and queries

use crate::expiry::EXPIRY_DATE_FORMAT;
use crate::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// A persisted condiment row
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Condiment {
    pub id: i64,
    pub name: String,
    /// ISO `YYYY-MM-DD` text, or NULL when no expiry was given
    pub expiry: Option<String>,
    /// Public URL path (`/uploads/<filename>`), or NULL when no image exists
    pub image_path: Option<String>,
    /// Timestamp assigned by the store at insertion
    pub created_at: String,
}

/// Fields for a new condiment row
#[derive(Debug, Clone, Copy)]
pub struct NewCondiment<'a> {
    pub name: &'a str,
    pub expiry: Option<&'a str>,
    pub image_path: Option<&'a str>,
}

/// Insert a condiment and return its generated id
pub async fn insert_condiment(pool: &SqlitePool, condiment: &NewCondiment<'_>) -> Result<i64> {
    let result = sqlx::query("INSERT INTO condiments (name, expiry, image_path) VALUES (?, ?, ?)")
        .bind(condiment.name)
        .bind(condiment.expiry)
        .bind(condiment.image_path)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// All condiments, most recently registered first
pub async fn list_condiments(pool: &SqlitePool) -> Result<Vec<Condiment>> {
    let rows = sqlx::query_as::<_, Condiment>(
        "SELECT id, name, expiry, image_path, created_at
         FROM condiments
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Image path for one condiment, if the row exists and has an image
pub async fn image_path_for(pool: &SqlitePool, id: i64) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT image_path FROM condiments WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(row.and_then(|(path,)| path))
}

/// Delete a condiment row; returns the number of rows affected.
///
/// Deleting an unknown id affects zero rows and is not an error.
pub async fn delete_condiment(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM condiments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Names of condiments whose expiry falls inside the near-expiry window,
/// `today <= expiry <= today + threshold_days`, ordered soonest first.
///
/// The window is inclusive at both ends: an item expiring today is still
/// worth cooking with, even though the listing already flags it as expired.
pub async fn near_expiry_names(
    pool: &SqlitePool,
    today: NaiveDate,
    threshold_days: i64,
) -> Result<Vec<String>> {
    let lower = today.format(EXPIRY_DATE_FORMAT).to_string();
    let upper = (today + Duration::days(threshold_days))
        .format(EXPIRY_DATE_FORMAT)
        .to_string();

    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM condiments
         WHERE expiry IS NOT NULL AND expiry != ''
           AND expiry >= ? AND expiry <= ?
         ORDER BY expiry ASC",
    )
    .bind(lower)
    .bind(upper)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}
