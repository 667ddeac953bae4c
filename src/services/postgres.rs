use chrono::Utc;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::core::{normalize_preferences, normalize_profile, RawPreferences, RawProfile};
use crate::models::{PreferenceRecord, Profile};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Malformed row payload: {0}")]
    PayloadError(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// PostgreSQL-backed profile store.
///
/// Assembles the evaluator's comparison inputs: a profile row plus its newest
/// partner-preference record, with all multi-valued preference lists
/// pre-aggregated into JSON arrays by lateral joins over the normalized join
/// tables. Rows come out as loosely typed JSON payloads and go through the
/// normalization boundary before anything downstream sees them.
pub struct ProfileStore {
    pool: PgPool,
}

impl ProfileStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        _acquire_timeout_secs: Option<u64>,
        _idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Load a profile by its public matri ID.
    ///
    /// The row is shipped as a single JSON object so the normalizer owns all
    /// type coercion; mother tongues are collected by a lateral join over the
    /// profile_mother_tongues link table.
    pub async fn get_profile(&self, matri_id: &str) -> Result<Profile, PostgresError> {
        let matri_id = matri_id.trim();
        if matri_id.is_empty() {
            return Err(PostgresError::InvalidInput("empty matri ID".to_string()));
        }

        let query = r#"
            SELECT jsonb_build_object(
                'matriId', p.matri_id,
                'age', p.age,
                'dateOfBirth', p.date_of_birth,
                'heightCm', p.height_cm,
                'religion', r.name,
                'caste', c.name,
                'motherTongues', COALESCE(mt.names, '[]'::jsonb),
                'education', e.name,
                'profession', pr.name,
                'job', p.job,
                'jobRole', p.job_role,
                'annualIncome', p.annual_income,
                'country', co.name,
                'manglik', p.manglik,
                'diet', p.diet,
                'drinking', p.drinking,
                'smoking', p.smoking
            ) AS payload
            FROM profiles p
            LEFT JOIN religions r ON r.id = p.religion_id
            LEFT JOIN castes c ON c.id = p.caste_id
            LEFT JOIN educations e ON e.id = p.education_id
            LEFT JOIN professions pr ON pr.id = p.profession_id
            LEFT JOIN countries co ON co.id = p.country_id
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(m.name) AS names
                FROM profile_mother_tongues pmt
                JOIN mother_tongues m ON m.id = pmt.mother_tongue_id
                WHERE pmt.profile_id = p.id
            ) mt ON true
            WHERE p.matri_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(matri_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("profile {}", matri_id)))?;

        let payload: Value = row.get("payload");
        let raw: RawProfile = serde_json::from_value(payload)?;
        let profile = normalize_profile(&raw, Utc::now().date_naive());

        tracing::debug!("Loaded profile {}", profile.matri_id);

        Ok(profile)
    }

    /// Load the newest partner-preference record for a profile, if any.
    ///
    /// Preferences are one-to-one per profile; when duplicates exist the most
    /// recently updated row wins. Each list criterion is aggregated into a
    /// JSON array by a lateral join; lifestyle lists live on the preference
    /// row itself as text arrays.
    pub async fn get_preferences(
        &self,
        matri_id: &str,
    ) -> Result<Option<PreferenceRecord>, PostgresError> {
        let query = r#"
            SELECT jsonb_build_object(
                'minAge', pp.min_age,
                'maxAge', pp.max_age,
                'minHeightCm', pp.min_height_cm,
                'maxHeightCm', pp.max_height_cm,
                'religions', COALESCE(rel.names, '[]'::jsonb),
                'castes', COALESCE(cas.names, '[]'::jsonb),
                'motherTongues', COALESCE(mt.names, '[]'::jsonb),
                'educations', COALESCE(edu.names, '[]'::jsonb),
                'occupations', COALESCE(occ.names, '[]'::jsonb),
                'countries', COALESCE(cty.names, '[]'::jsonb),
                'minIncome', pp.min_income,
                'manglik', pp.manglik,
                'diets', to_jsonb(pp.diets),
                'drinking', to_jsonb(pp.drinking),
                'smoking', to_jsonb(pp.smoking)
            ) AS payload
            FROM partner_preferences pp
            JOIN profiles p ON p.id = pp.profile_id
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(r.name) AS names
                FROM preference_religions x JOIN religions r ON r.id = x.religion_id
                WHERE x.preference_id = pp.id
            ) rel ON true
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(c.name) AS names
                FROM preference_castes x JOIN castes c ON c.id = x.caste_id
                WHERE x.preference_id = pp.id
            ) cas ON true
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(m.name) AS names
                FROM preference_mother_tongues x JOIN mother_tongues m ON m.id = x.mother_tongue_id
                WHERE x.preference_id = pp.id
            ) mt ON true
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(e.name) AS names
                FROM preference_educations x JOIN educations e ON e.id = x.education_id
                WHERE x.preference_id = pp.id
            ) edu ON true
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(o.name) AS names
                FROM preference_occupations x JOIN professions o ON o.id = x.profession_id
                WHERE x.preference_id = pp.id
            ) occ ON true
            LEFT JOIN LATERAL (
                SELECT jsonb_agg(co.name) AS names
                FROM preference_countries x JOIN countries co ON co.id = x.country_id
                WHERE x.preference_id = pp.id
            ) cty ON true
            WHERE p.matri_id = $1
            ORDER BY pp.updated_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(matri_id.trim())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            tracing::debug!("No partner preferences for {}", matri_id);
            return Ok(None);
        };

        let payload: Value = row.get("payload");
        let raw: RawPreferences = serde_json::from_value(payload)?;

        Ok(Some(normalize_preferences(&raw)))
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
