use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::errors::AppError;
use crate::models::document::{NewSavedDocument, SavedDocumentRow};
use crate::models::profile::{CareerProfileRow, NewCareerProfile, ProfileFields, ProfileUpdate};
use crate::storage::CareerStore;

/// `CareerStore` over the tables in `migrations/0001_career.sql`.
pub struct PgCareerStore {
    pool: PgPool,
}

impl PgCareerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type ProfileQuery<'q> = QueryAs<'q, Postgres, CareerProfileRow, PgArguments>;

/// Binds the questionnaire columns in declaration order.
fn bind_fields(query: ProfileQuery<'_>, fields: ProfileFields) -> ProfileQuery<'_> {
    query
        .bind(fields.skills)
        .bind(fields.interests)
        .bind(fields.goals)
        .bind(fields.education)
        .bind(fields.graduation_year)
        .bind(fields.relevant_courses)
        .bind(fields.current_role)
        .bind(fields.years_experience)
        .bind(fields.accomplishments)
        .bind(fields.industry_expertise)
        .bind(fields.key_achievements)
        .bind(fields.previous_field)
        .bind(fields.target_field)
        .bind(fields.transition_reason)
        .bind(fields.transferable_skills)
        .bind(fields.current_situation)
        .bind(fields.career_challenges)
        .bind(fields.ideal_job)
        .bind(fields.additional_notes)
}

#[async_trait]
impl CareerStore for PgCareerStore {
    async fn create_profile(&self, profile: NewCareerProfile) -> Result<CareerProfileRow, AppError> {
        let query: ProfileQuery<'_> = sqlx::query_as(
            r#"
            INSERT INTO career_profiles
                (career_phase, skills, interests, goals, education, graduation_year,
                 relevant_courses, "current_role", years_experience, accomplishments,
                 industry_expertise, key_achievements, previous_field, target_field,
                 transition_reason, transferable_skills, current_situation,
                 career_challenges, ideal_job, additional_notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING *
            "#,
        );
        let query = query.bind(profile.career_phase.as_str());

        let row = bind_fields(query, profile.fields)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_profile(&self, id: i64) -> Result<Option<CareerProfileRow>, AppError> {
        let row: Option<CareerProfileRow> = sqlx::query_as("SELECT * FROM career_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_profile(
        &self,
        id: i64,
        update: ProfileUpdate,
    ) -> Result<Option<CareerProfileRow>, AppError> {
        // NULL parameters leave the stored value untouched.
        let query: ProfileQuery<'_> = sqlx::query_as(
            r#"
            UPDATE career_profiles SET
                career_phase        = COALESCE($2, career_phase),
                skills              = COALESCE($3, skills),
                interests           = COALESCE($4, interests),
                goals               = COALESCE($5, goals),
                education           = COALESCE($6, education),
                graduation_year     = COALESCE($7, graduation_year),
                relevant_courses    = COALESCE($8, relevant_courses),
                "current_role"      = COALESCE($9, "current_role"),
                years_experience    = COALESCE($10, years_experience),
                accomplishments     = COALESCE($11, accomplishments),
                industry_expertise  = COALESCE($12, industry_expertise),
                key_achievements    = COALESCE($13, key_achievements),
                previous_field      = COALESCE($14, previous_field),
                target_field        = COALESCE($15, target_field),
                transition_reason   = COALESCE($16, transition_reason),
                transferable_skills = COALESCE($17, transferable_skills),
                current_situation   = COALESCE($18, current_situation),
                career_challenges   = COALESCE($19, career_challenges),
                ideal_job           = COALESCE($20, ideal_job),
                additional_notes    = COALESCE($21, additional_notes),
                updated_at          = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        );
        let query = query
            .bind(id)
            .bind(update.career_phase.map(|p| p.as_str()));

        let row = bind_fields(query, update.fields)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create_document(
        &self,
        profile_id: i64,
        document: NewSavedDocument,
    ) -> Result<SavedDocumentRow, AppError> {
        let row: SavedDocumentRow = sqlx::query_as(
            r#"
            INSERT INTO saved_documents (profile_id, title, content, kind)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(profile_id)
        .bind(document.title)
        .bind(document.content)
        .bind(document.kind.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_documents(&self, profile_id: i64) -> Result<Vec<SavedDocumentRow>, AppError> {
        let rows: Vec<SavedDocumentRow> = sqlx::query_as(
            "SELECT * FROM saved_documents WHERE profile_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
