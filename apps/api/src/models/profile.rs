use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::documents::phase::CareerPhase;

/// Answers to the phase-specific questionnaire. Every field is optional;
/// which ones are filled depends on the career phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct ProfileFields {
    // Common to all phases
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub goals: Option<String>,

    // Student
    pub education: Option<String>,
    pub graduation_year: Option<i32>,
    pub relevant_courses: Option<String>,

    // Entry-level / experienced
    pub current_role: Option<String>,
    pub years_experience: Option<i32>,
    pub accomplishments: Option<String>,
    pub industry_expertise: Option<String>,
    pub key_achievements: Option<String>,

    // Career switcher
    pub previous_field: Option<String>,
    pub target_field: Option<String>,
    pub transition_reason: Option<String>,
    pub transferable_skills: Option<String>,

    // Unsure
    pub current_situation: Option<String>,
    pub career_challenges: Option<String>,
    pub ideal_job: Option<String>,

    pub additional_notes: Option<String>,
}

macro_rules! merge_fields {
    ($target:ident, $update:ident, $($field:ident),* $(,)?) => {
        $(
            if $update.$field.is_some() {
                $target.$field = $update.$field;
            }
        )*
    };
}

impl ProfileFields {
    /// Overwrites only the fields that are present in `update`.
    pub fn merge(&mut self, update: ProfileFields) {
        merge_fields!(
            self,
            update,
            skills,
            interests,
            goals,
            education,
            graduation_year,
            relevant_courses,
            current_role,
            years_experience,
            accomplishments,
            industry_expertise,
            key_achievements,
            previous_field,
            target_field,
            transition_reason,
            transferable_skills,
            current_situation,
            career_challenges,
            ideal_job,
            additional_notes,
        );
    }
}

/// A persisted career profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerProfileRow {
    pub id: i64,
    pub career_phase: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fields: ProfileFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CareerProfileRow {
    /// Stored phase; unrecognised values read as `Unsure`.
    pub fn phase(&self) -> CareerPhase {
        CareerPhase::parse(&self.career_phase).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCareerProfile {
    pub career_phase: CareerPhase,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub career_phase: Option<CareerPhase>,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut stored = ProfileFields {
            goals: Some("Lead a team".to_string()),
            education: Some("BSc".to_string()),
            ..Default::default()
        };
        stored.merge(ProfileFields {
            goals: Some("Start a company".to_string()),
            graduation_year: Some(2024),
            ..Default::default()
        });
        assert_eq!(stored.goals.as_deref(), Some("Start a company"));
        assert_eq!(stored.education.as_deref(), Some("BSc"));
        assert_eq!(stored.graduation_year, Some(2024));
    }

    #[test]
    fn test_unknown_stored_phase_reads_as_unsure() {
        let row = CareerProfileRow {
            id: 1,
            career_phase: "retired".to_string(),
            fields: ProfileFields::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(row.phase(), CareerPhase::Unsure);
    }

    #[test]
    fn test_update_deserialises_flat_partial_body() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"goals":"Ship more","career_phase":"experienced"}"#).unwrap();
        assert_eq!(update.career_phase, Some(CareerPhase::Experienced));
        assert_eq!(update.fields.goals.as_deref(), Some("Ship more"));
        assert!(update.fields.skills.is_none());
    }
}
