//! Seeds letter and resume drafts from a saved career profile.

use crate::documents::letter::{LetterRequest, LetterRequestBuilder};
use crate::documents::phase::CareerPhase;
use crate::documents::resume::{Education, Experience, ResumeRequest, ResumeRequestBuilder};
use crate::models::profile::CareerProfileRow;

/// Suggested goal, work styles and work values for a phase.
struct LetterSeed {
    short_term_goal: &'static str,
    work_styles: [&'static str; 3],
    work_values: [&'static str; 3],
}

fn letter_seed(phase: CareerPhase) -> Option<LetterSeed> {
    let seed = match phase {
        CareerPhase::Student => LetterSeed {
            short_term_goal: "Seeking to apply my academic knowledge in a professional setting",
            work_styles: ["Collaborative", "Eager to learn", "Detail-oriented"],
            work_values: ["Growth", "Learning opportunities", "Mentorship"],
        },
        CareerPhase::EntryLevel => LetterSeed {
            short_term_goal:
                "Develop my skills in a professional environment and make meaningful contributions",
            work_styles: ["Adaptable", "Team-oriented", "Proactive"],
            work_values: ["Growth", "Impact", "Collaboration"],
        },
        CareerPhase::CareerSwitcher => LetterSeed {
            short_term_goal:
                "Successfully transition into this new field by leveraging my transferable skills",
            work_styles: ["Adaptable", "Quick learner", "Resilient"],
            work_values: ["New challenges", "Growth", "Applying diverse experiences"],
        },
        CareerPhase::Experienced => LetterSeed {
            short_term_goal: "Apply my extensive experience to drive results and mentor others",
            work_styles: ["Strategic", "Leadership-oriented", "Results-driven"],
            work_values: ["Innovation", "Excellence", "Impact"],
        },
        CareerPhase::Unsure => return None,
    };
    Some(seed)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Letter draft with the profile's skills, phase and phase-specific
/// suggestions. Identity and company fields are left for the user.
pub fn letter_defaults(profile: &CareerProfileRow) -> LetterRequestBuilder {
    let phase = profile.phase();
    let fields = &profile.fields;

    let mut builder = LetterRequest::builder()
        .career_phase(phase)
        .key_skills(fields.skills.iter().flatten().cloned());

    if let Some(goals) = non_blank(&fields.goals) {
        builder = builder.long_term_goals(goals);
    }
    if let Some(seed) = letter_seed(phase) {
        builder = builder
            .short_term_goals(seed.short_term_goal)
            .work_styles(seed.work_styles)
            .work_values(seed.work_values);
    }
    builder
}

/// Resume draft with the profile's skills plus an education entry for
/// students or a current-role entry for entry-level and experienced users.
pub fn resume_defaults(profile: &CareerProfileRow) -> ResumeRequestBuilder {
    let phase = profile.phase();
    let fields = &profile.fields;

    let mut builder = ResumeRequest::builder()
        .career_phase(phase)
        .skills(fields.skills.iter().flatten().cloned());

    match phase {
        CareerPhase::Student => {
            if let Some(education) = non_blank(&fields.education) {
                builder = builder.education(Education {
                    degree: education.to_string(),
                    graduation_date: fields
                        .graduation_year
                        .map(|year| year.to_string())
                        .unwrap_or_default(),
                    highlights: non_blank(&fields.relevant_courses)
                        .unwrap_or_default()
                        .to_string(),
                    ..Default::default()
                });
            }
        }
        CareerPhase::EntryLevel | CareerPhase::Experienced => {
            if let Some(role) = non_blank(&fields.current_role) {
                let description = non_blank(&fields.accomplishments)
                    .or_else(|| non_blank(&fields.key_achievements))
                    .unwrap_or_default();
                builder = builder.experience(Experience {
                    title: role.to_string(),
                    current: true,
                    description: description.to_string(),
                    ..Default::default()
                });
            }
        }
        CareerPhase::CareerSwitcher | CareerPhase::Unsure => {}
    }
    builder
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::profile::ProfileFields;

    fn profile(phase: &str, fields: ProfileFields) -> CareerProfileRow {
        CareerProfileRow {
            id: 7,
            career_phase: phase.to_string(),
            fields,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_student_letter_defaults() {
        let row = profile(
            "student",
            ProfileFields {
                skills: Some(vec!["Python".to_string(), "python".to_string()]),
                goals: Some("Become a data scientist".to_string()),
                ..Default::default()
            },
        );
        let letter = letter_defaults(&row)
            .full_name("Jane")
            .company_name("Acme")
            .position_title("Intern")
            .build();
        let json = serde_json::to_value(&letter).unwrap();
        assert_eq!(json["key_skills"], serde_json::json!(["Python"]));
        assert_eq!(json["long_term_goals"], "Become a data scientist");
        assert_eq!(
            json["short_term_goals"],
            "Seeking to apply my academic knowledge in a professional setting"
        );
        assert_eq!(
            json["work_style"],
            serde_json::json!(["Collaborative", "Eager to learn", "Detail-oriented"])
        );
        assert_eq!(json["career_phase"], "student");
    }

    #[test]
    fn test_unsure_letter_has_no_seeded_selections() {
        let letter = letter_defaults(&profile("unsure", ProfileFields::default())).build();
        let json = serde_json::to_value(&letter).unwrap();
        assert_eq!(json["short_term_goals"], "");
        assert_eq!(json["work_values"], serde_json::json!([]));
    }

    #[test]
    fn test_student_resume_gets_education_entry() {
        let row = profile(
            "student",
            ProfileFields {
                education: Some("BSc Computer Science".to_string()),
                graduation_year: Some(2025),
                relevant_courses: Some("Algorithms, Databases".to_string()),
                ..Default::default()
            },
        );
        let resume = resume_defaults(&row).build();
        let education = &resume.education()[0];
        assert_eq!(education.degree, "BSc Computer Science");
        assert_eq!(education.graduation_date, "2025");
        assert_eq!(education.highlights, "Algorithms, Databases");
        assert!(resume.experience().is_empty());
    }

    #[test]
    fn test_experienced_resume_gets_current_role() {
        let row = profile(
            "experienced",
            ProfileFields {
                current_role: Some("Engineering Manager".to_string()),
                key_achievements: Some("Grew team from 3 to 12".to_string()),
                skills: Some(vec!["Leadership".to_string()]),
                ..Default::default()
            },
        );
        let resume = resume_defaults(&row).build();
        let role = &resume.experience()[0];
        assert_eq!(role.title, "Engineering Manager");
        assert!(role.current);
        assert_eq!(role.description, "Grew team from 3 to 12");
        assert_eq!(resume.skills(), ["Leadership"]);
    }

    #[test]
    fn test_career_switcher_resume_has_no_seeded_entries() {
        let row = profile(
            "career-switcher",
            ProfileFields {
                current_role: Some("Teacher".to_string()),
                education: Some("BA".to_string()),
                ..Default::default()
            },
        );
        let resume = resume_defaults(&row).build();
        assert!(resume.experience().is_empty());
        assert!(resume.education().is_empty());
    }
}
