//! The user's self-selected career stage. Drives phrasing in every letter
//! structure and the subtitle of the modern and creative resumes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerPhase {
    Student,
    EntryLevel,
    CareerSwitcher,
    Experienced,
    #[default]
    Unsure,
}

/// Phrase set for a phase. Experienced and unsure share the generic
/// professional wording except where a resume subtitle distinguishes them.
#[derive(Debug, Clone, Copy)]
pub struct PhasePhrases {
    /// "With {background} in ..." in the standard letter opening.
    pub background: &'static str,
    /// "Throughout my {journey}, ..." in the story letter.
    pub journey: &'static str,
    /// "in {pivotal_context}" in the story letter hook.
    pub pivotal_context: &'static str,
    /// "As a {persona} with expertise in ..." in the achievement letter.
    pub persona: &'static str,
    /// "throughout my {track_record}" in the achievement letter.
    pub track_record: &'static str,
    pub modern_subtitle: &'static str,
    pub creative_subtitle: &'static str,
}

impl CareerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerPhase::Student => "student",
            CareerPhase::EntryLevel => "entry-level",
            CareerPhase::CareerSwitcher => "career-switcher",
            CareerPhase::Experienced => "experienced",
            CareerPhase::Unsure => "unsure",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "student" => Some(CareerPhase::Student),
            "entry-level" => Some(CareerPhase::EntryLevel),
            "career-switcher" => Some(CareerPhase::CareerSwitcher),
            "experienced" => Some(CareerPhase::Experienced),
            "unsure" => Some(CareerPhase::Unsure),
            _ => None,
        }
    }

    pub fn phrases(&self) -> PhasePhrases {
        match self {
            CareerPhase::Student => PhasePhrases {
                background: "my educational background and coursework",
                journey: "academic journey",
                pivotal_context: "my studies",
                persona: "promising graduate",
                track_record: "academic career",
                modern_subtitle: "Student",
                creative_subtitle: "Aspiring Professional",
            },
            CareerPhase::EntryLevel => PhasePhrases {
                background: "my early career experience",
                journey: "early career",
                pivotal_context: "my professional life",
                persona: "motivated professional",
                track_record: "professional journey",
                modern_subtitle: "Early Career Professional",
                creative_subtitle: "Rising Talent",
            },
            CareerPhase::CareerSwitcher => PhasePhrases {
                background: "my diverse professional background",
                journey: "professional transitions",
                pivotal_context: "my professional life",
                persona: "versatile professional",
                track_record: "professional journey",
                modern_subtitle: "Career Transition Professional",
                creative_subtitle: "Career Transformer",
            },
            CareerPhase::Experienced => PhasePhrases {
                background: "my extensive professional experience",
                journey: "career",
                pivotal_context: "my professional life",
                persona: "seasoned professional",
                track_record: "professional journey",
                modern_subtitle: "Experienced Professional",
                creative_subtitle: "Seasoned Expert",
            },
            CareerPhase::Unsure => PhasePhrases {
                background: "my extensive professional experience",
                journey: "career",
                pivotal_context: "my professional life",
                persona: "seasoned professional",
                track_record: "professional journey",
                modern_subtitle: "Professional",
                creative_subtitle: "Professional",
            },
        }
    }

    /// Two fallback bullets for an achievement-focused letter with no
    /// achievements supplied.
    pub fn generic_achievements(&self, skills: &[String], values: &[String]) -> [String; 2] {
        let first_skill = |fallback: &str| {
            skills
                .first()
                .map(String::as_str)
                .unwrap_or(fallback)
                .to_string()
        };
        let second_skill = |fallback: &str| {
            skills
                .get(1)
                .map(String::as_str)
                .unwrap_or(fallback)
                .to_string()
        };

        match self {
            CareerPhase::Student => [
                format!(
                    "Completed coursework in {} with excellent academic standing",
                    first_skill("relevant subject areas")
                ),
                format!(
                    "Led a student project that demonstrated skills in {}",
                    second_skill("problem-solving and teamwork")
                ),
            ],
            CareerPhase::EntryLevel => [
                format!(
                    "Successfully applied {} to improve processes in my current role",
                    first_skill("key skills")
                ),
                format!(
                    "Collaborated with team members to achieve departmental goals through {}",
                    second_skill("effective communication")
                ),
            ],
            CareerPhase::CareerSwitcher => [
                format!(
                    "Transferred skills in {} to tackle new challenges",
                    first_skill("previous field")
                ),
                "Quickly adapted to new environments while maintaining high performance standards"
                    .to_string(),
            ],
            CareerPhase::Experienced | CareerPhase::Unsure => [
                format!(
                    "Led initiatives that resulted in improved outcomes through {}",
                    first_skill("strategic planning")
                ),
                format!(
                    "Mentored team members and fostered a culture of {}",
                    values.first().map(String::as_str).unwrap_or("excellence")
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serde_uses_kebab_case() {
        let phase: CareerPhase = serde_json::from_str(r#""career-switcher""#).unwrap();
        assert_eq!(phase, CareerPhase::CareerSwitcher);
        assert_eq!(
            serde_json::to_string(&CareerPhase::EntryLevel).unwrap(),
            r#""entry-level""#
        );
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for phase in [
            CareerPhase::Student,
            CareerPhase::EntryLevel,
            CareerPhase::CareerSwitcher,
            CareerPhase::Experienced,
            CareerPhase::Unsure,
        ] {
            assert_eq!(CareerPhase::parse(phase.as_str()), Some(phase));
        }
        assert_eq!(CareerPhase::parse("retired"), None);
    }

    #[test]
    fn test_default_phase_is_unsure() {
        assert_eq!(CareerPhase::default(), CareerPhase::Unsure);
    }

    #[test]
    fn test_creative_subtitle_for_entry_level_is_rising_talent() {
        assert_eq!(
            CareerPhase::EntryLevel.phrases().creative_subtitle,
            "Rising Talent"
        );
    }

    #[test]
    fn test_modern_and_creative_subtitles_differ() {
        for phase in [
            CareerPhase::Student,
            CareerPhase::EntryLevel,
            CareerPhase::CareerSwitcher,
            CareerPhase::Experienced,
        ] {
            let p = phase.phrases();
            assert_ne!(p.modern_subtitle, p.creative_subtitle, "{phase:?}");
        }
    }

    #[test]
    fn test_student_generic_achievements_use_first_two_skills() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let bullets = CareerPhase::Student.generic_achievements(&skills, &[]);
        assert!(bullets[0].contains("Python"));
        assert!(bullets[1].contains("SQL"));
    }

    #[test]
    fn test_generic_achievements_fall_back_without_skills() {
        let bullets = CareerPhase::Student.generic_achievements(&[], &[]);
        assert!(bullets[0].contains("relevant subject areas"));
        assert!(bullets[1].contains("problem-solving and teamwork"));
    }

    #[test]
    fn test_experienced_second_bullet_uses_first_value() {
        let values = vec!["Integrity".to_string()];
        let bullets = CareerPhase::Experienced.generic_achievements(&[], &values);
        assert!(bullets[1].ends_with("culture of Integrity"));
    }
}
