//! Best-effort field extraction from plain resume text.
//!
//! Every step is independent and optional; a miss leaves the field unset.
//! Extracted values are suggestions for the user to review, never validated.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::documents::letter::LetterRequestBuilder;
use crate::documents::resume::ResumeRequestBuilder;
use crate::extraction::sections::{find_section, normalize_lines};
use crate::extraction::skills::{extract_skills, split_listed_skills};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// Digit runs with common separators; a candidate needs at least
/// `MIN_PHONE_DIGITS` digits to count.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[0-9(][0-9() .\-]{8,}[0-9]").expect("phone pattern is valid")
});

static WEB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?:/\S*)?").expect("url pattern is valid")
});

const MIN_PHONE_DIGITS: usize = 10;
const JOB_TITLE_MAX_CHARS: usize = 60;
const DEGREE_MARKERS: &[&str] = &["bachelor", "master", "ph.d", "certificate"];

/// Fields recovered from raw text. Absent means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// The whole line mentioning LinkedIn, not just the URL.
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    /// Vocabulary keywords found in the skills section, title-cased.
    pub skills: Vec<String>,
    /// The skills section split on commas and bullets, verbatim.
    pub listed_skills: Vec<String>,
    pub relevant_achievements: Option<String>,
    pub degree: Option<String>,
    pub job_title: Option<String>,
}

impl ExtractedFields {
    /// Number of populated fields, for logging without personal data.
    pub fn populated(&self) -> usize {
        [
            self.full_name.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            self.linkedin.is_some(),
            self.portfolio.is_some(),
            !self.skills.is_empty(),
            !self.listed_skills.is_empty(),
            self.relevant_achievements.is_some(),
            self.degree.is_some(),
            self.job_title.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Copies populated fields into a letter draft. Skills are merged with
    /// the ones already selected; the builder drops duplicates.
    pub fn apply_to_letter(&self, mut builder: LetterRequestBuilder) -> LetterRequestBuilder {
        if let Some(name) = &self.full_name {
            builder = builder.full_name(name);
        }
        if let Some(email) = &self.email {
            builder = builder.email(email);
        }
        if let Some(phone) = &self.phone {
            builder = builder.phone(phone);
        }
        if let Some(linkedin) = &self.linkedin {
            builder = builder.linkedin(linkedin);
        }
        if let Some(portfolio) = &self.portfolio {
            builder = builder.portfolio(portfolio);
        }
        if let Some(achievements) = &self.relevant_achievements {
            builder = builder.relevant_achievements(achievements);
        }
        builder.key_skills(self.skills.iter().cloned())
    }

    /// Copies populated fields into a resume draft. The verbatim skills list
    /// is appended when present, otherwise the vocabulary matches. Degree and
    /// job title go into the first education and experience entries.
    pub fn apply_to_resume(&self, mut builder: ResumeRequestBuilder) -> ResumeRequestBuilder {
        if let Some(name) = &self.full_name {
            builder = builder.full_name(name);
        }
        if let Some(email) = &self.email {
            builder = builder.email(email);
        }
        if let Some(phone) = &self.phone {
            builder = builder.phone(phone);
        }
        if let Some(linkedin) = &self.linkedin {
            builder = builder.linkedin(linkedin);
        }
        if let Some(portfolio) = &self.portfolio {
            builder = builder.website(portfolio);
        }
        let skills = if self.listed_skills.is_empty() {
            &self.skills
        } else {
            &self.listed_skills
        };
        for skill in skills {
            builder = builder.skill(skill);
        }
        if let Some(degree) = &self.degree {
            builder = builder.first_education(|entry| entry.degree = degree.clone());
        }
        if let Some(title) = &self.job_title {
            builder = builder.first_experience(|entry| entry.title = title.clone());
        }
        builder
    }
}

/// Extracts whatever it can from `raw_text`. Never fails.
pub fn extract_fields(raw_text: &str) -> ExtractedFields {
    let lines = normalize_lines(raw_text);

    let skills_section = find_section(&lines, &["skills"]);

    let fields = ExtractedFields {
        full_name: lines.first().cloned(),
        email: first_match(&lines, &EMAIL),
        phone: find_phone(&lines),
        linkedin: lines
            .iter()
            .find(|line| line.to_lowercase().contains("linkedin"))
            .cloned(),
        portfolio: lines
            .iter()
            .filter(|line| !line.to_lowercase().contains("linkedin"))
            .find_map(|line| WEB_URL.find(line))
            .map(|m| m.as_str().to_string()),
        skills: skills_section
            .map(|section| extract_skills(&section.join(" ")))
            .unwrap_or_default(),
        listed_skills: skills_section
            .map(split_listed_skills)
            .unwrap_or_default(),
        relevant_achievements: find_section(&lines, &["achievements", "accomplishments"])
            .map(|section| section.join("\n")),
        degree: find_section(&lines, &["education"]).and_then(|section| {
            section
                .iter()
                .find(|line| {
                    let lower = line.to_lowercase();
                    DEGREE_MARKERS.iter().any(|marker| lower.contains(marker))
                })
                .cloned()
        }),
        job_title: find_section(&lines, &["experience", "work experience"]).and_then(|section| {
            section
                .iter()
                .find(|line| {
                    line.chars().count() < JOB_TITLE_MAX_CHARS
                        && !line.contains('@')
                        && !line.contains("http")
                })
                .cloned()
        }),
    };

    debug!(
        "Extracted {} fields from {} lines",
        fields.populated(),
        lines.len()
    );
    fields
}

fn first_match(lines: &[String], pattern: &Regex) -> Option<String> {
    lines
        .iter()
        .find_map(|line| pattern.find(line))
        .map(|m| m.as_str().to_string())
}

fn find_phone(lines: &[String]) -> Option<String> {
    lines.iter().find_map(|line| {
        PHONE
            .find_iter(line)
            .map(|m| m.as_str())
            .find(|candidate| is_phone_candidate(candidate))
            .map(str::to_string)
    })
}

/// Enough digits, and not just a run of years such as "2015 - 2019 2020 - 2023".
fn is_phone_candidate(candidate: &str) -> bool {
    if candidate.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return false;
    }
    let mut groups = candidate
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty());
    !groups.all(|group| {
        group.len() == 4 && matches!(group.parse::<u16>(), Ok(year) if (1900..=2099).contains(&year))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::letter::LetterRequest;
    use crate::documents::resume::{Education, Experience, ResumeRequest};

    const JANE: &str = "Jane Doe\njane.doe@example.com\n(555) 123-4567\nlinkedin.com/in/janedoe";

    const FULL: &str = "\
Sam Rivera
sam@rivera.dev | +1 415 555 0199
https://www.linkedin.com/in/samrivera
Portfolio: https://rivera.dev/work

SKILLS
Python, React, SQL
• Docker

WORK EXPERIENCE
Senior Data Engineer
Acme Corp, 2019 - 2023

EDUCATION
Bachelor of Science in Computer Science
State University

ACHIEVEMENTS
Cut pipeline latency by 40%
Mentored 5 engineers
";

    #[test]
    fn test_contact_round_trip() {
        let fields = extract_fields(JANE);
        assert_eq!(fields.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(fields.phone.as_deref(), Some("(555) 123-4567"));
        assert!(fields
            .linkedin
            .as_deref()
            .unwrap()
            .contains("linkedin.com/in/janedoe"));
        assert!(fields.portfolio.is_none());
        assert!(fields.skills.is_empty());
    }

    #[test]
    fn test_skills_section_keywords() {
        let fields = extract_fields("Jane Doe\nSkills\nProficient in Python, React, and SQL");
        for expected in ["Python", "React", "Sql"] {
            assert!(fields.skills.contains(&expected.to_string()), "{expected}");
        }
        assert_eq!(
            fields.listed_skills,
            vec!["Proficient in Python", "React", "and SQL"]
        );
    }

    #[test]
    fn test_full_resume() {
        let fields = extract_fields(FULL);
        assert_eq!(fields.full_name.as_deref(), Some("Sam Rivera"));
        assert_eq!(fields.email.as_deref(), Some("sam@rivera.dev"));
        assert_eq!(fields.phone.as_deref(), Some("+1 415 555 0199"));
        assert_eq!(
            fields.linkedin.as_deref(),
            Some("https://www.linkedin.com/in/samrivera")
        );
        assert_eq!(fields.portfolio.as_deref(), Some("https://rivera.dev/work"));
        assert_eq!(fields.listed_skills, vec!["Python", "React", "SQL", "Docker"]);
        assert_eq!(fields.job_title.as_deref(), Some("Senior Data Engineer"));
        assert_eq!(
            fields.degree.as_deref(),
            Some("Bachelor of Science in Computer Science")
        );
        assert_eq!(
            fields.relevant_achievements.as_deref(),
            Some("Cut pipeline latency by 40%\nMentored 5 engineers")
        );
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        let fields = extract_fields("Jane\n2019 - 2021\nRoom 12345");
        assert!(fields.phone.is_none());
    }

    #[test]
    fn test_apply_to_resume_updates_first_entries() {
        let draft = ResumeRequest::builder()
            .education(Education {
                degree: "BSc".to_string(),
                institution: "State".to_string(),
                ..Default::default()
            })
            .experience(Experience {
                company: "Acme".to_string(),
                ..Default::default()
            })
            .experience(Experience {
                title: "Intern".to_string(),
                ..Default::default()
            });
        let text = "Jane\nEXPERIENCE\nAnalyst\nEDUCATION\nBachelor of Arts";
        let resume = extract_fields(text).apply_to_resume(draft).build();

        assert_eq!(resume.education().len(), 1);
        assert_eq!(resume.education()[0].degree, "Bachelor of Arts");
        assert_eq!(resume.education()[0].institution, "State");
        assert_eq!(resume.experience().len(), 2);
        assert_eq!(resume.experience()[0].title, "Analyst");
        assert_eq!(resume.experience()[0].company, "Acme");
        assert_eq!(resume.experience()[1].title, "Intern");
    }

    #[test]
    fn test_year_ranges_are_not_phones() {
        let fields = extract_fields("Jane\nAcme Corp 2015 - 2019 2020 - 2023");
        assert!(fields.phone.is_none());

        let fields = extract_fields("Jane\n2015 - 2019 2020 - 2023\n555-123-4567");
        assert_eq!(fields.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let fields = extract_fields("   \n\n");
        assert_eq!(fields, ExtractedFields::default());
        assert_eq!(fields.populated(), 0);
    }

    #[test]
    fn test_apply_to_letter_merges_skills() {
        let builder = LetterRequest::builder().key_skill("python");
        let letter = extract_fields(FULL).apply_to_letter(builder).build();
        assert_eq!(letter.full_name(), "Sam Rivera");
        assert_eq!(letter.key_skills()[0], "python");
        assert!(!letter.key_skills().contains(&"Python".to_string()));
        assert!(letter.key_skills().contains(&"Docker".to_string()));
    }

    #[test]
    fn test_apply_to_resume_prefers_listed_skills() {
        let resume: ResumeRequest = extract_fields(FULL)
            .apply_to_resume(ResumeRequest::builder())
            .build();
        assert_eq!(resume.personal().website, "https://rivera.dev/work");
        assert_eq!(resume.skills(), ["Python", "React", "SQL", "Docker"]);
        assert_eq!(resume.experience()[0].title, "Senior Data Engineer");
        assert_eq!(
            resume.education()[0].degree,
            "Bachelor of Science in Computer Science"
        );
    }
}
