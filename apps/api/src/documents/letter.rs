//! Cover letter request model and the shared letter frame (date, salutation,
//! closing, contact block). Body paragraphs live in `letter_structures`.
#![allow(dead_code)]

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::documents::phase::CareerPhase;
use crate::documents::validation::{blank_fields, Validate, ValidationError};

/// Work style and work value selections are capped at this many entries.
pub const MAX_SELECTIONS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greeting {
    #[default]
    Dear,
    Hello,
    Greetings,
    To,
}

impl Greeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Dear => "Dear",
            Greeting::Hello => "Hello",
            Greeting::Greetings => "Greetings",
            Greeting::To => "To",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Closing {
    #[default]
    Sincerely,
    #[serde(rename = "Best regards")]
    BestRegards,
    #[serde(rename = "Kind regards")]
    KindRegards,
    #[serde(rename = "Thank you")]
    ThankYou,
    Respectfully,
}

impl Closing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Closing::Sincerely => "Sincerely",
            Closing::BestRegards => "Best regards",
            Closing::KindRegards => "Kind regards",
            Closing::ThankYou => "Thank you",
            Closing::Respectfully => "Respectfully",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUpTimeframe {
    #[default]
    #[serde(rename = "one week")]
    OneWeek,
    #[serde(rename = "two weeks")]
    TwoWeeks,
    #[serde(rename = "a few days")]
    AFewDays,
}

impl FollowUpTimeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpTimeframe::OneWeek => "one week",
            FollowUpTimeframe::TwoWeeks => "two weeks",
            FollowUpTimeframe::AFewDays => "a few days",
        }
    }
}

/// Body-paragraph strategy. See `letter_structures` for the prose rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterStructure {
    #[default]
    Standard,
    StoryBased,
    AchievementFocused,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl ContactInfo {
    /// One labelled line per non-empty field; empty when nothing is set.
    pub fn block(&self) -> String {
        [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("LinkedIn", &self.linkedin),
            ("Portfolio", &self.portfolio),
        ]
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{label}: {}", value.trim()))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Immutable cover letter input. Built through `LetterRequestBuilder`;
/// deserialisation goes through the builder as well, so the skill and
/// selection invariants hold for every instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LetterRequestBuilder")]
pub struct LetterRequest {
    pub(super) greeting: Greeting,
    pub(super) recipient_name: String,
    pub(super) recipient_title: String,
    pub(super) company_name: String,
    pub(super) position_title: String,
    pub(super) source_of_listing: String,
    pub(super) full_name: String,
    pub(super) contact: ContactInfo,
    pub(super) short_term_goals: String,
    pub(super) long_term_goals: String,
    pub(super) company_interest: String,
    pub(super) role_alignment: String,
    pub(super) key_skills: Vec<String>,
    pub(super) relevant_achievements: String,
    pub(super) work_style: Vec<String>,
    pub(super) work_values: Vec<String>,
    pub(super) closing: Closing,
    pub(super) follow_up: bool,
    pub(super) follow_up_timeframe: FollowUpTimeframe,
    pub(super) structure: LetterStructure,
    pub(super) career_phase: CareerPhase,
}

impl LetterRequest {
    pub fn builder() -> LetterRequestBuilder {
        LetterRequestBuilder::default()
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn key_skills(&self) -> &[String] {
        &self.key_skills
    }

    pub fn structure(&self) -> LetterStructure {
        self.structure
    }

    /// "{greeting} {title }{name}," or "{greeting} Hiring Manager,".
    pub(super) fn salutation(&self) -> String {
        let name = self.recipient_name.trim();
        if name.is_empty() {
            return format!("{} Hiring Manager,", self.greeting.as_str());
        }
        let title = self.recipient_title.trim();
        if title.is_empty() {
            format!("{} {name},", self.greeting.as_str())
        } else {
            format!("{} {title} {name},", self.greeting.as_str())
        }
    }

    /// Follow-up sentence tail, only when a follow-up was requested.
    pub(super) fn follow_up_timeframe(&self) -> Option<&'static str> {
        self.follow_up.then(|| self.follow_up_timeframe.as_str())
    }
}

impl Validate for LetterRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("full_name", &self.full_name),
            ("company_name", &self.company_name),
            ("position_title", &self.position_title),
        ])
    }
}

/// Mutable draft of a `LetterRequest`. Also the wire shape for letter
/// requests: every field is optional on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterRequestBuilder {
    greeting: Greeting,
    recipient_name: String,
    recipient_title: String,
    company_name: String,
    position_title: String,
    source_of_listing: String,
    full_name: String,
    contact: ContactInfo,
    short_term_goals: String,
    long_term_goals: String,
    company_interest: String,
    role_alignment: String,
    key_skills: Vec<String>,
    relevant_achievements: String,
    work_style: Vec<String>,
    work_values: Vec<String>,
    closing: Closing,
    follow_up: bool,
    follow_up_timeframe: FollowUpTimeframe,
    structure: LetterStructure,
    career_phase: CareerPhase,
}

impl Default for LetterRequestBuilder {
    fn default() -> Self {
        Self {
            greeting: Greeting::default(),
            recipient_name: String::new(),
            recipient_title: String::new(),
            company_name: String::new(),
            position_title: String::new(),
            source_of_listing: String::new(),
            full_name: String::new(),
            contact: ContactInfo::default(),
            short_term_goals: String::new(),
            long_term_goals: String::new(),
            company_interest: String::new(),
            role_alignment: String::new(),
            key_skills: Vec::new(),
            relevant_achievements: String::new(),
            work_style: Vec::new(),
            work_values: Vec::new(),
            closing: Closing::default(),
            follow_up: true,
            follow_up_timeframe: FollowUpTimeframe::default(),
            structure: LetterStructure::default(),
            career_phase: CareerPhase::default(),
        }
    }
}

macro_rules! text_setters {
    ($($name:ident => $($field:ident).+),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.$($field).+ = value.into();
                self
            }
        )*
    };
}

impl LetterRequestBuilder {
    text_setters! {
        recipient_name => recipient_name,
        recipient_title => recipient_title,
        company_name => company_name,
        position_title => position_title,
        source_of_listing => source_of_listing,
        full_name => full_name,
        email => contact.email,
        phone => contact.phone,
        linkedin => contact.linkedin,
        portfolio => contact.portfolio,
        short_term_goals => short_term_goals,
        long_term_goals => long_term_goals,
        company_interest => company_interest,
        role_alignment => role_alignment,
        relevant_achievements => relevant_achievements,
    }

    pub fn greeting(mut self, greeting: Greeting) -> Self {
        self.greeting = greeting;
        self
    }

    pub fn closing(mut self, closing: Closing) -> Self {
        self.closing = closing;
        self
    }

    pub fn follow_up(mut self, follow_up: bool) -> Self {
        self.follow_up = follow_up;
        self
    }

    pub fn follow_up_timeframe(mut self, timeframe: FollowUpTimeframe) -> Self {
        self.follow_up_timeframe = timeframe;
        self
    }

    pub fn structure(mut self, structure: LetterStructure) -> Self {
        self.structure = structure;
        self
    }

    pub fn career_phase(mut self, phase: CareerPhase) -> Self {
        self.career_phase = phase;
        self
    }

    /// Appends a key skill unless an equal one (ignoring case) is present.
    pub fn key_skill(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if !self.has_key_skill(&skill) {
            self.key_skills.push(skill);
        }
        self
    }

    pub fn key_skills<I, S>(self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        skills.into_iter().fold(self, |b, s| b.key_skill(s))
    }

    pub fn has_key_skill(&self, skill: &str) -> bool {
        let skill = skill.trim();
        self.key_skills
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(skill))
    }

    /// Adds a work style; ignored once `MAX_SELECTIONS` are selected.
    pub fn work_style(mut self, style: impl Into<String>) -> Self {
        select(&mut self.work_style, style.into());
        self
    }

    pub fn work_styles<I, S>(self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        styles.into_iter().fold(self, |b, s| b.work_style(s))
    }

    /// Adds a work value; ignored once `MAX_SELECTIONS` are selected.
    pub fn work_value(mut self, value: impl Into<String>) -> Self {
        select(&mut self.work_values, value.into());
        self
    }

    pub fn work_values<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values.into_iter().fold(self, |b, v| b.work_value(v))
    }

    pub fn build(self) -> LetterRequest {
        LetterRequest {
            greeting: self.greeting,
            recipient_name: self.recipient_name,
            recipient_title: self.recipient_title,
            company_name: self.company_name,
            position_title: self.position_title,
            source_of_listing: self.source_of_listing,
            full_name: self.full_name,
            contact: self.contact,
            short_term_goals: self.short_term_goals,
            long_term_goals: self.long_term_goals,
            company_interest: self.company_interest,
            role_alignment: self.role_alignment,
            key_skills: dedup_skills(self.key_skills),
            relevant_achievements: self.relevant_achievements,
            work_style: cap_selections(self.work_style),
            work_values: cap_selections(self.work_values),
            closing: self.closing,
            follow_up: self.follow_up,
            follow_up_timeframe: self.follow_up_timeframe,
            structure: self.structure,
            career_phase: self.career_phase,
        }
    }
}

impl From<LetterRequestBuilder> for LetterRequest {
    fn from(builder: LetterRequestBuilder) -> Self {
        builder.build()
    }
}

fn select(list: &mut Vec<String>, item: String) {
    let item = item.trim();
    if item.is_empty() || list.len() >= MAX_SELECTIONS || list.iter().any(|s| s == item) {
        return;
    }
    list.push(item.to_string());
}

fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if skill.is_empty() || out.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            continue;
        }
        out.push(skill.to_string());
    }
    out
}

fn cap_selections(items: Vec<String>) -> Vec<String> {
    let mut out = Vec::new();
    for item in items {
        select(&mut out, item);
    }
    out
}

/// "January 5, 2025".
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Generates a cover letter dated today (local calendar day).
pub fn generate_letter(request: &LetterRequest) -> Result<String, ValidationError> {
    generate_letter_on(request, Local::now().date_naive())
}

/// Generates a cover letter dated `date`.
pub fn generate_letter_on(
    request: &LetterRequest,
    date: NaiveDate,
) -> Result<String, ValidationError> {
    let letter = request.validate().map_err(|e| {
        info!("Cover letter rejected: {e}");
        e
    })?;

    let [first, second, third, fourth] = letter.structure.paragraphs(letter.get());

    let mut out = format!(
        "{date}\n\n{salutation}\n\n{first}\n\n{second}\n\n{third}\n\n{fourth}\n\n{closing},\n{name}\n",
        date = format_letter_date(date),
        salutation = letter.salutation(),
        closing = letter.closing.as_str(),
        name = letter.full_name.trim(),
    );

    let contact = letter.contact.block();
    if !contact.is_empty() {
        out.push('\n');
        out.push_str(&contact);
    }

    debug!(
        "Generated {:?} cover letter ({} chars)",
        letter.structure,
        out.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> LetterRequestBuilder {
        LetterRequest::builder()
            .full_name("Jane Doe")
            .company_name("Acme Corp")
            .position_title("Data Analyst")
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_date_format_has_no_zero_padding() {
        assert_eq!(format_letter_date(day()), "January 5, 2025");
    }

    #[test]
    fn test_letter_starts_with_date_and_default_salutation() {
        let letter = generate_letter_on(&complete().build(), day()).unwrap();
        assert!(letter.starts_with("January 5, 2025\n\nDear Hiring Manager,\n\n"));
    }

    #[test]
    fn test_salutation_includes_title_and_name() {
        let request = complete()
            .greeting(Greeting::Hello)
            .recipient_title("Dr.")
            .recipient_name("Smith")
            .build();
        assert_eq!(request.salutation(), "Hello Dr. Smith,");
    }

    #[test]
    fn test_salutation_without_title() {
        let request = complete().recipient_name("Sam Lee").build();
        assert_eq!(request.salutation(), "Dear Sam Lee,");
    }

    #[test]
    fn test_missing_full_name_is_rejected() {
        let request = LetterRequest::builder()
            .company_name("Acme Corp")
            .position_title("Data Analyst")
            .build();
        let err = generate_letter_on(&request, day()).unwrap_err();
        assert_eq!(err.missing, vec!["full_name"]);
    }

    #[test]
    fn test_missing_company_or_position_is_rejected() {
        let no_company = LetterRequest::builder()
            .full_name("Jane Doe")
            .position_title("Data Analyst")
            .build();
        assert_eq!(
            generate_letter_on(&no_company, day()).unwrap_err().missing,
            vec!["company_name"]
        );

        let no_position = LetterRequest::builder()
            .full_name("Jane Doe")
            .company_name("Acme Corp")
            .build();
        assert_eq!(
            generate_letter_on(&no_position, day()).unwrap_err().missing,
            vec!["position_title"]
        );
    }

    #[test]
    fn test_empty_request_names_all_required_fields() {
        let err = generate_letter_on(&LetterRequest::builder().build(), day()).unwrap_err();
        assert_eq!(err.missing, vec!["full_name", "company_name", "position_title"]);
    }

    #[test]
    fn test_every_structure_mentions_company_and_position() {
        for structure in [
            LetterStructure::Standard,
            LetterStructure::StoryBased,
            LetterStructure::AchievementFocused,
        ] {
            let request = complete().structure(structure).build();
            let letter = generate_letter_on(&request, day()).unwrap();
            assert!(letter.contains("Acme Corp"), "{structure:?}");
            assert!(letter.contains("Data Analyst"), "{structure:?}");
        }
    }

    #[test]
    fn test_closing_block_and_no_contact() {
        let letter = generate_letter_on(&complete().closing(Closing::BestRegards).build(), day())
            .unwrap();
        assert!(letter.ends_with("\n\nBest regards,\nJane Doe\n"));
        assert!(!letter.contains("Email:"));
    }

    #[test]
    fn test_contact_block_lists_only_present_fields() {
        let request = complete()
            .email("jane@example.com")
            .portfolio("https://jane.dev")
            .build();
        let letter = generate_letter_on(&request, day()).unwrap();
        assert!(letter.ends_with(
            "Sincerely,\nJane Doe\n\nEmail: jane@example.com\nPortfolio: https://jane.dev"
        ));
        assert!(!letter.contains("Phone:"));
        assert!(!letter.contains("LinkedIn:"));
    }

    #[test]
    fn test_same_day_generation_is_byte_identical() {
        let request = complete().key_skills(["Python", "SQL"]).build();
        let a = generate_letter_on(&request, day()).unwrap();
        let b = generate_letter_on(&request, day()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_letter_uses_today() {
        let request = complete().build();
        let today = format_letter_date(Local::now().date_naive());
        let letter = generate_letter(&request).unwrap();
        // Tolerate a midnight rollover between the two clock reads.
        let tomorrow = format_letter_date(Local::now().date_naive());
        assert!(letter.starts_with(&today) || letter.starts_with(&tomorrow));
    }

    #[test]
    fn test_key_skills_are_deduplicated_case_insensitively() {
        let request = complete()
            .key_skills(["Python", "python", " SQL ", "", "Sql"])
            .build();
        assert_eq!(request.key_skills(), ["Python", "SQL"]);
    }

    #[test]
    fn test_selections_are_capped_at_five() {
        let request = complete()
            .work_styles(["A", "B", "C", "D", "E", "F"])
            .work_values(["V1", "V1", "V2"])
            .build();
        assert_eq!(request.work_style.len(), MAX_SELECTIONS);
        assert_eq!(request.work_values, vec!["V1", "V2"]);
    }

    #[test]
    fn test_deserialization_goes_through_builder() {
        let json = serde_json::json!({
            "full_name": "Jane Doe",
            "company_name": "Acme Corp",
            "position_title": "Data Analyst",
            "key_skills": ["Rust", "rust", "Go"],
            "work_style": ["A", "B", "C", "D", "E", "F", "G"],
            "closing": "Kind regards",
            "follow_up_timeframe": "two weeks",
            "structure": "story-based",
            "career_phase": "entry-level"
        });
        let request: LetterRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.key_skills(), ["Rust", "Go"]);
        assert_eq!(request.work_style.len(), 5);
        assert_eq!(request.closing, Closing::KindRegards);
        assert_eq!(request.follow_up_timeframe, FollowUpTimeframe::TwoWeeks);
        assert_eq!(request.structure(), LetterStructure::StoryBased);
        assert_eq!(request.career_phase, CareerPhase::EntryLevel);
        assert!(request.follow_up, "follow-up defaults to on");
    }

    #[test]
    fn test_follow_up_timeframe_only_when_enabled() {
        assert_eq!(complete().build().follow_up_timeframe(), Some("one week"));
        assert_eq!(complete().follow_up(false).build().follow_up_timeframe(), None);
    }
}
