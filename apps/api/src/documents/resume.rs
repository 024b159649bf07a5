//! Resume request model and HTML rendering.
//!
//! All three layouts share one content pass (`ResumeView`) that applies the
//! section and entry omission rules and formats date ranges; the Tera
//! templates only decide visual arrangement. Template names end in `.html`,
//! so every interpolated value is autoescaped.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::documents::phase::CareerPhase;
use crate::documents::validation::{blank_fields, DocumentError, Validate, Validated};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumeTemplate {
    #[default]
    Professional,
    Modern,
    Creative,
}

impl ResumeTemplate {
    pub fn template_name(&self) -> &'static str {
        match self {
            ResumeTemplate::Professional => "resume/professional.html",
            ResumeTemplate::Modern => "resume/modern.html",
            ResumeTemplate::Creative => "resume/creative.html",
        }
    }

    /// Role label under the name. The professional layout has none.
    pub fn subtitle(&self, phase: CareerPhase) -> Option<&'static str> {
        let phrases = phase.phrases();
        match self {
            ResumeTemplate::Professional => None,
            ResumeTemplate::Modern => Some(phrases.modern_subtitle),
            ResumeTemplate::Creative => Some(phrases.creative_subtitle),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
    pub highlights: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Immutable resume input, assembled through `ResumeRequestBuilder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResumeRequestBuilder")]
pub struct ResumeRequest {
    #[serde(flatten)]
    personal: PersonalInfo,
    summary: String,
    experience: Vec<Experience>,
    education: Vec<Education>,
    skills: Vec<String>,
    projects: Vec<Project>,
    certifications: Vec<Certification>,
    template: ResumeTemplate,
    career_phase: CareerPhase,
}

impl ResumeRequest {
    pub fn builder() -> ResumeRequestBuilder {
        ResumeRequestBuilder::default()
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn template(&self) -> ResumeTemplate {
        self.template
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }
}

impl Validate for ResumeRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("full_name", &self.personal.full_name),
            ("email", &self.personal.email),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRequestBuilder {
    #[serde(flatten)]
    personal: PersonalInfo,
    summary: String,
    experience: Vec<Experience>,
    education: Vec<Education>,
    skills: Vec<String>,
    projects: Vec<Project>,
    certifications: Vec<Certification>,
    template: ResumeTemplate,
    career_phase: CareerPhase,
}

impl ResumeRequestBuilder {
    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.personal.full_name = value.into();
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.personal.email = value.into();
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.personal.phone = value.into();
        self
    }

    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.personal.location = value.into();
        self
    }

    pub fn linkedin(mut self, value: impl Into<String>) -> Self {
        self.personal.linkedin = value.into();
        self
    }

    pub fn website(mut self, value: impl Into<String>) -> Self {
        self.personal.website = value.into();
        self
    }

    pub fn summary(mut self, value: impl Into<String>) -> Self {
        self.summary = value.into();
        self
    }

    pub fn experience(mut self, entry: Experience) -> Self {
        self.experience.push(entry);
        self
    }

    pub fn education(mut self, entry: Education) -> Self {
        self.education.push(entry);
        self
    }

    /// Edits the first experience entry, adding one when the list is empty.
    pub fn first_experience(mut self, edit: impl FnOnce(&mut Experience)) -> Self {
        match self.experience.first_mut() {
            Some(first) => edit(first),
            None => {
                let mut entry = Experience::default();
                edit(&mut entry);
                self.experience.push(entry);
            }
        }
        self
    }

    /// Edits the first education entry, adding one when the list is empty.
    pub fn first_education(mut self, edit: impl FnOnce(&mut Education)) -> Self {
        match self.education.first_mut() {
            Some(first) => edit(first),
            None => {
                let mut entry = Education::default();
                edit(&mut entry);
                self.education.push(entry);
            }
        }
        self
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Replaces the skills list. Order is kept and duplicates are allowed.
    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn project(mut self, entry: Project) -> Self {
        self.projects.push(entry);
        self
    }

    pub fn certification(mut self, entry: Certification) -> Self {
        self.certifications.push(entry);
        self
    }

    pub fn template(mut self, template: ResumeTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn career_phase(mut self, phase: CareerPhase) -> Self {
        self.career_phase = phase;
        self
    }

    pub fn build(self) -> ResumeRequest {
        ResumeRequest {
            personal: self.personal,
            summary: self.summary,
            experience: self.experience,
            education: self.education,
            skills: self
                .skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            projects: self.projects,
            certifications: self.certifications,
            template: self.template,
            career_phase: self.career_phase,
        }
    }
}

impl From<ResumeRequestBuilder> for ResumeRequest {
    fn from(builder: ResumeRequestBuilder) -> Self {
        builder.build()
    }
}

/// "{start}", "{start} - {end}" or "{start} - Present". Without a start the
/// end (or "Present") stands alone.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let start = start.trim();
    let end = end.trim();
    let tail = if !end.is_empty() {
        Some(end)
    } else if current {
        Some("Present")
    } else {
        None
    };
    match (start.is_empty(), tail) {
        (false, Some(tail)) => format!("{start} - {tail}"),
        (false, None) => start.to_string(),
        (true, Some(tail)) => tail.to_string(),
        (true, None) => String::new(),
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn non_blank<'a>(values: &[&'a String]) -> Vec<&'a str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Render context
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ExperienceView<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    dates: String,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct ProjectView<'a> {
    title: &'a str,
    description: &'a str,
    technologies: &'a str,
    url: &'a str,
    /// Only http(s) URLs become links; anything else is shown as text.
    linkable: bool,
}

fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Content after omission rules; empty vectors hide their section.
#[derive(Debug, Serialize)]
struct ResumeView<'a> {
    person: &'a PersonalInfo,
    subtitle: Option<&'static str>,
    contact_line: Vec<&'a str>,
    link_line: Vec<&'a str>,
    summary: &'a str,
    experience: Vec<ExperienceView<'a>>,
    education: Vec<&'a Education>,
    skills: &'a [String],
    projects: Vec<ProjectView<'a>>,
    certifications: Vec<&'a Certification>,
}

impl<'a> ResumeView<'a> {
    fn new(resume: Validated<'a, ResumeRequest>) -> Self {
        let resume = resume.get();
        let person = &resume.personal;
        Self {
            person,
            subtitle: resume.template.subtitle(resume.career_phase),
            contact_line: non_blank(&[&person.email, &person.phone, &person.location]),
            link_line: non_blank(&[&person.linkedin, &person.website]),
            summary: resume.summary.trim(),
            experience: resume
                .experience
                .iter()
                .filter(|e| present(&e.title) || present(&e.company))
                .map(|e| ExperienceView {
                    title: &e.title,
                    company: &e.company,
                    location: &e.location,
                    dates: format_date_range(&e.start_date, &e.end_date, e.current),
                    description: &e.description,
                })
                .collect(),
            education: resume
                .education
                .iter()
                .filter(|e| present(&e.degree) || present(&e.institution))
                .collect(),
            skills: &resume.skills,
            projects: resume
                .projects
                .iter()
                .filter(|p| present(&p.title))
                .map(|p| {
                    let url = p.url.trim();
                    ProjectView {
                        title: &p.title,
                        description: &p.description,
                        technologies: &p.technologies,
                        url,
                        linkable: is_web_url(url),
                    }
                })
                .collect(),
            certifications: resume
                .certifications
                .iter()
                .filter(|c| present(&c.name))
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Owns the compiled document templates. Built once at startup and shared
/// through `AppState`.
pub struct DocumentRenderer {
    tera: Tera,
}

impl DocumentRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                "resume/professional.html",
                include_str!("../../templates/resume/professional.html"),
            ),
            (
                "resume/modern.html",
                include_str!("../../templates/resume/modern.html"),
            ),
            (
                "resume/creative.html",
                include_str!("../../templates/resume/creative.html"),
            ),
            (
                "resume/page.html",
                include_str!("../../templates/resume/page.html"),
            ),
            (
                "letter/print.html",
                include_str!("../../templates/letter/print.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    pub fn render_resume(&self, request: &ResumeRequest) -> Result<String, DocumentError> {
        let resume = request.validate().map_err(|e| {
            info!("Resume rejected: {e}");
            e
        })?;

        let view = ResumeView::new(resume);
        let html = self
            .tera
            .render(request.template.template_name(), &Context::from_serialize(&view)?)?;

        debug!(
            "Rendered {:?} resume: {} experience, {} education, {} skills ({} bytes)",
            request.template,
            view.experience.len(),
            view.education.len(),
            view.skills.len(),
            html.len()
        );
        Ok(html)
    }

    /// Wraps a rendered resume fragment in a standalone HTML page.
    pub fn resume_page(&self, full_name: &str, fragment: &str) -> Result<String, DocumentError> {
        let mut context = Context::new();
        context.insert("title", &format!("{} - Resume", full_name.trim()));
        context.insert("body", fragment);
        Ok(self.tera.render("resume/page.html", &context)?)
    }

    /// Printable page for a plain-text letter: escaped, newlines as `<br>`.
    pub fn letter_print_page(&self, title: &str, letter: &str) -> Result<String, DocumentError> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("letter", letter);
        Ok(self.tera.render("letter/print.html", &context)?)
    }
}

/// Renders a resume with a freshly compiled renderer. Long-lived callers
/// should keep a `DocumentRenderer` instead.
pub fn generate_resume(request: &ResumeRequest) -> Result<String, DocumentError> {
    DocumentRenderer::new()?.render_resume(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ResumeRequestBuilder {
        ResumeRequest::builder()
            .full_name("Jane Doe")
            .email("jane@example.com")
    }

    fn render(request: &ResumeRequest) -> String {
        DocumentRenderer::new().unwrap().render_resume(request).unwrap()
    }

    #[test]
    fn test_date_range_rules() {
        assert_eq!(format_date_range("2020", "", false), "2020");
        assert_eq!(format_date_range("2020", "2022", false), "2020 - 2022");
        assert_eq!(format_date_range("2020", "2022", true), "2020 - 2022");
        assert_eq!(format_date_range("2020", "", true), "2020 - Present");
        assert_eq!(format_date_range("", "", true), "Present");
        assert_eq!(format_date_range("", "2022", false), "2022");
        assert_eq!(format_date_range("", "", false), "");
    }

    #[test]
    fn test_missing_name_or_email_is_rejected() {
        let err = generate_resume(&ResumeRequest::builder().email("a@b.co").build()).unwrap_err();
        match err {
            DocumentError::Validation(e) => assert_eq!(e.missing, vec!["full_name"]),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = generate_resume(&ResumeRequest::builder().full_name("Jane").build()).unwrap_err();
        match err {
            DocumentError::Validation(e) => assert_eq!(e.missing, vec!["email"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_experience_entries_omit_the_section() {
        for template in [
            ResumeTemplate::Professional,
            ResumeTemplate::Modern,
            ResumeTemplate::Creative,
        ] {
            let html = render(
                &minimal()
                    .template(template)
                    .experience(Experience {
                        location: "Remote".to_string(),
                        description: "Did things".to_string(),
                        ..Default::default()
                    })
                    .build(),
            );
            assert!(!html.contains("PROFESSIONAL EXPERIENCE"), "{template:?}");
            assert!(!html.contains(">Experience<"), "{template:?}");
            assert!(!html.contains("Did things"), "{template:?}");
        }
    }

    #[test]
    fn test_blank_entry_skipped_while_section_renders() {
        let html = render(
            &minimal()
                .experience(Experience {
                    title: "Analyst".to_string(),
                    company: "Acme".to_string(),
                    start_date: "2021".to_string(),
                    current: true,
                    ..Default::default()
                })
                .experience(Experience {
                    description: "ghost entry".to_string(),
                    ..Default::default()
                })
                .build(),
        );
        assert!(html.contains("PROFESSIONAL EXPERIENCE"));
        assert!(html.contains("Analyst | Acme"));
        assert!(html.contains("2021 - Present"));
        assert!(!html.contains("ghost entry"));
    }

    #[test]
    fn test_empty_sections_are_hidden() {
        let html = render(&minimal().build());
        for heading in [
            "PROFESSIONAL SUMMARY",
            "EDUCATION",
            "SKILLS",
            "PROJECTS",
            "CERTIFICATIONS",
        ] {
            assert!(!html.contains(heading), "{heading}");
        }
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("<span>jane@example.com</span>"));
    }

    #[test]
    fn test_skills_keep_order_and_duplicates() {
        let html = render(&minimal().skills(["Rust", "Go", "Rust"]).build());
        assert!(html.contains("<p>Rust, Go, Rust</p>"));
    }

    #[test]
    fn test_creative_subtitle_for_entry_level() {
        let html = render(
            &minimal()
                .template(ResumeTemplate::Creative)
                .career_phase(CareerPhase::EntryLevel)
                .build(),
        );
        assert!(html.contains("Rising Talent"));
    }

    #[test]
    fn test_modern_subtitle_differs_from_creative() {
        let request = minimal()
            .template(ResumeTemplate::Modern)
            .career_phase(CareerPhase::EntryLevel)
            .build();
        let html = render(&request);
        assert!(html.contains("Early Career Professional"));
        assert!(!html.contains("Rising Talent"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render(&minimal().summary("<script>alert(1)</script>").build());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_projects_and_certifications_need_a_title_or_name() {
        let html = render(
            &minimal()
                .project(Project {
                    description: "untitled".to_string(),
                    ..Default::default()
                })
                .certification(Certification {
                    name: "AWS SA".to_string(),
                    issuer: "Amazon".to_string(),
                    date: "2023".to_string(),
                })
                .build(),
        );
        assert!(!html.contains("PROJECTS"));
        assert!(html.contains("CERTIFICATIONS"));
        assert!(html.contains("<strong>AWS SA</strong> - Amazon (2023)"));
    }

    #[test]
    fn test_only_web_project_urls_become_links() {
        for template in [
            ResumeTemplate::Professional,
            ResumeTemplate::Modern,
            ResumeTemplate::Creative,
        ] {
            let html = render(
                &minimal()
                    .template(template)
                    .project(Project {
                        title: "Tracker".to_string(),
                        url: "javascript:alert(1)".to_string(),
                        ..Default::default()
                    })
                    .project(Project {
                        title: "Site".to_string(),
                        url: "https://example.com/site".to_string(),
                        ..Default::default()
                    })
                    .build(),
            );
            assert!(!html.contains("href=\"javascript:"), "{template:?}");
            assert!(html.contains("javascript:alert(1)"), "{template:?}");
            assert!(
                html.contains("href=\"https:&#x2F;&#x2F;example.com&#x2F;site\""),
                "{template:?}"
            );
        }
    }

    #[test]
    fn test_deserialises_flat_personal_fields() {
        let request: ResumeRequest = serde_json::from_str(
            r#"{"full_name":"Jane Doe","email":"jane@example.com","template":"modern",
                "career_phase":"student","skills":[" SQL ",""]}"#,
        )
        .unwrap();
        assert_eq!(request.personal().full_name, "Jane Doe");
        assert_eq!(request.template(), ResumeTemplate::Modern);
        assert_eq!(request.skills(), ["SQL".to_string()]);
    }

    #[test]
    fn test_resume_page_wraps_fragment_unescaped() {
        let renderer = DocumentRenderer::new().unwrap();
        let page = renderer.resume_page("Jane Doe", "<div>x</div>").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Jane Doe - Resume</title>"));
        assert!(page.contains("<div>x</div>"));
    }

    #[test]
    fn test_letter_print_page_escapes_and_breaks_lines() {
        let renderer = DocumentRenderer::new().unwrap();
        let page = renderer
            .letter_print_page("Cover Letter", "Dear A & B,\nHello")
            .unwrap();
        assert!(page.contains("Dear A &amp; B,<br>Hello"));
        assert!(page.contains("Times New Roman"));
    }
}
