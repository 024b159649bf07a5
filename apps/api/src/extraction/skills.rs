//! Skill keyword matching.

/// Known skill and tool keywords, matched as lowercase substrings.
pub const SKILL_VOCABULARY: &[&str] = &[
    "javascript", "python", "java", "c++", "c#", "react", "angular", "vue", "node",
    "sql", "nosql", "mongodb", "postgresql", "mysql", "communication", "leadership",
    "teamwork", "problem-solving", "critical thinking", "time management", "project management",
    "agile", "scrum", "kanban", "aws", "azure", "gcp", "devops", "ci/cd", "docker", "kubernetes",
    "html", "css", "sass", "less", "typescript", "redux", "graphql", "rest", "api", "git",
    "github", "gitlab", "bitbucket", "jira", "confluence", "adobe", "photoshop", "illustrator",
    "indesign", "figma", "sketch", "analytics", "seo", "marketing", "sales", "customer service",
    "account management", "negotiation", "presentation", "research", "writing", "editing",
    "proofreading", "data analysis", "machine learning", "ai", "artificial intelligence",
    "natural language processing", "nlp", "data visualization", "power bi", "tableau",
    "excel", "word", "powerpoint", "outlook", "office",
];

/// Every vocabulary keyword that occurs in `text`, title-cased, in
/// vocabulary order. Plain substring matching: "javascript" also yields
/// "Java", "sql" inside "PostgreSQL" also yields "Sql".
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower.contains(*skill))
        .map(|skill| title_case(skill))
        .collect()
}

/// Upper-cases the first character of each space-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Splits a skills section into its comma- or bullet-separated items.
pub fn split_listed_skills(section: &[String]) -> Vec<String> {
    section
        .join(" ")
        .split([',', '•', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
