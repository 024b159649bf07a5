//! Body paragraphs for the three letter structures.
//!
//! Each structure produces exactly four paragraphs. Optional inputs never
//! leave blank tokens: a missing list drops its clause, a missing free-text
//! field falls back to generic wording.

use crate::documents::letter::{LetterRequest, LetterStructure};

impl LetterStructure {
    pub(super) fn paragraphs(&self, letter: &LetterRequest) -> [String; 4] {
        match self {
            LetterStructure::Standard => standard(letter),
            LetterStructure::StoryBased => story_based(letter),
            LetterStructure::AchievementFocused => achievement_focused(letter),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Standard
// ────────────────────────────────────────────────────────────────────────────

fn standard(l: &LetterRequest) -> [String; 4] {
    let phrases = l.career_phase.phrases();
    let position = l.position_title.trim();
    let company = l.company_name.trim();

    let first = format!(
        "I am writing to express my interest in the {position} position at {company}{listing}. \
         With {background}{skills}, I am confident in my ability to make valuable contributions to your team.",
        listing = optional(" that I saw advertised on ", &l.source_of_listing),
        background = phrases.background,
        skills = join_leading(&l.key_skills, 3, ", ")
            .map(|s| format!(" in {s}"))
            .unwrap_or_default(),
    );

    let goal = match goal_phrase(&l.short_term_goals) {
        Some(goal) => format!("My short-term career goal is to {goal}"),
        None => "My goal is to keep growing professionally".to_string(),
    };
    let horizon = match goal_phrase(&l.long_term_goals) {
        Some(goal) => format!(" while working toward {goal}"),
        None => " while developing my expertise".to_string(),
    };
    let company_line = match fragment(&l.company_interest) {
        Some(interest) => format!("I'm particularly drawn to {company} because {interest}."),
        None => format!(
            "I'm excited about the opportunity to join {company} and contribute to your innovative work."
        ),
    };
    let second = format!(
        "{lead}{goal}{horizon}. {company_line}",
        lead = lead_in(&l.role_alignment),
    );

    let values = lowercase_all(&l.work_values);
    let mut third = Vec::new();
    match (
        join_leading(&l.key_skills, 5, ", "),
        join_leading(&values, 3, ", "),
    ) {
        (Some(skills), Some(values)) => third.push(format!(
            "My key strengths include {skills}, and I value a work environment that promotes {values}."
        )),
        (Some(skills), None) => third.push(format!("My key strengths include {skills}.")),
        (None, Some(values)) => third.push(format!(
            "I value a work environment that promotes {values}."
        )),
        (None, None) => {}
    }
    if let Some(styles) = join_leading(&lowercase_all(&l.work_style), 3, ", ") {
        third.push(format!("My approach to work is {styles}."));
    }
    let achievements = l.relevant_achievements.trim();
    if !achievements.is_empty() {
        third.push(format!(
            "Some of my notable achievements include: {achievements}"
        ));
    }
    if third.is_empty() {
        third.push(
            "I bring a strong work ethic and a commitment to continuous learning.".to_string(),
        );
    }

    let fourth = format!(
        "I am excited about the possibility of bringing my {skills} to {company} and would welcome \
         the opportunity to discuss how my background aligns with your needs{follow_up}.",
        skills = join_leading(&l.key_skills, 2, " and ")
            .unwrap_or_else(|| "skills and experience".to_string()),
        follow_up = l
            .follow_up_timeframe()
            .map(|tf| format!(
                " in more detail. I will follow up in {tf} if I don't hear back before then"
            ))
            .unwrap_or_default(),
    );

    [first, second, third.join(" "), fourth]
}

// ────────────────────────────────────────────────────────────────────────────
// Story-based
// ────────────────────────────────────────────────────────────────────────────

fn story_based(l: &LetterRequest) -> [String; 4] {
    let phrases = l.career_phase.phrases();
    let position = l.position_title.trim();
    let company = l.company_name.trim();

    let first = format!(
        "I still remember the moment when I realized the impact of {skill} in {context}. \
         This pivotal experience has guided my career path and led me to apply for the \
         {position} role at {company}{listing}.",
        skill = l
            .key_skills
            .first()
            .map(String::as_str)
            .unwrap_or("effective work"),
        context = phrases.pivotal_context,
        listing = optional(", which I discovered on ", &l.source_of_listing),
    );

    let style = l
        .work_style
        .first()
        .map(|s| with_article(&s.to_lowercase()))
        .unwrap_or_else(|| "a dedicated".to_string());
    let mut second = format!(
        "Throughout my {journey}, I've cultivated {style} approach to challenges.",
        journey = phrases.journey,
    );
    if let Some(example) = l
        .relevant_achievements
        .lines()
        .map(strip_bullet)
        .find_map(fragment)
    {
        second.push_str(&format!(
            " One example that demonstrates my ability to deliver results is {example}."
        ));
    }
    second.push_str(&format!(
        " This experience reinforced my commitment to {value} and my desire to {desire}.",
        value = l
            .work_values
            .first()
            .map(|v| v.to_lowercase())
            .unwrap_or_else(|| "excellence".to_string()),
        desire = goal_phrase(&l.short_term_goals)
            .unwrap_or_else(|| "contribute meaningfully".to_string()),
    ));

    let third = format!(
        "What resonates with me about {company} is {interest}. {lead}I believe my background{skills} \
         positions me well to help your team {mission} while working toward my long-term goal to {goal}.",
        interest = fragment(&l.company_interest)
            .unwrap_or_else(|| "your reputation for innovation and excellence".to_string()),
        lead = lead_in(&l.role_alignment),
        skills = join_leading(&l.key_skills, 3, ", ")
            .map(|s| format!(" in {s}"))
            .unwrap_or_default(),
        mission = if position.to_lowercase().contains("manager") {
            "lead initiatives"
        } else {
            "tackle challenges"
        },
        goal = goal_phrase(&l.long_term_goals).unwrap_or_else(|| "grow professionally".to_string()),
    );

    let fourth = format!(
        "I would welcome the opportunity to discuss how my unique journey and skills{skills} can \
         benefit {company}{follow_up}.",
        skills = join_leading(&l.key_skills, 2, " and ")
            .map(|s| format!(" in {s}"))
            .unwrap_or_default(),
        follow_up = l
            .follow_up_timeframe()
            .map(|tf| format!(". I'll follow up in {tf} if I don't hear from you before then"))
            .unwrap_or_default(),
    );

    [first, second, third, fourth]
}

// ────────────────────────────────────────────────────────────────────────────
// Achievement-focused
// ────────────────────────────────────────────────────────────────────────────

fn achievement_focused(l: &LetterRequest) -> [String; 4] {
    let phrases = l.career_phase.phrases();
    let position = l.position_title.trim();
    let company = l.company_name.trim();

    let first = format!(
        "I am excited to apply for the {position} position at {company}{listing}. As {persona}{skills}, \
         I have consistently delivered measurable results throughout my {track}.",
        listing = optional(" that I discovered on ", &l.source_of_listing),
        persona = with_article(phrases.persona),
        skills = join_leading(&l.key_skills, 3, ", ")
            .map(|s| format!(" with expertise in {s}"))
            .unwrap_or_default(),
        track = phrases.track_record,
    );

    let bullets = achievement_bullets(l)
        .iter()
        .map(|point| format!("• {point}"))
        .collect::<Vec<_>>()
        .join("\n\n");
    let second =
        format!("Here are some specific achievements that demonstrate my qualifications:\n\n{bullets}");

    let third = format!(
        "I am particularly interested in joining {company} because {interest}. {lead}My approach to \
         work{styles} aligns with my goal to {goal} while working toward {horizon}.",
        interest = fragment(&l.company_interest)
            .unwrap_or_else(|| "of your reputation in the industry".to_string()),
        lead = lead_in(&l.role_alignment),
        styles = join_leading(&lowercase_all(&l.work_style), 2, " and ")
            .map(|s| format!(", which is {s},"))
            .unwrap_or_default(),
        goal = goal_phrase(&l.short_term_goals)
            .unwrap_or_else(|| "continue delivering excellent results".to_string()),
        horizon = goal_phrase(&l.long_term_goals)
            .unwrap_or_else(|| "greater professional impact".to_string()),
    );

    let fourth = format!(
        "I would welcome the opportunity to discuss how my achievement-oriented approach{skills} can \
         contribute to {company}'s success{follow_up}.",
        skills = join_leading(&l.key_skills, 2, " and ")
            .map(|s| format!(" and expertise in {s}"))
            .unwrap_or_default(),
        follow_up = l
            .follow_up_timeframe()
            .map(|tf| format!(". I will follow up in {tf} if I haven't heard back"))
            .unwrap_or_default(),
    );

    [first, second, third, fourth]
}

/// One bullet per non-empty achievement line, or two phase-specific
/// generated bullets when no achievements were supplied.
fn achievement_bullets(l: &LetterRequest) -> Vec<String> {
    let supplied: Vec<String> = l
        .relevant_achievements
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if !supplied.is_empty() {
        return supplied;
    }
    l.career_phase
        .generic_achievements(&l.key_skills, &lowercase_all(&l.work_values))
        .to_vec()
}

// ────────────────────────────────────────────────────────────────────────────
// Phrase helpers
// ────────────────────────────────────────────────────────────────────────────

fn join_leading(items: &[String], n: usize, sep: &str) -> Option<String> {
    let leading = &items[..items.len().min(n)];
    (!leading.is_empty()).then(|| leading.join(sep))
}

/// `prefix + value` when value is non-blank.
fn optional(prefix: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}

/// Free text embedded mid-sentence: trimmed, trailing sentence punctuation
/// removed. `None` when blank.
fn fragment(text: &str) -> Option<String> {
    let text = text.trim().trim_end_matches(['.', '!', '?', ';', ',']).trim_end();
    (!text.is_empty()).then(|| text.to_string())
}

/// Goals are embedded after "to ..." / "toward ...", so they read lowercase.
fn goal_phrase(text: &str) -> Option<String> {
    fragment(text).map(|s| s.to_lowercase())
}

/// A free-text sentence placed before generated prose, with a trailing space.
fn lead_in(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    if text.ends_with(['.', '!', '?']) {
        format!("{text} ")
    } else {
        format!("{text}. ")
    }
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

fn with_article(word: &str) -> String {
    let article = match word.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    };
    format!("{article} {word}")
}

fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['•', '-', '*'])
        .trim_start()
}
