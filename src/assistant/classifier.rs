use super::message::Severity;
use super::responses;

/// Which keyword rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Emergency,
    Pain,
    Fever,
    MythCheck,
    CoughCold,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub severity: Severity,
    pub category: Category,
}

struct Rule {
    category: Category,
    severity: Severity,
    matches: fn(&str) -> bool,
    body: fn() -> String,
}

const EMERGENCY_WORDS: &[&str] = &["sos", "😭", "emergency", "help me"];
const PAIN_WORDS: &[&str] = &["pain", "दर्द", "ache", "hurt"];
// "hot" also hits "photo", "shot" and friends; matching is substring based
const FEVER_WORDS: &[&str] = &["fever", "बुखार", "temperature", "hot"];
const REMEDY_WORDS: &[&str] = &["garlic"];
const CURE_WORDS: &[&str] = &["cure", "treat"];
const COUGH_WORDS: &[&str] = &["cough", "खांसी", "cold"];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|&word| text.contains(word))
}

/// Evaluated top to bottom; the first match wins.
const RULES: &[Rule] = &[
    Rule {
        category: Category::Emergency,
        severity: Severity::Emergency,
        matches: |m| contains_any(m, EMERGENCY_WORDS),
        body: responses::emergency,
    },
    Rule {
        category: Category::Pain,
        severity: Severity::Warning,
        matches: |m| contains_any(m, PAIN_WORDS),
        body: responses::pain,
    },
    Rule {
        category: Category::Fever,
        severity: Severity::Normal,
        matches: |m| contains_any(m, FEVER_WORDS),
        body: responses::fever,
    },
    Rule {
        category: Category::MythCheck,
        severity: Severity::Warning,
        matches: |m| contains_any(m, REMEDY_WORDS) && contains_any(m, CURE_WORDS),
        body: responses::garlic_myth,
    },
    Rule {
        category: Category::CoughCold,
        severity: Severity::Normal,
        matches: |m| contains_any(m, COUGH_WORDS),
        body: responses::cough_cold,
    },
];

/// Maps raw user text to a canned reply.
pub fn classify(user_message: &str) -> Reply {
    let msg = user_message.to_lowercase();

    let (category, severity, body) = RULES
        .iter()
        .find(|rule| (rule.matches)(&msg))
        .map(|rule| (rule.category, rule.severity, (rule.body)()))
        .unwrap_or_else(|| (Category::General, Severity::Normal, responses::general(user_message)));

    Reply {
        text: responses::with_disclaimer(&body),
        severity,
        category,
    }
}
