use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_TOPIC: &str = "Programming Concepts";

// PRIORITY: first pattern with a non-empty capture wins.
// Captures run up to the next sentence terminator.
static TOPIC_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)about\s+([^.!?]+)").expect("valid 'about' pattern"),
        Regex::new(r"(?i)for\s+([^.!?]+)").expect("valid 'for' pattern"),
        Regex::new(r"(?i)topic[:\s]+([^.!?]+)").expect("valid 'topic' pattern"),
    ]
});

/// Pull a short topic phrase out of a free-text prompt.
///
/// Never fails and never returns an empty string.
pub fn extract_topic(prompt: &str) -> String {
    for pattern in TOPIC_PATTERNS.iter() {
        let captured = pattern
            .captures(prompt)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|topic| !topic.is_empty());

        if let Some(topic) = captured {
            return topic.to_string();
        }
    }

    let leading_words = prompt.split_whitespace().take(3).collect::<Vec<_>>().join(" ");
    if leading_words.is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        leading_words
    }
}
