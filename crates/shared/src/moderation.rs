use crate::constants::MAX_MESSAGE_LENGTH;

/// Terms that fail moderation. Matching is case-insensitive and ignores
/// word boundaries, so "SpamBot" is flagged by "spam".
pub const BANNED_TERMS: &[&str] = &["spam", "scam", "phishing", "malware"];

fn contains_term(content: &str, term: &str) -> bool {
    content
        .as_bytes()
        .windows(term.len())
        .any(|w| w.eq_ignore_ascii_case(term.as_bytes()))
}

/// Banned terms present in the content, in list order.
pub fn flagged_terms(content: &str) -> Vec<&'static str> {
    BANNED_TERMS
        .iter()
        .copied()
        .filter(|term| contains_term(content, term))
        .collect()
}

/// Hard gate applied before a message is persisted. Pure function of the
/// text: non-blank, within the length limit, and free of banned terms.
pub fn check_content(content: &str) -> bool {
    !content.trim().is_empty()
        && content.len() <= MAX_MESSAGE_LENGTH
        && flagged_terms(content).is_empty()
}

fn mask_term(input: &str, term: &str) -> String {
    let len = term.len();
    let mut out = String::with_capacity(input.len());
    let mut skip_until = 0;
    for (i, ch) in input.char_indices() {
        if i < skip_until {
            continue;
        }
        // Banned terms are ASCII, so a byte-level match always ends on a
        // char boundary.
        if i + len <= input.len()
            && input.as_bytes()[i..i + len].eq_ignore_ascii_case(term.as_bytes())
        {
            out.push_str(&"*".repeat(len));
            skip_until = i + len;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Best-effort cleanup: returns a copy with every banned-term occurrence
/// replaced by `*` of the same length. Independent of [`check_content`].
pub fn filter_message(message: &str) -> String {
    BANNED_TERMS
        .iter()
        .fold(message.to_string(), |acc, term| mask_term(&acc, term))
}

pub fn severity(flagged_count: usize) -> &'static str {
    match flagged_count {
        0 => "low",
        1 => "medium",
        _ => "high",
    }
}

pub fn suggested_action(content: &str) -> &'static str {
    let flagged = flagged_terms(content);
    if flagged.is_empty() && check_content(content) {
        "approve"
    } else if flagged.len() == 1 {
        "review"
    } else {
        "reject"
    }
}
