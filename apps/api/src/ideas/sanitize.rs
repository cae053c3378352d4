//! Free-text cleanup applied to everything the generator writes.
//!
//! Order: strip emoji → collapse whitespace → remove banned phrases (repeated
//! until nothing changes) → keep at most three sentences → cap length.

/// Hype vocabulary removed from every free-text field (matched case-insensitively).
pub const BANNED_PHRASES: &[&str] = &[
    "guaranteed",
    "effortless",
    "overnight",
    "get rich",
    "no risk",
    "passive income",
    "100% success",
    "secret hack",
    "viral overnight",
];

pub const MAX_SENTENCES: usize = 3;

const SENTENCE_BREAK: &str = ". ";

/// Returns true for emoji, pictographs, and the joiners/selectors that glue them together.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // mahjong .. pictographs extended-a, incl. regional indicators
            | 0x2600..=0x27BF   // misc symbols, dingbats
            | 0x2B00..=0x2BFF   // arrows, stars, squares
            | 0x231A..=0x231B
            | 0x23E9..=0x23FA
            | 0xFE00..=0xFE0F   // variation selectors
            | 0x200D            // zero width joiner
            | 0x20E3            // keycap
            | 0xE0020..=0xE007F // tag sequences
    )
}

pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|&c| !is_emoji(c)).collect()
}

/// Removes every occurrence of every banned phrase, ignoring ASCII case.
pub fn remove_banned_phrases(text: &str) -> String {
    let mut out = text.to_string();
    // Longer phrases first so "viral overnight" goes before "overnight".
    let mut phrases: Vec<&str> = BANNED_PHRASES.to_vec();
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    for phrase in phrases {
        out = remove_phrase(&out, phrase);
    }
    out
}

/// Phrases are ASCII, so a case-insensitive byte match can only start and end
/// on char boundaries.
fn remove_phrase(text: &str, phrase: &str) -> String {
    let needle = phrase.as_bytes();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes.len() - i >= needle.len()
            && bytes[i..i + needle.len()].eq_ignore_ascii_case(needle)
        {
            i += needle.len();
            continue;
        }
        let ch_len = text[i..].chars().next().map(char::len_utf8).unwrap_or(1);
        out.push_str(&text[i..i + ch_len]);
        i += ch_len;
    }

    out
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps at most `max` sentences, splitting on ". ".
/// A truncated result always ends in terminal punctuation.
pub fn truncate_sentences(text: &str, max: usize) -> String {
    let sentences: Vec<&str> = text.split(SENTENCE_BREAK).collect();
    if sentences.len() <= max {
        return text.to_string();
    }

    let mut kept = sentences[..max].join(SENTENCE_BREAK);
    if !kept.ends_with(['.', '!', '?']) {
        kept.push('.');
    }
    kept
}

/// Caps `text` at `max` characters, trimming any trailing space the cut leaves.
pub fn cap_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect::<String>().trim_end().to_string()
}

/// Removes banned phrases until none is left. A removal can join the text on
/// either side into a new phrase, so each pass re-collapses and checks again.
/// Every pass that changes the text shortens it, so the loop terminates.
fn scrub_banned_phrases(text: &str) -> String {
    let mut text = collapse_whitespace(text);
    loop {
        let cleaned = collapse_whitespace(&remove_banned_phrases(&text));
        if cleaned == text {
            return text;
        }
        text = cleaned;
    }
}

/// Full cleanup for one free-text field.
pub fn sanitize_text(text: &str, max_chars: usize) -> String {
    let text = strip_emoji(text);
    let text = scrub_banned_phrases(&text);
    let text = truncate_sentences(&text, MAX_SENTENCES);
    cap_chars(&text, max_chars)
}
