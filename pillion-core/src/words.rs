//! Three-word-address query classification.
//!
//! A three-word address is a vendor identifier of the shape
//! `word.word.word`, optionally written with a leading `///` prefix
//! (`///chilly.bunches.grumble`). The helpers here only perform loose
//! shape checks for routing a query to the right provider; the word
//! grid itself is entirely the vendor's concern.

/// Strip the conventional `///` prefix from a three-word address.
///
/// # Examples
/// ```
/// use pillion_core::words;
///
/// assert_eq!(words::normalise("///a.b.c"), "a.b.c");
/// assert_eq!(words::normalise("a.b.c"), "a.b.c");
/// ```
#[must_use]
pub fn normalise(words: &str) -> &str {
    words.strip_prefix("///").unwrap_or(words)
}

/// Loose test for whether a query is being typed as a three-word
/// address.
///
/// Deliberately permissive: a `///` prefix or any dot qualifies, so a
/// partially typed address (`chilly.bun`) is routed to the three-word
/// provider early. Queries that merely contain a dot (`St. Mary`) also
/// pass, but the provider returns nothing for them and the aggregator
/// falls through to general place search.
#[must_use]
pub fn looks_like_three_words(query: &str) -> bool {
    query.starts_with("///") || query.contains('.')
}

/// True once the third word of a three-word address has started.
///
/// The what3words autosuggest contract only returns suggestions once
/// the query has the shape `letters.letters.l…`; before that the
/// adapter must stay silent.
///
/// # Examples
/// ```
/// use pillion_core::words;
///
/// assert!(words::third_word_started("chilly.bunches.g"));
/// assert!(!words::third_word_started("chilly.bunches."));
/// assert!(!words::third_word_started("chilly.bun"));
/// ```
#[must_use]
pub fn third_word_started(query: &str) -> bool {
    let parts: Vec<&str> = normalise(query).split('.').collect();
    parts.len() == 3 && parts.iter().all(|part| is_alpha_word(part))
}

/// True when every typed word is a prefix of the corresponding word in
/// `candidate`.
///
/// Used to filter the mock three-word table against a partially typed
/// query: `chilly.bun.g` matches `chilly.bunches.grumble`.
#[must_use]
pub fn matches_word_prefixes(candidate: &str, query: &str) -> bool {
    let typed: Vec<&str> = normalise(query).split('.').collect();
    let words: Vec<&str> = candidate.split('.').collect();
    if typed.is_empty() || typed.len() > words.len() {
        return false;
    }
    typed
        .iter()
        .zip(&words)
        .all(|(part, word)| !part.is_empty() && word.starts_with(part))
}

fn is_alpha_word(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic())
}
