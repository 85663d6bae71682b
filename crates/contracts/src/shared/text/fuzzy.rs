//! Suggestion matcher for the search inputs.
//!
//! Candidates are ranked in three tiers: prefix match, match at the start of a
//! word, plain substring. Inside a tier shorter candidates win, then earlier
//! match positions. Non-matching candidates are dropped.

use super::fold_search;
use std::collections::HashSet;

const TIER_PREFIX: i64 = 3;
const TIER_WORD: i64 = 2;
const TIER_SUBSTRING: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyHit {
    pub text: String,
    pub score: i64,
}

/// Hit with the matched `[start, end)` char ranges of `text` for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyDetailed {
    pub text: String,
    pub score: i64,
    pub ranges: Vec<(usize, usize)>,
}

struct Scored {
    score: i64,
    /// char index of the match inside the folded candidate
    start: usize,
}

fn score_candidate(folded: &str, query: &str) -> Option<Scored> {
    let byte_idx = folded.find(query)?;
    let len = folded.chars().count() as i64;
    let first = folded[..byte_idx].chars().count();

    let tier = if byte_idx == 0 {
        TIER_PREFIX
    } else if word_start_match(folded, query) {
        TIER_WORD
    } else {
        TIER_SUBSTRING
    };
    let position = if tier == TIER_SUBSTRING { first as i64 } else { 0 };
    let score = tier * 1_000_000 - len.min(999) * 1_000 - position.min(999);
    Some(Scored {
        score,
        start: first,
    })
}

fn word_start_match(folded: &str, query: &str) -> bool {
    folded.match_indices(query).any(|(idx, _)| {
        idx == 0
            || folded[..idx]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
    })
}

fn rank<'a, I>(query: &str, items: I, limit: usize) -> Vec<(&'a str, Scored)>
where
    I: Iterator<Item = &'a str>,
{
    let mut scored: Vec<(&str, Scored)> = items
        .filter_map(|text| score_candidate(&fold_search(text), query).map(|s| (text, s)))
        .collect();
    // stable: equal scores keep input order
    scored.sort_by(|a, b| b.1.score.cmp(&a.1.score));
    scored.truncate(limit);
    scored
}

/// Ranks `items` against `query`. An empty query returns the first `limit`
/// items with a zero score.
pub fn fuzzy<S: AsRef<str>>(query: &str, items: &[S], limit: usize) -> Vec<FuzzyHit> {
    let q = fold_search(query).trim().to_string();
    if q.is_empty() {
        return items
            .iter()
            .take(limit)
            .map(|t| FuzzyHit {
                text: t.as_ref().to_string(),
                score: 0,
            })
            .collect();
    }
    rank(&q, items.iter().map(|t| t.as_ref()), limit)
        .into_iter()
        .map(|(text, s)| FuzzyHit {
            text: text.to_string(),
            score: s.score,
        })
        .collect()
}

/// Like [`fuzzy`], deduplicating `items` and reporting the match range.
///
/// The range is computed on the folded text and clamped to the original; for
/// Turkish input both have the same length.
pub fn fuzzy_detailed<S: AsRef<str>>(query: &str, items: &[S], limit: usize) -> Vec<FuzzyDetailed> {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = items
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| seen.insert(*t))
        .collect();

    let q = fold_search(query).trim().to_string();
    if q.is_empty() {
        return unique
            .into_iter()
            .take(limit)
            .map(|t| FuzzyDetailed {
                text: t.to_string(),
                score: 0,
                ranges: Vec::new(),
            })
            .collect();
    }

    let q_len = q.chars().count();
    rank(&q, unique.into_iter(), limit)
        .into_iter()
        .map(|(text, s)| {
            let total = text.chars().count();
            let start = s.start.min(total);
            let end = (s.start + q_len).min(total);
            FuzzyDetailed {
                text: text.to_string(),
                score: s.score,
                ranges: if start < end { vec![(start, end)] } else { Vec::new() },
            }
        })
        .collect()
}

/// Autocomplete suggestions: nothing below `min_chars`, an exact (folded)
/// match first, then the ranked hits.
pub fn suggest<S: AsRef<str>>(
    query: &str,
    hints: &[S],
    min_chars: usize,
    max_items: usize,
) -> Vec<FuzzyDetailed> {
    let trimmed = query.trim();
    if trimmed.chars().count() < min_chars.max(1) {
        return Vec::new();
    }
    let mut hits = fuzzy_detailed(trimmed, hints, max_items);
    let key = fold_search(trimmed);
    if let Some(pos) = hits.iter().position(|h| fold_search(h.text.trim()) == key) {
        let exact = hits.remove(pos);
        hits.insert(0, exact);
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(hits: &[FuzzyHit]) -> Vec<&str> {
        hits.iter().map(|h| h.text.as_str()).collect()
    }

    #[test]
    fn test_prefix_match_excludes_non_matches() {
        let hits = fuzzy("ist", &["İstanbul", "Bursa", "İzmir"], 10);
        assert_eq!(texts(&hits), vec!["İstanbul"]);
    }

    #[test]
    fn test_tier_order() {
        let items = ["Hasta Güvenliği", "Güvenlik Kültürü", "Bilgi güvenliği"];
        let hits = fuzzy("güven", &items, 10);
        assert_eq!(
            texts(&hits),
            vec!["Güvenlik Kültürü", "Hasta Güvenliği", "Bilgi güvenliği"]
        );
        let hits = fuzzy("venl", &items, 10);
        // substring tier: earlier position wins after length
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|h| h.score < 2_000_000));
    }

    #[test]
    fn test_shorter_candidate_wins_within_tier() {
        let hits = fuzzy("kal", &["Kalite Yönetimi", "Kalite"], 10);
        assert_eq!(texts(&hits), vec!["Kalite", "Kalite Yönetimi"]);
    }

    #[test]
    fn test_earlier_position_wins_in_substring_tier() {
        let hits = fuzzy("ab", &["xxab", "xabx"], 10);
        assert_eq!(texts(&hits), vec!["xabx", "xxab"]);
    }

    #[test]
    fn test_empty_query_returns_head() {
        let hits = fuzzy("  ", &["a", "b", "c"], 2);
        assert_eq!(texts(&hits), vec!["a", "b"]);
        assert!(hits.iter().all(|h| h.score == 0));
    }

    #[test]
    fn test_limit_and_stability() {
        let hits = fuzzy("a", &["ab", "ac", "ad"], 2);
        assert_eq!(texts(&hits), vec!["ab", "ac"]);
    }

    #[test]
    fn test_detailed_ranges_and_dedup() {
        let hits = fuzzy_detailed("şık", &["Işık", "Işık", "Aydınlık"], 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ranges, vec![(1, 4)]);

        let hits = fuzzy_detailed("İZ", &["İzmir"], 10);
        assert_eq!(hits[0].ranges, vec![(0, 2)]);
    }

    #[test]
    fn test_suggest_moves_exact_match_first() {
        let hints = ["Kalite Birimi", "Kalite"];
        let out = suggest("kalite", &hints, 1, 30);
        assert_eq!(out[0].text, "Kalite");

        let hints = ["Acil Servis", "Acil", "Acil Durum"];
        let out = suggest("ACİL", &hints, 1, 30);
        assert_eq!(out[0].text, "Acil");
        assert!(suggest("a", &hints, 2, 30).is_empty());
        assert!(suggest("   ", &hints, 1, 30).is_empty());
    }
}
