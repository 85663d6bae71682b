//! Turkish-aware text folding used for search, language matching and sorting.

pub mod fuzzy;

pub use fuzzy::{fuzzy, fuzzy_detailed, suggest, FuzzyDetailed, FuzzyHit};

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Search key: NFKD, combining marks removed, Turkish `I/İ/ı` folded to `i`,
/// the rest lower-cased.
///
/// Every Turkish letter folds to exactly one character, so char positions in
/// the folded string line up with the original for Turkish text.
pub fn fold_search(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfkd().filter(|c| !is_combining_mark(*c)) {
        match ch {
            'I' | 'ı' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Equality key for language names ("Türkçe", "TÜRKÇE", " turkce ").
pub fn normalize_lang(s: &str) -> String {
    let lowered = turkish_lowercase(s.trim());
    lowered
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| if c == 'ı' { 'i' } else { c })
        .collect()
}

/// Lower-cases with Turkish rules (`I` → `ı`, `İ` → `i`).
pub fn turkish_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

const TR_ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvwxyz";

fn collation_key(ch: char) -> (u32, u32) {
    let lower = match ch {
        'I' => 'ı',
        'İ' => 'i',
        _ => ch.to_lowercase().next().unwrap_or(ch),
    };
    match TR_ALPHABET.chars().position(|c| c == lower) {
        Some(pos) => (1, pos as u32),
        None if lower.is_ascii_digit() || lower.is_whitespace() => (0, lower as u32),
        None => (2, lower as u32),
    }
}

/// Orders strings by the Turkish alphabet, case-insensitively first.
pub fn turkish_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(collation_key)
        .cmp(b.chars().map(collation_key));
    primary.then_with(|| a.cmp(b))
}
