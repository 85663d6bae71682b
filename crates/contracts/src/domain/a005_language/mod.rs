pub mod cache;
pub mod dto;

pub use cache::{LanguageCache, LANGUAGE_CACHE_TTL_MINUTES};
pub use dto::{sort_languages, LanguageOption};
