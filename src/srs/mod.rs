pub mod selector;
pub mod sm2;

pub use selector::{choose_language, rank_candidates, weighted_random_select, LanguageWeight};
pub use sm2::advance;
