//! Dictionary section - detects common words embedded in the password.

pub const DICTIONARY_WORDS: &[&str] = &[
    "password", "admin", "user", "login", "welcome", "hello", "world",
    "computer", "internet", "email", "website", "system", "database",
    "server", "network", "security", "access", "account", "profile",
];

/// Returns the first dictionary word the password contains, case-insensitively.
pub fn dictionary_section(password: &str) -> Option<&'static str> {
    let lower = password.to_lowercase();
    DICTIONARY_WORDS.iter().copied().find(|word| lower.contains(word))
}
