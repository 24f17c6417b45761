//! Pattern analysis section - detects repetitive, sequential and keyboard patterns.

/// Keyboard rows and common sequences, matched forwards and backwards.
pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty",
    "qwertyuiop",
    "asdf",
    "asdfghjkl",
    "zxcv",
    "zxcvbnm",
    "123456",
    "1234567890",
    "abcdef",
    "qazwsx",
    "wsxedc",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Same character three or more times in a row.
    Repeated,
    /// Three characters whose code points ascend by exactly one.
    Sequential,
    /// Contains a keyboard or sequence pattern, either direction.
    Keyboard,
}

/// Analyzes password for the first problematic pattern, if any.
///
/// Checks run in order: repeats, ascending runs, keyboard patterns.
pub fn pattern_section(password: &str) -> Option<PatternKind> {
    let chars: Vec<char> = password.chars().collect();

    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return Some(PatternKind::Repeated);
    }

    let ascending = chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as u32, w[1] as u32, w[2] as u32);
        b == a + 1 && c == b + 1
    });
    if ascending {
        return Some(PatternKind::Sequential);
    }

    let lower = password.to_lowercase();
    let keyboard = KEYBOARD_PATTERNS.iter().any(|pattern| {
        let reversed: String = pattern.chars().rev().collect();
        lower.contains(pattern) || lower.contains(&reversed)
    });
    if keyboard {
        return Some(PatternKind::Keyboard);
    }

    None
}
