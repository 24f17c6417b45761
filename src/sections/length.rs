//! Length section - awards points by password length.

/// Points for a password of `length` characters, including the 20+ bonus.
pub fn length_section(length: usize) -> u8 {
    let base = match length {
        16.. => 30,
        12..=15 => 25,
        8..=11 => 15,
        6..=7 => 10,
        _ => 0,
    };
    let bonus = if length >= 20 { 10 } else { 0 };
    base + bonus
}
