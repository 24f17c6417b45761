//! Common section - checks if password is a known-weak password.

use crate::common::CommonPasswordSet;

/// Returns `true` if the password (case-insensitively) is in `common`.
pub fn common_section(password: &str, common: &CommonPasswordSet) -> bool {
    common.contains(password)
}
