use sha1::{Digest, Sha1};

const PREFIX_LEN: usize = 5;
const SUFFIX_LEN: usize = 35;

/// Uppercase hex SHA-1 of a password, split for a range query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRange {
    pub prefix: String,
    pub suffix: String,
}

impl HashRange {
    pub fn of(password: &str) -> Self {
        let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// Scans a `SUFFIX:COUNT` body for `suffix`.
///
/// Returns `Ok(None)` when every record parsed and none matched. Any record
/// that is not a 35-hex-digit suffix followed by `:` is an error, as is an
/// unparsable count on the matching record. A real range is never empty, so a
/// body without records is an error too.
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, String> {
    let mut records = 0usize;
    for (index, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (hash, count) = line
            .split_once(':')
            .ok_or_else(|| format!("line {} has no ':' separator", index + 1))?;
        let hash = hash.trim();
        if hash.len() != SUFFIX_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("line {} is not a hash suffix", index + 1));
        }
        records += 1;

        if hash.eq_ignore_ascii_case(suffix) {
            let count = count
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("bad count on line {}: {}", index + 1, e))?;
            return Ok(Some(count));
        }
    }

    if records == 0 {
        return Err("empty range response".to_string());
    }
    Ok(None)
}
