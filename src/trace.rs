use std::io::Read;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One plain decimal address per line; anything else is trace noise
    static ref ADDRESS_LINE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Reads a memory trace: one decimal address per line
///
/// Lines that are not plain decimal numbers (blanks, comments, anything a
/// trace generator left behind) are skipped rather than treated as errors.
/// The numeric base is fixed here, not in the core; the caches make no
/// assumption about how addresses were encoded
pub fn read_addresses(reader: impl Read) -> Result<Vec<u64>, String> {
    let text = read_to_string(reader)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| ADDRESS_LINE.is_match(line))
        .filter_map(|line| line.parse().ok())
        .collect())
}

/// Reads a page trace: one opaque key per line, typically a URL
///
/// Keys are trimmed and blank lines are skipped; no other structure is
/// assumed
pub fn read_keys(reader: impl Read) -> Result<Vec<String>, String> {
    let text = read_to_string(reader)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn read_to_string(mut reader: impl Read) -> Result<String, String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| format!("Couldn't read the trace: {e}"))?;
    Ok(text)
}
