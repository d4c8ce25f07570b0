//! Format - Formatting Utilities

use chrono::{DateTime, Local, TimeZone};

/// Format epoch seconds as local `YYYY-MM-DD H:MM:SS`
///
/// The hour is not zero-padded, matching the sale cards.
pub fn format_epoch_local(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(dt) => format_local_datetime(&dt),
        None => epoch_secs.to_string(),
    }
}

/// Format a local datetime for display
pub fn format_local_datetime(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %-H:%M:%S").to_string()
}

/// Keep the first and last `keep` chars of a hash: `0xabcdef...23456789`
pub fn abbreviate_hash(hash: &str, keep: usize) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= keep * 2 {
        return hash.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{head}...{tail}")
}

/// Format an ETH amount with six decimals
pub fn format_eth(amount: f64) -> String {
    format!("{amount:.6}")
}
