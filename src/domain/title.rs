// src/domain/title.rs

pub const UNKNOWN: &str = "Unknown";

/// Splits a listing title into `(make, model)`.
///
/// The make is the first token. The model is the next two tokens when the
/// title has at least three, otherwise the second token alone.
pub fn parse_title(title: &str) -> (String, String) {
    let parts: Vec<&str> = title.split_whitespace().collect();

    let make = parts.first().copied().unwrap_or(UNKNOWN).to_string();
    let model = match parts.len() {
        0 | 1 => UNKNOWN.to_string(),
        2 => parts[1].to_string(),
        _ => format!("{} {}", parts[1], parts[2]),
    };

    (make, model)
}
