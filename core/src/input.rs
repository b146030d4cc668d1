/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use email_address::EmailAddress;
use rand::Rng;
use std::str::FromStr;
use url::Url;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Usernames follow the usual account rules: letters, digits and `@.+-_`.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty.".to_string());
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username cannot exceed {} characters.",
            MAX_USERNAME_LENGTH
        ));
    }

    if username
        .chars()
        .any(|c| !c.is_alphanumeric() && !"@.+-_".contains(c))
    {
        return Err(
            "Username may only contain letters, digits and @/./+/-/_ characters.".to_string(),
        );
    }

    Ok(())
}

pub fn check_max_len(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!(
            "Ensure {} has no more than {} characters.",
            field, max
        ));
    }

    Ok(())
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    check_max_len(field, value, MAX_URL_LENGTH)?;

    let url = Url::parse(value).map_err(|_| format!("Enter a valid URL for {}.", field))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(format!("Enter a valid URL for {}.", field));
    }

    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> Result<(), String> {
    check_max_len(field, value, MAX_EMAIL_LENGTH)?;

    if EmailAddress::is_valid(value) {
        Ok(())
    } else {
        Err(format!("Enter a valid email address for {}.", field))
    }
}

pub fn validate_hex_color(value: &str) -> Result<(), String> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        Err("Color must be a hex value like #6366F1.".to_string())
    }
}

pub fn parse_due_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Enter a valid date for due_date (YYYY-MM-DD).".to_string())
}

/// Parses a stored enum code, naming the field on failure.
pub fn parse_choice<T: FromStr>(field: &str, value: &str) -> Result<T, String> {
    T::from_str(value).map_err(|_| format!("`{}` is not a valid choice for {}.", value, field))
}

/// HTML checkbox semantics: only an explicit on/true/1 counts as checked.
pub fn parse_checkbox(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("on") | Some("true") | Some("1")
    )
}

/// Mirrors truthiness of decoded JSON: absent, null, "", false, 0, [] and {} are falsy.
pub fn is_truthy(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(serde_json::Value::Array(a)) => !a.is_empty(),
        Some(serde_json::Value::Object(o)) => !o.is_empty(),
    }
}

/// Consent flag coercion: any truthy value except a string spelling out a negative.
pub fn is_affirmative(value: Option<&serde_json::Value>) -> bool {
    match value {
        Some(serde_json::Value::String(s)) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "" | "false" | "f" | "0" | "off" | "no" | "n"
        ),
        other => is_truthy(other),
    }
}

/// Builds a `LIKE` pattern matching `query` as a literal substring, escaped with `\`.
/// Case is left to the database so both operands are folded the same way.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');

    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

pub fn generate_request_code() -> String {
    let mut rng = rand::rng();
    (0..REQUEST_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..REQUEST_CODE_ALPHABET.len());
            REQUEST_CODE_ALPHABET[idx] as char
        })
        .collect()
}

pub fn normalize_request_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn is_valid_request_code(code: &str) -> bool {
    code.len() == REQUEST_CODE_LENGTH && code.bytes().all(|b| REQUEST_CODE_ALPHABET.contains(&b))
}
