/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use gloex_core::input::*;
use serde_json::json;

#[test]
fn test_port_in_range() {
    assert_eq!(port_in_range("8080").unwrap(), 8080);
    assert_eq!(port_in_range("1").unwrap(), 1);
    assert_eq!(port_in_range("65535").unwrap(), 65535);

    assert_eq!(
        port_in_range("0").unwrap_err(),
        "port not in range 1-65535"
    );
    assert_eq!(
        port_in_range("65536").unwrap_err(),
        "port not in range 1-65535"
    );
    assert_eq!(
        port_in_range("abc").unwrap_err(),
        "`abc` is not a port number"
    );
}

#[test]
fn test_greater_than_zero() {
    assert_eq!(greater_than_zero::<i64>("336").unwrap(), 336);
    assert_eq!(greater_than_zero::<usize>("1").unwrap(), 1);
    assert_eq!(
        greater_than_zero::<i64>("0").unwrap_err(),
        "`0` is not larger than 0"
    );
    assert_eq!(
        greater_than_zero::<i64>("-4").unwrap_err(),
        "`-4` is not larger than 0"
    );
    assert!(greater_than_zero::<usize>("many").is_err());
}

#[test]
fn test_validate_username() {
    assert!(validate_username("alice").is_ok());
    assert!(validate_username("alice.smith+dev@home_1-x").is_ok());
    assert!(validate_username("").is_err());
    assert!(validate_username("with space").is_err());
    assert!(validate_username("semi;colon").is_err());
    assert!(validate_username(&"a".repeat(151)).is_err());
}

#[test]
fn test_check_max_len_counts_characters() {
    assert!(check_max_len("title", "abc", 3).is_ok());
    assert!(check_max_len("title", "äöü", 3).is_ok());
    assert_eq!(
        check_max_len("title", "abcd", 3).unwrap_err(),
        "Ensure title has no more than 3 characters."
    );
}

#[test]
fn test_validate_http_url() {
    assert!(validate_http_url("project_url", "https://example.com").is_ok());
    assert!(validate_http_url("project_url", "http://example.com/a?b=c").is_ok());

    assert!(validate_http_url("project_url", "example.com").is_err());
    assert!(validate_http_url("project_url", "ftp://example.com").is_err());
    assert!(validate_http_url("project_url", "javascript:alert(1)").is_err());
    assert!(validate_http_url("project_url", "file:///etc/passwd").is_err());

    let long = format!("https://example.com/{}", "a".repeat(500));
    assert!(validate_http_url("project_url", &long).is_err());
}

#[test]
fn test_validate_email() {
    assert!(validate_email("primary_email", "client@example.com").is_ok());
    assert_eq!(
        validate_email("primary_email", "not-an-email").unwrap_err(),
        "Enter a valid email address for primary_email."
    );
}

#[test]
fn test_validate_hex_color() {
    assert!(validate_hex_color("#6366F1").is_ok());
    assert!(validate_hex_color("#abcdef").is_ok());
    assert!(validate_hex_color("6366F1").is_err());
    assert!(validate_hex_color("#6366F").is_err());
    assert!(validate_hex_color("#GGGGGG").is_err());
}

#[test]
fn test_parse_due_date() {
    let date = parse_due_date("2026-03-01").unwrap();
    assert_eq!(date.to_string(), "2026-03-01");
    assert!(parse_due_date("01/03/2026").is_err());
    assert!(parse_due_date("2026-02-30").is_err());
}

#[test]
fn test_parse_choice() {
    use entity::service_request::BudgetRange;

    let budget: BudgetRange = parse_choice("budget_range", "20k_50k").unwrap();
    assert_eq!(budget, BudgetRange::From20kTo50k);

    let err = parse_choice::<BudgetRange>("budget_range", "lots").unwrap_err();
    assert_eq!(err, "`lots` is not a valid choice for budget_range.");
}

#[test]
fn test_parse_checkbox() {
    assert!(parse_checkbox(Some("on")));
    assert!(parse_checkbox(Some("true")));
    assert!(parse_checkbox(Some("TRUE")));
    assert!(parse_checkbox(Some("1")));
    assert!(!parse_checkbox(Some("off")));
    assert!(!parse_checkbox(Some("")));
    assert!(!parse_checkbox(None));
}

#[test]
fn test_is_truthy() {
    assert!(!is_truthy(None));
    assert!(!is_truthy(Some(&json!(null))));
    assert!(!is_truthy(Some(&json!(""))));
    assert!(!is_truthy(Some(&json!(false))));
    assert!(!is_truthy(Some(&json!(0))));
    assert!(!is_truthy(Some(&json!(0.0))));
    assert!(!is_truthy(Some(&json!([]))));

    assert!(is_truthy(Some(&json!("x"))));
    assert!(is_truthy(Some(&json!(true))));
    assert!(is_truthy(Some(&json!(3))));
    assert!(is_truthy(Some(&json!({"a": 1}))));
}

#[test]
fn test_like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("Rust"), "%Rust%");
    assert_eq!(like_pattern("École"), "%École%");
    assert_eq!(like_pattern("100%"), "%100\\%%");
    assert_eq!(like_pattern("a_b"), "%a\\_b%");
    assert_eq!(like_pattern("c:\\dir"), "%c:\\\\dir%");
}

#[test]
fn test_generate_request_code() {
    for _ in 0..200 {
        let code = generate_request_code();
        assert_eq!(code.len(), 8);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
        assert!(is_valid_request_code(&code));
    }
}

#[test]
fn test_normalize_request_code() {
    assert_eq!(normalize_request_code("  ab12cd34 "), "AB12CD34");
    assert_eq!(normalize_request_code(""), "");
}

#[test]
fn test_is_valid_request_code() {
    assert!(is_valid_request_code("AB12CD34"));
    assert!(!is_valid_request_code("ab12cd34"));
    assert!(!is_valid_request_code("AB12CD3"));
    assert!(!is_valid_request_code("AB12CD34X"));
    assert!(!is_valid_request_code("AB12-D34"));
}

#[test]
fn test_is_affirmative() {
    assert!(is_affirmative(Some(&json!(true))));
    assert!(is_affirmative(Some(&json!(1))));
    assert!(is_affirmative(Some(&json!("true"))));
    assert!(is_affirmative(Some(&json!("on"))));
    assert!(is_affirmative(Some(&json!("yes"))));

    assert!(!is_affirmative(None));
    assert!(!is_affirmative(Some(&json!(false))));
    assert!(!is_affirmative(Some(&json!(0))));
    assert!(!is_affirmative(Some(&json!("False"))));
    assert!(!is_affirmative(Some(&json!("0"))));
    assert!(!is_affirmative(Some(&json!(""))));
}
