//! Sanitization for untrusted request payloads.
//!
//! Every string leaf in a request is scrubbed before dispatch: the characters
//! below are deleted (not escaped), surrounding whitespace is trimmed, and the
//! result is capped at `MAX_STRING_LEN` characters. Containers are sanitized
//! element-wise with structure preserved; map keys and non-string scalars pass
//! through untouched.

use serde_json::Value;

/// Characters deleted from every string leaf.
pub const DANGEROUS_CHARS: &[char] = &['<', '>', '&', '"', '\'', '`'];

/// Cap applied after stripping and trimming, counted in characters.
pub const MAX_STRING_LEN: usize = 1000;

pub fn sanitize_str(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !DANGEROUS_CHARS.contains(c)).collect();
    stripped.trim().chars().take(MAX_STRING_LEN).collect()
}

pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_str(&s)),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, sanitize_value(v))).collect()),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_every_dangerous_char() {
        assert_eq!(sanitize_str(r#"<script>alert("x&y")</script>"#), "scriptalert(xy)/script");
        assert_eq!(sanitize_str("it's `quoted`"), "its quoted");
    }

    #[test]
    fn trims_after_stripping() {
        // Stripping can expose whitespace at the edges; trim runs second.
        assert_eq!(sanitize_str("< padded >"), "padded");
        assert_eq!(sanitize_str("  plain  "), "plain");
    }

    #[test]
    fn truncates_to_limit_in_chars() {
        let long = "a".repeat(MAX_STRING_LEN + 50);
        assert_eq!(sanitize_str(&long).chars().count(), MAX_STRING_LEN);

        // Multi-byte chars count as one.
        let wide = "é".repeat(MAX_STRING_LEN + 10);
        assert_eq!(sanitize_str(&wide).chars().count(), MAX_STRING_LEN);
    }

    #[test]
    fn idempotent_on_already_sanitized_values() {
        let cases = ["plain", "a b c", "0xABC", "auto_yield"];
        for case in cases {
            let once = sanitize_str(case);
            assert_eq!(sanitize_str(&once), once, "not idempotent for {case:?}");
        }

        let value = json!({"op": "anal<yze", "nested": {"list": [" x ", 3, true]}});
        let once = sanitize_value(value);
        assert_eq!(sanitize_value(once.clone()), once);
    }

    #[test]
    fn recurses_through_objects_and_arrays() {
        let input = json!({
            "operation": "analyze",
            "params": {
                "wallet": "<0xABC>",
                "notes": ["a&b", {"deep": "'quoted'"}]
            }
        });
        let out = sanitize_value(input);
        assert_eq!(out["params"]["wallet"], "0xABC");
        assert_eq!(out["params"]["notes"][0], "ab");
        assert_eq!(out["params"]["notes"][1]["deep"], "quoted");
    }

    #[test]
    fn non_strings_pass_through() {
        let input = json!({"n": 1.5, "b": false, "z": null, "arr": [1, 2]});
        assert_eq!(sanitize_value(input.clone()), input);
    }

    #[test]
    fn keys_are_not_rewritten() {
        let input = json!({"<key>": "value"});
        let out = sanitize_value(input);
        assert!(out.get("<key>").is_some());
    }
}
