//! Minimal URI template matching.
//!
//! Supports level-1 templates (`scheme://{var}/literal/{other}`): each
//! `{var}` matches one or more characters up to the next literal and never
//! crosses a `/`. Matched values are percent-decoded.

use std::collections::HashMap;

#[derive(Debug, PartialEq)]
enum Part<'a> {
    Literal(&'a str),
    Var(&'a str),
}

fn parse(template: &str) -> Option<Vec<Part<'_>>> {
    let mut parts = Vec::new();
    let mut rest = template;

    while !rest.is_empty() {
        match rest.find('{') {
            Some(0) => {
                let end = rest.find('}')?;
                let name = &rest[1..end];
                if name.is_empty() {
                    return None;
                }
                parts.push(Part::Var(name));
                rest = &rest[end + 1..];
            }
            Some(start) => {
                parts.push(Part::Literal(&rest[..start]));
                rest = &rest[start..];
            }
            None => {
                parts.push(Part::Literal(rest));
                rest = "";
            }
        }
    }
    Some(parts)
}

/// Match `uri` against `template`, returning the variable bindings.
pub fn match_template(template: &str, uri: &str) -> Option<HashMap<String, String>> {
    let parts = parse(template)?;
    let mut bindings = HashMap::new();
    let mut rest = uri;

    for (i, part) in parts.iter().enumerate() {
        match part {
            Part::Literal(lit) => {
                rest = rest.strip_prefix(lit)?;
            }
            Part::Var(name) => {
                let end = match parts.get(i + 1) {
                    Some(Part::Literal(next)) => rest.find(next)?,
                    _ => rest.len(),
                };
                let value = &rest[..end];
                if value.is_empty() || value.contains('/') {
                    return None;
                }
                bindings.insert((*name).to_string(), percent_decode(value));
                rest = &rest[end..];
            }
        }
    }

    rest.is_empty().then_some(bindings)
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variable() {
        let vars = match_template("weather://{location}", "weather://London").unwrap();
        assert_eq!(vars["location"], "London");
    }

    #[test]
    fn test_percent_decoding() {
        let vars = match_template("weather://{location}", "weather://New%20York").unwrap();
        assert_eq!(vars["location"], "New York");

        let vars = match_template("weather://{location}", "weather://S%C3%A3o%20Paulo").unwrap();
        assert_eq!(vars["location"], "São Paulo");
    }

    #[test]
    fn test_invalid_escape_kept() {
        let vars = match_template("weather://{location}", "weather://100%").unwrap();
        assert_eq!(vars["location"], "100%");
    }

    #[test]
    fn test_multiple_variables() {
        let vars = match_template("repo://{owner}/{name}/readme", "repo://oxur/course/readme").unwrap();
        assert_eq!(vars["owner"], "oxur");
        assert_eq!(vars["name"], "course");
    }

    #[test]
    fn test_mismatches() {
        assert!(match_template("weather://{location}", "forecast://London").is_none());
        assert!(match_template("weather://{location}", "weather://").is_none());
        assert!(match_template("weather://{location}", "weather://a/b").is_none());
        assert!(match_template("repo://{owner}/readme", "repo://oxur/license").is_none());
    }

    #[test]
    fn test_literal_only() {
        assert!(match_template("config://app", "config://app").unwrap().is_empty());
        assert!(match_template("config://app", "config://other").is_none());
    }

    #[test]
    fn test_malformed_template() {
        assert!(match_template("weather://{location", "weather://x").is_none());
        assert!(match_template("weather://{}", "weather://x").is_none());
    }
}
