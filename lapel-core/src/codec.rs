//! Query string form of a [`LapelConfig`].
//!
//! Decoding is strict and all-or-nothing: every one of the five parameters
//! must be present and non-empty, and every enumerated field must hold one of
//! its tokens. Nothing is filled in from defaults.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::constants::{
    PARAM_GENDER, PARAM_MODEL, PARAM_PATTERN, PARAM_STITCH, PARAM_TRIM, PARAMS,
};
use crate::error::{LapelError, Result};
use crate::model::LapelConfig;

/// Characters left as-is in a query component, mirroring form encoding.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// The five `(name, value)` pairs describing `config`, in canonical order.
pub fn encode(config: &LapelConfig) -> Vec<(&'static str, String)> {
    vec![
        (PARAM_MODEL, config.model.as_str().to_string()),
        (PARAM_PATTERN, config.pattern.clone()),
        (PARAM_TRIM, config.trim_color.as_str().to_string()),
        (PARAM_STITCH, config.stitch_color.as_str().to_string()),
        (PARAM_GENDER, config.gender.as_str().to_string()),
    ]
}

/// `model=..&pattern=..&trim=..&stitch=..&gender=..` without a leading `?`.
pub fn to_query_string(config: &LapelConfig) -> String {
    join_pairs(encode(config).iter().map(|(k, v)| (*k, v.as_str())))
}

/// Splits a `?a=b&c=d` search string into decoded pairs, keeping order and
/// duplicates.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let s = search.trim_start_matches('?');
    s.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next().unwrap_or("");
            let v = it.next().unwrap_or("");
            (url_decode(k), url_decode(v))
        })
        .collect()
}

/// Strictly decodes a configuration from already-split parameters.
pub fn decode(params: &[(String, String)]) -> Result<LapelConfig> {
    let get = |key: &'static str| -> Result<&str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| LapelError::missing(key))
    };
    // Presence is checked for all five before any value is interpreted.
    let model = get(PARAM_MODEL)?;
    let pattern = get(PARAM_PATTERN)?;
    let trim = get(PARAM_TRIM)?;
    let stitch = get(PARAM_STITCH)?;
    let gender = get(PARAM_GENDER)?;
    validate_tokens(model, pattern, trim, stitch, gender)
}

/// Strictly decodes a configuration from a raw search string.
pub fn decode_query(search: &str) -> Result<LapelConfig> {
    decode(&parse_query(search))
}

/// Enum-membership check shared by URL decoding and stored payloads.
pub fn validate_tokens(
    model: &str,
    pattern: &str,
    trim: &str,
    stitch: &str,
    gender: &str,
) -> Result<LapelConfig> {
    if pattern.is_empty() {
        return Err(LapelError::missing(PARAM_PATTERN));
    }
    Ok(LapelConfig {
        model: model.parse()?,
        pattern: pattern.to_string(),
        trim_color: trim.parse()?,
        stitch_color: stitch.parse()?,
        gender: gender.parse()?,
    })
}

/// Sets the five configuration parameters on an existing search string.
///
/// Unrelated parameters keep their position; a configuration parameter
/// replaces its first occurrence and drops any repeats; parameters not yet
/// present are appended in canonical order.
pub fn merge_into_query(search: &str, config: &LapelConfig) -> String {
    let encoded = encode(config);
    let lookup = |key: &str| encoded.iter().find(|(k, _)| *k == key).map(|(_, v)| v);
    let mut seen: Vec<&str> = Vec::new();
    let mut out: Vec<(String, String)> = Vec::new();
    for (k, v) in parse_query(search) {
        match PARAMS.iter().find(|p| **p == k) {
            Some(param) if seen.contains(param) => {}
            Some(param) => {
                seen.push(*param);
                if let Some(value) = lookup(*param) {
                    out.push((k, value.clone()));
                }
            }
            None => out.push((k, v)),
        }
    }
    for (k, v) in &encoded {
        if !seen.contains(k) {
            out.push((k.to_string(), v.clone()));
        }
    }
    join_pairs(out.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

pub(crate) fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().to_string()
}

fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
