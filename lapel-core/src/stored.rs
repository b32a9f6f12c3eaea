//! Persisted form of the configuration and its two validation tiers.
//!
//! Tier one is structural: the payload must be a JSON object whose five
//! fields are all present and all strings. Tier two re-applies the codec's
//! enum-membership check, so a well-typed but unknown token such as
//! `"trimColor": "purple-ish"` is rejected rather than adopted.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::Result;
use crate::model::LapelConfig;

/// Loosely typed payload as found in storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    pub model: String,
    pub pattern: String,
    pub trim_color: String,
    pub stitch_color: String,
    pub gender: String,
}

impl StoredConfig {
    /// Tier one: parse `payload` and check the five string fields exist.
    pub fn parse(payload: &str) -> Result<StoredConfig> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Tier two: check every token against its enumeration.
    pub fn validate(&self) -> Result<LapelConfig> {
        codec::validate_tokens(
            &self.model,
            &self.pattern,
            &self.trim_color,
            &self.stitch_color,
            &self.gender,
        )
    }
}

impl From<&LapelConfig> for StoredConfig {
    fn from(c: &LapelConfig) -> Self {
        StoredConfig {
            model: c.model.as_str().to_string(),
            pattern: c.pattern.clone(),
            trim_color: c.trim_color.as_str().to_string(),
            stitch_color: c.stitch_color.as_str().to_string(),
            gender: c.gender.as_str().to_string(),
        }
    }
}

/// Serialises `config` for storage.
pub fn to_payload(config: &LapelConfig) -> Result<String> {
    Ok(serde_json::to_string(&StoredConfig::from(config))?)
}

/// Runs both tiers over a raw payload.
pub fn from_payload(payload: &str) -> Result<LapelConfig> {
    StoredConfig::parse(payload)?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LapelError;

    #[test]
    fn structural_tier_requires_all_string_fields() {
        assert!(StoredConfig::parse(r#"{"model":"notch"}"#).is_err());
        assert!(
            StoredConfig::parse(
                r#"{"model":"notch","pattern":1,"trimColor":"ivory","stitchColor":"red","gender":"male"}"#
            )
            .is_err()
        );
        assert!(StoredConfig::parse("null").is_err());
        assert!(StoredConfig::parse("not json").is_err());
    }

    #[test]
    fn structural_tier_accepts_unknown_tokens() {
        let stored = StoredConfig::parse(
            r#"{"model":"notch","pattern":"geo01","trimColor":"purple-ish","stitchColor":"red","gender":"male"}"#,
        )
        .unwrap();
        assert_eq!(stored.trim_color, "purple-ish");
        // ...which the strict tier then refuses
        assert!(matches!(
            stored.validate(),
            Err(LapelError::InvalidConfiguration { field: "trim", .. })
        ));
    }

    #[test]
    fn payload_round_trips() {
        let c = LapelConfig::default();
        let payload = to_payload(&c).unwrap();
        assert!(payload.contains("\"trimColor\":\"ivory\""));
        assert_eq!(from_payload(&payload).unwrap(), c);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let c = from_payload(
            r#"{"model":"shawl","pattern":"geo03","trimColor":"beige","stitchColor":"green","gender":"female","v":2}"#,
        )
        .unwrap();
        assert_eq!(c.pattern, "geo03");
    }
}
