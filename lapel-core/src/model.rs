use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LapelError;

/// Declares a closed set of lowercase string tokens with `as_str`, `ALL`,
/// `FromStr` and serde support keyed on the same literals.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = LapelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(LapelError::unknown_value($field, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Structural silhouette of the lapel.
    LapelModel, "model" {
        Notch => "notch",
        Peak => "peak",
        Shawl => "shawl",
    }
}

token_enum! {
    /// Edge colour of the lapel outline.
    TrimColor, "trim" {
        Ivory => "ivory",
        Cream => "cream",
        Beige => "beige",
        Taupe => "taupe",
        Charcoal => "charcoal",
        Navy => "navy",
    }
}

token_enum! {
    /// Thread colour of the boutonniere loop and buttons.
    StitchColor, "stitch" {
        Red => "red",
        Blue => "blue",
        Green => "green",
        Gold => "gold",
        Purple => "purple",
        Black => "black",
    }
}

token_enum! {
    /// Garment silhouette variant.
    Gender, "gender" {
        Male => "male",
        Female => "female",
    }
}

/// One complete design. Replaced wholesale on every edit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapelConfig {
    pub model: LapelModel,
    pub pattern: String,
    pub trim_color: TrimColor,
    pub stitch_color: StitchColor,
    pub gender: Gender,
}

impl Default for LapelConfig {
    fn default() -> Self {
        LapelConfig {
            model: LapelModel::Notch,
            pattern: crate::constants::DEFAULT_PATTERN.to_string(),
            trim_color: TrimColor::Ivory,
            stitch_color: StitchColor::Red,
            gender: Gender::Male,
        }
    }
}

impl LapelConfig {
    /// Returns a new configuration with the fields of `patch` laid over `self`.
    pub fn merged(&self, patch: ConfigPatch) -> LapelConfig {
        LapelConfig {
            model: patch.model.unwrap_or(self.model),
            pattern: patch.pattern.unwrap_or_else(|| self.pattern.clone()),
            trim_color: patch.trim_color.unwrap_or(self.trim_color),
            stitch_color: patch.stitch_color.unwrap_or(self.stitch_color),
            gender: patch.gender.unwrap_or(self.gender),
        }
    }

    /// Token held by the named query field, for highlighting the matching
    /// control.
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "model" => Some(self.model.as_str()),
            "pattern" => Some(&self.pattern),
            "trim" => Some(self.trim_color.as_str()),
            "stitch" => Some(self.stitch_color.as_str()),
            "gender" => Some(self.gender.as_str()),
            _ => None,
        }
    }

    /// `model • trim • stitch`, as shown on the social card.
    pub fn summary(&self) -> String {
        format!(
            "{} • {} • {}",
            self.model, self.trim_color, self.stitch_color
        )
    }
}

/// Partial update produced by a single UI control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub model: Option<LapelModel>,
    pub pattern: Option<String>,
    pub trim_color: Option<TrimColor>,
    pub stitch_color: Option<StitchColor>,
    pub gender: Option<Gender>,
}

impl ConfigPatch {
    pub fn model(model: LapelModel) -> Self {
        ConfigPatch {
            model: Some(model),
            ..Default::default()
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        ConfigPatch {
            pattern: Some(pattern.into()),
            ..Default::default()
        }
    }

    pub fn trim_color(trim_color: TrimColor) -> Self {
        ConfigPatch {
            trim_color: Some(trim_color),
            ..Default::default()
        }
    }

    pub fn stitch_color(stitch_color: StitchColor) -> Self {
        ConfigPatch {
            stitch_color: Some(stitch_color),
            ..Default::default()
        }
    }

    pub fn gender(gender: Gender) -> Self {
        ConfigPatch {
            gender: Some(gender),
            ..Default::default()
        }
    }

    /// Builds a single-field patch from a control's `(field, value)` pair,
    /// using the same field names as the query string.
    pub fn from_field(field: &str, value: &str) -> crate::Result<Self> {
        match field {
            "model" => Ok(Self::model(value.parse()?)),
            "pattern" if !value.is_empty() => Ok(Self::pattern(value)),
            "pattern" => Err(LapelError::missing("pattern")),
            "trim" => Ok(Self::trim_color(value.parse()?)),
            "stitch" => Ok(Self::stitch_color(value.parse()?)),
            "gender" => Ok(Self::gender(value.parse()?)),
            _ => Err(LapelError::InvalidConfiguration {
                field: "field",
                reason: format!("'{field}' is not a configuration field"),
            }),
        }
    }
}
