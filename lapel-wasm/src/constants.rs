//! DOM hooks the host page provides. Missing elements disable the matching
//! feature, they never abort start-up.

/// Element shown while a pattern image is loading.
pub const LOADING_ID: &str = "preview-loading";
/// `<img>` that receives the generated social card.
pub const CARD_IMAGE_ID: &str = "social-preview";
/// Short status line for share feedback.
pub const SHARE_STATUS_ID: &str = "share-status";

/// Option buttons carry `data-field="model|pattern|trim|stitch|gender"` and
/// `data-value="<token>"`.
pub const FIELD_ATTR: &str = "data-field";
pub const VALUE_ATTR: &str = "data-value";
/// Action buttons: `share`, `copy-link`, `generate-preview`, `download-preview`.
pub const ACTION_ATTR: &str = "data-action";
/// Social buttons: `telegram`, `whatsapp`, `twitter`.
pub const SOCIAL_ATTR: &str = "data-social";

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

/// Global the host page may set with site configuration.
pub const CONFIG_GLOBAL: &str = "__LAPEL_CONFIG";
/// Older pages only set the asset prefix.
pub const BASE_URL_GLOBAL: &str = "__BASE_URL";
