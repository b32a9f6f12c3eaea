//! Share links and the platform share/copy chain.
//!
//! Platform capabilities are tried in a fixed order: native share sheet,
//! clipboard API, scripted copy. Each step either succeeds or hands over to
//! the next; callers only ever see a [`ShareOutcome`] or a `bool`.

use std::future::Future;

use tracing::{debug, warn};

use crate::codec::{self, url_encode};
use crate::error::Result;
use crate::i18n::{Language, Text, t};
use crate::model::LapelConfig;

/// Canonical absolute link for `config`, anchored on the page's origin and
/// path. Any existing query string or fragment is dropped, so rebuilding a
/// link from a link yields the same link.
pub fn build_share_link(page_url: &str, config: &LapelConfig) -> String {
    let base = page_url
        .split(['?', '#'])
        .next()
        .unwrap_or(page_url);
    format!("{}?{}", base, codec::to_query_string(config))
}

/// File name offered when the social card is downloaded.
pub fn export_file_name(config: &LapelConfig) -> String {
    format!("lapel-{}-{}-preview.png", config.model, config.pattern)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Telegram,
    WhatsApp,
    Twitter,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 3] = [
        SocialNetwork::Telegram,
        SocialNetwork::WhatsApp,
        SocialNetwork::Twitter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Telegram => "Telegram",
            SocialNetwork::WhatsApp => "WhatsApp",
            SocialNetwork::Twitter => "Twitter",
        }
    }
}

/// Pre-filled "share to" URL for a social network.
pub fn intent_url(network: SocialNetwork, message: &str, link: &str) -> String {
    match network {
        SocialNetwork::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}",
            url_encode(&format!("{message} {link}"))
        ),
        SocialNetwork::WhatsApp => format!(
            "https://wa.me?text={}",
            url_encode(&format!("{message} {link}"))
        ),
        SocialNetwork::Telegram => format!(
            "https://t.me/share/url?url={}&text={}",
            url_encode(link),
            url_encode(message)
        ),
    }
}

/// What the native share sheet receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(page_url: &str, config: &LapelConfig, lang: Language) -> Self {
        SharePayload {
            title: t(Text::ShareTitle, lang).to_string(),
            text: t(Text::ShareMessage, lang).to_string(),
            url: build_share_link(page_url, config),
        }
    }
}

/// One way of putting text on the system clipboard.
pub trait ClipboardWriter {
    /// Whether the capability exists at all in this environment.
    fn is_available(&self) -> bool;

    fn write_text(&self, text: &str) -> impl Future<Output = Result<()>>;
}

/// The platform's native share sheet.
pub trait ShareSheet {
    fn is_available(&self) -> bool;

    fn share(&self, payload: &SharePayload) -> impl Future<Output = Result<()>>;
}

/// Copies `text` with `primary`, falling back to `fallback` when the primary
/// capability is missing or fails. Returns false only if both fail.
pub async fn copy_to_clipboard<P, F>(primary: &P, fallback: &F, text: &str) -> bool
where
    P: ClipboardWriter,
    F: ClipboardWriter,
{
    if primary.is_available() {
        match primary.write_text(text).await {
            Ok(()) => return true,
            Err(e) => debug!("clipboard api failed, trying fallback: {e}"),
        }
    }
    if !fallback.is_available() {
        warn!("no clipboard capability available");
        return false;
    }
    match fallback.write_text(text).await {
        Ok(()) => true,
        Err(e) => {
            warn!("scripted copy failed: {e}");
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet.
    Shared,
    /// Link copied to the clipboard.
    Copied,
    /// Nothing worked; the caller may tell the user.
    Failed,
}

/// Offers `payload` to the share sheet, copying its URL instead when the
/// sheet is missing or the user dismisses it.
pub async fn share_design<S, P, F>(
    sheet: &S,
    primary: &P,
    fallback: &F,
    payload: &SharePayload,
) -> ShareOutcome
where
    S: ShareSheet,
    P: ClipboardWriter,
    F: ClipboardWriter,
{
    if sheet.is_available() {
        match sheet.share(payload).await {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => debug!("share sheet declined, copying link: {e}"),
        }
    }
    if copy_to_clipboard(primary, fallback, &payload.url).await {
        ShareOutcome::Copied
    } else {
        ShareOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LapelModel, TrimColor};

    #[test]
    fn link_replaces_the_query() {
        let mut c = LapelConfig::default();
        c.model = LapelModel::Shawl;
        c.trim_color = TrimColor::Taupe;
        let link = build_share_link("https://lapels.example/ru/?model=peak&x=1#configurator", &c);
        assert_eq!(
            link,
            "https://lapels.example/ru/?model=shawl&pattern=geo01&trim=taupe&stitch=red&gender=male"
        );
        assert_eq!(build_share_link(&link, &c), link);
    }

    #[test]
    fn download_name() {
        assert_eq!(
            export_file_name(&LapelConfig::default()),
            "lapel-notch-geo01-preview.png"
        );
    }

    #[test]
    fn intent_urls_encode_message_and_link() {
        let url = intent_url(
            SocialNetwork::Twitter,
            "Check this",
            "https://x.example/?model=peak&pattern=geo01",
        );
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=Check%20this%20https%3A%2F%2Fx.example%2F%3Fmodel%3Dpeak%26pattern%3Dgeo01"
        );
        assert!(intent_url(SocialNetwork::WhatsApp, "a", "b").starts_with("https://wa.me?text="));
        assert!(
            intent_url(SocialNetwork::Telegram, "a", "b")
                .starts_with("https://t.me/share/url?url=b&text=a")
        );
    }

    #[test]
    fn payload_is_localized() {
        let p = SharePayload::new("https://x.example/", &LapelConfig::default(), Language::En);
        assert_eq!(p.title, "My lapel design");
        assert!(p.url.starts_with("https://x.example/?model=notch"));
    }
}
