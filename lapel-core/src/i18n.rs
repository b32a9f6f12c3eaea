use serde::{Deserialize, Serialize};

/// Site language. Deserializes leniently, like [`Language::from_tag`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Lenient parse: anything starting with `en` is English, everything else
    /// falls back to Russian.
    pub fn from_tag(tag: &str) -> Language {
        if tag.trim().to_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Ru
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Language::from_tag(&tag)
    }
}

/// Strings the configurator itself renders or hands to the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    CardTitle,
    CardSubtitle,
    ThumbnailTitle,
    ShareTitle,
    ShareMessage,
    LinkCopied,
    PreviewFailed,
}

pub fn t(key: Text, lang: Language) -> &'static str {
    match (key, lang) {
        (Text::CardTitle, Language::Ru) => "Лацканы с историей",
        (Text::CardTitle, Language::En) => "Lapels with a story",
        (Text::CardSubtitle, Language::Ru) => "Секрет на подвороте",
        (Text::CardSubtitle, Language::En) => "A secret under the fold",
        (Text::ThumbnailTitle, Language::Ru) => "Лацкан",
        (Text::ThumbnailTitle, Language::En) => "Lapel",
        (Text::ShareTitle, Language::Ru) => "Мой дизайн лацкана",
        (Text::ShareTitle, Language::En) => "My lapel design",
        (Text::ShareMessage, Language::Ru) => "Посмотрите на мой уникальный дизайн лацкана!",
        (Text::ShareMessage, Language::En) => "Check out my unique lapel design!",
        (Text::LinkCopied, Language::Ru) => "Ссылка скопирована",
        (Text::LinkCopied, Language::En) => "Link copied",
        (Text::PreviewFailed, Language::Ru) => "Не удалось создать превью",
        (Text::PreviewFailed, Language::En) => "Preview generation failed",
    }
}
