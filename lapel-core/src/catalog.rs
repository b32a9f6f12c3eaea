//! Static pattern catalog. The core needs it only to map an id to an asset
//! path and a display name.

use serde::Serialize;

use crate::i18n::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Geometric,
    Texture,
    Literary,
    Abstract,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PatternDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub tags: [&'static str; 3],
    pub tags_en: [&'static str; 3],
    pub category: Category,
}

impl PatternDescriptor {
    const fn new(
        id: &'static str,
        name: &'static str,
        name_en: &'static str,
        tags: [&'static str; 3],
        tags_en: [&'static str; 3],
        category: Category,
    ) -> Self {
        PatternDescriptor {
            id,
            name,
            name_en,
            tags,
            tags_en,
            category,
        }
    }

    /// Full-size asset, relative to the site root.
    pub fn asset_path(&self) -> String {
        format!("/patterns/{}.svg", self.id)
    }

    pub fn thumbnail_path(&self) -> String {
        format!("/patterns/{}_thumb.png", self.id)
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ru => self.name,
            Language::En => self.name_en,
        }
    }

    pub fn tags_for(&self, lang: Language) -> &[&'static str; 3] {
        match lang {
            Language::Ru => &self.tags,
            Language::En => &self.tags_en,
        }
    }

    /// This pattern as a pattern picker shows it in `lang`.
    pub fn entry(&self, lang: Language) -> CatalogEntry {
        CatalogEntry {
            id: self.id,
            name: self.display_name(lang),
            tags: *self.tags_for(lang),
            category: self.category,
            asset: self.asset_path(),
            thumbnail: self.thumbnail_path(),
        }
    }
}

/// One localized row of the catalog. Paths are relative to the site root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub tags: [&'static str; 3],
    pub category: Category,
    pub asset: String,
    pub thumbnail: String,
}

pub static PATTERNS: &[PatternDescriptor] = &[
    PatternDescriptor::new(
        "geo01",
        "Геометрия 01",
        "Geometry 01",
        ["универсальный", "минимал", "геометрия"],
        ["universal", "minimal", "geometric"],
        Category::Geometric,
    ),
    PatternDescriptor::new(
        "geo02",
        "Точки и линии",
        "Dots & Lines",
        ["классика", "точки", "линии"],
        ["classic", "dots", "lines"],
        Category::Geometric,
    ),
    PatternDescriptor::new(
        "geo03",
        "Шестигранники",
        "Hexagons",
        ["современный", "шестигранники", "структура"],
        ["modern", "hexagons", "structure"],
        Category::Geometric,
    ),
    PatternDescriptor::new(
        "geo04",
        "Волны",
        "Waves",
        ["динамичный", "волны", "плавность"],
        ["dynamic", "waves", "smooth"],
        Category::Geometric,
    ),
    PatternDescriptor::new(
        "geo05",
        "Сетка",
        "Grid",
        ["архитектурный", "сетка", "порядок"],
        ["architectural", "grid", "order"],
        Category::Geometric,
    ),
    PatternDescriptor::new(
        "texture01",
        "Мрамор",
        "Marble",
        ["премиум", "мрамор", "элегантность"],
        ["premium", "marble", "elegance"],
        Category::Texture,
    ),
    PatternDescriptor::new(
        "texture02",
        "Бумага",
        "Paper",
        ["текстура", "бумага", "естественность"],
        ["texture", "paper", "natural"],
        Category::Texture,
    ),
    PatternDescriptor::new(
        "texture03",
        "Дерево",
        "Wood",
        ["органический", "дерево", "теплота"],
        ["organic", "wood", "warmth"],
        Category::Texture,
    ),
    PatternDescriptor::new(
        "texture04",
        "Металл",
        "Metal",
        ["индустриальный", "металл", "прочность"],
        ["industrial", "metal", "strength"],
        Category::Texture,
    ),
    PatternDescriptor::new(
        "texture05",
        "Кожа",
        "Leather",
        ["премиум", "кожа", "роскошь"],
        ["premium", "leather", "luxury"],
        Category::Texture,
    ),
    PatternDescriptor::new(
        "literary01",
        "Звёздная ночь",
        "Starry Night",
        ["романтичный", "звёзды", "мечты"],
        ["romantic", "stars", "dreams"],
        Category::Literary,
    ),
    PatternDescriptor::new(
        "literary02",
        "Облака",
        "Clouds",
        ["воздушный", "облака", "свобода"],
        ["airy", "clouds", "freedom"],
        Category::Literary,
    ),
    PatternDescriptor::new(
        "literary03",
        "Книжные страницы",
        "Book Pages",
        ["интеллектуальный", "книги", "знания"],
        ["intellectual", "books", "knowledge"],
        Category::Literary,
    ),
    PatternDescriptor::new(
        "literary04",
        "Карта",
        "Map",
        ["путешествия", "карта", "приключения"],
        ["travel", "map", "adventure"],
        Category::Literary,
    ),
    PatternDescriptor::new(
        "literary05",
        "Часы",
        "Clock",
        ["время", "часы", "философия"],
        ["time", "clock", "philosophy"],
        Category::Literary,
    ),
    PatternDescriptor::new(
        "abstract01",
        "Поток",
        "Flow",
        ["динамичный", "поток", "движение"],
        ["dynamic", "flow", "movement"],
        Category::Abstract,
    ),
    PatternDescriptor::new(
        "abstract02",
        "Градиент",
        "Gradient",
        ["современный", "градиент", "цвет"],
        ["modern", "gradient", "color"],
        Category::Abstract,
    ),
    PatternDescriptor::new(
        "abstract03",
        "Спираль",
        "Spiral",
        ["органический", "спираль", "рост"],
        ["organic", "spiral", "growth"],
        Category::Abstract,
    ),
    PatternDescriptor::new(
        "abstract04",
        "Фрактал",
        "Fractal",
        ["математический", "фрактал", "бесконечность"],
        ["mathematical", "fractal", "infinity"],
        Category::Abstract,
    ),
    PatternDescriptor::new(
        "abstract05",
        "Хаос",
        "Chaos",
        ["креативный", "хаос", "творчество"],
        ["creative", "chaos", "creativity"],
        Category::Abstract,
    ),
];

pub fn pattern_by_id(id: &str) -> Option<&'static PatternDescriptor> {
    PATTERNS.iter().find(|p| p.id == id)
}

pub fn patterns_by_category(category: Category) -> Vec<&'static PatternDescriptor> {
    PATTERNS.iter().filter(|p| p.category == category).collect()
}

/// Patterns carrying `tag` in either language.
pub fn patterns_by_tag(tag: &str) -> Vec<&'static PatternDescriptor> {
    PATTERNS
        .iter()
        .filter(|p| p.tags.iter().chain(p.tags_en.iter()).any(|t| *t == tag))
        .collect()
}

/// The whole catalog in `lang`, in catalog order.
pub fn catalog_entries(lang: Language) -> Vec<CatalogEntry> {
    PATTERNS.iter().map(|p| p.entry(lang)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = PATTERNS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PATTERNS.len());
        assert_eq!(PATTERNS.len(), 20);
    }

    #[test]
    fn default_pattern_exists() {
        let p = pattern_by_id(crate::constants::DEFAULT_PATTERN).unwrap();
        assert_eq!(p.asset_path(), "/patterns/geo01.svg");
        assert_eq!(p.display_name(Language::En), "Geometry 01");
        assert!(pattern_by_id("geo99").is_none());
    }

    #[test]
    fn five_per_category() {
        for c in [
            Category::Geometric,
            Category::Texture,
            Category::Literary,
            Category::Abstract,
        ] {
            assert_eq!(patterns_by_category(c).len(), 5);
        }
    }

    #[test]
    fn tags_match_in_both_languages() {
        let premium = patterns_by_tag("premium");
        let premium_ru = patterns_by_tag("премиум");
        assert_eq!(premium.len(), 2);
        assert_eq!(premium, premium_ru);
        assert_eq!(pattern_by_id("texture01").unwrap().display_name(Language::Ru), "Мрамор");
    }

    #[test]
    fn entries_are_localized() {
        let en = catalog_entries(Language::En);
        assert_eq!(en.len(), PATTERNS.len());
        let marble = en.iter().find(|e| e.id == "texture01").unwrap();
        assert_eq!(marble.category, Category::Texture);
        assert_eq!(marble.thumbnail, "/patterns/texture01_thumb.png");
        assert_eq!(marble.asset, "/patterns/texture01.svg");

        let ru = pattern_by_id("texture01").unwrap().entry(Language::Ru);
        assert_eq!(ru.name, "Мрамор");
        assert_ne!(ru.tags, marble.tags);

        let json = serde_json::to_value(&ru).unwrap();
        assert_eq!(json["category"], "texture");
    }
}
