use lapel_core::{Gender, Language, LapelConfig, LapelModel, StitchColor, TrimColor};
use lapel_render::{
    CardOptions, generate_catalog_preview, generate_social_preview, generate_thumbnail,
};

fn design() -> LapelConfig {
    LapelConfig {
        model: LapelModel::Peak,
        pattern: "texture01".to_string(),
        trim_color: TrimColor::Navy,
        stitch_color: StitchColor::Gold,
        gender: Gender::Female,
    }
}

#[test]
fn social_card_is_byte_identical_across_calls() {
    let options = CardOptions::default();
    let a = generate_social_preview(&design(), "Шёлк", &options).unwrap();
    let b = generate_social_preview(&design(), "Шёлк", &options).unwrap();
    assert!(a.starts_with("data:image/png;base64,"));
    assert_eq!(a, b);
}

#[test]
fn thumbnail_swatches_follow_the_colours() {
    let a = generate_thumbnail(&design(), 300, Language::Ru).unwrap();
    let mut other = design();
    other.trim_color = TrimColor::Ivory;
    let b = generate_thumbnail(&other, 300, Language::Ru).unwrap();
    assert_ne!(a, b);
}

#[test]
fn catalog_card_uses_the_localized_name() {
    let options = CardOptions {
        language: Language::En,
        ..Default::default()
    };
    let url = generate_catalog_preview(&design(), &options).unwrap();
    assert!(url.is_some());
}

#[test]
fn thumbnail_is_deterministic() {
    let a = generate_thumbnail(&design(), 300, Language::Ru).unwrap();
    assert_eq!(a, generate_thumbnail(&design(), 300, Language::Ru).unwrap());
}
