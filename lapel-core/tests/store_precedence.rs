use lapel_core::constants::STORAGE_KEY;
use lapel_core::store::{MemoryQuery, MemoryStorage};
use lapel_core::stored;
use lapel_core::{
    ConfigPatch, ConfigSource, ConfigStore, Gender, LapelConfig, LapelModel, StitchColor,
    TrimColor,
};

fn stored_design() -> LapelConfig {
    LapelConfig {
        model: LapelModel::Shawl,
        pattern: "literary03".to_string(),
        trim_color: TrimColor::Charcoal,
        stitch_color: StitchColor::Purple,
        gender: Gender::Female,
    }
}

fn storage_with(config: &LapelConfig) -> MemoryStorage {
    MemoryStorage::with_item(STORAGE_KEY, &stored::to_payload(config).unwrap())
}

#[test]
fn url_beats_storage_and_overwrites_it() {
    let storage = storage_with(&stored_design());
    let query =
        MemoryQuery::new("?model=peak&pattern=texture01&trim=navy&stitch=gold&gender=female");
    let store = ConfigStore::resolve(query, storage.clone());

    assert_eq!(store.source(), ConfigSource::Url);
    assert_eq!(store.get().model, LapelModel::Peak);
    assert_eq!(store.get().pattern, "texture01");

    let persisted = stored::from_payload(&storage.item(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(&persisted, store.get());
}

#[test]
fn invalid_url_falls_back_to_storage() {
    let storage = storage_with(&stored_design());
    let store = ConfigStore::resolve(MemoryQuery::new("?model=peak&pattern=geo01"), storage);
    assert_eq!(store.source(), ConfigSource::Storage);
    assert_eq!(store.get(), &stored_design());
}

#[test]
fn nothing_anywhere_gives_the_default() {
    let store = ConfigStore::resolve(MemoryQuery::default(), MemoryStorage::default());
    assert_eq!(store.source(), ConfigSource::Default);
    let c = store.get();
    assert_eq!(c.model, LapelModel::Notch);
    assert_eq!(c.pattern, "geo01");
    assert_eq!(c.trim_color, TrimColor::Ivory);
    assert_eq!(c.stitch_color, StitchColor::Red);
    assert_eq!(c.gender, Gender::Male);
}

#[test]
fn edits_survive_a_reload() {
    let storage = MemoryStorage::default();
    let mut store = ConfigStore::resolve(MemoryQuery::new("?utm=mail"), storage.clone());
    store.set(ConfigPatch::model(LapelModel::Peak));
    store.set(ConfigPatch::pattern("abstract02"));

    let url = store.query().search.clone();
    assert!(url.starts_with("utm=mail&"));

    // Same URL on the next visit.
    let reloaded = ConfigStore::resolve(MemoryQuery::new(&url), MemoryStorage::default());
    assert_eq!(reloaded.get(), store.get());

    // Bare URL, same browser.
    let restored = ConfigStore::resolve(MemoryQuery::default(), storage);
    assert_eq!(restored.source(), ConfigSource::Storage);
    assert_eq!(restored.get(), store.get());
}
