use pagecraft::site::{Section, SiteDocument};
use pagecraft::store::{DocumentStore, StoreError, DRAFT, PUBLISHED};
use serde_json::json;

fn create_temp_store() -> DocumentStore {
    let db = sled::Config::new().temporary(true).open().unwrap();
    DocumentStore::new(db).unwrap()
}

fn section(id: &str, type_id: &str) -> Section {
    serde_json::from_value(json!({
        "id": id,
        "typeId": type_id,
        "props": { "title": format!("section {}", id) }
    }))
    .unwrap()
}

fn document(title: &str, sections: Vec<Section>) -> SiteDocument {
    let mut doc = SiteDocument::default();
    doc.meta.title = title.to_string();
    doc.sections = sections;
    doc
}

#[test]
fn initialize_seeds_both_documents_once() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let draft = store.get(DRAFT).unwrap();
    let published = store.get(PUBLISHED).unwrap();
    assert_eq!(draft, SiteDocument::default());
    assert_eq!(published, SiteDocument::default());

    // Second call is a no-op.
    store.initialize().unwrap();
    assert_eq!(store.get(DRAFT).unwrap(), draft);
    assert_eq!(store.get(PUBLISHED).unwrap(), published);
}

#[test]
fn initialize_never_overwrites_existing_documents() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let edited = document("Edited", vec![section("s-1", "banner")]);
    store.put(DRAFT, &edited).unwrap();

    store.initialize().unwrap();
    assert_eq!(store.get(DRAFT).unwrap(), edited);
}

#[test]
fn initialize_seeds_each_missing_document_independently() {
    let store = create_temp_store();
    let edited = document("Only draft", vec![]);
    store.put(DRAFT, &edited).unwrap();

    store.initialize().unwrap();
    assert_eq!(store.get(DRAFT).unwrap(), edited);
    assert_eq!(store.get(PUBLISHED).unwrap(), SiteDocument::default());
}

#[test]
fn put_replaces_wholesale_last_writer_wins() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let d1 = document("First", vec![section("s-1", "banner"), section("s-2", "cards")]);
    let d2 = document("Second", vec![section("s-3", "text")]);
    store.put(DRAFT, &d1).unwrap();
    store.put(DRAFT, &d2).unwrap();

    assert_eq!(store.get(DRAFT).unwrap(), d2);
}

#[test]
fn publish_copies_current_draft() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let draft = document("To publish", vec![section("s-1", "bannerPro")]);
    store.put(DRAFT, &draft).unwrap();
    store.publish().unwrap();

    assert_eq!(store.get(PUBLISHED).unwrap(), draft);
}

#[test]
fn publish_twice_without_save_is_stable() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let draft = document("Stable", vec![section("s-1", "banner")]);
    store.put(DRAFT, &draft).unwrap();
    store.publish().unwrap();
    let first = store.get(PUBLISHED).unwrap();

    store.publish().unwrap();
    assert_eq!(store.get(PUBLISHED).unwrap(), first);
}

#[test]
fn later_draft_edits_never_change_published() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let published_version = document("v1", vec![section("s-1", "banner")]);
    store.put(DRAFT, &published_version).unwrap();
    store.publish().unwrap();

    let edited = document("v2 in progress", vec![section("s-2", "cards")]);
    store.put(DRAFT, &edited).unwrap();

    assert_eq!(store.get(PUBLISHED).unwrap(), published_version);
    assert_eq!(store.get(DRAFT).unwrap(), edited);
}

#[test]
fn unknown_document_names_are_rejected() {
    let store = create_temp_store();
    store.initialize().unwrap();

    assert!(matches!(
        store.get("history"),
        Err(StoreError::UnknownDocument(name)) if name == "history"
    ));
    assert!(matches!(
        store.put("", &SiteDocument::default()),
        Err(StoreError::UnknownDocument(_))
    ));
}

#[test]
fn documents_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let draft = document("Persisted", vec![section("s-1", "text")]);

    {
        let store = DocumentStore::open(dir.path()).unwrap();
        store.initialize().unwrap();
        store.put(DRAFT, &draft).unwrap();
    }

    let store = DocumentStore::open(dir.path()).unwrap();
    store.initialize().unwrap();
    assert_eq!(store.get(DRAFT).unwrap(), draft);
}

#[test]
fn props_round_trip_unconstrained_records() {
    let store = create_temp_store();
    store.initialize().unwrap();

    let doc: SiteDocument = serde_json::from_value(json!({
        "meta": { "title": "Records" },
        "sections": [{
            "id": "s-1",
            "typeId": "bannerPro",
            "props": {
                "buttons": [
                    { "label": "One", "href": "/one" },
                    { "label": "Two", "nested": { "deep": [1, 2, 3] } },
                    { "unrelatedShape": true }
                ]
            }
        }]
    }))
    .unwrap();

    store.put(DRAFT, &doc).unwrap();
    store.publish().unwrap();
    assert_eq!(store.get(PUBLISHED).unwrap(), doc);
}
