//! Tests for the in-memory catalog provider

use std::io::Write;

use ybs_domain::ports::CatalogProvider;
use ybs_domain::value_objects::CatalogEntry;
use ybs_providers::catalog::InMemoryCatalogProvider;

fn entry(id: &str, embedding: Option<Vec<f32>>) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: format!("Business {id}"),
        summary: format!("Summary {id}"),
        embedding,
    }
}

#[tokio::test]
async fn only_entries_with_vectors_are_candidates() {
    let catalog = InMemoryCatalogProvider::new(vec![
        entry("a", Some(vec![1.0, 0.0])),
        entry("b", None),
        entry("c", Some(vec![])),
        entry("d", Some(vec![0.0, 1.0])),
    ]);

    let candidates = catalog.fetch_candidates(1000).await.expect("fetch");
    let ids: Vec<&str> = candidates.iter().map(|e| e.id.as_str()).collect();

    assert_eq!(ids, vec!["a", "d"]);
    assert_eq!(catalog.len(), 4);
}

#[tokio::test]
async fn candidate_limit_is_applied() {
    let catalog = InMemoryCatalogProvider::new(
        (0..10)
            .map(|i| entry(&i.to_string(), Some(vec![1.0])))
            .collect(),
    );

    assert_eq!(catalog.fetch_candidates(3).await.expect("fetch").len(), 3);
}

#[tokio::test]
async fn replace_swaps_contents() {
    let catalog = InMemoryCatalogProvider::default();
    assert!(catalog.is_empty());

    catalog
        .replace(vec![entry("x", Some(vec![1.0]))])
        .expect("replace");

    let candidates = catalog.fetch_candidates(10).await.expect("fetch");
    assert_eq!(candidates[0].id, "x");
}

#[tokio::test]
async fn loads_fixture_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"id": "1", "name": "Blue Door Cafe", "summary": "Coffee", "embedding": [1.0, 0.0]}},
            {{"id": "2", "name": "Pending", "summary": "No vector yet"}}
        ]"#
    )
    .expect("write fixture");

    let catalog = InMemoryCatalogProvider::from_json_file(file.path()).expect("load");
    let candidates = catalog.fetch_candidates(10).await.expect("fetch");

    assert_eq!(catalog.len(), 2);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name, "Blue Door Cafe");
}

#[test]
fn missing_fixture_is_io_error() {
    let err = InMemoryCatalogProvider::from_json_file(std::path::Path::new(
        "/nonexistent/catalog.json",
    ))
    .unwrap_err();
    assert!(matches!(err, ybs_domain::error::Error::Io { .. }));
}
