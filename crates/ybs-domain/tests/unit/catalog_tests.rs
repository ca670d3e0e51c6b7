//! Tests for catalog entry and embedding value objects

use ybs_domain::value_objects::{CatalogEntry, Embedding};

fn entry(embedding: Option<Vec<f32>>) -> CatalogEntry {
    CatalogEntry {
        id: "e1".to_string(),
        name: "Steppe Tires".to_string(),
        summary: "Tire sales and fitting".to_string(),
        embedding,
    }
}

#[test]
fn test_entry_without_vector_is_not_candidate() {
    assert!(!entry(None).is_candidate());
    assert!(!entry(Some(Vec::new())).is_candidate());
    assert!(entry(Some(vec![0.1, 0.2])).is_candidate());
}

#[test]
fn test_entry_deserializes_without_embedding_field() {
    let json = r#"{"id":"e1","name":"Steppe Tires","summary":"Tire sales and fitting"}"#;
    let parsed: CatalogEntry = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, entry(None));
}

#[test]
fn test_embedding_new_sets_dimensions() {
    let embedding = Embedding::new(vec![1.0, 0.0, 0.0], "test");
    assert_eq!(embedding.dimensions, 3);
    assert_eq!(embedding.model, "test");
}
