//! Tests for search value objects

use ybs_domain::constants::SEARCH_DEFAULT_LIMIT;
use ybs_domain::value_objects::{CachedResults, SearchRequest, SearchResult};

fn result(id: &str, similarity: f64, rank: usize) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        name: format!("Business {id}"),
        summary: String::new(),
        similarity,
        rank,
    }
}

#[test]
fn test_search_request_defaults() {
    let request = SearchRequest::new("florist");
    assert_eq!(request.limit, SEARCH_DEFAULT_LIMIT);
    assert!(request.use_cache);

    let request = request.with_limit(2).with_cache(false);
    assert_eq!(request.limit, 2);
    assert!(!request.use_cache);
}

#[test]
fn test_search_result_json_shape() {
    let json = serde_json::to_value(result("a", 0.5, 0)).unwrap();
    assert_eq!(json["id"], "a");
    assert_eq!(json["name"], "Business a");
    assert_eq!(json["similarity"], 0.5);
    assert_eq!(json["rank"], 0);
}

#[test]
fn test_cached_results_serve_smaller_limit() {
    let cached = CachedResults {
        limit: 3,
        results: vec![result("a", 0.9, 0), result("b", 0.8, 1), result("c", 0.7, 2)],
    };
    let served = cached.serve(2).expect("smaller limit is servable");
    let ids: Vec<_> = served.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn test_cached_results_short_list_still_servable() {
    // Catalog held fewer entries than requested when the entry was written
    let cached = CachedResults {
        limit: 5,
        results: vec![result("a", 0.9, 0)],
    };
    assert_eq!(cached.serve(5).unwrap().len(), 1);
}

#[test]
fn test_cached_results_reject_larger_limit() {
    let cached = CachedResults {
        limit: 2,
        results: vec![result("a", 0.9, 0), result("b", 0.8, 1)],
    };
    assert!(cached.serve(3).is_none());
}
