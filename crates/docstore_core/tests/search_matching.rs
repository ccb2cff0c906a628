use docstore_core::{
    Author, Document, DocumentRepository, InMemoryDocumentRepository, SearchRequest,
};
use std::collections::HashSet;

fn seeded_repo() -> InMemoryDocumentRepository {
    let mut repo = InMemoryDocumentRepository::new();
    let documents = [
        Document {
            id: Some("d1".to_string()),
            title: Some("Report".to_string()),
            content: Some("Quarterly numbers".to_string()),
            author: Some(Author::new("a1", "Ada")),
            created: Some(1_000),
        },
        Document {
            id: Some("d2".to_string()),
            title: Some("Report 2024".to_string()),
            content: Some("Yearly numbers".to_string()),
            author: Some(Author::new("a2", "Brian")),
            created: Some(2_000),
        },
        Document {
            id: Some("d3".to_string()),
            title: Some("Notes".to_string()),
            content: Some("Quarterly numbers".to_string()),
            author: None,
            created: None,
        },
    ];
    for document in documents {
        repo.save(document).unwrap();
    }
    repo
}

fn hit_ids(hits: &[Document]) -> HashSet<String> {
    hits.iter()
        .map(|document| document.id.clone().expect("stored documents carry ids"))
        .collect()
}

#[test]
fn empty_request_returns_no_documents() {
    let repo = seeded_repo();
    let hits = repo.search(&SearchRequest::default()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn title_search_is_exact_equality_not_prefix() {
    let repo = seeded_repo();

    let request = SearchRequest {
        title_prefixes: Some(vec!["Report".to_string()]),
        ..SearchRequest::default()
    };
    let hits = repo.search(&request).unwrap();

    // "Report 2024" starts with "Report" but is not equal to it.
    assert_eq!(hit_ids(&hits), HashSet::from(["d1".to_string()]));
}

#[test]
fn content_search_matches_exact_values_across_documents() {
    let repo = seeded_repo();

    let request = SearchRequest {
        contains_contents: Some(vec!["Quarterly numbers".to_string()]),
        ..SearchRequest::default()
    };
    let hits = repo.search(&request).unwrap();
    assert_eq!(
        hit_ids(&hits),
        HashSet::from(["d1".to_string(), "d3".to_string()])
    );
}

#[test]
fn author_criterion_overwrites_title_match() {
    let repo = seeded_repo();

    // d1 matches the title, but the author criterion runs later and
    // points at d2's author, so only d2 is returned.
    let request = SearchRequest {
        title_prefixes: Some(vec!["Report".to_string()]),
        author_ids: Some(vec!["a2".to_string()]),
        ..SearchRequest::default()
    };
    let hits = repo.search(&request).unwrap();
    assert_eq!(hit_ids(&hits), HashSet::from(["d2".to_string()]));
}

#[test]
fn date_range_criterion_overwrites_everything_else() {
    let repo = seeded_repo();

    let request = SearchRequest {
        title_prefixes: Some(vec!["Notes".to_string()]),
        created_from: Some(500),
        created_to: Some(1_500),
        ..SearchRequest::default()
    };
    let hits = repo.search(&request).unwrap();

    // d3 matched the title but has no creation time; d1 is the only
    // document strictly inside the range.
    assert_eq!(hit_ids(&hits), HashSet::from(["d1".to_string()]));
}

#[test]
fn date_range_bounds_are_exclusive() {
    let repo = seeded_repo();

    let request = SearchRequest {
        created_from: Some(1_000),
        created_to: Some(2_000),
        ..SearchRequest::default()
    };
    let hits = repo.search(&request).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn multiple_candidates_in_one_criterion_are_a_union() {
    let repo = seeded_repo();

    let request = SearchRequest {
        title_prefixes: Some(vec!["Report".to_string(), "Notes".to_string()]),
        ..SearchRequest::default()
    };
    let hits = repo.search(&request).unwrap();
    assert_eq!(
        hit_ids(&hits),
        HashSet::from(["d1".to_string(), "d3".to_string()])
    );
}

#[test]
fn search_after_update_sees_new_field_values() {
    let mut repo = seeded_repo();

    let mut updated = repo.find_by_id("d3").unwrap().unwrap();
    updated.title = Some("Meeting notes".to_string());
    repo.save(updated).unwrap();

    let stale = SearchRequest {
        title_prefixes: Some(vec!["Notes".to_string()]),
        ..SearchRequest::default()
    };
    assert!(repo.search(&stale).unwrap().is_empty());

    let fresh = SearchRequest {
        title_prefixes: Some(vec!["Meeting notes".to_string()]),
        ..SearchRequest::default()
    };
    assert_eq!(
        hit_ids(&repo.search(&fresh).unwrap()),
        HashSet::from(["d3".to_string()])
    );
}
