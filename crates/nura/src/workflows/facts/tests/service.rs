use super::common::*;
use crate::workflows::facts::{FactError, FactId, FactRepository, FactService, RepositoryError};
use std::sync::Arc;

#[test]
fn remember_trims_and_assigns_sequential_ids() {
    let (service, repository) = build_service();

    let first = service.remember("  Bob likes fishing  ").expect("stored");
    let second = service.remember("Lunch is at noon").expect("stored");

    assert_eq!(first.id, FactId(1));
    assert_eq!(second.id, FactId(2));
    assert_eq!(first.content, "Bob likes fishing");
    assert_eq!(repository.list().expect("listed").len(), 2);
}

#[test]
fn remember_rejects_blank_text() {
    let (service, repository) = build_service();

    assert!(matches!(
        service.remember(" \n\t "),
        Err(FactError::EmptyContent)
    ));
    assert!(repository.list().expect("listed").is_empty());
}

#[test]
fn recent_lists_newest_first_within_limit() {
    let (service, _) = build_service();
    service.remember_at("march", at(3, 1)).expect("stored");
    service.remember_at("december", at(12, 1)).expect("stored");
    service.remember_at("june", at(6, 1)).expect("stored");

    let contents: Vec<String> = service
        .recent(2)
        .expect("listed")
        .into_iter()
        .map(|fact| fact.content)
        .collect();
    assert_eq!(contents, vec!["december", "june"]);
}

#[test]
fn same_timestamp_prefers_later_fact() {
    let (service, _) = build_service();
    service.remember_at("first", at(4, 4)).expect("stored");
    service.remember_at("second", at(4, 4)).expect("stored");

    let facts = service.recent(10).expect("listed");
    assert_eq!(facts[0].content, "second");
}

#[test]
fn seed_loads_ten_facts_in_date_order() {
    let service = seeded_service();
    let facts = service.recent(100).expect("listed");

    assert_eq!(facts.len(), 10);
    assert_eq!(
        facts[0].content,
        "Humans share about 60% of their DNA with bananas."
    );
    assert_eq!(facts[9].content, "Honey never spoils.");
    assert!(facts
        .windows(2)
        .all(|pair| pair[0].created_date >= pair[1].created_date));
}

#[test]
fn facts_after_seeding_continue_the_sequence() {
    let service = seeded_service();
    let fact = service.remember("Sunny had a bath").expect("stored");
    assert_eq!(fact.id, FactId(11));
    assert_eq!(service.recent(1).expect("listed")[0].id, FactId(11));
}

#[test]
fn forget_twice_reports_not_found() {
    let (service, _) = build_service();
    let fact = service.remember("Call Sarah on Sunday").expect("stored");

    let removed = service.forget(fact.id).expect("deleted");
    assert_eq!(removed.content, "Call Sarah on Sunday");
    assert!(matches!(
        service.forget(fact.id),
        Err(FactError::NotFound(id)) if id == fact.id
    ));
}

#[test]
fn repository_failures_propagate() {
    let service = FactService::new(Arc::new(UnavailableRepository));

    match service.remember("anything") {
        Err(FactError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
    assert!(matches!(
        service.forget(FactId(1)),
        Err(FactError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn zero_page_size_keeps_default() {
    let (service, _) = build_service();
    let service = service.with_page_size(0);
    assert_eq!(service.page_size(), 10);
    assert_eq!(service.with_page_size(3).page_size(), 3);
}
