use std::sync::Arc;

use dogshouse::{
    Dog, DogQuery, DogRepository, DuckdbDogRepository, GetDogsUseCase, NewDog, SortField,
    SortOrder,
};
use tempfile::tempdir;
use tokio_util::sync::CancellationToken;

fn new_dog(name: &str, color: &str, tail_length: i32, weight: i32) -> NewDog {
    NewDog::new(name.to_string(), color.to_string(), tail_length, weight)
}

async fn seed(repo: &DuckdbDogRepository, cancel: &CancellationToken) {
    repo.add(new_dog("Neo", "red&amber", 22, 10), cancel)
        .await
        .expect("add Neo");
    repo.add(new_dog("Jessy", "black&white", 7, 7), cancel)
        .await
        .expect("add Jessy");
    repo.save_changes(cancel).await.expect("save_changes");
}

fn names(dogs: &[Dog]) -> Vec<&str> {
    dogs.iter().map(|d| d.name()).collect()
}

#[tokio::test]
async fn duckdb_dog_repository_assigns_ids_on_commit() {
    let repo = DuckdbDogRepository::in_memory().expect("duckdb init");
    let cancel = CancellationToken::new();

    repo.add(new_dog("Neo", "red", 5, 10), &cancel)
        .await
        .expect("add");
    assert!(!repo.name_exists("Neo", &cancel).await.expect("exists"));

    let saved = repo.save_changes(&cancel).await.expect("save_changes");
    assert_eq!(saved.len(), 1);
    assert!(saved[0].id() > 0);

    let found = repo
        .find_by_id(saved[0].id(), &cancel)
        .await
        .expect("find_by_id")
        .expect("dog exists");
    assert_eq!(found, saved[0]);
    assert!(repo.name_exists("Neo", &cancel).await.expect("exists"));
    assert!(!repo.name_exists("neo", &cancel).await.expect("exists"));
}

#[tokio::test]
async fn duckdb_dog_repository_lists_in_storage_order_and_sorted() {
    let repo = DuckdbDogRepository::in_memory().expect("duckdb init");
    let cancel = CancellationToken::new();
    seed(&repo, &cancel).await;

    let natural = repo
        .find_all(&DogQuery::new(), &cancel)
        .await
        .expect("find_all");
    assert_eq!(names(&natural), vec!["Neo", "Jessy"]);

    let by_weight = DogQuery::new().with_sort(Some(SortField::Weight), SortOrder::Asc);
    let sorted = repo.find_all(&by_weight, &cancel).await.expect("find_all");
    assert_eq!(names(&sorted), vec!["Jessy", "Neo"]);

    let by_tail_desc = DogQuery::new().with_sort(Some(SortField::TailLength), SortOrder::Desc);
    let sorted = repo
        .find_all(&by_tail_desc, &cancel)
        .await
        .expect("find_all");
    assert_eq!(names(&sorted), vec!["Neo", "Jessy"]);
}

#[tokio::test]
async fn duckdb_dog_repository_paginates_after_sorting() {
    let repo = DuckdbDogRepository::in_memory().expect("duckdb init");
    let cancel = CancellationToken::new();
    seed(&repo, &cancel).await;

    let second_page = DogQuery::new()
        .with_sort(Some(SortField::Name), SortOrder::Asc)
        .with_page_number(2)
        .with_page_size(1);
    let page = repo
        .find_all(&second_page, &cancel)
        .await
        .expect("find_all");
    assert_eq!(names(&page), vec!["Neo"]);

    let size_only = DogQuery::new().with_page_size(1);
    let page = repo.find_all(&size_only, &cancel).await.expect("find_all");
    assert_eq!(names(&page), vec!["Neo"]);

    let past_end = DogQuery::new().with_page_number(5).with_page_size(10);
    assert!(repo
        .find_all(&past_end, &cancel)
        .await
        .expect("find_all")
        .is_empty());
}

#[tokio::test]
async fn duckdb_dog_repository_huge_offset_is_past_the_end() {
    let repo = DuckdbDogRepository::in_memory().expect("duckdb init");
    let cancel = CancellationToken::new();
    seed(&repo, &cancel).await;

    let max_page = DogQuery::new()
        .with_page_number(u32::MAX)
        .with_page_size(u32::MAX);
    assert!(repo
        .find_all(&max_page, &cancel)
        .await
        .expect("find_all")
        .is_empty());

    let use_case = GetDogsUseCase::new(Arc::new(repo));
    let dogs = use_case
        .execute(None, None, 3_000_000_000, 4_000_000_000, &cancel)
        .await
        .expect("execute");
    assert!(dogs.is_empty());
}

#[tokio::test]
async fn duckdb_dog_repository_unique_name_is_enforced_at_commit() {
    let repo = DuckdbDogRepository::in_memory().expect("duckdb init");
    let cancel = CancellationToken::new();
    seed(&repo, &cancel).await;

    // A second unit of work that skipped the existence check.
    let racing = DuckdbDogRepository::with_connection(repo.shared_connection());
    racing
        .add(new_dog("Neo", "white", 1, 1), &cancel)
        .await
        .expect("add");

    let err = racing.save_changes(&cancel).await.unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.message(), "A dog with the name 'Neo' already exists.");

    let all = repo
        .find_all(&DogQuery::new(), &cancel)
        .await
        .expect("find_all");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn duckdb_dog_repository_survives_reopen() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("dogshouse.duckdb");
    let cancel = CancellationToken::new();

    let id = {
        let repo = DuckdbDogRepository::new(&db_path).expect("duckdb init");
        repo.add(new_dog("Neo", "red", 5, 10), &cancel)
            .await
            .expect("add");
        repo.save_changes(&cancel).await.expect("save")[0].id()
    };

    let reopened = DuckdbDogRepository::new(&db_path).expect("duckdb reopen");
    let dog = reopened
        .find_by_id(id, &cancel)
        .await
        .expect("find_by_id")
        .expect("dog exists");
    assert_eq!(dog.name(), "Neo");

    reopened
        .add(new_dog("Jessy", "black", 3, 7), &cancel)
        .await
        .expect("add");
    let saved = reopened.save_changes(&cancel).await.expect("save");
    assert!(saved[0].id() > id);
}

#[tokio::test]
async fn duckdb_dog_repository_observes_cancellation() {
    let repo = DuckdbDogRepository::in_memory().expect("duckdb init");
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = repo
        .find_all(&DogQuery::new(), &cancel)
        .await
        .unwrap_err();
    assert!(err.is_cancelled());

    let err = repo.find_by_id(1, &cancel).await.unwrap_err();
    assert!(err.is_cancelled());
}
