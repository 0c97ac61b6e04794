use super::*;

#[test]
fn demo_dataset_matches_the_canned_account() {
    let repo = MemoryRepositories::demo();
    assert_eq!(repo.websites.len(), 2);
    assert_eq!(repo.assistants.len(), 1);
    assert_eq!(repo.usage.len(), 3);
    assert_eq!(repo.assistants[0].config.name, "Customer Support");
    assert_eq!(repo.assistants[0].website_id, repo.websites[0].id);
}

#[test]
fn repositories_serve_their_slices() {
    let repo = MemoryRepositories::demo();

    let websites = futures::executor::block_on(repo.list_websites()).unwrap();
    assert_eq!(websites[1].url, "mysite.com");

    let assistants = futures::executor::block_on(repo.list_assistants()).unwrap();
    assert_eq!(assistants[0].id, "789");

    let usage = futures::executor::block_on(repo.list_usage()).unwrap();
    assert_eq!(usage.iter().map(|r| r.duration).sum::<u32>(), 1650);
}

#[test]
fn an_empty_repository_serves_empty_lists() {
    let repo = MemoryRepositories::default();
    let websites = futures::executor::block_on(repo.list_websites()).unwrap();
    assert!(websites.is_empty());
}
