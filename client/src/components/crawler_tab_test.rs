use super::*;
use api::types::{CrawlContent, FaqEntry};

fn result_with_faq(faq: Vec<FaqEntry>) -> CrawlResult {
    CrawlResult {
        id: "c-1".to_owned(),
        website_url: "https://example.com".to_owned(),
        content: CrawlContent { title: "Example Website".to_owned(), pages: vec![], faq },
    }
}

#[test]
fn faq_section_is_omitted_when_there_are_no_entries() {
    assert!(!has_faq(&result_with_faq(vec![])));
}

#[test]
fn faq_section_renders_when_entries_exist() {
    let result = result_with_faq(vec![FaqEntry {
        question: "What do you do?".to_owned(),
        answer: "We provide innovative solutions for businesses.".to_owned(),
    }]);
    assert!(has_faq(&result));
}
