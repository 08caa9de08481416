//! Tests for page arithmetic and navigation transitions

use nb2pdf::cli::pager::{page_count, view, NavCommand};
use nb2pdf::pipeline::FileEntry;

fn entries(n: usize) -> Vec<FileEntry> {
    (0..n)
        .map(|i| FileEntry {
            name: format!("notebook_{i}.ipynb"),
            size_bytes: 1024 * (i as u64 + 1),
        })
        .collect()
}

#[test]
fn test_page_count_rounds_up() {
    assert_eq!(page_count(0, 20), 1);
    assert_eq!(page_count(1, 20), 1);
    assert_eq!(page_count(20, 20), 1);
    assert_eq!(page_count(21, 20), 2);
    assert_eq!(page_count(45, 20), 3);
}

#[test]
fn test_single_page_is_last_so_no_navigation_prompt() {
    let list = entries(5);
    let page = view(&list, 0, 20);

    assert_eq!(page.page_count, 1);
    // browse() only prompts on non-final pages
    assert!(page.is_last());
}

#[test]
fn test_view_covers_expected_slice() {
    let list = entries(45);

    let first = view(&list, 0, 20);
    assert_eq!(first.entries.len(), 20);
    assert_eq!(first.first_index, 1);

    let last = view(&list, 2, 20);
    assert_eq!(last.entries.len(), 5);
    assert_eq!(last.first_index, 41);
    assert!(last.is_last());
}

#[test]
fn test_view_clamps_out_of_range_page_index() {
    let list = entries(45);
    let page = view(&list, 99, 20);

    assert_eq!(page.page_index, 2);
    assert!(page.is_last());
}

#[test]
fn test_nav_parse() {
    assert_eq!(NavCommand::parse("n"), Some(NavCommand::Next));
    assert_eq!(NavCommand::parse(" N "), Some(NavCommand::Next));
    assert_eq!(NavCommand::parse("p"), Some(NavCommand::Previous));
    assert_eq!(NavCommand::parse(""), Some(NavCommand::Continue));
    assert_eq!(NavCommand::parse("c"), Some(NavCommand::Continue));
    assert_eq!(NavCommand::parse("bogus"), None);
}

#[test]
fn test_nav_apply_clamps_to_range() {
    assert_eq!(NavCommand::Next.apply(0, 3), 1);
    assert_eq!(NavCommand::Next.apply(2, 3), 2);
    assert_eq!(NavCommand::Previous.apply(0, 3), 0);
    assert_eq!(NavCommand::Previous.apply(2, 3), 1);
    assert_eq!(NavCommand::Continue.apply(1, 3), 1);
}
