use test_utils::reply_fixture;

use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

fn messages() -> Vec<Message> {
    return vec![
        Message::new(Author::BrandCraft, "Hi there!"),
        Message::new(Author::BrandCraft, reply_fixture()),
    ];
}

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::default();

    assert_eq!(bubble_list.cache.len(), 0);
    assert_eq!(bubble_list.len(), 0);
}

#[test]
fn it_caches_lines() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 80);

    assert_eq!(bubble_list.cache.len(), 2);
}

#[test]
fn it_returns_correct_length() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 80);

    // Each bubble adds a top and bottom border.
    assert_eq!(bubble_list.len(), 3 + 12);
}

#[test]
fn it_drops_removed_messages() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&messages(), 80);
    bubble_list.set_messages(&messages()[..1], 80);

    assert_eq!(bubble_list.cache.len(), 1);
    assert_eq!(bubble_list.len(), 3);
}

#[test]
fn it_refreshes_replaced_messages() {
    let mut bubble_list = BubbleList::default();
    bubble_list.set_messages(&[Message::new(Author::BrandCraft, "Hi there!")], 80);
    bubble_list.set_messages(
        &[Message::new_with_type(
            Author::BrandCraft,
            MessageType::Error,
            "Hi there!\nSomething broke.",
        )],
        80,
    );

    assert_eq!(bubble_list.len(), 4);
    assert_eq!(bubble_list.cache[&0].mtype, MessageType::Error);
}
