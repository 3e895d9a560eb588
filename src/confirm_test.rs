use super::*;

#[test]
fn subscriber_prompt_names_the_subscriber() {
    let prompt = ConfirmKind::Subscriber.prompt(Some("ada@example.com"), Some("5"));
    assert_eq!(
        prompt.body,
        PromptBody::Text("Are you sure you want to delete ada@example.com from the list of subscribers?".into())
    );
    assert_eq!(prompt.confirm_attr, "data-subscriber-id");
    assert_eq!(prompt.target_id, "5");
}

#[test]
fn post_prompt_is_markup_with_url() {
    let prompt = ConfirmKind::Post.prompt(Some("/posts/rust-notes"), Some("12"));
    let PromptBody::Html(html) = prompt.body else {
        panic!("post prompt should be markup");
    };
    assert!(html.starts_with("You are about to delete the post with the URL: <br> <i><u>/posts/rust-notes</u></i>"));
    assert!(html.contains("[images and audios]"));
    assert!(html.ends_with("<b>ARE YOU SURE YOU WANT TO PROCEED?</b>"));
    assert_eq!(prompt.confirm_attr, "data-post-id");
    assert_eq!(prompt.target_id, "12");
}

#[test]
fn reopening_with_another_trigger_replaces_payload() {
    let first = ConfirmKind::Subscriber.prompt(Some("a"), Some("1"));
    let second = ConfirmKind::Subscriber.prompt(Some("b"), Some("2"));
    assert_ne!(first, second);
    assert_eq!(second.target_id, "2");
}

#[test]
fn missing_attributes_render_empty() {
    let prompt = ConfirmKind::Subscriber.prompt(None, None);
    assert_eq!(prompt.body, PromptBody::Text("Are you sure you want to delete  from the list of subscribers?".into()));
    assert_eq!(prompt.target_id, "");
}

#[test]
fn trigger_attrs_per_kind() {
    assert_eq!(ConfirmKind::Subscriber.trigger_attrs(), ("data-bs-delsubname", "data-bs-delsubid"));
    assert_eq!(ConfirmKind::Post.trigger_attrs(), ("data-bs-delposturl", "data-bs-delpostid"));
}
