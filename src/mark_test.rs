use super::*;
use crate::actions::{ActionResponse, Effect, Outcome};

const POST: PostRef = PostRef { user_id: 3, post_id: 7 };

#[test]
fn button_ids_map_to_states() {
    assert_eq!(MarkState::from_button_id("mark-post"), Some(MarkState::Unmarked));
    assert_eq!(MarkState::from_button_id("unmark-post"), Some(MarkState::Marked));
    assert_eq!(MarkState::from_button_id("delete-post"), None);
}

#[test]
fn toggled_flips_between_two_states() {
    assert_eq!(MarkState::Unmarked.toggled(), MarkState::Marked);
    assert_eq!(MarkState::Marked.toggled(), MarkState::Unmarked);
    assert_eq!(MarkState::Marked.toggled().toggled(), MarkState::Marked);
}

#[test]
fn transition_paths_put_user_before_post() {
    assert_eq!(MarkState::Unmarked.transition_path(POST), "/mark_post/3/7");
    assert_eq!(MarkState::Marked.transition_path(POST), "/unmark_post/3/7");
}

#[test]
fn marking_renders_unmark_button_with_same_ids() {
    let html = MarkState::Unmarked.toggled().button_html(POST);
    assert!(html.contains("id=\"unmark-post\""));
    assert!(html.contains("data-postid=\"7\""));
    assert!(html.contains("data-userid=\"3\""));
    assert!(html.contains("data-bs-title=\"This post is marked\""));
    assert!(html.contains("bi-bookmark-check-fill"));
}

#[test]
fn unmarking_renders_mark_button() {
    let html = MarkState::Marked.toggled().button_html(POST);
    assert!(html.contains("id=\"mark-post\""));
    assert!(html.contains("data-bs-title=\"Mark this post\""));
    assert!(html.contains("bi-bookmark-plus"));
}

#[test]
fn rendered_button_is_a_tooltip_trigger() {
    for state in [MarkState::Marked, MarkState::Unmarked] {
        let html = state.button_html(POST);
        assert!(html.starts_with("<a "));
        assert!(html.ends_with("</a>"));
        assert!(html.contains("data-bs-toggle=\"tooltip\""));
        assert!(html.contains("data-bs-custom-class=\"themed-tooltip\""));
    }
}

// =============================================================
// Effects
// =============================================================

#[test]
fn confirmed_mark_swaps_to_unmark_button_with_same_ids() {
    let resp: ActionResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    let effects = MarkState::Unmarked.effects(POST, resp.outcome());
    assert_eq!(effects, vec![Effect::SwapButton { to: MarkState::Marked, post: POST }]);

    let Effect::SwapButton { to, post } = &effects[0] else {
        panic!("expected a button swap");
    };
    assert_eq!(to.button_id(), "unmark-post");
    assert_eq!(*post, PostRef { user_id: 3, post_id: 7 });
}

#[test]
fn refused_mark_alerts_and_keeps_button() {
    let resp: ActionResponse = serde_json::from_str(r#"{"status":"error","message":"X"}"#).unwrap();
    let effects = MarkState::Unmarked.effects(POST, resp.outcome());
    assert_eq!(effects, vec![Effect::Alert("X".into())]);
    assert!(!effects.iter().any(|e| matches!(e, Effect::SwapButton { .. })));
}

#[test]
fn confirmed_unmark_swaps_to_mark_button() {
    assert_eq!(
        MarkState::Marked.effects(POST, Outcome::Success),
        vec![Effect::SwapButton { to: MarkState::Unmarked, post: POST }]
    );
}
