use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_places_newest_first() {
    let mut state = ToastState::default();
    state.push(Notice::info("first"));
    state.push(Notice::info("second"));
    let titles: Vec<&str> = state.items.iter().map(|t| t.notice.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn push_assigns_distinct_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::info("a"));
    let b = state.push(Notice::info("b"));
    assert_ne!(a, b);
}

#[test]
fn stack_is_bounded() {
    let mut state = ToastState::default();
    for n in 0..(MAX_TOASTS + 2) {
        state.push(Notice::info(&format!("toast {n}")));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].notice.title, format!("toast {}", MAX_TOASTS + 1));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(Notice::info("keep"));
    let drop = state.push(Notice::error("Login failed", "Invalid email or password"));
    state.dismiss(drop);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}
