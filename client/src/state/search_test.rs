use super::*;

#[test]
fn search_draft_defaults_to_empty_input() {
    let s = SearchDraft::default();
    assert!(s.input.is_empty());
}

#[test]
fn submit_returns_exact_input_and_keeps_it() {
    let mut s = SearchDraft::default();
    s.set_input("  Tokyo at night ".to_owned());

    assert_eq!(s.submit(), "  Tokyo at night ");
    assert_eq!(s.input, "  Tokyo at night ");
}

#[test]
fn empty_input_is_submitted_as_is() {
    let s = SearchDraft::default();
    assert_eq!(s.submit(), "");
}

#[test]
fn later_keystrokes_replace_the_term() {
    let mut s = SearchDraft::default();
    s.set_input("dog".to_owned());
    s.set_input("dogs".to_owned());
    assert_eq!(s.submit(), "dogs");
}
