use super::*;

#[test]
fn default_should_hide_tilt() {
    assert!(!ShowTiltState::default().show_tilt);
}

#[test]
fn toggle_should_set_flag() {
    let state = Rc::new(ShowTiltState::default());

    let shown = state.clone().reduce(ShowTiltAction::Toggle(true));
    assert!(shown.show_tilt);
    assert!(!Rc::ptr_eq(&state, &shown));

    let hidden = shown.clone().reduce(ShowTiltAction::Toggle(false));
    assert!(!hidden.show_tilt);
    assert!(!Rc::ptr_eq(&shown, &hidden));
}

#[test]
fn toggle_to_same_value_should_not_transition() {
    let state = Rc::new(ShowTiltState::default());
    let next = state.clone().reduce(ShowTiltAction::Toggle(false));
    assert!(Rc::ptr_eq(&state, &next), "state should be unchanged");

    let shown = state.reduce(ShowTiltAction::Toggle(true));
    let again = shown.clone().reduce(ShowTiltAction::Toggle(true));
    assert!(Rc::ptr_eq(&shown, &again), "state should be unchanged");
}
