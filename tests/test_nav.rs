use folio::{MenuState, NavMenu, is_mobile};
use folio::theme::BREAKPOINT_SM;

#[test]
fn starts_collapsed() {
    let menu = NavMenu::new();
    assert_eq!(menu.state(), MenuState::Collapsed);
    assert!(!menu.is_open());
}

#[test]
fn toggle_parity() {
    // Even toggle counts land on Collapsed, odd ones on Expanded.
    let mut menu = NavMenu::new();
    for count in 1..=100 {
        menu.toggle();
        let expected = if count % 2 == 0 {
            MenuState::Collapsed
        } else {
            MenuState::Expanded
        };
        assert_eq!(menu.state(), expected, "after {count} toggles");
    }
}

#[test]
fn close_is_idempotent() {
    let mut menu = NavMenu::new();
    menu.toggle();
    assert!(menu.is_open());

    menu.close();
    assert_eq!(menu.state(), MenuState::Collapsed);
    menu.close();
    assert_eq!(menu.state(), MenuState::Collapsed);
}

#[test]
fn link_activation_closes_the_panel() {
    let mut menu = NavMenu::new();
    menu.toggle();
    menu.link_activated();
    assert!(!menu.is_open());

    // Activating a link while already collapsed is a no-op.
    menu.link_activated();
    assert!(!menu.is_open());
}

#[test]
fn widening_past_the_breakpoint_closes_the_panel() {
    let mut menu = NavMenu::new();
    menu.toggle();

    menu.handle_resize(BREAKPOINT_SM);
    assert!(menu.is_open(), "narrow resize keeps the panel");

    menu.handle_resize(BREAKPOINT_SM + 1.0);
    assert!(!menu.is_open(), "desktop width collapses the panel");
}

#[test]
fn both_surfaces_share_one_breakpoint() {
    assert!(is_mobile(BREAKPOINT_SM - 0.5));
    assert!(is_mobile(BREAKPOINT_SM));
    assert!(!is_mobile(BREAKPOINT_SM + 0.5));
}
