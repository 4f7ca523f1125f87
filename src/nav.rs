use crate::theme;

/// Visibility of the mobile navigation panel. Exactly one of the two
/// states holds at any time; the panel starts collapsed on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

/// An in-page navigation target. The resume affordance is an outbound
/// link, not a section, and lives in the catalog module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Projects => 1,
            Section::Skills => 2,
            Section::Contact => 3,
        }
    }
}

/// At or below this width the header shows the hamburger/panel pair
/// instead of the inline link row. Both rendering surfaces must consult
/// the same predicate so they can never show both or neither.
pub fn is_mobile(width: f32) -> bool {
    width <= theme::BREAKPOINT_SM
}

/// Owns the menu-open flag for the navigation header.
///
/// The same link set is rendered inline on wide viewports and inside the
/// collapsible panel on narrow ones; the panel closes itself whenever one
/// of its links is activated, before the navigation side effect runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    state: MenuState,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Expanded
    }

    /// Inverts the panel state. Cannot fail.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        };
    }

    /// Collapses the panel unconditionally. Idempotent.
    pub fn close(&mut self) {
        self.state = MenuState::Collapsed;
    }

    /// A link inside the panel was followed; the panel must not stay
    /// open behind the navigation.
    pub fn link_activated(&mut self) {
        self.close();
    }

    /// Collapses the panel once the viewport is wide enough for the
    /// inline link row, so the two surfaces never show together.
    pub fn handle_resize(&mut self, width: f32) {
        if !is_mobile(width) {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_ordered() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn breakpoint_is_inclusive_on_the_mobile_side() {
        assert!(is_mobile(theme::BREAKPOINT_SM));
        assert!(!is_mobile(theme::BREAKPOINT_SM + 1.0));
    }
}
