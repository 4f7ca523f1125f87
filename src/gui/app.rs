use iced::theme::Palette;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, container, scrollable, stack};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme, keyboard, window};

use super::{Message, sections, widgets};
use crate::nav::{NavMenu, Section, is_mobile};
use crate::theme;

pub const DEFAULT_WINDOW: Size = Size {
    width: 1200.0,
    height: 800.0,
};

pub struct PortfolioApp {
    nav: NavMenu,
    viewport: Size,
    scroll_y: f32,
}

impl PortfolioApp {
    pub fn new() -> Self {
        Self {
            nav: NavMenu::new(),
            viewport: DEFAULT_WINDOW,
            scroll_y: 0.0,
        }
    }

    pub fn title(&self) -> String {
        "Ken Yew - Portfolio".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MenuToggled => {
                self.nav.toggle();
                Task::none()
            }
            Message::LinkActivated(section) => {
                // The panel must be gone before the scroll lands.
                self.nav.link_activated();
                self.scroll_to(sections::section_offset(section, self.content()))
            }
            Message::OpenExternal(url) => {
                if let Err(err) = webbrowser::open(url) {
                    eprintln!("Failed to open {url}: {err}");
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport = size;
                self.nav.handle_resize(size.width);
                Task::none()
            }
            Message::PageScrolled(offset) => {
                self.scroll_y = offset.y;
                Task::none()
            }
            Message::SectionStepped(delta) => {
                let content = self.content();
                let current = sections::section_at(self.scroll_y, content).index() as i32;
                let last = Section::ALL.len() as i32 - 1;
                let target = Section::ALL[(current + delta).clamp(0, last) as usize];
                self.scroll_to(sections::section_offset(target, content))
            }
            Message::JumpToTop => self.scroll_to(0.0),
            Message::JumpToBottom => self.scroll_to(sections::page_height(self.content())),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = scrollable(sections::page(self.viewport))
            .id(page_scroll_id())
            .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset()))
            .width(Length::Fill)
            .height(Length::Fill);

        let base = column![widgets::header(&self.nav, self.viewport.width), page];

        if is_mobile(self.viewport.width) && self.nav.is_open() {
            let overlay = container(widgets::mobile_panel())
                .width(Length::Fill)
                .align_x(Alignment::End)
                .padding([
                    sections::HEADER_HEIGHT + theme::SPACING_XS,
                    theme::SPACING_MD,
                ]);
            stack![base, overlay].into()
        } else {
            base.into()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::custom(
            "folio".to_string(),
            Palette {
                background: theme::PRIMARY.into(),
                text: theme::TEXT_LIGHT.into(),
                primary: theme::ACCENT.into(),
                ..Theme::Dark.palette()
            },
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            keyboard::on_key_press(handle_key_press),
        ])
    }

    fn content(&self) -> Size {
        sections::content_size(self.viewport)
    }

    fn scroll_to(&self, y: f32) -> Task<Message> {
        scrollable::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y })
    }
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self::new()
    }
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

fn handle_key_press(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowDown | Named::PageDown) => {
            Some(Message::SectionStepped(1))
        }
        keyboard::Key::Named(Named::ArrowUp | Named::PageUp) => Some(Message::SectionStepped(-1)),
        keyboard::Key::Named(Named::Home) => Some(Message::JumpToTop),
        keyboard::Key::Named(Named::End) => Some(Message::JumpToBottom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::MenuState;

    fn phone() -> Size {
        Size::new(420.0, 800.0)
    }

    #[test]
    fn hamburger_then_link_click_scenario() {
        let mut app = PortfolioApp::new();
        let _ = app.update(Message::WindowResized(phone()));
        assert_eq!(app.nav.state(), MenuState::Collapsed);

        let _ = app.update(Message::MenuToggled);
        assert_eq!(app.nav.state(), MenuState::Expanded);

        let _ = app.update(Message::LinkActivated(Section::About));
        assert_eq!(app.nav.state(), MenuState::Collapsed);
    }

    #[test]
    fn widening_past_the_breakpoint_collapses_the_panel() {
        let mut app = PortfolioApp::new();
        let _ = app.update(Message::WindowResized(phone()));
        let _ = app.update(Message::MenuToggled);
        assert!(app.nav.is_open());

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 800.0)));
        assert!(!app.nav.is_open());
    }

    #[test]
    fn scroll_position_tracks_scroll_events() {
        let mut app = PortfolioApp::new();
        let _ = app.update(Message::PageScrolled(AbsoluteOffset { x: 0.0, y: 912.0 }));
        assert_eq!(app.scroll_y, 912.0);
    }
}
