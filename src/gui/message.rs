use iced::Size;
use iced::widget::scrollable::AbsoluteOffset;

use crate::nav::Section;

#[derive(Debug, Clone)]
pub enum Message {
    /// Hamburger pressed.
    MenuToggled,
    /// An in-page navigation link was followed, from either surface.
    LinkActivated(Section),
    /// An outbound link (resume, source, live demo, contact) was pressed.
    OpenExternal(&'static str),
    WindowResized(Size),
    PageScrolled(AbsoluteOffset),
    /// Keyboard navigation: move this many sections forward or back.
    SectionStepped(i32),
    JumpToTop,
    JumpToBottom,
}
