//! Section views and the layout math behind scroll targets.
//!
//! Offsets and heights are pure functions of the viewport so the targets
//! used by `update` always agree with the heights laid out by `view`.

use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Size};

use super::Message;
use super::widgets;
use crate::catalog;
use crate::nav::Section;
use crate::theme;

pub const HEADER_HEIGHT: f32 = 72.0;
pub const FOOTER_HEIGHT: f32 = 96.0;
pub const CARD_MIN_WIDTH: f32 = 280.0;
pub const CARD_HEIGHT: f32 = 480.0;

const SECTION_MIN_HEIGHT: f32 = 360.0;
const PAGE_PADDING: f32 = theme::SPACING_MD;
/// Title block and vertical padding around the project grid.
const PROJECTS_CHROME: f32 = 160.0;
const MAX_CONTENT_WIDTH: f32 = 1200.0;

/// The part of the window below the fixed header.
pub fn content_size(viewport: Size) -> Size {
    Size::new(
        viewport.width,
        (viewport.height - HEADER_HEIGHT).max(SECTION_MIN_HEIGHT),
    )
}

/// How many project cards fit side by side at this width.
pub fn grid_columns(width: f32) -> usize {
    let usable = (width - 2.0 * PAGE_PADDING).max(CARD_MIN_WIDTH);
    ((usable / (CARD_MIN_WIDTH + theme::SPACING_LG)) as usize).max(1)
}

pub fn grid_rows(columns: usize) -> usize {
    catalog::projects().len().div_ceil(columns)
}

pub fn section_height(section: Section, content: Size) -> f32 {
    match section {
        Section::Projects => {
            let rows = grid_rows(grid_columns(content.width)) as f32;
            let grid = rows * CARD_HEIGHT + (rows - 1.0) * theme::SPACING_LG;
            content.height.max(grid + PROJECTS_CHROME)
        }
        _ => content.height,
    }
}

/// Scroll offset of a section within the page.
pub fn section_offset(section: Section, content: Size) -> f32 {
    Section::ALL[..section.index()]
        .iter()
        .map(|s| section_height(*s, content))
        .sum()
}

pub fn page_height(content: Size) -> f32 {
    Section::ALL
        .iter()
        .map(|s| section_height(*s, content))
        .sum::<f32>()
        + FOOTER_HEIGHT
}

/// Which section the given scroll offset falls into.
pub fn section_at(scroll_y: f32, content: Size) -> Section {
    let mut bottom = 0.0;
    for section in Section::ALL {
        bottom += section_height(section, content);
        if scroll_y < bottom - 1.0 {
            return section;
        }
    }
    Section::Contact
}

/// The full scrollable page: four sections in order, then the footer.
pub fn page(viewport: Size) -> Element<'static, Message> {
    let content = content_size(viewport);
    column![
        about(content),
        projects(content),
        skills(content),
        contact(content),
        widgets::footer(),
    ]
    .width(Length::Fill)
    .into()
}

fn about(content: Size) -> Element<'static, Message> {
    let body = column![
        text("Hi, I'm Ken Yew.").size(40).color(theme::TEXT_LIGHT),
        text("I build web experiences, from notebook editors to AI-powered dashboards.")
            .size(18)
            .color(theme::TEXT_LIGHT),
    ]
    .spacing(theme::SPACING_MD)
    .align_x(Alignment::Center);

    section_frame(Section::About, content, body.into())
}

fn projects(content: Size) -> Element<'static, Message> {
    let columns = grid_columns(content.width);

    let mut grid = column![].spacing(theme::SPACING_LG).width(Length::Fill);
    for chunk in catalog::projects().chunks(columns) {
        let mut cards = row![].spacing(theme::SPACING_LG).width(Length::Fill);
        for record in chunk {
            cards = cards.push(
                container(widgets::project_card(record))
                    .width(Length::FillPortion(1))
                    .height(Length::Fixed(CARD_HEIGHT)),
            );
        }
        // Pad short rows so cards keep equal widths.
        for _ in chunk.len()..columns {
            cards = cards.push(horizontal_space().width(Length::FillPortion(1)));
        }
        grid = grid.push(cards);
    }

    let body = column![section_title("Featured Projects"), grid]
        .spacing(theme::SPACING_LG)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    section_frame(Section::Projects, content, body.into())
}

fn skills(content: Size) -> Element<'static, Message> {
    let mut chips = column![].spacing(theme::SPACING_SM).align_x(Alignment::Center);
    for chunk in catalog::SKILLS.chunks(4) {
        let mut line = row![].spacing(theme::SPACING_SM);
        for skill in chunk {
            line = line.push(widgets::tag_chip(skill));
        }
        chips = chips.push(line);
    }

    let body = column![section_title("Skills"), chips]
        .spacing(theme::SPACING_LG)
        .align_x(Alignment::Center);

    section_frame(Section::Skills, content, body.into())
}

fn contact(content: Size) -> Element<'static, Message> {
    let body = column![
        section_title("Get In Touch"),
        text("Open to internships, collaborations, and interesting problems.")
            .size(16)
            .color(theme::TEXT_LIGHT),
        row![
            widgets::outbound_link("Email Me", catalog::CONTACT_EMAIL),
            widgets::outbound_link("GitHub", catalog::GITHUB_PROFILE_URL),
        ]
        .spacing(theme::SPACING_MD),
    ]
    .spacing(theme::SPACING_MD)
    .align_x(Alignment::Center);

    section_frame(Section::Contact, content, body.into())
}

fn section_title(title: &'static str) -> Element<'static, Message> {
    text(title).size(32).color(theme::TEXT_LIGHT).into()
}

fn section_frame(
    section: Section,
    content: Size,
    body: Element<'static, Message>,
) -> Element<'static, Message> {
    container(
        container(body)
            .width(Length::Fill)
            .max_width(MAX_CONTENT_WIDTH)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(section_height(section, content)))
    .padding([theme::SPACING_LG, PAGE_PADDING])
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Size = Size {
        width: 1200.0,
        height: 800.0,
    };
    const PHONE: Size = Size {
        width: 420.0,
        height: 800.0,
    };

    #[test]
    fn columns_shrink_with_the_viewport() {
        assert_eq!(grid_columns(PHONE.width), 1);
        assert!(grid_columns(DESKTOP.width) >= 3);
    }

    #[test]
    fn offsets_are_cumulative_and_ordered() {
        let content = content_size(DESKTOP);
        let mut last = -1.0;
        for section in Section::ALL {
            let offset = section_offset(section, content);
            assert!(offset > last);
            last = offset;
        }
        assert_eq!(section_offset(Section::About, content), 0.0);
    }

    #[test]
    fn section_at_inverts_section_offset() {
        for viewport in [DESKTOP, PHONE] {
            let content = content_size(viewport);
            for section in Section::ALL {
                assert_eq!(section_at(section_offset(section, content), content), section);
            }
        }
    }

    #[test]
    fn single_column_projects_section_outgrows_the_viewport() {
        let content = content_size(PHONE);
        assert!(section_height(Section::Projects, content) > content.height);
        assert_eq!(section_height(Section::About, content), content.height);
    }
}
