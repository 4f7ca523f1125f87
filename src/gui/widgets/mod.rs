use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, Color, Element, Length, Shadow, Theme, Vector, border};

use super::Message;
use super::sections;
use crate::catalog::{self, ProjectRecord};
use crate::nav::{NavMenu, Section, is_mobile};
use crate::theme;

/// Fixed top bar: logo on the left, then either the inline link row or
/// the hamburger, depending on the viewport width.
pub fn header(nav: &NavMenu, width: f32) -> Element<'static, Message> {
    let logo = text("Portfolio").size(24).color(theme::TEXT_LIGHT);

    let trailing: Element<'static, Message> = if is_mobile(width) {
        hamburger(nav.is_open())
    } else {
        desktop_links()
    };

    container(
        row![logo, horizontal_space(), trailing]
            .align_y(Alignment::Center)
            .spacing(theme::SPACING_MD),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sections::HEADER_HEIGHT))
    .padding([0.0, theme::SPACING_MD])
    .style(glass)
    .into()
}

fn desktop_links() -> Element<'static, Message> {
    let mut links = row![].spacing(theme::SPACING_SM).align_y(Alignment::Center);
    for section in Section::ALL {
        links = links.push(nav_link(section));
    }
    links.push(resume_button()).into()
}

fn hamburger(open: bool) -> Element<'static, Message> {
    button(text(if open { "\u{2715}" } else { "\u{2630}" }).size(22))
        .on_press(Message::MenuToggled)
        .style(link_style)
        .padding([theme::SPACING_XS, theme::SPACING_SM])
        .into()
}

/// Dropdown panel shown top-right on narrow viewports while the menu is
/// expanded. Same link set as the inline row.
pub fn mobile_panel() -> Element<'static, Message> {
    let mut links = column![].spacing(theme::SPACING_SM).align_x(Alignment::Start);
    for section in Section::ALL {
        links = links.push(nav_link(section));
    }
    container(links.push(resume_button()))
        .padding(theme::SPACING_MD)
        .style(panel_style)
        .into()
}

fn nav_link(section: Section) -> Element<'static, Message> {
    button(text(section.label()).size(16).color(theme::TEXT_LIGHT))
        .on_press(Message::LinkActivated(section))
        .style(link_style)
        .padding([theme::SPACING_XS, theme::SPACING_SM])
        .into()
}

fn resume_button() -> Element<'static, Message> {
    button(text("Resume").size(16).color(theme::TEXT_DARK))
        .on_press(Message::OpenExternal(catalog::RESUME_URL))
        .style(pill_style)
        .padding([6.0, 16.0])
        .into()
}

/// One project card: screenshot, title, description, ordered tag chips,
/// and the two outbound links.
pub fn project_card(record: &ProjectRecord) -> Element<'static, Message> {
    let screenshot = image(image::Handle::from_path(record.image))
        .width(Length::Fill)
        .height(Length::Fixed(180.0))
        .content_fit(iced::ContentFit::Cover);

    let mut tags = column![].spacing(theme::SPACING_XS);
    for chunk in record.tech_stack.chunks(4) {
        let mut line = row![].spacing(theme::SPACING_XS);
        for tag in chunk {
            line = line.push(tag_chip(tag));
        }
        tags = tags.push(line);
    }

    let links = row![
        outbound_link("GitHub", record.github_url),
        outbound_link("Live", record.live_url),
    ]
    .spacing(theme::SPACING_MD);

    let body = column![
        text(record.title).size(20).color(theme::TEXT_LIGHT),
        text(record.description).size(14).color(theme::TEXT_LIGHT),
        tags,
        links,
    ]
    .spacing(theme::SPACING_SM)
    .padding(theme::SPACING_MD);

    container(column![screenshot, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(card_style)
        .into()
}

pub fn tag_chip(label: &'static str) -> Element<'static, Message> {
    container(text(label).size(12).color(theme::ACCENT))
        .padding([4.0, 10.0])
        .style(chip_style)
        .into()
}

pub fn outbound_link(label: &'static str, url: &'static str) -> Element<'static, Message> {
    button(text(label).size(14).color(theme::ACCENT))
        .on_press(Message::OpenExternal(url))
        .style(link_style)
        .padding([theme::SPACING_XS, theme::SPACING_SM])
        .into()
}

pub fn footer() -> Element<'static, Message> {
    let year = time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .year();

    container(
        text(format!("\u{a9} {year} Ken Yew. All rights reserved."))
            .size(14)
            .color(theme::TEXT_LIGHT),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sections::FOOTER_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(glass)
    .into()
}

fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from(theme::GLASS_BACKGROUND).into()),
        ..container::Style::default()
    }
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from(theme::SECONDARY).into()),
        border: border::rounded(12.0),
        shadow: Shadow {
            color: Color::from_rgba8(0, 0, 0, 0.2),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        },
        ..container::Style::default()
    }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from(theme::GLASS_BACKGROUND).into()),
        border: border::rounded(12.0),
        ..container::Style::default()
    }
}

fn chip_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from(theme::GLASS_CARD).into()),
        border: border::rounded(20.0),
        ..container::Style::default()
    }
}

fn link_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: theme::TEXT_LIGHT.into(),
        border: border::rounded(4.0),
        ..button::Style::default()
    };
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Color::from(theme::HOVER_OVERLAY).into()),
            ..base
        },
        _ => base,
    }
}

fn pill_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: Some(Color::from(theme::ACCENT).into()),
        text_color: theme::TEXT_DARK.into(),
        border: border::rounded(20.0),
        ..button::Style::default()
    };
    if matches!(status, button::Status::Hovered) {
        style.shadow = Shadow {
            color: Color::from_rgba8(0xD6, 0xA7, 0x7A, 0.4),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        };
    }
    style
}
