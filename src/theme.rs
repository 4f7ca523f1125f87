//! Static visual configuration: palette, spacing, breakpoints, and the
//! declarative motion metadata for the mobile panel and project cards.
//!
//! Everything here is plain data so the library builds without the GUI
//! feature; colors convert to `iced::Color` only when it is enabled.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(feature = "gui")]
impl From<Rgba> for iced::Color {
    fn from(c: Rgba) -> Self {
        iced::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

// Palette: warm browns with a tan accent.
pub const PRIMARY: Rgba = Rgba::opaque(0x3E, 0x2C, 0x23);
pub const SECONDARY: Rgba = Rgba::opaque(0x5A, 0x3E, 0x36);
pub const ACCENT: Rgba = Rgba::opaque(0xD6, 0xA7, 0x7A);
pub const TEXT_LIGHT: Rgba = Rgba::opaque(0xFD, 0xFB, 0xF9);
pub const TEXT_DARK: Rgba = PRIMARY;
pub const GLASS_BACKGROUND: Rgba = Rgba::with_alpha(0xFF, 0xFF, 0xFF, 0.06);
pub const GLASS_CARD: Rgba = Rgba::with_alpha(0x3E, 0x2C, 0x23, 0.2);
pub const HOVER_OVERLAY: Rgba = Rgba::with_alpha(0xFF, 0xFF, 0xFF, 0.1);

// Spacing scale, 1rem = 16px.
pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 32.0;
pub const SPACING_XL: f32 = 64.0;

// Viewport breakpoints. `sm` is the one the navigation header switches on.
pub const BREAKPOINT_SM: f32 = 640.0;
pub const BREAKPOINT_MD: f32 = 768.0;
pub const BREAKPOINT_LG: f32 = 1024.0;
pub const BREAKPOINT_XL: f32 = 1280.0;

pub const TRANSITION_DEFAULT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Ease,
    EaseOut,
}

/// A start or end pose for an enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

/// Declarative enter/exit transition metadata. Consumed by whatever
/// animation layer the rendering target provides; no behaviour attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub hidden: Keyframe,
    pub visible: Keyframe,
    pub enter: Duration,
    pub exit: Duration,
    pub easing: Easing,
}

pub const MOBILE_MENU_MOTION: Motion = Motion {
    hidden: Keyframe {
        opacity: 0.0,
        offset_y: -10.0,
        scale: 0.95,
    },
    visible: Keyframe {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    },
    enter: TRANSITION_DEFAULT,
    exit: Duration::from_millis(200),
    easing: Easing::Ease,
};

pub const PROJECT_CARD_MOTION: Motion = Motion {
    hidden: Keyframe {
        opacity: 0.0,
        offset_y: 20.0,
        scale: 1.0,
    },
    visible: Keyframe {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    },
    enter: Duration::from_millis(500),
    exit: Duration::from_millis(500),
    easing: Easing::Ease,
};

/// Delay between successive project cards entering.
pub const PROJECT_CARD_STAGGER: Duration = Duration::from_millis(200);
