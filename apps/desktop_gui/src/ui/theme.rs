//! Stone/emerald palette in a light and a dark preset.

use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    StoneLight,
    StoneDark,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            Self::StoneLight => "Light",
            Self::StoneDark => "Dark",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::StoneLight => Self::StoneDark,
            Self::StoneDark => Self::StoneLight,
        }
    }
}

/// Resolved colors for one preset. Plain data so render code can copy it out
/// of `&self` before borrowing `ui` mutably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page_bg: egui::Color32,
    pub surface_bg: egui::Color32,
    pub card_stroke: egui::Color32,
    pub hover_tint: egui::Color32,
    pub heading_text: egui::Color32,
    pub body_text: egui::Color32,
    pub muted_text: egui::Color32,
    pub faint_text: egui::Color32,
    pub accent: egui::Color32,
    pub accent_fill: egui::Color32,
    pub accent_soft_bg: egui::Color32,
    pub on_accent: egui::Color32,
    pub quote_bg: egui::Color32,
    pub contact_bg: egui::Color32,
    pub contact_heading: egui::Color32,
    pub contact_body: egui::Color32,
    pub contact_outline: egui::Color32,
    pub footer_bg: egui::Color32,
    pub footer_text: egui::Color32,
}

pub fn palette(preset: ThemePreset) -> Palette {
    match preset {
        ThemePreset::StoneLight => Palette {
            page_bg: egui::Color32::from_rgb(250, 250, 249),
            surface_bg: egui::Color32::WHITE,
            card_stroke: egui::Color32::from_rgb(231, 229, 228),
            hover_tint: egui::Color32::from_black_alpha(7),
            heading_text: egui::Color32::from_rgb(28, 25, 23),
            body_text: egui::Color32::from_rgb(68, 64, 60),
            muted_text: egui::Color32::from_rgb(87, 83, 78),
            faint_text: egui::Color32::from_rgb(168, 162, 158),
            accent: egui::Color32::from_rgb(4, 120, 87),
            accent_fill: egui::Color32::from_rgb(4, 120, 87),
            accent_soft_bg: egui::Color32::from_rgb(209, 250, 229),
            on_accent: egui::Color32::WHITE,
            quote_bg: egui::Color32::from_rgb(236, 253, 245),
            contact_bg: egui::Color32::from_rgb(28, 25, 23),
            contact_heading: egui::Color32::WHITE,
            contact_body: egui::Color32::from_rgb(214, 211, 209),
            contact_outline: egui::Color32::from_rgb(87, 83, 78),
            footer_bg: egui::Color32::from_rgb(12, 10, 9),
            footer_text: egui::Color32::from_rgb(168, 162, 158),
        },
        ThemePreset::StoneDark => Palette {
            page_bg: egui::Color32::from_rgb(28, 25, 23),
            surface_bg: egui::Color32::from_rgb(41, 37, 36),
            card_stroke: egui::Color32::from_rgb(68, 64, 60),
            hover_tint: egui::Color32::from_white_alpha(8),
            heading_text: egui::Color32::from_rgb(250, 250, 249),
            body_text: egui::Color32::from_rgb(214, 211, 209),
            muted_text: egui::Color32::from_rgb(168, 162, 158),
            faint_text: egui::Color32::from_rgb(120, 113, 108),
            accent: egui::Color32::from_rgb(52, 211, 153),
            accent_fill: egui::Color32::from_rgb(5, 150, 105),
            accent_soft_bg: egui::Color32::from_rgb(6, 78, 59),
            on_accent: egui::Color32::WHITE,
            quote_bg: egui::Color32::from_rgb(23, 48, 40),
            contact_bg: egui::Color32::from_rgb(12, 10, 9),
            contact_heading: egui::Color32::from_rgb(250, 250, 249),
            contact_body: egui::Color32::from_rgb(214, 211, 209),
            contact_outline: egui::Color32::from_rgb(120, 113, 108),
            footer_bg: egui::Color32::from_rgb(8, 7, 6),
            footer_text: egui::Color32::from_rgb(120, 113, 108),
        },
    }
}

/// Push the preset into the egui style so stock widgets follow the palette.
pub fn apply(preset: ThemePreset, ctx: &egui::Context) {
    let palette = palette(preset);
    let mut style = (*ctx.style()).clone();
    style.visuals = match preset {
        ThemePreset::StoneLight => egui::Visuals::light(),
        ThemePreset::StoneDark => egui::Visuals::dark(),
    };
    style.visuals.panel_fill = palette.page_bg;
    style.visuals.hyperlink_color = palette.accent;
    style.visuals.widgets.noninteractive.fg_stroke.color = palette.body_text;
    style.visuals.widgets.noninteractive.bg_stroke.color = palette.card_stroke;
    ctx.set_style(style);
}
