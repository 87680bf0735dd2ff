use eframe::egui;
use reader_core::{content, Reader};
use serde::{Deserialize, Serialize};
use shared::domain::{Essay, Section};

use crate::controller::events::UiIntent;
use crate::controller::orchestration::apply_intents;
use crate::ui::theme::{self, Palette, ThemePreset};

pub const SETTINGS_STORAGE_KEY: &str = "essays_desktop_settings";

pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 1.4;

const CONTENT_MAX_WIDTH: f32 = 860.0;

const SITE_OWNER: &str = "Walker Gordillo";
const HERO_TITLE_TOP: &str = "Essays on Technology,";
const HERO_TITLE_ACCENT: &str = "Philosophy & Life";
const HERO_SUBTITLE: &str = "Exploring ideas at the intersection of digital culture, human \
     nature, and meaningful living. Thoughts on how we can live more intentionally in our \
     modern world.";
const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a writer and thinker fascinated by the intersection of technology, philosophy, and \
     human flourishing. My essays explore how we can live more intentionally in our digital age.",
    "Through my writing, I aim to bridge the gap between ancient wisdom and modern challenges, \
     offering perspectives on how we might navigate our increasingly complex world with greater \
     clarity and purpose.",
    "When I'm not writing, you can find me reading philosophy, experimenting with minimalist \
     living, or having deep conversations about the future of human consciousness.",
];
const ABOUT_QUOTE: &str = "\"The unexamined life is not worth living, but the over-examined \
     life is not worth living either. The key is finding the right balance between reflection \
     and action.\"";
const ABOUT_QUOTE_CITE: &str = "\u{2014} Personal philosophy";
const CONTACT_LEAD: &str = "Have thoughts on any of my essays? Want to discuss ideas or \
     collaborate? I'd love to hear from you.";
const FOOTER_LINE: &str = "\u{a9} 2024 Walker Gordillo. All thoughts my own.";
const INERT_HINT: &str = "Not wired to a destination in this build";

/// Display settings that survive restarts. The expansion state deliberately
/// does not: reading position dies with the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedReaderSettings {
    theme_preset: ThemePreset,
    text_scale: f32,
}

impl Default for PersistedReaderSettings {
    fn default() -> Self {
        Self {
            theme_preset: ThemePreset::StoneLight,
            text_scale: 1.0,
        }
    }
}

impl PersistedReaderSettings {
    fn into_runtime(self) -> (ThemePreset, f32) {
        (
            self.theme_preset,
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        )
    }

    fn from_runtime(theme: ThemePreset, text_scale: f32) -> Self {
        Self {
            theme_preset: theme,
            text_scale: text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }
}

/// Command-line overrides; a given flag beats the persisted preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOverrides {
    pub theme: Option<ThemePreset>,
    pub text_scale: Option<f32>,
}

pub struct EssaysApp {
    reader: Reader,
    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
    text_scale: f32,
    scroll_request: Option<Section>,
}

/// Lay `add` out in a column of at most `max_width`, centered horizontally.
fn centered_column(ui: &mut egui::Ui, max_width: f32, add: impl FnOnce(&mut egui::Ui)) {
    let column_width = max_width.min(ui.available_width() - 32.0).max(0.0);
    let side = ((ui.available_width() - column_width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(column_width);
            add(ui);
        });
    });
}

impl EssaysApp {
    pub fn new(persisted: Option<PersistedReaderSettings>, overrides: StartupOverrides) -> Self {
        let (mut theme, mut text_scale) = persisted.unwrap_or_default().into_runtime();
        if let Some(theme_override) = overrides.theme {
            theme = theme_override;
        }
        if let Some(scale_override) = overrides.text_scale {
            text_scale = scale_override.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
        }

        Self {
            reader: Reader::over_builtin(),
            theme,
            applied_theme: None,
            text_scale,
            scroll_request: None,
        }
    }

    fn palette(&self) -> Palette {
        theme::palette(self.theme)
    }

    fn scaled(&self, size: f32) -> f32 {
        size * self.text_scale
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        theme::apply(self.theme, ctx);
        self.applied_theme = Some(self.theme);
    }

    /// Zero-height scroll target placed right above a section. Consumes a
    /// pending scroll request the frame after the intent was applied.
    fn section_anchor(&mut self, ui: &mut egui::Ui, section: Section) {
        let resp = ui.allocate_response(
            egui::vec2(ui.available_width(), 0.0),
            egui::Sense::hover(),
        );
        if self.scroll_request == Some(section) {
            resp.scroll_to_me(Some(egui::Align::TOP));
            self.scroll_request = None;
        }
    }

    fn inert_icon_button(&self, ui: &mut egui::Ui, label: &str) {
        let palette = self.palette();
        let resp = ui
            .add(
                egui::Button::new(
                    egui::RichText::new(label)
                        .size(self.scaled(13.5))
                        .color(palette.faint_text),
                )
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::NONE),
            )
            .on_hover_text(INERT_HINT);
        if resp.clicked() {
            tracing::debug!(control = label, "inert affordance clicked");
        }
    }

    fn inert_cta_button(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        fill: egui::Color32,
        text_color: egui::Color32,
        stroke: egui::Stroke,
    ) {
        let resp = ui
            .add(
                egui::Button::new(
                    egui::RichText::new(label)
                        .size(self.scaled(15.5))
                        .strong()
                        .color(text_color),
                )
                .fill(fill)
                .stroke(stroke)
                .min_size(egui::vec2(210.0, 44.0))
                .corner_radius(egui::CornerRadius::same(10)),
            )
            .on_hover_text(INERT_HINT);
        if resp.clicked() {
            tracing::debug!(control = label, "inert affordance clicked");
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        let palette = self.palette();
        egui::TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::new()
                    .fill(palette.surface_bg)
                    .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                    .inner_margin(egui::Margin::symmetric(24, 14)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(SITE_OWNER)
                            .size(self.scaled(20.0))
                            .strong()
                            .color(palette.heading_text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_switch = ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new(self.theme.other().label())
                                        .size(self.scaled(13.0))
                                        .color(palette.muted_text),
                                )
                                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                                .fill(egui::Color32::TRANSPARENT)
                                .corner_radius(egui::CornerRadius::same(6)),
                            )
                            .on_hover_text("Switch color theme");
                        if theme_switch.clicked() {
                            self.theme = self.theme.other();
                        }
                        ui.add_space(10.0);

                        // Right-to-left layout, so iterate the nav in reverse
                        // to read Essays / About / Contact left to right.
                        for section in Section::ALL.iter().rev() {
                            let link = ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new(section.label())
                                            .size(self.scaled(15.0))
                                            .color(palette.muted_text),
                                    )
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::NONE),
                                )
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if link.clicked() {
                                intents.push(UiIntent::ScrollTo(*section));
                            }
                        }
                    });
                });
            });
    }

    fn show_page(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        let palette = self.palette();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.page_bg))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_hero(ui, intents);
                        self.show_essays_section(ui, intents);
                        self.show_about_section(ui);
                        self.show_contact_section(ui);
                        self.show_footer(ui);
                    });
            });
    }

    fn show_hero(&self, ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
        let palette = self.palette();
        ui.add_space(72.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(760.0);
            ui.label(
                egui::RichText::new(HERO_TITLE_TOP)
                    .size(self.scaled(42.0))
                    .strong()
                    .color(palette.heading_text),
            );
            ui.label(
                egui::RichText::new(HERO_TITLE_ACCENT)
                    .size(self.scaled(42.0))
                    .strong()
                    .color(palette.accent),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new(HERO_SUBTITLE)
                    .size(self.scaled(17.0))
                    .color(palette.muted_text),
            );
            ui.add_space(30.0);
            let cta = ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("Explore My Writing  \u{2192}")
                            .size(self.scaled(16.0))
                            .strong()
                            .color(palette.on_accent),
                    )
                    .fill(palette.accent_fill)
                    .min_size(egui::vec2(230.0, 46.0))
                    .corner_radius(egui::CornerRadius::same(10)),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if cta.clicked() {
                intents.push(UiIntent::ScrollTo(Section::Essays));
            }
        });
        ui.add_space(76.0);
    }

    fn show_essays_section(&mut self, ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
        self.section_anchor(ui, Section::Essays);
        let palette = self.palette();
        let catalog = self.reader.catalog();

        centered_column(ui, CONTENT_MAX_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Recent Essays")
                        .size(self.scaled(30.0))
                        .strong()
                        .color(palette.heading_text),
                );
            });
            ui.add_space(28.0);
            for essay in catalog.essays() {
                self.render_essay_card(ui, essay, intents);
                ui.add_space(16.0);
            }
        });
        ui.add_space(48.0);
    }

    fn render_essay_card(&self, ui: &mut egui::Ui, essay: &Essay, intents: &mut Vec<UiIntent>) {
        let palette = self.palette();
        let expanded = self.reader.is_expanded(&essay.id);

        egui::Frame::new()
            .fill(palette.surface_bg)
            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
            .corner_radius(egui::CornerRadius::same(12))
            .show(ui, |ui| {
                let header = egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(24, 20))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.set_max_width(ui.available_width() - 40.0);
                                ui.horizontal(|ui| {
                                    egui::Frame::new()
                                        .fill(palette.accent_soft_bg)
                                        .corner_radius(egui::CornerRadius::same(6))
                                        .inner_margin(egui::Margin::symmetric(6, 4))
                                        .show(ui, |ui| {
                                            ui.label(
                                                egui::RichText::new("\u{1f4d6}")
                                                    .size(self.scaled(13.0))
                                                    .color(palette.accent),
                                            );
                                        });
                                    ui.add_space(6.0);
                                    ui.label(
                                        egui::RichText::new(&essay.date)
                                            .size(self.scaled(13.0))
                                            .color(palette.muted_text),
                                    );
                                    ui.label(
                                        egui::RichText::new("\u{2022}")
                                            .size(self.scaled(13.0))
                                            .color(palette.faint_text),
                                    );
                                    ui.label(
                                        egui::RichText::new(&essay.read_time)
                                            .size(self.scaled(13.0))
                                            .color(palette.muted_text),
                                    );
                                });
                                ui.add_space(10.0);
                                ui.label(
                                    egui::RichText::new(&essay.title)
                                        .size(self.scaled(23.0))
                                        .strong()
                                        .color(palette.heading_text),
                                );
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(&essay.excerpt)
                                        .size(self.scaled(16.0))
                                        .color(palette.muted_text),
                                );
                                ui.add_space(10.0);
                                ui.label(
                                    egui::RichText::new(content::toggle_label(expanded))
                                        .size(self.scaled(15.0))
                                        .strong()
                                        .color(palette.accent),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Min),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(content::chevron(expanded))
                                            .size(self.scaled(15.0))
                                            .color(palette.faint_text),
                                    );
                                },
                            );
                        });
                    });

                let header_resp = header
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if header_resp.hovered() {
                    ui.painter().rect_filled(
                        header_resp.rect,
                        egui::CornerRadius::same(12),
                        palette.hover_tint,
                    );
                }
                if header_resp.clicked() {
                    intents.push(UiIntent::ToggleEssay(essay.id.clone()));
                }

                if expanded {
                    self.render_expanded_body(ui, essay, intents);
                }
            });
    }

    fn render_expanded_body(&self, ui: &mut egui::Ui, essay: &Essay, intents: &mut Vec<UiIntent>) {
        let palette = self.palette();
        egui::Frame::new()
            .inner_margin(egui::Margin {
                left: 24,
                right: 24,
                top: 0,
                bottom: 20,
            })
            .show(ui, |ui| {
                ui.separator();
                ui.add_space(14.0);
                for paragraph in content::paragraphs(&essay.content) {
                    ui.label(
                        egui::RichText::new(paragraph)
                            .size(self.scaled(15.5))
                            .color(palette.body_text),
                    );
                    ui.add_space(12.0);
                }
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let collapse = ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(format!(
                                    "{} Collapse Essay",
                                    content::chevron(true)
                                ))
                                .size(self.scaled(14.5))
                                .strong()
                                .color(palette.accent),
                            )
                            .fill(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::NONE),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    if collapse.clicked() {
                        intents.push(UiIntent::ToggleEssay(essay.id.clone()));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.inert_icon_button(ui, "Twitter");
                        ui.label(
                            egui::RichText::new("Share:")
                                .size(self.scaled(13.0))
                                .color(palette.muted_text),
                        );
                    });
                });
            });
    }

    fn show_about_section(&mut self, ui: &mut egui::Ui) {
        self.section_anchor(ui, Section::About);
        let palette = self.palette();
        egui::Frame::new()
            .fill(palette.surface_bg)
            .inner_margin(egui::Margin::symmetric(0, 56))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                centered_column(ui, CONTENT_MAX_WIDTH + 80.0, |ui| {
                    ui.columns(2, |columns| {
                        {
                            let ui = &mut columns[0];
                            egui::Frame::new()
                                .fill(palette.accent_soft_bg)
                                .corner_radius(egui::CornerRadius::same(10))
                                .inner_margin(egui::Margin::symmetric(10, 8))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new("\u{1f464}")
                                            .size(self.scaled(20.0))
                                            .color(palette.accent),
                                    );
                                });
                            ui.add_space(16.0);
                            ui.label(
                                egui::RichText::new("About Walker")
                                    .size(self.scaled(28.0))
                                    .strong()
                                    .color(palette.heading_text),
                            );
                            ui.add_space(14.0);
                            for paragraph in ABOUT_PARAGRAPHS {
                                ui.label(
                                    egui::RichText::new(paragraph)
                                        .size(self.scaled(15.5))
                                        .color(palette.body_text),
                                );
                                ui.add_space(10.0);
                            }
                            ui.add_space(10.0);
                            ui.horizontal(|ui| {
                                self.inert_icon_button(ui, "GitHub");
                                self.inert_icon_button(ui, "Twitter");
                                self.inert_icon_button(ui, "Email");
                            });
                        }
                        {
                            let ui = &mut columns[1];
                            egui::Frame::new()
                                .fill(palette.quote_bg)
                                .corner_radius(egui::CornerRadius::same(16))
                                .inner_margin(egui::Margin::same(28))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(ABOUT_QUOTE)
                                            .size(self.scaled(17.0))
                                            .italics()
                                            .color(palette.body_text),
                                    );
                                    ui.add_space(12.0);
                                    ui.label(
                                        egui::RichText::new(ABOUT_QUOTE_CITE)
                                            .size(self.scaled(14.0))
                                            .color(palette.muted_text),
                                    );
                                });
                        }
                    });
                });
            });
    }

    fn show_contact_section(&mut self, ui: &mut egui::Ui) {
        self.section_anchor(ui, Section::Contact);
        let palette = self.palette();
        egui::Frame::new()
            .fill(palette.contact_bg)
            .inner_margin(egui::Margin::symmetric(24, 60))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.set_max_width(640.0);
                    ui.label(
                        egui::RichText::new("Let's Connect")
                            .size(self.scaled(30.0))
                            .strong()
                            .color(palette.contact_heading),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new(CONTACT_LEAD)
                            .size(self.scaled(16.5))
                            .color(palette.contact_body),
                    );
                    ui.add_space(28.0);
                    ui.horizontal(|ui| {
                        ui.add_space(((ui.available_width() - 460.0) / 2.0).max(0.0));
                        self.inert_cta_button(
                            ui,
                            "\u{2709}  Send Me an Email",
                            palette.accent_fill,
                            palette.on_accent,
                            egui::Stroke::NONE,
                        );
                        ui.add_space(12.0);
                        self.inert_cta_button(
                            ui,
                            "Follow on Twitter",
                            egui::Color32::TRANSPARENT,
                            palette.contact_body,
                            egui::Stroke::new(2.0, palette.contact_outline),
                        );
                    });
                });
            });
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        let palette = self.palette();
        egui::Frame::new()
            .fill(palette.footer_bg)
            .inner_margin(egui::Margin::symmetric(24, 24))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                centered_column(ui, CONTENT_MAX_WIDTH + 120.0, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(FOOTER_LINE)
                                .size(self.scaled(13.5))
                                .color(palette.footer_text),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                self.inert_icon_button(ui, "Email");
                                self.inert_icon_button(ui, "Twitter");
                                self.inert_icon_button(ui, "GitHub");
                            },
                        );
                    });
                });
            });
    }
}

impl eframe::App for EssaysApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut intents = Vec::new();
        self.show_nav_bar(ctx, &mut intents);
        self.show_page(ctx, &mut intents);
        apply_intents(&mut self.reader, &mut self.scroll_request, intents);

        // A pending scroll request is consumed by the anchors during the next
        // layout pass, so make sure that pass happens promptly.
        if self.scroll_request.is_some() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedReaderSettings::from_runtime(self.theme, self.text_scale);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EssaysApp, PersistedReaderSettings, StartupOverrides};
    use crate::ui::theme::ThemePreset;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = PersistedReaderSettings::from_runtime(ThemePreset::StoneDark, 1.2);
        let serialized = serde_json::to_string(&settings).expect("settings serialize");
        let decoded: PersistedReaderSettings =
            serde_json::from_str(&serialized).expect("settings deserialize");
        assert_eq!(decoded, settings);
    }

    #[test]
    fn out_of_range_text_scale_is_clamped_on_load() {
        let decoded: PersistedReaderSettings =
            serde_json::from_str(r#"{"theme_preset":"stone_light","text_scale":9.0}"#)
                .expect("settings deserialize");
        let (_, text_scale) = decoded.into_runtime();
        assert_eq!(text_scale, super::MAX_TEXT_SCALE);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let decoded: PersistedReaderSettings =
            serde_json::from_str("{}").expect("settings deserialize");
        assert_eq!(decoded, PersistedReaderSettings::default());
    }

    #[test]
    fn startup_overrides_beat_persisted_settings() {
        let persisted = PersistedReaderSettings::from_runtime(ThemePreset::StoneDark, 1.3);
        let app = EssaysApp::new(
            Some(persisted),
            StartupOverrides {
                theme: Some(ThemePreset::StoneLight),
                text_scale: Some(0.9),
            },
        );
        assert_eq!(app.theme, ThemePreset::StoneLight);
        assert_eq!(app.text_scale, 0.9);
    }
}
