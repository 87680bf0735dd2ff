use anyhow::Result;
use clap::Parser;
use eframe::egui;

mod controller;
mod ui;

use ui::theme::ThemePreset;
use ui::{EssaysApp, PersistedReaderSettings, StartupOverrides, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
struct Args {
    /// Initial color theme, overriding any persisted preference.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
    /// Text scale multiplier in the 0.8..=1.4 range.
    #[arg(long)]
    text_scale: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreset {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => ThemePreset::StoneLight,
            ThemeArg::Dark => ThemePreset::StoneDark,
        }
    }
}

fn startup_overrides(args: &Args) -> Result<StartupOverrides> {
    if let Some(scale) = args.text_scale {
        if !(ui::app::MIN_TEXT_SCALE..=ui::app::MAX_TEXT_SCALE).contains(&scale) {
            anyhow::bail!(
                "--text-scale must be between {} and {}, got {scale}",
                ui::app::MIN_TEXT_SCALE,
                ui::app::MAX_TEXT_SCALE
            );
        }
    }
    Ok(StartupOverrides {
        theme: args.theme.map(Into::into),
        text_scale: args.text_scale,
    })
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let overrides = startup_overrides(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Walker Gordillo")
            .with_inner_size([1120.0, 800.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Walker Gordillo",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedReaderSettings>(&text).ok())
            });
            Ok(Box::new(EssaysApp::new(persisted, overrides)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the essays app: {err}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{startup_overrides, Args, ThemeArg};
    use crate::ui::theme::ThemePreset;

    #[test]
    fn theme_flag_maps_onto_presets() {
        assert_eq!(ThemePreset::from(ThemeArg::Light), ThemePreset::StoneLight);
        assert_eq!(ThemePreset::from(ThemeArg::Dark), ThemePreset::StoneDark);
    }

    #[test]
    fn parses_both_flags() {
        let args =
            Args::try_parse_from(["desktop_gui", "--theme", "dark", "--text-scale", "1.2"])
                .expect("flags parse");
        let overrides = startup_overrides(&args).expect("overrides resolve");
        assert_eq!(overrides.theme, Some(ThemePreset::StoneDark));
        assert_eq!(overrides.text_scale, Some(1.2));
    }

    #[test]
    fn rejects_text_scale_outside_the_supported_range() {
        let args = Args::try_parse_from(["desktop_gui", "--text-scale", "3.0"])
            .expect("flags parse");
        assert!(startup_overrides(&args).is_err());
    }
}
