use std::path::PathBuf;

use clap::Parser;

/// Relief: interactive extruded 3D text with orbit controls.
#[derive(Parser, Debug)]
#[command(name = "relief", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `relief=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial placeholder text.
    #[arg(long)]
    pub text: Option<String>,

    /// Font file (typeface JSON or TrueType/OpenType).
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Matcap texture (PNG).
    #[arg(long)]
    pub matcap: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut relief_config::ReliefConfig) {
        if let Some(ref text) = self.text {
            config.text.initial = text.clone();
        }
        if let Some(ref font) = self.font {
            config.assets.font = font.clone();
        }
        if let Some(ref matcap) = self.matcap {
            config.assets.matcap = matcap.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
