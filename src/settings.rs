use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;

use crate::runtime::error::VisualiserError;

/// Port the audio producer sends its samples to.
pub const DEFAULT_PORT: u16 = 12345;
/// Character used for the filled columns of a gauge.
pub const DEFAULT_BAR_GLYPH: char = '.';

const SETTINGS_FILE: &str = "visualiser";
const ENV_PREFIX: &str = "VISUALISER";

/// How the terminal is cleared before each repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    /// Emit the `ESC[2J ESC[H` control sequence.
    #[default]
    Ansi,
    /// Run the platform clear command (`clear` or `cls`).
    Command,
    /// Do not clear at all, every frame is appended.
    None,
}

/// Runtime settings of the visualiser and the sample sender.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UDP port bound on all local interfaces.
    pub port: u16,
    /// Glyph drawn for each filled gauge column.
    pub bar_glyph: char,
    /// Clearing strategy used by the terminal renderer.
    pub clear: ClearMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bar_glyph: DEFAULT_BAR_GLYPH,
            clear: ClearMode::default(),
        }
    }
}

impl Settings {
    /// Loads the settings from `visualiser.toml` (optional) and `VISUALISER_*` environment variables,
    /// falling back to the built-in defaults for anything not set.
    ///
    /// # Errors
    ///
    /// Throws a `VisualiserError::Config` if a source exists but cannot be read or deserialized.
    pub fn load() -> Result<Self, VisualiserError> {
        Self::from_sources(
            File::with_name(SETTINGS_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn from_sources(
        file: File<FileSourceFile, FileFormat>,
        env: Environment,
    ) -> Result<Self, VisualiserError> {
        let settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
