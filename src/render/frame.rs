use crate::{
    render::gauge::{BAR_WIDTH, draw_bar, loudness_columns, pitch_columns},
    sample::parser::Sample,
};

/// First line of every frame.
pub const BANNER: &str = "---YOU ARE NOW CONNECTED TO FRANÇOISE---";
/// Label in front of the loudness gauge.
pub const LOUDNESS_LABEL: &str = "RMS  : ";
/// Label in front of the pitch gauge.
pub const PITCH_LABEL: &str = "Pitch: ";
/// Width of the footer rule, label plus gauge.
pub const FOOTER_WIDTH: usize = BAR_WIDTH + LOUDNESS_LABEL.len();

/// Formats one full repaint for `sample`, without the clear-screen step.
///
/// The output only depends on its arguments, rendering the same sample twice yields identical text.
#[must_use]
pub fn format_frame(sample: &Sample, glyph: char) -> String {
    let loudness_bar = draw_bar(loudness_columns(sample.loudness), glyph);
    let pitch_bar = draw_bar(pitch_columns(sample.pitch_hz), glyph);
    let pitch_hz = sample.pitch_hz.max(0);
    let footer = "-".repeat(FOOTER_WIDTH);

    format!(
        "{BANNER}\n\
         {LOUDNESS_LABEL}{loudness_bar}\n\
         {PITCH_LABEL}{pitch_bar} {pitch_hz} Hz\n\
         {footer}\n"
    )
}
