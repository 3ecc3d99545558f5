/// Number of columns in a full gauge.
pub const BAR_WIDTH: usize = 40;
/// Loudness at which the loudness gauge is full.
pub const MAX_LOUDNESS: f32 = 0.4;
/// Lowest pitch shown on the pitch gauge.
pub const PITCH_MIN_HZ: f32 = 100.0;
/// Pitch at which the pitch gauge is full.
pub const PITCH_MAX_HZ: f32 = 1000.0;

/// Converts a fraction in `0.0..=1.0` into a column count, truncating toward zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn columns(fraction: f32) -> usize {
    let fraction = fraction.clamp(0.0, 1.0);
    ((fraction * BAR_WIDTH as f32) as usize).min(BAR_WIDTH)
}

/// Filled columns of the loudness gauge.
#[must_use]
pub fn loudness_columns(loudness: f32) -> usize {
    // max/min rather than clamp so a NaN reading falls back to zero
    let clamped = loudness.max(0.0).min(MAX_LOUDNESS);
    columns(clamped / MAX_LOUDNESS)
}

/// Filled columns of the pitch gauge, zero when no pitch was detected.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pitch_columns(pitch_hz: i32) -> usize {
    if pitch_hz <= 0 {
        return 0;
    }
    let clamped = (pitch_hz as f32).clamp(PITCH_MIN_HZ, PITCH_MAX_HZ);
    columns((clamped - PITCH_MIN_HZ) / (PITCH_MAX_HZ - PITCH_MIN_HZ))
}

/// Draws a gauge of `filled` glyphs padded with spaces to `BAR_WIDTH`.
#[must_use]
pub fn draw_bar(filled: usize, glyph: char) -> String {
    let filled = filled.min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH + glyph.len_utf8() * filled);
    bar.extend(std::iter::repeat_n(glyph, filled));
    bar.extend(std::iter::repeat_n(' ', BAR_WIDTH - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::{BAR_WIDTH, draw_bar, loudness_columns, pitch_columns};

    #[test]
    fn loudness_at_or_below_zero_is_empty() {
        assert_eq!(loudness_columns(0.0), 0);
        assert_eq!(loudness_columns(-0.3), 0);
        assert_eq!(loudness_columns(f32::NEG_INFINITY), 0);
        assert_eq!(loudness_columns(f32::NAN), 0);
    }

    #[test]
    fn loudness_at_or_above_ceiling_is_full() {
        assert_eq!(loudness_columns(0.4), BAR_WIDTH);
        assert_eq!(loudness_columns(1.0), BAR_WIDTH);
        assert_eq!(loudness_columns(f32::INFINITY), BAR_WIDTH);
    }

    #[test]
    fn loudness_scales_linearly() {
        assert_eq!(loudness_columns(0.2), 20);
        assert_eq!(loudness_columns(0.1), 10);
        assert_eq!(loudness_columns(0.05), 5);
    }

    #[test]
    fn pitch_without_detection_is_empty() {
        assert_eq!(pitch_columns(0), 0);
        assert_eq!(pitch_columns(-440), 0);
        assert_eq!(pitch_columns(i32::MIN), 0);
    }

    #[test]
    fn pitch_is_clamped_to_range() {
        assert_eq!(pitch_columns(50), 0);
        assert_eq!(pitch_columns(100), 0);
        assert_eq!(pitch_columns(1000), BAR_WIDTH);
        assert_eq!(pitch_columns(i32::MAX), BAR_WIDTH);
    }

    #[test]
    fn pitch_scales_linearly() {
        assert_eq!(pitch_columns(550), 20);
        assert_eq!(pitch_columns(200), 4);
        assert_eq!(pitch_columns(325), 10);
    }

    #[test]
    fn bar_is_always_full_width() {
        assert_eq!(draw_bar(0, '.'), " ".repeat(BAR_WIDTH));
        assert_eq!(draw_bar(BAR_WIDTH, '.'), ".".repeat(BAR_WIDTH));
        assert_eq!(draw_bar(BAR_WIDTH + 5, '#').chars().count(), BAR_WIDTH);

        let bar = draw_bar(3, '█');
        assert!(bar.starts_with("███ "));
        assert_eq!(bar.chars().count(), BAR_WIDTH);
    }
}
