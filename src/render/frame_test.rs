#[cfg(test)]
mod tests {
    use crate::{
        render::{
            frame::{BANNER, FOOTER_WIDTH, format_frame},
            gauge::BAR_WIDTH,
        },
        sample::parser::{Sample, parse_sample},
    };

    fn filled(line: &str, label: &str, glyph: char) -> usize {
        line.strip_prefix(label)
            .unwrap()
            .chars()
            .take(BAR_WIDTH)
            .filter(|c| *c == glyph)
            .count()
    }

    #[test]
    fn frame_has_four_lines() {
        let frame = format_frame(&Sample::new(0.2, 550), '.');
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], BANNER);
        assert!(lines[1].starts_with("RMS  : "));
        assert!(lines[2].starts_with("Pitch: "));
        assert_eq!(lines[3], "-".repeat(47));
        assert!(frame.ends_with('\n'));
    }

    #[test]
    fn midpoint_sample_fills_half_of_both_gauges() {
        let frame = format_frame(&Sample::new(0.2, 550), '.');
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(filled(lines[1], "RMS  : ", '.'), 20);
        assert_eq!(filled(lines[2], "Pitch: ", '.'), 20);
        let half = format!("{}{}", ".".repeat(20), " ".repeat(20));
        assert_eq!(lines[1], format!("RMS  : {half}"));
        assert_eq!(lines[2], format!("Pitch: {half} 550 Hz"));
    }

    #[test]
    fn silent_sample_shows_empty_gauges_and_zero_hz() {
        let frame = format_frame(&Sample::default(), '.');
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[1], format!("RMS  : {}", " ".repeat(BAR_WIDTH)));
        assert_eq!(lines[2], format!("Pitch: {} 0 Hz", " ".repeat(BAR_WIDTH)));
    }

    #[test]
    fn negative_pitch_is_printed_as_zero() {
        let frame = format_frame(&Sample::new(0.0, -300), '.');
        let pitch_line = frame.lines().nth(2).unwrap();

        assert_eq!(filled(pitch_line, "Pitch: ", '.'), 0);
        assert!(pitch_line.ends_with(" 0 Hz"));
    }

    #[test]
    fn loud_high_sample_fills_both_gauges() {
        let frame = format_frame(&parse_sample(b"0.9,1500"), '#');
        let lines: Vec<&str> = frame.lines().collect();

        let full = "#".repeat(BAR_WIDTH);
        assert_eq!(lines[1], format!("RMS  : {full}"));
        assert_eq!(lines[2], format!("Pitch: {full} 1500 Hz"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let sample = Sample::new(0.13, 321);
        assert_eq!(format_frame(&sample, '.'), format_frame(&sample, '.'));
    }

    #[test]
    fn footer_spans_label_and_gauge() {
        assert_eq!(FOOTER_WIDTH, 47);
    }
}
