//! Braille spinner shown in place of the submit label

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph for the given tick
pub fn frame(frame_count: u64) -> &'static str {
    FRAMES[(frame_count % FRAMES.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cycles() {
        assert_eq!(frame(0), "⠋");
        assert_eq!(frame(1), "⠙");
        assert_eq!(frame(10), frame(0));
    }

    #[test]
    fn test_frame_handles_large_counts() {
        assert!(FRAMES.contains(&frame(u64::MAX)));
    }
}
