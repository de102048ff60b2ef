//! Black/white tone of a single binary sample.

/// A binary sample: black (0) or white (255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Black,
    White,
}

impl Tone {
    /// The 8-bit sample value for this tone.
    pub const fn value(self) -> u8 {
        match self {
            Tone::Black => 0,
            Tone::White => 255,
        }
    }

    /// Binarize an 8-bit sample. Values at or above `threshold` are white.
    pub const fn from_sample(sample: u8, threshold: u8) -> Self {
        if sample >= threshold {
            Tone::White
        } else {
            Tone::Black
        }
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Tone::Black)
    }

    /// The opposite tone.
    pub const fn inverted(self) -> Self {
        match self {
            Tone::Black => Tone::White,
            Tone::White => Tone::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Tone::Black.value(), 0);
        assert_eq!(Tone::White.value(), 255);
    }

    #[test]
    fn test_from_sample_threshold_inclusive() {
        assert_eq!(Tone::from_sample(128, 128), Tone::White);
        assert_eq!(Tone::from_sample(127, 128), Tone::Black);
        assert_eq!(Tone::from_sample(0, 0), Tone::White);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Tone::Black.inverted(), Tone::White);
        assert_eq!(Tone::White.inverted(), Tone::Black);
        assert!(Tone::Black.is_black());
        assert!(!Tone::White.is_black());
    }
}
