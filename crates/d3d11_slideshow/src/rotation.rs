use std::num::NonZeroUsize;

/// Round-robin index over a fixed, non-empty sequence of source images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCursor {
    position: usize,
    len: NonZeroUsize,
}

impl RotationCursor {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { position: 0, len }
    }

    /// Index the next frame will show.
    pub fn current(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Returns the index to show for this frame and moves on to the next one,
    /// wrapping back to zero after the last image.
    pub fn advance(&mut self) -> usize {
        let shown = self.position;
        self.position = (self.position + 1) % self.len.get();
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(len: usize) -> RotationCursor {
        RotationCursor::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_starts_at_zero() {
        let cursor = cursor(3);
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_frame_i_shows_image_i_minus_one_mod_n() {
        for n in 1..=4 {
            let mut cursor = cursor(n);
            for i in 1..=3 * n + 1 {
                assert_eq!(cursor.advance(), (i - 1) % n, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn test_wraps_after_last_image() {
        let mut cursor = cursor(2);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn test_single_image_always_zero() {
        let mut cursor = cursor(1);
        assert_eq!(cursor.advance(), 0);
        assert_eq!(cursor.advance(), 0);
    }
}
