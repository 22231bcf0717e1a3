//! Modal image carousel state

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    open: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Open on image `index`; out-of-range indices are ignored
    pub fn open_at(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance, wrapping from the last image to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Step back, wrapping from the first image to the last
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// "3 / 7" style position label
    pub fn position(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        format!("{} / {}", self.current + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_around() {
        let mut carousel = Carousel::new(4);
        carousel.open_at(3);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.previous();
        assert_eq!(carousel.current(), 3);
        carousel.previous();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(5);
        carousel.open_at(2);
        for _ in 0..5 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 2);
        for _ in 0..5 {
            carousel.previous();
        }
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_open_and_close() {
        let mut carousel = Carousel::new(2);
        assert!(!carousel.is_open());
        carousel.open_at(1);
        assert!(carousel.is_open());
        assert_eq!(carousel.position(), "2 / 2");
        carousel.close();
        assert!(!carousel.is_open());

        carousel.open_at(9);
        assert!(!carousel.is_open());
    }

    #[test]
    fn test_empty_never_opens() {
        let mut carousel = Carousel::new(0);
        carousel.open_at(0);
        carousel.next();
        carousel.previous();
        assert!(!carousel.is_open());
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.position(), "");
    }

    #[test]
    fn test_single_image() {
        let mut carousel = Carousel::new(1);
        carousel.open_at(0);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.previous();
        assert_eq!(carousel.current(), 0);
    }
}
