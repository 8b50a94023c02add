/// Index of the card on display in a wrap-around carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Shows card `index`; out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_and_wraps() {
        let mut carousel = Carousel::new(4);
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                carousel.next();
                carousel.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);
            carousel.jump_to(len / 2);
            let start = carousel.index();
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.index(), start);
            for _ in 0..len {
                carousel.previous();
            }
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn previous_wraps_to_the_end() {
        let mut carousel = Carousel::new(4);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn jump_outside_range_is_ignored() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.jump_to(2));
        assert!(!carousel.jump_to(4));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        assert!(!carousel.jump_to(0));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
