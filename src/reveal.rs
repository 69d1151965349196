use std::collections::BTreeSet;

/// Fraction of an element's area that must intersect the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const fn new(ratio: f64) -> Self {
        let ratio = if ratio < 0.0 {
            0.0
        } else if ratio > 1.0 {
            1.0
        } else {
            ratio
        };
        Self(ratio)
    }

    pub const fn ratio(self) -> f64 {
        self.0
    }
}

/// One-shot reveal state for a list of cards. Indices only ever get added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet(BTreeSet<usize>);

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time an index is revealed.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether content must be shown without waiting for an intersection.
///
/// Without viewport observation nothing would ever be revealed, so everything is visible.
pub fn fallback_visible(observer_supported: bool) -> bool {
    !observer_supported
}

/// Tailwind classes for an element that slides up into place once revealed.
pub fn slide_classes(revealed: bool) -> &'static str {
    if revealed {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-12 opacity-0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(Threshold::new(-1.0).ratio(), 0.0);
        assert_eq!(Threshold::new(3.0).ratio(), 1.0);
        assert_eq!(Threshold::new(0.2).ratio(), 0.2);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut set = RevealSet::new();
        assert!(!set.is_revealed(2));
        assert!(set.reveal(2));
        assert!(!set.reveal(2));
        assert!(set.is_revealed(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unsupported_observer_reveals_every_card() {
        assert!(!fallback_visible(true));

        let mut set = RevealSet::new();
        for index in 0..4 {
            if fallback_visible(false) {
                set.reveal(index);
            }
        }
        assert!((0..4).all(|i| set.is_revealed(i)));
    }

    #[test]
    fn size_never_decreases() {
        let mut set = RevealSet::new();
        let mut last = 0;
        for i in [3, 1, 3, 0, 1, 2, 2, 7] {
            set.reveal(i);
            assert!(set.len() >= last);
            last = set.len();
        }
        assert_eq!(last, 5);
        for i in [0, 1, 2, 3, 7] {
            assert!(set.is_revealed(i));
        }
    }
}
