use std::collections::BTreeSet;

/// Indices of the experience cards that are currently open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet(BTreeSet<usize>);

impl ExpansionSet {
    pub fn with_default(first: usize) -> Self {
        Self(BTreeSet::from([first]))
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.0.remove(&index) {
            self.0.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_open_by_default() {
        let set = ExpansionSet::with_default(0);
        assert!(set.is_expanded(0));
        assert!(!set.is_expanded(1));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let original = ExpansionSet::with_default(0);
        for i in 0..4 {
            let mut set = original.clone();
            set.toggle(i);
            assert_ne!(set, original);
            set.toggle(i);
            assert_eq!(set, original);
        }
    }

    #[test]
    fn cards_toggle_independently() {
        let mut set = ExpansionSet::with_default(0);
        set.toggle(2);
        set.toggle(0);
        assert!(!set.is_expanded(0));
        assert!(set.is_expanded(2));
    }
}
