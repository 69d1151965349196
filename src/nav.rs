/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any navigation click closes the menu, whether or not its target exists.
    pub fn navigated(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn navigation_always_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.navigated();
        assert!(!menu.is_open());
        menu.navigated();
        assert!(!menu.is_open());
    }
}
