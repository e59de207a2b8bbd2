/// Mobile navigation overlay. Starts closed and toggles for the page's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Every visual flag the menu state drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuFlags {
    pub overlay_visible: bool,
    pub menu_visible: bool,
    pub toggle_marked: bool,
    pub burger_hidden: bool,
    pub close_hidden: bool,
    pub background_scroll_locked: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn flags(self) -> MenuFlags {
        let open = self.is_open();
        MenuFlags {
            overlay_visible: open,
            menu_visible: open,
            toggle_marked: open,
            burger_hidden: open,
            close_hidden: !open,
            background_scroll_locked: open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_parity() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.toggle();
        assert_eq!(menu, MenuState::Closed);

        for _ in 0..5 {
            menu.toggle();
        }
        assert_eq!(menu, MenuState::Open);
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut once = MenuState::Closed;
        once.open();
        let mut twice = MenuState::Closed;
        twice.open();
        twice.open();
        assert_eq!(once.flags(), twice.flags());

        twice.close();
        twice.close();
        assert_eq!(twice, MenuState::Closed);
    }

    #[test]
    fn close_reverses_every_flag() {
        let closed = MenuState::Closed.flags();
        let open = MenuState::Open.flags();
        assert!(open.overlay_visible && open.menu_visible && open.toggle_marked);
        assert!(open.burger_hidden && !open.close_hidden && open.background_scroll_locked);
        assert_eq!(closed.overlay_visible, !open.overlay_visible);
        assert_eq!(closed.menu_visible, !open.menu_visible);
        assert_eq!(closed.toggle_marked, !open.toggle_marked);
        assert_eq!(closed.burger_hidden, !open.burger_hidden);
        assert_eq!(closed.close_hidden, !open.close_hidden);
        assert_eq!(closed.background_scroll_locked, !open.background_scroll_locked);
    }
}
