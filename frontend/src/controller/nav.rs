/// The two parallel tab strips rendered on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presentation {
    Desktop,
    Mobile,
}

impl Presentation {
    pub fn other(self) -> Self {
        match self {
            Presentation::Desktop => Presentation::Mobile,
            Presentation::Mobile => Presentation::Desktop,
        }
    }

    /// Class carried by every tab of this strip.
    pub fn item_class(self) -> &'static str {
        match self {
            Presentation::Desktop => "tab",
            Presentation::Mobile => "mobile-tab",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: String,
    pub presentation: Presentation,
    pub active: bool,
}

/// Active markers of both tab strips. At most one item per presentation is
/// active at any time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    items: Vec<NavItem>,
}

impl NavState {
    /// Builds both strips with the same section keys, nothing active.
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: Vec<&str> = keys.into_iter().collect();
        let items = [Presentation::Desktop, Presentation::Mobile]
            .into_iter()
            .flat_map(|presentation| {
                keys.iter().map(move |key| NavItem {
                    key: key.to_string(),
                    presentation,
                    active: false,
                })
            })
            .collect();
        NavState { items }
    }

    /// Marks `key` active in one strip and clears the rest of that strip.
    /// Returns false and leaves the strip untouched when no item carries `key`.
    pub fn set_active(&mut self, presentation: Presentation, key: &str) -> bool {
        let present = self
            .items
            .iter()
            .any(|item| item.presentation == presentation && item.key == key);
        if !present {
            return false;
        }

        let mut marked = false;
        for item in self.items.iter_mut().filter(|i| i.presentation == presentation) {
            item.active = !marked && item.key == key;
            marked |= item.active;
        }
        true
    }

    /// Activates `key` in the strip the user touched, then mirrors it to the
    /// other strip so the two never disagree.
    pub fn sync(&mut self, key: &str, from: Presentation) {
        self.set_active(from, key);
        self.set_active(from.other(), key);
    }

    pub fn active(&self, presentation: Presentation) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.presentation == presentation && item.active)
            .map(|item| item.key.as_str())
    }

    pub fn is_active(&self, presentation: Presentation, key: &str) -> bool {
        self.active(presentation) == Some(key)
    }

    pub fn items(&self, presentation: Presentation) -> impl Iterator<Item = &NavItem> {
        self.items
            .iter()
            .filter(move |item| item.presentation == presentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(state: &NavState, presentation: Presentation) -> usize {
        state.items(presentation).filter(|item| item.active).count()
    }

    #[test]
    fn at_most_one_active_per_strip_after_any_sequence() {
        let mut state = NavState::new(["general", "process", "pricing", "team"]);
        let clicks = [
            ("pricing", Presentation::Desktop),
            ("team", Presentation::Mobile),
            ("team", Presentation::Mobile),
            ("missing", Presentation::Desktop),
            ("general", Presentation::Mobile),
            ("process", Presentation::Desktop),
        ];
        for (key, from) in clicks {
            state.sync(key, from);
            assert!(active_count(&state, Presentation::Desktop) <= 1);
            assert!(active_count(&state, Presentation::Mobile) <= 1);
        }
        assert_eq!(state.active(Presentation::Desktop), Some("process"));
    }

    #[test]
    fn sync_mirrors_into_the_other_strip() {
        for from in [Presentation::Desktop, Presentation::Mobile] {
            let mut state = NavState::new(["general", "pricing"]);
            state.sync("pricing", from);
            assert!(state.is_active(Presentation::Desktop, "pricing"));
            assert!(state.is_active(Presentation::Mobile, "pricing"));
        }
    }

    #[test]
    fn unknown_key_leaves_strip_untouched() {
        let mut state = NavState::new(["general", "pricing"]);
        state.sync("general", Presentation::Desktop);
        assert!(!state.set_active(Presentation::Mobile, "careers"));
        assert_eq!(state.active(Presentation::Mobile), Some("general"));
    }

    #[test]
    fn key_missing_from_one_strip_only_updates_the_other() {
        let mut state = NavState { items: vec![
            NavItem { key: "general".into(), presentation: Presentation::Desktop, active: true },
            NavItem { key: "faq".into(), presentation: Presentation::Desktop, active: false },
            NavItem { key: "general".into(), presentation: Presentation::Mobile, active: true },
        ] };
        state.sync("faq", Presentation::Desktop);
        assert_eq!(state.active(Presentation::Desktop), Some("faq"));
        assert_eq!(state.active(Presentation::Mobile), Some("general"));
    }
}
