use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use super::booking::{Booking, BookingError, FormField, SlotSelection};
use super::menu::MenuState;
use super::nav::{NavState, Presentation};
use super::scroll;
use crate::config::{INITIAL_SECTION, SECTIONS};
use crate::host::Host;

pub enum PageAction {
    Activate { key: String, from: Presentation },
    ToggleMenu,
    /// Click landed on the overlay backdrop itself, not on the menu inside it.
    OverlayClicked,
    /// The scroll debounce settled; re-sync tabs to what's on screen.
    ScrollSettled,
    OpenBooking,
    CloseBooking,
    SelectSlot(SlotSelection),
    EditBooking(FormField, String),
    ConfirmBooking,
}

/// All interactive state of the page. Built once per page view and held by
/// the root component's reducer.
#[derive(Clone)]
pub struct PageController {
    host: Rc<dyn Host>,
    sections: Vec<String>,
    nav: NavState,
    menu: MenuState,
    booking: Booking,
    spied_section: Option<String>,
}

impl PageController {
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self::with_sections(host, SECTIONS.iter().map(|(key, _)| *key))
    }

    pub fn with_sections<'a>(host: Rc<dyn Host>, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let sections: Vec<String> = keys.into_iter().map(str::to_string).collect();
        let mut nav = NavState::new(sections.iter().map(String::as_str));
        // Mirrored to both strips so mobile starts in agreement with desktop.
        nav.sync(INITIAL_SECTION, Presentation::Desktop);
        PageController {
            host,
            sections,
            nav,
            menu: MenuState::default(),
            booking: Booking::default(),
            spied_section: None,
        }
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    pub fn activate(&mut self, key: &str, from: Presentation) {
        debug!("Activating section {} from {:?} tabs", key, from);
        self.nav.sync(key, from);
        scroll::scroll_to_section(self.host.as_ref(), key);
        if from == Presentation::Mobile {
            self.close_menu();
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        self.apply_menu_flags();
    }

    pub fn open_menu(&mut self) {
        self.menu.open();
        self.apply_menu_flags();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
        self.apply_menu_flags();
    }

    fn apply_menu_flags(&self) {
        let flags = self.menu.flags();
        self.host.set_background_scroll_locked(flags.background_scroll_locked);
    }

    /// Marks the section nearest the viewport centre active in both strips.
    /// Does not scroll, the user is already doing that.
    pub fn sync_to_viewport(&mut self) {
        let Some(viewport_height) = self.host.viewport_height() else {
            return;
        };
        let bounds = self.host.section_bounds(&self.sections);
        let Some(nearest) = scroll::nearest_to_center(&bounds, viewport_height) else {
            return;
        };
        if self.spied_section.as_deref() == Some(nearest.key.as_str()) {
            return;
        }

        let key = nearest.key.clone();
        self.nav.set_active(Presentation::Desktop, &key);
        self.nav.set_active(Presentation::Mobile, &key);
        self.spied_section = Some(key);
    }

    pub fn open_booking(&mut self) {
        self.booking.open_modal();
        self.host.set_background_scroll_locked(true);
    }

    pub fn close_booking(&mut self) {
        self.booking.close_modal();
        self.host.set_background_scroll_locked(false);
    }

    pub fn select_slot(&mut self, slot_id: &str, time_label: &str) {
        self.booking.select_slot(slot_id, time_label);
    }

    pub fn edit_booking(&mut self, field: FormField, value: String) {
        self.booking.set_field(field, value);
    }

    pub fn confirm_booking(&mut self) {
        match self.booking.confirm() {
            Ok(confirmation) => {
                info!("Intro call booked for {}", confirmation.time_label);
                self.host.alert(&confirmation.to_string());
                self.host.set_background_scroll_locked(false);
            }
            Err(BookingError::NoSlotSelected) => {
                debug!("Confirm clicked without a time slot, ignoring");
            }
            Err(err) => self.host.alert(&err.to_string()),
        }
    }

    fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Activate { key, from } => self.activate(&key, from),
            PageAction::ToggleMenu => self.toggle_menu(),
            PageAction::OverlayClicked => self.close_menu(),
            PageAction::ScrollSettled => self.sync_to_viewport(),
            PageAction::OpenBooking => self.open_booking(),
            PageAction::CloseBooking => self.close_booking(),
            PageAction::SelectSlot(selection) => {
                self.select_slot(&selection.slot_id, &selection.time_label)
            }
            PageAction::EditBooking(field, value) => self.edit_booking(field, value),
            PageAction::ConfirmBooking => self.confirm_booking(),
        }
    }
}

impl Reducible for PageController {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::host::SectionBounds;

    fn page_with(host: &Rc<RecordingHost>) -> PageController {
        let shared: Rc<dyn Host> = host.clone();
        PageController::with_sections(shared, ["general", "process", "pricing", "team"])
    }

    #[test]
    fn starts_on_general_in_both_strips() {
        let host = Rc::new(RecordingHost::default());
        let page = page_with(&host);
        assert!(page.nav().is_active(Presentation::Desktop, "general"));
        assert!(page.nav().is_active(Presentation::Mobile, "general"));
        assert_eq!(page.menu(), MenuState::Closed);
        assert!(host.scrolls.borrow().is_empty());
    }

    #[test]
    fn mobile_tab_click_syncs_closes_and_scrolls() {
        let host = Rc::new(RecordingHost::with_sections(&[("general", 0.0), ("pricing", 2400.0)]));
        let mut page = page_with(&host);
        page.open_menu();
        assert!(host.scroll_locked.get());

        page.activate("pricing", Presentation::Mobile);

        assert!(page.nav().is_active(Presentation::Mobile, "pricing"));
        assert!(page.nav().is_active(Presentation::Desktop, "pricing"));
        assert_eq!(page.menu(), MenuState::Closed);
        assert!(!host.scroll_locked.get());
        assert_eq!(host.last_scroll(), Some(2320.0));
    }

    #[test]
    fn desktop_tab_click_leaves_menu_alone() {
        let host = Rc::new(RecordingHost::with_sections(&[("team", 500.0)]));
        let mut page = page_with(&host);
        page.open_menu();
        page.activate("team", Presentation::Desktop);
        assert_eq!(page.menu(), MenuState::Open);
        assert!(page.nav().is_active(Presentation::Mobile, "team"));
        assert_eq!(host.last_scroll(), Some(420.0));
    }

    #[test]
    fn activating_a_section_missing_from_the_page_still_syncs() {
        let host = Rc::new(RecordingHost::default());
        let mut page = page_with(&host);
        page.activate("process", Presentation::Desktop);
        assert!(page.nav().is_active(Presentation::Mobile, "process"));
        assert!(host.scrolls.borrow().is_empty());
    }

    #[test]
    fn toggle_through_reducer() {
        let host = Rc::new(RecordingHost::default());
        let page = Rc::new(page_with(&host));
        let page = page.reduce(PageAction::ToggleMenu);
        assert_eq!(page.menu(), MenuState::Open);
        let page = page.reduce(PageAction::OverlayClicked);
        assert_eq!(page.menu(), MenuState::Closed);
        let page = page.reduce(PageAction::ToggleMenu).reduce(PageAction::ToggleMenu);
        assert_eq!(page.menu(), MenuState::Closed);
        assert!(!host.scroll_locked.get());
    }

    #[test]
    fn scrollspy_marks_centre_section_once() {
        let host = Rc::new(RecordingHost {
            viewport: Some(800.0),
            bounds: vec![
                SectionBounds { key: "general".into(), top: -900.0, height: 800.0 },
                SectionBounds { key: "process".into(), top: 0.0, height: 800.0 },
                SectionBounds { key: "pricing".into(), top: 800.0, height: 800.0 },
            ],
            ..Default::default()
        });
        let mut page = page_with(&host);

        page.sync_to_viewport();
        assert!(page.nav().is_active(Presentation::Desktop, "process"));
        assert!(page.nav().is_active(Presentation::Mobile, "process"));
        assert!(host.scrolls.borrow().is_empty());

        // Same section again after a manual click elsewhere: spy stays quiet.
        page.nav.sync("team", Presentation::Desktop);
        page.sync_to_viewport();
        assert!(page.nav().is_active(Presentation::Desktop, "team"));
    }

    #[test]
    fn booking_round_trip_alerts_and_resets() {
        let host = Rc::new(RecordingHost::default());
        let mut page = page_with(&host);
        page.open_booking();
        assert!(host.scroll_locked.get());

        page.select_slot("slot-3", "2:00 PM");
        page.edit_booking(FormField::Name, "Ann".into());
        page.edit_booking(FormField::Email, "a@x.com".into());
        page.confirm_booking();

        let alert = host.last_alert().unwrap();
        assert!(alert.contains("2:00 PM"));
        assert!(alert.contains("a@x.com"));
        assert!(page.booking().selection().is_none());
        assert_eq!(page.booking().confirm_label(), "Book Call");
        assert!(!page.booking().is_open());
        assert!(!host.scroll_locked.get());
    }

    #[test]
    fn booking_without_name_alerts_and_keeps_modal() {
        let host = Rc::new(RecordingHost::default());
        let mut page = page_with(&host);
        page.open_booking();
        page.select_slot("slot-1", "10:00 AM");
        page.edit_booking(FormField::Email, "a@x.com".into());
        page.confirm_booking();

        assert_eq!(
            host.last_alert().as_deref(),
            Some("Please fill in your name and email to book the call.")
        );
        assert!(page.booking().is_open());
        assert!(page.booking().is_selected("slot-1"));
        assert!(host.scroll_locked.get());
    }

    #[test]
    fn closing_booking_drops_selection() {
        let host = Rc::new(RecordingHost::default());
        let mut page = page_with(&host);
        page.open_booking();
        page.select_slot("slot-0", "9:00 AM");
        page.close_booking();
        assert!(!page.booking().confirm_enabled());
        page.confirm_booking();
        assert!(host.alerts.borrow().is_empty());
    }
}
