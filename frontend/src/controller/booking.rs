use std::fmt;

use chrono::NaiveTime;
use thiserror::Error;

use crate::config::TIME_SLOTS;

pub const DEFAULT_CONFIRM_LABEL: &str = "Book Call";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: String,
    pub time: NaiveTime,
}

impl TimeSlot {
    /// 12-hour label shown on the slot button, e.g. "2:00 PM".
    pub fn label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

pub fn configured_slots() -> Vec<TimeSlot> {
    TIME_SLOTS
        .iter()
        .filter_map(|&(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .enumerate()
        .map(|(i, time)| TimeSlot {
            id: format!("slot-{}", i),
            time,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotSelection {
    pub slot_id: String,
    pub time_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please fill in your name and email to book the call.")]
    MissingContact,
    #[error("no time slot selected")]
    NoSlotSelected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub name: String,
    pub email: String,
    pub time_label: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Thank you {}! Your intro call for {} has been booked. We'll send a confirmation email to {}.",
            self.name, self.time_label, self.email
        )
    }
}

/// Intro call booking modal. Purely local: nothing is sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Booking {
    modal_open: bool,
    selection: Option<SlotSelection>,
    form: BookingForm,
}

impl Booking {
    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn selection(&self) -> Option<&SlotSelection> {
        self.selection.as_ref()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn is_selected(&self, slot_id: &str) -> bool {
        self.selection
            .as_ref()
            .map_or(false, |s| s.slot_id == slot_id)
    }

    pub fn confirm_enabled(&self) -> bool {
        self.selection.is_some()
    }

    pub fn confirm_label(&self) -> String {
        match &self.selection {
            Some(selection) => format!("Book {} Call", selection.time_label),
            None => DEFAULT_CONFIRM_LABEL.to_string(),
        }
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Closing always drops the picked slot.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selection = None;
    }

    /// Selecting replaces any earlier pick, so exactly one slot stays selected.
    pub fn select_slot(&mut self, slot_id: &str, time_label: &str) {
        self.selection = Some(SlotSelection {
            slot_id: slot_id.to_string(),
            time_label: time_label.to_string(),
        });
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.form.name = value,
            FormField::Email => self.form.email = value,
            FormField::Message => self.form.message = value,
        }
    }

    /// Validates the form and, on success, clears it and closes the modal.
    /// On error nothing changes.
    pub fn confirm(&mut self) -> Result<Confirmation, BookingError> {
        let selection = self.selection.as_ref().ok_or(BookingError::NoSlotSelected)?;
        let name = self.form.name.trim();
        let email = self.form.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(BookingError::MissingContact);
        }

        let confirmation = Confirmation {
            name: name.to_string(),
            email: email.to_string(),
            time_label: selection.time_label.clone(),
        };
        self.form = BookingForm::default();
        self.close_modal();
        Ok(confirmation)
    }
}
