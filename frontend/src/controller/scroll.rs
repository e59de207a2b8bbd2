use log::debug;

use crate::config::HEADER_OFFSET;
use crate::host::{Host, SectionBounds};

pub fn scroll_target(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}

/// Smooth-scrolls so the section lands just below the header. Returns the
/// requested offset, or `None` when the section isn't on the page.
pub fn scroll_to_section(host: &dyn Host, key: &str) -> Option<f64> {
    let Some(offset_top) = host.section_offset_top(key) else {
        debug!("No section #{} to scroll to", key);
        return None;
    };
    let top = scroll_target(offset_top);
    host.scroll_window_to(top);
    Some(top)
}

/// Section whose vertical centre is nearest the viewport centre. A strictly
/// smaller distance is needed to beat an earlier section.
pub fn nearest_to_center(sections: &[SectionBounds], viewport_height: f64) -> Option<&SectionBounds> {
    let viewport_center = viewport_height / 2.0;
    let mut closest: Option<(&SectionBounds, f64)> = None;
    for section in sections {
        let distance = (section.center() - viewport_center).abs();
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((section, distance)),
        }
    }
    closest.map(|(section, _)| section)
}

/// Holds at most one pending timer of a kind. Arming a new one drops the
/// previous handle, and dropping a `gloo_timers` handle cancels it.
pub struct TimerSlot<T> {
    pending: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        TimerSlot { pending: None }
    }
}

impl<T> TimerSlot<T> {
    /// Returns true when an earlier handle was replaced, cancelling it if it
    /// had not fired yet.
    pub fn arm(&mut self, handle: T) -> bool {
        self.pending.replace(handle).is_some()
    }
}
