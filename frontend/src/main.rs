use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

mod config;
mod error;
mod host;
mod controller {
    pub mod booking;
    pub mod menu;
    pub mod nav;
    pub mod page;
    pub mod scroll;
}
mod components {
    pub mod booking_modal;
    pub mod decor;
    pub mod funnel;
    pub mod navigation;
    pub mod sections;
}

use components::{
    booking_modal::BookingModal,
    navigation::{Header, MobileNav},
    sections::Sections,
};
use controller::{
    booking::{configured_slots, FormField},
    nav::Presentation,
    page::{PageAction, PageController},
    scroll::TimerSlot,
};
use host::{BrowserHost, DetachedHost, Host};

fn connect_host() -> Rc<dyn Host> {
    match BrowserHost::new() {
        Ok(host) => Rc::new(host),
        Err(e) => {
            error!("Page effects disabled, {}", e);
            Rc::new(DetachedHost)
        }
    }
}

/// Re-syncs the tabs to whatever section is centred once scrolling pauses.
#[hook]
fn use_scrollspy(page: UseReducerHandle<PageController>) {
    let timer = use_mut_ref(TimerSlot::<Timeout>::default);

    use_event_with_window("scroll", move |_: Event| {
        if !config::SCROLLSPY_ENABLED {
            return;
        }
        let page = page.clone();
        let settled = Timeout::new(config::SCROLLSPY_DEBOUNCE_MS, move || {
            page.dispatch(PageAction::ScrollSettled);
        });
        timer.borrow_mut().arm(settled);
    });
}

fn dispatcher<T: 'static>(
    page: &UseReducerHandle<PageController>,
    action: impl Fn(T) -> PageAction + 'static,
) -> Callback<T> {
    let page = page.clone();
    Callback::from(move |value: T| page.dispatch(action(value)))
}

#[function_component]
fn App() -> Html {
    let page = use_reducer(|| PageController::new(connect_host()));
    let slots = use_memo(|_| configured_slots(), ());
    use_scrollspy(page.clone());

    let on_activate = dispatcher(&page, |(key, from): (String, Presentation)| {
        PageAction::Activate { key, from }
    });
    let on_toggle_menu = dispatcher(&page, |_: ()| PageAction::ToggleMenu);
    let on_overlay_click = dispatcher(&page, |_: ()| PageAction::OverlayClicked);
    let on_book = dispatcher(&page, |_: ()| PageAction::OpenBooking);
    let on_close_booking = dispatcher(&page, |_: ()| PageAction::CloseBooking);
    let on_select = dispatcher(&page, PageAction::SelectSlot);
    let on_edit = dispatcher(&page, |(field, value): (FormField, String)| {
        PageAction::EditBooking(field, value)
    });
    let on_confirm = dispatcher(&page, |_: ()| PageAction::ConfirmBooking);

    html! {
        <>
            <Header
                nav={page.nav().clone()}
                menu={page.menu()}
                on_activate={on_activate.clone()}
                {on_toggle_menu}
                on_book={on_book.clone()}
            />
            <MobileNav
                nav={page.nav().clone()}
                menu={page.menu()}
                {on_activate}
                {on_overlay_click}
            />
            <Sections {on_book} />
            <BookingModal
                booking={page.booking().clone()}
                slots={(*slots).clone()}
                on_close={on_close_booking}
                {on_select}
                {on_edit}
                {on_confirm}
            />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
