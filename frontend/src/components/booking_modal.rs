use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::decor::LiftButton;
use crate::controller::booking::{Booking, FormField, SlotSelection, TimeSlot};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub booking: Booking,
    pub slots: Vec<TimeSlot>,
    pub on_close: Callback<()>,
    pub on_select: Callback<SlotSelection>,
    pub on_edit: Callback<(FormField, String)>,
    pub on_confirm: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let booking = &props.booking;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let edit_input = |field: FormField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    let edit_message = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((FormField::Message, input.value()));
        })
    };

    html! {
        <div id="calendar-modal" class={classes!("calendar-modal", booking.is_open().then(|| "active"))}>
            <div class="calendar-dialog">
                <div class="calendar-header">
                    <h3>{"Book an intro call"}</h3>
                    <LiftButton class="calendar-close" onclick={close}>{"✕"}</LiftButton>
                </div>
                <div class="time-slots">
                    { for props.slots.iter().map(|slot| {
                        let label = slot.label();
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let selection = SlotSelection {
                                slot_id: slot.id.clone(),
                                time_label: label.clone(),
                            };
                            Callback::from(move |_: MouseEvent| on_select.emit(selection.clone()))
                        };
                        html! {
                            <LiftButton
                                id={slot.id.clone()}
                                class={classes!("time-slot", booking.is_selected(&slot.id).then(|| "selected"))}
                                {onclick}
                            >
                                {label}
                            </LiftButton>
                        }
                    }) }
                </div>
                if let Some(selection) = booking.selection() {
                    <p class="selected-time">{format!("Selected: {}", selection.time_label)}</p>
                }
                <div class="calendar-form">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={booking.form().name.clone()}
                        oninput={edit_input(FormField::Name)}
                    />
                    <input
                        type="email"
                        placeholder="Your email"
                        value={booking.form().email.clone()}
                        oninput={edit_input(FormField::Email)}
                    />
                    <textarea
                        placeholder="Anything we should know? (optional)"
                        value={booking.form().message.clone()}
                        oninput={edit_message}
                    />
                </div>
                <LiftButton
                    id="confirm-booking"
                    class="confirm-booking"
                    disabled={!booking.confirm_enabled()}
                    onclick={confirm}
                >
                    {booking.confirm_label()}
                </LiftButton>
            </div>
        </div>
    }
}
