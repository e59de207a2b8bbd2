use yew::prelude::*;

use crate::config::MENU_TOGGLE_ID;

const LIFTED: &str = "transform: translateY(-1px); transition: transform 0.2s ease;";
const SETTLED: &str = "transform: translateY(0); transition: transform 0.2s ease;";

const CARD_RAISED: &str = "box-shadow: 0 10px 25px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05); transition: box-shadow 0.3s ease;";
const CARD_RESTING: &str = "box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06); transition: box-shadow 0.3s ease;";

const AVATAR_HOVER: &str = "transition: transform 0.2s ease;";
const AVATAR_REST: &str = "transition: transform 0.2s ease; transform: scale(1);";

/// Pointer interaction last seen on an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pointer {
    #[default]
    Untouched,
    Entered,
    Left,
    Pressed,
}

pub fn button_style(button_id: Option<&str>, pointer: Pointer) -> Option<&'static str> {
    if button_id == Some(MENU_TOGGLE_ID) {
        return None;
    }
    match pointer {
        Pointer::Untouched => None,
        Pointer::Entered => Some(LIFTED),
        Pointer::Left | Pointer::Pressed => Some(SETTLED),
    }
}

pub fn card_style(pointer: Pointer) -> Option<&'static str> {
    match pointer {
        Pointer::Untouched => None,
        Pointer::Entered => Some(CARD_RAISED),
        Pointer::Left | Pointer::Pressed => Some(CARD_RESTING),
    }
}

pub fn avatar_style(pointer: Pointer) -> Option<&'static str> {
    match pointer {
        Pointer::Untouched | Pointer::Pressed => None,
        Pointer::Entered => Some(AVATAR_HOVER),
        Pointer::Left => Some(AVATAR_REST),
    }
}

fn track(pointer: &UseStateHandle<Pointer>, next: Pointer) -> Callback<MouseEvent> {
    let pointer = pointer.clone();
    Callback::from(move |_| pointer.set(next))
}

#[derive(Properties, PartialEq)]
pub struct LiftButtonProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// Button that lifts a pixel on hover and settles on leave or press.
#[function_component(LiftButton)]
pub fn lift_button(props: &LiftButtonProps) -> Html {
    let pointer = use_state(Pointer::default);
    let style = button_style(props.id.as_deref(), *pointer);

    html! {
        <button
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            onmouseenter={track(&pointer, Pointer::Entered)}
            onmouseleave={track(&pointer, Pointer::Left)}
            onmousedown={track(&pointer, Pointer::Pressed)}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let pointer = use_state(Pointer::default);

    html! {
        <div
            class={classes!("bg-white", "rounded-lg", props.class.clone())}
            style={card_style(*pointer)}
            onmouseenter={track(&pointer, Pointer::Entered)}
            onmouseleave={track(&pointer, Pointer::Left)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMemberProps {
    pub name: AttrValue,
    pub role: AttrValue,
    pub initials: AttrValue,
}

#[function_component(TeamMember)]
pub fn team_member(props: &TeamMemberProps) -> Html {
    let pointer = use_state(Pointer::default);

    html! {
        <div
            class="flex items-center gap-3 team-member"
            onmouseenter={track(&pointer, Pointer::Entered)}
            onmouseleave={track(&pointer, Pointer::Left)}
        >
            <div class="rounded-full avatar" style={avatar_style(*pointer)}>
                {props.initials.clone()}
            </div>
            <div>
                <p class="team-name">{props.name.clone()}</p>
                <p class="team-role">{props.role.clone()}</p>
            </div>
        </div>
    }
}
