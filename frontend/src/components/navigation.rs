use yew::prelude::*;

use super::decor::LiftButton;
use crate::config::{MENU_TOGGLE_ID, SECTIONS};
use crate::controller::menu::MenuState;
use crate::controller::nav::{NavState, Presentation};

fn section_label(key: &str) -> &str {
    SECTIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

/// One tab strip. Both strips share this markup and differ only by class.
fn tab_strip(nav: &NavState, presentation: Presentation, on_activate: &Callback<(String, Presentation)>) -> Html {
    html! {
        { for nav.items(presentation).map(|item| {
            let onclick = {
                let on_activate = on_activate.clone();
                let key = item.key.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_activate.emit((key.clone(), presentation));
                })
            };
            html! {
                <a
                    href={format!("#{}", item.key)}
                    class={classes!(presentation.item_class(), item.active.then(|| "active"))}
                    data-section={item.key.clone()}
                    {onclick}
                >
                    {section_label(&item.key).to_string()}
                </a>
            }
        }) }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub nav: NavState,
    pub menu: MenuState,
    pub on_activate: Callback<(String, Presentation)>,
    pub on_toggle_menu: Callback<()>,
    pub on_book: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let flags = props.menu.flags();

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="#general" class="nav-logo">{"Endless"}</a>
                <nav class="tabs">
                    { tab_strip(&props.nav, Presentation::Desktop, &props.on_activate) }
                </nav>
                <LiftButton class="nav-cta" onclick={book}>{"Book intro call"}</LiftButton>
                <button
                    id={MENU_TOGGLE_ID}
                    class={classes!("burger-menu", flags.toggle_marked.then(|| "menu-open"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span id="burger-icon" class={classes!("icon", flags.burger_hidden.then(|| "hidden"))}>{"☰"}</span>
                    <span id="close-icon" class={classes!("icon", flags.close_hidden.then(|| "hidden"))}>{"✕"}</span>
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileNavProps {
    pub nav: NavState,
    pub menu: MenuState,
    pub on_activate: Callback<(String, Presentation)>,
    pub on_overlay_click: Callback<()>,
}

#[function_component(MobileNav)]
pub fn mobile_nav(props: &MobileNavProps) -> Html {
    let flags = props.menu.flags();

    // Only clicks on the backdrop itself close the menu, not ones bubbling up
    // from the menu panel.
    let overlay_click = {
        let on_overlay_click = props.on_overlay_click.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_overlay_click.emit(());
            }
        })
    };

    html! {
        <div
            id="mobile-nav-overlay"
            class={classes!("mobile-nav-overlay", flags.overlay_visible.then(|| "mobile-nav-overlay-open"))}
            onclick={overlay_click}
        >
            <nav
                id="mobile-nav-menu"
                class={classes!("mobile-nav-menu", flags.menu_visible.then(|| "mobile-nav-open"))}
            >
                { tab_strip(&props.nav, Presentation::Mobile, &props.on_activate) }
            </nav>
        </div>
    }
}
