//! Fixed top bar: brand, dropdown navigation, login trigger and the
//! mobile hamburger menu.

use yew::prelude::*;

use crate::content::{LOGO, NAV_MENU, SITE_NAME, TAGLINE};
use crate::util::title_to_slug;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_login_click: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    html! {
        <header class="site-header">
            <div class="container header-bar">
                <a class="brand" href="/">
                    <img class="brand-logo" src={LOGO} alt={format!("{SITE_NAME} logo")} />
                    <span class="brand-slogan">{ TAGLINE }</span>
                </a>

                <nav class="desktop-nav">
                    { for NAV_MENU.iter().map(|section| html! {
                        <div key={section.title} class="nav-item">
                            <button class="nav-trigger">{ section.title }</button>
                            <div class="nav-dropdown">
                                { for section.entries.iter().map(|entry| html! {
                                    <a
                                        key={*entry}
                                        class="nav-link"
                                        href={format!("/{}", title_to_slug(entry))}
                                    >
                                        { *entry }
                                    </a>
                                })}
                            </div>
                        </div>
                    })}
                    <button class="btn-primary" onclick={props.on_login_click.clone()}>
                        { "Login" }
                    </button>
                </nav>

                <button class="menu-toggle" onclick={on_menu_toggle} aria-label="Toggle menu">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d={if *menu_open { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }}
                        />
                    </svg>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-nav">
                    { for NAV_MENU.iter().map(|section| html! {
                        <div key={section.title} class="mobile-nav-section">
                            <div class="mobile-nav-title">{ section.title }</div>
                            { for section.entries.iter().map(|entry| html! {
                                <a
                                    key={*entry}
                                    class="mobile-nav-link"
                                    href={format!("/{}", title_to_slug(entry))}
                                >
                                    { *entry }
                                </a>
                            })}
                        </div>
                    })}
                    <div class="mobile-nav-footer">
                        <button class="btn-primary btn-block" onclick={props.on_login_click.clone()}>
                            { "Login" }
                        </button>
                    </div>
                </div>
            }
        </header>
    }
}
