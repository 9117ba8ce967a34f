//! Site footer: brand block with newsletter signup, link sections,
//! social links and the copyright line.

use gloo::console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::{FOOTER_SECTIONS, LOGO, SITE_NAME, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    // Newsletter signup is not wired to a backend; the address is only
    // logged to the console.
    let on_subscribe = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!("newsletter signup:", (*email).clone());
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a class="footer-logo" href="/">
                            <img src={LOGO} alt={SITE_NAME} />
                        </a>
                        <div class="newsletter">
                            <h3 class="footer-heading">{ "Stay Updated" }</h3>
                            <form class="newsletter-form" onsubmit={on_subscribe}>
                                <input
                                    type="email"
                                    class="newsletter-input"
                                    placeholder="Enter your email"
                                    value={(*email).clone()}
                                    oninput={on_email_input}
                                />
                                <button type="submit" class="btn-primary newsletter-join">
                                    { "Join" }
                                </button>
                            </form>
                        </div>
                    </div>

                    { for FOOTER_SECTIONS.iter().map(|section| html! {
                        <div key={section.title} class="footer-section">
                            <h3 class="footer-heading">{ section.title }</h3>
                            <ul class="footer-links">
                                { for section.links.iter().map(|link| html! {
                                    <li key={link.label}>
                                        <a class="footer-link" href={link.href}>{ link.label }</a>
                                    </li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>

                <div class="footer-bottom">
                    <p class="copyright">
                        { format!("© {year} {SITE_NAME}. All rights reserved.") }
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                key={social.platform}
                                class="social-link"
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={format!("Follow us on {}", social.platform)}
                            >
                                <img src={social.icon} alt={social.platform} />
                            </a>
                        })}
                    </div>
                </div>
            </div>
        </footer>
    }
}
