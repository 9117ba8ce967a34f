//! Login / signup modal. Purely presentational: submitting only logs
//! the form values, no authentication happens.

use gloo::console::log;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    fn name(self) -> &'static str {
        match self {
            AuthMode::SignIn => "sign-in",
            AuthMode::SignUp => "sign-up",
        }
    }
}

#[derive(Debug, Serialize)]
struct AuthSubmission {
    mode: &'static str,
    name: String,
    email: String,
    password: String,
}

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub open: bool,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let mode = use_state(|| AuthMode::SignIn);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_toggle_mode = {
        let mode = mode.clone();
        Callback::from(move |_| mode.set(mode.toggled()))
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let mode = mode.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = AuthSubmission {
                mode: mode.name(),
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            if let Ok(payload) = serde_json::to_string(&submission) {
                log!("auth form submitted:", payload);
            }
        })
    };

    if !props.open {
        return html! {};
    }

    let signing_in = *mode == AuthMode::SignIn;

    html! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <button class="modal-close" onclick={props.on_close.clone()} aria-label="Close">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6 18L18 6M6 6l12 12"
                        />
                    </svg>
                </button>

                <h2 class="modal-title">
                    { if signing_in { "Welcome Back" } else { "Create Account" } }
                </h2>

                <form class="auth-form" onsubmit={on_submit}>
                    if !signing_in {
                        <div class="form-field">
                            <label for="name">{ "Full Name" }</label>
                            <input
                                type="text"
                                id="name"
                                value={(*name).clone()}
                                oninput={on_name_input}
                                required={true}
                            />
                        </div>
                    }

                    <div class="form-field">
                        <label for="email">{ "Email Address" }</label>
                        <input
                            type="email"
                            id="email"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            required={true}
                        />
                    </div>

                    <div class="form-field">
                        <label for="password">{ "Password" }</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            required={true}
                        />
                    </div>

                    <button type="submit" class="btn-primary btn-block">
                        { if signing_in { "Sign In" } else { "Create Account" } }
                    </button>
                </form>

                <div class="modal-switch">
                    <button class="link-button" onclick={on_toggle_mode}>
                        { if signing_in {
                            "Don't have an account? Sign up"
                        } else {
                            "Already have an account? Sign in"
                        } }
                    </button>
                </div>
            </div>
        </div>
    }
}
