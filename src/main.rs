mod carousel;
mod components;
mod content;
mod util;

use yew::prelude::*;

use components::{Features, Footer, Header, Hero, LoginModal};

#[function_component(App)]
fn app() -> Html {
    // The only page-level state: login modal visibility.
    let login_open = use_state(|| false);

    let on_login_click = {
        let login_open = login_open.clone();
        Callback::from(move |_| login_open.set(true))
    };
    let on_login_close = {
        let login_open = login_open.clone();
        Callback::from(move |_| login_open.set(false))
    };

    html! {
        <div class="page">
            <Header {on_login_click} />
            <main class="page-main">
                <Hero />
                <Features />
            </main>
            <Footer />
            <LoginModal open={*login_open} on_close={on_login_close} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
