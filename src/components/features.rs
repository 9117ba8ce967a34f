//! Three-card grid of the main product offerings.

use yew::prelude::*;

use crate::content::FEATURES;
use crate::util::title_to_slug;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features">
            <div class="container">
                <h2 class="section-title">
                    { "Unlock the Power of Supply Chain Intelligence" }
                </h2>

                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class={classes!("feature-card", feature.accent.class())}>
                            <img class="feature-icon" src={feature.icon} alt={feature.title} />
                            <h3 class="feature-title">{ feature.title }</h3>
                            <p class="feature-description">{ feature.description }</p>

                            <ul class="feature-items">
                                { for feature.items.iter().map(|item| html! {
                                    <li key={*item} class="feature-item">
                                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M5 13l4 4L19 7"
                                            />
                                        </svg>
                                        { *item }
                                    </li>
                                })}
                            </ul>

                            <a class="btn-primary btn-block" href={format!("/{}", title_to_slug(feature.title))}>
                                { "Learn More" }
                            </a>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
