//! Hero section: the auto-rotating article carousel with arrow, dot
//! and timer navigation.

use gloo_timers::callback::Interval;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::carousel::{CarouselAction, CarouselState, ROTATION_MS};
use crate::content::ARTICLES;

#[function_component(Hero)]
pub fn hero() -> Html {
    let state = use_reducer(|| CarouselState::new(ARTICLES.len()));

    // One repeating timer per mounted hero. The effect destructor owns
    // the handle, so unmount cancels the rotation.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let timer = Interval::new(ROTATION_MS, move || {
                state.dispatch(CarouselAction::Advance);
            });
            move || drop(timer)
        });
    }

    let current = state.current();

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(CarouselAction::Next))
    };

    // A failed image stays invisible behind its placeholder; rotation
    // is unaffected.
    let on_image_error = Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlElement>() {
            let _ = img.style().set_property("opacity", "0");
        }
    });

    html! {
        <section class="hero">
            <div class="container">
                <div class="carousel">
                    <div class="carousel-viewport">
                        <div
                            class="carousel-track"
                            style={format!("transform: translateX(-{}%);", current * 100)}
                        >
                            { for ARTICLES.iter().map(|article| {
                                let loaded = state.is_loaded(article.id);
                                let on_load = {
                                    let state = state.clone();
                                    let id = article.id;
                                    Callback::from(move |_: Event| {
                                        state.dispatch(CarouselAction::MarkLoaded(id));
                                    })
                                };
                                html! {
                                    <div key={article.id} class="slide">
                                        <div class="slide-grid">
                                            <div class="slide-media">
                                                <img
                                                    class={classes!("slide-image", loaded.then_some("is-loaded"))}
                                                    src={article.image}
                                                    alt={article.title}
                                                    onload={on_load}
                                                    onerror={on_image_error.clone()}
                                                />
                                                if !loaded {
                                                    <div class="slide-placeholder"></div>
                                                }
                                            </div>
                                            <div class="slide-body">
                                                <h2 class="slide-title">{ article.title }</h2>
                                                <p class="slide-summary">{ article.summary }</p>
                                                <div class="related">
                                                    <h3 class="related-title">{ "Related Articles" }</h3>
                                                    { for ARTICLES
                                                        .iter()
                                                        .filter(|other| other.id != article.id)
                                                        .take(2)
                                                        .map(|other| html! {
                                                            <p key={other.id} class="related-link">{ other.title }</p>
                                                        })
                                                    }
                                                </div>
                                                <button class="btn-primary slide-cta">{ "Read More" }</button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    </div>

                    <button class="carousel-arrow arrow-left" onclick={on_previous} aria-label="Previous article">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                        </svg>
                    </button>
                    <button class="carousel-arrow arrow-right" onclick={on_next} aria-label="Next article">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                        </svg>
                    </button>
                </div>

                <div class="carousel-dots">
                    { for (0..state.len()).map(|index| {
                        let on_dot = {
                            let state = state.clone();
                            Callback::from(move |_| state.dispatch(CarouselAction::GoTo(index as isize)))
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("dot", (index == current).then_some("is-active"))}
                                onclick={on_dot}
                                aria-label={format!("Go to slide {}", index + 1)}
                            />
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
