use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::data::features::features;
use crate::Route;

/// Searchable "why us" section on the home page. The filter is a pure view
/// over the feature catalog; typing never touches the source data.
#[function_component(Features)]
pub fn features_section() -> Html {
    let catalog = use_memo(|_| features(), ());
    let query = use_state(String::new);
    let expanded = use_state(|| None::<String>);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let filtered = catalog.filter(&query, "");

    html! {
        <section class="features">
            <div class="section-inner">
                <div class="features-header">
                    <h2>{"Why Research Teams Choose Sagittarius"}</h2>
                    <label class="sr-only" for="feature-search">{"Search features"}</label>
                    <input
                        id="feature-search"
                        type="search"
                        placeholder="Search features..."
                        value={(*query).clone()}
                        {oninput}
                    />
                </div>
                {
                    if filtered.is_empty() {
                        html! { <p class="features-empty">{"No features match that search."}</p> }
                    } else {
                        html! {
                            <div class="feature-grid">
                                { for filtered.iter().map(|feature| {
                                    let is_open = expanded.as_deref() == Some(feature.id);
                                    let toggle = {
                                        let expanded = expanded.clone();
                                        let id = feature.id;
                                        Callback::from(move |_| {
                                            expanded.set(if expanded.as_deref() == Some(id) {
                                                None
                                            } else {
                                                Some(id.to_string())
                                            });
                                        })
                                    };
                                    html! {
                                        <div class={classes!("feature-card", is_open.then_some("open"))}>
                                            <h3>{feature.title}</h3>
                                            <p>{feature.short}</p>
                                            { if is_open {
                                                html! { <p class="feature-long">{feature.long}</p> }
                                            } else {
                                                html! {}
                                            } }
                                            <button class="feature-toggle" onclick={toggle}>
                                                { if is_open { "Show less" } else { "Learn more" } }
                                            </button>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }
                }
                <div class="features-cta">
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Talk to an Engineer"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
