use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::config;
use crate::data::portfolio::{PortfolioItem, CATEGORIES};
use crate::data::team::{members, TeamMember};
use crate::scroll::{listen_escape, BodyScrollLock};
use crate::utils::api::fetch_portfolio;

/// Swaps a broken project or team image for the placeholder. Guarded so a
/// missing placeholder cannot retrigger itself forever.
fn image_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            if !img.src().ends_with(config::PLACEHOLDER_IMAGE.trim_start_matches('/')) {
                img.set_src(config::PLACEHOLDER_IMAGE);
            }
        }
    })
}

fn featured_capacity(width: f64) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        3
    } else {
        4
    }
}

#[function_component(Portfolio)]
pub fn portfolio_page() -> Html {
    let items = use_state(Vec::<PortfolioItem>::new);
    let loading = use_state(|| true);
    let category = use_state(|| "all".to_string());
    let max_featured = use_state(|| 4usize);
    let selected_member = use_state(|| None::<TeamMember>);

    // One fetch on mount; any failure already fell back inside fetch_portfolio.
    {
        let items = items.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    items.set(fetch_portfolio().await);
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    // Featured strip capacity follows the viewport.
    {
        let max_featured = max_featured.clone();
        use_effect_with_deps(
            move |_| {
                let recalc = move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(width) = window.inner_width() {
                            if let Some(width) = width.as_f64() {
                                max_featured.set(featured_capacity(width));
                            }
                        }
                    }
                };
                recalc();

                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let callback = Closure::<dyn Fn()>::new(recalc);
                        match window.add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.remove_event_listener_with_callback(
                                        "resize",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                }
                            }),
                            Err(_) => Box::new(|| ()),
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            (),
        );
    }

    // Team modal: Escape closes it and body scrolling is locked while open.
    let modal_open = selected_member.is_some();
    {
        let selected_member = selected_member.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let held = open.then(|| {
                    let lock = BodyScrollLock::acquire();
                    let teardown = listen_escape(move || selected_member.set(None));
                    (lock, teardown)
                });
                move || {
                    if let Some((lock, teardown)) = held {
                        teardown();
                        drop(lock);
                    }
                }
            },
            modal_open,
        );
    }

    if *loading {
        return html! {
            <div class="page page-portfolio loading">
                <div class="section-inner">
                    <div class="spinner" />
                    <p>{"Loading portfolio..."}</p>
                </div>
            </div>
        };
    }

    let catalog = Catalog::new((*items).clone());
    let filtered = catalog.filter("", &category);
    let featured: Vec<&PortfolioItem> = catalog
        .iter()
        .filter(|it| it.featured)
        .take(*max_featured)
        .collect();

    html! {
        <div class="page page-portfolio">
            <section class="page-hero">
                <div class="section-inner">
                    <span class="hero-tag">{"OUR PORTFOLIO"}</span>
                    <h1>
                        {"Transforming Science Through"}
                        <br />
                        <span class="gradient-text">{"Intelligent Platforms"}</span>
                    </h1>
                </div>
            </section>

            { if !featured.is_empty() {
                html! {
                    <section class="featured-projects">
                        <div class="section-inner">
                            <h2>{"Featured Work"}</h2>
                            <div class="featured-strip">
                                { for featured.iter().map(|item| html! {
                                    <div class="featured-card">
                                        <img src={item.image.clone()} alt={item.title.clone()} onerror={image_fallback()} />
                                        <h3>{&item.title}</h3>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </section>
                }
            } else {
                html! {}
            } }

            <section class="project-list">
                <div class="section-inner">
                    <div class="category-chips">
                        { for CATEGORIES.iter().map(|(id, name)| {
                            let select = {
                                let category = category.clone();
                                let id = *id;
                                Callback::from(move |_| category.set(id.to_string()))
                            };
                            html! {
                                <button
                                    class={classes!("chip", (*category == *id).then_some("active"))}
                                    onclick={select}
                                    aria-pressed={(*category == *id).to_string()}
                                >
                                    {*name}
                                </button>
                            }
                        }) }
                    </div>

                    <div class="project-grid">
                        { for filtered.iter().map(|item| html! {
                            <div class="project-card">
                                <img src={item.image.clone()} alt={item.title.clone()} onerror={image_fallback()} />
                                <div class="project-body">
                                    <span class="tag">{&item.category}</span>
                                    <h3>{&item.title}</h3>
                                    <p>{&item.description}</p>
                                    <div class="tech-tags">
                                        { for item.technologies.iter().map(|t| html! {
                                            <span class="tag">{t.clone()}</span>
                                        }) }
                                    </div>
                                    <div class="project-links">
                                        <a href={item.live_url.clone()} target="_blank" rel="noopener">
                                            {"Live Site"}
                                        </a>
                                        { match &item.github_url {
                                            Some(url) => html! {
                                                <a href={url.clone()} target="_blank" rel="noopener">
                                                    {"Source"}
                                                </a>
                                            },
                                            None => html! {},
                                        } }
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="team">
                <div class="section-inner">
                    <h2>{"The Team"}</h2>
                    <div class="team-grid">
                        { for members().iter().map(|member| {
                            let open = {
                                let selected_member = selected_member.clone();
                                let member = member.clone();
                                Callback::from(move |_| selected_member.set(Some(member.clone())))
                            };
                            html! {
                                <div class="team-card" onclick={open} role="button" tabindex="0">
                                    <img src={member.image} alt={member.name} onerror={image_fallback()} />
                                    <h3>{member.name}</h3>
                                    <p class="muted">{member.role}</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            { match &*selected_member {
                Some(member) => {
                    let close = {
                        let selected_member = selected_member.clone();
                        Callback::from(move |_| selected_member.set(None))
                    };
                    html! {
                        <div class="modal-backdrop" onclick={close.clone()}>
                            <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                <button class="panel-close" onclick={close} aria-label="Close profile">
                                    {"✕"}
                                </button>
                                <img src={member.image} alt={member.name} onerror={image_fallback()} />
                                <h3>{member.name}</h3>
                                <p class="muted">{member.role}</p>
                                <p>{member.bio}</p>
                            </div>
                        </div>
                    }
                }
                None => html! {},
            } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_capacity_follows_breakpoints() {
        assert_eq!(featured_capacity(375.0), 1);
        assert_eq!(featured_capacity(800.0), 3);
        assert_eq!(featured_capacity(1440.0), 4);
    }
}
