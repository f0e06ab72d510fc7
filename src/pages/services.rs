use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::detail_panel::ServicePanel;
use crate::data::services::services;
use crate::scroll::listen_escape;
use crate::selection::use_selection;
use crate::Route;

#[function_component(Services)]
pub fn services_page() -> Html {
    let catalog = use_memo(|_| services(), ());
    let selection = use_selection(
        Rc::clone(&catalog),
        "/services",
        |id| Route::ServiceDetail { id },
        Route::Services,
    );
    let panel_open = selection.current().is_some();

    // Escape closes the panel; a short delay lets it render before we scroll
    // it into view.
    {
        let on_close = selection.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let teardown = if *open {
                    let timeout = Timeout::new(100, || {
                        if let Some(panel) = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|d| d.query_selector(".service-panel").ok())
                            .flatten()
                        {
                            panel.scroll_into_view_with_bool(true);
                        }
                    });
                    timeout.forget();
                    Some(listen_escape(move || on_close.emit(())))
                } else {
                    None
                };
                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            panel_open,
        );
    }

    html! {
        <div class="page page-services">
            <section class="page-hero">
                <div class="section-inner">
                    <span class="hero-tag">{"OUR SERVICES"}</span>
                    <h1>{"AI-Powered Websites for"}</h1>
                    <h2 class="gradient-text">{"Biology · Chemistry · Physics"}</h2>
                    <p>
                        {"We integrate modern AI with domain tools used by scientists to deliver \
                          interactive, secure and reproducible research platforms."}
                    </p>
                </div>
            </section>

            <section class="service-cards">
                <div class="section-inner">
                    <div class="card-grid">
                        { for catalog.iter().map(|service| {
                            let open = {
                                let selection_open = selection.on_open.clone();
                                let id = service.id;
                                Callback::from(move |_| selection_open.emit(id.to_string()))
                            };
                            html! {
                                <div
                                    class="service-card"
                                    role="button"
                                    tabindex="0"
                                    onclick={open}
                                    aria-label={format!("Open {} details", service.title)}
                                >
                                    <h3>{service.title}</h3>
                                    <p>{service.short}</p>
                                    <div class="card-meta">
                                        <span class="tag">{service.price}</span>
                                        <span class="muted">{service.timeline}</span>
                                        <span class="card-more">{"Learn more →"}</span>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>

                    {
                        match selection.current() {
                            Some(service) => html! {
                                <ServicePanel
                                    service={service.clone()}
                                    on_close={selection.on_close.clone()}
                                />
                            },
                            None => html! {},
                        }
                    }
                </div>
            </section>

            <section class="delivery">
                <div class="section-inner">
                    <h3>{"How we deliver"}</h3>
                    <p>
                        {"Discovery → Prototyping → Model Integration → Deployment → Monitoring. \
                          Research-grade tooling, reproducible pipelines and secure deployments."}
                    </p>
                    <div class="delivery-grid">
                        <div class="delivery-card">
                            <h4>{"Data & Storage"}</h4>
                            <p>{"Encrypted, versioned storage and fine-grained access control."}</p>
                        </div>
                        <div class="delivery-card">
                            <h4>{"Serving & Models"}</h4>
                            <p>{"Model hosting, batching and secure inference endpoints."}</p>
                        </div>
                        <div class="delivery-card">
                            <h4>{"Performance"}</h4>
                            <p>{"Caching, horizontal scaling and near real-time UX."}</p>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
