use std::collections::HashSet;

use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::data::services::Service;
use crate::pages::contact::ContactQuery;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServicePanelProps {
    pub service: Service,
    pub on_close: Callback<()>,
}

/// Detail view for the selected service. Purely presentational: the page owns
/// the selection, this only renders it and forwards the close affordance.
#[function_component(ServicePanel)]
pub fn service_panel(props: &ServicePanelProps) -> Html {
    let service = &props.service;
    let expanded_features = use_state(HashSet::<usize>::new);
    let navigator = use_navigator().unwrap();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    // Deep-links into the contact form with this service pre-selected.
    let start_project = {
        let id = service.id;
        Callback::from(move |_| {
            let query = ContactQuery { service: id.to_string() };
            let _ = navigator.push_with_query(&Route::Contact, &query);
        })
    };

    html! {
        <div class="service-panel" tabindex="-1">
            <button class="panel-close" onclick={close} aria-label="Close details">{"✕"}</button>
            <div class="panel-grid">
                <div class="panel-side">
                    {
                        match service.example_image {
                            Some(src) => html! { <img src={src} alt={service.title} /> },
                            None => html! { <div class="panel-image-placeholder" /> },
                        }
                    }
                    <h3>{service.title}</h3>
                    <p>{service.short}</p>
                    <div class="tech-tags">
                        { for service.technologies.iter().map(|t| html! {
                            <span class="tag">{*t}</span>
                        }) }
                    </div>
                </div>
                <div class="panel-main">
                    <section>
                        <h4>{"Overview"}</h4>
                        <p>{service.long}</p>
                    </section>
                    <div class="panel-columns">
                        <section>
                            <h5>{"AI integrations"}</h5>
                            <ul>
                                { for service.ai_integrations.iter().map(|a| html! { <li>{*a}</li> }) }
                            </ul>
                        </section>
                        <section>
                            <h5>{"Use cases"}</h5>
                            <ul>
                                { for service.use_cases.iter().map(|u| html! { <li>{*u}</li> }) }
                            </ul>
                        </section>
                    </div>
                    <div class="panel-columns three">
                        <section>
                            <h6>{"Data types"}</h6>
                            <p>{service.data_types.join(" • ")}</p>
                        </section>
                        <section>
                            <h6>{"Compliance"}</h6>
                            <p>{service.compliance.join(" • ")}</p>
                        </section>
                        <section>
                            <h6>{"Pricing & timeline"}</h6>
                            <p class="price">{service.price}</p>
                            <p class="timeline">{service.timeline}</p>
                        </section>
                    </div>
                    <section>
                        <h5>{"Features"}</h5>
                        <div class="feature-rows">
                            { for service.features.iter().enumerate().map(|(idx, feature)| {
                                let is_open = expanded_features.contains(&idx);
                                let toggle = {
                                    let expanded_features = expanded_features.clone();
                                    Callback::from(move |_| {
                                        let mut next = (*expanded_features).clone();
                                        if !next.remove(&idx) {
                                            next.insert(idx);
                                        }
                                        expanded_features.set(next);
                                    })
                                };
                                html! {
                                    <div class="feature-row">
                                        <div class="feature-row-head">
                                            <span>{*feature}</span>
                                            <button onclick={toggle} aria-expanded={is_open.to_string()}>
                                                { if is_open { "Hide" } else { "Details" } }
                                            </button>
                                        </div>
                                        { if is_open {
                                            html! {
                                                <p class="feature-row-notes">
                                                    {"Implementation notes and integration patterns for \
                                                      delivering this feature securely at scale — APIs, \
                                                      storage, model hosting and caching."}
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        } }
                                    </div>
                                }
                            }) }
                        </div>
                    </section>
                    <div class="panel-actions">
                        <button class="btn-primary" onclick={start_project}>
                            {"Start a Project"}
                        </button>
                        <Link<Route> to={Route::Portfolio} classes="btn-secondary">
                            {"View Related Work"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
