use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-inner">
                <span class="hero-tag">{"AI-POWERED RESEARCH PLATFORMS"}</span>
                <h1>
                    {"Websites Built for"}
                    <br />
                    <span class="gradient-text">{"Scientific Discovery"}</span>
                </h1>
                <p class="hero-lead">
                    {"We design and build intelligent web platforms for biology, chemistry and \
                      physics research — interactive, secure and reproducible."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Start a Project"}
                    </Link<Route>>
                    <Link<Route> to={Route::Services} classes="btn-secondary">
                        {"Explore Services"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
