use yew::prelude::*;
use yew_router::components::Link;

use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::testimonials::Testimonials;
use crate::data::services::services;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_memo(|_| services(), ());

    html! {
        <div class="page page-home">
            <Hero />
            <section class="home-services">
                <div class="section-inner">
                    <h2>{"What We Build"}</h2>
                    <div class="service-teasers">
                        { for catalog.iter().map(|service| html! {
                            <Link<Route>
                                to={Route::ServiceDetail { id: service.id.to_string() }}
                                classes="service-teaser"
                            >
                                <h3>{service.title}</h3>
                                <p>{service.short}</p>
                                <span class="teaser-more">{"Learn more →"}</span>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </section>
            <Features />
            <Testimonials />
            <section class="home-cta">
                <div class="section-inner">
                    <h2>{"Ready to share your research with the world?"}</h2>
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Get in Touch"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
