use yew::prelude::*;

use crate::data::testimonials::testimonials;

#[function_component(Testimonials)]
pub fn testimonials_section() -> Html {
    html! {
        <section class="testimonials">
            <div class="section-inner">
                <h2>{"Trusted by Research Teams"}</h2>
                <div class="testimonial-grid">
                    { for testimonials().iter().map(|t| html! {
                        <figure class="testimonial-card">
                            <blockquote>{t.quote}</blockquote>
                            <figcaption>
                                <strong>{t.name}</strong>
                                <span>{format!("{}, {}", t.role, t.organization)}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}
