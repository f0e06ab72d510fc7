use yew::prelude::*;
use yew_router::components::Link;

use crate::admin::store::FooterContent;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = FooterContent::default();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-about">
                    <h3>{"Sagittarius"}</h3>
                    <p>{content.company_description}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-contact">
                    <h4>{"Contact"}</h4>
                    <p>{content.contact_email}</p>
                    <p>{content.contact_phone}</p>
                    <p>{content.contact_address}</p>
                </div>
            </div>
            <div class="footer-meta">
                <p>{"© 2025 Sagittarius. AI-powered websites for scientific research."}</p>
            </div>
        </footer>
    }
}
