use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page page-not-found">
            <div class="section-inner">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
            </div>
        </div>
    }
}
