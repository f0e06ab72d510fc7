mod admin;
mod catalog;
mod components;
mod config;
mod data;
mod pages;
mod scroll;
mod selection;
mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use components::footer::Footer;
use components::nav::Navigation;
use pages::admin::Admin;
use pages::blog::Blog;
use pages::contact::Contact;
use pages::home::Home;
use pages::not_found::NotFound;
use pages::portfolio::Portfolio;
use pages::services::Services;
use scroll::ScrollToTop;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    ServiceDetail { id: String },
    #[at("/portfolio")]
    Portfolio,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: String },
    #[at("/contact")]
    Contact,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        // Detail routes render the same page; the selection hook reads the
        // id segment off the path.
        Route::Services | Route::ServiceDetail { .. } => html! { <Services /> },
        Route::Portfolio => html! { <Portfolio /> },
        Route::Blog | Route::BlogPost { .. } => html! { <Blog /> },
        Route::Contact => html! { <Contact /> },
        Route::Admin => html! { <Admin /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <div class="site">
                <Navigation />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
