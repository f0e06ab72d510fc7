use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::Route;

fn section(route: &Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::Services | Route::ServiceDetail { .. } => "services",
        Route::Portfolio => "portfolio",
        Route::Blog | Route::BlogPost { .. } => "blog",
        Route::Contact => "contact",
        Route::Admin => "admin",
        Route::NotFound => "",
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let active = use_route::<Route>().as_ref().map(section).unwrap_or("");

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let item = |route: Route, key: &'static str, label: &'static str| {
        html! {
            <Link<Route>
                to={route}
                classes={classes!("nav-link", (active == key).then_some("active"))}
            >
                <span onclick={close_menu.clone()}>{label}</span>
            </Link<Route>>
        }
    };

    html! {
        <header class="site-nav">
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    {"Sagittarius"}
                </Link<Route>>
                <button class="nav-toggle" onclick={toggle} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <nav class={classes!("nav-links", (*menu_open).then_some("open"))}>
                    { item(Route::Home, "home", "Home") }
                    { item(Route::Services, "services", "Services") }
                    { item(Route::Portfolio, "portfolio", "Portfolio") }
                    { item(Route::Blog, "blog", "Blog") }
                    { item(Route::Contact, "contact", "Contact") }
                </nav>
            </div>
        </header>
    }
}
