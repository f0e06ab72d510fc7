//! Scroll side effects scoped to component lifecycle.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

/// Scrolls the window back to the top on every route change.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );

    html! {}
}

/// Suppresses body scrolling for as long as the guard is alive; the previous
/// overflow value is restored on drop. Acquired when a modal opens, dropped
/// on close or component teardown.
pub struct BodyScrollLock {
    previous: Option<String>,
}

impl BodyScrollLock {
    pub fn acquire() -> Self {
        let previous = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| {
                let style = body.style();
                let prev = style.get_property_value("overflow").unwrap_or_default();
                let _ = style.set_property("overflow", "hidden");
                prev
            });
        Self { previous }
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        if let Some(prev) = self.previous.take() {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let style = body.style();
                if prev.is_empty() {
                    let _ = style.remove_property("overflow");
                } else {
                    let _ = style.set_property("overflow", &prev);
                }
            }
        }
    }
}

/// Installs a window keydown listener that fires `handler` on Escape.
/// Returns the teardown for use inside effect destructors.
pub fn listen_escape(handler: impl Fn() + 'static) -> Box<dyn FnOnce()> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Box::new(|| ()),
    };

    let callback = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Escape" {
            handler();
        }
    });

    if window
        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .is_err()
    {
        return Box::new(|| ());
    }

    Box::new(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
        }
    })
}
