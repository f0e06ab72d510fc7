//! Detail-panel selection synchronized with the browser path.
//!
//! The services and blog pages both show an entry panel that is deep-linkable
//! (`/services/biology`, `/blog/3`). One controller covers both: the path is
//! the source of truth on navigation, direct interaction pushes new history
//! entries, and path-driven updates never push again so back/forward cannot
//! grow the history.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{Catalog, CatalogItem};
use crate::Route;

/// Extracts the single trailing id segment of `{base}/{id}`.
///
/// Returns `None` for the bare base path (with or without a trailing slash),
/// for paths outside `base`, and for anything with more than one extra
/// segment.
pub fn trailing_segment<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?;
    let rest = rest.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

/// Holds "what is currently open" for one catalog page.
///
/// The held entry is always a member of the catalog the transition was made
/// against: `open` and `sync` only ever store values cloned out of it.
#[derive(Clone, PartialEq, Default)]
pub struct SelectionController<T: Clone> {
    current: Option<T>,
}

impl<T: CatalogItem + Clone> SelectionController<T> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Selects the entry with `id`. Unknown ids are a silent no-op and
    /// return `false` so the caller knows not to touch navigation history.
    pub fn open(&mut self, catalog: &Catalog<T>, id: &str) -> bool {
        match catalog.get(id) {
            Some(entry) => {
                self.current = Some(entry.clone());
                true
            }
            None => false,
        }
    }

    /// Clears the selection. Idempotent.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Reconciles the selection with a path, without touching history.
    ///
    /// A matching id selects that entry. An unknown id leaves the current
    /// selection as it was, and so does the bare base path: navigating to
    /// `/services` while a panel is open does not auto-close it. Both are
    /// long-standing site behavior, preserved deliberately.
    pub fn sync(&mut self, catalog: &Catalog<T>, path: &str, base: &str) {
        if let Some(id) = trailing_segment(path, base) {
            if let Some(entry) = catalog.get(id) {
                self.current = Some(entry.clone());
            }
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// What a page gets back from [`use_selection`].
pub struct SelectionHandle<T: Clone> {
    current: Option<T>,
    pub on_open: Callback<String>,
    pub on_close: Callback<()>,
}

impl<T: Clone> SelectionHandle<T> {
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn open(&self, id: impl Into<String>) {
        self.on_open.emit(id.into());
    }

    pub fn close(&self) {
        self.on_close.emit(());
    }
}

/// Binds a [`SelectionController`] to the router for one catalog page.
///
/// `base_path` is the path prefix detail ids nest under; `detail_route`
/// builds the typed route for an id. Direct `open`/`close` push non-replacing
/// history entries; path changes (mount, back/forward, deep links) only sync
/// the controller.
#[hook]
pub fn use_selection<T>(
    catalog: Rc<Catalog<T>>,
    base_path: &'static str,
    detail_route: fn(String) -> Route,
    base_route: Route,
) -> SelectionHandle<T>
where
    T: CatalogItem + Clone + PartialEq + 'static,
{
    let controller = use_state(SelectionController::<T>::new);
    let navigator = use_navigator().unwrap();
    let location = use_location();
    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    {
        let controller = controller.clone();
        let catalog = catalog.clone();
        use_effect_with_deps(
            move |path: &String| {
                let mut next = (*controller).clone();
                next.sync(&catalog, path, base_path);
                if next != *controller {
                    controller.set(next);
                }
                || ()
            },
            path,
        );
    }

    let on_open = {
        let controller = controller.clone();
        let catalog = catalog.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            let mut next = (*controller).clone();
            if next.open(&catalog, &id) {
                controller.set(next);
                navigator.push(&detail_route(id));
            }
        })
    };

    let on_close = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let mut next = (*controller).clone();
            next.close();
            controller.set(next);
            navigator.push(&base_route);
        })
    };

    SelectionHandle {
        current: controller.current().cloned(),
        on_open,
        on_close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Entry {
        id: &'static str,
        title: &'static str,
    }

    impl CatalogItem for Entry {
        fn id(&self) -> &str {
            self.id
        }

        fn search_text(&self) -> String {
            self.title.to_string()
        }
    }

    fn catalog() -> Catalog<Entry> {
        Catalog::new(vec![
            Entry { id: "biology", title: "Biology" },
            Entry { id: "chemistry", title: "Chemistry" },
            Entry { id: "physics", title: "Physics" },
        ])
    }

    #[test]
    fn trailing_segment_parses_detail_paths() {
        assert_eq!(trailing_segment("/services/biology", "/services"), Some("biology"));
        assert_eq!(trailing_segment("/services/biology/", "/services"), Some("biology"));
        assert_eq!(trailing_segment("/services", "/services"), None);
        assert_eq!(trailing_segment("/services/", "/services"), None);
        assert_eq!(trailing_segment("/services/a/b", "/services"), None);
        assert_eq!(trailing_segment("/servicesx/a", "/services"), None);
        assert_eq!(trailing_segment("/blog/3", "/services"), None);
    }

    #[test]
    fn open_then_current_returns_each_entry() {
        let catalog = catalog();
        for entry in catalog.iter() {
            let mut controller = SelectionController::new();
            assert!(controller.open(&catalog, entry.id));
            assert_eq!(controller.current(), Some(entry));
        }
    }

    #[test]
    fn open_unknown_id_is_a_silent_no_op() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        assert!(!controller.open(&catalog, "geology"));
        assert_eq!(controller.current(), None);

        controller.open(&catalog, "physics");
        assert!(!controller.open(&catalog, "geology"));
        assert_eq!(controller.current().unwrap().id, "physics");
    }

    #[test]
    fn close_is_idempotent() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.close();
        assert_eq!(controller.current(), None);

        controller.open(&catalog, "chemistry");
        controller.close();
        assert_eq!(controller.current(), None);
        controller.close();
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn open_close_scenario() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.open(&catalog, "chemistry");
        assert_eq!(controller.current().unwrap().id, "chemistry");
        controller.close();
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn sync_selects_known_ids() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.sync(&catalog, "/services/physics", "/services");
        assert_eq!(controller.current().unwrap().id, "physics");
    }

    #[test]
    fn sync_with_unknown_id_leaves_selection_unchanged() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.sync(&catalog, "/services/not-a-real-service", "/services");
        assert_eq!(controller.current(), None);

        controller.open(&catalog, "biology");
        controller.sync(&catalog, "/services/not-a-real-service", "/services");
        assert_eq!(controller.current().unwrap().id, "biology");
    }

    #[test]
    fn sync_with_bare_base_path_does_not_auto_close() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.open(&catalog, "biology");
        controller.sync(&catalog, "/services", "/services");
        assert_eq!(controller.current().unwrap().id, "biology");
    }

    #[test]
    fn open_path_round_trips_through_a_fresh_controller() {
        let catalog = catalog();
        let mut first = SelectionController::new();
        first.open(&catalog, "chemistry");
        let path = format!("/services/{}", first.current().unwrap().id);

        let mut fresh = SelectionController::new();
        fresh.sync(&catalog, &path, "/services");
        assert_eq!(fresh.current(), first.current());
    }
}
