use api::models::TypeRef;
use api::{LookupKind, Resource};
use dioxus::prelude::*;
use store::{Debouncer, ListController, ListFetch, PageNav};

use crate::app::{use_app, AppContext};

/// List state for one collection screen, wired to the API.
///
/// All fields are signals, so the handle is `Copy` and can be moved into as
/// many event handlers as the view needs.
pub struct ListHandle<R: Resource> {
    pub list: Signal<ListController<R::Item>>,
    /// Raw text in the search box (updates on every keystroke).
    pub search: Signal<String>,
    debouncer: Signal<Debouncer>,
    app: AppContext,
}

impl<R: Resource> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListHandle<R> {}

impl<R: Resource> ListHandle<R> {
    /// Keystroke in the search box. Fetches once typing pauses.
    pub fn type_search(self, text: String) {
        let mut search = self.search;
        search.set(text.clone());
        let debouncer = self.debouncer.peek().clone();
        spawn(async move {
            if let Some(text) = debouncer.submit(text).await {
                let mut list = self.list;
                let fetch = list.write().set_query(text);
                self.run(fetch);
            }
        });
    }

    /// Column filter change; fetches immediately.
    pub fn set_filter(self, key: &'static str, value: String) {
        let mut list = self.list;
        let fetch = list.write().set_filter(key, Some(value));
        self.run(fetch);
    }

    pub fn set_per_page(self, per_page: u32) {
        let mut list = self.list;
        let fetch = list.write().set_per_page(per_page);
        self.run(fetch);
    }

    pub fn go_to(self, nav: PageNav) {
        let mut list = self.list;
        let fetch = list.write().go_to(nav);
        if let Some(fetch) = fetch {
            self.run(fetch);
        }
    }

    pub fn refresh(self) {
        let mut list = self.list;
        let fetch = list.write().refresh();
        self.run(fetch);
    }

    /// Delete a record, then reload the current page.
    pub fn remove(self, id: String) {
        spawn(async move {
            match self.app.client().remove::<R>(&id).await {
                Ok(()) => {
                    self.app.success(format!("{} deleted", R::LABEL));
                    self.refresh();
                }
                Err(e) => self.app.report(&e),
            }
        });
    }

    fn run(self, fetch: ListFetch) {
        let client = self.app.client();
        spawn(async move {
            let result = client.list::<R>(&fetch.query).await;
            let mut list = self.list;
            let completion = list.write().complete(&fetch, result);
            if let Some(err) = completion.error() {
                self.app.report(&err);
            }
        });
    }
}

/// Paginated list of `R`, loaded on mount.
pub fn use_list<R: Resource>() -> ListHandle<R> {
    let app = use_app();
    let list = use_signal(|| ListController::new(api::ApiConfig::from_env().per_page));
    let search = use_signal(String::new);
    let debouncer = use_signal(Debouncer::default);

    let handle = ListHandle {
        list,
        search,
        debouncer,
        app,
    };

    use_hook(move || handle.refresh());
    use_drop(move || debouncer.peek().cancel());

    handle
}

/// Entries of a lookup collection for `<select>` options.
pub fn use_lookup(kind: LookupKind) -> Signal<Vec<TypeRef>> {
    let app = use_app();
    let mut options = use_signal(Vec::new);

    let _ = use_resource(move || async move {
        match app.client().lookups(kind).await {
            Ok(items) => options.set(items),
            Err(e) => app.report(&e),
        }
    });

    options
}
