//! Form Builder App
//!
//! Root component: app context, toasts and a hash-based view switch.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{BuilderPage, FormList, RespondPage, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;

/// View selected by the location hash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `#/` and anything unrecognized
    Forms,
    /// `#/new`
    NewForm,
    /// `#/edit/{id}`
    Edit(i64),
    /// `#/answer/{id}`
    Answer(i64),
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.split('/');
        let section = parts.next().unwrap_or_default();
        let id = parts.next().and_then(|p| p.parse::<i64>().ok());
        match (section, id) {
            ("new", _) => Route::NewForm,
            ("edit", Some(id)) => Route::Edit(id),
            ("answer", Some(id)) => Route::Answer(id),
            _ => Route::Forms,
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(AppConfig::load()));

    let (route, set_route) = signal(Route::parse(&current_hash()));
    let hashchange = window_event_listener(ev::hashchange, move |_| {
        let next = Route::parse(&current_hash());
        log::info!("[APP] Route: {:?}", next);
        set_route.set(next);
    });
    on_cleanup(move || hashchange.remove());

    view! {
        <ToastHost />
        {move || match route.get() {
            Route::Forms => view! { <FormList /> }.into_any(),
            Route::NewForm => view! { <BuilderPage form_id=None /> }.into_any(),
            Route::Edit(id) => view! { <BuilderPage form_id=Some(id) /> }.into_any(),
            Route::Answer(id) => view! { <RespondPage form_id=id /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse(""), Route::Forms);
        assert_eq!(Route::parse("#/"), Route::Forms);
        assert_eq!(Route::parse("#/new"), Route::NewForm);
        assert_eq!(Route::parse("#/edit/12"), Route::Edit(12));
        assert_eq!(Route::parse("#/answer/7/"), Route::Answer(7));
    }

    #[test]
    fn test_route_parse_bad_id_falls_back() {
        assert_eq!(Route::parse("#/edit/abc"), Route::Forms);
        assert_eq!(Route::parse("#/answer"), Route::Forms);
        assert_eq!(Route::parse("#/unknown/3"), Route::Forms);
    }
}
