//! Capability checks and small DOM helpers shared by the controllers.
//!
//! Every component looks its elements up once through [`by_id`]; a missing
//! or mistyped element comes back as `None` and the component stays inert.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, NodeList, Url, Window};

use crate::config::REDUCED_MOTION_QUERY;

pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::debug!("#{id} has an unexpected element type");
            None
        }
    }
}

pub(crate) fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn select_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(|list| collect(&list))
        .unwrap_or_default()
}

pub(crate) fn hide(element: &HtmlElement) {
    let _ = element.style().set_property("display", "none");
}

/// Hide `element` the first time it fails to load instead of leaving a
/// broken image box behind.
pub(crate) fn hide_on_error(element: &HtmlElement) {
    let target = element.clone();
    EventListener::once(element, "error", move |_| hide(&target)).forget();
}

pub(crate) fn lock_scroll(document: &Document, locked: bool) {
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

pub(crate) fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub(crate) fn query_param(window: &Window, name: &str) -> Option<String> {
    let href = window.location().href().ok()?;
    let url = Url::new(&href).ok()?;
    url.search_params().get(name)
}
