//! Small page affordances: preloader, in-page smooth scrolling and the
//! typed hero line.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::dom;
use crate::config::{classes, ids, SiteConfig};
use crate::typed::{TypedConfig, Typewriter};

pub(crate) fn install(window: &Window, document: &Document, config: &SiteConfig) {
    preloader(window, document, config.preloader_fade_ms);
    smooth_scroll(document);
    typed_text(document);
}

fn preloader(window: &Window, document: &Document, fade_ms: u32) {
    let Some(preloader) = dom::by_id::<HtmlElement>(document, ids::PRELOADER) else {
        return;
    };
    let dismiss = move || {
        let _ = preloader.class_list().add_1(classes::HIDE);
        Timeout::new(fade_ms, move || preloader.remove()).forget();
    };
    // the module may finish loading after the window did
    if document.ready_state() == "complete" {
        dismiss();
    } else {
        EventListener::once(window, "load", move |_| dismiss()).forget();
    }
}

fn smooth_scroll(document: &Document) {
    for anchor in dom::select_all::<Element>(document, r##"a[href^="#"]"##) {
        let doc = document.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                if href.is_empty() || href == "#" {
                    return;
                }
                let Some(target) = doc.query_selector(&href).ok().flatten() else {
                    return;
                };
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            },
        )
        .forget();
    }
}

fn typed_text(document: &Document) {
    let Some(target) = dom::by_id::<HtmlElement>(document, ids::TYPED) else {
        return;
    };
    let Some(raw) = target.get_attribute("data-strings") else {
        return;
    };
    let config = match TypedConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{}: bad data-strings: {err}", ids::TYPED);
            return;
        }
    };
    let Some(writer) = Typewriter::new(config) else {
        return;
    };
    type_next(Rc::new(RefCell::new(writer)), target);
}

fn type_next(writer: Rc<RefCell<Typewriter>>, target: HtmlElement) {
    let tick = writer.borrow_mut().tick();
    target.set_inner_html(&tick.text);
    if let Some(delay) = tick.next_in_ms {
        Timeout::new(delay, move || type_next(writer, target)).forget();
    }
}
