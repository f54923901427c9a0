//! Detail page: title, description, thumbnail strip and lightbox.
//!
//! DOM events are turned into [`Action`]s for the [`Gallery`]; the
//! returned [`Effect`] is painted by [`GalleryView::paint`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, Window};

use super::{dom, fetch};
use crate::config::{classes, ids, SiteConfig, WORK_PARAM};
use crate::gallery::{Action, Effect, Gallery, Key};
use crate::markup;
use crate::page::DetailView;
use crate::works::parse_selection;

struct Lightbox {
    root: HtmlElement,
    image: HtmlImageElement,
}

impl Lightbox {
    fn find(document: &Document) -> Option<Self> {
        Some(Self {
            root: dom::by_id(document, ids::LIGHTBOX)?,
            image: dom::by_id(document, ids::LIGHTBOX_IMG)?,
        })
    }

    fn set_open(&self, open: bool) {
        let _ = self.root.class_list().toggle_with_force(classes::OPEN, open);
        let _ = self
            .root
            .set_attribute("aria-hidden", if open { "false" } else { "true" });
    }
}

struct GalleryView {
    document: Document,
    gallery: RefCell<Gallery>,
    title: Option<String>,
    main: HtmlImageElement,
    thumbs: Vec<Element>,
    lightbox: Option<Lightbox>,
}

impl GalleryView {
    fn dispatch(&self, action: Action) {
        let effect = self.gallery.borrow_mut().apply(action);
        self.paint(effect);
    }

    fn paint(&self, effect: Effect) {
        let gallery = self.gallery.borrow();
        match effect {
            Effect::None => {}
            Effect::Show { index, lightbox } => {
                let src = &gallery.images()[index];
                self.main.set_src(src);
                self.main
                    .set_alt(&markup::main_image_alt(self.title.as_deref(), index));
                for (i, thumb) in self.thumbs.iter().enumerate() {
                    let _ = thumb
                        .class_list()
                        .toggle_with_force(classes::ACTIVE, gallery.is_active(i));
                }
                if lightbox {
                    if let Some(lb) = &self.lightbox {
                        lb.image.set_src(src);
                    }
                }
            }
            Effect::OpenLightbox { index } => {
                if let Some(lb) = &self.lightbox {
                    lb.set_open(true);
                    lb.image.set_src(&gallery.images()[index]);
                    dom::lock_scroll(&self.document, true);
                }
            }
            Effect::CloseLightbox => {
                if let Some(lb) = &self.lightbox {
                    lb.set_open(false);
                    dom::lock_scroll(&self.document, false);
                }
            }
        }
    }
}

pub(crate) async fn run(window: Window, document: Document, config: SiteConfig) {
    let (Some(title_el), Some(desc_el), Some(main), Some(thumbs_el)) = (
        dom::by_id::<HtmlElement>(&document, ids::WORK_TITLE),
        dom::by_id::<HtmlElement>(&document, ids::WORK_DESC),
        dom::by_id::<HtmlImageElement>(&document, ids::MAIN_IMG),
        dom::by_id::<HtmlElement>(&document, ids::THUMBS),
    ) else {
        log::debug!("detail page markup missing, skipping the gallery");
        return;
    };

    let selection = parse_selection(dom::query_param(&window, WORK_PARAM).as_deref());
    let view = if DetailView::needs_fetch(selection) {
        DetailView::resolve(selection, fetch::fetch_works(&config.works_url).await)
    } else {
        DetailView::resolve(selection, Ok(Vec::new()))
    };
    if let DetailView::Failed(err) = &view {
        log::error!("work page load failed: {err}");
    }

    title_el.set_text_content(Some(view.title().as_str()));
    desc_el.set_text_content(Some(view.description().as_str()));

    match view {
        DetailView::NoImages(work) => {
            main.set_alt(work.title.as_deref().unwrap_or(markup::UNTITLED));
            main.set_src("");
        }
        DetailView::Ready { work, gallery } => {
            let title = work.title.as_deref().unwrap_or(markup::UNTITLED);
            thumbs_el.set_inner_html(&markup::thumbnails(title, gallery.images()));
            let thumbs = thumbs_el
                .query_selector_all(&format!(".{}", classes::THUMB))
                .map(|list| dom::collect::<Element>(&list))
                .unwrap_or_default();
            dom::hide_on_error(&main);

            let view = Rc::new(GalleryView {
                document: document.clone(),
                gallery: RefCell::new(gallery),
                title: work.title,
                main,
                thumbs,
                lightbox: Lightbox::find(&document),
            });
            view.dispatch(Action::Select(0));
            install_listeners(&view, &window, &document);
        }
        _ => {}
    }
}

fn install_listeners(view: &Rc<GalleryView>, window: &Window, document: &Document) {
    for (i, thumb) in view.thumbs.iter().enumerate() {
        let v = Rc::clone(view);
        EventListener::new(thumb, "click", move |_| v.dispatch(Action::Select(i as i64))).forget();
    }

    let on_click = |id: &str, action: Action| {
        if let Some(el) = dom::by_id::<HtmlElement>(document, id) {
            let v = Rc::clone(view);
            EventListener::new(&el, "click", move |_| v.dispatch(action)).forget();
        }
    };
    on_click(ids::LIGHTBOX_CLOSE, Action::Close);
    on_click(ids::LIGHTBOX_PREV, Action::Advance(-1));
    on_click(ids::LIGHTBOX_NEXT, Action::Advance(1));

    let Some(lightbox) = &view.lightbox else {
        log::debug!("lightbox markup missing, zoom disabled");
        return;
    };
    on_click(ids::ZOOM, Action::Open);

    // clicks on the backdrop itself close, clicks on the image do not
    let v = Rc::clone(view);
    let root = lightbox.root.clone();
    EventListener::new(&lightbox.root, "click", move |event: &Event| {
        let on_backdrop = event
            .target()
            .map_or(false, |target| js_sys::Object::is(&target, &root));
        if on_backdrop {
            v.dispatch(Action::Close);
        }
    })
    .forget();

    let v = Rc::clone(view);
    EventListener::new(window, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        v.dispatch(Action::Key(Key::from_name(&event.key())));
    })
    .forget();
}
