#![cfg(target_arch = "wasm32")]

use folio_wasm::config::{ids, SiteConfig, REDUCED_MOTION_QUERY, RESIZE_DEBOUNCE_MS};
use folio_wasm::markup;
use folio_wasm::page::ListView;
use folio_wasm::start_background;
use folio_wasm::works::parse_works;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn reduced_motion(window: &web_sys::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .unwrap()
        .map_or(false, |query| query.matches())
}

#[wasm_bindgen_test]
fn cards_render_one_article_per_work() {
    let works = parse_works(
        r#"[{"title": "A", "images": ["a.png"]}, {"title": "<script>B</script>"}]"#,
    )
    .unwrap();
    let host = mount(&ListView::resolve(Ok(works)).html());

    assert_eq!(host.query_selector_all(".work-card").unwrap().length(), 2);
    assert_eq!(host.query_selector_all(".work-thumb").unwrap().length(), 2);
    // the escaped title stays text
    assert_eq!(host.query_selector_all("script").unwrap().length(), 0);
    let heading = host.query_selector("h3:nth-of-type(1)").unwrap().unwrap();
    assert_eq!(heading.text_content().unwrap(), "A");
    host.remove();
}

#[wasm_bindgen_test]
fn thumbnail_strip_has_exactly_one_active_button() {
    let images = vec!["a.png".to_string(), "b.png".to_string()];
    let host = mount(&markup::thumbnails("Shots", &images));

    let buttons = host.query_selector_all(".thumb").unwrap();
    assert_eq!(buttons.length(), 2);
    assert_eq!(host.query_selector_all(".thumb.active").unwrap().length(), 1);
    host.remove();
}
#[wasm_bindgen_test]
fn background_is_inert_without_a_canvas() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    assert!(document.get_element_by_id(ids::CANVAS).is_none());

    let started = start_background(&window, &document, &SiteConfig::default()).unwrap();
    assert!(!started);
}

#[wasm_bindgen_test]
async fn resize_bursts_reinitialise_once_after_the_quiet_period() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let host = mount(&format!(r#"<canvas id="{}"></canvas>"#, ids::CANVAS));
    let canvas = document
        .get_element_by_id(ids::CANVAS)
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();

    let started = start_background(&window, &document, &SiteConfig::default()).unwrap();
    if reduced_motion(&window) {
        assert!(!started);
        assert_eq!(canvas.width(), 300, "untouched default size");
        host.remove();
        return;
    }
    assert!(started);
    let sized = canvas.width();
    assert!(sized > 1);

    // shrink the backing store so a reinitialisation is visible
    canvas.set_width(1);
    let resize = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&resize).unwrap();
    sleep(RESIZE_DEBOUNCE_MS / 3).await;
    window.dispatch_event(&resize).unwrap();
    assert_eq!(canvas.width(), 1);

    // timers never fire early, so the restarted quiet period is still running
    sleep(RESIZE_DEBOUNCE_MS - 20).await;
    assert_eq!(canvas.width(), 1);

    sleep(RESIZE_DEBOUNCE_MS * 2).await;
    assert_eq!(canvas.width(), sized);
    host.remove();
}
