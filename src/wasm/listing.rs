//! Works grid on the home page.

use web_sys::{Document, HtmlElement};

use super::{dom, fetch};
use crate::config::{classes, ids, SiteConfig};
use crate::page::ListView;

pub(crate) async fn run(document: Document, config: SiteConfig) {
    let Some(grid) = dom::by_id::<HtmlElement>(&document, ids::WORKS_GRID) else {
        log::debug!("no #{} on this page, skipping the works grid", ids::WORKS_GRID);
        return;
    };

    let view = ListView::resolve(fetch::fetch_works(&config.works_url).await);
    if let ListView::Failed(err) = &view {
        log::error!("works load failed: {err}");
    }
    grid.set_inner_html(&view.html());

    for thumb in dom::select_all::<HtmlElement>(&document, &format!(".{}", classes::WORK_THUMB)) {
        dom::hide_on_error(&thumb);
    }
}
