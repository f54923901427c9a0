//! HTML fragments injected into the pages.

use crate::works::Work;

/// Fallback label for works without a title.
pub const UNTITLED: &str = "Work";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

pub fn detail_href(index: usize) -> String {
    format!("./work.html?i={index}")
}

/// One linked card for the works grid, showing only the first image.
pub fn work_card(index: usize, work: &Work) -> String {
    let title = escape_html(work.title.as_deref().unwrap_or(""));
    let description = escape_html(work.description.as_deref().unwrap_or(""));
    let thumb = escape_html(work.first_image().unwrap_or(""));
    format!(
        r#"
        <a class="work-link" href="{href}" aria-label="Open {title}">
          <article class="work-card">
            <img class="work-thumb" src="{thumb}" alt="{title}" loading="lazy">
            <div class="work-body">
              <h3>{title}</h3>
              <p>{description}</p>
            </div>
          </article>
        </a>
      "#,
        href = detail_href(index),
    )
}

/// Cards for every entry; absent entries still get a blank card so links
/// keep pointing at their position.
pub fn works_grid(works: &[Option<Work>]) -> String {
    let blank = Work::default();
    works
        .iter()
        .enumerate()
        .map(|(i, work)| work_card(i, work.as_ref().unwrap_or(&blank)))
        .collect()
}

pub fn empty_state() -> String {
    r#"<div class="card" style="padding:14px;">No works yet.</div>"#.to_string()
}

pub fn load_failed() -> String {
    r#"
      <div class="card" style="padding:14px; line-height:1.9;">
        The works could not be loaded.<br>
        Serve the project through a <b>local server</b> (for example <code>cargo run</code>) instead of opening the file directly.
      </div>
    "#
    .to_string()
}

/// Thumbnail strip for the detail page; the first button starts active.
pub fn thumbnails(title: &str, images: &[String]) -> String {
    let title = escape_html(title);
    images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let active = if i == 0 { " active" } else { "" };
            let n = i + 1;
            format!(
                r#"
      <button class="thumb{active}" type="button" aria-label="Image {n}">
        <img src="{src}" alt="{title} - thumb {n}" loading="lazy">
      </button>
    "#,
                src = escape_html(src),
            )
        })
        .collect()
}

/// Alt text for the main image, numbered from one.
pub fn main_image_alt(title: Option<&str>, index: usize) -> String {
    format!("{} - {}", title.unwrap_or(UNTITLED), index + 1)
}
