//! What each page shows once its inputs are known.

use crate::error::LoadError;
use crate::gallery::Gallery;
use crate::markup::{self, UNTITLED};
use crate::works::{Selection, Work};

/// State of the works grid on the list page.
#[derive(Debug)]
pub enum ListView {
    Empty,
    Cards(Vec<Option<Work>>),
    Failed(LoadError),
}

impl ListView {
    pub fn resolve(works: Result<Vec<Option<Work>>, LoadError>) -> Self {
        match works {
            Ok(works) if works.is_empty() => ListView::Empty,
            Ok(works) => ListView::Cards(works),
            Err(err) => ListView::Failed(err),
        }
    }

    pub fn html(&self) -> String {
        match self {
            ListView::Empty => markup::empty_state(),
            ListView::Cards(works) => markup::works_grid(works),
            ListView::Failed(_) => markup::load_failed(),
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            ListView::Cards(works) => works.len(),
            _ => 0,
        }
    }
}

/// State of the detail page.
#[derive(Debug)]
pub enum DetailView {
    Unspecified,
    NotFound,
    Failed(LoadError),
    NoImages(Work),
    Ready { work: Work, gallery: Gallery },
}

impl DetailView {
    /// Whether `selection` is worth a fetch at all. An unusable parameter
    /// is reported straight away.
    pub fn needs_fetch(selection: Selection) -> bool {
        selection != Selection::Unspecified
    }

    /// An absent (falsy) entry at the selected position reads as not found.
    pub fn resolve(selection: Selection, works: Result<Vec<Option<Work>>, LoadError>) -> Self {
        let index = match selection {
            Selection::Unspecified => return DetailView::Unspecified,
            Selection::Unmatched => None,
            Selection::Index(i) => Some(i),
        };
        let mut works = match works {
            Ok(works) => works,
            Err(err) => return DetailView::Failed(err),
        };
        let Some(work) = index
            .filter(|&i| i < works.len())
            .and_then(|i| works.swap_remove(i))
        else {
            return DetailView::NotFound;
        };
        match Gallery::new(work.images.clone()) {
            Some(gallery) => DetailView::Ready { work, gallery },
            None => DetailView::NoImages(work),
        }
    }

    pub fn title(&self) -> String {
        match self {
            DetailView::Unspecified => "No work selected".to_string(),
            DetailView::NotFound => "Work not found".to_string(),
            DetailView::Failed(_) => "Error".to_string(),
            DetailView::NoImages(work) | DetailView::Ready { work, .. } => {
                work.title.clone().unwrap_or_else(|| UNTITLED.to_string())
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            DetailView::Unspecified => "Go back to the works page and pick a work.".to_string(),
            DetailView::NotFound => "Check the work number in the link.".to_string(),
            DetailView::Failed(_) => {
                "Could not load this work. Serve the site through a local server.".to_string()
            }
            DetailView::NoImages(_) => "This work has no images.".to_string(),
            DetailView::Ready { work, .. } => work.description.clone().unwrap_or_default(),
        }
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            DetailView::Ready { gallery, .. } => Some(gallery),
            _ => None,
        }
    }
}
