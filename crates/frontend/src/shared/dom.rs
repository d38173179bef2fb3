//! DOM glue: render targets and page lifecycle hooks

use std::cell::RefCell;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Something whose content can be wholly replaced with markup
pub trait RenderTarget {
    fn replace_content(&self, html: &str);
}

impl RenderTarget for Element {
    fn replace_content(&self, html: &str) {
        self.set_inner_html(html);
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &T {
    fn replace_content(&self, html: &str) {
        (**self).replace_content(html);
    }
}

/// In-memory target keeping the last written markup
#[derive(Debug, Default)]
pub struct BufferTarget {
    content: RefCell<String>,
    writes: RefCell<usize>,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// Number of `replace_content` calls so far
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl RenderTarget for BufferTarget {
    fn replace_content(&self, html: &str) {
        *self.content.borrow_mut() = html.to_string();
        *self.writes.borrow_mut() += 1;
    }
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("failed to register {event} listener: {message}")]
    Listener { event: &'static str, message: String },
}

pub fn document() -> Result<Document, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    window.document().ok_or(MountError::NoDocument)
}

/// Look up an element by id
pub fn element_by_id(id: &str) -> Result<Element, MountError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| MountError::ElementNotFound(id.to_string()))
}

/// Run `ready` once the document is parsed
///
/// Runs immediately when `DOMContentLoaded` has already fired.
pub fn on_document_ready<F>(ready: F) -> Result<(), MountError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        ready();
        return Ok(());
    }

    let handler = Closure::once(move |_event: web_sys::Event| ready());
    document
        .add_event_listener_with_callback("DOMContentLoaded", handler.as_ref().unchecked_ref())
        .map_err(|e| MountError::Listener {
            event: "DOMContentLoaded",
            message: format!("{:?}", e),
        })?;
    handler.forget();

    Ok(())
}
