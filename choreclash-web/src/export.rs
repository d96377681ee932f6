//! Results exporter: makes a possibly-hidden section printable and hands the
//! page to an injected document backend. Visibility of patched ancestors is
//! restored whatever the outcome.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("section `{0}` not found")]
    MissingSection(String),
    #[error("document backend failed: {0}")]
    Backend(String),
}

/// Injected document-producing capability. The default drives the browser
/// print pipeline; canvas/PDF snapshotters implement the same trait.
pub trait DocumentBackend {
    /// Produce a document from the current page.
    ///
    /// # Errors
    /// Returns an error when the underlying pipeline fails.
    fn produce(&self) -> Result<(), ExportError>;
}

/// Default backend: the browser's print dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintBackend;

impl DocumentBackend for PrintBackend {
    fn produce(&self) -> Result<(), ExportError> {
        dom::window()
            .print()
            .map_err(|err| ExportError::Backend(dom::js_error_message(&err)))
    }
}

/// Export the subtree at `selector`. `prepare` runs after the subtree is
/// made visible and before the backend captures, so callers can refresh the
/// rendered summary first.
///
/// # Errors
/// Returns [`ExportError::MissingSection`] when the selector matches nothing
/// and forwards backend failures; hidden ancestors are restored in both
/// cases.
pub fn export_section(
    selector: &str,
    prepare: impl FnOnce(),
    backend: &dyn DocumentBackend,
) -> Result<(), ExportError> {
    let section = dom::document()
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| ExportError::MissingSection(selector.to_string()))?;

    let patched = force_visible(&section);
    prepare();
    let outcome = backend.produce();
    restore_visibility(patched);
    outcome
}

struct PatchedAncestor {
    element: HtmlElement,
    display: String,
    visibility: String,
}

fn force_visible(section: &Element) -> Vec<PatchedAncestor> {
    let mut patched = Vec::new();
    let mut node = Some(section.clone());
    // Walk up so that ancestors hidden by the page-navigation mechanism do
    // not blank the capture.
    while let Some(current) = node {
        if current.tag_name().eq_ignore_ascii_case("body") {
            break;
        }
        node = current.parent_element();
        let Ok(element) = current.dyn_into::<HtmlElement>() else {
            continue;
        };
        if !is_hidden(&element) {
            continue;
        }
        let style = element.style();
        patched.push(PatchedAncestor {
            display: style.get_property_value("display").unwrap_or_default(),
            visibility: style.get_property_value("visibility").unwrap_or_default(),
            element: element.clone(),
        });
        let _ = style.set_property("display", "block");
        let _ = style.set_property("visibility", "visible");
    }
    patched
}

fn is_hidden(element: &HtmlElement) -> bool {
    dom::window()
        .get_computed_style(element)
        .ok()
        .flatten()
        .is_some_and(|style| {
            style
                .get_property_value("display")
                .is_ok_and(|display| display == "none")
                || style
                    .get_property_value("visibility")
                    .is_ok_and(|visibility| visibility == "hidden")
        })
}

fn restore_visibility(patched: Vec<PatchedAncestor>) {
    for entry in patched.into_iter().rev() {
        let style = entry.element.style();
        set_or_clear(&style, "display", &entry.display);
        set_or_clear(&style, "visibility", &entry.visibility);
    }
}

fn set_or_clear(style: &web_sys::CssStyleDeclaration, property: &str, value: &str) {
    if value.is_empty() {
        let _ = style.remove_property(property);
    } else {
        let _ = style.set_property(property, value);
    }
}
