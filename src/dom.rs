//! Small DOM helpers shared by the host layer.
//!
//! Wraps the fallible `web-sys` calls the host makes from inside event
//! closures, where there is no `Result` to propagate into: failures are
//! logged and swallowed, matching the degrade-don't-fail rule for the whole
//! front end.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement, Node, NodeList, Window};

/// First element matching `selector`, or `None` (logged at debug).
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(Some(el)) => Some(el),
        Ok(None) => {
            log::debug!("no element for {selector}; skipping");
            None
        }
        Err(err) => {
            log::warn!("query_selector({selector}) failed: {err:?}");
            None
        }
    }
}

/// Like [`query`] but cast to `HtmlElement` for style access.
#[must_use]
pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    let el = query(document, selector)?;
    match el.dyn_into::<HtmlElement>() {
        Ok(html) => Some(html),
        Err(_) => {
            log::warn!("{selector} is not an HtmlElement");
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok(elements_of(&list))
}

/// All `HtmlElement`s matching `selector`, in document order.
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok(list_items(&list)
        .filter_map(|node| match node.dyn_into::<HtmlElement>() {
            Ok(html) => Some(html),
            Err(_) => None,
        })
        .collect())
}

/// Element by id, or `None` (logged at debug).
#[must_use]
pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::debug!("no element with id {id}; skipping");
    }
    found
}

/// The event's target as an `Element`, when it is one.
#[must_use]
pub fn target_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

/// Whether `parent` contains `target` (inclusive).
#[must_use]
pub fn contains(parent: &Element, target: &Element) -> bool {
    let node: &Node = target.as_ref();
    parent.contains(Some(node))
}

/// Write one style property, logging on failure.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style.{property} write failed: {err:?}");
    }
}

/// Add a class, logging on failure.
pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("classList.add({class}) failed: {err:?}");
    }
}

/// Remove a class, logging on failure.
pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::warn!("classList.remove({class}) failed: {err:?}");
    }
}

/// Toggle a class, logging on failure.
pub fn toggle_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().toggle(class) {
        log::warn!("classList.toggle({class}) failed: {err:?}");
    }
}

/// Current vertical scroll offset.
#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
#[must_use]
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
}

/// Viewport width in CSS pixels.
#[must_use]
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    list_items(list)
        .filter_map(|node| match node.dyn_into::<Element>() {
            Ok(el) => Some(el),
            Err(_) => None,
        })
        .collect()
}

fn list_items(list: &NodeList) -> impl Iterator<Item = Node> + '_ {
    (0..list.length()).filter_map(|i| list.item(i))
}
