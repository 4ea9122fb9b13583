//! DOM wiring for the portfolio page: navbar, smooth anchors, scroll fade-in
//! and the demo contact form.
//!
//! Each feature looks up its own elements and is skipped when they are
//! missing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::page::{
    ANCHOR_SELECTOR, CONTACT_FORM_ID, CONTACT_SEND_DELAY_MS, ContactForm, FADE_IN_CLASS,
    FADE_IN_ROOT_MARGIN, FADE_IN_SELECTOR, FADE_IN_THRESHOLD, HAMBURGER_OPEN_CLASS,
    NAV_ITEM_SELECTOR, NAV_LINKS_SELECTOR, NAV_OPEN_CLASS, NAV_TOGGLE_SELECTOR, SENT_MESSAGE,
    anchor_target,
};

/// Wire every page feature the document has markup for
pub fn setup(document: &Document) {
    setup_navbar(document);
    setup_smooth_scroll(document);
    setup_fade_in(document);
    setup_contact_form(document);
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn on<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &Element,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_navbar(document: &Document) {
    let (Some(hamburger), Some(links)) = (
        query(document, NAV_TOGGLE_SELECTOR),
        query(document, NAV_LINKS_SELECTOR),
    ) else {
        return;
    };

    let (menu, button) = (links.clone(), hamburger.clone());
    on(&hamburger, "click", move |_event: web_sys::MouseEvent| {
        let _ = menu.class_list().toggle(NAV_OPEN_CLASS);
        let _ = button.class_list().toggle(HAMBURGER_OPEN_CLASS);
    });

    for item in query_all(document, NAV_ITEM_SELECTOR) {
        let hamburger = hamburger.clone();
        let links = links.clone();
        on(&item, "click", move |_event: web_sys::MouseEvent| {
            let _ = links.class_list().remove_1(NAV_OPEN_CLASS);
            let _ = hamburger.class_list().remove_1(HAMBURGER_OPEN_CLASS);
        });
    }
}

fn setup_smooth_scroll(document: &Document) {
    for anchor in query_all(document, ANCHOR_SELECTOR) {
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        on(&anchor, "click", move |event: web_sys::MouseEvent| {
            event.prevent_default();
            let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

fn setup_fade_in(document: &Document) {
    let elements = query_all(document, FADE_IN_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(FADE_IN_CLASS);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    options.set_root_margin(FADE_IN_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, skipping fade-in: {:?}", err);
                return;
            }
        };
    callback.forget();

    for element in elements {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("opacity", "0");
        }
        observer.observe(&element);
    }
}

fn setup_contact_form(document: &Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        log::warn!("Contact form has no submit button");
        return;
    };

    let state = Rc::new(RefCell::new(ContactForm::new()));
    let target: Element = form.clone().into();
    on(&target, "submit", move |event: web_sys::Event| {
        event.prevent_default();

        let label = button.text_content().unwrap_or_default();
        let Some(sending) = state.borrow_mut().submit(&label) else {
            return;
        };
        button.set_text_content(Some(sending));
        button.set_disabled(true);

        let Some(window) = web_sys::window() else {
            return;
        };
        let form = form.clone();
        let button = button.clone();
        let state = state.clone();
        let done = Closure::once(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(SENT_MESSAGE);
            }
            form.reset();
            if let Some(label) = state.borrow_mut().complete() {
                button.set_text_content(Some(&label));
            }
            button.set_disabled(false);
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            done.as_ref().unchecked_ref(),
            CONTACT_SEND_DELAY_MS,
        );
        done.forget();
    });
}
