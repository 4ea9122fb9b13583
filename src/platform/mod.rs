//! Browser platform layer
//!
//! Binds the page and the game:
//! - Navbar, smooth anchors, fade-in and contact form (`page`)
//! - Canvas surface and slider controls
//! - Readouts, badge and panels
//! - Reset button
//! - `requestAnimationFrame` loop, stopped on `pagehide`
//!
//! A page without the canvas or sliders simply runs no game.

pub mod dom;
pub mod page;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::game::{CancelToken, MissingElement, WaveGame};
use crate::renderer::CanvasSurface;
use dom::{DomHud, SliderControls, ids};

type BrowserGame = WaveGame<CanvasSurface, SliderControls, DomHud>;

/// Set up logging, wire the page and start the game if the page has one
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    page::setup(&document);

    let surface = document
        .get_element_by_id(ids::CANVAS)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or(MissingElement::Canvas)
        .and_then(|canvas| CanvasSurface::new(canvas).ok_or(MissingElement::Context2d));
    let controls = SliderControls::find(&document).ok_or(MissingElement::Sliders);

    let seed = js_sys::Date::now() as u64;
    let game = match WaveGame::mount(seed, surface, controls, DomHud::find(&document)) {
        Ok(game) => Rc::new(RefCell::new(game)),
        Err(missing) => {
            log::info!("No {} on this page, game disabled", missing.as_str());
            return;
        }
    };
    log::info!("Wave game initialized with seed: {}", seed);

    setup_reset_button(game.clone());

    let cancel = CancelToken::new();
    setup_teardown(cancel.clone());

    request_animation_frame(game, cancel);
}

fn request_animation_frame(game: Rc<RefCell<BrowserGame>>, cancel: CancelToken) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, cancel, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<BrowserGame>>, cancel: CancelToken, time: f64) {
    if cancel.is_cancelled() {
        log::debug!("Wave game loop stopped");
        return;
    }

    game.borrow_mut().frame(time);

    request_animation_frame(game, cancel);
}

fn setup_reset_button(game: Rc<RefCell<BrowserGame>>) {
    let Some(btn) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ids::RESET_BUTTON))
    else {
        return;
    };

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        game.borrow_mut().reset();
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_teardown(cancel: CancelToken) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        cancel.cancel();
    });
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
