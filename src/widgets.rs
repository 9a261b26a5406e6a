//! Standalone page widgets: mobile menu toggle, smooth-scroll anchors, and
//! the pointer-driven hero blob.
//!
//! These wire straight onto the DOM and keep no engine state. Missing
//! markup makes each initializer a silent no-op.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Event, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::consts::HERO_POINTER_INTENSITY;
use crate::dom;
use crate::parallax;

/// Mobile navigation: the toggle button flips an `active` class on itself
/// and the menu; any nav-link click or a click outside both closes it.
pub fn init_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let Some(toggle) = dom::query(document, ".nav__toggle") else {
        return Ok(());
    };
    let Some(menu) = dom::query(document, ".nav__menu") else {
        return Ok(());
    };

    {
        let toggle_for_closure = toggle.clone();
        let menu = menu.clone();
        let on_toggle = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            dom::toggle_class(&toggle_for_closure, "active");
            dom::toggle_class(&menu, "active");
        }));
        toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget();
    }

    for link in dom::query_all(document, ".nav__link")? {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let on_link = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            dom::remove_class(&toggle, "active");
            dom::remove_class(&menu, "active");
        }));
        link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())?;
        on_link.forget();
    }

    {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let on_outside = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            let Some(target) = dom::target_element(&event) else {
                return;
            };
            if !dom::contains(&toggle, &target) && !dom::contains(&menu, &target) {
                dom::remove_class(&toggle, "active");
                dom::remove_class(&menu, "active");
            }
        }));
        document.add_event_listener_with_callback("click", on_outside.as_ref().unchecked_ref())?;
        on_outside.forget();
    }

    Ok(())
}

/// Smooth scrolling for same-page anchor links.
pub fn init_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, "a[href^='#']")? {
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let target = match document.query_selector(&href) {
                Ok(Some(el)) => el,
                Ok(None) | Err(_) => return,
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }));
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Hero blob: pointer deflection over the hero section (desktop only)
/// blended with a half-speed scroll lag, coalesced to one update per frame.
pub fn init_hero_blob(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(hero) = dom::query(document, ".hero") else {
        return Ok(());
    };
    let Some(blob) = dom::query_html(document, ".hero__blob") else {
        return Ok(());
    };

    dom::set_style(&blob, "transition", "transform 0.1s ease-out");

    let mouse = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
    let scroll = Rc::new(Cell::new(0.0_f64));
    let ticking = Rc::new(Cell::new(false));

    let frame = Closure::<dyn FnMut()>::wrap(Box::new({
        let mouse = Rc::clone(&mouse);
        let scroll = Rc::clone(&scroll);
        let ticking = Rc::clone(&ticking);
        let blob = blob.clone();
        move || {
            ticking.set(false);
            let (mx, my) = mouse.get();
            let (x, y, rotation) = parallax::hero_transform(mx, my, scroll.get());
            dom::set_style(
                &blob,
                "transform",
                &format!("translate({x}px, {y}px) rotate({rotation}deg)"),
            );
        }
    }));

    // The frame closure lives inside `schedule`, which the listeners below
    // keep alive for the life of the page.
    let schedule = Rc::new({
        let window = window.clone();
        let ticking = Rc::clone(&ticking);
        move || {
            if ticking.get() {
                return;
            }
            ticking.set(true);
            if let Err(err) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                log::warn!("requestAnimationFrame failed: {err:?}");
                ticking.set(false);
            }
        }
    });

    if desktop_pointer(window) {
        {
            let hero_for_closure = hero.clone();
            let mouse = Rc::clone(&mouse);
            let schedule = Rc::clone(&schedule);
            let on_move = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
                let rect = hero_for_closure.get_bounding_client_rect();
                let deflection = parallax::hero_pointer_deflection(
                    f64::from(event.client_x()) - rect.left(),
                    f64::from(event.client_y()) - rect.top(),
                    rect.width(),
                    rect.height(),
                    HERO_POINTER_INTENSITY,
                );
                mouse.set(deflection);
                schedule();
            }));
            hero.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
            on_move.forget();
        }
        {
            let mouse = Rc::clone(&mouse);
            let schedule = Rc::clone(&schedule);
            let on_leave = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                mouse.set((0.0, 0.0));
                schedule();
            }));
            hero.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
            on_leave.forget();
        }
    }

    {
        let window2 = window.clone();
        let scroll_state = Rc::clone(&scroll);
        let on_scroll = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            scroll_state.set(window2.scroll_y().unwrap_or(0.0));
            schedule();
        }));
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();
    }

    Ok(())
}

/// Whether the viewport qualifies for pointer-driven hero effects.
fn desktop_pointer(window: &Window) -> bool {
    match window.match_media("(min-width: 769px)") {
        Ok(Some(query)) => query.matches(),
        Ok(None) | Err(_) => false,
    }
}
