//! Host layer: binds the engine to the document.
//!
//! Discovers the markup-contract elements, measures containers and sections
//! once, feeds pointer/scroll/keyboard events into [`EngineCore`], and
//! applies the returned [`Action`]s as style/class/attribute writes. Each
//! scroll zone owns its own frame-coalescing flag so one zone can never
//! starve another.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng as _;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, KeyboardEvent, MouseEvent, Node,
    TouchEvent, Window,
};
use web_sys::HtmlElement;

use crate::card::{Card, CardId, CardKind, CardSet, ShowcaseMeta, SizeClass};
use crate::consts::{ZONE_MARGIN_TIGHT_PX, ZONE_MARGIN_WIDE_PX};
use crate::dom;
use crate::engine::{Action, EngineCore};
use crate::geom::{Point, Size};
use crate::layout::{self, Profile};
use crate::parallax::{
    BlobEffect, CTA_BLOB, SERVICES_BLUE, SERVICES_STACK, SERVICES_YELLOW, SHOWCASE_BACKDROP,
    ScrollZone,
};
use crate::widgets;

/// Initialize every interactive behavior on the page. Missing markup makes
/// the corresponding piece a silent no-op; nothing here is fatal.
pub fn init() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    widgets::init_mobile_menu(&document)?;
    widgets::init_smooth_scroll(&document)?;
    widgets::init_hero_blob(&window, &document)?;
    init_blob_zones(&window, &document)?;
    init_board(&window, &document, BoardConfig::showcase())?;
    init_board(&window, &document, BoardConfig::gallery())?;
    Ok(())
}

// ── Card boards ─────────────────────────────────────────────────

/// Which terminal UI a board's taps reach.
#[derive(Clone, Copy, PartialEq, Eq)]
enum RegionKind {
    Showcase,
    Gallery,
}

/// Markup contract for one interactive card region.
struct BoardConfig {
    container: &'static str,
    item: &'static str,
    emphasized: &'static str,
    section: &'static str,
    profile: Profile,
    kind: RegionKind,
}

impl BoardConfig {
    fn showcase() -> Self {
        Self {
            container: ".portfolio__ui-blob",
            item: ".portfolio__ui-item",
            emphasized: "portfolio__ui-item--large",
            section: ".portfolio",
            profile: layout::SHOWCASE,
            kind: RegionKind::Showcase,
        }
    }

    fn gallery() -> Self {
        Self {
            container: ".cs-gallery__blob",
            item: ".cs-gallery__item",
            emphasized: "cs-gallery__item--wide",
            section: ".cs-gallery",
            profile: layout::GALLERY,
            kind: RegionKind::Gallery,
        }
    }
}

struct PanelRefs {
    root: Element,
    title: Element,
    description: Element,
    link: Element,
}

struct LightboxRefs {
    root: Element,
    image: Element,
}

/// One interactive region: the engine plus the elements its actions touch.
struct Board {
    engine: EngineCore,
    items: Vec<HtmlElement>,
    panel: Option<PanelRefs>,
    lightbox: Option<LightboxRefs>,
    body: Option<HtmlElement>,
}

fn init_board(window: &Window, document: &Document, config: BoardConfig) -> Result<(), JsValue> {
    let Some(container) = dom::query_html(document, config.container) else {
        return Ok(());
    };
    let items = dom::query_all_html(document, config.item)?;
    if items.is_empty() {
        return Ok(());
    }

    let mut cards = CardSet::new();
    for el in &items {
        let size = if el.class_list().contains(config.emphasized) {
            SizeClass::Emphasized
        } else {
            SizeClass::Normal
        };
        let kind = match config.kind {
            RegionKind::Showcase => CardKind::Showcase(ShowcaseMeta {
                title: el.get_attribute("data-project"),
                description: el.get_attribute("data-desc"),
                link: el.get_attribute("data-link"),
            }),
            RegionKind::Gallery => CardKind::Gallery,
        };
        cards.push(Card::new(kind, size));

        if let Err(err) = el.set_attribute("draggable", "false") {
            log::warn!("draggable attribute write failed: {err:?}");
        }
        dom::set_style(el, "will-change", "transform");
    }

    let mut engine = EngineCore::new(cards, config.profile);

    // The container is measured exactly once; layout never re-runs on resize.
    let container_size = Size::new(
        f64::from(container.offset_width()),
        f64::from(container.offset_height()),
    );
    let mode = layout::mode_for_viewport(dom::viewport_width(window));
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    let placement = engine.init_layout(mode, container_size, &mut rng);

    if let Some(section) = dom::query_html(document, config.section) {
        engine.set_zone(ScrollZone::new(
            f64::from(section.offset_top()),
            f64::from(section.offset_height()),
            ZONE_MARGIN_WIDE_PX,
        ));
    }

    let panel = (config.kind == RegionKind::Showcase)
        .then(|| panel_refs(document))
        .flatten();
    let lightbox = (config.kind == RegionKind::Gallery)
        .then(|| lightbox_refs(document))
        .flatten();

    let board = Rc::new(RefCell::new(Board {
        engine,
        items,
        panel,
        lightbox,
        body: document.body(),
    }));
    apply(&board.borrow(), &placement);

    wire_pointer_events(document, &board)?;
    wire_scroll(window, &board)?;
    match config.kind {
        RegionKind::Showcase => wire_panel(document, &board, config.item)?,
        RegionKind::Gallery => wire_lightbox(document, &board)?,
    }
    Ok(())
}

fn panel_refs(document: &Document) -> Option<PanelRefs> {
    Some(PanelRefs {
        root: dom::by_id(document, "portfolioInfobox")?,
        title: dom::by_id(document, "infoboxTitle")?,
        description: dom::by_id(document, "infoboxDesc")?,
        link: dom::by_id(document, "infoboxLink")?,
    })
}

fn lightbox_refs(document: &Document) -> Option<LightboxRefs> {
    Some(LightboxRefs {
        root: dom::by_id(document, "lightbox")?,
        image: dom::by_id(document, "lightboxImg")?,
    })
}

/// Apply engine actions as DOM writes, in order.
fn apply(board: &Board, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Place { card, rect, rotation, z } => {
                if let Some(el) = board.items.get(*card) {
                    dom::set_style(el, "left", &format!("{}px", rect.x));
                    dom::set_style(el, "top", &format!("{}px", rect.y));
                    dom::set_style(el, "width", &format!("{}px", rect.width));
                    dom::set_style(el, "z-index", &z.to_string());
                    dom::set_style(el, "transform", &format!("rotate({rotation}deg)"));
                }
            }
            Action::SetTransform { card, transform } => {
                if let Some(el) = board.items.get(*card) {
                    // translate3d keeps the card on the GPU compositor layer.
                    dom::set_style(
                        el,
                        "transform",
                        &format!(
                            "translate3d({}px, {}px, 0) rotate({}deg)",
                            transform.x, transform.y, transform.rotation
                        ),
                    );
                }
            }
            Action::SetZ { card, z } => {
                if let Some(el) = board.items.get(*card) {
                    dom::set_style(el, "z-index", &z.to_string());
                }
            }
            Action::DragStarted { card } => {
                if let Some(el) = board.items.get(*card) {
                    dom::add_class(el, "is-dragging");
                }
            }
            Action::DragEnded { card } => {
                if let Some(el) = board.items.get(*card) {
                    dom::remove_class(el, "is-dragging");
                }
            }
            Action::ActivateCard { card } => {
                if let Some(el) = board.items.get(*card) {
                    dom::add_class(el, "is-active");
                }
            }
            Action::DeactivateCard { card } => {
                if let Some(el) = board.items.get(*card) {
                    dom::remove_class(el, "is-active");
                }
            }
            Action::ShowPanel { content } => {
                if let Some(panel) = &board.panel {
                    panel.title.set_text_content(Some(&content.title));
                    panel.description.set_text_content(Some(&content.description));
                    if let Err(err) = panel.link.set_attribute("href", &content.link) {
                        log::warn!("panel link write failed: {err:?}");
                    }
                    dom::add_class(&panel.root, "is-visible");
                }
            }
            Action::HidePanel => {
                if let Some(panel) = &board.panel {
                    dom::remove_class(&panel.root, "is-visible");
                }
            }
            Action::OpenLightbox { card } => {
                show_image(board, *card);
                if let Some(lightbox) = &board.lightbox {
                    dom::add_class(&lightbox.root, "is-open");
                }
                if let Some(body) = &board.body {
                    dom::set_style(body, "overflow", "hidden");
                }
            }
            Action::ShowImage { card } => show_image(board, *card),
            Action::CloseLightbox => {
                if let Some(lightbox) = &board.lightbox {
                    dom::remove_class(&lightbox.root, "is-open");
                }
                if let Some(body) = &board.body {
                    dom::set_style(body, "overflow", "");
                }
            }
        }
    }
}

fn show_image(board: &Board, card: CardId) {
    let (Some(lightbox), Some(el)) = (&board.lightbox, board.items.get(card)) else {
        return;
    };
    let src = el.get_attribute("src").unwrap_or_default();
    let alt = el.get_attribute("alt").unwrap_or_default();
    if let Err(err) = lightbox.image.set_attribute("src", &src) {
        log::warn!("lightbox src write failed: {err:?}");
    }
    if let Err(err) = lightbox.image.set_attribute("alt", &alt) {
        log::warn!("lightbox alt write failed: {err:?}");
    }
}

/// Per-item start listeners plus single document-level move/end listeners.
fn wire_pointer_events(document: &Document, board: &Rc<RefCell<Board>>) -> Result<(), JsValue> {
    let items = board.borrow().items.clone();
    for (index, item) in items.iter().enumerate() {
        {
            let board = Rc::clone(board);
            let on_down = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                let mut b = board.borrow_mut();
                let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                let actions = b.engine.pointer_down(index, point);
                apply(&b, &actions);
            }));
            item.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
            on_down.forget();
        }
        {
            let board = Rc::clone(board);
            let on_touch = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |event: TouchEvent| {
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let mut b = board.borrow_mut();
                let point = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
                let actions = b.engine.pointer_down(index, point);
                apply(&b, &actions);
            }));
            item.add_event_listener_with_callback("touchstart", on_touch.as_ref().unchecked_ref())?;
            on_touch.forget();
        }
    }

    {
        let board = Rc::clone(board);
        let on_move = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
            let mut b = board.borrow_mut();
            if !b.engine.is_dragging() {
                return;
            }
            event.prevent_default();
            let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            let actions = b.engine.pointer_move(point);
            apply(&b, &actions);
        }));
        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }
    {
        let board = Rc::clone(board);
        let on_up = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut b = board.borrow_mut();
            let actions = b.engine.pointer_up();
            apply(&b, &actions);
        }));
        document.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
        on_up.forget();
    }
    {
        // Non-passive so preventDefault can stop the page scrolling while a
        // card is mid-drag on touch devices.
        let board = Rc::clone(board);
        let on_touch_move = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |event: TouchEvent| {
            let mut b = board.borrow_mut();
            if !b.engine.is_dragging() {
                return;
            }
            event.prevent_default();
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            let point = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
            let actions = b.engine.pointer_move(point);
            apply(&b, &actions);
        }));
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_touch_move.as_ref().unchecked_ref(),
            &options,
        )?;
        on_touch_move.forget();
    }
    for event_name in ["touchend", "touchcancel"] {
        let board = Rc::clone(board);
        let on_end = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut b = board.borrow_mut();
            let actions = b.engine.pointer_up();
            apply(&b, &actions);
        }));
        document.add_event_listener_with_callback(event_name, on_end.as_ref().unchecked_ref())?;
        on_end.forget();
    }
    Ok(())
}

/// Scroll: dismiss the panel immediately, and coalesce parallax work to at
/// most one engine frame per rendered frame.
fn wire_scroll(window: &Window, board: &Rc<RefCell<Board>>) -> Result<(), JsValue> {
    let ticking = Rc::new(Cell::new(false));
    let frame = Closure::<dyn FnMut()>::wrap(Box::new({
        let board = Rc::clone(board);
        let ticking = Rc::clone(&ticking);
        let window = window.clone();
        move || {
            ticking.set(false);
            let mut b = board.borrow_mut();
            let actions = b
                .engine
                .parallax_frame(dom::scroll_y(&window), dom::viewport_height(&window));
            apply(&b, &actions);
        }
    }));
    let on_scroll = Closure::<dyn FnMut()>::wrap(Box::new({
        let board = Rc::clone(board);
        let ticking = Rc::clone(&ticking);
        let window = window.clone();
        move || {
            {
                let mut b = board.borrow_mut();
                if b.engine.panel_open() {
                    let actions = b.engine.dismiss_panel();
                    apply(&b, &actions);
                }
            }
            if ticking.get() {
                return;
            }
            ticking.set(true);
            if let Err(err) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                log::warn!("requestAnimationFrame failed: {err:?}");
                ticking.set(false);
            }
        }
    }));
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn wire_panel(
    document: &Document,
    board: &Rc<RefCell<Board>>,
    item_selector: &'static str,
) -> Result<(), JsValue> {
    if let Some(close) = dom::by_id(document, "infoboxClose") {
        let board = Rc::clone(board);
        let on_close = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut b = board.borrow_mut();
            let actions = b.engine.dismiss_panel();
            apply(&b, &actions);
        }));
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }

    let Some(root) = board.borrow().panel.as_ref().map(|p| p.root.clone()) else {
        return Ok(());
    };
    let on_outside = Closure::<dyn FnMut(Event)>::wrap(Box::new({
        let board = Rc::clone(board);
        move |event: Event| {
            let Some(target) = dom::target_element(&event) else {
                return;
            };
            let on_card = matches!(target.closest(item_selector), Ok(Some(_)));
            if dom::contains(&root, &target) || on_card {
                return;
            }
            let mut b = board.borrow_mut();
            let actions = b.engine.dismiss_panel();
            apply(&b, &actions);
        }
    }));
    document.add_event_listener_with_callback("click", on_outside.as_ref().unchecked_ref())?;
    on_outside.forget();
    Ok(())
}

fn wire_lightbox(document: &Document, board: &Rc<RefCell<Board>>) -> Result<(), JsValue> {
    let Some(root) = board.borrow().lightbox.as_ref().map(|l| l.root.clone()) else {
        return Ok(());
    };

    if let Ok(Some(close)) = root.query_selector(".lightbox__close") {
        let board = Rc::clone(board);
        let on_close = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut b = board.borrow_mut();
            let actions = b.engine.close_lightbox();
            apply(&b, &actions);
        }));
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }

    for (selector, direction) in [(".lightbox__nav--prev", -1), (".lightbox__nav--next", 1)] {
        if let Ok(Some(nav)) = root.query_selector(selector) {
            let board = Rc::clone(board);
            let on_nav = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
                event.stop_propagation();
                let mut b = board.borrow_mut();
                let actions = b.engine.lightbox_navigate(direction);
                apply(&b, &actions);
            }));
            nav.add_event_listener_with_callback("click", on_nav.as_ref().unchecked_ref())?;
            on_nav.forget();
        }
    }

    {
        // Backdrop click: only a click on the overlay itself closes.
        let board = Rc::clone(board);
        let overlay = root.clone();
        let on_backdrop = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
            let Some(target) = dom::target_element(&event) else {
                return;
            };
            let overlay_node: &Node = overlay.as_ref();
            let target_node: &Node = target.as_ref();
            if !target_node.is_same_node(Some(overlay_node)) {
                return;
            }
            let mut b = board.borrow_mut();
            let actions = b.engine.close_lightbox();
            apply(&b, &actions);
        }));
        root.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())?;
        on_backdrop.forget();
    }

    {
        let board = Rc::clone(board);
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |event: KeyboardEvent| {
            let mut b = board.borrow_mut();
            let actions = b.engine.key_down(&event.key());
            apply(&b, &actions);
        }));
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }
    Ok(())
}

// ── Decorative blob zones ───────────────────────────────────────

/// How one blob's transform string is anchored: blobs centered by their
/// resting CSS keep the `-50%` translation under the parallax offset.
struct BlobSpec {
    selector: &'static str,
    effect: BlobEffect,
    center_anchored: bool,
}

fn init_blob_zones(window: &Window, document: &Document) -> Result<(), JsValue> {
    init_blob_zone(
        window,
        document,
        ".services",
        ZONE_MARGIN_TIGHT_PX,
        "transform 0.1s ease-out",
        &[
            BlobSpec { selector: ".services__blob--blue", effect: SERVICES_BLUE, center_anchored: true },
            BlobSpec { selector: ".services__blob--yellow", effect: SERVICES_YELLOW, center_anchored: false },
        ],
    )?;
    init_blob_zone(
        window,
        document,
        ".portfolio",
        ZONE_MARGIN_WIDE_PX,
        "transform 0.4s ease-out",
        &[BlobSpec { selector: ".portfolio__blob", effect: SHOWCASE_BACKDROP, center_anchored: true }],
    )?;
    init_blob_zone(
        window,
        document,
        ".cta-section",
        ZONE_MARGIN_WIDE_PX,
        "transform 0.15s ease-out",
        &[BlobSpec { selector: ".cta-section__blob", effect: CTA_BLOB, center_anchored: true }],
    )?;
    init_blob_zone(
        window,
        document,
        ".svcs-stack",
        ZONE_MARGIN_WIDE_PX,
        "transform 0.15s ease-out",
        &[
            BlobSpec { selector: ".svcs-stack__blob--1", effect: SERVICES_STACK[0], center_anchored: false },
            BlobSpec { selector: ".svcs-stack__blob--2", effect: SERVICES_STACK[1], center_anchored: false },
            BlobSpec { selector: ".svcs-stack__blob--3", effect: SERVICES_STACK[2], center_anchored: false },
        ],
    )?;
    Ok(())
}

/// Wire one decorative zone: measure the section once, then recompute blob
/// transforms at most once per frame while scroll is inside the activation
/// window. The zone skips setup entirely if any of its blobs is absent.
fn init_blob_zone(
    window: &Window,
    document: &Document,
    section_selector: &str,
    margin: f64,
    transition: &str,
    specs: &[BlobSpec],
) -> Result<(), JsValue> {
    let Some(section) = dom::query_html(document, section_selector) else {
        return Ok(());
    };
    let mut targets = Vec::with_capacity(specs.len());
    for spec in specs {
        let Some(el) = dom::query_html(document, spec.selector) else {
            return Ok(());
        };
        dom::set_style(&el, "will-change", "transform");
        dom::set_style(&el, "transition", transition);
        targets.push((el, spec.effect, spec.center_anchored));
    }

    let zone = ScrollZone::new(
        f64::from(section.offset_top()),
        f64::from(section.offset_height()),
        margin,
    );

    let ticking = Rc::new(Cell::new(false));
    let frame = Closure::<dyn FnMut()>::wrap(Box::new({
        let ticking = Rc::clone(&ticking);
        let window = window.clone();
        move || {
            ticking.set(false);
            let progress =
                zone.centered_progress(dom::scroll_y(&window), dom::viewport_height(&window));
            let Some(centered) = progress else {
                return;
            };
            for (el, effect, anchored) in &targets {
                let (dx, dy, rotation) = effect.at(centered);
                let transform = if *anchored {
                    format!(
                        "translate(calc(-50% + {dx}px), calc(-50% + {dy}px)) rotate({rotation}deg)"
                    )
                } else {
                    format!("translate({dx}px, {dy}px) rotate({rotation}deg)")
                };
                dom::set_style(el, "transform", &transform);
            }
        }
    }));
    let on_scroll = Closure::<dyn FnMut()>::wrap(Box::new({
        let ticking = Rc::clone(&ticking);
        let window = window.clone();
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
    }));
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}
