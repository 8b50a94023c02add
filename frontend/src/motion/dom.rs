//! Browser side of the orchestrator: the `Stage` over `web-sys`, listener
//! ownership, the animation frame loop and the Yew hooks sections use.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};
use yew::prelude::*;

use super::registry::{
    HoverEffect, HoverKey, MotionRegistry, Pointer, ScrollAnimation, ScrollKey, SectionHandle, Stage, TweenRequest,
};
use super::trigger::{Bounds, Viewport};
use super::value::VisualState;
use crate::config;

/// How a section names the elements it animates.
#[derive(Clone, PartialEq)]
pub enum Query {
    Node(NodeRef),
    /// Every descendant of the node matching a CSS selector.
    Within(NodeRef, &'static str),
    /// The root `<html>` element, for page-wide scroll ranges.
    Document,
}

fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        warn!("invalid selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub struct DomStage;

impl Stage for DomStage {
    type Target = Element;
    type Query = Query;

    fn resolve(&self, query: &Query) -> Vec<Element> {
        match query {
            Query::Node(node) => node.cast::<Element>().into_iter().collect(),
            Query::Within(node, selector) => node
                .cast::<Element>()
                .map(|root| select_all(&root, selector))
                .unwrap_or_default(),
            Query::Document => web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .into_iter()
                .collect(),
        }
    }

    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport { height: 0.0, scroll_y: 0.0 };
        };
        Viewport {
            height: window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0),
            scroll_y: window.scroll_y().unwrap_or(0.0),
        }
    }

    fn bounds(&self, target: &Element) -> Option<Bounds> {
        if !target.is_connected() {
            return None;
        }
        let rect = target.get_bounding_client_rect();
        Some(Bounds { top: rect.top(), height: rect.height() })
    }

    fn apply(&mut self, target: &Element, state: &VisualState) {
        let Some(element) = target.dyn_ref::<HtmlElement>() else { return };
        let style = element.style();
        for (name, value) in state.declarations() {
            if let Err(err) = style.set_property(name, &value) {
                warn!("failed to write {}: {:?}", name, err);
            }
        }
    }

    fn reset(&mut self, target: &Element, state: &VisualState) {
        let Some(element) = target.dyn_ref::<HtmlElement>() else { return };
        let style = element.style();
        for name in state.css_properties() {
            if let Err(err) = style.remove_property(name) {
                warn!("failed to clear {}: {:?}", name, err);
            }
        }
    }

    fn find_within(&self, target: &Element, selector: &'static str) -> Vec<Element> {
        select_all(target, selector)
    }
}

/// An attached event listener. Dropping it detaches the callback.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn attach(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(DomListener { target: target.clone(), event, callback }),
            Err(err) => {
                warn!("failed to attach {} listener: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach {} listener: {:?}", self.event, err);
        }
    }
}

struct Driver {
    registry: MotionRegistry<DomStage>,
    listeners: HashMap<SectionHandle, Vec<DomListener>>,
    window_listeners: Vec<DomListener>,
    frame: Option<i32>,
    last_timestamp: Option<f64>,
}

impl Driver {
    fn cancel_frame(&mut self) {
        if let Some(id) = self.frame.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    warn!("failed to cancel animation frame: {:?}", err);
                }
            }
        }
        self.last_timestamp = None;
    }
}

struct Inner {
    driver: RefCell<Driver>,
    frame_callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Shared handle to the page's orchestrator, provided through context.
#[derive(Clone)]
pub struct Motion {
    inner: Rc<Inner>,
}

impl PartialEq for Motion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Motion {
    pub fn new() -> Self {
        let motion = Motion {
            inner: Rc::new(Inner {
                driver: RefCell::new(Driver {
                    registry: MotionRegistry::new(DomStage),
                    listeners: HashMap::new(),
                    window_listeners: Vec::new(),
                    frame: None,
                    last_timestamp: None,
                }),
                frame_callback: RefCell::new(None),
            }),
        };
        motion.attach_window();
        motion
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Motion> {
        weak.upgrade().map(|inner| Motion { inner })
    }

    fn attach_window(&self) {
        let Some(window) = web_sys::window() else { return };
        let mut listeners = Vec::new();
        for event in ["scroll", "resize"] {
            let weak = Rc::downgrade(&self.inner);
            let listener = DomListener::attach(&window, event, move |_| {
                if let Some(motion) = Motion::upgrade(&weak) {
                    motion.scrolled();
                }
            });
            listeners.extend(listener);
        }
        self.inner.driver.borrow_mut().window_listeners = listeners;
    }

    /// Opens a section whose registrations live until [`SectionScope::release`].
    pub fn section(&self, name: &'static str) -> SectionScope {
        let handle = self.inner.driver.borrow_mut().registry.open_section(name);
        SectionScope { motion: self.clone(), handle }
    }

    pub fn release(&self, handle: SectionHandle) -> bool {
        let mut driver = self.inner.driver.borrow_mut();
        let released = driver.registry.release_section(handle);
        driver.listeners.remove(&handle);
        if !driver.registry.is_animating() {
            driver.cancel_frame();
        }
        released
    }

    /// Tears down every section, listener and pending frame.
    pub fn release_all(&self) {
        let mut driver = self.inner.driver.borrow_mut();
        driver.registry.release_all();
        driver.listeners.clear();
        driver.window_listeners.clear();
        driver.cancel_frame();
    }

    fn scrolled(&self) {
        let animating = match self.inner.driver.try_borrow_mut() {
            Ok(mut driver) => driver.registry.on_scroll(),
            Err(_) => return,
        };
        if animating {
            self.request_frame();
        }
    }

    fn pointer(&self, key: HoverKey, index: usize, phase: Pointer) {
        let animating = match self.inner.driver.try_borrow_mut() {
            Ok(mut driver) => driver.registry.pointer(key, index, phase) && driver.registry.is_animating(),
            Err(_) => return,
        };
        if animating {
            self.request_frame();
        }
    }

    fn kick(&self) {
        if self.inner.driver.borrow().registry.is_animating() {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        let mut driver = self.inner.driver.borrow_mut();
        if driver.frame.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else { return };

        let mut slot = self.inner.frame_callback.borrow_mut();
        let callback = slot.get_or_insert_with(|| {
            let weak = Rc::downgrade(&self.inner);
            Closure::wrap(Box::new(move |timestamp: f64| {
                if let Some(motion) = Motion::upgrade(&weak) {
                    motion.frame(timestamp);
                }
            }) as Box<dyn FnMut(f64)>)
        });
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => driver.frame = Some(id),
            Err(err) => warn!("failed to request animation frame: {:?}", err),
        }
    }

    fn frame(&self, timestamp: f64) {
        let animating = {
            let mut driver = match self.inner.driver.try_borrow_mut() {
                Ok(driver) => driver,
                Err(_) => {
                    warn!("animation frame arrived while the orchestrator was busy");
                    return;
                }
            };
            driver.frame = None;
            let dt = driver
                .last_timestamp
                .map_or(0.0, |last| ((timestamp - last) / 1000.0).clamp(0.0, config::MAX_FRAME_DELTA));
            driver.last_timestamp = Some(timestamp);
            let animating = driver.registry.on_frame(dt);
            if !animating {
                driver.last_timestamp = None;
            }
            animating
        };
        if animating {
            self.request_frame();
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::new()
    }
}

/// Registration surface of one open section.
pub struct SectionScope {
    motion: Motion,
    handle: SectionHandle,
}

impl SectionScope {
    pub fn scroll(&self, target: Query, animation: ScrollAnimation<Query>) -> Option<ScrollKey> {
        let key = self
            .motion
            .inner
            .driver
            .borrow_mut()
            .registry
            .bind_scroll(self.handle, &target, animation);
        self.motion.kick();
        key
    }

    /// Binds a hover effect and attaches `mouseenter`/`mouseleave` listeners
    /// to each matched element. The listeners are dropped with the section.
    pub fn hover(&self, target: Query, effect: HoverEffect) -> Option<HoverKey> {
        let mut driver = self.motion.inner.driver.borrow_mut();
        let key = driver.registry.bind_hover(self.handle, &target, effect)?;
        let elements = driver.registry.hover_targets(key).to_vec();

        let mut listeners = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            for (event, phase) in [("mouseenter", Pointer::Enter), ("mouseleave", Pointer::Leave)] {
                let weak = Rc::downgrade(&self.motion.inner);
                let listener = DomListener::attach(element, event, move |_| {
                    if let Some(motion) = Motion::upgrade(&weak) {
                        motion.pointer(key, index, phase);
                    }
                });
                listeners.extend(listener);
            }
        }
        driver.listeners.entry(self.handle).or_default().extend(listeners);
        Some(key)
    }

    pub fn play(&self, target: Query, request: TweenRequest) -> usize {
        let started = self.motion.inner.driver.borrow_mut().registry.play(self.handle, &target, request);
        self.motion.kick();
        started
    }

    pub fn release(&self) -> bool {
        self.motion.release(self.handle)
    }
}

/// Opens a motion section once the component has rendered and releases it
/// when the component unmounts.
#[hook]
pub fn use_motion_section<F>(name: &'static str, setup: F)
where
    F: FnOnce(&SectionScope) + 'static,
{
    use_motion_with_deps(name, (), move |scope, _| setup(scope));
}

/// Like [`use_motion_section`], but the section is released and set up again
/// whenever `deps` changes.
#[hook]
pub fn use_motion_with_deps<D, F>(name: &'static str, deps: D, setup: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&SectionScope, &D) + 'static,
{
    let motion = use_context::<Motion>();
    use_effect_with_deps(
        move |deps| {
            let scope = match motion {
                Some(motion) => {
                    let scope = motion.section(name);
                    setup(&scope, deps);
                    Some(scope)
                }
                None => {
                    debug!("{}: no motion context, skipping animations", name);
                    None
                }
            };
            move || {
                if let Some(scope) = scope {
                    scope.release();
                }
            }
        },
        deps,
    );
}
