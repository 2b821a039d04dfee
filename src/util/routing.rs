//! Optional route-announcement hook.
//!
//! The hosting page may want to know which path the client mounted on (for
//! analytics or an outer shell router). Rather than reaching for a global at
//! call sites, the hook is injected once at construction and the announcer
//! guarantees it fires at most once per mount.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use std::cell::Cell;
use std::rc::Rc;

/// Callback receiving the current path on mount.
pub type RouteHook = Rc<dyn Fn(&str)>;

/// Invokes an optional [`RouteHook`] at most once.
#[derive(Clone, Default)]
pub struct RouteAnnouncer {
    hook: Option<RouteHook>,
    fired: Rc<Cell<bool>>,
}

impl RouteAnnouncer {
    pub fn new(hook: Option<RouteHook>) -> Self {
        Self {
            hook,
            fired: Rc::new(Cell::new(false)),
        }
    }

    /// Announce `path` to the hook, if one was injected and this is the first
    /// announcement. Later calls are no-ops.
    pub fn announce(&self, path: &str) {
        if self.fired.replace(true) {
            return;
        }
        if let Some(hook) = &self.hook {
            hook(path);
        }
    }
}

/// Discover a `handleRoutes` function on `window`, if the hosting page
/// registered one, and wrap it as a [`RouteHook`].
///
/// The page-level contract is `window.handleRoutes(paths: string[])`.
#[cfg(feature = "hydrate")]
pub fn window_route_hook() -> Option<RouteHook> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("handleRoutes")).ok()?;
    let function = value.dyn_into::<js_sys::Function>().ok()?;
    Some(Rc::new(move |path: &str| {
        let paths = js_sys::Array::of1(&JsValue::from_str(path));
        if function.call1(&JsValue::NULL, &paths).is_err() {
            leptos::logging::warn!("handleRoutes hook threw; ignoring");
        }
    }))
}
