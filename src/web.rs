//! Browser host backed by `web-sys`.

use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::host::{Element, Scheduler, UserAgentSource};

const ANIMATION_END: &str = "animationend";

/// The page's `window`: frames, timers and `navigator.userAgent`.
#[derive(Debug, Clone)]
pub struct WindowHost {
    window: web_sys::Window,
}

impl WindowHost {
    /// `None` outside a window context, e.g. in a worker.
    pub fn new() -> Option<Self> {
        web_sys::window().map(Self::from_window)
    }

    pub fn from_window(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for WindowHost {
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        let js = Closure::once_into_js(move || callback());
        if let Err(err) = self.window.request_animation_frame(js.unchecked_ref()) {
            tracing::warn!(?err, "requestAnimationFrame failed");
        }
    }

    fn set_timeout(&self, callback: Box<dyn FnOnce()>, delay: Duration) {
        let js = Closure::once_into_js(move || callback());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(js.unchecked_ref(), millis)
        {
            tracing::warn!(?err, "setTimeout failed");
        }
    }
}

impl UserAgentSource for WindowHost {
    fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }
}

/// Keeps the JS listener alive until it is removed.
pub struct AnimationEndListener {
    closure: Closure<dyn FnMut()>,
}

impl Element for web_sys::Element {
    type Listener = AnimationEndListener;

    fn add_class(&self, class_name: &str) {
        if let Err(err) = self.class_list().add_1(class_name) {
            tracing::warn!(?err, class = class_name, "failed to add class");
        }
    }

    fn remove_class(&self, class_name: &str) {
        if let Err(err) = self.class_list().remove_1(class_name) {
            tracing::warn!(?err, class = class_name, "failed to remove class");
        }
    }

    fn add_animation_end_listener(&self, callback: Box<dyn FnMut()>) -> Self::Listener {
        let closure = Closure::wrap(callback);
        if let Err(err) =
            self.add_event_listener_with_callback(ANIMATION_END, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to subscribe to animationend");
        }
        AnimationEndListener { closure }
    }

    fn remove_animation_end_listener(&self, listener: Self::Listener) {
        if let Err(err) = self.remove_event_listener_with_callback(
            ANIMATION_END,
            listener.closure.as_ref().unchecked_ref(),
        ) {
            tracing::warn!(?err, "failed to unsubscribe from animationend");
        }
    }
}
