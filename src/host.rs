//! Seams to the rendering host: the DOM-like element, the frame and timer
//! scheduler, and the ambient user-agent string.

use std::time::Duration;

/// Provides the hosting environment's user-agent string.
pub trait UserAgentSource {
    fn user_agent(&self) -> String;
}

impl UserAgentSource for str {
    fn user_agent(&self) -> String {
        self.to_owned()
    }
}

impl UserAgentSource for String {
    fn user_agent(&self) -> String {
        self.clone()
    }
}

/// An animatable element.
///
/// Handles are cheap clones of the same underlying element.
pub trait Element: Clone + 'static {
    /// Handle returned on subscription, needed to unsubscribe.
    type Listener: 'static;

    fn add_class(&self, class_name: &str);
    fn remove_class(&self, class_name: &str);

    /// Subscribe to the element's animation-completed event.
    fn add_animation_end_listener(&self, callback: Box<dyn FnMut()>) -> Self::Listener;
    fn remove_animation_end_listener(&self, listener: Self::Listener);
}

/// Deferred callbacks run by the host's event loop.
pub trait Scheduler {
    /// Run `callback` before the next repaint.
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>);
    /// Run `callback` once `delay` has elapsed.
    fn set_timeout(&self, callback: Box<dyn FnOnce()>, delay: Duration);
}

/// One element or an ordered list of elements to animate.
#[derive(Debug, Clone)]
pub enum Targets<E> {
    One(E),
    Many(Vec<E>),
}

impl<E> Targets<E> {
    pub fn into_vec(self) -> Vec<E> {
        match self {
            Self::One(e) => vec![e],
            Self::Many(v) => v,
        }
    }
}

impl<E: Element> From<E> for Targets<E> {
    fn from(element: E) -> Self {
        Self::One(element)
    }
}

impl<E> From<Vec<E>> for Targets<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::Many(elements)
    }
}

impl<E, const N: usize> From<[E; N]> for Targets<E> {
    fn from(elements: [E; N]) -> Self {
        Self::Many(elements.into())
    }
}

impl<E: Clone> From<&[E]> for Targets<E> {
    fn from(elements: &[E]) -> Self {
        Self::Many(elements.to_vec())
    }
}
