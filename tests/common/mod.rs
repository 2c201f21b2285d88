#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use agent_animate::{Element, Scheduler, UserAgentSource};

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct HostState {
    user_agent: String,
    now: Duration,
    frames: Vec<Callback>,
    timers: Vec<(Duration, u64, Callback)>,
    next_timer: u64,
}

/// In-memory host with a manual clock and frame queue.
#[derive(Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<HostState>>,
}

impl FakeHost {
    pub fn new(user_agent: &str) -> Self {
        let host = Self::default();
        host.state.borrow_mut().user_agent = user_agent.to_string();
        host
    }

    pub fn set_user_agent(&self, user_agent: &str) {
        self.state.borrow_mut().user_agent = user_agent.to_string();
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Run every callback queued for the next frame.
    pub fn flush_frames(&self) {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        for frame in frames {
            frame();
        }
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let (at, _, cb) = state.timers.remove(idx);
                    state.now = at;
                    cb
                })
            };
            match next {
                Some(cb) => cb(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for FakeHost {
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        self.state.borrow_mut().frames.push(callback);
    }

    fn set_timeout(&self, callback: Box<dyn FnOnce()>, delay: Duration) {
        let mut state = self.state.borrow_mut();
        let at = state.now + delay;
        let seq = state.next_timer;
        state.next_timer += 1;
        state.timers.push((at, seq, callback));
    }
}

impl UserAgentSource for FakeHost {
    fn user_agent(&self) -> String {
        self.state.borrow().user_agent.clone()
    }
}

#[derive(Default)]
struct ElementState {
    classes: Vec<String>,
    added: Vec<String>,
    listeners: Vec<(u64, Rc<RefCell<Box<dyn FnMut()>>>)>,
    next_listener: u64,
}

/// Element recording its class list and animation-end listeners.
#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class_name)
    }

    /// Every class ever added, in order.
    pub fn added_classes(&self) -> Vec<String> {
        self.state.borrow().added.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Dispatch the animation-completed event to the current listeners.
    pub fn fire_animation_end(&self) {
        let listeners: Vec<_> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for listener in listeners {
            (listener.borrow_mut())();
        }
    }
}

impl Element for FakeElement {
    type Listener = u64;

    fn add_class(&self, class_name: &str) {
        let mut state = self.state.borrow_mut();
        state.added.push(class_name.to_string());
        if !state.classes.iter().any(|c| c == class_name) {
            state.classes.push(class_name.to_string());
        }
    }

    fn remove_class(&self, class_name: &str) {
        self.state.borrow_mut().classes.retain(|c| c != class_name);
    }

    fn add_animation_end_listener(&self, callback: Box<dyn FnMut()>) -> u64 {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.push((id, Rc::new(RefCell::new(callback))));
        id
    }

    fn remove_animation_end_listener(&self, listener: u64) {
        self.state.borrow_mut().listeners.retain(|(id, _)| *id != listener);
    }
}

pub const ANDROID_4_4_2: &str = "Mozilla/5.0 (Linux; Android 4.4.2; SM-G900S Build/KOT49H) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/30.0.0.0 Mobile Safari/537.36";
pub const ANDROID_7_0: &str = "Mozilla/5.0 (Linux; Android 7.0; SM-G930S Build/NRD90M) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.137 Mobile Safari/537.36";
