use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::try_join_all;
use futures::FutureExt;

use crate::cache::get_agent_info;
use crate::error::{Error, Result};
use crate::host::{Element, Scheduler, Targets, UserAgentSource};
use crate::options::AnimationOptions;
use crate::types::{AgentInfo, AnimationOutcome};

/// Triggers CSS-class animations on elements of one host.
pub struct Animator<S> {
    scheduler: Rc<S>,
    supported: bool,
}

impl<S> Animator<S>
where
    S: Scheduler + 'static,
{
    /// Use the process-wide agent info of `host` to decide whether
    /// animations can run at all.
    pub fn new(host: S) -> Self
    where
        S: UserAgentSource,
    {
        let supported = get_agent_info(&host).is_animation_supported();
        Self {
            scheduler: Rc::new(host),
            supported,
        }
    }

    pub fn with_agent_info(scheduler: S, agent: &AgentInfo) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            supported: agent.is_animation_supported(),
        }
    }

    pub fn is_animation_supported(&self) -> bool {
        self.supported
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Add `class_name` to every target and wait for their animations to end.
    ///
    /// Each target starts right away, before the returned future is polled.
    /// The future resolves with one [`AnimationOutcome::Done`] per target in
    /// target order, or fails with the first [`Error::AnimationTimeout`].
    /// A failure does not stop the other targets: their timers and
    /// listeners stay armed and clean up after themselves.
    pub fn animate<E>(
        &self,
        targets: impl Into<Targets<E>>,
        class_name: &str,
        options: Option<AnimationOptions>,
    ) -> impl Future<Output = Result<Vec<AnimationOutcome>>>
    where
        E: Element,
    {
        let options = options.unwrap_or_default();
        let class_name: Rc<str> = Rc::from(class_name);

        let pending: Vec<_> = targets
            .into()
            .into_vec()
            .into_iter()
            .map(|target| {
                Attempt::start(
                    target,
                    class_name.clone(),
                    &options,
                    self.scheduler.clone(),
                    self.supported,
                )
            })
            .collect();

        try_join_all(pending)
    }
}

type Settle = oneshot::Sender<Result<AnimationOutcome>>;

/// State shared by the completion listener and the timeout of one target.
struct Attempt<E: Element, S> {
    target: E,
    class_name: Rc<str>,
    remove_class_on_end: bool,
    timeout: Duration,
    scheduler: Rc<S>,
    status: Cell<AnimationOutcome>,
    listener: RefCell<Option<E::Listener>>,
    settle: RefCell<Option<Settle>>,
}

impl<E, S> Attempt<E, S>
where
    E: Element,
    S: Scheduler + 'static,
{
    fn start(
        target: E,
        class_name: Rc<str>,
        options: &AnimationOptions,
        scheduler: Rc<S>,
        supported: bool,
    ) -> impl Future<Output = Result<AnimationOutcome>> {
        let (tx, rx) = oneshot::channel();
        let orphaned = Error::AnimationTimeout {
            class_name: class_name.to_string(),
            timeout: options.timeout,
        };
        let attempt = Rc::new(Self {
            target,
            class_name,
            remove_class_on_end: options.remove_class_on_end,
            timeout: options.timeout,
            scheduler,
            status: Cell::new(AnimationOutcome::Ready),
            listener: RefCell::new(None),
            settle: RefCell::new(Some(tx)),
        });

        if supported {
            attempt.run();
        } else {
            tracing::trace!(class = %attempt.class_name, "animation unsupported, completing at once");
            attempt.complete();
        }

        // The sender only drops unsettled when the host discards the pending
        // timer, which counts as the timer having won.
        rx.map(move |settled| settled.unwrap_or(Err(orphaned)))
    }

    fn run(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let listener = self
            .target
            .add_animation_end_listener(Box::new(move || {
                if let Some(attempt) = weak.upgrade() {
                    attempt.complete();
                }
            }));
        // The listener may already have fired while subscribing.
        if self.status.get().is_terminal() {
            self.target.remove_animation_end_listener(listener);
            return;
        }
        *self.listener.borrow_mut() = Some(listener);

        self.transition(AnimationOutcome::InProgress);
        self.target.add_class(&self.class_name);

        // The timer is never cancelled; it checks the status when it fires.
        let attempt = Rc::clone(self);
        self.scheduler
            .set_timeout(Box::new(move || attempt.expire()), self.timeout);
    }

    fn complete(&self) {
        if self.status.get().is_terminal() {
            return;
        }
        self.transition(AnimationOutcome::Done);
        self.clear();
        self.send(Ok(AnimationOutcome::Done));
    }

    fn expire(&self) {
        if self.status.get().is_terminal() {
            return;
        }
        tracing::warn!(
            class = %self.class_name,
            timeout = ?self.timeout,
            "animation did not complete in time"
        );
        self.transition(AnimationOutcome::Rejected);
        self.clear();
        self.send(Err(Error::AnimationTimeout {
            class_name: self.class_name.to_string(),
            timeout: self.timeout,
        }));
    }

    /// Detach the listener and strip the class on the next frame.
    fn clear(&self) {
        let listener = self.listener.borrow_mut().take();
        if let Some(listener) = listener {
            self.target.remove_animation_end_listener(listener);
        }
        if self.remove_class_on_end {
            let target = self.target.clone();
            let class_name = Rc::clone(&self.class_name);
            self.scheduler.request_animation_frame(Box::new(move || {
                target.remove_class(&class_name);
            }));
        }
    }

    fn transition(&self, next: AnimationOutcome) {
        tracing::trace!(
            class = %self.class_name,
            from = self.status.get().as_str(),
            to = next.as_str(),
            "animation status"
        );
        self.status.set(next);
    }

    fn send(&self, result: Result<AnimationOutcome>) {
        let settle = self.settle.borrow_mut().take();
        if let Some(tx) = settle {
            // The receiver is gone once the aggregate already failed.
            let _ = tx.send(result);
        }
    }
}
