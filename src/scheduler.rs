//! Frame scheduling and the run loop
//!
//! The host's "call me before the next paint" primitive is injected as a
//! [`FrameScheduler`]. In the browser that is `requestAnimationFrame`; tests and
//! the native host drive frames by hand with [`ManualScheduler`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::renderer::{Surface, render};
use crate::sim::{FieldStats, ParticleField};

/// A one-shot frame callback
pub type FrameCallback = Box<dyn FnOnce()>;

/// Host capability: invoke `callback` once, before the next paint
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Queue of pending frame callbacks, run on demand
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the oldest pending callback. Returns false if none was queued.
    pub fn run_frame(&self) -> bool {
        // Release the queue before calling: the callback usually requests the next frame
        let callback = self.queue.borrow_mut().pop_front();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run up to `n` frames, returning how many actually ran
    pub fn run_frames(&self, n: usize) -> usize {
        (0..n).take_while(|_| self.run_frame()).count()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}

struct Runner<S> {
    field: ParticleField,
    surface: S,
    running: bool,
    /// Bumped on every start so callbacks from an earlier run die out
    generation: u64,
    last_links: usize,
}

/// A particle field bound to a surface and a frame scheduler.
///
/// Handles are cheap to clone and share the same state; input listeners hold
/// clones to forward pointer and resize events.
pub struct Animation<S: Surface + 'static> {
    runner: Rc<RefCell<Runner<S>>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl<S: Surface + 'static> Clone for Animation<S> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<S: Surface + 'static> Animation<S> {
    /// Bind without starting
    pub fn new(field: ParticleField, surface: S, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            runner: Rc::new(RefCell::new(Runner {
                field,
                surface,
                running: false,
                generation: 0,
                last_links: 0,
            })),
            scheduler,
        }
    }

    /// Size the field to the viewport and start the loop.
    ///
    /// Without a surface nothing starts and `None` is returned.
    pub fn start(
        surface: Option<S>,
        mut field: ParticleField,
        (width, height): (u32, u32),
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Option<Self> {
        let Some(surface) = surface else {
            log::debug!("No drawing surface, particle field not started");
            return None;
        };

        field.resize(width, height);
        let animation = Self::new(field, surface, scheduler);
        animation.run();
        log::info!(
            "Particle field running: {}x{}, {} particles",
            width,
            height,
            animation.stats().particles
        );
        Some(animation)
    }

    /// Request frames until [`stop`](Self::stop). No-op if already running.
    pub fn run(&self) {
        let generation = {
            let mut runner = self.runner.borrow_mut();
            if runner.running {
                return;
            }
            runner.running = true;
            runner.generation += 1;
            runner.generation
        };
        self.schedule(generation);
    }

    /// Halt the loop; the pending callback neither steps nor reschedules
    pub fn stop(&self) {
        let mut runner = self.runner.borrow_mut();
        if runner.running {
            runner.running = false;
            log::debug!("Particle field stopped after {} frames", runner.field.stats().frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.runner.borrow().running
    }

    /// Step then render, once
    pub fn frame(&self) {
        let mut runner = self.runner.borrow_mut();
        let Runner { field, surface, .. } = &mut *runner;
        field.step();
        let links = render(field, surface);
        runner.last_links = links;
    }

    fn schedule(&self, generation: u64) {
        let handle = self.clone();
        self.scheduler.request_frame(Box::new(move || {
            {
                let runner = handle.runner.borrow();
                if !runner.running || runner.generation != generation {
                    return;
                }
            }
            handle.frame();
            handle.schedule(generation);
        }));
    }

    /// Viewport resized: new size, new particles
    pub fn resize(&self, width: u32, height: u32) {
        self.runner.borrow_mut().field.resize(width, height);
    }

    pub fn set_pointer(&self, x: f32, y: f32) {
        self.runner.borrow_mut().field.set_pointer(x, y);
    }

    /// Run `f` against the field (inspection or direct edits)
    pub fn with_field<R>(&self, f: impl FnOnce(&mut ParticleField) -> R) -> R {
        f(&mut self.runner.borrow_mut().field)
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.runner.borrow_mut().surface)
    }

    /// Field counters, with `links` taken from the last rendered frame
    pub fn stats(&self) -> FieldStats {
        let runner = self.runner.borrow();
        FieldStats {
            links: runner.last_links,
            ..runner.field.stats()
        }
    }
}
