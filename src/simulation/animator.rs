use crate::canvas::Canvas;
use crate::simulation::field::ParticleField;

/// The host's "call me again next frame" primitive.
///
/// The winit app satisfies this with `Window::request_redraw`; tests count
/// the requests.
pub trait TickScheduler {
    fn request_tick(&mut self);
}

/// Drives the field's cooperative animation loop.
///
/// Owns the field and an explicit stop flag instead of letting the tick
/// closure keep itself alive: a tick that finds the flag set draws nothing
/// and schedules nothing, so stopping is effective from the very next frame
/// and safe to repeat from any teardown path.
pub struct Animator {
    field: ParticleField,
    stopped: bool,
}

impl Animator {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            stopped: false,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run one tick: advance and draw the field, then ask the host for the
    /// next frame. Does nothing once stopped.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, scheduler: &mut dyn TickScheduler) {
        if self.stopped {
            return;
        }

        self.field.step(canvas);
        scheduler.request_tick();
    }

    /// Stop the loop. Idempotent; no tick is scheduled afterwards.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
