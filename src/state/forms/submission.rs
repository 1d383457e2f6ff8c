//! Submit / confirm / reset state machine shared by every form page
//!
//! A form starts `Idle`. Submitting moves it to `Submitted` and schedules a
//! reset; when the reset fires the form goes back to `Idle` with every field
//! cleared. There is no other way out of `Submitted`.
//!
//! The reset runs as a tokio task that reports back through a channel drained
//! by the UI loop. Dropping the form (navigating away) aborts that task, so a
//! torn-down page never sees its reset.

use super::form_state::{FormError, FormFields};
use super::schema::FormSchema;
use crate::clock::Clock;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// Delay between a submit and the automatic reset
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Visible state of a form page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitted,
}

/// Sent when a reset timer expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub ticket: Uuid,
}

/// Plumbing handed to a form when its page mounts
#[derive(Clone)]
pub struct FormContext {
    pub timer_tx: UnboundedSender<TimerEvent>,
    pub reset_delay: Duration,
    pub clock: Arc<dyn Clock>,
}

/// A scheduled reset. Dropping it cancels the reset.
#[derive(Debug)]
pub struct ResetTimer {
    ticket: Uuid,
    handle: JoinHandle<()>,
}

impl ResetTimer {
    /// Schedule a [`TimerEvent`] `delay` from now. Must run inside a tokio runtime.
    pub fn schedule(delay: Duration, tx: UnboundedSender<TimerEvent>) -> Self {
        let ticket = Uuid::new_v4();
        // Fix the deadline now; the task may not be polled until later.
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // The receiver is gone when the app is shutting down
            let _ = tx.send(TimerEvent { ticket });
        });
        Self { ticket, handle }
    }

    pub fn ticket(&self) -> Uuid {
        self.ticket
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

enum Phase {
    Idle,
    Submitted { timer: ResetTimer },
}

/// Form state machine parameterized over the field-set shape
pub struct Submission<S: FormSchema> {
    fields: FormFields,
    phase: Phase,
    ctx: FormContext,
    _schema: PhantomData<S>,
}

impl<S: FormSchema> Submission<S> {
    pub fn new(ctx: FormContext) -> Self {
        Self {
            fields: FormFields::new(S::NAME, S::FIELDS),
            phase: Phase::Idle,
            ctx,
            _schema: PhantomData,
        }
    }

    pub fn state(&self) -> SubmissionState {
        match self.phase {
            Phase::Idle => SubmissionState::Idle,
            Phase::Submitted { .. } => SubmissionState::Submitted,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.state() == SubmissionState::Submitted
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access for focus and keystrokes; `None` while submitted
    pub fn fields_mut(&mut self) -> Option<&mut FormFields> {
        match self.phase {
            Phase::Idle => Some(&mut self.fields),
            Phase::Submitted { .. } => None,
        }
    }

    /// Apply an input-change event
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        match self.fields_mut() {
            Some(fields) => fields.set(name, value),
            None => Err(FormError::Locked { form: S::NAME }),
        }
    }

    /// Accept the current fields without validating them.
    ///
    /// Returns the emitted record, or `None` when already submitted.
    pub fn submit(&mut self) -> Option<S::Record> {
        if self.is_submitted() {
            tracing::debug!(form = S::NAME, "submit ignored, already submitted");
            return None;
        }

        let record = S::record(&self.fields, self.ctx.clock.as_ref());
        match serde_json::to_string(&record) {
            Ok(json) => tracing::info!(form = S::NAME, record = %json, "Form submitted"),
            Err(e) => tracing::info!(form = S::NAME, record = ?record, error = %e, "Form submitted"),
        }

        let timer = ResetTimer::schedule(self.ctx.reset_delay, self.ctx.timer_tx.clone());
        self.phase = Phase::Submitted { timer };
        Some(record)
    }

    /// Handle an expired timer. Returns true if this form was reset.
    pub fn on_timer_fired(&mut self, ticket: Uuid) -> bool {
        match &self.phase {
            Phase::Submitted { timer } if timer.ticket() == ticket => {}
            _ => {
                tracing::debug!(form = S::NAME, %ticket, "ignoring stale reset timer");
                return false;
            }
        }

        self.phase = Phase::Idle;
        self.fields.clear();
        tracing::debug!(form = S::NAME, "form reset");
        true
    }

    /// Ticket of the pending reset, if any
    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<Uuid> {
        match &self.phase {
            Phase::Submitted { timer } => Some(timer.ticket()),
            Phase::Idle => None,
        }
    }
}

impl<S: FormSchema> Drop for Submission<S> {
    fn drop(&mut self) {
        if let Phase::Submitted { timer } = &self.phase {
            tracing::debug!(form = S::NAME, ticket = %timer.ticket(), "cancelling pending reset");
        }
    }
}
