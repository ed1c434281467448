//! Timer layer - the delayed contact form reset
//!
//! At most one reset is pending at a time. Scheduling a new one aborts the
//! previous task, and dropping the timer aborts whatever is still pending, so
//! nothing fires after the App actor is gone.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::app::contact::SubmissionTicket;
use crate::messages::TimerEvent;

/// Owns the pending reset task for the contact form
pub struct ResetTimer {
    delay: Duration,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    pending: Option<(SubmissionTicket, JoinHandle<()>)>,
}

impl ResetTimer {
    pub fn new(delay: Duration, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        ResetTimer {
            delay,
            event_tx,
            pending: None,
        }
    }

    /// Start the reset countdown for `ticket`, replacing any pending one
    pub fn schedule(&mut self, ticket: SubmissionTicket) {
        self.cancel();

        // Deadline is fixed at submit time, not when the task first runs
        let deadline = Instant::now() + self.delay;
        let event_tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = event_tx.send(TimerEvent::ResetContactForm(ticket));
        });

        tracing::debug!(
            submission = ticket.0,
            delay_ms = self.delay.as_millis() as u64,
            "Reset scheduled"
        );
        self.pending = Some((ticket, handle));
    }

    /// Abort the pending reset, if any
    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            if !handle.is_finished() {
                tracing::debug!(submission = ticket.0, "Pending reset cancelled");
            }
            handle.abort();
        }
    }

    /// Ticket of the reset still waiting to fire
    pub fn pending(&self) -> Option<SubmissionTicket> {
        self.pending
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(ticket, _)| *ticket)
    }

    /// Forget a reset that has already fired
    pub fn clear_fired(&mut self, ticket: SubmissionTicket) {
        if self.pending.as_ref().map(|(pending, _)| *pending) == Some(ticket) {
            self.pending = None;
        }
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUBMIT_RESET_DELAY;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_exact_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(SUBMIT_RESET_DELAY, tx);
        timer.schedule(SubmissionTicket(1));

        tokio::time::advance(Duration::from_millis(2999)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(timer.pending(), Some(SubmissionTicket(1)));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(TimerEvent::ResetContactForm(SubmissionTicket(1))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(SUBMIT_RESET_DELAY, tx);
        timer.schedule(SubmissionTicket(1));
        tokio::time::advance(Duration::from_millis(1500)).await;
        timer.schedule(SubmissionTicket(2));

        tokio::time::advance(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(rx.recv().await, Some(TimerEvent::ResetContactForm(SubmissionTicket(2))));
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_reset() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(SUBMIT_RESET_DELAY, tx);
        timer.schedule(SubmissionTicket(7));
        drop(timer);

        tokio::time::advance(Duration::from_secs(10)).await;
        // Sender lived inside the aborted task and the timer; both are gone
        assert_eq!(rx.recv().await, None);
    }
}
