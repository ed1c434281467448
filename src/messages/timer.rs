//! Timer messages - delayed events delivered back to the App layer

use crate::app::contact::SubmissionTicket;

/// Events fired by the timer layer once their delay has passed
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// Time to clear the contact form acknowledgment for this submission
    ResetContactForm(SubmissionTicket),
}
