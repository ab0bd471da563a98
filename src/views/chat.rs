//! State behind the question/answer section of the combined page.

use crate::api::ClientResult;
use crate::model::{ChatTurn, Transcript};
use crate::views::request::{RequestState, RequestTracker, Ticket};

/// Answer recorded when the chat call failed.
pub const ANSWER_ERROR: &str = "Error fetching answer.";

/// Label of the ask button while idle.
pub const ASK_LABEL: &str = "Ask";
/// Label of the ask button while a request is outstanding.
pub const ASK_PENDING_LABEL: &str = "Asking...";

/// A question that was sent and awaits its answer.
#[derive(Clone, Debug)]
pub struct AskTicket {
    ticket: Ticket,
    question: String,
    context: String,
}

impl AskTicket {
    /// Question to send.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Summary the question is asked against.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Question input and transcript.
#[derive(Clone, Debug, Default)]
pub struct ChatView {
    draft: String,
    transcript: Transcript,
    request: RequestTracker,
}

impl ChatView {
    /// Create an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start asking `question` against `summary`.
    ///
    /// Returns `None` (and changes nothing) for a blank question or when there
    /// is no summary to use as context.
    pub fn begin(&mut self, question: &str, summary: &str) -> Option<AskTicket> {
        if question.trim().is_empty() || summary.is_empty() {
            return None;
        }

        self.draft = question.to_string();
        Some(AskTicket {
            ticket: self.request.begin(),
            question: question.to_string(),
            context: summary.to_string(),
        })
    }

    /// Record the outcome of the question asked with `ticket`.
    ///
    /// Appends exactly one turn and clears the input. Failures are recorded
    /// with [`ANSWER_ERROR`] as the answer. Returns `false` for a superseded
    /// ticket.
    pub fn complete(&mut self, ticket: &AskTicket, outcome: ClientResult<String>) -> bool {
        if !self.request.finish(ticket.ticket) {
            tracing::debug!(
                "Dropping stale answer for question #{}",
                ticket.ticket.sequence()
            );
            return false;
        }

        let answer = outcome.unwrap_or_else(|e| {
            if e.is_transport() {
                tracing::warn!("Backend unreachable for question: {e}");
            } else {
                tracing::error!("Unusable chat answer: {e}");
            }
            ANSWER_ERROR.to_string()
        });

        self.transcript.push(ChatTurn::new(ticket.question.clone(), answer));
        self.draft.clear();
        true
    }

    /// Text currently in the question input.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Turns so far, oldest first.
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Request state of the ask control.
    #[must_use]
    pub const fn request_state(&self) -> RequestState {
        self.request.state()
    }

    /// Whether a question is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.request.is_pending()
    }

    /// Label for the ask button.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.request.is_pending() {
            ASK_PENDING_LABEL
        } else {
            ASK_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::ClientError;

    #[test]
    fn test_blank_question_is_a_noop() {
        let mut view = ChatView::new();
        assert!(view.begin("", "summary").is_none());
        assert!(view.begin("   \t\n", "summary").is_none());
        assert!(!view.is_pending());
        assert!(view.transcript().is_empty());
    }

    #[test]
    fn test_no_summary_is_a_noop() {
        let mut view = ChatView::new();
        assert!(view.begin("why?", "").is_none());
        assert!(!view.is_pending());
    }

    #[test]
    fn test_answer_appends_one_turn_and_clears_input() {
        let mut view = ChatView::new();
        let ticket = view.begin("why?", "context").unwrap();
        assert_eq!(ticket.context(), "context");
        assert_eq!(view.draft(), "why?");
        assert_eq!(view.button_label(), ASK_PENDING_LABEL);

        assert!(view.complete(&ticket, Ok("because".to_string())));
        assert_eq!(view.transcript().len(), 1);
        assert_eq!(view.draft(), "");
        assert_eq!(view.button_label(), ASK_LABEL);

        let turn = view.transcript().iter().last().unwrap();
        assert_eq!(turn.question, "why?");
        assert_eq!(turn.answer, "because");
    }

    #[test]
    fn test_failure_records_fallback_answer() {
        let mut view = ChatView::new();
        let ticket = view.begin("why?", "context").unwrap();
        assert!(view.complete(&ticket, Err(ClientError::MissingField("answer"))));
        assert_eq!(view.transcript().iter().last().unwrap().answer, ANSWER_ERROR);
        assert!(!view.is_pending());
    }

    #[test]
    fn test_turns_stay_in_order() {
        let mut view = ChatView::new();
        for (q, a) in [("one", "1"), ("two", "2"), ("one", "1")] {
            let ticket = view.begin(q, "ctx").unwrap();
            view.complete(&ticket, Ok(a.to_string()));
        }
        let answers: Vec<&str> = view.transcript().iter().map(|t| t.answer.as_str()).collect();
        assert_eq!(answers, vec!["1", "2", "1"]);
    }
}
