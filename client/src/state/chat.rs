#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use advisor::{ChatSession, QueryError, QueryOutcome, QueryRequest, SessionError, TranscriptView, transcript_view};

/// State for the advisor chat panel, provided as `RwSignal<ChatState>`.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub session: ChatSession,
}

impl ChatState {
    /// Submit the current input. Returns the request to send, or `None` when
    /// the input is blank or a query is already in flight.
    pub fn begin_submit(&mut self) -> Option<QueryRequest> {
        match self.session.submit() {
            Ok(request) => Some(request),
            Err(SessionError::EmptyInput) => None,
            Err(err) => {
                #[cfg(feature = "hydrate")]
                {
                    log::debug!("submit ignored: {err}");
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = err;
                }
                None
            }
        }
    }

    /// Record the result of the outstanding query.
    pub fn finish(&mut self, result: Result<QueryOutcome, QueryError>) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = &result {
                log::warn!("query failed: {err}");
            }
        }
        if let Err(err) = self.session.complete(&result) {
            #[cfg(feature = "hydrate")]
            {
                log::warn!("dropping query result: {err}");
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = err;
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> TranscriptView {
        transcript_view(&self.session)
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.session.is_waiting()
    }
}
