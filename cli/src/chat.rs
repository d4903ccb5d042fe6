//! Terminal chat loop driving an `advisor::ChatSession`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::io::{BufRead, Write};

use advisor::{ChatSession, Message, QueryRequest, SessionError, WAITING_TEXT};

use crate::CliError;
use crate::backend::QueryClient;
use crate::terminal::format_message;

const QUIT_COMMAND: &str = "/quit";
const PROMPT: &str = "> ";

/// Submit the session's current input, wait for the backend, and record the
/// reply. Backend failures become the fixed bot message, never an `Err`.
///
/// # Errors
///
/// Returns the session's rejection (`EmptyInput`, `RequestInFlight`) without
/// sending anything.
pub async fn exchange(session: &mut ChatSession, client: &QueryClient) -> Result<Message, SessionError> {
    let request = session.submit()?;
    answer(session, client, &request).await
}

async fn answer(
    session: &mut ChatSession,
    client: &QueryClient,
    request: &QueryRequest,
) -> Result<Message, SessionError> {
    let result = client.send(request).await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "query failed");
    }
    session.complete(&result).cloned()
}

/// Ask one question and print the reply to `out`. The waiting line goes to
/// `status`, and only once the query has been accepted.
///
/// # Errors
///
/// Returns [`CliError::EmptyQuery`] for a blank query (nothing is sent or
/// printed) and [`CliError::Io`] if writing fails.
pub async fn run_ask<W, S>(client: &QueryClient, query: &str, out: &mut W, status: &mut S) -> Result<(), CliError>
where
    W: Write,
    S: Write,
{
    let mut session = ChatSession::new();
    session.set_input(query);
    let request = session.submit()?;
    writeln!(status, "{WAITING_TEXT}")?;
    let reply = answer(&mut session, client, &request).await?;
    writeln!(out, "{}", format_message(&reply))?;
    Ok(())
}

/// Read queries line by line until `/quit` or EOF, printing each reply to
/// `out`. The prompt and waiting line go to `status`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading input or writing output fails.
pub async fn run_chat<R, W, S>(client: &QueryClient, input: R, out: &mut W, status: &mut S) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    S: Write,
{
    let mut session = ChatSession::new();
    let mut lines = input.lines();

    loop {
        write!(status, "{PROMPT}")?;
        status.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        session.set_input(line);
        let request = match session.submit() {
            Ok(request) => request,
            Err(SessionError::EmptyInput) => continue,
            Err(err) => return Err(err.into()),
        };

        writeln!(status, "{WAITING_TEXT}")?;
        let reply = answer(&mut session, client, &request).await?;
        writeln!(out, "{}\n", format_message(&reply))?;
    }

    tracing::debug!(messages = session.transcript().len(), "chat session ended");
    Ok(())
}
