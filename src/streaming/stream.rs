use futures::StreamExt;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::{ClientError, Result};
use crate::streaming::event::{EventAssembler, SseEvent};
use crate::streaming::lines::LineBuffer;

/// Event name the backend sends when the long-running operation behind the
/// stream has finished; the stream stops as soon as it arrives.
pub const DONE_EVENT: &str = "done";

type MessageFn = Box<dyn FnMut(String) + Send>;
type ErrorFn = Box<dyn FnOnce(ClientError) + Send>;
type EndFn = Box<dyn FnOnce() + Send>;

/// Caller hooks for one stream session. All three are optional.
///
/// `on_message` fires once per event with non-empty data, in arrival
/// order. `on_error` fires at most once. `on_end` fires exactly once per
/// session, whatever way the stream terminates — done event, end of
/// stream, transport error, or cancellation.
#[derive(Default)]
pub struct StreamCallbacks {
    on_message: Option<MessageFn>,
    on_error: Option<ErrorFn>,
    on_end: Option<EndFn>,
}

impl StreamCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_message(mut self, f: impl FnMut(String) + Send + 'static) -> Self {
        self.on_message = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(ClientError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    fn message(&mut self, data: String) {
        if let Some(f) = &mut self.on_message {
            f(data);
        }
    }

    fn error(&mut self, err: ClientError) {
        if let Some(f) = self.on_error.take() {
            f(err);
        }
    }

    fn end(&mut self) {
        if let Some(f) = self.on_end.take() {
            f();
        }
    }
}

/// Cancellation handle for an active stream session.
///
/// Returned synchronously, before the connection is necessarily up.
/// `cancel` may be called at any time, from any task, and is a no-op once
/// the session has already terminated.
#[derive(Clone)]
pub struct StreamHandle {
    token: CancellationToken,
}

impl StreamHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Launch one stream session on the current Tokio runtime.
///
/// The session POSTs `body` to `url`, decodes the response as a text
/// event stream and drives the callbacks. Nothing is reported
/// synchronously; every failure, including a failed connect, arrives
/// through `on_error` followed by `on_end`.
pub(crate) fn spawn<B>(
    http: reqwest::Client,
    url: String,
    body: Option<B>,
    mut callbacks: StreamCallbacks,
) -> StreamHandle
where
    B: Serialize + Send + 'static,
{
    let token = CancellationToken::new();
    let session = token.clone();

    tokio::spawn(async move {
        if let Err(err) = read_stream(http, url, body, &mut callbacks, &session).await {
            error!("Stream session failed: {}", err);
            callbacks.error(err);
        }
        // Every terminal path funnels through here exactly once;
        // cancellation lands as Ok and skips the error hook.
        callbacks.end();
    });

    StreamHandle { token }
}

#[derive(PartialEq)]
enum Dispatch {
    Continue,
    Finished,
}

fn dispatch(event: SseEvent, callbacks: &mut StreamCallbacks) -> Dispatch {
    if !event.data.is_empty() {
        debug!(event = %event.event, data = %event.data, "stream event");
        callbacks.message(event.data);
    } else if !event.event.is_empty() {
        debug!(event = %event.event, "stream event without data");
    }

    if event.event == DONE_EVENT {
        Dispatch::Finished
    } else {
        Dispatch::Continue
    }
}

async fn read_stream<B: Serialize>(
    http: reqwest::Client,
    url: String,
    body: Option<B>,
    callbacks: &mut StreamCallbacks,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut request = http.post(&url).header("Content-Type", "application/json");
    if let Some(body) = &body {
        request = request.json(body);
    }

    let response = tokio::select! {
        _ = cancel.cancelled() => return Ok(()),
        resp = request.send() => resp?,
    };

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::Status { status, body });
    }

    let mut chunks = response.bytes_stream();
    let mut lines = LineBuffer::new();
    let mut assembler = EventAssembler::new();

    loop {
        let next = tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            next = chunks.next() => next,
        };

        match next {
            Some(Ok(chunk)) => {
                // Everything this chunk produced is dispatched before the
                // next read, so callback order matches arrival order.
                for line in lines.feed(&chunk) {
                    if let Some(event) = assembler.push(&line)
                        && dispatch(event, callbacks) == Dispatch::Finished
                    {
                        return Ok(());
                    }
                }
            }
            Some(Err(e)) => return Err(ClientError::Http(e)),
            None => {
                // End of stream: a final unterminated line still counts,
                // and an unterminated block is flushed as a last event.
                if let Some(last) = lines.finish()
                    && let Some(event) = assembler.push(&last)
                    && dispatch(event, callbacks) == Dispatch::Finished
                {
                    return Ok(());
                }
                if let Some(event) = assembler.flush() {
                    dispatch(event, callbacks);
                }
                return Ok(());
            }
        }
    }
}
