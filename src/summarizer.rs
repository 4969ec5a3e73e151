//! Body summaries for breadcrumbs.
//!
//! A summary is a short, printable excerpt of a message body. The default
//! policy only summarizes error responses (status `>= 400`): the body of a
//! failed call is usually the most useful thing to have in a breadcrumb, the
//! body of a successful one is usually noise or private data.

use std::num::NonZeroUsize;

use crate::message::Message;

/// Appended to summaries cut at the truncation length.
pub const TRUNCATION_SUFFIX: &str = " (truncated...)";

/// Default truncation length, in characters.
pub const DEFAULT_TRUNCATE_AT: usize = 512;

const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::new(DEFAULT_TRUNCATE_AT).unwrap();

/// Turns a message into an optional text summary of its body.
///
/// Implemented for every `Fn(Message<'_>) -> Option<String>`, so a closure is
/// enough to swap in a different policy:
///
/// ```rust
/// use crumbs::{BreadcrumbMiddleware, Message, MemoryHub};
///
/// let middleware = BreadcrumbMiddleware::builder()
///     .summarizer(|msg: Message<'_>| {
///         msg.as_response().map(|resp| format!("{} bytes", resp.body().len()))
///     })
///     .build(MemoryHub::new())
///     .unwrap();
/// ```
pub trait BodySummarizer: Send + Sync + 'static {
    fn summarize(&self, message: Message<'_>) -> Option<String>;
}

impl<F> BodySummarizer for F
where
    F: Fn(Message<'_>) -> Option<String> + Send + Sync + 'static,
{
    fn summarize(&self, message: Message<'_>) -> Option<String> {
        self(message)
    }
}

/// Summarizes error responses, truncated to a fixed number of characters.
///
/// Requests and responses below `400` never get a summary.
#[derive(Clone, Copy, Debug)]
pub struct DefaultSummarizer {
    truncate_at: NonZeroUsize,
}

impl DefaultSummarizer {
    pub fn new(truncate_at: NonZeroUsize) -> Self {
        Self { truncate_at }
    }

    pub fn truncate_at(&self) -> NonZeroUsize {
        self.truncate_at
    }
}

impl Default for DefaultSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl BodySummarizer for DefaultSummarizer {
    fn summarize(&self, message: Message<'_>) -> Option<String> {
        let resp = message.as_response()?;
        if resp.status().as_u16() < 400 {
            return None;
        }
        body_summary(resp.body(), self.truncate_at)
    }
}

/// Returns the first `truncate_at` characters of `body`, suffixed with
/// [`TRUNCATION_SUFFIX`] when anything was cut.
///
/// Returns `None` for empty bodies and for anything that would not read as
/// text: invalid UTF-8 inside the summarized prefix, control characters
/// other than `\n`, `\r` and `\t`, or invisible format and private-use
/// characters. Cuts happen on character boundaries, not word boundaries.
pub fn body_summary(body: &[u8], truncate_at: NonZeroUsize) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    // Invalid bytes past the cut do not matter; invalid bytes before it do.
    let (text, complete) = match std::str::from_utf8(body) {
        Ok(text) => (text, true),
        Err(e) => (std::str::from_utf8(&body[..e.valid_up_to()]).unwrap_or_default(), false),
    };

    let summary = match text.char_indices().nth(truncate_at.get()) {
        Some((cut, _)) => format!("{}{TRUNCATION_SUFFIX}", &text[..cut]),
        None if complete => text.to_owned(),
        None => return None,
    };

    summary.chars().all(is_printable).then_some(summary)
}

fn is_printable(c: char) -> bool {
    if c.is_control() {
        return matches!(c, '\n' | '\r' | '\t');
    }
    !is_format(c) && !is_private_use(c)
}

// Unicode general category Cf: invisible characters that steer layout, such as
// zero-width spaces, bidi overrides and the byte order mark.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{AD}'
            | '\u{600}'..='\u{605}'
            | '\u{61C}'
            | '\u{6DD}'
            | '\u{70F}'
            | '\u{890}'..='\u{891}'
            | '\u{8E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

// Unicode general category Co.
fn is_private_use(c: char) -> bool {
    matches!(c, '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}')
}
