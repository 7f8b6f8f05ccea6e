use crate::error::Error;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use std::io::Write;

/// Uniform provider output: a context identifier plus a lazy, single-pass
/// sequence of text fragments.
pub struct Response {
    context_id: String,
    fragments: BoxStream<'static, Result<String, Error>>,
}

impl Response {
    pub fn new(context_id: String, fragments: BoxStream<'static, Result<String, Error>>) -> Self {
        Self {
            context_id,
            fragments,
        }
    }

    /// Header line echoing the context identifier; the empty string renders
    /// visibly as `context: ''`.
    pub fn header(&self) -> String {
        format!("context: '{}'", self.context_id)
    }

    /// Emits the header, a blank line, every fragment verbatim in arrival
    /// order, then a trailing newline. Consumes the response; a mid-stream
    /// failure propagates after already-written fragments reached the sink.
    pub async fn write(mut self, sink: &mut (dyn Write + Send)) -> Result<(), Error> {
        write!(sink, "{}\n\n", self.header())?;

        while let Some(fragment) = self.fragments.next().await {
            write!(sink, "{}", fragment?)?;
            sink.flush()?;
        }

        writeln!(sink)?;
        Ok(())
    }
}
