use std::io;

use async_trait::async_trait;

/// A cancellable producer of log lines with an explicit teardown.
///
/// `next_line` must be cancel safe: the watcher drops it whenever a poll
/// interval elapses and calls it again.
#[async_trait]
pub trait LineSource: Send {
    /// Next appended line. `Ok(None)` means the stream ended.
    async fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Stop producing lines and release the underlying resource.
    async fn terminate(&mut self) -> io::Result<()>;
}

/// Opens a fresh `LineSource` positioned at the current end of a log.
#[async_trait]
pub trait LogFollower: Send + Sync {
    async fn follow(&self) -> io::Result<Box<dyn LineSource>>;
}
