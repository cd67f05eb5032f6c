mod actuation_outcome;
mod orchestrator;

use crate::{ConsoleConnector, ConsoleSession, LineSource, LogFollower};

use mc_proto::{ProtoError, ProtoResult};

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

// =========================================================================
// Console
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReply {
    Ack,
    Disconnect,
    Fail,
}

/// Records every command sent; broadcasts can be made to fail.
#[derive(Clone)]
pub(crate) struct FakeConsole {
    pub(crate) sent: Arc<Mutex<Vec<String>>>,
    pub(crate) closed: Arc<AtomicBool>,
    refuse: bool,
    drop_broadcasts: bool,
    hang_up_after: Option<usize>,
    stop_reply: StopReply,
}

impl FakeConsole {
    pub(crate) fn new(stop_reply: StopReply) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
            refuse: false,
            drop_broadcasts: false,
            hang_up_after: None,
            stop_reply,
        }
    }

    pub(crate) fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::new(StopReply::Ack)
        }
    }

    pub(crate) fn dropping_broadcasts(mut self) -> Self {
        self.drop_broadcasts = true;
        self
    }

    /// Connection dies after `commands` sends; later sends report a hang-up.
    pub(crate) fn hanging_up_after(mut self, commands: usize) -> Self {
        self.hang_up_after = Some(commands);
        self
    }

    pub(crate) fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, command: &str) -> usize {
        self.sent().iter().filter(|c| *c == command).count()
    }
}

#[async_trait]
impl ConsoleConnector for FakeConsole {
    async fn connect(&self) -> ProtoResult<Box<dyn ConsoleSession>> {
        if self.refuse {
            return Err(ProtoError::from(io::Error::from(
                io::ErrorKind::ConnectionRefused,
            )));
        }
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl ConsoleSession for FakeConsole {
    async fn send(&mut self, command: &str) -> ProtoResult<String> {
        let already_sent = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(command.to_string());
            sent.len() - 1
        };

        if self.hang_up_after.is_some_and(|limit| already_sent >= limit) {
            return Err(ProtoError::closed());
        }

        if command == crate::STOP_COMMAND {
            return match self.stop_reply {
                StopReply::Ack => Ok(String::from("Stopping the server")),
                StopReply::Disconnect => Err(ProtoError::closed()),
                StopReply::Fail => Err(ProtoError::malformed("garbled reply")),
            };
        }

        if self.drop_broadcasts {
            return Err(ProtoError::malformed("dropped"));
        }
        Ok(String::new())
    }

    async fn close(self: Box<Self>) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

// =========================================================================
// Log
// =========================================================================

/// Emits scripted lines at fixed offsets from when it was opened, then
/// either stays silent or reports end of stream. A `None` entry is a read
/// error at that offset.
pub(crate) struct ScriptedLines {
    opened: Instant,
    script: VecDeque<(Duration, Option<String>)>,
    ends: bool,
    terminate_fails: bool,
    terminated: Arc<AtomicBool>,
}

#[async_trait]
impl LineSource for ScriptedLines {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.script.front() {
            Some((at, _)) => {
                tokio::time::sleep_until(self.opened + *at).await;
                match self.script.pop_front() {
                    Some((_, None)) => Err(io::Error::other("scripted read failure")),
                    Some((_, line)) => Ok(line),
                    None => Ok(None),
                }
            }
            None if self.ends => Ok(None),
            None => std::future::pending().await,
        }
    }

    async fn terminate(&mut self) -> io::Result<()> {
        self.terminated.store(true, Ordering::SeqCst);
        if self.terminate_fails {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeLog {
    script: Vec<(Duration, Option<String>)>,
    ends: bool,
    broken: bool,
    terminate_fails: bool,
    pub(crate) follows: Arc<AtomicUsize>,
    pub(crate) terminated: Arc<AtomicBool>,
}

impl FakeLog {
    pub(crate) fn silent() -> Self {
        Self::default()
    }

    pub(crate) fn emitting(lines: &[(u64, &str)]) -> Self {
        Self {
            script: lines
                .iter()
                .map(|(ms, line)| (Duration::from_millis(*ms), Some(line.to_string())))
                .collect(),
            ..Self::default()
        }
    }

    pub(crate) fn ending(mut self) -> Self {
        self.ends = true;
        self
    }

    /// Reads fail at each of the given offsets, between the scripted lines.
    pub(crate) fn failing_reads_at(mut self, offsets_ms: &[u64]) -> Self {
        self.script.extend(
            offsets_ms
                .iter()
                .map(|ms| (Duration::from_millis(*ms), None)),
        );
        self.script.sort_by_key(|(at, _)| *at);
        self
    }

    /// `terminate` is recorded but reports an error.
    pub(crate) fn failing_terminate(mut self) -> Self {
        self.terminate_fails = true;
        self
    }

    pub(crate) fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub(crate) fn follows(&self) -> usize {
        self.follows.load(Ordering::SeqCst)
    }

    pub(crate) fn terminated(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogFollower for FakeLog {
    async fn follow(&self) -> io::Result<Box<dyn LineSource>> {
        self.follows.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(Box::new(ScriptedLines {
            opened: Instant::now(),
            script: self.script.iter().cloned().collect(),
            ends: self.ends,
            terminate_fails: self.terminate_fails,
            terminated: Arc::clone(&self.terminated),
        }))
    }
}
