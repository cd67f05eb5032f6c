#![allow(dead_code)]

use mc_core::{ConsoleConnector, ConsoleSession, LineSource, LogFollower};
use mc_proto::{ProtoError, ProtoResult};

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Console that answers everything and hangs up on `stop`, the way a real
/// server does.
#[derive(Clone, Default)]
pub struct RecordingConsole {
    sent: Arc<Mutex<Vec<String>>>,
    refuse: bool,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConsoleConnector for RecordingConsole {
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
impl ConsoleSession for RecordingConsole {
    async fn send(&mut self, command: &str) -> ProtoResult<String> {
        self.sent.lock().unwrap().push(command.to_string());
        if command == mc_core::STOP_COMMAND {
            return Err(ProtoError::closed());
        }
        Ok(String::new())
    }

    async fn close(self: Box<Self>) {}
}

struct Script {
    opened: Instant,
    lines: VecDeque<(Duration, String)>,
    terminated: Arc<AtomicBool>,
}

#[async_trait]
impl LineSource for Script {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.front() {
            Some((at, _)) => {
                tokio::time::sleep_until(self.opened + *at).await;
                Ok(self.lines.pop_front().map(|(_, line)| line))
            }
            None => std::future::pending().await,
        }
    }

    async fn terminate(&mut self) -> io::Result<()> {
        self.terminated.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Log that writes scripted lines at offsets from the moment it is followed.
#[derive(Clone, Default)]
pub struct ScriptedLog {
    lines: Vec<(Duration, String)>,
    follows: Arc<AtomicUsize>,
    terminated: Arc<AtomicBool>,
}

impl ScriptedLog {
    pub fn new(lines: &[(u64, &str)]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|(secs, line)| (Duration::from_secs(*secs), line.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn follows(&self) -> usize {
        self.follows.load(Ordering::SeqCst)
    }

    pub fn terminated(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogFollower for ScriptedLog {
    async fn follow(&self) -> io::Result<Box<dyn LineSource>> {
        self.follows.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(Script {
            opened: Instant::now(),
            lines: self.lines.iter().cloned().collect(),
            terminated: Arc::clone(&self.terminated),
        }))
    }
}
