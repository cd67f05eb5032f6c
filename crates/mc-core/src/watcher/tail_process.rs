use crate::watcher::{LineSource, LogFollower};

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};

/// How long `tail` gets to exit after SIGTERM before it is killed.
pub const DEFAULT_TERMINATE_GRACE: Duration = Duration::from_millis(500);

/// Spawns `tail -n 0 -F <path>` per watch.
///
/// `-F` keeps following across the rotation the server does on startup.
#[derive(Debug, Clone)]
pub struct TailFollower {
    path: PathBuf,
    grace: Duration,
}

impl TailFollower {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            grace: DEFAULT_TERMINATE_GRACE,
        }
    }

    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }
}

#[async_trait]
impl LogFollower for TailFollower {
    async fn follow(&self) -> io::Result<Box<dyn LineSource>> {
        let process = TailProcess::spawn(&self.path, self.grace)?;
        Ok(Box::new(process))
    }
}

/// A running `tail` child and its stdout reader.
///
/// `pending` holds a partially read line across cancelled reads.
pub struct TailProcess {
    child: Child,
    stdout: BufReader<ChildStdout>,
    pending: Vec<u8>,
    grace: Duration,
}

impl TailProcess {
    pub fn spawn(path: &Path, grace: Duration) -> io::Result<Self> {
        let mut child = Command::new("tail")
            .arg("-n")
            .arg("0")
            .arg("-F")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("tail stdout was not captured"))?;

        debug!("Following {} (pid {:?})", path.display(), child.id());

        Ok(Self {
            child,
            stdout: BufReader::new(stdout),
            pending: Vec::new(),
            grace,
        })
    }
}

/// Log lines are not guaranteed UTF-8; invalid bytes become U+FFFD so the
/// rest of the line can still match.
pub(crate) fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// SIGTERM `pid`. A process that is already gone counts as signalled.
pub(crate) fn send_sigterm(pid: u32) -> io::Result<()> {
    match kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(io::Error::from(e)),
    }
}

#[async_trait]
impl LineSource for TailProcess {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let read = self.stdout.read_until(b'\n', &mut self.pending).await?;
        if read == 0 && self.pending.is_empty() {
            return Ok(None);
        }

        let line = decode_line(&self.pending);
        self.pending.clear();
        Ok(Some(line))
    }

    async fn terminate(&mut self) -> io::Result<()> {
        if self.child.try_wait()?.is_some() {
            return Ok(());
        }

        if let Some(pid) = self.child.id() {
            send_sigterm(pid)?;
        }

        match tokio::time::timeout(self.grace, self.child.wait()).await {
            Ok(status) => {
                debug!("tail exited: {:?}", status?);
                Ok(())
            }
            Err(_) => {
                warn!(
                    "tail did not exit within {}ms of SIGTERM, killing",
                    self.grace.as_millis()
                );
                self.child.kill().await
            }
        }
    }
}
