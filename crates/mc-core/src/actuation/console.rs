use mc_config::RconConfig;
use mc_proto::{ProtoResult, RconClient};

use std::time::Duration;

use async_trait::async_trait;

/// Opens authenticated console sessions.
#[async_trait]
pub trait ConsoleConnector: Send + Sync {
    async fn connect(&self) -> ProtoResult<Box<dyn ConsoleSession>>;
}

/// One open console session.
#[async_trait]
pub trait ConsoleSession: Send {
    /// Run a console command and return its reply text.
    async fn send(&mut self, command: &str) -> ProtoResult<String>;

    async fn close(self: Box<Self>);
}

#[async_trait]
impl ConsoleSession for RconClient {
    async fn send(&mut self, command: &str) -> ProtoResult<String> {
        self.command(command).await
    }

    async fn close(self: Box<Self>) {
        RconClient::close(*self).await;
    }
}

/// Connects to the server's RCON port.
#[derive(Clone)]
pub struct RconConnector {
    host: String,
    port: u16,
    password: String,
    io_timeout: Duration,
}

impl RconConnector {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        password: impl Into<String>,
        io_timeout: Duration,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            password: password.into(),
            io_timeout,
        }
    }

    pub fn from_config(config: &RconConfig) -> Self {
        Self::new(
            config.host.clone(),
            config.port,
            config.password().unwrap_or_default(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl ConsoleConnector for RconConnector {
    async fn connect(&self) -> ProtoResult<Box<dyn ConsoleSession>> {
        let client =
            RconClient::connect(&self.host, self.port, &self.password, self.io_timeout).await?;
        Ok(Box::new(client))
    }
}

