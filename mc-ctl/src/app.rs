//! Wiring from configuration to the restart core, and the text each
//! command prints.

use crate::cli::{CallerArgs, Commands, RestartArgs};
use crate::error::{CtlError, Result as CtlResult};

use mc_config::Config;
use mc_core::{
    AccessPolicy, ArtifactRegistry, LogTailWatcher, RconConnector, RestartMethod,
    RestartOrchestrator, RestartPhase, RestartRequest, ServerActuator, StatusProbe,
    SupervisorCommand, TailFollower, deploy_artifact,
};

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use log::info;
use tokio::sync::watch;

pub(crate) const EXIT_TIMED_OUT: u8 = 2;
pub(crate) const NO_ARTIFACT: &str = "(none)";

/// How a command finished, when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Done,
    Detected,
    TimedOut,
}

impl Outcome {
    pub(crate) fn code(self) -> u8 {
        match self {
            Outcome::Done | Outcome::Detected => 0,
            Outcome::TimedOut => EXIT_TIMED_OUT,
        }
    }

    pub(crate) fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

pub(crate) struct App {
    config: Config,
    orchestrator: RestartOrchestrator,
    status_probe: StatusProbe,
    registry: ArtifactRegistry,
    policy: AccessPolicy,
}

impl App {
    pub(crate) fn new(config: Config) -> Self {
        let console = RconConnector::from_config(&config.rcon);
        let supervisor = SupervisorCommand::systemctl(config.restart.systemd_unit.clone());
        let backend = ServerActuator::new(Arc::new(console), supervisor);
        let watcher = LogTailWatcher::new(Arc::new(TailFollower::new(config.server.log_file())));

        Self {
            orchestrator: RestartOrchestrator::new(Arc::new(backend), watcher),
            status_probe: StatusProbe::default(),
            registry: ArtifactRegistry::new(),
            policy: AccessPolicy::from_config(&config.access),
            config,
        }
    }

    pub(crate) fn tenant(&self, caller: &CallerArgs) -> u64 {
        caller.tenant.or(self.config.access.guild_id).unwrap_or(0)
    }

    #[track_caller]
    pub(crate) fn authorize(&self, caller: &CallerArgs) -> CtlResult<()> {
        if self.policy.is_allowed(caller.roles.as_slice()) {
            Ok(())
        } else {
            Err(CtlError::access_denied())
        }
    }

    pub(crate) async fn run(&self, command: Commands, caller: &CallerArgs) -> CtlResult<Outcome> {
        let tenant = self.tenant(caller);

        match command {
            Commands::Restart(args) => self.restart(&args, tenant).await,
            Commands::Status { host, port } => {
                let host = host.unwrap_or_else(|| self.config.status_host().to_string());
                let port = port.unwrap_or(self.config.server.status_port);
                println!("{}", self.status_probe.query(&host, port).await);
                Ok(Outcome::Done)
            }
            Commands::Deploy { jar, name, restart } => {
                let filename = self.deploy(&jar, name, tenant).await?;
                if !restart {
                    return Ok(Outcome::Done);
                }
                let args = RestartArgs {
                    hint: Some(filename),
                    ..RestartArgs::default()
                };
                self.restart(&args, tenant).await
            }
            Commands::LastMod => {
                println!("{}", self.last_mod_line(tenant).await);
                Ok(Outcome::Done)
            }
            Commands::Shell => {
                println!("Already in the shell.");
                Ok(Outcome::Done)
            }
        }
    }

    pub(crate) async fn last_mod_line(&self, tenant: u64) -> String {
        self.registry
            .last(tenant)
            .await
            .unwrap_or_else(|| String::from(NO_ARTIFACT))
    }

    /// Copy the jar into the mods directory and remember it for the tenant.
    pub(crate) async fn deploy(
        &self,
        jar: &Path,
        name: Option<String>,
        tenant: u64,
    ) -> CtlResult<String> {
        let filename = name.unwrap_or_else(|| {
            jar.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let dest = deploy_artifact(jar, &self.config.server.mods_path(), &filename).await?;
        self.registry.record(tenant, filename.clone()).await;

        println!("Deployed {filename} to {}", dest.display());
        Ok(filename)
    }

    pub(crate) async fn build_request(
        &self,
        args: &RestartArgs,
        tenant: u64,
    ) -> CtlResult<RestartRequest> {
        let hint = match (&args.hint, args.no_hint) {
            (Some(hint), _) => Some(hint.clone()),
            (None, true) => None,
            (None, false) => self.registry.last(tenant).await,
        };

        let restart = &self.config.restart;
        Ok(RestartRequest::new(
            restart.method,
            args.countdown.unwrap_or(restart.countdown_secs),
            args.timeout.unwrap_or(restart.startup_timeout_secs),
            hint,
        )?)
    }

    async fn restart(&self, args: &RestartArgs, tenant: u64) -> CtlResult<Outcome> {
        let request = self.build_request(args, tenant).await?;
        info!(
            "Restart requested for tenant {tenant} via {}",
            request.method()
        );

        if args.no_watch {
            print_actuating(&request, &self.config.restart.systemd_unit);
            self.orchestrator.actuate(&request).await?;
            println!("Restart sent; not watching the log.");
            return Ok(Outcome::Done);
        }

        let (phase_tx, mut phase_rx) = watch::channel(RestartPhase::Idle);
        let printer_request = request.clone();
        let unit = self.config.restart.systemd_unit.clone();
        let printer = tokio::spawn(async move {
            while phase_rx.changed().await.is_ok() {
                let phase = phase_rx.borrow_and_update().clone();
                match &phase {
                    RestartPhase::Actuating => print_actuating(&printer_request, &unit),
                    RestartPhase::Watching { pattern } => println!(
                        "Watching for {pattern} (timeout {}s)...",
                        printer_request.timeout_secs()
                    ),
                    _ => {}
                }
                if phase.is_terminal() {
                    break;
                }
            }
        });

        let result = self
            .orchestrator
            .execute_observed(&request, &phase_tx)
            .await;
        drop(phase_tx);
        let _ = printer.await;

        let watch = result?;
        if watch.detected {
            println!(
                "Server is up: startup detected after {:.1}s.",
                watch.elapsed_secs
            );
            Ok(Outcome::Detected)
        } else {
            println!(
                "Startup not detected within {}s (timeout). Check the server log.",
                request.timeout_secs()
            );
            Ok(Outcome::TimedOut)
        }
    }
}

fn print_actuating(request: &RestartRequest, unit: &str) {
    match request.method() {
        RestartMethod::RemoteConsole => println!(
            "Restart started ({}s countdown, then stop).",
            request.countdown_secs()
        ),
        RestartMethod::LocalSupervisor => println!("Restarting {unit} via systemd..."),
    }
}
