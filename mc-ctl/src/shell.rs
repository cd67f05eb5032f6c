use crate::app::{App, Outcome};
use crate::cli::{CallerArgs, ShellLine};
use crate::error::Result as CtlResult;

use std::io::Write;

use clap::Parser;

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "mc> ";

/// Run commands from stdin until EOF or `exit`. Deployed artifacts are
/// remembered for later `restart` and `last-mod` lines.
pub(crate) async fn run(app: &App, caller: &CallerArgs) -> CtlResult<Outcome> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        match line {
            "" => {}
            "exit" | "quit" => break,
            _ => match ShellLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => match app.run(parsed.command, caller).await {
                    Ok(outcome) => debug!("Shell command finished: {outcome:?}"),
                    Err(e) => eprintln!("Error: {e}"),
                },
                Err(e) => {
                    let _ = e.print();
                }
            },
        }

        prompt();
    }

    Ok(Outcome::Done)
}

fn prompt() {
    print!("{PROMPT}");
    let _ = std::io::stdout().flush();
}
