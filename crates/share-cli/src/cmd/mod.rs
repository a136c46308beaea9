use anyhow::Result;

use crate::args::{Cli, Command};

mod hash;
mod inspect;
mod verify;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Hash { input } => hash::run(&input),
        Command::Inspect { input } => inspect::run(&input),
        Command::Verify { fingerprint, input } => verify::run(&fingerprint, &input),
    }
}
