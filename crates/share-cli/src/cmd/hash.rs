use anyhow::Result;
use serde::Serialize;

use share_core::prelude::*;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct HashOut {
    pub fingerprint: String,
    pub version: String,
}

pub fn run(input_arg: &str) -> Result<()> {
    let text = input::read_text(input_arg)?;
    let share = Share::from_envelope(&text)?;
    let fingerprint = share.fingerprint()?;

    if output::is_json() {
        output::print(&HashOut {
            fingerprint,
            version: share.version,
        })?;
    } else {
        output::line(&fingerprint);
    }
    Ok(())
}
