use anyhow::{anyhow, Result};
use serde::Serialize;

use share_core::prelude::*;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct VerifyOut {
    pub ok: bool,
    pub fingerprint: String,
}

pub fn run(expected_hex: &str, input_arg: &str) -> Result<()> {
    let text = input::read_text(input_arg)?;
    let share = Share::from_envelope(&text)?;
    let fingerprint = share.fingerprint()?;

    let ok = fingerprint.eq_ignore_ascii_case(expected_hex.trim());

    if output::is_json() {
        output::print(&VerifyOut {
            ok,
            fingerprint: fingerprint.clone(),
        })?;
    } else {
        output::line(if ok { "ok" } else { "mismatch" });
    }

    if !ok {
        return Err(anyhow!(
            "fingerprint mismatch: expected {expected_hex}, computed {fingerprint}"
        ));
    }
    Ok(())
}
