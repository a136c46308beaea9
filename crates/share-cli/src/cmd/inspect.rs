use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use termcolor::{Color, ColorSpec, WriteColor};

use share_core::prelude::*;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct InspectOut {
    pub version: String,
    #[serde(rename = "type")]
    pub kind: ShareKind,
    pub tag: String,
    #[serde(rename = "pubKey")]
    pub pub_key: String,
    pub pi: Value,
    /// Absent when the record's schema version has no assembly rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

pub fn run(input_arg: &str) -> Result<()> {
    let text = input::read_text(input_arg)?;
    let share = Share::from_envelope(&text)?;

    let pi = match &share.pi {
        PersonalInformation::Flat(info) => serde_json::to_value(info)?,
        PersonalInformation::Structured(info) => serde_json::to_value(info)?,
    };
    let fingerprint = match share.fingerprint() {
        Ok(digest) => Some(digest),
        Err(ShareError::UnsupportedSchemaVersion(_)) => None,
        Err(e) => return Err(e.into()),
    };

    let out = InspectOut {
        version: share.version,
        kind: share.kind,
        tag: share.tag,
        pub_key: share.pub_key,
        pi,
        fingerprint,
    };

    if output::is_json() {
        return output::print(&out);
    }

    let mut w = output::stdout();
    let mut label = ColorSpec::new();
    label.set_bold(true).set_fg(Some(Color::Cyan));

    let mut field = |name: &str, value: &str| -> Result<()> {
        w.set_color(&label)?;
        write!(w, "{name:<12}")?;
        w.reset()?;
        writeln!(w, "{value}")?;
        Ok(())
    };

    field("version", &out.version)?;
    field(
        "type",
        match out.kind {
            ShareKind::Personal => "personal",
            ShareKind::Alias => "alias",
        },
    )?;
    field("tag", &out.tag)?;
    field("pubKey", &out.pub_key)?;
    field("pi", &serde_json::to_string(&out.pi)?)?;
    match &out.fingerprint {
        Some(digest) => field("fingerprint", digest)?,
        None => field("fingerprint", "(unsupported schema version)")?,
    }
    Ok(())
}
