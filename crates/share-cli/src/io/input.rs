use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, Result};

/// Read envelope text from a file path, or from stdin when the argument
/// is `-`.
pub fn read_text(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    read_file(input)
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| anyhow!("failed to read {}: {e}", path.display()))
}
