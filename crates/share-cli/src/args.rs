use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "share", version, about = "share envelope tooling")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the fingerprint of an envelope.
    Hash {
        /// Envelope file path, or `-` for stdin.
        input: String,
    },

    /// Decode an envelope and print the record's fields.
    Inspect {
        /// Envelope file path, or `-` for stdin.
        input: String,
    },

    /// Recompute an envelope's fingerprint and compare it to an expected
    /// digest. Exits nonzero on mismatch.
    Verify {
        /// Expected fingerprint (64 lowercase hex chars).
        #[arg(long)]
        fingerprint: String,

        /// Envelope file path, or `-` for stdin.
        input: String,
    },
}
