//! Shared plumbing for the PR comment formatter binaries.
//!
//! Both binaries write markdown to stdout, so logging always goes to stderr.

use std::io::Write;

use anyhow::{Context, Result};

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Write a rendered fragment to `out` exactly as rendered.
pub fn emit(out: &mut impl Write, fragment: &str) -> Result<()> {
    out.write_all(fragment.as_bytes())
        .context("Failed to write comment fragment")?;
    out.flush().context("Failed to flush comment fragment")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_writes_verbatim() {
        let mut buf = Vec::new();
        emit(&mut buf, "**Linux**\n\n").unwrap();
        assert_eq!(buf, b"**Linux**\n\n");
    }

    #[test]
    fn test_emit_empty_fragment() {
        let mut buf = Vec::new();
        emit(&mut buf, "").unwrap();
        assert!(buf.is_empty());
    }
}
