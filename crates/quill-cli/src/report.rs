use anyhow::Result;
use quill_core::QuillError;
use std::io::Write;
use tracing::warn;

/// Turn the outcome of a query into the process result.
///
/// A failed history write still carries the answer; it is written to `out`
/// (unless it was already streamed there) before the error is reported.
pub fn finish<W: Write>(
    result: quill_core::Result<String>,
    printed: bool,
    out: &mut W,
) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e @ QuillError::Write { .. }) => {
            if let (false, Some(answer)) = (printed, e.answer()) {
                writeln!(out, "{answer}")?;
            }
            warn!("answer received but history was not saved");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
