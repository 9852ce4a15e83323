use crate::error::{RenderError, Result};

/// Assertions on the raw annotated sample, run before any processing
pub fn check_sample(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(RenderError::InvalidSample(
            "sample contains no code".to_string(),
        ));
    }
    if code.contains('\r') {
        return Err(RenderError::InvalidSample(
            "sample contains carriage returns; normalize line endings to \\n".to_string(),
        ));
    }
    Ok(())
}

/// Fail when diagnostics occurred that the sample did not declare via
/// its `errors` option. `found` pairs each code with its rendered
/// message so the failure can show what actually went wrong.
pub fn check_expected_diagnostics(found: &[(u32, String)], expected: &[u32]) -> Result<()> {
    let unexpected: Vec<&(u32, String)> = found
        .iter()
        .filter(|(code, _)| !expected.contains(code))
        .collect();

    if unexpected.is_empty() {
        return Ok(());
    }

    Err(RenderError::UnexpectedDiagnostics {
        codes: unexpected
            .iter()
            .map(|(code, _)| code.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        details: unexpected
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    })
}
