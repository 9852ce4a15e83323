/// Literal that truncates the visible portion of a sample. The
/// truncated prefix stays in the virtual files, so the analysis engine
/// keeps the full context.
pub const CUT_MARKER: &str = "// ---cut---\n";

/// Index just past the *last* cut marker (including its newline), if
/// the buffer contains one.
#[must_use]
pub fn find_cut(code: &str) -> Option<usize> {
    code.rfind(CUT_MARKER).map(|at| at + CUT_MARKER.len())
}

/// Shift a recorded position left by the cut index.
///
/// Returns `None` for positions that land before the visible code; a
/// position of exactly zero (the first visible byte) is kept. One
/// boundary rule for every record kind.
#[must_use]
pub fn shift_position(position: usize, cut_index: usize) -> Option<usize> {
    position.checked_sub(cut_index)
}
