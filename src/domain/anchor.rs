//! Anchor location for bootstrap file injection.
//!
//! The injected block goes immediately before the target file's trailing
//! return statement. The scan is bounded to the last few lines on purpose:
//! the terminating statement lives at the end of the file, and a full-file
//! scan could match an unrelated earlier occurrence.

/// Number of trailing lines inspected when locating the anchor.
pub const ANCHOR_WINDOW: usize = 6;

/// Token identifying the anchor line (case-insensitive substring match).
const RETURN_TOKEN: &str = "return";

/// Find the index of the anchor line within the last `window` lines.
///
/// Scans backward from the final line and returns the first line containing
/// `return` (case-insensitive). `None` if no such line exists in the window,
/// even when one exists earlier in the file.
pub fn find_anchor(lines: &[String], window: usize) -> Option<usize> {
    let stop = lines.len().saturating_sub(window);
    (stop..lines.len())
        .rev()
        .find(|&index| lines[index].to_ascii_lowercase().contains(RETURN_TOKEN))
}
