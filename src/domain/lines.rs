//! Line-level text transforms for bootstrap file patching.
//!
//! All functions are immutable-in/immutable-out so the splice logic stays
//! unit-testable without touching a filesystem. Line terminators are kept
//! attached to their lines, so `join_lines(split_lines(text)) == text`.

/// Split text into lines, preserving line terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Concatenate lines back into a single string.
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

/// Return a new line vector with `block` inserted immediately before `at`.
///
/// All other lines keep their order. `at` must be a valid index into `lines`.
pub fn insert_before(lines: &[String], at: usize, block: &[String]) -> Vec<String> {
    let mut patched = Vec::with_capacity(lines.len() + block.len());
    patched.extend_from_slice(&lines[..at]);
    patched.extend_from_slice(block);
    patched.extend_from_slice(&lines[at..]);
    patched
}

/// Remove the first exact occurrence of `needle` from `text`.
///
/// Returns the text unchanged when `needle` is absent; removing only the
/// first match keeps a double injection from being stripped twice in one
/// call.
pub fn remove_first_occurrence(text: &str, needle: &str) -> String {
    text.replacen(needle, "", 1)
}
