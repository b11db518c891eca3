//! Generated display names of the form `"<prefix> <n>"`.

/// Formats a numbered display name.
#[must_use]
pub fn numbered_name(prefix: &str, number: usize) -> String {
    format!("{prefix} {number}")
}

/// Finds the first free numbered name, probing upwards from `start`.
///
/// `taken` reports whether a name is already used in the target collection.
/// Numbers freed by deletions below `start` are not reused; gaps above it are
/// skipped over by the probe.
pub fn probe_numbered_name(prefix: &str, start: usize, taken: impl Fn(&str) -> bool) -> String {
    let mut number = start.max(1);
    loop {
        let name = numbered_name(prefix, number);
        if !taken(&name) {
            return name;
        }
        number += 1;
    }
}
