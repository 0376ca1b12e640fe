//! In-place string table rewrite

use log::info;

use super::codec::Profile;

/// Replace every string-table entry equal to `from` with `to`.
///
/// Matching is exact and case-sensitive. Entries keep their index and the
/// table keeps its length, so the indices stored by samples, functions and
/// mappings still point at the same slots. Index 0 gets no special treatment.
///
/// Returns the number of entries changed; zero is not an error.
pub fn rewrite_string_table(profile: &mut Profile, from: &str, to: &str) -> usize {
    let mut replaced = 0;
    for entry in profile.strings_mut().filter(|s| s.as_str() == from) {
        info!("replacing {from} to {to}");
        to.clone_into(entry);
        replaced += 1;
    }
    replaced
}
