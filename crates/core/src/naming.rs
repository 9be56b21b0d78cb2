/// Number of trailing characters kept by [`short_id`].
pub const SHORT_ID_LEN: usize = 4;

/// Human-facing short form of an opaque identifier: the last four characters
/// of the upper-cased id.
///
/// Display only. Never use the result to look anything up.
pub fn short_id(id: &str) -> String {
    let upper = id.to_uppercase();
    let count = upper.chars().count();
    upper.chars().skip(count.saturating_sub(SHORT_ID_LEN)).collect()
}
