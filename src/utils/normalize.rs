/// Canonical form of a raw form value: surrounding whitespace stripped,
/// letters upper-cased. Never fails; an empty result is left for the
/// length and format checks to reject.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}
