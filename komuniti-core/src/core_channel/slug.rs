//! URL-safe channel id slugs

/// Lowercase `name`, collapsing every run of separator characters into a
/// single dash. Runs at either edge still produce a dash, matching the
/// channel ids the portal has always generated.
fn collapse_to_dash(name: &str, separator: impl Fn(char) -> bool) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_run = false;
    for ch in lower.chars() {
        if separator(ch) {
            if !in_run {
                slug.push('-');
                in_run = true;
            }
        } else {
            slug.push(ch);
            in_run = false;
        }
    }
    slug
}

/// Slug for club names: whitespace runs become single dashes.
pub fn club_slug(name: &str) -> String {
    collapse_to_dash(name, char::is_whitespace)
}

/// Slug for event names: colons count as separators too, so
/// "Hackathon: Hacktopus" becomes "hackathon-hacktopus".
pub fn event_slug(name: &str) -> String {
    collapse_to_dash(name, |ch| ch.is_whitespace() || ch == ':')
}
