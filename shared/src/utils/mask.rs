//! Email masking for log output

/// Mask an email address for display (e.g., a***e@example.com)
///
/// Only the first and last character of the local part are kept. Values
/// without an `@` are masked entirely except for their first character.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return mask_opaque(email);
    };

    let chars: Vec<char> = local.chars().collect();
    let masked_local = match chars.len() {
        0 => String::new(),
        1 | 2 => format!("{}*", chars[0]),
        n => format!("{}***{}", chars[0], chars[n - 1]),
    };

    format!("{}@{}", masked_local, domain)
}

fn mask_opaque(value: &str) -> String {
    match value.chars().next() {
        Some(first) => format!("{}***", first),
        None => String::new(),
    }
}
