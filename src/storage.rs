//! Remembered User
//!
//! "Added by" name kept in browser-local storage across sessions.
//! Convenience only; it is not an authenticated identity.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_username(key: &str) -> Option<String> {
    let value = local_storage()?.get_item(key).ok().flatten()?;
    normalize_username(&value)
}

pub fn save_username(key: &str, username: &str) {
    let Some(name) = normalize_username(username) else { return };
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(key, &name) {
                log::warn!("could not persist username: {:?}", e);
            }
        }
        None => log::warn!("local storage unavailable, username not remembered"),
    }
}

/// Trimmed name, or `None` when blank
fn normalize_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  Priya "), Some("Priya".to_string()));
        assert_eq!(normalize_username("   "), None);
        assert_eq!(normalize_username(""), None);
    }
}
