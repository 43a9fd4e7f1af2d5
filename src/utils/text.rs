/// Menu paths use `/` as the submenu separator, so preset names show it as `-`.
pub fn menu_display_name(name: &str) -> String {
    name.replace('/', "-")
}

/// Trim a user-entered preset name, rejecting names that are blank.
pub fn normalize_preset_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
