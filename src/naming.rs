//! Sprite name generation.

/// Next name in a numbered series, used when duplicating a sprite.
///
/// A trailing run of ASCII digits is incremented. A name without one gets
/// `1` appended.
///
/// # Examples
///
/// ```
/// use pixelpad::naming::next_sprite_name;
///
/// assert_eq!(next_sprite_name("sprite"), "sprite1");
/// assert_eq!(next_sprite_name("sprite9"), "sprite10");
/// ```
pub fn next_sprite_name(name: &str) -> String {
    let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &name[prefix.len()..];

    if digits.is_empty() {
        return format!("{}1", name);
    }

    match digits.parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
        Some(next) => format!("{}{}", prefix, next),
        // Too large to count up
        None => format!("{}1", name),
    }
}
