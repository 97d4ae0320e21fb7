//! Identifier case conversions used to derive the `PROJECT_NAME_*` variables.
//!
//! The conversions work from the separator structure of the input (`-`, `_`,
//! whitespace) and from ASCII capitals; they do not assume the input is
//! already in any canonical case.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static SEPARATOR_THEN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+(.)?").unwrap());
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static DASH_OR_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());
static UNDERSCORE_OR_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\s]+").unwrap());

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prefixes every ASCII capital with `separator` and lower-cases it.
fn split_capitals(s: &str, separator: char) -> String {
    UPPERCASE
        .replace_all(s, |caps: &Captures| format!("{separator}{}", caps[0].to_lowercase()))
        .into_owned()
}

/// Converts `my-awesome-project` (or `my_awesome project`) to `MyAwesomeProject`.
pub fn to_pascal_case(s: &str) -> String {
    let joined = SEPARATOR_THEN_CHAR.replace_all(s, |caps: &Captures| {
        caps.get(1).map(|c| c.as_str().to_uppercase()).unwrap_or_default()
    });
    upper_first(&joined)
}

/// Converts `my-awesome-project` to `myAwesomeProject`.
pub fn to_camel_case(s: &str) -> String {
    lower_first(&to_pascal_case(s))
}

/// Converts `MyAwesomeProject` or `my-awesome-project` to `my_awesome_project`.
///
/// Existing underscores are kept, so an input mixing a separator with a
/// capital (`my-Awesome`) yields a doubled separator (`my__awesome`).
pub fn to_snake_case(s: &str) -> String {
    let split = split_capitals(s, '_');
    let joined = DASH_OR_SPACE_RUN.replace_all(&split, "_");
    joined.strip_prefix('_').unwrap_or(&joined[..]).to_string()
}

/// Converts `MyAwesomeProject` or `my_awesome_project` to `my-awesome-project`.
pub fn to_kebab_case(s: &str) -> String {
    let split = split_capitals(s, '-');
    let joined = UNDERSCORE_OR_SPACE_RUN.replace_all(&split, "-");
    joined.strip_prefix('-').unwrap_or(&joined[..]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("my-awesome-project"), "MyAwesomeProject");
        assert_eq!(to_pascal_case("my_awesome project"), "MyAwesomeProject");
        assert_eq!(to_pascal_case("button"), "Button");
        assert_eq!(to_pascal_case("ui--kit_"), "UiKit");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("my_awesome_project"), "myAwesomeProject");
        assert_eq!(to_camel_case("my-awesome-project"), "myAwesomeProject");
        assert_eq!(to_camel_case("MyAwesomeProject"), "myAwesomeProject");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("MyAwesomeProject"), "my_awesome_project");
        assert_eq!(to_snake_case("my-awesome-project"), "my_awesome_project");
        assert_eq!(to_snake_case("my  awesome"), "my_awesome");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("MyAwesomeProject"), "my-awesome-project");
        assert_eq!(to_kebab_case("my_awesome_project"), "my-awesome-project");
        assert_eq!(to_kebab_case("my-awesome-project"), "my-awesome-project");
    }

    #[test]
    fn test_internal_capitals_are_rederived() {
        // Capitals always start a new segment, even right after a separator.
        assert_eq!(to_snake_case("my-Awesome"), "my__awesome");
        assert_eq!(to_kebab_case("my_Awesome"), "my--awesome");
        assert_eq!(to_kebab_case("myAwesome-project"), "my-awesome-project");
        assert_eq!(to_pascal_case("myAwesome-project"), "MyAwesomeProject");
        assert_eq!(to_camel_case("My-awesome"), "myAwesome");
    }

    #[test]
    fn test_digits_are_kept() {
        assert_eq!(to_pascal_case("ui-kit-2"), "UiKit2");
        assert_eq!(to_snake_case("ui-kit-2"), "ui_kit_2");
    }
}
