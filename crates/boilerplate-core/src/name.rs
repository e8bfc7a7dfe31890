//! Package name validation and normalization

use regex::Regex;
use std::sync::LazyLock;

/// npm package name grammar, with an optional `@scope/` prefix
static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9*~-][a-z0-9*._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$")
        .expect("package name pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static OUTSIDE_ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9~-]+").expect("alphabet pattern is valid"));

/// Check whether `name` is usable as a package name
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Turn arbitrary input into a package name candidate.
///
/// Never fails, but the result can still be empty or hyphen-only, so
/// callers must run it through [`is_valid_package_name`] again.
pub fn to_valid_package_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(&*hyphenated);
    OUTSIDE_ALPHABET.replace_all(stripped, "-").into_owned()
}

/// Clean up the target directory argument: trim whitespace and drop trailing separators
pub fn format_target_dir(raw: &str) -> String {
    raw.trim().trim_end_matches(['/', '\\']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in [
            "my-app",
            "app",
            "a1",
            "~tilde",
            "-dash",
            "with.dot",
            "with_underscore",
            "@scope/pkg",
            "@*weird/pkg.v2",
            "@my-org/my_app",
        ] {
            assert!(is_valid_package_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "",
            "My-App",
            "APP",
            ".hidden",
            "_private",
            "@scope/.pkg",
            "@Scope/pkg",
            "@scope/",
            "has space",
            "slash/inside",
        ] {
            assert!(!is_valid_package_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(to_valid_package_name("  My Cool   App "), "my-cool-app");
        assert_eq!(to_valid_package_name(".hidden"), "hidden");
        assert_eq!(to_valid_package_name("_private"), "private");
        assert_eq!(to_valid_package_name("foo@bar!!baz"), "foo-bar-baz");
        assert_eq!(to_valid_package_name("@scope/pkg"), "-scope-pkg");
        assert_eq!(to_valid_package_name("!!!"), "-");
        assert_eq!(to_valid_package_name("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "My App",
            "..double",
            "_.mixed",
            "a.b_c",
            "Ünïcödé name",
            "@scope/pkg",
            "tabs\tand\nnewlines",
            "already-valid",
        ] {
            let once = to_valid_package_name(raw);
            assert_eq!(to_valid_package_name(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn test_normalized_output_validates() {
        let normalized = to_valid_package_name("My Project 2");
        assert!(is_valid_package_name(&normalized));
    }

    #[test]
    fn test_format_target_dir() {
        assert_eq!(format_target_dir("  my-app/ "), "my-app");
        assert_eq!(format_target_dir("nested/dir///"), "nested/dir");
        assert_eq!(format_target_dir("win\\dir\\"), "win\\dir");
        assert_eq!(format_target_dir("."), ".");
    }
}
