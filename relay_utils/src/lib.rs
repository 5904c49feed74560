mod macros;

/// Version string reported by the CLI and sent in the `User-Agent` header.
pub const fn relay_version() -> &'static str {
    match option_env!("RELAY_VERSION") {
        Some(version) => version,
        None => env!("CARGO_PKG_VERSION"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!relay_version().is_empty());
    }

    #[test]
    fn assert_matches_accepts_matching_values() {
        crate::assert_matches!(Some(42), Some(_));
        crate::assert_matches!(Ok::<_, ()>(7), Ok(x) if *x == 7);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_rejects_other_values() {
        crate::assert_matches!(None::<i32>, Some(_));
    }
}
