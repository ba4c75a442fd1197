//! Build-time configuration
//!
//! The playground root is fixed when the crate is compiled. Set the
//! `PLAYGROUND_ROOT` environment variable during `cargo build` to bake in a
//! different root; otherwise the current directory is used.

/// Root used when no build-time override is supplied
pub const DEFAULT_ROOT: &str = ".";

/// Root baked in at compile time, if any
const BUILD_ROOT: Option<&str> = option_env!("PLAYGROUND_ROOT");

/// Returns the configured playground root
///
/// The value is returned verbatim: no trailing-slash normalization and no
/// existence check.
pub fn build_root() -> &'static str {
    match BUILD_ROOT {
        Some(root) if !root.is_empty() => root,
        _ => DEFAULT_ROOT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_root_is_never_empty() {
        assert!(!build_root().is_empty());
    }

    #[test]
    fn test_build_root_matches_compile_time_value() {
        match option_env!("PLAYGROUND_ROOT") {
            Some(root) if !root.is_empty() => assert_eq!(build_root(), root),
            _ => assert_eq!(build_root(), DEFAULT_ROOT),
        }
    }
}
