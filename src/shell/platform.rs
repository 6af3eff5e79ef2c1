//! Platform-specific shell detection.

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Shell and flag used to run setup commands.
///
/// Setup recipes are written in POSIX shell syntax, so `/bin/sh` is used
/// regardless of the user's login shell (fish would reject `${VAR:-x}`).
pub fn posix_shell() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd.exe", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }

    #[cfg(unix)]
    #[test]
    fn posix_shell_is_sh() {
        assert_eq!(posix_shell(), ("/bin/sh", "-c"));
    }
}
