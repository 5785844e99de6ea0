//! Compile-time platform and build-configuration identity.
//!
//! Pure configuration surface: constants resolved by `cfg` and by the
//! build script, nothing to run at runtime.

/// Operating systems the engine builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }
}

#[cfg(target_os = "windows")]
pub const CURRENT_PLATFORM: Platform = Platform::Windows;
#[cfg(target_os = "linux")]
pub const CURRENT_PLATFORM: Platform = Platform::Linux;
#[cfg(target_os = "macos")]
pub const CURRENT_PLATFORM: Platform = Platform::MacOs;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
compile_error!("kestrel: unsupported platform! Supported: Windows, Linux, macOS");

/// Build profiles the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
        }
    }
}

/// The one build-configuration switch the rest of the engine keys on.
/// `debug_assertions` rather than optimization level: it is what gates the
/// debug-only checks in [`crate::fatal`].
pub const DEBUG_BUILD: bool = cfg!(debug_assertions);

pub const CURRENT_PROFILE: BuildProfile = if DEBUG_BUILD {
    BuildProfile::Debug
} else {
    BuildProfile::Release
};

/// Target triple the crate was compiled for.
pub const TARGET_TRIPLE: &str = env!("KESTREL_TARGET");

/// Cargo profile directory name as the build script saw it. May disagree
/// with [`DEBUG_BUILD`] when a profile overrides `debug-assertions`.
pub const CARGO_PROFILE: &str = env!("KESTREL_PROFILE");

/// `rustc --version` of the building toolchain.
pub const RUSTC_VERSION: &str = env!("KESTREL_RUSTC_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn current_platform_matches_target_os() {
        assert_eq!(CURRENT_PLATFORM, Platform::Linux);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn current_platform_matches_target_os() {
        assert_eq!(CURRENT_PLATFORM, Platform::MacOs);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn current_platform_matches_target_os() {
        assert_eq!(CURRENT_PLATFORM, Platform::Windows);
    }

    #[test]
    fn platform_names_are_stable() {
        assert_eq!(Platform::Windows.name(), "windows");
        assert_eq!(Platform::Linux.name(), "linux");
        assert_eq!(Platform::MacOs.name(), "macos");
    }

    #[test]
    fn profile_constants_agree() {
        if DEBUG_BUILD {
            assert_eq!(CURRENT_PROFILE, BuildProfile::Debug);
        } else {
            assert_eq!(CURRENT_PROFILE, BuildProfile::Release);
        }
        assert!(!CURRENT_PROFILE.name().is_empty());
    }

    #[test]
    fn build_identity_is_captured() {
        assert!(!TARGET_TRIPLE.is_empty());
        assert!(!CARGO_PROFILE.is_empty());
        assert!(RUSTC_VERSION.starts_with("rustc"));
    }
}
