//! Engine version identity, fixed at compile time from the crate manifest.

/// Full semver string, e.g. `"0.1.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MAJOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MAJOR"));
pub const MINOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MINOR"));
pub const PATCH: u32 = parse_component(env!("CARGO_PKG_VERSION_PATCH"));

/// [`encode`]d version of the running engine, for cheap ordered comparison
/// in caches, save headers and plugin handshakes.
pub const ENCODED: u32 = encode(MAJOR, MINOR, PATCH);

/// Packs a version triple into one integer that orders the same way the
/// triple does: `major * 10_000 + minor * 100 + patch`.
#[inline]
pub const fn encode(major: u32, minor: u32, patch: u32) -> u32 {
    major * 10_000 + minor * 100 + patch
}

/// Cargo hands version components over as strings; parse them once, at
/// compile time. Non-numeric components fail the build.
const fn parse_component(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            panic!("version component is not a decimal number");
        }
        value = value * 10 + (b - b'0') as u32;
        i += 1;
    }
    value
}
