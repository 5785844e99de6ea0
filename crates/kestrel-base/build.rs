use std::env;
use std::process::Command;

fn main() {
    let target = env::var("TARGET").expect("TARGET not set");
    let profile = env::var("PROFILE").expect("PROFILE not set");

    println!("cargo:rustc-env=KESTREL_TARGET={target}");
    println!("cargo:rustc-env=KESTREL_PROFILE={profile}");

    // Toolchain identity for startup logs. Best-effort: an exotic rustc
    // wrapper that fails here must not fail the build.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "rustc (unknown)".to_owned());
    println!("cargo:rustc-env=KESTREL_RUSTC_VERSION={version}");

    println!("cargo:rerun-if-env-changed=RUSTC");
}
