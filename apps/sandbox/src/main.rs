//! Foundation-layer sandbox: boots logging, prints the build identity and
//! walks the flag algebra and fatal checks. Set `KESTREL_SANDBOX_FAIL=1` to
//! watch a check fail for real.

use log::{info, warn};

use kestrel_base::{
    bitflags, clear_flag, kestrel_assert, kestrel_debug_assert, kestrel_verify, logging, platform,
    set_flag, shared, test_flag, version, Real, Shared,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct WindowFlags: u32 {
        const RESIZABLE  = 1 << 0;
        const DECORATED  = 1 << 1;
        const VSYNC      = 1 << 2;
        const FULLSCREEN = 1 << 3;
    }
}

struct SandboxConfig {
    title: String,
    window_flags: WindowFlags,
    ui_scale: Real,
    fail_on_purpose: bool,
}

impl SandboxConfig {
    fn from_env() -> Self {
        let mut window_flags = WindowFlags::RESIZABLE | WindowFlags::DECORATED | WindowFlags::VSYNC;
        if env_switch("KESTREL_SANDBOX_FULLSCREEN") {
            window_flags = set_flag(window_flags, WindowFlags::FULLSCREEN);
        }
        if env_switch("KESTREL_SANDBOX_NO_VSYNC") {
            window_flags = clear_flag(window_flags, WindowFlags::VSYNC);
        }

        let title = std::env::var("KESTREL_SANDBOX_TITLE")
            .unwrap_or_else(|_| "Kestrel Sandbox".to_owned());
        let ui_scale = std::env::var("KESTREL_SANDBOX_UI_SCALE")
            .ok()
            .and_then(|v| v.parse::<Real>().ok())
            .unwrap_or(1.0);

        Self {
            title,
            window_flags,
            ui_scale,
            fail_on_purpose: env_switch("KESTREL_SANDBOX_FAIL"),
        }
    }
}

fn env_switch(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

fn main() {
    logging::init();

    info!(
        "kestrel {} ({}) on {} [{}]",
        version::VERSION,
        platform::CARGO_PROFILE,
        platform::CURRENT_PLATFORM.name(),
        platform::TARGET_TRIPLE,
    );
    info!("toolchain: {}", platform::RUSTC_VERSION);

    let config: Shared<SandboxConfig> = shared(SandboxConfig::from_env());

    kestrel_assert!(!config.title.is_empty(), "window title must not be empty");
    kestrel_debug_assert!(
        config.ui_scale > 0.0,
        "ui scale must be positive, got {}",
        config.ui_scale
    );

    if test_flag(config.window_flags, WindowFlags::FULLSCREEN) {
        info!("window '{}' starts fullscreen", config.title);
    } else {
        info!("window '{}' starts windowed", config.title);
    }
    if !test_flag(config.window_flags, WindowFlags::VSYNC) {
        warn!("vsync disabled; expect tearing");
    }

    kestrel_verify!(
        log_set_flags(&config) > 0,
        "a fresh sandbox config must carry at least one window flag"
    );

    if config.fail_on_purpose {
        warn!("KESTREL_SANDBOX_FAIL=1: tripping an invariant on purpose");
        kestrel_assert!(false, "deliberate failure requested from the environment");
    }

    info!("sandbox clean exit");
}

fn log_set_flags(config: &SandboxConfig) -> usize {
    let mut set = 0;
    for (name, flag) in [
        ("resizable", WindowFlags::RESIZABLE),
        ("decorated", WindowFlags::DECORATED),
        ("vsync", WindowFlags::VSYNC),
        ("fullscreen", WindowFlags::FULLSCREEN),
    ] {
        if test_flag(config.window_flags, flag) {
            info!("window flag on: {name}");
            set += 1;
        }
    }
    set
}
