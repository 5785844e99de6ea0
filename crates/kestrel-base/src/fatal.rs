//! Fatal invariant checks.
//!
//! The foundation layer treats a failed check as a programming bug, not an
//! operational error: silent corruption is worse than a crash. There is no
//! recoverable path out of this module — a false condition prints a report
//! to stderr, traps into a debugger when one is attached, and aborts.

use std::fmt;
use std::io::{self, Write};
use std::process;

/// Source location of a failed check, captured by [`call_site!`] at the
/// invocation point. Callers never fill this in by hand.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    pub file: &'static str,
    /// 1-based, as reported by `line!()`.
    pub line: u32,
    /// Full path of the enclosing function, e.g. `sandbox::main`.
    pub function: &'static str,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// One failed-condition report. Built at the call site, handed to
/// [`report_fatal`], and never stored anywhere.
#[derive(Clone, Copy)]
pub struct FatalReport<'a> {
    /// Literal source text of the condition that was expected to hold.
    pub expression: &'a str,
    /// Developer-supplied explanation. `fmt::Arguments` so the failure path
    /// formats without allocating up front.
    pub message: fmt::Arguments<'a>,
    pub site: CallSite,
}

/// Writes the report to stderr, flushes it, breaks into an attached
/// debugger, and aborts the process. Never returns.
///
/// The write is synchronous and goes straight to the stream — it must stay
/// visible even when no logger is installed and the process dies on the
/// next instruction.
#[cold]
#[inline(never)]
pub fn report_fatal(report: &FatalReport<'_>) -> ! {
    {
        let stderr = io::stderr();
        let mut out = stderr.lock();
        // Keep the labeled layout stable; external scrapers key on it.
        let _ = writeln!(out);
        let _ = writeln!(out, "FATAL INVARIANT VIOLATION: {}", report.message);
        let _ = writeln!(out, "  expression: {}", report.expression);
        let _ = writeln!(out, "  file:       {}", report.site.file);
        let _ = writeln!(out, "  line:       {}", report.site.line);
        let _ = writeln!(out, "  function:   {}", report.site.function);
        let _ = out.flush();
    }

    if debugger_attached() {
        debugger_break();
    }

    process::abort();
}

/// True when a native debugger is ptracing this process.
///
/// Only Linux has a dependency-free answer (`TracerPid` in
/// `/proc/self/status`). Elsewhere this reports false and termination
/// proceeds straight to `abort()`, which attached debuggers stop on anyway.
#[cfg(target_os = "linux")]
fn debugger_attached() -> bool {
    let Ok(status) = std::fs::read_to_string("/proc/self/status") else {
        return false;
    };
    for line in status.lines() {
        if let Some(pid) = line.strip_prefix("TracerPid:") {
            return pid.trim() != "0";
        }
    }
    false
}

#[cfg(not(target_os = "linux"))]
fn debugger_attached() -> bool {
    false
}

/// Architecture breakpoint instruction. Reached only when a debugger is
/// attached, so control comes back here and falls through to `abort()`.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn debugger_break() {
    // Safe: int3 only yields control to the tracer; execution resumes after.
    unsafe { core::arch::asm!("int3", options(nomem, nostack)) };
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn debugger_break() {
    // Safe: brk only yields control to the tracer; execution resumes after.
    unsafe { core::arch::asm!("brk #0xf000", options(nomem, nostack)) };
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn debugger_break() {}

/// Extracts the enclosing function path from the type name of a nested
/// helper fn, e.g. `"sandbox::main::f"` -> `"sandbox::main"`.
#[doc(hidden)]
#[inline]
pub fn enclosing_function_name(nested: &'static str) -> &'static str {
    nested.strip_suffix("::f").unwrap_or(nested)
}

/// Captures the current source location: file, 1-based line, and enclosing
/// function path.
///
/// Rust has no stable function-name intrinsic, so the macro declares a
/// helper fn at the expansion point and reads the caller's path out of its
/// type name.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn f() {}
        $crate::fatal::CallSite {
            file: ::core::file!(),
            line: ::core::line!(),
            function: $crate::fatal::enclosing_function_name(
                ::core::any::type_name_of_val(&f),
            ),
        }
    }};
}

/// Always-checked invariant. The condition is evaluated and enforced in
/// every build profile; on failure the process reports and aborts.
#[macro_export]
macro_rules! kestrel_assert {
    ($cond:expr $(,)?) => {
        $crate::kestrel_assert!($cond, "assertion failed")
    };
    ($cond:expr, $($msg:tt)+) => {
        if !($cond) {
            $crate::fatal::report_fatal(&$crate::fatal::FatalReport {
                expression: ::core::stringify!($cond),
                message: ::core::format_args!($($msg)+),
                site: $crate::call_site!(),
            });
        }
    };
}

/// Debug-enforced check whose condition still runs in release builds.
///
/// Release keeps the expression for its side effects and discards the
/// result; only debug builds enforce it. Use [`kestrel_debug_assert!`] when
/// the expression must not run at all in release.
#[macro_export]
macro_rules! kestrel_verify {
    ($cond:expr $(,)?) => {
        $crate::kestrel_verify!($cond, "verify failed")
    };
    ($cond:expr, $($msg:tt)+) => {
        if ::core::cfg!(debug_assertions) {
            if !($cond) {
                $crate::fatal::report_fatal(&$crate::fatal::FatalReport {
                    expression: ::core::stringify!($cond),
                    message: ::core::format_args!($($msg)+),
                    site: $crate::call_site!(),
                });
            }
        } else {
            // Result discarded, side effects kept.
            let _ = $cond;
        }
    };
}

/// Debug-only check. Release builds never evaluate the condition — the
/// whole check folds away, so it must not carry side effects the caller
/// depends on.
#[macro_export]
macro_rules! kestrel_debug_assert {
    ($cond:expr $(,)?) => {
        $crate::kestrel_debug_assert!($cond, "debug assertion failed")
    };
    ($cond:expr, $($msg:tt)+) => {
        if ::core::cfg!(debug_assertions) {
            $crate::kestrel_assert!($cond, $($msg)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_return_control() {
        kestrel_assert!(true);
        kestrel_assert!(1 + 1 == 2, "arithmetic holds");
        kestrel_verify!(true, "verify passes");
        kestrel_debug_assert!(true, "debug assert passes");
    }

    #[test]
    fn verify_condition_runs_exactly_once() {
        let mut calls = 0;
        kestrel_verify!(
            {
                calls += 1;
                calls == 1
            },
            "side effect counted"
        );
        assert_eq!(calls, 1);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn verify_is_unenforced_in_release() {
        let mut evaluated = false;
        kestrel_verify!(
            {
                evaluated = true;
                false
            },
            "must not abort in release"
        );
        assert!(evaluated, "release verify must still run the expression");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn debug_assert_is_not_evaluated_in_release() {
        let mut evaluated = false;
        kestrel_debug_assert!(
            {
                evaluated = true;
                false
            },
            "must be compiled out"
        );
        assert!(!evaluated, "release debug_assert must not run the expression");
    }

    #[test]
    fn call_site_captures_enclosing_function() {
        let site = call_site!();
        assert!(site.file.ends_with("fatal.rs"));
        assert!(site.line > 0);
        assert!(site
            .function
            .ends_with("call_site_captures_enclosing_function"));
    }

    #[test]
    fn enclosing_function_name_strips_helper_suffix() {
        assert_eq!(enclosing_function_name("a::b::f"), "a::b");
        assert_eq!(enclosing_function_name("no_suffix"), "no_suffix");
    }

    #[test]
    fn call_site_display_is_compact() {
        let site = CallSite {
            file: "src/engine.rs",
            line: 42,
            function: "engine::step",
        };
        assert_eq!(site.to_string(), "src/engine.rs:42 (engine::step)");
    }
}
