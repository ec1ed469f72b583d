//! Output macros shared by every command.
//!
//! Each macro prints a message with a category prefix. When debug mode is on
//! (`POMO_DEBUG` or `RUST_LOG` is set) the text goes to `tracing` instead of
//! stdout/stderr, so it interleaves with the rest of the log.
//!
//! ```text
//! msg_info!(msg) ──▶ is_debug_mode()? ──yes──▶ tracing::info!
//!                                    └─no───▶ println!
//! ```
//!
//! ```rust
//! use pomo::{msg_debug, msg_success};
//! use pomo::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_debug!("tick at {}", 42);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether `POMO_DEBUG` or `RUST_LOG` was set when first checked.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("POMO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $out:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $out!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $out:ident, $prefix:literal, $msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $out!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Plain message. Pass `true` as a second argument to pad with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "✅ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "ℹ️  ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "ℹ️  ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, println, "⚠️  ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, println, "⚠️  ", $msg, true)
    };
}

/// Errors go to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg, true)
    };
}

/// Only emitted in debug mode. Accepts a message or format arguments.
#[macro_export]
macro_rules! msg_debug {
    ($fmt:literal, $($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($fmt, $($arg)+));
        }
    };
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
