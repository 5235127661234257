// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: Once = Once::new();

/// Directive used when `RUST_LOG` is unset. `-v` gives info, `-vv` debug.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "finsync=warn",
        1 => "finsync=info",
        _ => "finsync=debug",
    }
}

/// Install the stderr subscriber once; later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
