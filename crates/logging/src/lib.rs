// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # tetrasub's Logging Setup
//!
//! Uses the [`log`] facade with [`env_logger`] writing to stderr.  Only the crates handed to
//! [`Logging::new`] are captured by default, at [`Info`](log::Level::Info) for debug builds and
//! [`Warn`](log::Level::Warn) for release builds.  Setting `RUST_LOG` replaces the default
//! filter entirely:
//!
//! ```sh
//! $> RUST_LOG=tetrasub=debug tetrasub in.xyz out.xyz C C C
//! ```

use log::LevelFilter;

/// Logging configuration for a binary, listing the crates whose logs are shown.
pub struct Logging {
    crates: Vec<&'static str>,
    level: LevelFilter,
}

impl Logging {
    /// Captures logs from `crates` at the build profile's default level.
    pub fn new(crates: Vec<&'static str>) -> Self {
        Self {
            crates,
            level: if cfg!(debug_assertions) {
                LevelFilter::Info
            } else {
                LevelFilter::Warn
            },
        }
    }

    /// The filter that is used when `RUST_LOG` is not set, in `RUST_LOG` syntax.
    pub fn default_filter(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        self.crates
            .iter()
            .map(|name| format!("{}={}", name.replace('-', "_"), level))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Installs the global logger.  Does nothing if a logger is already installed.
    pub fn init(self) {
        let env = env_logger::Env::default().default_filter_or(self.default_filter());
        // A second initialization only happens in tests; the first logger stays in place.
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}


// End of File
