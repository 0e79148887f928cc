/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Simulated HTTP content negotiation for Amazon S3.
//!
//! S3 has no way to serve `index.html` for a request to `index`. This crate
//! works around that by copying one preferred variant of every extensioned key
//! onto its extensionless base name (a "shadow" object). Shadows are tagged
//! with a metadata marker so later runs can refresh them without ever
//! clobbering objects that were uploaded at the base name by hand.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = s3_sicon::from_env().load().await;
//! let client = s3_sicon::Client::new(config);
//! # }
//! ```
//!
//! Bring every shadow in a bucket up to date:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_sicon::error::Error> {
//! let config = s3_sicon::from_env().load().await;
//! let client = s3_sicon::Client::new(config);
//!
//! let output = client
//!     .sync_shadows()
//!     .bucket("my-bucket")
//!     .on_arbitrary_choice(|choice| println!("{choice}"))
//!     .send()
//!     .await?;
//!
//! println!("{} shadows copied", output.copied().len());
//! # Ok(())
//! # }
//! ```

/// Metadata key used to tag generated shadow objects
pub(crate) const DEFAULT_MARKER_KEY: &str = "sicon";

/// Metadata value used to tag generated shadow objects
pub(crate) const DEFAULT_MARKER_VALUE: &str = "generated";

/// Key suffix that wins a group outright
pub(crate) const DEFAULT_PREFERRED_SUFFIX: &str = ".html";

/// Error types emitted by `s3-sicon`
pub mod error;

/// Common types used by `s3-sicon`
pub mod types;

/// Shadow sync client
pub mod client;

/// Shadow sync operations
pub mod operation;

/// Shadow sync configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
