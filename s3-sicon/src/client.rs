/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::sync_shadows::builders::SyncShadowsFluentBuilder;
use crate::Config;
use std::sync::Arc;

/// Shadow sync client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a shadow sync config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Bring every shadow object in a bucket up to date.
    ///
    /// Constructs a fluent builder for the
    /// [`SyncShadows`](crate::operation::sync_shadows::builders::SyncShadowsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn sync_bucket(client: &s3_sicon::Client) -> Result<(), s3_sicon::error::Error> {
    ///     let output = client.sync_shadows()
    ///         .bucket("my-bucket")
    ///         .send()
    ///         .await?;
    ///
    ///     for copied in output.copied() {
    ///         println!("{} <- {}", copied.shadow_key, copied.source_key);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn sync_shadows(&self) -> SyncShadowsFluentBuilder {
        SyncShadowsFluentBuilder::new(self.handle.clone())
    }
}
