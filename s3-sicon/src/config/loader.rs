/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Builder;
use crate::types::ShadowMarker;
use crate::Config;

/// Load shadow sync [`Config`] from the environment.
///
/// Credentials and region are resolved through the default `aws-config` provider chain.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Set the metadata marker used to recognize generated shadows.
    ///
    /// Default is `sicon: generated`.
    pub fn marker(mut self, marker: ShadowMarker) -> Self {
        self.builder = self.builder.marker(marker);
        self
    }

    /// Set the key suffix that is always chosen as a group's representative.
    ///
    /// Default is `.html`.
    pub fn preferred_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.builder = self.builder.preferred_suffix(suffix);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let shared_config = aws_config::from_env().load().await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        self.builder.client(s3_client).build()
    }
}
