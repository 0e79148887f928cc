/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::ShadowMarker;

/// Config loader
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    marker: ShadowMarker,
    preferred_suffix: String,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the marker used to tag generated shadow objects
    pub fn marker(&self) -> &ShadowMarker {
        &self.marker
    }

    /// Returns the key suffix that is always chosen over its siblings
    pub fn preferred_suffix(&self) -> &str {
        &self.preferred_suffix
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    marker: Option<ShadowMarker>,
    preferred_suffix: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the metadata marker used to recognize generated shadows.
    ///
    /// Changing this between runs makes every existing shadow look like a real object,
    /// and they will no longer be refreshed.
    /// Default is `sicon: generated`.
    pub fn marker(mut self, marker: ShadowMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Set the key suffix that is always chosen as a group's representative.
    ///
    /// Default is `.html`.
    pub fn preferred_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.preferred_suffix = Some(suffix.into());
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// # Panics
    ///
    /// Panics if no S3 client was set.
    pub fn build(self) -> Config {
        Config {
            marker: self.marker.unwrap_or_default(),
            preferred_suffix: self
                .preferred_suffix
                .unwrap_or_else(|| crate::DEFAULT_PREFERRED_SUFFIX.to_owned()),
            client: self.client.expect("client set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_smithy_mocks_experimental::{mock_client, Rule, RuleMode};

    use crate::types::ShadowMarker;

    #[test]
    fn test_defaults() {
        let rules: Vec<Rule> = Vec::new();
        let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &rules);
        let config = super::Config::builder().client(client).build();
        assert_eq!(".html", config.preferred_suffix());
        assert_eq!(&ShadowMarker::new("sicon", "generated"), config.marker());
    }

    #[test]
    fn test_overrides() {
        let rules: Vec<Rule> = Vec::new();
        let client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &rules);
        let config = super::Config::builder()
            .client(client)
            .marker(ShadowMarker::new("shadow", "yes"))
            .preferred_suffix(".htm")
            .build();
        assert_eq!(".htm", config.preferred_suffix());
        assert_eq!("shadow", config.marker().key());
    }
}
