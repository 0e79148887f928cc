/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::Error;
use crate::types::{ArbitraryChoice, ArbitraryChoiceListener};
use std::sync::Arc;

use super::{SyncShadowsInputBuilder, SyncShadowsOutput};

/// Fluent builder for constructing a bucket wide shadow sync
#[derive(Debug)]
pub struct SyncShadowsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: SyncShadowsInputBuilder,
}

impl SyncShadowsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the bucket and copy or refresh every shadow object
    pub async fn send(self) -> Result<SyncShadowsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::sync_shadows::SyncShadows::orchestrate(self.handle, input).await
    }

    /// Set the bucket name containing the object(s) to shadow.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name containing the object(s) to shadow.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name containing the object(s).
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Observe groups with no preferred variant, where the first listed key is chosen.
    pub fn on_arbitrary_choice(
        mut self,
        input: impl Fn(&ArbitraryChoice) + Send + Sync + 'static,
    ) -> Self {
        self.inner = self.inner.on_arbitrary_choice(input);
        self
    }

    /// Observe groups with no preferred variant, where the first listed key is chosen.
    pub fn set_arbitrary_choice_listener(mut self, input: Option<ArbitraryChoiceListener>) -> Self {
        self.inner = self.inner.set_arbitrary_choice_listener(input);
        self
    }

    /// Observe groups with no preferred variant, where the first listed key is chosen.
    pub fn get_arbitrary_choice_listener(&self) -> &Option<ArbitraryChoiceListener> {
        self.inner.get_arbitrary_choice_listener()
    }
}

impl crate::operation::sync_shadows::input::SyncShadowsInputBuilder {
    /// Sync the shadow objects of a bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<SyncShadowsOutput, Error> {
        let mut fluent_builder = client.sync_shadows();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
