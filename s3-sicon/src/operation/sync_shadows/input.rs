/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{ArbitraryChoice, ArbitraryChoiceListener};
use aws_smithy_types::error::operation::BuildError;

/// Input type for syncing the shadow objects of a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct SyncShadowsInput {
    /// The bucket name containing the object(s).
    pub bucket: Option<String>,

    /// Called once for every group whose representative was picked by listing order.
    pub arbitrary_choice_listener: Option<ArbitraryChoiceListener>,
}

impl SyncShadowsInput {
    /// Creates a new builder-style object to manufacture [`SyncShadowsInput`](crate::operation::sync_shadows::SyncShadowsInput).
    pub fn builder() -> SyncShadowsInputBuilder {
        SyncShadowsInputBuilder::default()
    }

    /// The bucket name containing the object(s).
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Called once for every group whose representative was picked by listing order.
    pub fn arbitrary_choice_listener(&self) -> Option<&ArbitraryChoiceListener> {
        self.arbitrary_choice_listener.as_ref()
    }
}

/// A builder for [`SyncShadowsInput`](crate::operation::sync_shadows::SyncShadowsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct SyncShadowsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) arbitrary_choice_listener: Option<ArbitraryChoiceListener>,
}

impl SyncShadowsInputBuilder {
    /// Set the bucket name containing the object(s) to shadow.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name containing the object(s) to shadow.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object(s).
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Observe groups with no preferred variant, where the first listed key is chosen.
    pub fn on_arbitrary_choice(
        mut self,
        input: impl Fn(&ArbitraryChoice) + Send + Sync + 'static,
    ) -> Self {
        self.arbitrary_choice_listener = Some(ArbitraryChoiceListener::from(input));
        self
    }

    /// Observe groups with no preferred variant, where the first listed key is chosen.
    pub fn set_arbitrary_choice_listener(mut self, input: Option<ArbitraryChoiceListener>) -> Self {
        self.arbitrary_choice_listener = input;
        self
    }

    /// Observe groups with no preferred variant, where the first listed key is chosen.
    pub fn get_arbitrary_choice_listener(&self) -> &Option<ArbitraryChoiceListener> {
        &self.arbitrary_choice_listener
    }

    /// Consumes the builder and constructs a [`SyncShadowsInput`](crate::operation::sync_shadows::SyncShadowsInput).
    pub fn build(self) -> Result<SyncShadowsInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Result::Ok(SyncShadowsInput {
            bucket: self.bucket,
            arbitrary_choice_listener: self.arbitrary_choice_listener,
        })
    }
}
