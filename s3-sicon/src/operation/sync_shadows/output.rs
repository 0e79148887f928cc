/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{ArbitraryChoice, CopiedShadow};

/// Output type for syncing the shadow objects of a bucket
#[non_exhaustive]
#[derive(Debug)]
pub struct SyncShadowsOutput {
    /// The number of keys returned by the bucket listing
    pub objects_listed: u64,

    /// Shadows that were created or refreshed, in the order they were written
    pub copied: Option<Vec<CopiedShadow>>,

    /// Shadow keys left alone because a real object already lives there
    pub skipped: Option<Vec<String>>,

    /// Groups whose representative was picked by listing order
    pub arbitrary_choices: Option<Vec<ArbitraryChoice>>,
}

impl SyncShadowsOutput {
    /// Creates a new builder-style object to manufacture [`SyncShadowsOutput`](crate::operation::sync_shadows::SyncShadowsOutput).
    pub fn builder() -> SyncShadowsOutputBuilder {
        SyncShadowsOutputBuilder::default()
    }

    /// The number of keys returned by the bucket listing
    pub fn objects_listed(&self) -> u64 {
        self.objects_listed
    }

    /// Shadows that were created or refreshed
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.copied.is_none()`
    pub fn copied(&self) -> &[CopiedShadow] {
        self.copied.as_deref().unwrap_or_default()
    }

    /// Shadow keys left alone because a real object already lives there
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.skipped.is_none()`
    pub fn skipped(&self) -> &[String] {
        self.skipped.as_deref().unwrap_or_default()
    }

    /// Groups whose representative was picked by listing order
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.arbitrary_choices.is_none()`
    pub fn arbitrary_choices(&self) -> &[ArbitraryChoice] {
        self.arbitrary_choices.as_deref().unwrap_or_default()
    }
}

/// A builder for [`SyncShadowsOutput`](crate::operation::sync_shadows::SyncShadowsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct SyncShadowsOutputBuilder {
    pub(crate) objects_listed: u64,
    pub(crate) copied: Option<Vec<CopiedShadow>>,
    pub(crate) skipped: Option<Vec<String>>,
    pub(crate) arbitrary_choices: Option<Vec<ArbitraryChoice>>,
}

impl SyncShadowsOutputBuilder {
    /// The number of keys returned by the bucket listing
    pub fn objects_listed(mut self, input: u64) -> Self {
        self.objects_listed = input;
        self
    }

    /// Append a copied shadow.
    ///
    /// To override the contents of this collection use [`set_copied`](Self::set_copied)
    pub fn copied(mut self, input: CopiedShadow) -> Self {
        self.copied.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Shadows that were created or refreshed
    pub fn set_copied(mut self, input: Option<Vec<CopiedShadow>>) -> Self {
        self.copied = input;
        self
    }

    /// Append a skipped shadow key.
    ///
    /// To override the contents of this collection use [`set_skipped`](Self::set_skipped)
    pub fn skipped(mut self, input: impl Into<String>) -> Self {
        self.skipped.get_or_insert_with(Vec::new).push(input.into());
        self
    }

    /// Shadow keys left alone because a real object already lives there
    pub fn set_skipped(mut self, input: Option<Vec<String>>) -> Self {
        self.skipped = input;
        self
    }

    /// Append an arbitrary choice.
    ///
    /// To override the contents of this collection use
    /// [`set_arbitrary_choices`](Self::set_arbitrary_choices)
    pub fn arbitrary_choices(mut self, input: ArbitraryChoice) -> Self {
        self.arbitrary_choices
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Groups whose representative was picked by listing order
    pub fn set_arbitrary_choices(mut self, input: Option<Vec<ArbitraryChoice>>) -> Self {
        self.arbitrary_choices = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> SyncShadowsOutput {
        SyncShadowsOutput {
            objects_listed: self.objects_listed,
            copied: self.copied,
            skipped: self.skipped,
            arbitrary_choices: self.arbitrary_choices,
        }
    }
}
