/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for syncing the shadow objects of a bucket
pub use input::{SyncShadowsInput, SyncShadowsInputBuilder};
mod output;
/// Output type for syncing the shadow objects of a bucket
pub use output::{SyncShadowsOutput, SyncShadowsOutputBuilder};

mod list_objects;
mod shadows;
mod worker;

use std::collections::HashSet;
use std::sync::Arc;

use aws_smithy_types::error::operation::BuildError;
use tracing::Instrument;

use crate::error::Error;
use crate::operation::OperationContext;
use crate::types::ArbitraryChoiceListener;

/// Operation struct for syncing the shadow objects of a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct SyncShadows;

impl SyncShadows {
    /// Execute a single `SyncShadows` operation
    ///
    /// Every S3 request is awaited before the next one is sent. The first failure aborts the
    /// run; shadows copied before it are left in place.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: SyncShadowsInput,
    ) -> Result<SyncShadowsOutput, Error> {
        let bucket = input
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "A bucket is required"))?;
        let span = tracing::debug_span!("sync-shadows", bucket = bucket.as_str());
        let state = SyncShadowsState {
            bucket,
            listener: input.arbitrary_choice_listener,
        };
        let ctx = SyncShadowsContext::new(handle, state);
        sync_bucket(ctx).instrument(span).await
    }
}

/// Operation specific state for `SyncShadows`
#[derive(Debug)]
pub(crate) struct SyncShadowsState {
    bucket: String,
    listener: Option<ArbitraryChoiceListener>,
}

pub(crate) type SyncShadowsContext = OperationContext<SyncShadowsState>;

impl SyncShadowsContext {
    /// The bucket being synced
    pub(crate) fn bucket(&self) -> &str {
        &self.state().bucket
    }
}

async fn sync_bucket(ctx: SyncShadowsContext) -> Result<SyncShadowsOutput, Error> {
    let keys = list_objects::list_keys(&ctx).await?;
    let existing: HashSet<&str> = keys.iter().map(String::as_str).collect();
    let groups = shadows::group_keys(
        keys.iter().map(String::as_str),
        ctx.config().preferred_suffix(),
    );
    tracing::debug!("{} keys listed, {} shadow groups", keys.len(), groups.len());

    let mut output = SyncShadowsOutput::builder().objects_listed(keys.len() as u64);

    for choice in groups.iter().filter_map(shadows::Group::arbitrary_choice) {
        tracing::warn!(base = choice.base.as_str(), "{choice}");
        if let Some(listener) = &ctx.state().listener {
            (listener.callback)(&choice);
        }
        output = output.arbitrary_choices(choice);
    }

    for group in &groups {
        output = match worker::sync_shadow(&ctx, group, &existing).await? {
            Some(copied) => output.copied(copied),
            None => output.skipped(group.base()),
        };
    }

    Ok(output.build())
}
