/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

/// Types for the bucket wide shadow sync operation
pub mod sync_shadows;

/// Container for maintaining context required to carry out a single operation.
///
/// `State` is whatever additional operation specific state is required for the operation.
#[derive(Debug)]
pub(crate) struct OperationContext<State> {
    handle: Arc<crate::client::Handle>,
    state: State,
}

impl<State> OperationContext<State> {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, state: State) -> Self {
        Self { handle, state }
    }

    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }

    /// The client configuration
    pub(crate) fn config(&self) -> &crate::Config {
        &self.handle.config
    }

    /// Operation specific state
    pub(crate) fn state(&self) -> &State {
        &self.state
    }
}
