/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::{
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
};
use aws_smithy_runtime_api::http::Response;

use super::SyncShadowsContext;
use crate::error::Error;

/// Paginator for the `ListObjectsV2` operation that follows continuation tokens until the
/// listing is exhausted.
#[derive(Debug)]
struct ListObjectsPaginator<'a> {
    context: &'a SyncShadowsContext,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { next_token: Option<String> },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            State::Paginating { .. } => State::Done,
            State::Done => self,
        }
    }
}

impl<'a> ListObjectsPaginator<'a> {
    fn new(context: &'a SyncShadowsContext) -> Self {
        Self {
            context,
            state: Some(State::Paginating { next_token: None }),
        }
    }

    fn state(&self) -> &State {
        self.state.as_ref().expect("valid state")
    }

    async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectsV2Output, SdkError<ListObjectsV2Error, Response>>> {
        let next_token = match self.state() {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let list_result = self
            .context
            .client()
            .list_objects_v2()
            .bucket(self.context.bucket())
            .set_continuation_token(next_token)
            .send()
            .await;

        match list_result {
            Ok(output) => {
                let prev_state = self.state.take().expect("state set");
                let next_state = prev_state.next_state(&output);
                self.state.replace(next_state);
                Some(Ok(output))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// List every key in the bucket, in the order S3 returns them.
pub(super) async fn list_keys(context: &SyncShadowsContext) -> Result<Vec<String>, Error> {
    let mut paginator = ListObjectsPaginator::new(context);
    let mut keys = Vec::new();
    while let Some(page) = paginator.next_page().await {
        let page = page?;
        keys.extend(page.contents().iter().filter_map(|obj| obj.key().map(str::to_owned)));
        tracing::trace!("listed page, {} keys so far", keys.len());
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;

    use super::State;

    #[test]
    fn test_next_state() {
        let start = State::Paginating { next_token: None };

        let output1 = list_resp(Some("token1"), true);
        let output2 = list_resp(Some("token2"), true);
        let output3 = list_resp(None, false);

        let state2 = start.next_state(&output1);
        assert_eq!(
            state2,
            State::Paginating {
                next_token: Some("token1".to_owned()),
            }
        );

        let state3 = state2.next_state(&output2);
        assert_eq!(
            state3,
            State::Paginating {
                next_token: Some("token2".to_owned()),
            }
        );

        let state4 = state3.next_state(&output3);
        assert_eq!(state4, State::Done);
        assert_eq!(state4.next_state(&output1), State::Done);
    }

    #[test]
    fn test_truncated_without_token_is_done() {
        let start = State::Paginating { next_token: None };
        let output = list_resp(None, true);
        assert_eq!(start.next_state(&output), State::Done);
    }

    fn list_resp(next_token: Option<&str>, is_truncated: bool) -> ListObjectsV2Output {
        ListObjectsV2Output::builder()
            .set_next_continuation_token(next_token.map(str::to_owned))
            .is_truncated(is_truncated)
            .build()
    }
}
