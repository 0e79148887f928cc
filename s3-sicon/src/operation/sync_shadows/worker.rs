/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashSet;

use aws_sdk_s3::types::MetadataDirective;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::shadows::Group;
use super::SyncShadowsContext;
use crate::error::Error;
use crate::types::{CopiedShadow, ObjectMetadata};

/// Characters left as is in the key portion of `x-amz-copy-source`
const COPY_SOURCE_KEY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Value for the `x-amz-copy-source` header of a copy from `bucket/key`
pub(super) fn copy_source(bucket: &str, key: &str) -> String {
    format!("{bucket}/{}", utf8_percent_encode(key, COPY_SOURCE_KEY))
}

/// Create or refresh the shadow for `group`.
///
/// Returns `None` without touching the bucket if `existing` lists the shadow key and the
/// object there does not carry the marker.
pub(super) async fn sync_shadow(
    ctx: &SyncShadowsContext,
    group: &Group,
    existing: &HashSet<&str>,
) -> Result<Option<CopiedShadow>, Error> {
    let marker = ctx.config().marker();

    if existing.contains(group.base()) {
        let shadow = head_object(ctx, group.base()).await?;
        if !shadow.has_marker(marker) {
            tracing::debug!(
                shadow_key = group.base(),
                "not overwriting object without {} marker",
                marker.key()
            );
            return Ok(None);
        }
    }

    let source = head_object(ctx, group.chosen()).await?;

    ctx.client()
        .copy_object()
        .bucket(ctx.bucket())
        .key(group.base())
        .copy_source(copy_source(ctx.bucket(), group.chosen()))
        .metadata_directive(MetadataDirective::Replace)
        .set_metadata(Some(source.shadow_metadata(marker)))
        .set_cache_control(source.cache_control)
        .set_content_disposition(source.content_disposition)
        .set_content_encoding(source.content_encoding)
        .set_content_language(source.content_language)
        .set_content_type(source.content_type)
        .set_expires(source.expires)
        .send()
        .await?;

    tracing::info!(
        shadow_key = group.base(),
        source_key = group.chosen(),
        "copied shadow"
    );
    Ok(Some(CopiedShadow::new(group.base(), group.chosen())))
}

async fn head_object(ctx: &SyncShadowsContext, key: &str) -> Result<ObjectMetadata, Error> {
    let output = ctx
        .client()
        .head_object()
        .bucket(ctx.bucket())
        .key(key)
        .send()
        .await?;
    Ok(ObjectMetadata::from(&output))
}

#[cfg(test)]
mod tests {
    use super::copy_source;

    #[test]
    fn test_copy_source() {
        assert_eq!("bucket/page.html", copy_source("bucket", "page.html"));
        assert_eq!(
            "bucket/dir/my%20page%2Bv2.html",
            copy_source("bucket", "dir/my page+v2.html")
        );
        assert_eq!("bucket/caf%C3%A9.txt", copy_source("bucket", "café.txt"));
    }
}
