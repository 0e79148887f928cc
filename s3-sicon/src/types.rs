/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;

/// Metadata entry that identifies an object as a generated shadow.
///
/// Only the presence of the key is checked when deciding whether a shadow may be
/// overwritten. The value is what gets written on every copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowMarker {
    key: String,
    value: String,
}

impl ShadowMarker {
    /// Create a new marker from a metadata key and value.
    ///
    /// S3 lower cases user metadata keys, so the key is lower cased here too.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }

    /// The user metadata key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The user metadata value written onto generated shadows
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for ShadowMarker {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MARKER_KEY, crate::DEFAULT_MARKER_VALUE)
    }
}

/// The subset of an object's metadata that survives a shadow copy.
///
/// S3 only lets a copy replace user metadata by replacing *all* metadata, so every
/// system attribute with HTTP semantics has to be carried over explicitly or it
/// is reset to the service default.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectMetadata {
    /// `Cache-Control` header
    pub cache_control: Option<String>,

    /// `Content-Disposition` header
    pub content_disposition: Option<String>,

    /// `Content-Encoding` header
    pub content_encoding: Option<String>,

    /// `Content-Language` header
    pub content_language: Option<String>,

    /// `Content-Type` header
    pub content_type: Option<String>,

    /// `Expires` header
    pub expires: Option<DateTime>,

    /// User defined (`x-amz-meta-*`) metadata
    pub custom: HashMap<String, String>,
}

impl ObjectMetadata {
    /// Returns true if the user metadata carries the given marker
    pub fn has_marker(&self, marker: &ShadowMarker) -> bool {
        self.custom.contains_key(marker.key())
    }

    /// The user metadata to write onto a shadow copied from this object
    pub(crate) fn shadow_metadata(&self, marker: &ShadowMarker) -> HashMap<String, String> {
        let mut metadata = self.custom.clone();
        metadata.insert(marker.key().to_owned(), marker.value().to_owned());
        metadata
    }
}

impl From<&HeadObjectOutput> for ObjectMetadata {
    fn from(value: &HeadObjectOutput) -> Self {
        let expires = value.expires_string().and_then(|raw| {
            match DateTime::from_str(raw, Format::HttpDate) {
                Ok(expires) => Some(expires),
                Err(err) => {
                    tracing::warn!("dropping unparseable Expires value {raw:?}: {err}");
                    None
                }
            }
        });

        ObjectMetadata {
            cache_control: value.cache_control().map(str::to_owned),
            content_disposition: value.content_disposition().map(str::to_owned),
            content_encoding: value.content_encoding().map(str::to_owned),
            content_language: value.content_language().map(str::to_owned),
            content_type: value.content_type().map(str::to_owned),
            expires,
            custom: value.metadata().cloned().unwrap_or_default(),
        }
    }
}

/// A group with no preferred variant whose representative was picked by listing order.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitraryChoice {
    /// The shadow key the group would be copied to
    pub base: String,

    /// Every key in the group, in listing order
    pub candidates: Vec<String>,

    /// The key that was chosen
    pub chosen: String,
}

impl fmt::Display for ArbitraryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "choosing arbitrarily among [{}]", self.candidates.join(", "))
    }
}

/// Callback invoked for each [`ArbitraryChoice`] made while grouping keys
#[derive(Clone)]
pub struct ArbitraryChoiceListener {
    pub(crate) callback: Arc<dyn Fn(&ArbitraryChoice) + Send + Sync + 'static>,
}

impl fmt::Debug for ArbitraryChoiceListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("ArbitraryChoiceListener");
        formatter.field("callback", &"<closure>");
        formatter.finish()
    }
}

impl<F> From<F> for ArbitraryChoiceListener
where
    F: Fn(&ArbitraryChoice) + Send + Sync + 'static,
{
    fn from(value: F) -> Self {
        ArbitraryChoiceListener {
            callback: Arc::new(value),
        }
    }
}

/// A shadow object written by a sync
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedShadow {
    /// The key the shadow was written to
    pub shadow_key: String,

    /// The key whose content and metadata were copied
    pub source_key: String,
}

impl CopiedShadow {
    pub(crate) fn new(shadow_key: impl Into<String>, source_key: impl Into<String>) -> Self {
        Self {
            shadow_key: shadow_key.into(),
            source_key: source_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use aws_sdk_s3::operation::head_object::HeadObjectOutput;
    use aws_smithy_types::DateTime;

    use super::{ArbitraryChoice, ObjectMetadata, ShadowMarker};

    #[test]
    fn test_marker_key_is_lowercased() {
        let marker = ShadowMarker::new("SiCoN", "generated");
        assert_eq!("sicon", marker.key());
        assert_eq!("generated", marker.value());
        assert_eq!(ShadowMarker::default(), ShadowMarker::new("sicon", "generated"));
    }

    #[test]
    fn test_metadata_from_head_object() {
        let output = HeadObjectOutput::builder()
            .content_type("text/html")
            .cache_control("max-age=60")
            .expires_string("Wed, 21 Oct 2015 07:28:00 GMT")
            .metadata("author", "rob")
            .build();

        let meta = ObjectMetadata::from(&output);
        assert_eq!(Some("text/html"), meta.content_type.as_deref());
        assert_eq!(Some("max-age=60"), meta.cache_control.as_deref());
        assert_eq!(None, meta.content_encoding);
        assert_eq!(None, meta.content_disposition);
        assert_eq!(None, meta.content_language);
        assert_eq!(Some(DateTime::from_secs(1445412480)), meta.expires);
        assert_eq!(Some("rob"), meta.custom.get("author").map(String::as_str));
    }

    #[test]
    fn test_unparseable_expires_is_dropped() {
        let output = HeadObjectOutput::builder()
            .expires_string("whenever")
            .build();
        let meta = ObjectMetadata::from(&output);
        assert_eq!(None, meta.expires);
    }

    #[test]
    fn test_shadow_metadata_adds_marker() {
        let marker = ShadowMarker::default();
        let meta = ObjectMetadata {
            custom: HashMap::from([("author".to_owned(), "rob".to_owned())]),
            ..Default::default()
        };
        assert!(!meta.has_marker(&marker));

        let shadow = meta.shadow_metadata(&marker);
        assert_eq!(2, shadow.len());
        assert_eq!(Some("generated"), shadow.get("sicon").map(String::as_str));
        assert_eq!(Some("rob"), shadow.get("author").map(String::as_str));
    }

    #[test]
    fn test_arbitrary_choice_display() {
        let choice = ArbitraryChoice {
            base: "report".to_owned(),
            candidates: vec!["report.csv".to_owned(), "report.json".to_owned()],
            chosen: "report.csv".to_owned(),
        };
        assert_eq!(
            "choosing arbitrarily among [report.csv, report.json]",
            choice.to_string()
        );
    }
}
