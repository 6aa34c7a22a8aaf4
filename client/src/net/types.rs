//! Record and user DTOs shared between the UI and the data service.
//!
//! DESIGN
//! ======
//! `Record` mirrors what the data service hands back (service-assigned id and
//! timestamps included). `RecordFields` is the client-writable subset so create
//! and full-replace update carry exactly the same payload shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Opaque record identifier assigned by the data service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Fresh random identifier (UUID v4 string).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A social platform a record can be tagged for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Facebook, Platform::Instagram];

    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
        }
    }
}

/// Platform flags of a record. Each flag is independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformTags {
    #[serde(default)]
    pub twitter: bool,
    #[serde(default)]
    pub facebook: bool,
    #[serde(default)]
    pub instagram: bool,
}

impl PlatformTags {
    pub fn get(self, platform: Platform) -> bool {
        match platform {
            Platform::Twitter => self.twitter,
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
        }
    }

    pub fn set(&mut self, platform: Platform, on: bool) {
        match platform {
            Platform::Twitter => self.twitter = on,
            Platform::Facebook => self.facebook = on,
            Platform::Instagram => self.instagram = on,
        }
    }

    /// Labels of the enabled platforms, in display order.
    pub fn labels(self) -> Vec<&'static str> {
        Platform::ALL.into_iter().filter(|p| self.get(*p)).map(Platform::label).collect()
    }

    pub fn any(self) -> bool {
        Platform::ALL.into_iter().any(|p| self.get(p))
    }
}

/// Client-writable record fields, sent on create and on full-replace update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub title: String,
    pub body: String,
    /// Scheduled publish instant, if any.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[serde(default)]
    pub tags: PlatformTags,
}

/// A task/post record as stored by the data service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Service-assigned identifier; never changes once assigned.
    pub id: RecordId,
    pub title: String,
    pub body: String,
    /// Scheduled publish instant. Checked to be in the future only at submit time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[serde(default)]
    pub tags: PlatformTags,
    /// Creation instant stamped by the service.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last-write instant stamped by the service.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Record {
    /// The editable subset of this record.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            title: self.title.clone(),
            body: self.body.clone(),
            date: self.date,
            tags: self.tags,
        }
    }
}

/// An authenticated user as reported by the authentication provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email, when the provider exposes it.
    #[serde(default)]
    pub email: Option<String>,
}
