//! Narrow seams onto the chat platform. Only the interactive glue uses these;
//! resolution and rendering never touch the platform.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::render::AuthorInfo;

pub const NOT_OWNER_MESSAGE: &str = "❌ 你无法操作这个菜单。";

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("target no longer exists")]
    NotFound,

    #[error("missing permission: {0}")]
    Forbidden(String),

    #[error("{0}")]
    Other(String),
}

/// Reply channel for one user interaction.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Whether the interaction has already been answered or deferred.
    fn is_done(&self) -> bool;

    async fn defer(&self, ephemeral: bool) -> Result<(), PlatformError>;

    async fn send_message(&self, content: &str, ephemeral: bool) -> Result<(), PlatformError>;

    async fn delete_original_response(&self) -> Result<(), PlatformError>;
}

/// Member directory of one server.
#[async_trait]
pub trait MemberLookup: Send + Sync {
    fn cached_member(&self, user_id: u64) -> Option<AuthorInfo>;

    async fn fetch_member(&self, user_id: u64) -> Result<AuthorInfo, PlatformError>;
}

/// Defer the interaction ephemerally unless someone already answered it.
pub async fn safe_defer(responder: &dyn Responder) -> Result<(), PlatformError> {
    if !responder.is_done() {
        responder.defer(true).await?;
    }
    Ok(())
}

/// Delete the original response after `delay`. The user may have dismissed it
/// in the meantime, so a missing message is not an error.
pub async fn safe_delete_original_response(
    responder: &dyn Responder,
    delay: Duration,
) -> Result<(), PlatformError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match responder.delete_original_response().await {
        Err(PlatformError::NotFound) => {
            debug!("original response already gone");
            Ok(())
        }
        other => other,
    }
}

/// Local cache first, then the platform. Members who left resolve to `None`.
pub async fn resolve_member(
    lookup: &dyn MemberLookup,
    user_id: u64,
) -> Result<Option<AuthorInfo>, PlatformError> {
    if let Some(member) = lookup.cached_member(user_id) {
        return Ok(Some(member));
    }

    match lookup.fetch_member(user_id).await {
        Ok(member) => Ok(Some(member)),
        Err(PlatformError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Only the panel's owner may press its buttons; everyone else gets an ephemeral refusal.
pub async fn ensure_owner(
    owner_id: u64,
    user_id: u64,
    responder: &dyn Responder,
) -> Result<bool, PlatformError> {
    if user_id != owner_id {
        responder.send_message(NOT_OWNER_MESSAGE, true).await?;
        return Ok(false);
    }
    Ok(true)
}
