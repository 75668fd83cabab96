use std::sync::Arc;

use serenity::all::{GuildId, UserId};
use serenity::async_trait;
use serenity::http::{Http, HttpError, StatusCode};

use crate::error::GiveawayError;

/// Read-only guild membership lookups.
///
/// Injected into the manager so termination-time ledger filtering and tests do
/// not depend on a live gateway connection.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// The member's role IDs, or `None` if the user is not in the guild.
    async fn member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<String>>, GiveawayError>;
}

/// [`MemberDirectory`] over serenity's REST client.
pub struct HttpMemberDirectory {
    http: Arc<Http>,
}

impl HttpMemberDirectory {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MemberDirectory for HttpMemberDirectory {
    async fn member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<String>>, GiveawayError> {
        let result = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await;

        match result {
            Ok(member) => Ok(Some(
                member.roles.iter().map(|role| role.get().to_string()).collect(),
            )),
            // Unknown member: the user left the guild.
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code == StatusCode::NOT_FOUND =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
