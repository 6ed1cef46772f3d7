//! Local users.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cattle_core::{Collection, NO_INPUT, ResourceClient, Result};
use serde_json::Value;

resource! {
    pub struct User = "user" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        CONDITIONS => conditions: Vec<Value> = "conditions",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        DESCRIPTION => description: String = "description",
        ENABLED => enabled: bool = "enabled",
        LABELS => labels: BTreeMap<String, String> = "labels",
        ME => me: bool = "me",
        MUST_CHANGE_PASSWORD => must_change_password: bool = "mustChangePassword",
        NAME => name: String = "name",
        PASSWORD => password: String = "password",
        PRINCIPAL_IDS => principal_ids: Vec<String> = "principalIds",
        REMOVED => removed: String = "removed",
        STATE => state: String = "state",
        TRANSITIONING => transitioning: String = "transitioning",
        TRANSITIONING_MESSAGE => transitioning_message: String = "transitioningMessage",
        USERNAME => username: String = "username",
        UUID => uuid: String = "uuid",
    }
}

schema! {
    /// Admin-initiated password reset.
    pub struct SetPasswordInput = "setPasswordInput" {
        NEW_PASSWORD => new_password: String = "newPassword",
    }
}

schema! {
    /// Password change by the current user.
    pub struct ChangePasswordInput = "changePasswordInput" {
        CURRENT_PASSWORD => current_password: String = "currentPassword",
        NEW_PASSWORD => new_password: String = "newPassword",
    }
}

#[async_trait]
pub trait UserActions {
    async fn refresh_auth_provider_access(&self, user: &User) -> Result<()>;

    async fn set_password(&self, user: &User, input: &SetPasswordInput) -> Result<User>;

    async fn change_password(
        &self,
        users: &Collection<User>,
        input: &ChangePasswordInput,
    ) -> Result<()>;

    async fn refresh_all_auth_provider_access(&self, users: &Collection<User>) -> Result<()>;
}

#[async_trait]
impl UserActions for ResourceClient<User> {
    async fn refresh_auth_provider_access(&self, user: &User) -> Result<()> {
        self.action_discard(user, "refreshauthprovideraccess", NO_INPUT)
            .await
    }

    async fn set_password(&self, user: &User, input: &SetPasswordInput) -> Result<User> {
        self.action(user, "setpassword", Some(input)).await
    }

    async fn change_password(
        &self,
        users: &Collection<User>,
        input: &ChangePasswordInput,
    ) -> Result<()> {
        self.collection_action_discard(users, "changepassword", Some(input))
            .await
    }

    async fn refresh_all_auth_provider_access(&self, users: &Collection<User>) -> Result<()> {
        self.collection_action_discard(users, "refreshauthprovideraccess", NO_INPUT)
            .await
    }
}
