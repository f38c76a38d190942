mod avatar;
mod credential;
mod email;
mod id;
mod name;
mod role;

pub use self::{avatar::*, credential::*, email::*, id::*, name::*, role::*};
use crate::entity::CreatedAt;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, Mutation, References)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    id: IdentityId,
    username: UserName,
    email: Email,
    role: Role,
    credential: Credential,
    avatar: Avatar,
    created_at: CreatedAt<Identity>,
}

impl Identity {
    pub fn new(
        id: IdentityId,
        username: UserName,
        email: Email,
        role: Role,
        credential: Credential,
        avatar: Avatar,
        created_at: CreatedAt<Identity>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            role,
            credential,
            avatar,
            created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::entity::{
        Avatar, CreatedAt, Credential, Email, Identity, IdentityId, Role, UserName,
    };

    #[test]
    fn persisted_record_uses_camel_case_and_lowercase_role() {
        let identity = Identity::new(
            IdentityId::new(Uuid::new_v4()),
            UserName::new("reader"),
            Email::new("reader@example.com"),
            Role::Merchant,
            Credential::new("secret"),
            Avatar::new("https://example.com/a.png"),
            CreatedAt::now(),
        );
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "merchant");
        assert!(json.get("createdAt").is_some());

        let restored: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(restored, identity);
    }
}
