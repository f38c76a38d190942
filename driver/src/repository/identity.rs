use error_stack::Report;
use kernel::interface::query::IdentityQuery;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::interface::update::IdentityModifier;
use kernel::prelude::entity::{Email, Identity, IdentityId};
use kernel::KernelError;

use crate::repository::BlobInternal;

/// Registered identities, kept as one JSON array under `users`.
pub struct StoredIdentityRepository;

#[async_trait::async_trait]
impl IdentityQuery for StoredIdentityRepository {
    async fn find_by_id<S: KeyValueStore>(
        &self,
        store: &S,
        id: &IdentityId,
    ) -> error_stack::Result<Option<Identity>, KernelError> {
        let users = IdentityInternal::all(store).await?;
        Ok(users.into_iter().find(|user| user.id() == id))
    }

    async fn find_by_email<S: KeyValueStore>(
        &self,
        store: &S,
        email: &Email,
    ) -> error_stack::Result<Option<Identity>, KernelError> {
        let users = IdentityInternal::all(store).await?;
        Ok(users.into_iter().find(|user| user.email() == email))
    }
}

#[async_trait::async_trait]
impl IdentityModifier for StoredIdentityRepository {
    #[tracing::instrument(skip_all, fields(id = %identity.id().as_ref()))]
    async fn create<S: KeyValueStore>(
        &self,
        store: &S,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError> {
        let mut users = IdentityInternal::all(store).await?;
        if users.iter().any(|user| user.email() == identity.email()) {
            return Err(Report::new(KernelError::DuplicateIdentity)
                .attach_printable(format!("`{}` is already registered", identity.email().as_ref())));
        }
        users.push(identity.clone());
        BlobInternal::save(store, StorageKey::Users, &users).await
    }

    #[tracing::instrument(skip_all, fields(id = %identity.id().as_ref()))]
    async fn update<S: KeyValueStore>(
        &self,
        store: &S,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError> {
        let mut users = IdentityInternal::all(store).await?;
        let Some(stored) = users.iter_mut().find(|user| user.id() == identity.id()) else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("identity `{}` is not registered", identity.id().as_ref())));
        };
        *stored = identity.clone();
        BlobInternal::save(store, StorageKey::Users, &users).await
    }
}

pub(in crate::repository) struct IdentityInternal;

impl IdentityInternal {
    async fn all<S: KeyValueStore>(store: &S) -> error_stack::Result<Vec<Identity>, KernelError> {
        BlobInternal::load(store, StorageKey::Users).await
    }
}

#[cfg(test)]
pub(crate) mod test {
    use kernel::interface::query::IdentityQuery;
    use kernel::interface::update::IdentityModifier;
    use kernel::prelude::entity::{
        Avatar, CreatedAt, Credential, Email, Identity, IdentityId, Role, UserName,
    };
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::database::InMemoryStore;
    use crate::repository::StoredIdentityRepository;

    pub(crate) fn identity(email: &str) -> Identity {
        Identity::new(
            IdentityId::new(Uuid::new_v4()),
            UserName::new("reader"),
            Email::new(email),
            Role::Customer,
            Credential::new("secret"),
            Avatar::generated(),
            CreatedAt::now(),
        )
    }

    #[tokio::test]
    async fn find_by_id_and_email() -> error_stack::Result<(), KernelError> {
        let store = InMemoryStore::new();
        let user = identity("reader@example.com");
        StoredIdentityRepository.create(&store, &user).await?;

        let found = StoredIdentityRepository.find_by_id(&store, user.id()).await?;
        assert_eq!(found, Some(user.clone()));
        let found = StoredIdentityRepository
            .find_by_email(&store, &Email::new("reader@example.com"))
            .await?;
        assert_eq!(found, Some(user));
        let missing = StoredIdentityRepository
            .find_by_email(&store, &Email::new("nobody@example.com"))
            .await?;
        assert_eq!(missing, None);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> error_stack::Result<(), KernelError> {
        let store = InMemoryStore::new();
        StoredIdentityRepository
            .create(&store, &identity("reader@example.com"))
            .await?;
        let report = StoredIdentityRepository
            .create(&store, &identity("reader@example.com"))
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::DuplicateIdentity);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_record() -> error_stack::Result<(), KernelError> {
        let store = InMemoryStore::new();
        let user = identity("reader@example.com");
        StoredIdentityRepository.create(&store, &user).await?;

        let renamed = user.clone().reconstruct(|user| {
            user.username = UserName::new("renamed");
        });
        StoredIdentityRepository.update(&store, &renamed).await?;
        let found = StoredIdentityRepository.find_by_id(&store, user.id()).await?;
        assert_eq!(found, Some(renamed));

        let stranger = identity("stranger@example.com");
        let report = StoredIdentityRepository
            .update(&store, &stranger)
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::NotFound);
        Ok(())
    }
}
