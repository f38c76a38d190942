use error_stack::Report;
use tracing::debug;
use uuid::Uuid;

use kernel::interface::query::{
    CartQuery, DependOnCartQuery, DependOnIdentityQuery, DependOnSessionQuery, IdentityQuery,
    SessionQuery,
};
use kernel::interface::storage::DependOnKeyValueStore;
use kernel::interface::update::{
    DependOnIdentityModifier, DependOnSessionModifier, IdentityModifier, SessionModifier,
};
use kernel::prelude::entity::{
    Avatar, CreatedAt, Credential, Email, Identity, IdentityId, SessionToken, UserName,
};
use kernel::KernelError;

use crate::state::{DependOnCartState, DependOnSessionContext};
use crate::transfer::{LoginDto, RegisterDto, UpdateProfileDto};

/// Persists a fresh token with the identity record, activates the identity
/// and loads its cart.
pub(crate) async fn establish<T>(
    module: &T,
    identity: Identity,
) -> error_stack::Result<Identity, KernelError>
where
    T: ?Sized
        + DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnSessionModifier
        + DependOnCartQuery,
{
    let store = module.key_value_store();
    let token = SessionToken::issue();
    module
        .session_modifier()
        .save(store, &token, &identity)
        .await?;
    let cart = module
        .cart_query()
        .find_by_owner(store, identity.id())
        .await?;
    module
        .session_context()
        .replace(Some(identity.clone()))
        .await;
    module.cart_state().replace(Some(cart)).await;
    debug!("Session opened for {}", identity.id().as_ref());
    Ok(identity)
}

#[async_trait::async_trait]
pub trait LoginService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnIdentityQuery
    + DependOnSessionModifier
    + DependOnCartQuery
{
    async fn login(&self, dto: LoginDto) -> error_stack::Result<Identity, KernelError> {
        let operation = async move {
            let email = Email::new(dto.email);
            let identity = self
                .identity_query()
                .find_by_email(self.key_value_store(), &email)
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::Authentication)
                        .attach_printable(format!("`{}` is not registered", email.as_ref()))
                })?;
            if !identity.credential().verify(&dto.password) {
                return Err(Report::new(KernelError::InvalidCredential));
            }
            establish(self, identity).await
        };
        self.session_context().progress().track(operation).await
    }
}

impl<T> LoginService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnIdentityQuery
        + DependOnSessionModifier
        + DependOnCartQuery
{
}

#[async_trait::async_trait]
pub trait RegisterService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnIdentityQuery
    + DependOnIdentityModifier
    + DependOnSessionModifier
    + DependOnCartQuery
{
    async fn register(&self, dto: RegisterDto) -> error_stack::Result<Identity, KernelError> {
        let operation = async move {
            let store = self.key_value_store();
            let email = Email::new(dto.email);
            if self
                .identity_query()
                .find_by_email(store, &email)
                .await?
                .is_some()
            {
                return Err(Report::new(KernelError::DuplicateIdentity)
                    .attach_printable(format!("`{}` is already registered", email.as_ref())));
            }

            let identity = Identity::new(
                IdentityId::new(Uuid::new_v4()),
                UserName::new(dto.username),
                email,
                dto.role,
                Credential::new(dto.password),
                Avatar::generated(),
                CreatedAt::now(),
            );
            self.identity_modifier().create(store, &identity).await?;
            establish(self, identity).await
        };
        self.session_context().progress().track(operation).await
    }
}

impl<T> RegisterService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnIdentityQuery
        + DependOnIdentityModifier
        + DependOnSessionModifier
        + DependOnCartQuery
{
}

#[async_trait::async_trait]
pub trait LogoutService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnSessionModifier
{
    async fn logout(&self) -> error_stack::Result<(), KernelError> {
        let operation = async move {
            self.session_context().replace(None).await;
            self.cart_state().replace(None).await;
            self.session_modifier()
                .clear(self.key_value_store())
                .await
        };
        self.session_context().progress().track(operation).await
    }
}

impl<T> LogoutService for T where
    T: DependOnKeyValueStore + DependOnSessionContext + DependOnCartState + DependOnSessionModifier
{
}

#[async_trait::async_trait]
pub trait RestoreSessionService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnSessionQuery
    + DependOnCartQuery
{
    /// A record that cannot be decoded is dropped without surfacing an error.
    /// A failing store leaves the record in place and fails the restore.
    async fn restore_session(&self) -> error_stack::Result<Option<Identity>, KernelError> {
        let operation = async move {
            let store = self.key_value_store();
            let Some(identity) = self.session_query().find_current(store).await? else {
                return Ok(None);
            };
            let cart = self
                .cart_query()
                .find_by_owner(store, identity.id())
                .await?;
            self.session_context()
                .replace(Some(identity.clone()))
                .await;
            self.cart_state().replace(Some(cart)).await;
            debug!("Session restored for {}", identity.id().as_ref());
            Ok(Some(identity))
        };
        self.session_context().progress().track(operation).await
    }
}

impl<T> RestoreSessionService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnSessionQuery
            + DependOnCartQuery
{
}

#[async_trait::async_trait]
pub trait UpdateProfileService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnIdentityQuery
    + DependOnIdentityModifier
    + DependOnSessionModifier
{
    async fn update_profile(
        &self,
        dto: UpdateProfileDto,
    ) -> error_stack::Result<Identity, KernelError> {
        let operation = async move {
            let store = self.key_value_store();
            let active = self.session_context().require().await?;
            let stored = self
                .identity_query()
                .find_by_id(store, active.id())
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::NotFound)
                        .attach_printable(format!("identity `{}`", active.id().as_ref()))
                })?;

            let mut destruct = stored.into_destruct();
            if let Some(username) = dto.username {
                destruct.username = UserName::new(username);
            }
            if let Some(avatar) = dto.avatar {
                destruct.avatar = Avatar::new(avatar);
            }
            let updated = destruct.freeze();

            self.identity_modifier().update(store, &updated).await?;
            self.session_modifier().refresh(store, &updated).await?;
            self.session_context()
                .replace(Some(updated.clone()))
                .await;
            Ok(updated)
        };
        self.session_context().progress().track(operation).await
    }
}

impl<T> UpdateProfileService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnIdentityQuery
        + DependOnIdentityModifier
        + DependOnSessionModifier
{
}

#[cfg(test)]
mod test {
    use kernel::interface::storage::{KeyValueStore, StorageKey};
    use kernel::prelude::entity::{Quantity, Role};
    use kernel::KernelError;

    use crate::service::{
        AddCartItemService, LoginService, LogoutService, RegisterService, RestoreSessionService,
        UpdateProfileService,
    };
    use crate::state::{DependOnCartState, DependOnSessionContext};
    use crate::test::{book, login_dto, register_dto, FailingStore, TestModule};
    use crate::transfer::{AddCartItemDto, LoginDto, UpdateProfileDto};

    #[tokio::test]
    async fn register_opens_session() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let identity = module.register(register_dto("reader@example.com")).await?;

        assert_eq!(*identity.role(), Role::Customer);
        assert_eq!(module.session_context().current().await, Some(identity.clone()));
        assert!(module.store().read(StorageKey::Token).await?.is_some());
        let users = module.store().read(StorageKey::Users).await?.unwrap();
        assert!(users.contains("reader@example.com"));
        let cart = module.cart_state().view().await.unwrap();
        assert!(cart.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        module.register(register_dto("reader@example.com")).await?;
        let report = module
            .register(register_dto("reader@example.com"))
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::DuplicateIdentity);
        let progress = module.session_context().progress().snapshot().await;
        assert_eq!(progress.error, Some(KernelError::DuplicateIdentity.to_string()));
        assert!(!progress.loading);
        Ok(())
    }

    #[tokio::test]
    async fn login_failures() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let report = module
            .login(login_dto("nobody@example.com"))
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Authentication);

        module.register(register_dto("reader@example.com")).await?;
        module.logout().await?;
        let report = module
            .login(LoginDto {
                email: "reader@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::InvalidCredential);
        assert!(!module.session_context().is_logged_in().await);
        Ok(())
    }

    #[tokio::test]
    async fn login_loads_persisted_cart() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let registered = module.register(register_dto("reader@example.com")).await?;
        module
            .add_item(AddCartItemDto {
                book: book(1, 598),
                quantity: Quantity::parse(2).unwrap(),
            })
            .await?;
        module.logout().await?;
        assert_eq!(module.cart_state().view().await, None);

        let identity = module.login(login_dto("reader@example.com")).await?;
        assert_eq!(identity.id(), registered.id());
        assert_eq!(module.cart_state().total_item_count().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn logout_is_idempotent() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        module.register(register_dto("reader@example.com")).await?;
        module.logout().await?;
        module.logout().await?;

        assert!(!module.session_context().is_logged_in().await);
        assert_eq!(module.store().read(StorageKey::Token).await?, None);
        assert_eq!(module.store().read(StorageKey::CurrentIdentity).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn restore_session_from_storage() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let identity = module.register(register_dto("reader@example.com")).await?;

        let restarted = TestModule::new(module.store().clone());
        let restored = restarted.restore_session().await?;
        assert_eq!(restored, Some(identity.clone()));
        assert_eq!(restarted.session_context().current().await, Some(identity));
        assert!(restarted.cart_state().view().await.is_some());

        let empty = TestModule::in_memory();
        assert_eq!(empty.restore_session().await?, None);
        assert!(!empty.session_context().is_logged_in().await);
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_session_record_is_discarded() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        module
            .store()
            .write(StorageKey::CurrentIdentity, "{\"id\":".to_string())
            .await?;

        assert_eq!(module.restore_session().await?, None);
        assert_eq!(module.store().read(StorageKey::CurrentIdentity).await?, None);
        assert!(!module.session_context().is_logged_in().await);
        let progress = module.session_context().progress().snapshot().await;
        assert_eq!(progress.error, None);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_session_record_is_kept() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(FailingStore::default());
        let identity = module.register(register_dto("reader@example.com")).await?;

        module.store().fail_on(Some(StorageKey::CurrentIdentity)).await;
        let report = module.restore_session().await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Internal);
        let progress = module.session_context().progress().snapshot().await;
        assert_eq!(progress.error, Some(KernelError::Internal.to_string()));
        module.store().fail_on(None).await;

        assert!(module.store().read(StorageKey::Token).await?.is_some());
        assert!(module.store().read(StorageKey::CurrentIdentity).await?.is_some());
        assert_eq!(module.restore_session().await?, Some(identity));
        Ok(())
    }

    #[tokio::test]
    async fn update_profile_rewrites_records() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let report = module
            .update_profile(UpdateProfileDto::default())
            .await
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::NotAuthenticated);

        let identity = module.register(register_dto("reader@example.com")).await?;
        let updated = module
            .update_profile(UpdateProfileDto {
                username: Some("bookworm".to_string()),
                avatar: None,
            })
            .await?;
        assert_eq!(updated.username().as_ref(), "bookworm");
        assert_eq!(updated.avatar(), identity.avatar());
        assert_eq!(module.session_context().current().await, Some(updated.clone()));

        let restarted = TestModule::new(module.store().clone());
        assert_eq!(restarted.restore_session().await?, Some(updated));
        Ok(())
    }
}
