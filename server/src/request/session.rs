use application::transfer::{LoginDto, RegisterDto, UpdateProfileDto};
use error_stack::Report;
use kernel::prelude::entity::Role;
use kernel::KernelError;
use serde::Deserialize;

use crate::controller::TryIntake;
use crate::request::require_filled;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    username: Option<String>,
    avatar: Option<String>,
}

pub struct SessionTransformer;

fn email(value: String) -> Result<String, Report<KernelError>> {
    let email = require_filled("email", value)?;
    if !email.contains('@') {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("`{email}` is not an email address")));
    }
    Ok(email)
}

/// Taken verbatim; surrounding whitespace is part of the secret.
fn password(value: String) -> Result<String, Report<KernelError>> {
    if value.is_empty() {
        return Err(
            Report::new(KernelError::Validation).attach_printable("`password` must not be empty")
        );
    }
    Ok(value)
}

impl TryIntake<LoginRequest> for SessionTransformer {
    type To = LoginDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: LoginRequest) -> Result<Self::To, Self::Error> {
        Ok(LoginDto {
            email: email(input.email)?,
            password: password(input.password)?,
        })
    }
}

impl TryIntake<RegisterRequest> for SessionTransformer {
    type To = RegisterDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: RegisterRequest) -> Result<Self::To, Self::Error> {
        let role = match input.role {
            Some(role) => Role::parse(&role)?,
            None => Role::default(),
        };
        Ok(RegisterDto {
            username: require_filled("username", input.username)?,
            email: email(input.email)?,
            password: password(input.password)?,
            role,
        })
    }
}

impl TryIntake<UpdateProfileRequest> for SessionTransformer {
    type To = UpdateProfileDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateProfileRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateProfileDto {
            username: input
                .username
                .map(|username| require_filled("username", username))
                .transpose()?,
            avatar: input
                .avatar
                .map(|avatar| require_filled("avatar", avatar))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::Role;
    use kernel::KernelError;

    use crate::controller::TryIntake;
    use crate::request::{LoginRequest, RegisterRequest, SessionTransformer, UpdateProfileRequest};

    #[test]
    fn register_defaults_to_customer() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"username":" reader ","email":"reader@example.com","password":"secret"}"#,
        )
        .unwrap();
        let dto = SessionTransformer.emit(request).unwrap();
        assert_eq!(dto.role, Role::Customer);
        assert_eq!(dto.username, "reader");
    }

    #[test]
    fn register_rejects_bad_input() {
        for body in [
            r#"{"username":"reader","email":"reader","password":"secret"}"#,
            r#"{"username":"  ","email":"reader@example.com","password":"secret"}"#,
            r#"{"username":"reader","email":"reader@example.com","password":"secret","role":"owner"}"#,
            r#"{"username":"reader","email":"reader@example.com","password":""}"#,
        ] {
            let request: RegisterRequest = serde_json::from_str(body).unwrap();
            let report = SessionTransformer.emit(request).unwrap_err();
            assert_eq!(*report.current_context(), KernelError::Validation);
        }
    }

    #[test]
    fn password_is_kept_verbatim() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"username":"reader","email":"reader@example.com","password":" s3cret "}"#,
        )
        .unwrap();
        assert_eq!(SessionTransformer.emit(request).unwrap().password, " s3cret ");

        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"reader@example.com","password":" s3cret "}"#)
                .unwrap();
        assert_eq!(SessionTransformer.emit(request).unwrap().password, " s3cret ");
    }

    #[test]
    fn profile_patch_keeps_absent_fields_absent() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"avatar":"https://example.com/a.png"}"#).unwrap();
        let dto = SessionTransformer.emit(request).unwrap();
        assert_eq!(dto.username, None);
        assert_eq!(dto.avatar.as_deref(), Some("https://example.com/a.png"));
    }
}
