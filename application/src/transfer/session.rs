use kernel::prelude::entity::Role;

pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Absent fields are left untouched.
#[derive(Debug, Default)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub avatar: Option<String>,
}
