#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    /// Already hashed by the caller
    pub password_hash: String,
    pub interchange: String,
}
