#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("access.password_missing")]
    PasswordMissing,
    #[error("access.password_incorrect")]
    PasswordIncorrect,
}
