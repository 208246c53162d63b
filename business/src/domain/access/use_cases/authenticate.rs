use crate::domain::access::errors::AccessError;

pub struct AuthenticateParams {
    pub password: Option<String>,
}

pub trait AuthenticateUseCase: Send + Sync {
    fn execute(&self, params: AuthenticateParams) -> Result<(), AccessError>;
}
