use std::sync::Arc;

use crate::domain::access::errors::AccessError;
use crate::domain::access::model::AccessPassword;
use crate::domain::access::use_cases::authenticate::{AuthenticateParams, AuthenticateUseCase};
use crate::domain::logger::Logger;

pub struct AuthenticateUseCaseImpl {
    pub password: AccessPassword,
    pub logger: Arc<dyn Logger>,
}

impl AuthenticateUseCase for AuthenticateUseCaseImpl {
    fn execute(&self, params: AuthenticateParams) -> Result<(), AccessError> {
        let attempt = match params.password.as_deref() {
            Some(attempt) if !attempt.is_empty() => attempt,
            _ => {
                self.logger.debug("Access attempt without password");
                return Err(AccessError::PasswordMissing);
            }
        };

        if !self.password.matches(attempt) {
            self.logger.warn("Access attempt with incorrect password");
            return Err(AccessError::PasswordIncorrect);
        }

        Ok(())
    }
}
