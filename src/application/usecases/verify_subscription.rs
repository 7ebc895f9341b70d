use crate::domain::errors::VerificationRejected;

pub struct VerifySubscriptionRequest {
    pub mode: Option<String>,
    pub verify_token: Option<String>,
    pub challenge: Option<String>,
}

pub struct VerifySubscriptionUseCase {
    expected_token: String,
}

impl VerifySubscriptionUseCase {
    pub fn new(expected_token: String) -> Self {
        Self { expected_token }
    }

    /// Returns the challenge to echo back when the mode is set and the token matches.
    pub fn execute(
        &self,
        request: VerifySubscriptionRequest,
    ) -> Result<String, VerificationRejected> {
        let mode_present = request.mode.as_deref().is_some_and(|mode| !mode.is_empty());
        let token_matches = request.verify_token.as_deref() == Some(self.expected_token.as_str());

        if !(mode_present && token_matches) {
            tracing::warn!(
                mode = request.mode.as_deref().unwrap_or_default(),
                "webhook verification rejected"
            );
            return Err(VerificationRejected);
        }

        tracing::info!("webhook verified");
        Ok(request.challenge.unwrap_or_default())
    }
}
