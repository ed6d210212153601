//! Typed endpoint wrappers over the request client.

use super::client::{ApiClient, ApiError};
use super::models::{
    Campaign, Donation, DonorProfile, ForgotPasswordRequest, LoginRequest, LoginResponse,
    MessageResponse,
};

impl ApiClient {
    pub fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get("/campaigns")
    }

    pub fn get_campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        self.get(&format!("/campaigns/{id}"))
    }

    /// Authenticate and return the session token plus the user record.
    /// Persisting the token is the caller's job.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
    }

    pub fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.post(
            "/auth/forgot-password",
            &ForgotPasswordRequest {
                email: email.to_string(),
            },
        )
    }

    /// Profile of the logged-in donor. Fails with a 401 error when the
    /// stored credential is missing or stale.
    pub fn profile(&self) -> Result<DonorProfile, ApiError> {
        self.get("/users/me")
    }

    pub fn my_donations(&self) -> Result<Vec<Donation>, ApiError> {
        self.get("/donations/mine")
    }
}
