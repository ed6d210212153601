use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fundraising campaign as the backend returns it: camelCase fields,
/// Mongo-style `_id`. Most fields are optional on the wire, so everything
/// beyond the identifier and title defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Campaign {
    pub fn percent_funded(&self) -> f64 {
        if self.goal_amount <= 0.0 {
            return 0.0;
        }
        (self.raised_amount / self.goal_amount) * 100.0
    }

    /// Shareable link into the web frontend, built from the separately
    /// configured share base URL.
    pub fn share_url(&self, share_base: &str) -> String {
        format!("{}/campaigns/{}", share_base.trim_end_matches('/'), self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl DonorProfile {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Campaign reference embedded in a donation when the backend populates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationCampaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub campaign: Option<DonationCampaign>,
    pub amount: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: DonorProfile,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Message-only replies (`forgot-password`, logout acknowledgements).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_campaign_deserializes_minimal_shape() {
        let campaign: Campaign = serde_json::from_value(json!({
            "_id": "1",
            "title": "Help"
        }))
        .unwrap();
        assert_eq!(campaign.id, "1");
        assert_eq!(campaign.title, "Help");
        assert!(campaign.is_active);
        assert_eq!(campaign.goal_amount, 0.0);
    }

    #[test]
    fn test_campaign_deserializes_camel_case_fields() {
        let campaign: Campaign = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "Clean Water",
            "category": "health",
            "goalAmount": 5000.0,
            "raisedAmount": 1250.0,
            "isActive": false
        }))
        .unwrap();
        assert_eq!(campaign.category.as_deref(), Some("health"));
        assert_eq!(campaign.goal_amount, 5000.0);
        assert!(!campaign.is_active);
        assert_eq!(campaign.percent_funded(), 25.0);
    }

    #[test]
    fn test_percent_funded_handles_zero_goal() {
        let campaign: Campaign = serde_json::from_value(json!({
            "_id": "1",
            "title": "Help"
        }))
        .unwrap();
        assert_eq!(campaign.percent_funded(), 0.0);
    }

    #[test]
    fn test_share_url_strips_trailing_slash() {
        let campaign: Campaign = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "Help"
        }))
        .unwrap();
        assert_eq!(
            campaign.share_url("https://give.example.org/"),
            "https://give.example.org/campaigns/abc123"
        );
    }

    #[test]
    fn test_admin_role_detection() {
        let admin: DonorProfile = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Jo",
            "email": "jo@example.org",
            "role": "admin"
        }))
        .unwrap();
        assert!(admin.is_admin());

        let donor: DonorProfile = serde_json::from_value(json!({
            "_id": "u2",
            "name": "Sam",
            "email": "sam@example.org"
        }))
        .unwrap();
        assert!(!donor.is_admin());
    }
}
