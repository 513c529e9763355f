/*
[INPUT]:  Payment and subscription requests
[OUTPUT]: Payment confirmation and member handles for new subscribers
[POS]:    HTTP layer - checkout endpoints (no member token required)
[UPDATE]: When adding checkout endpoints or changing request bodies
*/

use reqwest::Method;

use crate::http::{PlassoClient, Result};
use crate::types::{Member, PaymentRequest, SubscriptionPayload, SubscriptionRequest, TokenResponse};

/// Subscriptions made through this client always target the space
const SUBSCRIPTION_FOR: &str = "space";

impl PlassoClient {
    /// Create a new payment
    ///
    /// POST /api/payments
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<()> {
        let builder = self.rest_request(Method::POST, "/api/payments", request)?;
        self.send(builder).await?;
        Ok(())
    }

    /// Create a new subscription to a plan and return the new member
    ///
    /// POST /api/subscriptions
    pub async fn create_subscription(&self, request: SubscriptionRequest) -> Result<Member> {
        let body = SubscriptionPayload {
            subscription_for: SUBSCRIPTION_FOR,
            request: &request,
        };
        let builder = self.rest_request(Method::POST, "/api/subscriptions", &body)?;
        let response: TokenResponse = self.send_json(builder).await?;

        Ok(Member {
            public_key: request.public_key,
            token: response.token,
        })
    }
}
