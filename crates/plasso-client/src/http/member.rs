/*
[INPUT]:  Login credentials, member handles and settings/card updates
[OUTPUT]: Member handles and update confirmations
[POS]:    HTTP layer - member endpoints (token scoped)
[UPDATE]: When adding member endpoints or changing request bodies
*/

// ### Member Endpoints

use reqwest::Method;

use crate::http::{PlassoClient, Result};
use crate::types::{
    CreditCardRequest, LoginRequest, Member, MemberScoped, SettingsRequest, TokenRequest,
    TokenResponse,
};

impl PlassoClient {
    /// Authenticate a member and return a handle
    ///
    /// POST /api/service/login
    pub async fn login(&self, request: LoginRequest) -> Result<Member> {
        let builder = self.rest_request(Method::POST, "/api/service/login", &request)?;
        let response: TokenResponse = self.send_json(builder).await?;

        Ok(Member {
            public_key: request.public_key,
            token: response.token,
        })
    }

    /// Update member settings
    ///
    /// POST /api/services/user?action=settings
    pub async fn update_settings(&self, member: &Member, request: &SettingsRequest) -> Result<()> {
        let body = MemberScoped {
            request,
            pltoken: &member.token,
        };
        let builder =
            self.rest_request(Method::POST, "/api/services/user?action=settings", &body)?;
        self.send(builder).await?;
        Ok(())
    }

    /// Update member payment details
    ///
    /// POST /api/services/user?action=cc
    pub async fn update_credit_card(
        &self,
        member: &Member,
        request: &CreditCardRequest,
    ) -> Result<()> {
        let body = MemberScoped {
            request,
            pltoken: &member.token,
        };
        let builder = self.rest_request(Method::POST, "/api/services/user?action=cc", &body)?;
        self.send(builder).await?;
        Ok(())
    }

    /// Delete the member. The handle is consumed; log in again for a new one.
    ///
    /// DELETE /api/service/user
    pub async fn delete_member(&self, member: Member) -> Result<()> {
        let body = TokenRequest {
            token: &member.token,
        };
        let builder = self.rest_request(Method::DELETE, "/api/service/user", &body)?;
        self.send(builder).await?;
        Ok(())
    }

    /// Log the member out. The handle is consumed; log in again for a new one.
    ///
    /// POST /api/service/logout
    pub async fn logout(&self, member: Member) -> Result<()> {
        let body = TokenRequest {
            token: &member.token,
        };
        let builder = self.rest_request(Method::POST, "/api/service/logout", &body)?;
        self.send(builder).await?;
        Ok(())
    }
}
