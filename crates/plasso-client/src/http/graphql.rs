/*
[INPUT]:  Member tokens
[OUTPUT]: Validated sessions and member profiles
[POS]:    HTTP layer - GraphQL member lookups
[UPDATE]: When the member selection set or GraphQL endpoint changes
*/

use serde::de::DeserializeOwned;

use crate::http::{PlassoClient, PlassoError, Result};
use crate::types::{
    GraphQlQuery, GraphQlResponse, Member, MemberData, MemberDataNode, MemberEnvelope, Session,
    SessionNode, Space, TokenVariables,
};

const SESSION_QUERY: &str =
    "query($token: String!){member(token: $token){id,planId,space{logoutUrl}}}";

const MEMBER_DATA_QUERY: &str = "query($token: String!){member(token: $token){\
    id,email,name,\
    billingAddress,billingCity,billingState,billingZip,billingCountry,\
    shippingName,shippingAddress,shippingCity,shippingState,shippingZip,shippingCountry,shippingOptions,\
    dataFields{id,value},plans}}";

impl PlassoClient {
    /// Validate a member token and load its session
    ///
    /// POST /graphql `member(token)`
    pub async fn member_session(&self, token: &str) -> Result<Session> {
        let node: SessionNode = self.query_member(SESSION_QUERY, token).await?;
        let logout_url = node
            .space
            .and_then(|space| space.logout_url)
            .unwrap_or_default();

        Ok(Session {
            logged_in: true,
            token: token.to_string(),
            id: node.id.unwrap_or_default(),
            plan_id: node.plan_id.unwrap_or_default(),
            space: Space { logout_url },
        })
    }

    /// Get member details
    ///
    /// POST /graphql `member(token)`
    pub async fn member_data(&self, member: &Member) -> Result<MemberData> {
        let node: MemberDataNode = self.query_member(MEMBER_DATA_QUERY, &member.token).await?;
        Ok(node.into())
    }

    async fn query_member<T>(&self, query: &'static str, token: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = GraphQlQuery {
            query,
            variables: TokenVariables { token },
        };
        let builder = self.graphql_request(&body)?;
        let response: GraphQlResponse<MemberEnvelope<T>> = self.send_json(builder).await?;

        if !response.errors.is_empty() {
            let messages: Vec<&str> = response
                .errors
                .iter()
                .map(|err| err.message.as_str())
                .collect();
            return Err(PlassoError::GraphQl(messages.join("; ")));
        }

        response
            .data
            .and_then(|data| data.member)
            .ok_or_else(|| PlassoError::InvalidResponse("member not found for token".to_string()))
    }
}
