/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with deserialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{BillingDetails, DataItem, MemberData, ShippingDetails};

/// Body returned by login and subscription calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlErrorMessage {
    pub message: String,
}

/// `data` of a member query
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MemberEnvelope<T> {
    pub member: Option<T>,
}

/// Session fields of a member; null or missing scalars mean "unset"
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionNode {
    pub id: Option<String>,
    pub plan_id: Option<i32>,
    pub space: Option<SpaceNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpaceNode {
    pub logout_url: Option<String>,
}

/// Member profile as the GraphQL schema names it; any field may come back null
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MemberDataNode {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub billing_address: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state: Option<String>,
    pub billing_zip: Option<String>,
    pub billing_country: Option<String>,
    pub shipping_name: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub shipping_country: Option<String>,
    pub shipping_options: Option<String>,
    pub data_fields: Option<Vec<DataItem>>,
    pub plans: Option<Vec<String>>,
}

impl From<MemberDataNode> for MemberData {
    fn from(node: MemberDataNode) -> Self {
        Self {
            id: node.id.unwrap_or_default(),
            email: node.email.unwrap_or_default(),
            name: node.name.unwrap_or_default(),
            billing: BillingDetails {
                billing_address: node.billing_address.unwrap_or_default(),
                billing_city: node.billing_city.unwrap_or_default(),
                billing_state: node.billing_state.unwrap_or_default(),
                billing_zip: node.billing_zip.unwrap_or_default(),
                billing_country: node.billing_country.unwrap_or_default(),
            },
            shipping: ShippingDetails {
                shipping_name: node.shipping_name.unwrap_or_default(),
                shipping_address: node.shipping_address.unwrap_or_default(),
                shipping_city: node.shipping_city.unwrap_or_default(),
                shipping_state: node.shipping_state.unwrap_or_default(),
                shipping_zip: node.shipping_zip.unwrap_or_default(),
                shipping_country: node.shipping_country.unwrap_or_default(),
                shipping_options: node.shipping_options.unwrap_or_default(),
            },
            data_fields: node.data_fields.unwrap_or_default(),
            plans: node.plans.unwrap_or_default(),
        }
    }
}
