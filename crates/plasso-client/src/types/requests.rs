/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{BillingDetails, DataItem, ShippingDetails};

/// Credentials passed to `login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Public key of the Plasso space owner
    pub public_key: String,
    pub email: String,
    pub password: String,
}

/// A product line in a payment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Plasso product id
    pub id: String,
    pub qty: String,
    /// Amount for variable price products
    pub amount: String,
}

/// One-off purchase of products
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub public_key: String,
    /// Token returned from the javascript flexkit `GetToken` call
    pub token: String,
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub billing: BillingDetails,
    #[serde(flatten)]
    pub shipping: ShippingDetails,
    pub data_fields: Vec<DataItem>,
    pub coupon: String,
    pub email: String,
    pub name: String,
}

/// Subscribes a new member to a plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    /// The plan id being subscribed to
    pub plan: String,
    /// Token returned from the javascript flexkit `GetToken` call
    pub token: String,
    #[serde(flatten)]
    pub billing: BillingDetails,
    #[serde(flatten)]
    pub shipping: ShippingDetails,
    pub data_fields: Vec<DataItem>,
    pub public_key: String,
}

/// Replaces a member's payment source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardRequest {
    /// Informational only
    #[serde(rename = "cc_last_4")]
    pub last4: String,
    /// Informational only
    #[serde(rename = "cc_type")]
    pub card_type: String,
    /// Allows changing plan in the same call
    #[serde(rename = "plan")]
    pub plan_id: i64,
    /// Stripe source token
    pub token: String,
}

/// Changes a member's contact and shipping settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRequest {
    pub email: String,
    pub name: String,
    #[serde(flatten)]
    pub shipping: ShippingDetails,
}

/// Wire body for calls made on behalf of a logged-in member.
///
/// The member token travels as `pltoken` next to the request fields.
#[derive(Debug, Serialize)]
pub(crate) struct MemberScoped<'a, T> {
    #[serde(flatten)]
    pub request: &'a T,
    pub pltoken: &'a str,
}

/// Wire body for `/api/subscriptions`
#[derive(Debug, Serialize)]
pub(crate) struct SubscriptionPayload<'a> {
    pub subscription_for: &'static str,
    #[serde(flatten)]
    pub request: &'a SubscriptionRequest,
}

/// Bare token body used by delete and logout
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub token: &'a str,
}

/// GraphQL POST envelope
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlQuery<'a> {
    pub query: &'static str,
    pub variables: TokenVariables<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenVariables<'a> {
    pub token: &'a str,
}
