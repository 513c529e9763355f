/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - member and address types shared by requests and responses
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// A custom data field attached to a member or purchase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    pub id: String,
    pub value: String,
}

/// Billing address fields. Required or not depending on plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub billing_address: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_zip: String,
    pub billing_country: String,
}

/// Shipping address fields. Required or not depending on plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub shipping_name: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
    pub shipping_country: String,
    pub shipping_options: String,
}

/// Handle to a logged-in member.
///
/// The token is rotated by the platform on every login, so a handle is only
/// good until the next login, logout or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub public_key: String,
    pub token: String,
}

/// Profile of a member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberData {
    /// Stable member id
    pub id: String,
    pub email: String,
    pub name: String,
    pub billing: BillingDetails,
    pub shipping: ShippingDetails,
    pub data_fields: Vec<DataItem>,
    /// Plan ids the member is subscribed to
    pub plans: Vec<String>,
}

/// Space the member belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub logout_url: String,
}

/// A member token validated against the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub token: String,
    pub id: String,
    pub plan_id: i32,
    pub space: Space,
}
