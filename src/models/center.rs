use serde::{Deserialize, Serialize};

/// Classification tag applied to a center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterType {
    pub id: i32,
    pub value: String,
}

/// A bookable service location.
///
/// `center_type_value` is copied from the matching [`CenterType`] when the
/// catalog is seeded; the numeric type id stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: i32,
    pub name: String,
    pub street_address: String,
    #[serde(skip_serializing)]
    pub center_type_id: i32,
    pub center_type_value: String,
}
