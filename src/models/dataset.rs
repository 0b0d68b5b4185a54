use serde::Deserialize;

use crate::models::center::CenterType;

/// Shape of the reference file the catalog is seeded from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDataset {
    pub center_types: Vec<CenterType>,
    pub centers: Vec<CenterEntry>,
}

/// A center as listed in the reference file, before its type is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterEntry {
    pub id: i32,
    pub name: String,
    pub street_address: String,
    pub center_type_id: i32,
}
