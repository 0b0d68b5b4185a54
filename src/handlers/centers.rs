use tracing::debug;

use crate::catalog::CenterCatalog;
use crate::errors::ServiceError;
use crate::models::center::Center;

pub fn get_centers(catalog: &CenterCatalog) -> Vec<Center> {
    let centers = catalog.list_all();
    debug!("listing {} centers", centers.len());
    centers
}

pub async fn get_center(catalog: &CenterCatalog, id: i32) -> Result<Center, ServiceError> {
    debug!("fetching center {}", id);
    catalog.find_by_id(id).await.ok_or(ServiceError::NotFound)
}
