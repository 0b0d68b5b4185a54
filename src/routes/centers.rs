use actix_web::{HttpResponse, Responder, get, web};

use crate::catalog::CenterCatalog;
use crate::errors::ServiceError;
use crate::handlers::centers::{get_center, get_centers};

#[get("")]
async fn list_centers(catalog: web::Data<CenterCatalog>) -> impl Responder {
    HttpResponse::Ok().json(get_centers(&catalog))
}

#[get("/{id}")]
async fn center_by_id(
    catalog: web::Data<CenterCatalog>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let center = get_center(&catalog, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(center))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_centers).service(center_by_id);
}
