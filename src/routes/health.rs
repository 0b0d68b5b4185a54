use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::catalog::CenterCatalog;

#[get("/ping")]
async fn ping(catalog: web::Data<CenterCatalog>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "centers": catalog.len(),
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping);
}
