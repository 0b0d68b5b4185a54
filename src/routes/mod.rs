pub mod appointments;
pub mod centers;
pub mod health;

use actix_web::{HttpResponse, error::InternalError, web};
use tracing::warn;

pub fn init(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        warn!("rejected request body: {}", err);
        let response = HttpResponse::BadRequest().body(err.to_string());
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .service(web::scope("/health").configure(health::init))
        .service(web::scope("/appointments").configure(appointments::init))
        .service(web::scope("/centers").configure(centers::init));
}
