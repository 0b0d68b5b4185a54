use actix_web::{HttpResponse, Responder, delete, get, http::header, post, put, web};

use crate::errors::ServiceError;
use crate::handlers::appointments::AppointmentService;
use crate::models::appointment::AppointmentParameters;

#[get("")]
async fn list_appointments(service: web::Data<AppointmentService>) -> impl Responder {
    HttpResponse::Ok().json(service.list_all().await)
}

#[get("/{id}")]
async fn appointment_by_id(
    service: web::Data<AppointmentService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let appointment = service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[post("")]
async fn create(
    service: web::Data<AppointmentService>,
    body: web::Json<AppointmentParameters>,
) -> Result<HttpResponse, ServiceError> {
    let created = service.create(body.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/appointments/{}", created.id)))
        .json(created))
}

#[put("/{id}")]
async fn update(
    service: web::Data<AppointmentService>,
    path: web::Path<i32>,
    body: web::Json<AppointmentParameters>,
) -> Result<HttpResponse, ServiceError> {
    service
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/{id}")]
async fn remove(
    service: web::Data<AppointmentService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_appointments)
        .service(appointment_by_id)
        .service(create)
        .service(update)
        .service(remove);
}
