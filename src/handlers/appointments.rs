use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::CenterCatalog;
use crate::errors::ServiceError;
use crate::models::appointment::{
    Appointment, AppointmentParameters, AppointmentView, parse_booking_date,
};
use crate::models::validation::{Rule, ValidationError};
use crate::store::{AppointmentStore, Records};

/// Books appointments against the center catalog.
pub struct AppointmentService {
    catalog: Arc<CenterCatalog>,
    store: AppointmentStore,
}

impl AppointmentService {
    pub fn new(catalog: Arc<CenterCatalog>) -> Self {
        AppointmentService {
            catalog,
            store: AppointmentStore::new(),
        }
    }

    pub async fn list_all(&self) -> Vec<AppointmentView> {
        let records = self.store.read().await;
        let mut appointments = Vec::new();

        for appointment in records.iter() {
            appointments.push(self.attach_center(appointment.clone()).await);
        }

        debug!("listing {} appointments", appointments.len());
        appointments
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AppointmentView, ServiceError> {
        debug!("fetching appointment {}", id);
        let appointment = self
            .store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(ServiceError::NotFound)?;

        Ok(self.attach_center(appointment).await)
    }

    pub async fn create(
        &self,
        params: AppointmentParameters,
    ) -> Result<AppointmentView, ServiceError> {
        let mut records = self.store.write().await;

        let errors = self.validate(&records, &params, None).await;
        if !errors.is_empty() {
            warn!("rejected new appointment: {}", codes(&errors));
            return Err(ServiceError::Validation(errors));
        }

        let appointment = records.insert(params.client_full_name, params.date, params.center_id);
        info!(
            "created appointment {} at center {} on {}",
            appointment.id, appointment.center_id, appointment.date
        );

        Ok(self.attach_center(appointment).await)
    }

    /// Replaces name, date and center of appointment `id`.
    pub async fn update(
        &self,
        id: i32,
        params: AppointmentParameters,
    ) -> Result<(), ServiceError> {
        let mut records = self.store.write().await;

        if records.get(id).is_none() {
            return Err(ServiceError::NotFound);
        }

        let errors = self.validate(&records, &params, Some(id)).await;
        if !errors.is_empty() {
            warn!("rejected update of appointment {}: {}", id, codes(&errors));
            return Err(ServiceError::Validation(errors));
        }

        records.replace(Appointment {
            id,
            client_full_name: params.client_full_name,
            date: params.date,
            center_id: params.center_id,
        });
        info!("updated appointment {}", id);

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.store.write().await.remove(id) {
            Some(_) => {
                info!("deleted appointment {}", id);
                Ok(())
            }
            None => Err(ServiceError::NotFound),
        }
    }

    /// Runs every booking rule and returns all failures in rule order.
    ///
    /// Conflicts compare the raw date strings, so `2024-01-02` and a
    /// differently written but equal date never collide.
    async fn validate(
        &self,
        records: &Records,
        candidate: &AppointmentParameters,
        excluding: Option<i32>,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let center = self.catalog.find_by_id(candidate.center_id).await;
        if center.is_none() {
            errors.push(Rule::CenterExists.into());
        }

        if parse_booking_date(&candidate.date).is_none() {
            errors.push(Rule::DateFormat.into());
        }

        if let Some(center) = center {
            let taken = records.iter().any(|existing| {
                Some(existing.id) != excluding
                    && existing.center_id == center.id
                    && existing.date == candidate.date
            });
            if taken {
                errors.push(Rule::NoDateConflict.into());
            }
        }

        errors
    }

    async fn attach_center(&self, appointment: Appointment) -> AppointmentView {
        let center = self.catalog.find_by_id(appointment.center_id).await;
        AppointmentView::new(appointment, center)
    }
}

fn codes(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.code.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
