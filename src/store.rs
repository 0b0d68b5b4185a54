use std::collections::BTreeMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::appointment::Appointment;

/// In-memory appointment records.
///
/// Writers hold the guard from [`AppointmentStore::write`] across validation
/// and commit, so every mutation sees a consistent view.
pub struct AppointmentStore {
    records: RwLock<Records>,
}

pub struct Records {
    next_id: i32,
    by_id: BTreeMap<i32, Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        AppointmentStore {
            records: RwLock::new(Records {
                next_id: 1,
                by_id: BTreeMap::new(),
            }),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().await
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Records {
    pub fn get(&self, id: i32) -> Option<&Appointment> {
        self.by_id.get(&id)
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.by_id.values()
    }

    /// Stores a new record under a freshly assigned id. Ids are never reused.
    pub fn insert(&mut self, client_full_name: String, date: String, center_id: i32) -> Appointment {
        let appointment = Appointment {
            id: self.next_id,
            client_full_name,
            date,
            center_id,
        };
        self.next_id += 1;
        self.by_id.insert(appointment.id, appointment.clone());
        appointment
    }

    /// Replaces an existing record. Returns `false` if `appointment.id` is unknown.
    pub fn replace(&mut self, appointment: Appointment) -> bool {
        match self.by_id.get_mut(&appointment.id) {
            Some(existing) => {
                *existing = appointment;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i32) -> Option<Appointment> {
        self.by_id.remove(&id)
    }
}
