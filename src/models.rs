//! Data models for the appointment tracker.
//!
//! - Appointment: a booked (patient, doctor, time) record
//! - Patient: patient id and its appointment list

use chrono::NaiveDateTime;
use std::fmt;

pub type DoctorId = i32;
pub type PatientId = i32;

/// Rendering used for every timestamp shown to the user.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A confirmed appointment between a patient and a doctor.
///
/// Immutable once created. Two appointments with the same fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Appointment {
    patient_id: PatientId,
    doctor_id: DoctorId,
    time: NaiveDateTime,
}

impl Appointment {
    pub fn new(patient_id: PatientId, doctor_id: DoctorId, time: NaiveDateTime) -> Self {
        Appointment {
            patient_id,
            doctor_id,
            time,
        }
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment is between doctor {} and patient {} at time {}",
            self.doctor_id,
            self.patient_id,
            self.time.format(TIME_FORMAT)
        )
    }
}

/// Represents a patient in the hospital registry.
///
/// Bookings go through a doctor and never touch this list; use
/// [`crate::registry::Registry::appointments_for_patient`] for a
/// patient-scoped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientId,
    appointments: Vec<Appointment>,
}

impl Patient {
    pub fn new(id: PatientId) -> Self {
        Patient {
            id,
            appointments: Vec::new(),
        }
    }

    /// Create a patient with an existing appointment list.
    pub fn with_appointments(id: PatientId, appointments: Vec<Appointment>) -> Self {
        Patient { id, appointments }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient is {} with {} appointment(s)",
            self.id,
            self.appointments.len()
        )
    }
}
