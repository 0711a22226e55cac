//! The hospital registry.
//!
//! Holds the doctors and patients known to the process and routes booking
//! requests to the right doctor. Doctors are looked up by a linear scan on
//! id; the first match wins and ids are never checked for uniqueness.

use crate::config::HospitalConfig;
use crate::doctor::Doctor;
use crate::models::{Appointment, DoctorId, Patient, PatientId};
use chrono::NaiveDateTime;
use log::warn;

/// Result of routing a booking request through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    /// The doctor already has an appointment at that exact time.
    SlotTaken,
    /// No doctor with the requested id. Nothing was changed.
    UnknownDoctor,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    doctors: Vec<Doctor>,
    patients: Vec<Patient>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn with_doctors(doctors: impl IntoIterator<Item = Doctor>) -> Self {
        Registry {
            doctors: doctors.into_iter().collect(),
            patients: Vec::new(),
        }
    }

    /// Build the registry from the configured doctor roster.
    pub fn from_config(config: &HospitalConfig) -> Self {
        Registry::with_doctors(
            config
                .doctors
                .iter()
                .map(|profile| Doctor::new(profile.id, profile.specialization.clone())),
        )
    }

    pub fn add_doctor(&mut self, doctor: Doctor) {
        self.doctors.push(doctor);
    }

    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn find_doctor(&self, doctor_id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == doctor_id)
    }

    pub fn find_doctor_mut(&mut self, doctor_id: DoctorId) -> Option<&mut Doctor> {
        self.doctors.iter_mut().find(|d| d.id() == doctor_id)
    }

    /// Book `patient_id` with `doctor_id` at `time`.
    ///
    /// The patient id is passed through unchecked and the patient's own
    /// appointment list is left alone.
    pub fn schedule(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        time: NaiveDateTime,
    ) -> BookingOutcome {
        match self.find_doctor_mut(doctor_id) {
            Some(doctor) => {
                if doctor.add_appointment(patient_id, time) {
                    BookingOutcome::Booked
                } else {
                    BookingOutcome::SlotTaken
                }
            }
            None => {
                warn!(
                    "Booking for patient {} ignored: no doctor with id {}",
                    patient_id, doctor_id
                );
                BookingOutcome::UnknownDoctor
            }
        }
    }

    /// Every appointment, grouped by doctor in registry order, each group in
    /// booking order.
    pub fn all_appointments(&self) -> impl Iterator<Item = &Appointment> + '_ {
        self.doctors.iter().flat_map(|d| d.appointments().iter())
    }

    /// Appointments of one doctor. Empty when the id is unknown.
    pub fn appointments_for_doctor(&self, doctor_id: DoctorId) -> &[Appointment] {
        self.find_doctor(doctor_id)
            .map(|d| d.appointments())
            .unwrap_or(&[])
    }

    /// Appointments booked for one patient across all doctors.
    ///
    /// Derived from the doctors' schedules, not from [`Patient`] records.
    pub fn appointments_for_patient(&self, patient_id: PatientId) -> Vec<&Appointment> {
        self.all_appointments()
            .filter(|apt| apt.patient_id() == patient_id)
            .collect()
    }

    pub fn appointment_count(&self) -> usize {
        self.doctors.iter().map(|d| d.appointments().len()).sum()
    }
}
