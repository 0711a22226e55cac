//! Doctor schedules.
//!
//! A Doctor owns the appointments booked with it and refuses a booking
//! when it already has one at exactly the same time.

use crate::models::{Appointment, DoctorId, PatientId};
use chrono::NaiveDateTime;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    id: DoctorId,
    specialization: String,
    appointments: Vec<Appointment>,
}

impl Doctor {
    /// Create a doctor with an empty schedule.
    pub fn new(id: DoctorId, specialization: impl Into<String>) -> Self {
        Doctor {
            id,
            specialization: specialization.into(),
            appointments: Vec::new(),
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Appointments in booking order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Check whether an appointment already starts at exactly `time`.
    pub fn has_appointment_at(&self, time: NaiveDateTime) -> bool {
        self.appointments.iter().any(|apt| apt.time() == time)
    }

    /// Book `patient_id` at `time`.
    ///
    /// Returns `false` and leaves the schedule untouched when another
    /// appointment holds the identical timestamp. There is no notion of slot
    /// length: bookings a minute apart never conflict. The patient id is not
    /// checked against any registry.
    pub fn add_appointment(&mut self, patient_id: PatientId, time: NaiveDateTime) -> bool {
        if self.has_appointment_at(time) {
            debug!(
                "Doctor {} rejected patient {}: slot {} already booked",
                self.id, patient_id, time
            );
            return false;
        }

        self.appointments
            .push(Appointment::new(patient_id, self.id, time));
        debug!(
            "Doctor {} booked patient {} at {} ({} total)",
            self.id,
            patient_id,
            time,
            self.appointments.len()
        );
        true
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor is {} and specialization is {}",
            self.id, self.specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_new_doctor_is_empty() {
        let doctor = Doctor::new(1, "Eye");
        assert_eq!(doctor.id(), 1);
        assert_eq!(doctor.specialization(), "Eye");
        assert!(doctor.appointments().is_empty());
    }

    #[test]
    fn test_booking_free_slot_appends() {
        let mut doctor = Doctor::new(1, "Eye");
        assert!(doctor.add_appointment(10, at(1, 9, 0)));

        assert_eq!(
            doctor.appointments().to_vec(),
            vec![Appointment::new(10, 1, at(1, 9, 0))]
        );
    }

    #[test]
    fn test_booking_taken_slot_is_rejected_without_mutation() {
        let mut doctor = Doctor::new(1, "Eye");
        doctor.add_appointment(10, at(1, 9, 0));

        assert!(!doctor.add_appointment(20, at(1, 9, 0)));
        assert_eq!(doctor.appointments().len(), 1);
        assert_eq!(doctor.appointments()[0].patient_id(), 10);
    }

    #[test]
    fn test_same_patient_cannot_double_book_slot() {
        let mut doctor = Doctor::new(1, "Eye");
        assert!(doctor.add_appointment(10, at(1, 9, 0)));
        assert!(!doctor.add_appointment(10, at(1, 9, 0)));
    }

    #[test]
    fn test_conflict_is_exact_timestamp_only() {
        let mut doctor = Doctor::new(1, "Eye");
        assert!(doctor.add_appointment(10, at(1, 9, 0)));
        assert!(doctor.add_appointment(20, at(1, 9, 1)));
        assert!(doctor.add_appointment(30, at(2, 9, 0)));
        assert_eq!(doctor.appointments().len(), 3);
    }

    #[test]
    fn test_appointments_keep_booking_order() {
        let mut doctor = Doctor::new(2, "General");
        doctor.add_appointment(1, at(3, 15, 0));
        doctor.add_appointment(2, at(1, 8, 0));
        doctor.add_appointment(3, at(2, 12, 0));

        let times: Vec<NaiveDateTime> = doctor.appointments().iter().map(|a| a.time()).collect();
        assert_eq!(times, vec![at(3, 15, 0), at(1, 8, 0), at(2, 12, 0)]);
    }

    #[test]
    fn test_listing_is_stable_without_bookings() {
        let mut doctor = Doctor::new(2, "General");
        doctor.add_appointment(1, at(1, 8, 0));

        let first = doctor.appointments().to_vec();
        let second = doctor.appointments().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_appointment_carries_doctor_id() {
        let mut doctor = Doctor::new(42, "Cardiology");
        doctor.add_appointment(5, at(1, 11, 0));
        assert_eq!(doctor.appointments()[0].doctor_id(), 42);
    }

    #[test]
    fn test_details_line() {
        let doctor = Doctor::new(2, "General");
        assert_eq!(doctor.to_string(), "Doctor is 2 and specialization is General");
    }
}
