//! In-memory hospital appointment tracker.
//!
//! Doctors own their schedules and reject a booking only when the exact
//! same timestamp is already taken. The [`cli::HospitalCli`] menu drives a
//! [`registry::Registry`] built from a [`config::HospitalConfig`].

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod models;
pub mod registry;

pub use cli::{Command, HospitalCli};
pub use config::{DoctorProfile, HospitalConfig};
pub use doctor::Doctor;
pub use error::{HospitalError, Result};
pub use models::{Appointment, DoctorId, Patient, PatientId};
pub use registry::{BookingOutcome, Registry};
