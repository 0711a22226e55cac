//! Interactive menu for the appointment tracker.
//!
//! Input is consumed as whitespace-separated integer tokens, so a whole
//! booking can be typed on one line or spread over several. Any token that
//! is not an integer ends the session with an error.

use crate::error::{HospitalError, Result};
use crate::models::TIME_FORMAT;
use crate::registry::{BookingOutcome, Registry};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// The five menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListDoctors,
    ListPatients,
    ScheduleAppointment,
    ListAppointments,
    Quit,
}

impl Command {
    pub fn from_number(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Command::ListDoctors),
            2 => Some(Command::ListPatients),
            3 => Some(Command::ScheduleAppointment),
            4 => Some(Command::ListAppointments),
            5 => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Build an on-the-hour timestamp from menu input.
pub fn appointment_time(year: i32, month: i32, day: i32, hour: i32) -> Result<NaiveDateTime> {
    let invalid = || HospitalError::InvalidTimestamp {
        year,
        month,
        day,
        hour,
    };

    let month_u = u32::try_from(month).map_err(|_| invalid())?;
    let day_u = u32::try_from(day).map_err(|_| invalid())?;
    let hour_u = u32::try_from(hour).map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month_u, day_u)
        .and_then(|date| date.and_hms_opt(hour_u, 0, 0))
        .ok_or_else(invalid)
}

pub struct HospitalCli<R, W> {
    registry: Registry,
    input: R,
    output: W,
    pending: VecDeque<String>,
    running: bool,
}

impl<R: BufRead, W: Write> HospitalCli<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        HospitalCli {
            registry,
            input,
            output,
            pending: VecDeque::new(),
            running: true,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Main Menu ---")?;
        writeln!(self.output, "1. List doctors")?;
        writeln!(self.output, "2. List patients")?;
        writeln!(self.output, "3. Schedule an appointment")?;
        writeln!(self.output, "4. List appointments")?;
        writeln!(self.output, "5. Quit")?;
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(HospitalError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn read_int(&mut self) -> Result<i32> {
        let token = self.next_token()?;
        match token.parse::<i32>() {
            Ok(value) => Ok(value),
            Err(_) => Err(HospitalError::InvalidNumber(token)),
        }
    }

    fn list_doctors(&mut self) -> Result<()> {
        writeln!(self.output, "Viewing list of doctors")?;
        for doctor in self.registry.doctors() {
            writeln!(self.output, "{}", doctor)?;
        }
        Ok(())
    }

    fn list_patients(&mut self) -> Result<()> {
        writeln!(self.output, "Viewing list of patients")?;
        for patient in self.registry.patients() {
            writeln!(self.output, "{}", patient)?;
        }
        Ok(())
    }

    fn schedule_appointment(&mut self) -> Result<()> {
        writeln!(self.output, "Scheduling an appointment")?;
        writeln!(self.output, "Enter patient id and doctor id:")?;
        self.output.flush()?;
        let patient_id = self.read_int()?;
        let doctor_id = self.read_int()?;

        writeln!(self.output, "Enter appointment time (year month day hour):")?;
        self.output.flush()?;
        let year = self.read_int()?;
        let month = self.read_int()?;
        let day = self.read_int()?;
        let hour = self.read_int()?;
        let time = appointment_time(year, month, day, hour)?;

        match self.registry.schedule(patient_id, doctor_id, time) {
            BookingOutcome::Booked => {
                writeln!(
                    self.output,
                    "Appointment scheduled for: {}",
                    time.format(TIME_FORMAT)
                )?;
            }
            BookingOutcome::SlotTaken => {
                writeln!(self.output, "Is booked for this slot")?;
            }
            // Unknown doctors are only logged, never reported on the menu.
            BookingOutcome::UnknownDoctor => {}
        }
        Ok(())
    }

    fn list_appointments(&mut self) -> Result<()> {
        writeln!(self.output, "Listing all appointments")?;
        for appointment in self.registry.all_appointments() {
            writeln!(self.output, "{}", appointment)?;
        }
        Ok(())
    }

    /// Handle one command to completion.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        debug!("Dispatching {:?}", command);
        match command {
            Command::ListDoctors => self.list_doctors(),
            Command::ListPatients => self.list_patients(),
            Command::ScheduleAppointment => self.schedule_appointment(),
            Command::ListAppointments => self.list_appointments(),
            Command::Quit => {
                self.running = false;
                writeln!(self.output, "Exiting the program")?;
                Ok(())
            }
        }
    }

    /// Run the menu until Quit is chosen.
    ///
    /// Returns an error on malformed numbers, impossible dates, I/O failure or
    /// end of input; the loop does not recover from any of them.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            self.print_menu()?;

            let choice = self.read_int()?;
            match Command::from_number(choice) {
                Some(command) => self.dispatch(command)?,
                None => {
                    warn!("Invalid menu choice {}", choice);
                    writeln!(
                        self.output,
                        "Invalid option! Please enter a number between 1 and 5"
                    )?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }
}
