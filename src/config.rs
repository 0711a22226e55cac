//! Startup configuration: the doctor roster and the default log filter.

use crate::models::DoctorId;

/// A doctor to create when the registry is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorProfile {
    pub id: DoctorId,
    pub specialization: String,
}

impl DoctorProfile {
    pub fn new(id: DoctorId, specialization: impl Into<String>) -> Self {
        DoctorProfile {
            id,
            specialization: specialization.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalConfig {
    pub doctors: Vec<DoctorProfile>,
    /// Filter handed to env_logger when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HospitalConfig {
    fn default() -> Self {
        HospitalConfig {
            doctors: vec![
                DoctorProfile::new(1, "Eye"),
                DoctorProfile::new(2, "General"),
            ],
            log_filter: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_roster() {
        let config = HospitalConfig::default();
        assert_eq!(
            config.doctors,
            vec![
                DoctorProfile::new(1, "Eye"),
                DoctorProfile::new(2, "General"),
            ]
        );
        assert_eq!(config.log_filter, "error");
    }

    #[test]
    fn test_default_filter_hides_warnings() {
        let filter = HospitalConfig::default().log_filter;
        let level: log::LevelFilter = filter.parse().unwrap();
        assert!(level < log::LevelFilter::Warn);
    }
}
