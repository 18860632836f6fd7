//! Patient identity and per-client session state

use crate::models::{PatientData, SessionDetails};

/// Personal data the portal uses to find the patient. Fixed for the
/// lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// Compulsory medical insurance (OMS) policy number
    pub oms_number: String,
}

impl ClientIdentity {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        middle_name: impl Into<String>,
        birth_date: impl Into<String>,
        oms_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: middle_name.into(),
            birth_date: birth_date.into(),
            oms_number: oms_number.into(),
        }
    }

    pub(crate) fn patient_data(&self, record_source: Option<&str>) -> PatientData {
        PatientData {
            oms_number: self.oms_number.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            middle_name: self.middle_name.clone(),
            birth_date: self.birth_date.clone(),
            record_source: record_source.map(str::to_string),
        }
    }
}

/// Server-issued session. Replaced as a whole by `login`; the extended
/// record and session id are replaced by `fetch_session_details`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session_id: Option<String>,
    pub patient_id: Option<String>,
    pub details: Option<SessionDetails>,
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        self.session_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
