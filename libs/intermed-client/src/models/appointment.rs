//! Booking a slot (`createAppointment`).

use serde::{Deserialize, Serialize};

use super::envelope::{RequestBody, ResponsePayload};
use super::patient::PatientData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(rename = "Patient_Data")]
    pub patient_data: PatientData,
    #[serde(rename = "Session_ID")]
    pub session_id: String,
    #[serde(rename = "Slot_Id")]
    pub slot_id: String,
}

impl RequestBody for CreateAppointmentRequest {
    const KEY: &'static str = "CreateAppointmentRequest";
}

/// Booking confirmation. Its fields are not documented by the portal, so
/// everything besides the error block and session id is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentConfirmation {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ResponsePayload for AppointmentConfirmation {
    const KEY: &'static str = "CreateAppointmentResponse";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::envelope::decode_envelope;

    #[test]
    fn test_request_wire_shape() {
        let request = CreateAppointmentRequest {
            patient_data: PatientData {
                oms_number: "7690299770000000".to_string(),
                first_name: "Имя".to_string(),
                last_name: "Фамилия".to_string(),
                middle_name: "Отчество".to_string(),
                birth_date: "2000-01-01".to_string(),
                record_source: None,
            },
            session_id: "eb9e6bed-0000-0000-0000-000000000000".to_string(),
            slot_id: "d8ffda1b-91cb-4917-acca-1adb012f01ad".to_string(),
        };
        assert_eq!(
            request.to_wire().unwrap(),
            r#"{"CreateAppointmentRequest":{"Patient_Data":{"OMS_Number":"7690299770000000","First_Name":"Имя","Last_Name":"Фамилия","Middle_Name":"Отчество","Birth_Date":"2000-01-01"},"Session_ID":"eb9e6bed-0000-0000-0000-000000000000","Slot_Id":"d8ffda1b-91cb-4917-acca-1adb012f01ad"}}"#
        );
    }

    #[test]
    fn test_keeps_undocumented_fields() {
        let body = r#"{"CreateAppointmentResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":""}},"Session_ID":"S1","Book_Id_Mis":"77"}}"#;
        let reply = decode_envelope::<AppointmentConfirmation>(body).unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("S1"));
        assert_eq!(reply.payload.fields["Book_Id_Mis"], "77");
        assert!(!reply.payload.fields.contains_key("Error"));
    }
}
