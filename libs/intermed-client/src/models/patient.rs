//! Patient lookup (`findPatient`), the call that opens a session.

use serde::{Deserialize, Serialize};

use super::envelope::{RequestBody, ResponsePayload};

/// Patient identity block shared by the lookup and booking requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientData {
    #[serde(rename = "OMS_Number")]
    pub oms_number: String,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Middle_Name")]
    pub middle_name: String,
    #[serde(rename = "Birth_Date")]
    pub birth_date: String,
    #[serde(rename = "Record_Source", default, skip_serializing_if = "Option::is_none")]
    pub record_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfoRequest {
    #[serde(rename = "Patient_Data")]
    pub patient_data: PatientData,
}

impl RequestBody for PatientInfoRequest {
    const KEY: &'static str = "GetPatientInfoRequest";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    #[serde(rename = "Patient_Id", default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

impl ResponsePayload for PatientInfo {
    const KEY: &'static str = "GetPatientInfoResponse";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::envelope::decode_envelope;

    #[test]
    fn test_login_request_wire_shape() {
        let request = PatientInfoRequest {
            patient_data: PatientData {
                oms_number: "7690299770000000".to_string(),
                first_name: "Имя".to_string(),
                last_name: "Фамилия".to_string(),
                middle_name: "Отчество".to_string(),
                birth_date: "2000-01-01".to_string(),
                record_source: Some("intermed".to_string()),
            },
        };

        let wire: serde_json::Value = serde_json::from_str(&request.to_wire().unwrap()).unwrap();
        let data = &wire["GetPatientInfoRequest"]["Patient_Data"];
        assert_eq!(data["OMS_Number"], "7690299770000000");
        assert_eq!(data["First_Name"], "Имя");
        assert_eq!(data["Last_Name"], "Фамилия");
        assert_eq!(data["Middle_Name"], "Отчество");
        assert_eq!(data["Birth_Date"], "2000-01-01");
        assert_eq!(data["Record_Source"], "intermed");
    }

    #[test]
    fn test_decodes_lookup_reply() {
        let body = r#"{"GetPatientInfoResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":""}},"Patient_Id":"P1","Session_ID":"S1"}}"#;
        let reply = decode_envelope::<PatientInfo>(body).unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("S1"));
        assert_eq!(reply.payload.patient_id.as_deref(), Some("P1"));
    }
}
