//! Extended session record (`getSession`).

use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

/// Everything the portal remembers about the current session: chosen
/// doctor, visit window, referral codes. Returned as a bare camelCase object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub attachment_mo_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub depart_oid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doctor: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_time_range: String,
    /// Insured-person registry code, used to look up booked records
    #[serde(deserialize_with = "null_as_default")]
    pub erz_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id_post: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inserted: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mo_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number_refferal: String,
    /// Epoch milliseconds
    #[serde(deserialize_with = "null_as_default")]
    pub patient_birthdate: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_middle_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_oms: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_passport: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_snils: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub record_source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_id: String,
    /// Referral registry id, used to look up booked records
    #[serde(deserialize_with = "null_as_default")]
    pub rri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rri_oid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_spec_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slot_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_time_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visit_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visit_time: String,
}
