//! Appointments already booked by the patient (`getRecordsWithErz`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;
use super::remote_id::RemoteId;

/// Which booked records to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub accepted: bool,
    pub declined: bool,
    pub deleted: bool,
    /// Sent empty when `None`
    pub begin_date: Option<NaiveDate>,
    /// Sent empty when `None`
    pub end_date: Option<NaiveDate>,
}

impl RecordFilter {
    /// Active bookings from `today` on.
    pub fn upcoming(today: NaiveDate) -> Self {
        Self {
            accepted: true,
            declined: false,
            deleted: false,
            begin_date: Some(today),
            end_date: None,
        }
    }

    /// Full history, including declined and deleted bookings.
    pub fn all() -> Self {
        Self {
            accepted: true,
            declined: true,
            deleted: true,
            begin_date: None,
            end_date: None,
        }
    }

    pub(crate) fn query_pairs(&self, rri: &str, erz_code: &str) -> Vec<(&'static str, String)> {
        let date = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        vec![
            ("rri", rri.to_string()),
            ("erzCode", erz_code.to_string()),
            ("accepted", self.accepted.to_string()),
            ("declined", self.declined.to_string()),
            ("deleted", self.deleted.to_string()),
            ("beginDate", date(self.begin_date)),
            ("endDate", date(self.end_date)),
        ]
    }
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::upcoming(chrono::Local::now().date_naive())
    }
}

/// One booked appointment. The endpoint answers with a bare array of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookedRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub book_mis_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cabinet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub canceled: bool,
    pub creator: Option<RemoteId>,
    #[serde(deserialize_with = "null_as_default")]
    pub depart_oid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doctor_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doctor_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub erz_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id_post: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inserted: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub middle_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mo_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mo_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_post: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number_refferal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub record_source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reject_reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slot_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visit_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visit_time: String,
}
