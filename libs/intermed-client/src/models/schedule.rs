//! Free slots of one resource (`findSchedules`) and the per-doctor
//! availability table of an organisation (`findSchedulesTable`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::envelope::{RequestBody, ResponsePayload};
use super::lenient::null_as_default;
use super::remote_id::RemoteId;

pub const DAY_START: &str = "00:00:00.000+03:00";
pub const DAY_END: &str = "23:59:00.000+03:00";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which slots to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub resource_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleQuery {
    /// Whole days from `start_date` through `end_date`.
    pub fn new(resource_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            resource_id: resource_id.into(),
            start_date,
            end_date,
            start_time: DAY_START.to_string(),
            end_time: DAY_END.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInfoRequest {
    #[serde(rename = "EndDateRange")]
    pub end_date_range: String,
    #[serde(rename = "EndTimeRange")]
    pub end_time_range: String,
    #[serde(rename = "Record_Source")]
    pub record_source: String,
    #[serde(rename = "Resource_Id")]
    pub resource_id: String,
    #[serde(rename = "Session_ID")]
    pub session_id: String,
    #[serde(rename = "StartDateRange")]
    pub start_date_range: String,
    #[serde(rename = "StartTimeRange")]
    pub start_time_range: String,
}

impl RequestBody for ScheduleInfoRequest {
    const KEY: &'static str = "GetScheduleInfoRequest";
}

impl ScheduleInfoRequest {
    pub fn from_query(query: &ScheduleQuery, record_source: &str, session_id: &str) -> Self {
        Self {
            end_date_range: query.end_date.format(DATE_FORMAT).to_string(),
            end_time_range: query.end_time.clone(),
            record_source: record_source.to_string(),
            resource_id: query.resource_id.clone(),
            session_id: session_id.to_string(),
            start_date_range: query.start_date.format(DATE_FORMAT).to_string(),
            start_time_range: query.start_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInfo {
    #[serde(rename = "Schedule", default)]
    pub schedule: Schedule,
}

impl ResponsePayload for ScheduleInfo {
    const KEY: &'static str = "GetScheduleInfoResponse";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "Slots", default)]
    pub slots: Vec<Slot>,
}

/// A bookable time unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "Slot_Id")]
    pub slot_id: String,
    #[serde(rename = "VisitTime", default, deserialize_with = "null_as_default")]
    pub visit_time: String,
}

/// Which part of the availability table to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTableQuery {
    /// Organisation registry id (`id_mo` of a facility)
    pub reg_id: String,
    /// Specialty codes, e.g. `"22"`
    pub specialties: Vec<String>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecCode {
    #[serde(rename = "Spec")]
    pub spec: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTableRequest {
    #[serde(rename = "DateFrom")]
    pub date_from: String,
    #[serde(rename = "DateTo")]
    pub date_to: String,
    #[serde(rename = "ListSpecs")]
    pub list_specs: Vec<SpecCode>,
    #[serde(rename = "RecordSource")]
    pub record_source: String,
    #[serde(rename = "RegId")]
    pub reg_id: String,
}

impl RequestBody for ScheduleTableRequest {
    const KEY: &'static str = "GetScheduleTableRequest";
}

impl ScheduleTableRequest {
    pub fn from_query(query: &ScheduleTableQuery, record_source: &str) -> Self {
        Self {
            date_from: query.date_from.format(DATE_FORMAT).to_string(),
            date_to: query.date_to.format(DATE_FORMAT).to_string(),
            list_specs: query
                .specialties
                .iter()
                .map(|spec| SpecCode { spec: spec.clone() })
                .collect(),
            record_source: record_source.to_string(),
            reg_id: query.reg_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTable {
    #[serde(rename = "ListScheduleRecord", default)]
    pub list: ScheduleRecordList,
}

impl ResponsePayload for ScheduleTable {
    const KEY: &'static str = "GetScheduleTableResponse";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecordList {
    #[serde(rename = "ScheduleRecord", default)]
    pub records: Vec<ScheduleRecord>,
}

/// Availability of one doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "Area", default, deserialize_with = "null_as_default")]
    pub area: String,
    #[serde(rename = "Cabinet", default)]
    pub cabinet: Option<i64>,
    #[serde(rename = "DoctorId")]
    pub doctor_id: RemoteId,
    #[serde(rename = "DoctorName", default, deserialize_with = "null_as_default")]
    pub doctor_name: String,
    #[serde(rename = "DoctorSpec", default)]
    pub doctor_spec: Option<i64>,
    #[serde(rename = "ListDateRecords", default)]
    pub dates: DateRecordList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecordList {
    #[serde(rename = "DateRecords", default)]
    pub items: Vec<DateRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    #[serde(rename = "AllRecords", default, deserialize_with = "null_as_default")]
    pub all_records: i64,
    #[serde(rename = "Day", default, deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(rename = "FreeRecords", default, deserialize_with = "null_as_default")]
    pub free_records: i64,
    #[serde(rename = "Time", default, deserialize_with = "null_as_default")]
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::envelope::decode_envelope;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schedule_request_from_query() {
        let query = ScheduleQuery::new("04765670894", date(2020, 3, 1), date(2020, 4, 11));
        let request = ScheduleInfoRequest::from_query(&query, "intermed", "S1");

        let wire: serde_json::Value = serde_json::from_str(&request.to_wire().unwrap()).unwrap();
        let inner = &wire["GetScheduleInfoRequest"];
        assert_eq!(inner["StartDateRange"], "2020-03-01");
        assert_eq!(inner["EndDateRange"], "2020-04-11");
        assert_eq!(inner["StartTimeRange"], DAY_START);
        assert_eq!(inner["EndTimeRange"], DAY_END);
        assert_eq!(inner["Resource_Id"], "04765670894");
        assert_eq!(inner["Session_ID"], "S1");
        assert_eq!(inner["Record_Source"], "intermed");
    }

    #[test]
    fn test_decodes_slots() {
        let body = r#"{"GetScheduleInfoResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":""}},"Schedule":{"Slots":[{"Slot_Id":"d8ffda1b-91cb-4917-acca-1adb012f01ad","VisitTime":"2020-03-02T08:00:00.000+03:00"}]},"Session_ID":"S1"}}"#;
        let reply = decode_envelope::<ScheduleInfo>(body).unwrap();
        let slots = &reply.payload.schedule.slots;
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].slot_id, "d8ffda1b-91cb-4917-acca-1adb012f01ad");
        assert_eq!(slots[0].visit_time, "2020-03-02T08:00:00.000+03:00");
    }

    #[test]
    fn test_table_request_from_query() {
        let query = ScheduleTableQuery {
            reg_id: "10304".to_string(),
            specialties: vec!["22".to_string()],
            date_from: date(2020, 3, 1),
            date_to: date(2020, 3, 30),
        };
        let wire = ScheduleTableRequest::from_query(&query, "epgu").to_wire().unwrap();
        assert_eq!(
            wire,
            r#"{"GetScheduleTableRequest":{"DateFrom":"2020-03-01","DateTo":"2020-03-30","ListSpecs":[{"Spec":"22"}],"RecordSource":"epgu","RegId":"10304"}}"#
        );
    }

    #[test]
    fn test_decodes_table_with_mixed_doctor_ids() {
        let body = r#"{"GetScheduleTableResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":""}},"ListScheduleRecord":{"ScheduleRecord":[{"Area":"1","Cabinet":214,"DoctorId":"105","DoctorName":"Иванов И.И.","DoctorSpec":22,"ListDateRecords":{"DateRecords":[{"AllRecords":20,"Day":"2020-03-02","FreeRecords":4,"Time":"08:00-14:00"}]}},{"Area":"","DoctorId":106,"DoctorName":"Петров П.П.","DoctorSpec":22}]}}}"#;
        let reply = decode_envelope::<ScheduleTable>(body).unwrap();
        let records = &reply.payload.list.records;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].doctor_id.canonical(), "105");
        assert_eq!(records[0].cabinet, Some(214));
        assert_eq!(records[0].dates.items[0].free_records, 4);
        assert_eq!(records[0].dates.items[0].day, "2020-03-02");
        assert_eq!(records[1].doctor_id.canonical(), "106");
        assert_eq!(records[1].cabinet, None);
        assert!(records[1].dates.items.is_empty());
        assert!(reply.session_id.is_none());
    }

    #[test]
    fn test_null_names_in_table() {
        let body = r#"{"GetScheduleTableResponse":{"ListScheduleRecord":{"ScheduleRecord":[{"Area":null,"DoctorId":"105","DoctorName":null,"ListDateRecords":{"DateRecords":[{"Day":"2020-03-02","FreeRecords":null,"Time":null}]}}]}}}"#;
        let reply = decode_envelope::<ScheduleTable>(body).unwrap();
        let record = &reply.payload.list.records[0];
        assert_eq!(record.area, "");
        assert_eq!(record.doctor_name, "");
        assert_eq!(record.dates.items[0].free_records, 0);
        assert_eq!(record.dates.items[0].time, "");
    }
}
