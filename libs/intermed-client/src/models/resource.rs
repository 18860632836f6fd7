//! Doctors and other bookable resources for a specialty (`findResources`).

use serde::{Deserialize, Serialize};

use super::envelope::{RequestBody, ResponsePayload};
use super::lenient::null_as_default;
use super::remote_id::RemoteId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfoRequest {
    #[serde(rename = "Record_Source")]
    pub record_source: String,
    #[serde(rename = "ServiceSpec_Id")]
    pub service_spec_id: String,
    #[serde(rename = "Session_ID")]
    pub session_id: String,
}

impl RequestBody for ResourceInfoRequest {
    const KEY: &'static str = "GetResourceInfoRequest";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceInfo {
    #[serde(rename = "ListResource", default)]
    pub list: ResourceList,
}

impl ResponsePayload for ResourceInfo {
    const KEY: &'static str = "GetResourceInfoResponse";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(rename = "Resource", default)]
    pub items: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "Resource_Id")]
    pub id: RemoteId,
    #[serde(rename = "Resource_Name", default, deserialize_with = "null_as_default")]
    pub name: String,
}
