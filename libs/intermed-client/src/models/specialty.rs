//! Specialties offered by an organisation (`findSpecs`).

use serde::{Deserialize, Serialize};

use super::envelope::{RequestBody, ResponsePayload};
use super::lenient::null_as_default;
use super::remote_id::RemoteId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpecsRequest {
    /// Organisation OID
    #[serde(rename = "MO_Id")]
    pub mo_id: String,
    /// Organisation registry id
    #[serde(rename = "Reg_Id")]
    pub reg_id: String,
}

impl RequestBody for ServiceSpecsRequest {
    const KEY: &'static str = "GetServiceSpecsInfoRequest";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpecs {
    #[serde(rename = "ListServiceSpecs", default)]
    pub list: ServiceSpecList,
}

impl ResponsePayload for ServiceSpecs {
    const KEY: &'static str = "GetServiceSpecsInfoResponse";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpecList {
    #[serde(rename = "ServiceSpec", default)]
    pub items: Vec<ServiceSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(rename = "ServiceSpec_Id")]
    pub id: RemoteId,
    #[serde(rename = "ServiceSpec_Name", default, deserialize_with = "null_as_default")]
    pub name: String,
}
