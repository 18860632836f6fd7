//! Medical organisations available for booking (`getAvaliableMos`).

use serde::{Deserialize, Serialize};

use super::lenient::null_as_default;

/// One medical organisation. The endpoint answers with a bare array of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facility {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "addressTitle", deserialize_with = "null_as_default")]
    pub address_title: String,
    #[serde(rename = "address_wsdl", deserialize_with = "null_as_default")]
    pub address_wsdl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub always: String,
    #[serde(rename = "codeTfoms", deserialize_with = "null_as_default")]
    pub code_tfoms: String,
    /// Same code under its legacy key
    #[serde(rename = "code_tfoms", deserialize_with = "null_as_default")]
    pub code_tfoms_legacy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Registry id, sent as `Reg_Id` when listing specialties
    #[serde(rename = "id_mo", deserialize_with = "null_as_default")]
    pub id_mo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub irrelevant: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub never: String,
    /// Organisation OID, sent as `MO_Id` when listing specialties
    #[serde(deserialize_with = "null_as_default")]
    pub oid: String,
    #[serde(rename = "oldOid", deserialize_with = "null_as_default")]
    pub old_oid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refferal: String,
    #[serde(deserialize_with = "null_as_default")]
    pub site: String,
    #[serde(deserialize_with = "null_as_default")]
    pub territory: String,
}
