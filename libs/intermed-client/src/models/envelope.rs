//! The request/response envelopes shared by the SOAP-style endpoints.
//!
//! Requests are wrapped in a single key naming the call
//! (`{"GetResourceInfoRequest": {...}}`); responses come back as
//! `{"GetResourceInfoResponse": {"Error": {"errorDetail": {...}}, "Session_ID": ..., ...}}`.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// A request body that travels inside a named wrapper object.
pub trait RequestBody: Serialize {
    /// Wrapper key, e.g. `GetPatientInfoRequest`
    const KEY: &'static str;

    /// `{KEY: self}`, fields in declaration order.
    fn to_wire(&self) -> Result<String>
    where
        Self: Sized,
    {
        serde_json::to_string(&Wrapped(self)).map_err(Error::Encode)
    }
}

struct Wrapped<'a, R>(&'a R);

impl<R: RequestBody> Serialize for Wrapped<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::KEY, self.0)?;
        map.end()
    }
}

/// The call-specific part of a response envelope.
pub trait ResponsePayload: DeserializeOwned {
    /// Wrapper key, e.g. `GetPatientInfoResponse`
    const KEY: &'static str;
}

/// `{"errorDetail": {"errorCode": 0, "errorMessage": ""}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(rename = "errorDetail", default)]
    pub error_detail: ErrorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "errorCode", default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(rename = "errorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Decoded response envelope: error block, refreshed session id and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply<P> {
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RemoteError>,
    #[serde(rename = "Session_ID", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Reply<P> {
    /// Error code reported by the service; absent counts as 0.
    pub fn error_code(&self) -> i64 {
        self.error
            .as_ref()
            .and_then(|e| e.error_detail.error_code)
            .unwrap_or(0)
    }

    pub fn error_message(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|e| e.error_detail.error_message.as_deref())
            .unwrap_or("")
    }

    pub fn is_success(&self) -> bool {
        self.error_code() == 0
    }

    /// Turn a non-zero error code into [`Error::Remote`].
    pub fn into_result(self, operation: &str) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        tracing::warn!(
            operation,
            code = self.error_code(),
            message = self.error_message(),
            "Remote service reported an error"
        );
        Err(Error::Remote {
            operation: operation.to_string(),
            code: self.error_code(),
            message: self.error_message().to_string(),
        })
    }
}

/// Decode `{"<P::KEY>": {...}}` into a [`Reply`].
pub fn decode_envelope<P: ResponsePayload>(body: &str) -> Result<Reply<P>> {
    let mut outer: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| Error::decode(P::KEY, body, e))?;

    let inner = outer.remove(P::KEY).ok_or_else(|| {
        Error::decode(
            P::KEY,
            body,
            serde::de::Error::custom(format!("missing `{}` envelope", P::KEY)),
        )
    })?;

    serde_json::from_value(inner).map_err(|e| Error::decode(P::KEY, body, e))
}

/// Decode an endpoint that answers with bare JSON (no envelope).
pub fn decode_plain<T: DeserializeOwned>(context: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::decode(context, body, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(rename = "Value", default)]
        value: Option<String>,
    }

    impl ResponsePayload for Sample {
        const KEY: &'static str = "SampleResponse";
    }

    #[derive(Serialize)]
    struct SampleRequest {
        #[serde(rename = "Value")]
        value: String,
    }

    impl RequestBody for SampleRequest {
        const KEY: &'static str = "SampleRequest";
    }

    #[test]
    fn test_request_is_wrapped_in_its_key() {
        let wire = SampleRequest {
            value: "x".to_string(),
        }
        .to_wire()
        .unwrap();
        assert_eq!(wire, r#"{"SampleRequest":{"Value":"x"}}"#);
    }

    #[derive(Serialize)]
    struct OrderedRequest {
        #[serde(rename = "Zulu")]
        zulu: u8,
        #[serde(rename = "Alpha")]
        alpha: u8,
    }

    impl RequestBody for OrderedRequest {
        const KEY: &'static str = "OrderedRequest";
    }

    #[test]
    fn test_request_keeps_field_order() {
        let wire = OrderedRequest { zulu: 1, alpha: 2 }.to_wire().unwrap();
        assert_eq!(wire, r#"{"OrderedRequest":{"Zulu":1,"Alpha":2}}"#);
    }

    #[test]
    fn test_decodes_success_envelope() {
        let body = r#"{"SampleResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":""}},"Session_ID":"S1","Value":"v"}}"#;
        let reply = decode_envelope::<Sample>(body).unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.session_id.as_deref(), Some("S1"));
        assert_eq!(reply.payload.value.as_deref(), Some("v"));
    }

    #[test]
    fn test_missing_error_block_is_success() {
        let reply = decode_envelope::<Sample>(r#"{"SampleResponse":{}}"#).unwrap();
        assert_eq!(reply.error_code(), 0);
        assert!(reply.into_result("sample").is_ok());
    }

    #[test]
    fn test_null_error_block_is_success() {
        let reply = decode_envelope::<Sample>(r#"{"SampleResponse":{"Error":null}}"#).unwrap();
        assert!(reply.is_success());
    }

    #[test]
    fn test_non_zero_code_becomes_remote_error() {
        let body = r#"{"SampleResponse":{"Error":{"errorDetail":{"errorCode":2,"errorMessage":"Пациент не найден"}}}}"#;
        let err = decode_envelope::<Sample>(body)
            .unwrap()
            .into_result("sample")
            .unwrap_err();
        match err {
            Error::Remote {
                operation,
                code,
                message,
            } => {
                assert_eq!(operation, "sample");
                assert_eq!(code, 2);
                assert_eq!(message, "Пациент не найден");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_envelope_key_keeps_body() {
        let body = r#"{"OtherResponse":{}}"#;
        let err = decode_envelope::<Sample>(body).unwrap_err();
        assert_eq!(err.body(), Some(body));
    }

    #[test]
    fn test_malformed_json_keeps_body() {
        let err = decode_plain::<Vec<String>>("records", "<html>oops").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert_eq!(err.body(), Some("<html>oops"));
    }
}
