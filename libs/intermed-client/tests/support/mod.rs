//! Scripted in-memory transport for client tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use intermed_client::{
    ClientConfig, ClientIdentity, Error, HttpRequest, HttpResponse, Result, SessionClient,
    Transport,
};

pub enum Scripted {
    Respond(HttpResponse),
    ConnectionRefused,
    Hang,
}

#[derive(Default)]
struct Inner {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
    /// Answer every unscripted request with a connection error
    fail_when_empty: Mutex<bool>,
    /// Claim to keep cookies like a browser jar
    cookie_store: bool,
}

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Arc<Inner>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie_store() -> Self {
        Self {
            inner: Arc::new(Inner {
                cookie_store: true,
                ..Inner::default()
            }),
        }
    }

    pub fn push(&self, step: Scripted) -> &Self {
        self.inner.script.lock().unwrap().push_back(step);
        self
    }

    pub fn respond(&self, response: HttpResponse) -> &Self {
        self.push(Scripted::Respond(response))
    }

    pub fn fail_from_now_on(&self) {
        self.inner.script.lock().unwrap().clear();
        *self.inner.fail_when_empty.lock().unwrap() = true;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.inner.requests.lock().unwrap().push(request);
        let step = self.inner.script.lock().unwrap().pop_front();
        let fail_when_empty = *self.inner.fail_when_empty.lock().unwrap();
        match step {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::ConnectionRefused) => {
                Err(Error::Transport("connection refused".to_string()))
            }
            Some(Scripted::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(Error::Transport("hung request woke up".to_string()))
            }
            None if fail_when_empty => {
                Err(Error::Transport("connection refused".to_string()))
            }
            None => Err(Error::Transport("no scripted response left".to_string())),
        }
    }

    fn stores_cookies(&self) -> bool {
        self.inner.cookie_store
    }
}

pub fn identity() -> ClientIdentity {
    ClientIdentity::new(
        "Имя",
        "Фамилия",
        "Отчество",
        "2000-01-01",
        "7690299770000000",
    )
}

pub fn client(transport: &ScriptedTransport) -> SessionClient<ScriptedTransport> {
    SessionClient::with_transport(identity(), ClientConfig::default(), transport.clone())
        .expect("default config is valid")
}

/// Wrap a JSON payload the way the portal does.
pub fn html(json: &str) -> String {
    format!(
        "<html><head><meta charset=\"utf-8\"></head><body>{}</body></html>",
        json
    )
}

pub fn ok(body: impl Into<String>) -> HttpResponse {
    HttpResponse {
        status: 200,
        headers: vec![("content-type".to_string(), "text/html;charset=UTF-8".to_string())],
        body: body.into(),
    }
}

pub fn status(code: u16) -> HttpResponse {
    HttpResponse {
        status: code,
        headers: Vec::new(),
        body: "<html><body>Service Unavailable</body></html>".to_string(),
    }
}

pub fn portal_root(jsessionid: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        headers: vec![(
            "set-cookie".to_string(),
            format!("JSESSIONID={}; Path=/; Secure; HttpOnly", jsessionid),
        )],
        body: "<html><body>portal</body></html>".to_string(),
    }
}

pub fn login_reply(session_id: &str, patient_id: &str) -> String {
    html(&format!(
        r#"{{"GetPatientInfoResponse":{{"Error":{{"errorDetail":{{"errorCode":0,"errorMessage":""}}}},"Patient_Id":"{}","Session_ID":"{}"}}}}"#,
        patient_id, session_id
    ))
}

pub fn session_record(session_id: &str) -> String {
    html(&format!(
        r#"{{"erzCode":"ERZ-1","rri":"RRI-9","rriOid":"1.2.4","moId":"10304","inserted":1583020800000,"patientBirthdate":946674000000,"sessionId":"{}"}}"#,
        session_id
    ))
}

/// Client that has completed login with session `S1`, cookie `abc`.
pub async fn logged_in(transport: &ScriptedTransport) -> SessionClient<ScriptedTransport> {
    transport
        .respond(portal_root("abc"))
        .respond(ok(login_reply("S1", "P1")));
    let mut client = client(transport);
    client.login().await.expect("login succeeds");
    client
}

pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body"))
        .expect("request body is JSON")
}

pub fn query_value(request: &HttpRequest, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
