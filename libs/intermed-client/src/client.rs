//! Session-scoped portal client

use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::{Error, Result};
use crate::headers::{browser_headers, parse_set_cookie, SESSION_COOKIE};
use crate::html::extract_body_text;
use crate::identity::{ClientIdentity, SessionState};
use crate::models::{
    decode_envelope, decode_plain, AppointmentConfirmation, BookedRecord,
    CreateAppointmentRequest, Facility, PatientInfo, PatientInfoRequest, RecordFilter, Reply,
    RequestBody, ResourceInfo, ResourceInfoRequest, ResponsePayload, ScheduleInfo,
    ScheduleInfoRequest, ScheduleQuery, ScheduleTable, ScheduleTableQuery, ScheduleTableRequest,
    ServiceSpecs, ServiceSpecsRequest, SessionDetails,
};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};

/// Client for one patient's session with the portal.
///
/// Calls are sequential: most of them need the session id issued by
/// [`login`](Self::login), and the booked-records lookup also needs the record
/// loaded by [`fetch_session_details`](Self::fetch_session_details). Every
/// operation takes `&mut self`, so a client cannot be driven concurrently.
///
/// ```rust,no_run
/// use intermed_client::{ClientConfig, ClientIdentity, SessionClient};
///
/// # async fn example() -> intermed_client::Result<()> {
/// let identity = ClientIdentity::new("Имя", "Фамилия", "Отчество", "2000-01-01", "7690299770000000");
/// let mut client = SessionClient::new(identity, ClientConfig::default())?;
/// client.login().await?;
/// let facilities = client.get_facilities().await?;
/// # Ok(())
/// # }
/// ```
pub struct SessionClient<T = HttpTransport> {
    identity: ClientIdentity,
    config: ClientConfig,
    base_url: Url,
    transport: T,
    state: SessionState,
    cookie: Option<String>,
}

impl SessionClient<HttpTransport> {
    /// Create a client with a reqwest transport built from `config`.
    pub fn new(identity: ClientIdentity, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(identity, config, transport)
    }
}

impl<T: Transport> SessionClient<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(identity: ClientIdentity, config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;
        Ok(Self {
            identity,
            config,
            base_url,
            transport,
            state: SessionState::default(),
            cookie: None,
        })
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.state
    }

    pub fn session_id(&self) -> Option<&str> {
        self.state.session_id.as_deref()
    }

    pub fn patient_id(&self) -> Option<&str> {
        self.state.patient_id.as_deref()
    }

    pub fn session_details(&self) -> Option<&SessionDetails> {
        self.state.details.as_ref()
    }

    /// Latest `JSESSIONID` the portal set.
    pub fn session_cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Open a session for the configured patient.
    ///
    /// Fetches the portal root for its `JSESSIONID` cookie, then posts the
    /// patient identity to `findPatient`. On success the returned session and
    /// patient ids replace the held session state. A non-zero error code from
    /// the service is returned as [`Error::Remote`] and leaves no session held.
    pub async fn login(&mut self) -> Result<Reply<PatientInfo>> {
        self.state = SessionState::default();

        let root = Endpoint::PortalRoot.url(&self.base_url)?;
        self.send(Method::Get, root, None).await?;

        let request = PatientInfoRequest {
            patient_data: self
                .identity
                .patient_data(Some(self.config.record_source.as_str())),
        };
        let body = self
            .call(Endpoint::FindPatient, Some(request.to_wire()?), &[])
            .await?;
        let reply = decode_envelope::<PatientInfo>(&body)?.into_result(Endpoint::FindPatient.name())?;

        let session_id = reply
            .session_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                Error::decode(
                    PatientInfo::KEY,
                    &body,
                    serde::de::Error::missing_field("Session_ID"),
                )
            })?;

        tracing::info!(
            session_id = %session_id,
            patient_id = reply.payload.patient_id.as_deref().unwrap_or(""),
            "Logged in to portal"
        );

        self.state = SessionState {
            session_id: Some(session_id),
            patient_id: reply.payload.patient_id.clone(),
            details: None,
        };
        Ok(reply)
    }

    /// Medical organisations the patient can book with.
    pub async fn get_facilities(&mut self) -> Result<Vec<Facility>> {
        let session_id = self.require_session()?.to_string();
        let body = self
            .call(
                Endpoint::AvailableFacilities,
                None,
                &[("sessionID", session_id)],
            )
            .await?;
        decode_plain(Endpoint::AvailableFacilities.name(), &body)
    }

    /// Load the extended session record. It replaces any previously held
    /// record, and its `sessionId` becomes the session id for later calls.
    pub async fn fetch_session_details(&mut self) -> Result<SessionDetails> {
        let session_id = self.require_session()?.to_string();
        let body = self
            .call(Endpoint::Session, None, &[("sessionId", session_id)])
            .await?;
        let details: SessionDetails = decode_plain(Endpoint::Session.name(), &body)?;

        if details.session_id.is_empty() {
            tracing::warn!("Session record carries no session id, keeping the current one");
        } else {
            tracing::info!(session_id = %details.session_id, "Session refreshed");
            self.state.session_id = Some(details.session_id.clone());
        }
        self.state.details = Some(details.clone());
        Ok(details)
    }

    /// Specialties offered by an organisation.
    ///
    /// `organization_oid` is the facility's `oid`, `organization_id` its
    /// `id_mo`. The endpoint does not take a session id.
    pub async fn find_specialties(
        &mut self,
        organization_oid: &str,
        organization_id: &str,
    ) -> Result<Reply<ServiceSpecs>> {
        let request = ServiceSpecsRequest {
            mo_id: organization_oid.to_string(),
            reg_id: organization_id.to_string(),
        };
        self.call_envelope(Endpoint::FindSpecialties, &request).await
    }

    /// Doctors and other resources for a specialty, within the held session.
    pub async fn find_resources(&mut self, specialty_id: &str) -> Result<Reply<ResourceInfo>> {
        let session_id = self.require_session()?.to_string();
        self.find_resources_with_session(specialty_id, &session_id)
            .await
    }

    /// Doctors and other resources for a specialty, within an explicit session.
    pub async fn find_resources_with_session(
        &mut self,
        specialty_id: &str,
        session_id: &str,
    ) -> Result<Reply<ResourceInfo>> {
        if session_id.is_empty() {
            return Err(Error::NotLoggedIn);
        }
        let request = ResourceInfoRequest {
            record_source: self.config.record_source.clone(),
            service_spec_id: specialty_id.to_string(),
            session_id: session_id.to_string(),
        };
        self.call_envelope(Endpoint::FindResources, &request).await
    }

    /// Free slots of one resource within a date range.
    pub async fn get_schedule(&mut self, query: &ScheduleQuery) -> Result<Reply<ScheduleInfo>> {
        let session_id = self.require_session()?.to_string();
        let request =
            ScheduleInfoRequest::from_query(query, &self.config.record_source, &session_id);
        self.call_envelope(Endpoint::FindSchedules, &request).await
    }

    /// Per-doctor availability table of an organisation.
    pub async fn get_schedule_table(
        &mut self,
        query: &ScheduleTableQuery,
    ) -> Result<Reply<ScheduleTable>> {
        let request =
            ScheduleTableRequest::from_query(query, &self.config.schedule_table_record_source);
        self.call_envelope(Endpoint::FindSchedulesTable, &request)
            .await
    }

    /// Appointments the patient already holds.
    ///
    /// Needs the referral registry id and insured-person code from
    /// [`fetch_session_details`](Self::fetch_session_details).
    pub async fn get_booked_records(&mut self, filter: &RecordFilter) -> Result<Vec<BookedRecord>> {
        self.require_session()?;
        let details = self
            .state
            .details
            .as_ref()
            .ok_or(Error::SessionDetailsMissing)?;
        let query = filter.query_pairs(&details.rri, &details.erz_code);

        let body = self.call(Endpoint::RecordsWithErz, None, &query).await?;
        decode_plain(Endpoint::RecordsWithErz.name(), &body)
    }

    /// Book a slot returned by [`get_schedule`](Self::get_schedule).
    pub async fn create_appointment(&mut self, slot_id: &str) -> Result<Reply<AppointmentConfirmation>> {
        let session_id = self.require_session()?.to_string();
        let request = CreateAppointmentRequest {
            patient_data: self.identity.patient_data(None),
            session_id,
            slot_id: slot_id.to_string(),
        };
        self.call_envelope(Endpoint::CreateAppointment, &request)
            .await
    }

    /// Send one request with the portal's browser headers and session cookie,
    /// and return the JSON text extracted from the (possibly HTML-wrapped)
    /// response body.
    pub async fn do_request(
        &mut self,
        method: Method,
        mut url: Url,
        body: Option<String>,
        query: &[(&str, String)],
    ) -> Result<String> {
        if !query.is_empty() {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let response = self.send(method, url.clone(), body).await?;
        if !response.is_success() {
            return Err(Error::HttpStatus {
                status: response.status,
                url: url.to_string(),
            });
        }

        let text = extract_body_text(&response.body);
        tracing::debug!(
            url = %url,
            raw_len = response.body.len(),
            extracted_len = text.len(),
            "Extracted response payload"
        );
        Ok(text)
    }

    async fn call(
        &mut self,
        endpoint: Endpoint,
        body: Option<String>,
        query: &[(&str, String)],
    ) -> Result<String> {
        let url = endpoint.url(&self.base_url)?;
        self.do_request(endpoint.method(), url, body, query).await
    }

    /// POST an enveloped request, check the reply's error code and pick up a
    /// refreshed session id.
    async fn call_envelope<R, P>(&mut self, endpoint: Endpoint, request: &R) -> Result<Reply<P>>
    where
        R: RequestBody + Sync,
        P: ResponsePayload,
    {
        let body = self.call(endpoint, Some(request.to_wire()?), &[]).await?;
        let reply = decode_envelope::<P>(&body)?.into_result(endpoint.name())?;

        if let Some(id) = reply.session_id.as_deref().filter(|id| !id.is_empty()) {
            if self.state.session_id.as_deref() != Some(id) {
                tracing::debug!(endpoint = endpoint.name(), session_id = id, "Session id rotated");
                self.state.session_id = Some(id.to_string());
            }
        }
        Ok(reply)
    }

    /// Send with browser headers, bounded by the request timeout.
    ///
    /// Transports without a cookie store get the held `JSESSIONID` as an
    /// explicit header. Every response's `Set-Cookie` refreshes it.
    async fn send(&mut self, method: Method, url: Url, body: Option<String>) -> Result<HttpResponse> {
        let mut headers = browser_headers(&self.base_url, &self.config.user_agent)?;
        if !self.transport.stores_cookies() {
            if let Some(cookie) = &self.cookie {
                headers.push(("Cookie".to_string(), format!("{}={}", SESSION_COOKIE, cookie)));
            }
        }

        tracing::debug!(
            method = method.as_str(),
            url = %url,
            body_len = body.as_ref().map(String::len).unwrap_or(0),
            "Sending portal request"
        );

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers,
            body,
        };
        let response =
            match tokio::time::timeout(self.config.request_timeout(), self.transport.send(request)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(Error::Timeout {
                        url: url.to_string(),
                    })
                }
            };

        if let Some(cookie) = response
            .header_values("set-cookie")
            .find_map(|h| parse_set_cookie(h, SESSION_COOKIE))
        {
            if self.cookie.as_deref() != Some(cookie.as_str()) {
                tracing::debug!(url = %url, "Portal session cookie set");
                self.cookie = Some(cookie);
            }
        }
        Ok(response)
    }

    fn require_session(&self) -> Result<&str> {
        match self.state.session_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(Error::NotLoggedIn),
        }
    }
}
