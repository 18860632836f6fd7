//! intermed76 portal client
//!
//! Async client for the Yaroslavl region appointment portal. A
//! [`SessionClient`] looks the patient up by personal data, holds the
//! session id the portal issues, and runs the lookups that depend on it:
//! facilities, specialties, doctors, free slots, existing bookings.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use intermed_client::{ClientConfig, ClientIdentity, ScheduleQuery, SessionClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let identity = ClientIdentity::new("Имя", "Фамилия", "Отчество", "2000-01-01", "7690299770000000");
//! let mut client = SessionClient::new(identity, ClientConfig::load(None)?)?;
//!
//! client.login().await?;
//! client.fetch_session_details().await?;
//!
//! let specs = client.find_specialties("1.2.643.5.1.13.3.25.76.3", "10304").await?;
//! let resources = client.find_resources("22").await?;
//! if let Some(doctor) = resources.payload.list.items.first() {
//!     let query = ScheduleQuery::new(
//!         doctor.id.canonical(),
//!         NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2020, 4, 11).unwrap(),
//!     );
//!     let schedule = client.get_schedule(&query).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
pub mod client;
pub mod config;
pub mod deadline;
pub mod endpoints;
pub mod error;
pub mod headers;
pub mod html;
pub mod identity;
pub mod models;
pub mod transport;

pub use client::SessionClient;
pub use config::ClientConfig;
pub use deadline::within;
pub use endpoints::Endpoint;
pub use error::{Error, Result};
pub use identity::{ClientIdentity, SessionState};
pub use models::{
    BookedRecord, Facility, RecordFilter, RemoteId, Reply, ScheduleQuery, ScheduleTableQuery,
    SessionDetails, Slot,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
