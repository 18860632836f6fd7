//! Wire shapes of the portal endpoints

pub mod appointment;
pub mod envelope;
pub mod facility;
pub mod lenient;
pub mod patient;
pub mod record;
pub mod remote_id;
pub mod resource;
pub mod schedule;
pub mod session;
pub mod specialty;

pub use appointment::{AppointmentConfirmation, CreateAppointmentRequest};
pub use envelope::{
    decode_envelope, decode_plain, ErrorDetail, RemoteError, Reply, RequestBody, ResponsePayload,
};
pub use facility::Facility;
pub use patient::{PatientData, PatientInfo, PatientInfoRequest};
pub use record::{BookedRecord, RecordFilter};
pub use remote_id::RemoteId;
pub use resource::{Resource, ResourceInfo, ResourceInfoRequest};
pub use schedule::{
    DateRecord, ScheduleInfo, ScheduleInfoRequest, ScheduleQuery, ScheduleRecord, ScheduleTable,
    ScheduleTableQuery, ScheduleTableRequest, Slot,
};
pub use session::SessionDetails;
pub use specialty::{ServiceSpec, ServiceSpecs, ServiceSpecsRequest};
