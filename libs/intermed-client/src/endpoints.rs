//! Fixed endpoint table of the portal

use url::Url;

use crate::error::Result;
use crate::transport::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Portal root, fetched only for its session cookie
    PortalRoot,
    FindPatient,
    AvailableFacilities,
    Session,
    FindSpecialties,
    FindResources,
    FindSchedules,
    FindSchedulesTable,
    RecordsWithErz,
    CreateAppointment,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Endpoint::PortalRoot
            | Endpoint::AvailableFacilities
            | Endpoint::Session
            | Endpoint::RecordsWithErz => Method::Get,
            Endpoint::FindPatient
            | Endpoint::FindSpecialties
            | Endpoint::FindResources
            | Endpoint::FindSchedules
            | Endpoint::FindSchedulesTable
            | Endpoint::CreateAppointment => Method::Post,
        }
    }

    /// Path relative to the portal root
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::PortalRoot => "",
            Endpoint::FindPatient => "intermed/findPatient",
            // sic: the portal spells it this way
            Endpoint::AvailableFacilities => "intermed/getAvaliableMos",
            Endpoint::Session => "intermed/getSession",
            Endpoint::FindSpecialties => "intermed/findSpecs",
            Endpoint::FindResources => "intermed/findResources",
            Endpoint::FindSchedules => "intermed/findSchedules",
            Endpoint::FindSchedulesTable => "intermed/findSchedulesTable",
            Endpoint::RecordsWithErz => "intermed/getRecordsWithErz",
            Endpoint::CreateAppointment => "intermed/createAppointment",
        }
    }

    /// Short name used in logs and [`Error::Remote`](crate::Error::Remote)
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::PortalRoot => "portalRoot",
            _ => self.path().trim_start_matches("intermed/"),
        }
    }

    pub fn url(self, base: &Url) -> Result<Url> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(self.path())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_against_default_base() {
        let base = Url::parse("https://intermed76.ru").unwrap();
        assert_eq!(
            Endpoint::FindPatient.url(&base).unwrap().as_str(),
            "https://intermed76.ru/intermed/findPatient"
        );
        assert_eq!(
            Endpoint::PortalRoot.url(&base).unwrap().as_str(),
            "https://intermed76.ru/"
        );
        assert_eq!(
            Endpoint::AvailableFacilities.url(&base).unwrap().as_str(),
            "https://intermed76.ru/intermed/getAvaliableMos"
        );
    }

    #[test]
    fn test_base_with_path_prefix() {
        let base = Url::parse("http://localhost:9000/proxy").unwrap();
        assert_eq!(
            Endpoint::Session.url(&base).unwrap().as_str(),
            "http://localhost:9000/proxy/intermed/getSession"
        );
    }

    #[test]
    fn test_methods_and_names() {
        assert_eq!(Endpoint::RecordsWithErz.method(), Method::Get);
        assert_eq!(Endpoint::FindSchedulesTable.method(), Method::Post);
        assert_eq!(Endpoint::FindSpecialties.name(), "findSpecs");
        assert_eq!(Endpoint::PortalRoot.name(), "portalRoot");
    }
}
