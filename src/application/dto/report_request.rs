use crate::reporting::domain::{Gav, ScmLocator};

/// What a report is generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSubject {
    /// A single artifact and everything it depends on
    Gav(Gav),
    /// A whole project stored in source control
    Scm(ScmLocator),
}

/// ReportRequest - Internal request DTO for the report tree use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub subject: ReportSubject,
}

impl ReportRequest {
    pub fn for_gav(gav: Gav) -> Self {
        Self {
            subject: ReportSubject::Gav(gav),
        }
    }

    pub fn for_scm(scm: ScmLocator) -> Self {
        Self {
            subject: ReportSubject::Scm(scm),
        }
    }
}

/// AdvancedReportRequest - Internal request DTO for the advanced report use case
#[derive(Debug, Clone)]
pub struct AdvancedReportRequest {
    /// Project whose graph is classified and whose sources define the modules
    pub scm: ScmLocator,
}

impl AdvancedReportRequest {
    pub fn new(scm: ScmLocator) -> Self {
        Self { scm }
    }
}

/// LookupRequest - Internal request DTO for batch lookups
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Coordinates to look up, in output order
    pub gavs: Vec<Gav>,
    /// Upper bound on lookups in flight
    pub max_concurrent: usize,
}

impl LookupRequest {
    pub fn new(gavs: Vec<Gav>, max_concurrent: usize) -> Self {
        Self {
            gavs,
            max_concurrent,
        }
    }
}
