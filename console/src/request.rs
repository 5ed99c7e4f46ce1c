use error_stack::Report;
use kernel::prelude::entity::VehicleStatus;
use kernel::KernelError;

/// Which report the binary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRequest {
    Vehicles(Option<VehicleStatus>),
    Customers,
    History,
    All,
}

impl Default for ReportRequest {
    fn default() -> Self {
        ReportRequest::Vehicles(None)
    }
}

impl ReportRequest {
    pub fn parse<I, S>(args: I) -> error_stack::Result<Self, KernelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args.into_iter().collect::<Vec<_>>();
        let words = args.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
        match words.as_slice() {
            [] | ["vehicles"] => Ok(ReportRequest::Vehicles(None)),
            ["vehicles", status] => Ok(ReportRequest::Vehicles(Some(status.parse()?))),
            ["customers"] => Ok(ReportRequest::Customers),
            ["history"] => Ok(ReportRequest::History),
            ["all"] => Ok(ReportRequest::All),
            _ => Err(Report::new(KernelError::InvalidArgument).attach_printable(format!(
                "usage: rental [vehicles [STATUS] | customers | history | all], got {words:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::VehicleStatus;
    use kernel::KernelError;

    use crate::request::ReportRequest;

    #[test]
    fn parses_known_reports() -> error_stack::Result<(), KernelError> {
        assert_eq!(ReportRequest::parse(Vec::<String>::new())?, ReportRequest::default());
        assert_eq!(
            ReportRequest::parse(["vehicles", "rented"])?,
            ReportRequest::Vehicles(Some(VehicleStatus::Rented))
        );
        assert_eq!(ReportRequest::parse(["history"])?, ReportRequest::History);
        assert_eq!(ReportRequest::parse(["all"])?, ReportRequest::All);
        Ok(())
    }

    #[test]
    fn rejects_unknown_arguments() {
        for args in [vec!["fleet"], vec!["vehicles", "parked"], vec!["customers", "1"]] {
            let error = ReportRequest::parse(args).expect_err("invalid arguments");
            assert_eq!(error.current_context(), &KernelError::InvalidArgument);
        }
    }
}
