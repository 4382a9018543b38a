//! Status assembly

use linksmith_core::error::LinkError;
use linksmith_core::report::ErrorReport;
use linksmith_core::types::{
    LinkRequest, LinkStatus, ProcessOutput, ResolvedDestination, STATUS_FAILED, STATUS_SUCCESS,
};

use crate::LinkResult;

/// Complete a pending status with the process outcome. A failed command
/// becomes `CommandFailed` carrying the rendered status.
pub fn assemble(
    mut status: LinkStatus,
    output: ProcessOutput,
    request: &LinkRequest,
    destination: &ResolvedDestination,
    report: &ErrorReport,
) -> LinkResult<LinkStatus> {
    let success = output.success();
    status.exit_code = output.exit_code;
    status.std_out = output.stdout;
    status.std_err = output.stderr;

    if success {
        status.status = STATUS_SUCCESS.to_string();
        status.link_created = Some(format!("{} ==> {}", request.name, destination.full_path));
        Ok(status)
    } else {
        status.status = STATUS_FAILED.to_string();
        Err(report.fail(
            "assemble",
            LinkError::CommandFailed {
                exit_code: status.exit_code,
                status: status.to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use linksmith_core::types::LinkType;

    fn fixtures() -> (LinkRequest, ResolvedDestination) {
        (
            LinkRequest {
                name: Utf8PathBuf::from("/work/out"),
                destination: Utf8PathBuf::from("../data"),
                link_type: LinkType::Junction,
            },
            ResolvedDestination {
                full_path: Utf8PathBuf::from("/data"),
                is_directory: true,
            },
        )
    }

    #[test]
    fn test_success_fills_link_created() {
        let (request, destination) = fixtures();
        let output = ProcessOutput::from_raw(b"Junction created for out <<===>> data\n", b"", Some(0));
        let status = assemble(
            LinkStatus::pending("mklink /J out data"),
            output,
            &request,
            &destination,
            &ErrorReport::default(),
        )
        .unwrap();

        assert_eq!(status.status, STATUS_SUCCESS);
        assert_eq!(status.exit_code, Some(0));
        assert_eq!(status.link_created.as_deref(), Some("/work/out ==> /data"));
        assert_eq!(status.std_out.as_deref(), Some("Junction created for out <<===>> data"));
        assert_eq!(status.command, "mklink /J out data");
        assert!(status.is_success());
    }

    #[test]
    fn test_nonzero_exit_raises_command_failed() {
        let (request, destination) = fixtures();
        let output = ProcessOutput::from_raw(b"", b"Cannot create a file when that file already exists.", Some(1));
        let err = assemble(
            LinkStatus::pending("mklink /J out data"),
            output,
            &request,
            &destination,
            &ErrorReport::default(),
        )
        .unwrap_err();

        match err {
            LinkError::CommandFailed { exit_code, status } => {
                assert_eq!(exit_code, Some(1));
                assert!(status.contains(STATUS_FAILED));
                assert!(status.contains("mklink /J out data"));
                assert!(status.contains("that file already exists"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_signal_termination_is_failure() {
        let (request, destination) = fixtures();
        let err = assemble(
            LinkStatus::pending("ln -s a b"),
            ProcessOutput::from_raw(b"", b"", None),
            &request,
            &destination,
            &ErrorReport::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LinkError::CommandFailed { exit_code: None, .. }));
    }
}
