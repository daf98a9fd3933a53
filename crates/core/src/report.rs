//! Seam for turning the runner's XML report into a loggable summary.

/// Converts report-file text into a renderable summary. The default
/// implementation passes the text through untouched; a build-server
/// translator (TeamCity service messages and the like) plugs in here.
pub trait ReportFormatter {
    fn summarize(&self, report: &str) -> String;
}

/// Formatter that hands the report text back unchanged.
#[derive(Debug, Default)]
pub struct Passthrough;

impl ReportFormatter for Passthrough {
    fn summarize(&self, report: &str) -> String {
        report.to_string()
    }
}
