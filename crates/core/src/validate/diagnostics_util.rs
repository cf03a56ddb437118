use hazlabel_diagnostics::{Diagnostic, Severity, default_severity};

/// A diagnostic whose severity comes from the catalogue.
pub(super) fn catalogued(
    id: &'static str,
    code: impl Into<String>,
    message: impl Into<String>,
) -> Diagnostic {
    Diagnostic::new(
        id,
        default_severity(id).unwrap_or(Severity::Warning),
        code,
        message,
    )
}
