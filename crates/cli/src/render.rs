//! Pretty issue rendering using ariadne.
//!
//! Validation issues carry no byte spans, so each one is anchored to the
//! first place its subject (a GHS code or a field name) appears in the input
//! JSON. Issues whose subject is absent from the input, such as a missing
//! mandatory precaution, are printed as standalone messages.

use std::io::{self, IsTerminal};
use std::ops::Range;

use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use hazlabel_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-readable output.
    Pretty,
    /// Machine-readable JSON on stdout.
    Json,
}

impl Format {
    /// Use the explicit choice, else pretty for terminals and JSON for pipes.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Critical => ReportKind::Custom("critical", Color::Magenta),
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
        _ => ReportKind::Warning,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Magenta,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

// ── Anchoring ───────────────────────────────────────────────────────────

/// Where an issue's subject first appears in the source.
///
/// Field subjects (`"signal_word"`, `"hazard_statements[2]"`) are matched as
/// quoted JSON keys; code subjects (`"H314"`) as bare text.
fn anchor(source: &str, diag: &Diagnostic) -> Option<Range<usize>> {
    let subject = diag.code.split('[').next().unwrap_or(&diag.code);
    if subject.is_empty() {
        return None;
    }
    let needle = if subject.contains('_') {
        format!("\"{subject}\"")
    } else {
        subject.to_string()
    };
    source
        .find(&needle)
        .map(|start| start..start + needle.len())
}

fn context_note(diag: &Diagnostic) -> Option<String> {
    let ctx = diag.context.as_ref().filter(|c| !c.is_empty())?;
    Some(
        ctx.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render issues against the input they were raised for, to stderr.
pub(crate) fn render_issues(source: &str, filename: &str, issues: &[Diagnostic]) {
    if issues.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);
    let mut cache = (filename, Source::from(source));

    for diag in issues {
        let Some(span) = anchor(source, diag) else {
            render_standalone(diag);
            continue;
        };

        let label_msg = match &diag.suggestion {
            Some(s) => format!("suggested: {s}"),
            None => diag.message.clone(),
        };
        let mut builder = Report::build(report_kind(diag.severity), (filename, span.clone()))
            .with_code(diag.id.as_ref())
            .with_message(&diag.message)
            .with_config(config)
            .with_label(
                Label::new((filename, span))
                    .with_message(label_msg)
                    .with_color(severity_color(diag.severity)),
            );
        if let Some(note) = context_note(diag) {
            builder = builder.with_note(note);
        }
        if let Some(explanation) = diag.explain() {
            builder = builder.with_help(explanation);
        }
        builder.finish().eprint(&mut cache).ok();
    }
}

fn render_standalone(diag: &Diagnostic) {
    eprintln!(
        "{}[{}]: {}",
        diag.severity.to_string().fg(severity_color(diag.severity)),
        diag.id,
        diag.message
    );
    if let Some(suggestion) = &diag.suggestion {
        eprintln!("  = suggested: {suggestion}");
    }
    if let Some(note) = context_note(diag) {
        eprintln!("  = note: {note}");
    }
}

// ── Summary line ────────────────────────────────────────────────────────

/// Print a coloured count line, e.g. `1 critical, 2 errors, 1 warning`.
pub(crate) fn print_summary(issues: &[Diagnostic]) {
    let (mut critical, mut errors, mut warnings, mut infos) = (0usize, 0usize, 0usize, 0usize);
    for d in issues {
        match d.severity {
            Severity::Critical => critical += 1,
            Severity::Error => errors += 1,
            Severity::Info => infos += 1,
            _ => warnings += 1,
        }
    }

    let plural = |n: usize| if n == 1 { "" } else { "s" };
    let mut parts = Vec::new();
    if critical > 0 {
        parts.push(format!("{}", format!("{critical} critical").fg(Color::Magenta)));
    }
    if errors > 0 {
        let s = plural(errors);
        parts.push(format!("{}", format!("{errors} error{s}").fg(Color::Red)));
    }
    if warnings > 0 {
        let s = plural(warnings);
        parts.push(format!("{}", format!("{warnings} warning{s}").fg(Color::Yellow)));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    if !parts.is_empty() {
        eprintln!("{}", parts.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazlabel_diagnostics::codes;

    const SOURCE: &str = r#"{ "signal_word": "Warning", "hazard_statements": ["H314: burns"] }"#;

    #[test]
    fn anchors_codes_and_fields() {
        let code =
            Diagnostic::new(codes::HAZARD_TEXT_CORRECTED, Severity::Info, "H314", "replaced");
        let span = anchor(SOURCE, &code).unwrap();
        assert_eq!(&SOURCE[span], "H314");

        let field =
            Diagnostic::new(codes::INVALID_SIGNAL_WORD, Severity::Error, "signal_word", "bad");
        let span = anchor(SOURCE, &field).unwrap();
        assert_eq!(&SOURCE[span], "\"signal_word\"");

        let indexed = Diagnostic::new(
            codes::UNCODED_STATEMENT,
            Severity::Warning,
            "hazard_statements[0]",
            "x",
        );
        assert!(anchor(SOURCE, &indexed).is_some());
    }

    #[test]
    fn absent_subject_has_no_anchor() {
        let d = Diagnostic::new(
            codes::MISSING_MANDATORY_PRECAUTION,
            Severity::Error,
            "P280",
            "missing",
        );
        assert!(anchor(SOURCE, &d).is_none());
    }

    #[test]
    fn explicit_output_choice_wins() {
        assert_eq!(Format::resolve_or_detect(Some("json")), Format::Json);
        assert_eq!(Format::resolve_or_detect(Some("pretty")), Format::Pretty);
    }
}
