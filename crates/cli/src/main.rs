mod logging;
mod render;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use hazlabel_core::statement::Statement;
use hazlabel_core::{
    Label, LabelError, RawLabel, Registry, render as layout, resolve_pictograms,
    resolve_signal_word, validate_at,
};
use hazlabel_diagnostics as diag;
use hazlabel_format::{DEFAULT_PRESET, LabelFormat, load_format_from_str, preset_names, resolve_preset};
use serde::Deserialize;

use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::render::{Format, print_summary, render_issues};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "hazlabel",
    version,
    about = "Validate GHS hazard labels against the GHS Rev. 11 registry and lay them out on label sheets"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to
    /// stderr; `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    // ── Label commands ──────────────────────────────────────────────
    /// Validate and correct a label JSON file (`-` reads stdin).
    Validate {
        file: String,
        /// Date to judge SDS age against (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,
    },

    /// Validate a list of labels and emit their layout on a label sheet.
    Render {
        file: String,
        /// Named sheet preset (see `formats`).
        #[arg(long, default_value = DEFAULT_PRESET, conflicts_with = "format_file")]
        format: String,
        /// Custom sheet format JSON.
        #[arg(long)]
        format_file: Option<String>,
        /// Date to judge SDS age against (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        today: Option<String>,
    },

    // ── Registry reference ──────────────────────────────────────────
    /// Resolve the pictograms and signal word for hazard codes.
    Pictograms {
        /// Hazard codes or statements; comma or space separated.
        #[arg(required = true, num_args = 1..)]
        codes: Vec<String>,
    },

    /// Look up a hazard, precautionary or supplemental code.
    Lookup { code: String },

    /// List registry entries.
    Codes {
        #[arg(value_enum)]
        kind: Option<CodeTable>,
    },

    /// List the built-in label sheet presets.
    Formats,

    /// Explain a diagnostic ID (e.g. HZL2001).
    Explain { id: String },
}

/// Registry table selector for the `codes` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CodeTable {
    /// H-codes.
    Hazard,
    /// P-codes and registered combinations.
    Precautionary,
    /// EUH-codes.
    Supplemental,
}

/// `render` input: one label or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelsInput {
    Many(Vec<RawLabel>),
    One(Box<RawLabel>),
}

impl LabelsInput {
    fn into_vec(self) -> Vec<RawLabel> {
        match self {
            LabelsInput::Many(labels) => labels,
            LabelsInput::One(label) => vec![*label],
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_format(cli.log_format)
            .with_ansi(io::stderr().is_terminal()),
    );
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Validate { file, today } => cmd_validate(&file, today.as_deref(), format)?,
        Cmd::Render {
            file,
            format: preset,
            format_file,
            today,
        } => cmd_render(
            &file,
            &preset,
            format_file.as_deref(),
            today.as_deref(),
            format,
        )?,
        Cmd::Pictograms { codes } => cmd_pictograms(&codes, format)?,
        Cmd::Lookup { code } => cmd_lookup(&code, format)?,
        Cmd::Codes { kind } => cmd_codes(kind, format)?,
        Cmd::Formats => cmd_formats(format)?,
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_validate(file: &str, today: Option<&str>, format: Format) -> Result<()> {
    let input = read_input(file)?;
    let raw: RawLabel =
        serde_json::from_str(&input).with_context(|| format!("failed to parse label JSON '{file}'"))?;
    let today = resolve_today(today)?;

    let outcome = match validate_at(&raw, today) {
        Ok(outcome) => outcome,
        Err(err) => exit_structural(&err, format),
    };
    tracing::info!(
        product = %outcome.label.product_identifier,
        issues = outcome.issues.len(),
        valid = outcome.is_valid,
        "label validated"
    );

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Format::Pretty => {
            render_issues(&input, file, &outcome.issues);
            print_summary(&outcome.issues);
            print_label(&outcome.label);
            let verdict = if outcome.is_valid { "valid" } else { "NOT valid" };
            let review = if outcome.needs_review {
                ", needs review"
            } else {
                ""
            };
            eprintln!("label {verdict}{review}");
        }
    }

    if !outcome.is_valid {
        process::exit(1);
    }
    Ok(())
}

fn cmd_render(
    file: &str,
    preset: &str,
    format_file: Option<&str>,
    today: Option<&str>,
    format: Format,
) -> Result<()> {
    let input = read_input(file)?;
    let raws = serde_json::from_str::<LabelsInput>(&input)
        .with_context(|| format!("failed to parse labels JSON '{file}'"))?
        .into_vec();
    let sheet = resolve_sheet(preset, format_file)?;
    let today = resolve_today(today)?;

    let mut labels = Vec::with_capacity(raws.len());
    let mut source_indices = Vec::with_capacity(raws.len());
    let mut summaries = Vec::new();
    let mut skipped = Vec::new();
    for (index, raw) in raws.iter().enumerate() {
        match validate_at(raw, today) {
            Ok(outcome) => {
                summaries.push(serde_json::json!({
                    "index": index,
                    "product_identifier": outcome.label.product_identifier,
                    "is_valid": outcome.is_valid,
                    "needs_review": outcome.needs_review,
                    "issues": outcome.issues.len(),
                }));
                labels.push(outcome.label);
                source_indices.push(index);
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "label skipped");
                skipped.push(serde_json::json!({ "index": index, "error": err.to_string() }));
            }
        }
    }

    let mut plans = layout(&labels, &sheet);
    for plan in &mut plans {
        plan.source_index = source_indices[plan.source_index];
    }
    let pages = plans.last().map_or(0, |p| p.page + 1);
    tracing::info!(format = %sheet.id, labels = plans.len(), pages, "labels laid out");

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "format": sheet,
                "pages": pages,
                "labels": summaries,
                "skipped": skipped,
                "plans": plans,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            use ariadne::Fmt;
            println!(
                "{} ({}), {} label(s) on {} page(s)",
                sheet.id.as_str().fg(ariadne::Color::Cyan),
                describe_format(&sheet),
                plans.len(),
                pages
            );
            for plan in &plans {
                let omitted = plan.omitted_hazards.len() + plan.omitted_precautions.len();
                let mut note = String::new();
                if omitted > 0 {
                    note.push_str(&format!(", {omitted} statement(s) omitted for space"));
                }
                if !plan.omitted_header.is_empty() {
                    note.push_str(", header does not fit");
                }
                println!(
                    "  #{:<3} page {} slot {} (column {}, row {}) scale {:.2}{note}",
                    plan.source_index + 1,
                    plan.page + 1,
                    plan.slot + 1,
                    plan.column + 1,
                    plan.row + 1,
                    plan.scale
                );
            }
            for entry in &skipped {
                eprintln!(
                    "skipped label #{}: {}",
                    entry["index"].as_u64().unwrap_or_default() + 1,
                    entry["error"].as_str().unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

fn cmd_pictograms(args: &[String], format: Format) -> Result<()> {
    let codes: Vec<String> = args
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .flat_map(|c| {
            Statement::parse(c)
                .components()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    let pictograms = resolve_pictograms(&codes);
    let signal_word = resolve_signal_word(&codes);

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "codes": codes,
                "pictograms": pictograms,
                "signal_word": signal_word,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            if pictograms.is_empty() {
                println!("no pictograms");
            }
            for p in &pictograms {
                println!("{}  {}", p.id(), p.name());
            }
            println!("signal word: {signal_word}");
        }
    }
    Ok(())
}

fn cmd_lookup(code: &str, format: Format) -> Result<()> {
    let info = Registry::builtin().lookup_code(code);
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "code": code,
                "found": info.is_some(),
                "entry": info,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => match &info {
            Some(info) => {
                use ariadne::Fmt;
                println!("{}: {}", info.code.as_str().fg(ariadne::Color::Cyan), info.text);
                if let (Some(class), Some(category)) = (&info.hazard_class, &info.category) {
                    println!("  class: {class} (category {category})");
                }
                if !info.pictograms.is_empty() {
                    let ids: Vec<&str> = info.pictograms.iter().map(|p| p.id()).collect();
                    println!("  pictograms: {}", ids.join(", "));
                }
                if !info.mandatory_precautions.is_empty() {
                    println!("  requires: {}", info.mandatory_precautions.join(", "));
                }
            }
            None => eprintln!("error: unknown code '{code}'"),
        },
    }
    if info.is_none() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_codes(kind: Option<CodeTable>, format: Format) -> Result<()> {
    let registry = Registry::builtin();
    let wants = |table: CodeTable| kind.is_none_or(|k| k == table);

    let mut entries: Vec<(&'static str, &'static str, &'static str)> = Vec::new();
    if wants(CodeTable::Hazard) {
        entries.extend(registry.all_hazard_codes().iter().map(|h| ("hazard", h.code, h.text)));
    }
    if wants(CodeTable::Precautionary) {
        entries.extend(
            registry
                .all_precaution_codes()
                .iter()
                .map(|p| ("precautionary", p.code, p.text)),
        );
    }
    if wants(CodeTable::Supplemental) {
        entries.extend(
            registry
                .all_supplemental_codes()
                .iter()
                .map(|s| ("supplemental", s.code, s.text)),
        );
    }

    match format {
        Format::Json => {
            let out: Vec<_> = entries
                .iter()
                .map(|(kind, code, text)| serde_json::json!({ "code": code, "kind": kind, "text": text }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            for (_, code, text) in &entries {
                println!("{code:<16} {text}");
            }
        }
    }
    Ok(())
}

fn cmd_formats(format: Format) -> Result<()> {
    let formats: Vec<LabelFormat> = preset_names().map(resolve_preset).collect();
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&formats)?),
        Format::Pretty => {
            for f in &formats {
                let marker = if f.id == DEFAULT_PRESET { " (default)" } else { "" };
                println!("{:<12} {}{marker}", f.id, describe_format(f));
            }
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "id": id,
                "severity": diag::default_severity(id),
                "explanation": diag::explain(id),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // Explanation is the expected output, so stdout.
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{id}: (no explanation available)");
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Read a file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid --today '{s}', expected YYYY-MM-DD")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// The sheet format: a custom file when given, else the named preset
/// (unknown names fall back to the default preset with a warning).
fn resolve_sheet(preset: &str, format_file: Option<&str>) -> Result<LabelFormat> {
    match format_file {
        Some(path) => {
            let json = read_input(path)?;
            load_format_from_str(&json).with_context(|| format!("invalid format file '{path}'"))
        }
        None => Ok(resolve_preset(preset)),
    }
}

fn describe_format(f: &LabelFormat) -> String {
    format!(
        "{:.3} x {:.3} in, {} per page",
        f.label_width_in,
        f.label_height_in,
        f.labels_per_page()
    )
}

/// Print the corrected label to stdout.
fn print_label(label: &Label) {
    println!("{}", label.product_identifier);
    println!("signal word: {}", label.signal_word);
    if !label.pictograms.is_empty() {
        let ids: Vec<&str> = label.pictograms.iter().map(|p| p.id()).collect();
        println!("pictograms: {}", ids.join(", "));
    }
    for s in label
        .hazard_statements
        .iter()
        .chain(&label.supplemental_statements)
    {
        println!("  {s}");
    }
    for s in &label.precautionary_statements {
        println!("  {s}");
    }
}

/// Report a structurally unusable label and exit 1.
fn exit_structural(err: &LabelError, format: Format) -> ! {
    match format {
        Format::Json => {
            let out = serde_json::json!({ "ok": false, "error": err.to_string() });
            println!("{out:#}");
        }
        Format::Pretty => eprintln!("error: {err}"),
    }
    process::exit(1);
}
