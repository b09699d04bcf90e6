use std::io::{BufRead, Write};

use serde::Serialize;

use hyg_core::clock::Clock;
use hyg_core::enums::{ChecklistType, Response, SectorStatus};
use hyg_core::inspection::{ZoneState, answers_from_sequence};
use hyg_db::service::{HygService, ZoneSubmission};
use hyg_db::session::SessionContext;
use hyg_db::store::EntryRepository;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InspectArgs;
use crate::context::AppContext;
use crate::output::output;

/// What one `hyg inspect` invocation covers.
#[derive(Debug, Clone, Copy)]
pub struct RoundPlan<'a> {
    pub sector: &'a str,
    pub zone: Option<&'a str>,
    pub checklist_type: ChecklistType,
}

#[derive(Debug, Serialize)]
pub struct ZoneResult {
    pub id: String,
    pub zone: String,
    pub isolation: bool,
    pub compliant_count: u32,
    pub total_item_count: u32,
    pub non_compliant_items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoundSummary {
    pub sector: String,
    pub checklist_type: ChecklistType,
    pub status: Option<SectorStatus>,
    pub submitted: Vec<ZoneResult>,
    pub remaining: Vec<String>,
    /// Zone whose answers were cut short by end of input; nothing was stored for it.
    pub abandoned: Option<String>,
    pub warnings: Vec<String>,
}

/// Handle `hyg inspect`. Prompts go to stderr so stdout carries only the summary.
pub async fn handle(
    args: &InspectArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let checklist_type = match &args.checklist_type {
        Some(raw) => raw.parse::<ChecklistType>()?,
        None => ctx.config.general.default_checklist_type,
    };
    let plan = RoundPlan {
        sector: &args.sector,
        zone: args.zone.as_deref(),
        checklist_type,
    };

    let mut input = std::io::stdin().lock();
    let mut prompts = std::io::stderr();
    let summary = run_round(
        &ctx.service,
        &mut ctx.session,
        plan,
        &mut input,
        &mut prompts,
    )
    .await?;

    for warning in &summary.warnings {
        tracing::warn!(%warning, "inspection round");
    }
    output(&summary, flags.format)
}

/// Walk the planned zones, asking for isolation (rooms only), one answer per
/// item and an optional note, then submit each zone as soon as it is answered.
///
/// End of input before the last item abandons the current zone and ends the
/// round; zones already submitted stay completed.
///
/// # Errors
///
/// Fails on an unknown sector or zone, an already completed zone, a store
/// write error, or an I/O error on the prompt streams.
pub async fn run_round<R, C, I, W>(
    service: &HygService<R, C>,
    session: &mut SessionContext,
    plan: RoundPlan<'_>,
    input: &mut I,
    prompts: &mut W,
) -> anyhow::Result<RoundSummary>
where
    R: EntryRepository,
    C: Clock,
    I: BufRead,
    W: Write,
{
    let sector = service.select_sector(session, plan.sector)?;
    let targets: Vec<ZoneState> = match plan.zone {
        Some(name) => {
            // Rejects unknown and already completed zones before any prompt.
            service.checklist_for(session, name, false)?;
            sector.zone(name).cloned().into_iter().collect()
        }
        None => sector.pending_zones().cloned().collect(),
    };

    writeln!(
        prompts,
        "{} - {} ({} zone(s) à contrôler)",
        sector.sector(),
        plan.checklist_type.label(),
        targets.len()
    )?;

    let mut submitted = Vec::new();
    let mut warnings = Vec::new();
    let mut abandoned = None;

    for zone in targets {
        writeln!(prompts, "\n== {} ==", zone.name)?;
        let Some(submission) = ask_zone(service, session, &zone, plan.checklist_type, input, prompts)?
        else {
            writeln!(prompts, "Saisie interrompue, {} non enregistrée", zone.name)?;
            abandoned = Some(zone.name);
            break;
        };

        let outcome = service.submit_zone(session, submission).await?;
        writeln!(
            prompts,
            "{} : {}/{} conformes",
            outcome.entry.zone, outcome.entry.compliant_count, outcome.entry.total_item_count
        )?;
        warnings.extend(outcome.warnings);
        submitted.push(ZoneResult {
            id: outcome.entry.id,
            zone: outcome.entry.zone,
            isolation: outcome.entry.isolation,
            compliant_count: outcome.entry.compliant_count,
            total_item_count: outcome.entry.total_item_count,
            non_compliant_items: outcome.entry.non_compliant_items,
        });
    }

    let remaining = session
        .inspection
        .active()
        .map(|live| live.pending_zones().map(|zone| zone.name.clone()).collect())
        .unwrap_or_default();

    Ok(RoundSummary {
        sector: sector.sector().to_string(),
        checklist_type: plan.checklist_type,
        status: session.inspection.status(),
        submitted,
        remaining,
        abandoned,
        warnings,
    })
}

/// Collect everything needed to submit one zone. `None` means end of input.
fn ask_zone<R, C, I, W>(
    service: &HygService<R, C>,
    session: &SessionContext,
    zone: &ZoneState,
    checklist_type: ChecklistType,
    input: &mut I,
    prompts: &mut W,
) -> anyhow::Result<Option<ZoneSubmission>>
where
    R: EntryRepository,
    C: Clock,
    I: BufRead,
    W: Write,
{
    let isolation = if zone.kind.supports_isolation() {
        match ask_isolation(input, prompts)? {
            Some(isolation) => isolation,
            None => return Ok(None),
        }
    } else {
        false
    };

    let items = service.checklist_for(session, &zone.name, isolation)?;
    let mut responses = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let question = format!("[{}/{}] {item} (o/n/na) : ", index + 1, items.len());
        match ask_item(&question, input, prompts)? {
            Some(response) => responses.push(response),
            None => return Ok(None),
        }
    }
    let answers = answers_from_sequence(&zone.name, &items, &responses)?;

    // End of input here just means no note.
    let note = prompt_line("Note (optionnelle) : ", input, prompts)?.filter(|note| !note.is_empty());

    Ok(Some(ZoneSubmission {
        zone: zone.name.clone(),
        isolation,
        answers,
        checklist_type,
        note,
    }))
}

fn ask_isolation<I: BufRead, W: Write>(
    input: &mut I,
    prompts: &mut W,
) -> anyhow::Result<Option<bool>> {
    loop {
        let Some(line) = prompt_line("Patient en isolement ? [o/N] : ", input, prompts)? else {
            return Ok(None);
        };
        match Response::from_answer(&line) {
            Ok(Response::Yes) => return Ok(Some(true)),
            Ok(Response::No | Response::Unanswered) => return Ok(Some(false)),
            _ => writeln!(prompts, "Répondre o ou n")?,
        }
    }
}

fn ask_item<I: BufRead, W: Write>(
    question: &str,
    input: &mut I,
    prompts: &mut W,
) -> anyhow::Result<Option<Response>> {
    loop {
        let Some(line) = prompt_line(question, input, prompts)? else {
            return Ok(None);
        };
        match Response::from_answer(&line) {
            Ok(response) => return Ok(Some(response)),
            Err(_) => writeln!(prompts, "Réponse invalide : o, n, na ou vide")?,
        }
    }
}

fn prompt_line<I: BufRead, W: Write>(
    text: &str,
    input: &mut I,
    prompts: &mut W,
) -> anyhow::Result<Option<String>> {
    write!(prompts, "{text}")?;
    prompts.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
