use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use warmup_vet::config::AppConfig;
use warmup_vet::error::AppError;
use warmup_vet::vetting::{EngineConfig, VetRequest, VettingEngine, VettingReport};
use warmup_vet::warmup::{
    write_csv, WarmupDay, WarmupPlans, WarmupRequest, WarmupScheduleGenerator,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlanFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct WarmupArgs {
    /// Daily volume the domain should reach
    #[arg(long)]
    pub(crate) target_volume: i64,
    /// Warm-up period in days (0 means 30, capped at 60)
    #[arg(long, default_value_t = 0)]
    pub(crate) days: i64,
    #[arg(long, value_enum, default_value_t = PlanFormat::Table)]
    pub(crate) format: PlanFormat,
}

#[derive(Args, Debug)]
pub(crate) struct VetArgs {
    /// JSON file holding `{domain, signals, self_attested?}`
    #[arg(long)]
    pub(crate) signals: PathBuf,
}

#[derive(Debug, Serialize)]
pub(crate) struct StampedReport {
    pub(crate) evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) report: VettingReport,
}

pub(crate) fn run_warmup(args: WarmupArgs) -> Result<(), AppError> {
    let request = WarmupRequest {
        target_volume: args.target_volume,
        days: args.days,
    };
    let target_volume = request.validate()?;
    let plans = WarmupScheduleGenerator::default().generate(target_volume, request.days);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        PlanFormat::Table => render_table(&plans, &mut out)?,
        PlanFormat::Csv => write_csv(&plans, &mut out)?,
        PlanFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &plans)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub(crate) fn run_vet(args: VetArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = VettingEngine::new(EngineConfig::from(&config.vetting));

    let raw = std::fs::read_to_string(&args.signals)?;
    let request: VetRequest = serde_json::from_str(&raw)?;
    let report = engine.evaluate(&request)?;

    let stamped = StampedReport {
        evaluated_at: Utc::now(),
        report,
    };
    println!("{}", serde_json::to_string_pretty(&stamped)?);
    Ok(())
}

pub(crate) fn render_table<W: Write>(plans: &WarmupPlans, out: &mut W) -> io::Result<()> {
    writeln!(out, "{:>4} {:>12} {:>12} {:>12}", "day", "30-day", "accelerated", "extended")?;

    let days = plans.plan_30_day.len().max(plans.plan_less_than_30.len());
    for idx in 0..days {
        writeln!(
            out,
            "{:>4} {:>12} {:>12} {:>12}",
            idx + 1,
            cell(&plans.plan_30_day, idx),
            cell(&plans.plan_less_than_30, idx),
            cell(&plans.plan_greater_than_30, idx),
        )?;
    }
    Ok(())
}

fn cell(plan: &[WarmupDay], idx: usize) -> String {
    plan.get(idx)
        .map(|entry| entry.limit.to_string())
        .unwrap_or_else(|| "-".to_string())
}
