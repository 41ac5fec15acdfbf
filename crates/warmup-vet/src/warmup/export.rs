use std::io;

use serde::Serialize;

use super::{WarmupDay, WarmupPlans};

#[derive(Debug, Serialize)]
struct PlanRow {
    day: u32,
    plan_30_day: Option<u64>,
    plan_less_than_30: Option<u64>,
    plan_greater_than_30: Option<u64>,
}

fn limit_on(plan: &[WarmupDay], day: u32) -> Option<u64> {
    plan.get(day as usize - 1).map(|entry| entry.limit)
}

/// Writes the plans side by side, one row per day; days past a plan's end stay empty.
pub fn write_csv<W: io::Write>(plans: &WarmupPlans, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let days = plans
        .plan_30_day
        .len()
        .max(plans.plan_less_than_30.len())
        .max(plans.plan_greater_than_30.len());

    for day in 1..=days as u32 {
        csv_writer.serialize(PlanRow {
            day,
            plan_30_day: limit_on(&plans.plan_30_day, day),
            plan_less_than_30: limit_on(&plans.plan_less_than_30, day),
            plan_greater_than_30: limit_on(&plans.plan_greater_than_30, day),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
