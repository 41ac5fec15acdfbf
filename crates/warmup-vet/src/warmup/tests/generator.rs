use crate::warmup::{
    clamp_period, round_half_up, WarmupDay, WarmupPlans, WarmupRequest, WarmupRequestError,
    WarmupScheduleGenerator,
};

fn plans(target_volume: u64, days: i64) -> WarmupPlans {
    WarmupScheduleGenerator::default().generate(target_volume, days)
}

fn limits(plan: &[WarmupDay]) -> Vec<u64> {
    plan.iter().map(|entry| entry.limit).collect()
}

#[test]
fn rounding_is_half_up_and_floors_negatives() {
    assert_eq!(round_half_up(129.87), 130);
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(2.49), 2);
    assert_eq!(round_half_up(0.0), 0);
    assert_eq!(round_half_up(-4.2), 0);
    assert_eq!(round_half_up(f64::NAN), 0);
}

#[test]
fn period_is_clamped() {
    assert_eq!(clamp_period(0), 30);
    assert_eq!(clamp_period(-5), 30);
    assert_eq!(clamp_period(14), 14);
    assert_eq!(clamp_period(60), 60);
    assert_eq!(clamp_period(90), 60);
}

#[test]
fn reference_curve_hits_median_on_day_nine() {
    let plans = plans(10_000, 30);

    assert_eq!(plans.plan_30_day.len(), 60);
    assert_eq!(plans.plan_30_day[0].limit, 48);
    assert_eq!(plans.plan_30_day[8].day, 9);
    assert_eq!(plans.plan_30_day[8].limit, 333);
    assert_eq!(plans.plan_less_than_30[8].limit, 333);
    assert_eq!(plans.plan_greater_than_30[8].limit, 333);
}

#[test]
fn reference_curve_runs_out_after_forty_days() {
    let plans = plans(10_000, 30);

    assert!(plans.plan_30_day[..40].iter().all(|entry| entry.limit > 0));
    assert!(plans.plan_30_day[40..].iter().all(|entry| entry.limit == 0));
}

#[test]
fn reference_curve_ignores_period() {
    assert_eq!(plans(10_000, 12).plan_30_day, plans(10_000, 50).plan_30_day);
}

#[test]
fn custom_curves_follow_their_multipliers() {
    let plans = plans(30_000, 30);

    assert_eq!(plans.plan_less_than_30[0].limit, 143);
    assert_eq!(plans.plan_less_than_30[9].limit, 1_440);
    assert_eq!(plans.plan_greater_than_30[9].limit, 1_200);
    assert_eq!(plans.plan_less_than_30[29].limit, 900_000);
    assert_eq!(plans.plan_greater_than_30[29].limit, 12_000);
}

#[test]
fn custom_curves_scale_with_period() {
    let plans = plans(40_000, 40);

    assert_eq!(plans.plan_less_than_30.len(), 40);
    assert_eq!(plans.plan_greater_than_30[9].limit, 900);
    assert_eq!(plans.plan_less_than_30[9].limit, 1_080);
}

#[test]
fn custom_curve_length_matches_clamped_period() {
    assert_eq!(plans(5_000, 0).plan_less_than_30.len(), 30);
    assert_eq!(plans(5_000, 7).plan_greater_than_30.len(), 7);
    assert_eq!(plans(5_000, 365).plan_less_than_30.len(), 60);
}

#[test]
fn twenty_day_plan_lands_on_target() {
    let plans = plans(50_000, 20);
    let accelerated = limits(&plans.plan_less_than_30);

    assert_eq!(accelerated.len(), 20);
    assert_eq!(accelerated[0], 130);
    assert_eq!(accelerated[19], 50_000);
    assert!(accelerated.windows(2).all(|pair| pair[1] >= pair[0]));

    // the extended curve keeps its formula
    assert_eq!(plans.plan_greater_than_30[8].limit, 3_750);
}

#[test]
fn forty_five_day_plan_lands_on_target() {
    let plans = plans(90_000, 45);
    let extended = limits(&plans.plan_greater_than_30);

    assert_eq!(extended.len(), 45);
    assert_eq!(extended[0], 224);
    assert_eq!(extended[44], 90_000);

    // the accelerated curve keeps its formula
    assert_eq!(plans.plan_less_than_30[0].limit, 190);
}

#[test]
fn tiny_volumes_never_go_negative() {
    let plans = plans(1, 30);

    assert_eq!(plans.plan_30_day[0].limit, 0);
    assert!(plans
        .plan_30_day
        .iter()
        .chain(&plans.plan_less_than_30)
        .chain(&plans.plan_greater_than_30)
        .all(|entry| entry.day >= 1));
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(plans(123_456, 45), plans(123_456, 45));
}

#[test]
fn request_requires_positive_volume() {
    let request = WarmupRequest {
        target_volume: 0,
        days: 20,
    };
    assert_eq!(
        request.validate(),
        Err(WarmupRequestError::NonPositiveVolume(0))
    );

    let request = WarmupRequest {
        target_volume: 2_500,
        days: 0,
    };
    assert_eq!(request.validate(), Ok(2_500));
}
