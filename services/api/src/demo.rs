use crate::infra::{load_profile, parse_date, parse_program};
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use std::io::Cursor;
use std::path::PathBuf;
use visa_pathways::config::AppConfig;
use visa_pathways::draws::{
    DrawAlert, DrawHistory, DrawImporter, DrawPrediction, TrendAnalysis, UserDrawComparison,
};
use visa_pathways::error::AppError;
use visa_pathways::scoring::{
    ApplicantProfile, EducationLevel, Finances, LanguageScores, LanguageTest, MaritalStatus,
    OfficialLanguage, PortugalVisa, Program, ScoreResult,
};
use visa_pathways::{PathwayService, WhatIfReport};

const SAMPLE_DRAWS: &str = include_str!("../../../data/sample_draws.csv");
const DEMO_CATEGORY: &str = "Express Entry";

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant profile as a JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Program label: crs, australia, portugal_d1 ... portugal_job_seeker
    #[arg(long, value_parser = parse_program)]
    pub(crate) program: Program,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WhatIfArgs {
    /// Applicant profile as a JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Program label: crs, australia, portugal_d1 ... portugal_job_seeker
    #[arg(long, value_parser = parse_program)]
    pub(crate) program: Program,
    /// Target score for recommendations (defaults to PATHWAY_TARGET_SCORE)
    #[arg(long)]
    pub(crate) target: Option<u32>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DrawsArgs {
    /// Draw history CSV (date, program, cutoff, invitations)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Restrict to one draw category (case-insensitive)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Compare this score against the history and raise alerts
    #[arg(long)]
    pub(crate) score: Option<u32>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the draw forecast (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Target CRS score for the recommendations
    #[arg(long)]
    pub(crate) target: Option<u32>,
}

#[derive(Debug, Serialize)]
struct DrawsReport {
    category: Option<String>,
    today: NaiveDate,
    analysis: TrendAnalysis,
    prediction: DrawPrediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<UserDrawComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alerts: Option<Vec<DrawAlert>>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let service = PathwayService::new(AppConfig::load()?.pathways, DrawHistory::default());
    let result = service.score(&profile, args.program)?;

    if args.json {
        print_json(&result);
    } else {
        render_score(&result);
    }
    Ok(())
}

pub(crate) fn run_what_if(args: WhatIfArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let service = PathwayService::new(AppConfig::load()?.pathways, DrawHistory::default());
    let report = service.what_if(&profile, args.program, args.target)?;

    if args.json {
        print_json(&report);
    } else {
        render_what_if(&report);
    }
    Ok(())
}

pub(crate) fn run_draws(args: DrawsArgs) -> Result<(), AppError> {
    let history = DrawImporter::from_path(&args.csv)?;
    let service = PathwayService::new(AppConfig::load()?.pathways, history);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = draws_report(&service, args.category, args.score, today);

    if args.json {
        print_json(&report);
    } else {
        render_draws(&report);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let history = DrawImporter::from_reader(Cursor::new(SAMPLE_DRAWS))?;
    let service = PathwayService::new(AppConfig::load()?.pathways, history);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let profile = demo_profile();

    println!("Visa pathways demo");
    println!(
        "Profile: age {}, {}, {} years domestic / {} years foreign experience",
        profile.age,
        profile.education.label(),
        profile.domestic_experience_years,
        profile.foreign_experience_years
    );

    let mut programs = vec![Program::Crs, Program::Australia];
    programs.extend(PortugalVisa::all().into_iter().map(Program::Portugal));
    println!("\nScores by program");
    for program in programs {
        match service.score(&profile, program) {
            Ok(result) => println!(
                "- {:<22} {:>4} / {}",
                program.label(),
                result.total_score,
                result.max_score
            ),
            Err(err) => println!("- {:<22} unavailable: {}", program.label(), err),
        }
    }

    println!();
    let report = service.what_if(&profile, Program::Crs, args.target)?;
    render_what_if(&report);

    println!();
    let draws = draws_report(
        &service,
        Some(DEMO_CATEGORY.to_string()),
        Some(report.result.current_score),
        today,
    );
    render_draws(&draws);

    Ok(())
}

fn draws_report(
    service: &PathwayService,
    category: Option<String>,
    score: Option<u32>,
    today: NaiveDate,
) -> DrawsReport {
    let filter = category.as_deref();
    DrawsReport {
        analysis: service.draw_analysis(filter),
        prediction: service.draw_prediction(filter, Some(today)),
        comparison: score.map(|score| service.draw_comparison(score, filter)),
        alerts: score.map(|score| service.draw_alerts(score, filter, Some(today))),
        category,
        today,
    }
}

fn demo_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 29,
        marital_status: MaritalStatus::Single,
        spouse: None,
        first_language: LanguageTest {
            language: OfficialLanguage::English,
            scores: LanguageScores::uniform(9),
        },
        second_language: None,
        education: EducationLevel::Bachelors,
        domestic_experience_years: 1,
        foreign_experience_years: 3,
        domestic_education: None,
        job_offer: None,
        nomination: None,
        trade_certificate: false,
        sibling_in_country: false,
        specialist_education: false,
        professional_year: false,
        community_language: false,
        regional_study: false,
        has_accommodation: true,
        has_health_insurance: true,
        has_business_plan: false,
        portuguese_level: None,
        finances: Finances {
            monthly_passive_income_eur: 0,
            monthly_remote_income_eur: 3600,
            savings_eur: 25_000,
        },
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("JSON output unavailable: {}", err),
    }
}

fn render_score(result: &ScoreResult) {
    println!(
        "{} score: {} / {} (rules {})",
        result.program, result.total_score, result.max_score, result.table_version
    );
    for (category, points) in &result.breakdown {
        println!("- {:<22} {:>4}", category.label(), points);
    }
}

fn render_what_if(report: &WhatIfReport) {
    let result = &report.result;
    println!(
        "What-if for {}: current {}, all improvements combined {}",
        result.program, result.current_score, result.combined_max_score
    );

    println!("\nScenarios");
    for scenario in &result.scenarios {
        if scenario.is_applicable {
            println!(
                "- {:<34} {:>+5} -> {:>4} ({} months, {})",
                scenario.title,
                scenario.points_gain,
                scenario.new_score,
                scenario.months,
                scenario.difficulty.label()
            );
        } else {
            println!(
                "- {:<34} n/a: {}",
                scenario.title,
                scenario.reason.as_deref().unwrap_or("not applicable")
            );
        }
    }

    match &result.best_scenario {
        Some(best) => println!(
            "\nBest single step: {} (+{} points)",
            best.title, best.points_gain
        ),
        None => println!("\nBest single step: none available"),
    }

    if report.recommendations.is_empty() {
        println!("\nRecommendations toward {}: none", report.target_score);
        return;
    }
    println!("\nRecommendations toward {}", report.target_score);
    for action in &report.recommendations {
        println!(
            "- [{:?}] {} (+{} points, {:.1} points/month{}{})",
            action.priority,
            action.title,
            action.points_gain,
            action.efficiency,
            if action.closes_gap { ", closes the gap" } else { "" },
            if action.externally_gated {
                ", needs external approval"
            } else {
                ""
            }
        );
    }
}

fn render_draws(report: &DrawsReport) {
    let analysis = &report.analysis;
    println!(
        "Draw history ({}) as of {}",
        report.category.as_deref().unwrap_or("all categories"),
        report.today
    );
    println!(
        "Records: {} | cutoff avg {:.1}, range {}-{} | invitations avg {:.1}, total {}",
        analysis.record_count,
        analysis.average_cutoff,
        analysis.lowest_cutoff,
        analysis.highest_cutoff,
        analysis.average_invitations,
        analysis.total_invitations
    );
    println!(
        "Trend: {} (strength {:.1})",
        analysis.trend_direction, analysis.trend_strength
    );

    let prediction = &report.prediction;
    println!(
        "\nNext draw forecast: {} on {} (range {}-{}, {} confidence)",
        prediction.predicted_cutoff,
        prediction.predicted_date,
        prediction.range_min,
        prediction.range_max,
        prediction.confidence_level
    );
    for factor in &prediction.factors {
        println!("- {}", factor);
    }

    if let Some(comparison) = &report.comparison {
        println!(
            "\nScore {}: qualified in {} of {} draws (percentile {:.1}, average gap {:.1})",
            comparison.user_score,
            comparison.qualifying_count,
            comparison.total_count,
            comparison.percentile,
            comparison.average_gap
        );
        for chance in &comparison.per_category_chance {
            println!(
                "- {:<20} avg {:.1}, min {} -> {:?}",
                chance.program_label, chance.average_cutoff, chance.minimum_cutoff, chance.chance
            );
        }
    }

    if let Some(alerts) = &report.alerts {
        println!("\nAlerts");
        for alert in alerts {
            println!("- [{:?}] {}: {}", alert.priority, alert.title, alert.message);
        }
    }
}
