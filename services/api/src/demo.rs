use clap::Args;
use denti::error::AppError;
use denti::funnel::{AnswerRecord, DiagnosisResult, ScoringEngine};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Path to a JSON file holding the questionnaire answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the raw diagnosis JSON instead of the rendered report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers = parse_answers(&raw)?;

    let engine = ScoringEngine::default();
    let result = engine.diagnose(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_diagnosis(&result);
    }

    Ok(())
}

pub(crate) fn parse_answers(raw: &str) -> Result<AnswerRecord, AppError> {
    Ok(serde_json::from_str(raw)?)
}

fn render_diagnosis(result: &DiagnosisResult) {
    println!("Dental insurance diagnosis");
    println!(
        "Score: {} {} ({})",
        result.score, result.grade.emoji, result.grade.text
    );

    if result.risk_factors.is_empty() {
        println!("\nRisk factors: none");
    } else {
        println!("\nRisk factors");
        for factor in &result.risk_factors {
            println!(
                "- [{:?}] {}: {}",
                factor.severity, factor.category, factor.detail
            );
        }
    }

    println!("\nScenario costs");
    for item in &result.scenario_costs {
        println!("- {}: {} KRW", item.item, item.cost);
    }
    println!("Total estimated cost: {} KRW", result.total_scenario_cost);
    println!(
        "Out of pocket now {} KRW, optimized {} KRW, potential savings {} KRW",
        result.current_out_of_pocket, result.optimized_out_of_pocket, result.savings
    );

    println!("\nCoverage by category");
    for analysis in [
        &result.categories.cavity_nerve,
        &result.categories.crown_implant,
        &result.categories.gum_disease,
    ] {
        println!(
            "- {} {}: {:?} at {}%, coverage {} / {} KRW",
            analysis.icon,
            analysis.display_name,
            analysis.status,
            analysis.percentage,
            analysis.current_coverage,
            analysis.recommended_coverage
        );
        if let Some(warning) = analysis.related_symptoms {
            println!("  {warning}");
        }
    }

    println!(
        "\nLead quality: {:?} (score {}, priority {})",
        result.lead_score.quality, result.lead_score.score, result.lead_score.priority
    );
    println!(
        "Premium: current {} at {} KRW/month, recommended {} at {} KRW/month{}",
        result.insurance_premium.current.tier,
        result.insurance_premium.current.monthly,
        result.insurance_premium.recommended.tier,
        result.insurance_premium.recommended.monthly,
        if result.insurance_premium.is_upgrade_needed {
            " (upgrade advised)"
        } else {
            ""
        }
    );
}
