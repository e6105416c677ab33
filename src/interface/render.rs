use crate::analysis::{nutrient_tips, NutrientAdjustment};
use crate::catalog::ReferenceCatalog;
use crate::models::{AnalysisReport, AnalysisResult};

/// Display the per-nutrient analysis as an aligned table.
pub fn display_results(results: &[AnalysisResult], catalog: &ReferenceCatalog) {
    if results.is_empty() {
        println!("No nutrients to analyze (none of the intakes has a reference value).");
        return;
    }

    println!();
    println!("=== Detailed Analysis ===");
    println!();

    let name_width = results
        .iter()
        .map(|r| r.nutrient.chars().count())
        .max()
        .unwrap_or(10);

    println!(
        "{:<width$}  {:>16}  {:>16}  {:>9}  Status",
        "Nutrient",
        "Intake",
        "Reference",
        "%",
        width = name_width
    );

    for r in results {
        let unit = catalog.unit(&r.nutrient).unwrap_or("");
        println!(
            "{:<width$}  {:>16}  {:>16}  {:>8.2}%  {} ({})",
            r.nutrient,
            format!("{:.2} {}", r.intake, unit),
            format!("{:.2} {}", r.reference, unit),
            r.percentage,
            r.status,
            r.color,
            width = name_width
        );
    }

    println!();
}

fn display_adjustment(adjustment: &NutrientAdjustment) {
    let r = &adjustment.result;

    println!("--- {} ---", r.nutrient);
    println!(
        "Current intake: {:.1} | Recommended action: {} by {:.1}",
        r.intake, adjustment.action, adjustment.gap
    );

    if !adjustment.recommendations.is_empty() {
        println!("Suggested food modifications:");

        let food_width = adjustment
            .recommendations
            .iter()
            .map(|rec| rec.food.chars().count())
            .max()
            .unwrap_or(10);

        for rec in adjustment.recommendations.iter() {
            println!(
                "  {:<width$}  {:>9}  {:>16}  {}",
                rec.food,
                format!("{:.1}g", rec.amount_grams),
                format!("{:.1}{}", rec.content_per_100, rec.unit),
                rec.action.title(),
                width = food_width
            );
        }

        let tips = nutrient_tips(&r.nutrient);
        if !tips.is_empty() {
            println!("Tips:");
            for tip in tips {
                println!("  - {}", tip);
            }
        }
    }

    println!();
}

/// Display the nutrients that need adjusting and the food changes suggested.
pub fn display_adjustments(adjustments: &[NutrientAdjustment]) {
    println!("=== Dietary Recommendations ===");
    println!();

    if adjustments.is_empty() {
        println!("Your nutrient intake appears to be adequate for all measured parameters!");
        println!();
        return;
    }

    println!("Your diet needs adjustment for the following nutrients:");
    println!();

    for adjustment in adjustments {
        display_adjustment(adjustment);
    }
}

/// Display a complete report.
pub fn display_report(report: &AnalysisReport, catalog: &ReferenceCatalog) {
    display_results(&report.results, catalog);
    display_adjustments(&report.adjustments);
}
