use std::fmt::Write;

use sprout_core::models::summary::SummarySnapshot;
use sprout_protocols::age::{age_band_label, format_years_months};
use sprout_protocols::Protocol;

/// Format a summary snapshot as structured text for report generation.
pub fn render_summary(protocol: &Protocol, summary: &SummarySnapshot) -> String {
    let mut output = format!("## {}\n\n", protocol.name);
    for domain in &protocol.domains {
        let Some(ds) = summary.domain(&domain.id) else {
            continue;
        };
        let _ = writeln!(output, "### {}", domain.name);
        if !ds.has_data {
            output.push_str("- Not yet scored\n\n");
            continue;
        }
        let _ = writeln!(output, "- Scored items: {}", ds.total);
        let _ = writeln!(
            output,
            "- Mastered: {}, emerging: {}, absent: {}",
            ds.mastered_count, ds.emerging_count, ds.absent_count
        );
        let _ = writeln!(output, "- Percentage: {}%", ds.percentage);
        if let Some(age) = ds.developmental_age_months {
            let _ = writeln!(
                output,
                "- Developmental age: {} ({} band)",
                format_years_months(f64::from(age)),
                age_band_label(age)
            );
        }
        for sequence_id in &ds.ceiling_sequences {
            let name = domain
                .sequence(sequence_id)
                .map_or(sequence_id.as_str(), |s| s.name.as_str());
            let _ = writeln!(output, "- Ceiling reached: {name}");
        }
        output.push('\n');
    }

    if summary.has_data {
        let _ = writeln!(output, "Overall: {}%", summary.overall_percentage);
    } else {
        output.push_str("Overall: no data\n");
    }
    if let Some(age) = summary.overall_developmental_age_months {
        let _ = writeln!(output, "Overall developmental age: {}", format_years_months(age));
    }
    output
}
