use crate::explanation::types::ImpactReport;

/// Markdown formatter for impact reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a report as markdown
    ///
    /// Layout: plausibility sentence, mutation header, fenced motif, one bullet
    /// per factor, total score, overall category, disease section.
    pub fn format(report: &ImpactReport) -> String {
        let mut md = String::with_capacity(2048);

        if report.is_acceptor_loss() {
            md.push_str("**Complete loss of phosphorylation capability**\n\n");
            Self::format_disease(&mut md, report);
            return md;
        }

        if let Some(note) = &report.plausibility {
            md.push_str(note);
        }

        md.push_str(&format!("\n\n**Mutation Analysis for {}:**\n\n", report.kinase));
        md.push_str(&format!(
            "* **Position {}:** {} → {}\n",
            report.position + 1,
            report.original,
            report.mutated
        ));
        md.push_str(&format!("* **Motif:** `{}`\n\n", report.motif));

        md.push_str("**Individual Impact Assessments:**\n\n");
        for factor in &report.factors {
            md.push_str(&format!("* **{}:** {}\n", factor.factor, factor.explanation));
        }
        md.push('\n');

        if let Some(score) = report.score {
            md.push_str(&format!("**Total Impact Score:** `{:.1}%`\n\n", score));
        }
        md.push_str(&format!("**Overall Assessment:** `{}`\n\n", report.category));

        Self::format_disease(&mut md, report);
        md
    }

    fn format_disease(md: &mut String, report: &ImpactReport) {
        md.push_str("**Disease Association:**\n");
        md.push_str(&report.disease.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disease_association::DiseaseAssociation;
    use crate::metrics::{Factor, FactorResult};
    use crate::utils::{AminoAcid, ImpactCategory};

    fn report(score: Option<f64>) -> ImpactReport {
        let factors = if score.is_some() {
            Factor::ALL
                .iter()
                .map(|&f| FactorResult::new(f, 0.0, format!("No significant {} change.", f.label().to_lowercase())))
                .collect()
        } else {
            Vec::new()
        };

        ImpactReport {
            kinase: "PKA".into(),
            gene: "PRKACA".into(),
            motif: "RRASVAGSLSK".into(),
            position: 5,
            original: AminoAcid::Val,
            mutated: AminoAcid::Ala,
            category: ImpactCategory::MinimalImpact,
            score,
            plausibility: score.map(|_| "The mutation from V to A is experimentally validated.".into()),
            factors,
            disease: DiseaseAssociation::NoData,
        }
    }

    #[test]
    fn test_full_report_layout() {
        let md = MarkdownFormatter::format(&report(Some(0.0)));

        assert!(md.starts_with(
            "The mutation from V to A is experimentally validated.\n\n**Mutation Analysis for PKA:**\n\n"
        ));
        assert!(md.contains("* **Position 6:** V → A\n* **Motif:** `RRASVAGSLSK`\n\n"));
        assert!(md.contains("* **Charge:** No significant charge change.\n"));
        assert!(md.contains("* **Aromatic:** No significant aromatic change.\n\n**Total Impact Score:** `0.0%`"));
        assert!(md.contains("**Overall Assessment:** `Minimal Impact`\n\n"));
        assert!(md.ends_with("**Disease Association:**\nNo disease association data available."));
    }

    #[test]
    fn test_acceptor_loss_layout() {
        let md = MarkdownFormatter::format(&report(None));
        assert_eq!(
            md,
            "**Complete loss of phosphorylation capability**\n\n**Disease Association:**\nNo disease association data available."
        );
    }
}
