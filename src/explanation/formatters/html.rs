use pulldown_cmark::{html, Options, Parser};
use crate::explanation::types::Prediction;

/// HTML formatter: renders the markdown report for display
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// HTML fragment for a prediction's explanation
    pub fn format(prediction: &Prediction) -> String {
        Self::render_markdown(&prediction.details())
    }

    pub fn render_markdown(markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);
        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report_markup() {
        let out = HtmlFormatter::render_markdown(
            "**Individual Impact Assessments:**\n\n* **Charge:** No significant charge change.\n* **Motif:** `RPQSPVGTGSY`\n",
        );
        assert!(out.contains("<strong>Individual Impact Assessments:</strong>"));
        assert!(out.contains("<li><strong>Charge:</strong> No significant charge change.</li>"));
        assert!(out.contains("<code>RPQSPVGTGSY</code>"));
    }
}
