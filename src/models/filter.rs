/// The two moderation objects attached to each generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResultKind {
    Prompt,
    Content,
}

impl FilterResultKind {
    pub const ALL: [FilterResultKind; 2] = [FilterResultKind::Prompt, FilterResultKind::Content];

    /// Field name on the service response.
    pub fn key(&self) -> &'static str {
        match self {
            FilterResultKind::Prompt => "prompt_filter_results",
            FilterResultKind::Content => "content_filter_results",
        }
    }

    pub fn report_file_name(&self) -> String {
        format!("{}_report.csv", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_follow_key() {
        assert_eq!(
            FilterResultKind::Prompt.report_file_name(),
            "prompt_filter_results_report.csv"
        );
        assert_eq!(
            FilterResultKind::Content.report_file_name(),
            "content_filter_results_report.csv"
        );
    }
}
