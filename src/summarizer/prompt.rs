use crate::summarizer::SUMMARY_MAX_CHARS;

/// Fixed instruction placed before the page text.
pub fn build_prompt(text: &str, language: &str) -> String {
    format!(
        "Summarize the following text in {language} as a single line of at most \
         {SUMMARY_MAX_CHARS} characters. Reply with the summary only.\n\n{text}"
    )
}
