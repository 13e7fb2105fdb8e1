use crate::need::Need;

const PROMPT_TEMPLATE: &str = r#"You are an expert at creating effective search queries for Bino, a WhatsApp-based local search service in Bangalore.
User input: "{need}"
Generate 5 natural, detailed, hyper-local queries that maximize better deals/results (include urgency, budget, location, preferences where relevant).
Output ONLY a numbered list like:
1. best emergency hospital Koramangala today
2. 24/7 hospital near Indiranagar low fees urgent
No extra text."#;

/// Embeds the need verbatim into the query-expansion instruction.
pub fn build_prompt(need: &Need) -> String {
    PROMPT_TEMPLATE.replacen("{need}", need.as_str(), 1)
}
