/*!
 * Prompt construction for the lemmatizer.
 *
 * The system instruction is a template with `{source_language}` and
 * `{target_language}` placeholders; the user message carries the raw token.
 */

/// Fill the system prompt template with resolved language names
pub fn render_system_prompt(template: &str, source_name: &str, target_name: &str) -> String {
    template
        .replace("{source_language}", source_name)
        .replace("{target_language}", target_name)
}

/// Build the user message for one token
pub fn render_user_message(token: &str) -> String {
    format!("Input: '{}'", token.trim())
}
