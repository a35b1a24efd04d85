//! Initial advice flow.
//!
//! The wizard's one-shot, non-streaming suggestion. Unlike chat turns,
//! failures here propagate to the caller so the wizard can render its own
//! fallback line.

use crate::prompts::system_prompt;
use moodmate_ai_adapters::{ChatApiError, ChatTransport};
use moodmate_core_types::InitialContext;

/// The user message summarizing what the wizard collected.
pub fn advice_user_message(context: &InitialContext) -> String {
    format!(
        "我刚才发生的事情：{}\n\n我现在的心情：{}\n心情强度：{}/10\n这个情绪的分类：{}",
        context.event,
        context.mood,
        context.intensity,
        context.category.as_str()
    )
}

/// Request the initial suggestion for a freshly completed wizard run.
pub async fn request_initial_advice(
    transport: &dyn ChatTransport,
    context: &InitialContext,
) -> Result<String, ChatApiError> {
    let prompt = system_prompt(Some(context.category), true);
    transport
        .initial_advice(&prompt, &advice_user_message(context))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmate_core_types::Category;

    #[test]
    fn user_message_follows_the_wizard_template() {
        let context = InitialContext {
            event: "迟到了".into(),
            mood: "anxious".into(),
            intensity: 7,
            category: Category::Problem,
        };
        assert_eq!(
            advice_user_message(&context),
            "我刚才发生的事情：迟到了\n\n我现在的心情：anxious\n心情强度：7/10\n这个情绪的分类：problem"
        );
    }
}
