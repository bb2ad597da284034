//! Fixed instructions and user-facing fallback strings.

/// Steering text for the chat relay.
pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are Vermeer, a friendly social media strategist \
inside a content studio. Give concise, practical advice about content ideas, audience growth, \
posting cadence and engagement. Use short paragraphs or bullet points, and keep answers under \
200 words unless the user asks for more detail.";

/// Steering text for the command router.
pub const ROUTER_SYSTEM_INSTRUCTION: &str = "You are the intelligence layer of a social media \
management studio. Pick the one available function that fulfils the user's request and call it \
with every argument you can infer. Use ISO 8601 for dates and times. Use short period labels \
such as last7days or last30days. If no function applies, answer briefly without calling one.";

/// Reply the chat relay returns when anything goes wrong.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Router reply when the model did not call a function.
pub const REPHRASE_MESSAGE: &str =
    "I couldn't match that to an action. Could you please rephrase your request?";

/// Router reply when the remote call or a handler failed.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// Router reply for a function name the router does not know.
pub fn unimplemented_function_message(name: &str) -> String {
    format!("Function {} is not implemented.", name)
}

/// Prompt for the visual concept generator.
pub fn concept_prompt(brand: &str, tone: &str, brief: &str) -> String {
    format!(
        "You are the creative director for the brand \"{brand}\". The brand voice is {tone}.\n\
         Propose up to three distinct visual concepts for a social media post based on this brief:\n\
         \"{brief}\"\n\
         For each concept give a short title, a vivid description of the image that can be used \
         directly as an image-generation prompt, a palette of three to five hex colors, a post \
         caption written in the brand voice, concise alt text, and the aspect ratio that best \
         suits the concept."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_prompt_mentions_all_inputs() {
        let prompt = concept_prompt("Lumen Coffee", "warm", "autumn menu launch");

        assert!(prompt.contains("\"Lumen Coffee\""));
        assert!(prompt.contains("voice is warm"));
        assert!(prompt.contains("\"autumn menu launch\""));
    }

    #[test]
    fn test_unimplemented_message_names_function() {
        assert_eq!(
            unimplemented_function_message("deletePost"),
            "Function deletePost is not implemented."
        );
    }
}
