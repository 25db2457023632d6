use crate::models::{ChatMessage, TranslateRequest};

pub const SYSTEM_PROMPT: &str = "You are an AI that translates text only. \
You will receive a text from the user and must only translate it. \
Do not answer, just translate the text. \
The original language is surrounded by `{{` and `}}`. \
The language you translate to is surrounded by `[[` and `]]`.";

/// Raw text followed by the delimited source and destination tags.
pub fn user_prompt(request: &TranslateRequest) -> String {
    format!(
        "{} {{{{ {} }}}} [[ {} ]]",
        request.text, request.from, request.to
    )
}

pub fn build_messages(request: &TranslateRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(request)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(from: &str, to: &str, text: &str) -> TranslateRequest {
        TranslateRequest {
            from: from.into(),
            to: to.into(),
            text: text.into(),
        }
    }

    #[test]
    fn user_prompt_wraps_languages_in_delimiters() {
        let prompt = user_prompt(&request("English", "Spanish", "Hello"));
        assert_eq!(prompt, "Hello {{ English }} [[ Spanish ]]");
    }

    #[test]
    fn empty_fields_pass_through() {
        let prompt = user_prompt(&request("", "", "Hello"));
        assert_eq!(prompt, "Hello {{  }} [[  ]]");
    }

    #[test]
    fn messages_are_single_turn() {
        let messages = build_messages(&request("English", "French", "Good night"));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.as_deref().unwrap().contains("`[[` and `]]`"));
        assert_eq!(messages[1].role, "user");
        assert_eq!(
            messages[1].content.as_deref(),
            Some("Good night {{ English }} [[ French ]]")
        );
    }
}
