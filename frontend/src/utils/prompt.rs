use landing_core::leads::EmailPrompt;

/// `window.prompt` backed dialog.
pub struct WindowPrompt;

impl EmailPrompt for WindowPrompt {
    fn ask(&self, message: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Prompt failed: {:?}", e);
                None
            }
        }
    }
}
