/// Greets developers who open the browser console.
pub fn welcome_banner() {
    gloo_console::log!(
        "%c✨ Ayenyo AI",
        "color: #3b82f6; font-size: 20px; font-weight: bold; text-shadow: 0 0 10px rgba(59, 130, 246, 0.5);"
    );
    gloo_console::log!(
        "%cTransforming healthcare through intelligent AI assistance",
        "color: #8b5cf6; font-size: 14px;"
    );
    gloo_console::log!("Interested in our technology? Contact us at hello@ayenyo.com");
}
