//! Geometry of the click ripple and options for the entrance animations.

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTORS: &str = ".feature-card, .benefit-item, .metric";
pub const REVEAL_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Size and position of a ripple, relative to the clicked button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Centers a square ripple, as large as the button's longer side, on the
    /// click point. `rect_*` is the button's client rect.
    pub fn at_click(
        rect_left: f64,
        rect_top: f64,
        rect_width: f64,
        rect_height: f64,
        client_x: f64,
        client_y: f64,
    ) -> Self {
        let size = rect_width.max(rect_height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}
