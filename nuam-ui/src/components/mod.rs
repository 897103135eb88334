//! Reusable Dioxus RSX components for the NUAM pages.

mod chart_canvas;
mod error_display;
mod login_form;
mod pill_buttons;
mod selector;
mod sidebar;
mod status_text;

pub use chart_canvas::ChartCanvas;
pub use error_display::ErrorDisplay;
pub use login_form::LoginForm;
pub use pill_buttons::PillButtons;
pub use selector::{CountryPills, IndicatorPills};
pub use sidebar::SidebarLayout;
pub use status_text::StatusText;
