//! Reusable Dioxus RSX components for WXC chart apps.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod update_button;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use update_button::UpdateButton;
