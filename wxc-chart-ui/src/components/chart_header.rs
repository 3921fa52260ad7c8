//! Title row above each weather chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// What the Y axis measures, e.g. "Humedad relativa (%)". Empty hides
    /// the line.
    #[props(default = String::new())]
    pub unit_description: String,
}

/// `h3` title for one of the four chart slots, with an "Eje Y" line under
/// it when the slot has a unit to show.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Eje Y: {props.unit_description}"
                }
            }
        }
    }
}
