//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the canvas (Chart.js will draw into this)
    pub id: String,
    /// Whether the data behind the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A wrapper around the `<canvas>` a chart is drawn on, with a loading overlay.
///
/// The canvas is always mounted, so a chart can be drawn as soon as data
/// arrives.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Cargando datos..."
                }
            }
            canvas {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
