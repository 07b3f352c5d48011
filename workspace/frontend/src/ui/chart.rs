use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Transparent layout shared by every chart, merged under `overrides`.
pub fn base_layout(overrides: Value) -> Value {
    let mut layout = serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"},
    });
    if let (Some(base), Value::Object(extra)) = (layout.as_object_mut(), overrides) {
        base.extend(extra);
    }
    layout
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub id: AttrValue,
    pub data: Value,
    #[prop_or_else(|| base_layout(Value::Null))]
    pub layout: Value,
    #[prop_or(300)]
    pub height: u32,
}

/// Plotly chart drawn into its own div; redrawn whenever the traces change.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with((props.data.clone(), props.layout.clone()), move |(data, layout)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let config = serde_json::json!({"responsive": true, "displayModeBar": false});
                let values = (
                    serde_wasm_bindgen::to_value(data),
                    serde_wasm_bindgen::to_value(layout),
                    serde_wasm_bindgen::to_value(&config),
                );
                match values {
                    (Ok(data), Ok(layout), Ok(config)) => {
                        new_plot(&element.id(), data, layout, config)
                    }
                    _ => log::error!("Failed to convert chart {} for Plotly", element.id()),
                }
            }
            || ()
        });
    }

    html! {
        <div
            ref={chart_ref}
            id={props.id.clone()}
            class="chart-container w-full"
            style={format!("height: {}px;", props.height)}
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_overrides() {
        let layout = base_layout(serde_json::json!({"barmode": "stack", "yaxis": {"title": "INR"}}));
        assert_eq!(layout["barmode"], "stack");
        assert_eq!(layout["yaxis"]["title"], "INR");
        assert_eq!(layout["paper_bgcolor"], "rgba(0,0,0,0)");
    }
}
