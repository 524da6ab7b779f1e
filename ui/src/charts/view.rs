use dioxus::prelude::*;

use super::{ChartKind, ChartModel, ChartTheme};

const MARKER_RADIUS: f64 = 4.0;
const AREA_OPACITY: &str = "0.35";

#[component]
pub fn ProgressChart(model: ChartModel, theme: ChartTheme) -> Element {
    let view_box = format!("0 0 {} {}", model.width, model.height);
    let font_size = theme.font_size;
    let plot_right = model.plot_right();
    let plot_bottom = model.plot_bottom();
    let title_x = model.width / 2.0;
    let x_label_y = model.height - 8.0;
    let y_label_x = 14.0;
    let y_label_y = model.plot_top + model.plot_height / 2.0;
    let y_label_transform = format!("rotate(-90 {y_label_x} {y_label_y})");
    let swatch_x = plot_right + 16.0;
    let swatch_height = model.plot_height / model.color_bar.len().max(1) as f64;
    let swatch_label_x = swatch_x + 16.0;
    let swatches: Vec<(f64, f64, String, String)> = model
        .color_bar
        .iter()
        .enumerate()
        .map(|(idx, (color, label))| {
            let top = model.plot_top + swatch_height * idx as f64;
            (top, top + swatch_height / 2.0, color.clone(), label.clone())
        })
        .collect();
    let title_size = font_size + 4;
    let y_tick_x = model.plot_left - 6.0;
    let x_tick_y = plot_bottom + 16.0;
    let x_label_x = model.plot_left + model.plot_width / 2.0;
    let show_markers = matches!(model.kind, ChartKind::Line | ChartKind::Area);
    let aria = model.title.clone();

    rsx! {
        figure { class: "progress-chart",
            svg {
                class: "progress-chart__svg",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{aria}",
                rect {
                    width: "{model.width}",
                    height: "{model.height}",
                    fill: "{theme.paper}",
                }
                rect {
                    x: "{model.plot_left}",
                    y: "{model.plot_top}",
                    width: "{model.plot_width}",
                    height: "{model.plot_height}",
                    fill: "{theme.plot}",
                }
                text {
                    class: "progress-chart__title",
                    x: "{title_x}",
                    y: "24",
                    text_anchor: "middle",
                    fill: "{theme.font}",
                    font_size: "{title_size}",
                    "{model.title}"
                }

                for tick in model.y_ticks.iter() {
                    g { key: "y-{tick.label}",
                        line {
                            x1: "{model.plot_left}",
                            x2: "{plot_right}",
                            y1: "{tick.position}",
                            y2: "{tick.position}",
                            stroke: "{theme.grid}",
                            stroke_width: "1",
                        }
                        text {
                            x: "{y_tick_x}",
                            y: "{tick.position}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            fill: "{theme.font}",
                            font_size: "{font_size}",
                            "{tick.label}"
                        }
                    }
                }

                for tick in model.x_ticks.iter() {
                    text {
                        key: "x-{tick.label}",
                        x: "{tick.position}",
                        y: "{x_tick_y}",
                        text_anchor: "middle",
                        fill: "{theme.font}",
                        font_size: "{font_size}",
                        "{tick.label}"
                    }
                }

                if let Some(area) = model.area_path.as_ref() {
                    path {
                        class: "progress-chart__area",
                        d: "{area}",
                        fill: "{model.stroke}",
                        fill_opacity: AREA_OPACITY,
                        stroke: "none",
                    }
                }

                if let Some(line) = model.line_path.as_ref() {
                    path {
                        class: "progress-chart__line",
                        d: "{line}",
                        fill: "none",
                        stroke: "{model.stroke}",
                        stroke_width: "2",
                    }
                }

                for (idx, bar) in model.bars.iter().enumerate() {
                    rect {
                        key: "bar-{idx}",
                        class: "progress-chart__bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{bar.fill}",
                        title { "{bar.tooltip}" }
                    }
                }

                if show_markers {
                    for (idx, point) in model.points.iter().enumerate() {
                        circle {
                            key: "pt-{idx}",
                            class: "progress-chart__marker",
                            cx: "{point.x}",
                            cy: "{point.y}",
                            r: "{MARKER_RADIUS}",
                            fill: "{model.stroke}",
                            stroke: "{theme.paper}",
                            stroke_width: "1",
                            title { "{point.tooltip}" }
                        }
                    }
                }

                for (idx, (top, middle, color, label)) in swatches.iter().enumerate() {
                    g { key: "cb-{idx}",
                        rect {
                            x: "{swatch_x}",
                            y: "{top}",
                            width: "12",
                            height: "{swatch_height}",
                            fill: "{color}",
                        }
                        text {
                            x: "{swatch_label_x}",
                            y: "{middle}",
                            dominant_baseline: "middle",
                            fill: "{theme.font}",
                            font_size: "{font_size}",
                            "{label}"
                        }
                    }
                }

                text {
                    x: "{x_label_x}",
                    y: "{x_label_y}",
                    text_anchor: "middle",
                    fill: "{theme.font}",
                    font_size: "{font_size}",
                    "{model.x_label}"
                }
                text {
                    x: "{y_label_x}",
                    y: "{y_label_y}",
                    transform: "{y_label_transform}",
                    text_anchor: "middle",
                    fill: "{theme.font}",
                    font_size: "{font_size}",
                    "{model.y_label}"
                }
            }
        }
    }
}
