pub mod formatter;

pub use formatter::{
    band_color, format_breakdown, format_component_bars, format_distribution, format_json,
    format_metric_panels, format_report, format_score, format_summary, format_tsv, format_weight,
    get_terminal_width, should_use_colors,
};
