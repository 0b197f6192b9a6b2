use std::collections::HashMap;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DisplayConfig;
use crate::stage::{StageMarker, STAGES};
use crate::tracker::TrackerView;

pub struct Display {
    bar_width: usize,
    labels: HashMap<String, String>,
}

impl Display {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            bar_width: config.bar_width,
            labels: config.labels.clone(),
        }
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
        println!();
    }

    /// Print one full progress frame: current stage, bar, rows, notice.
    pub fn print_frame(&self, view: &TrackerView) {
        let label = self
            .labels
            .get(&view.stage_id)
            .map(String::as_str)
            .unwrap_or(view.label);

        println!("{}  {}", view.indicator, style(label).white().bold());

        if !view.status_message.is_empty() {
            println!("   {}", style(&view.status_message).dim());
        }

        println!(
            "   {} {}%",
            self.progress_bar(view.snapshot.percent),
            view.snapshot.percent
        );
        println!();

        for marker in &view.markers {
            self.print_stage_row(marker);
        }

        println!();
        println!("   {}", style(view.notice).dim().italic());
    }

    pub fn print_stage_catalogue(&self) {
        println!(
            "{:<12} {:<28} {}",
            style("ID").bold(),
            style("Label").bold(),
            style("Indicator").bold()
        );
        println!("{}", style("─".repeat(48)).dim());

        for def in &STAGES {
            println!("{:<12} {:<28} {}", def.id.as_str(), def.label, def.indicator);
        }
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{} {}", style("→").cyan(), message);
    }

    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("static template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }

    fn print_stage_row(&self, marker: &StageMarker) {
        // Completed and active are independent facets; both can apply to the
        // same row and each gets its own glyph slot.
        let check = if marker.completed {
            style("✓").green().to_string()
        } else {
            style("·").dim().to_string()
        };
        let arrow = if marker.active {
            style("→").cyan().bold().to_string()
        } else {
            " ".to_string()
        };

        let name = if marker.active {
            style(marker.id.as_str()).white().bold().to_string()
        } else if marker.completed {
            style(marker.id.as_str()).green().to_string()
        } else {
            style(marker.id.as_str()).dim().to_string()
        };

        println!("   {} {} {}", check, arrow, name);
    }

    fn progress_bar(&self, percentage: u8) -> String {
        let filled = (self.bar_width as f64 * percentage as f64 / 100.0) as usize;
        let empty = self.bar_width - filled;

        format!(
            "{}{}",
            style("█".repeat(filled)).green(),
            style("░".repeat(empty)).dim()
        )
    }
}
