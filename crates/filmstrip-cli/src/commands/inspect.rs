use std::time::Instant;

use anyhow::{bail, Result};
use serde::Serialize;

use filmstrip_core::{
    Band, Container, Filmstrip, FilmstripConfig, Geometry, ScrollCommand, ScrollEvent,
    ScrollOrigin, StripLayout, Weight,
};

pub struct Options {
    pub scroll: Option<f64>,
    pub width: f64,
    pub json: bool,
}

/// Fixed viewport over a uniform strip; every write lands immediately
struct StaticView {
    layout: StripLayout,
    scroll: f64,
    width: f64,
}

impl Geometry for StaticView {
    fn item_offset(&self, slot: usize) -> f64 {
        self.layout.offset(slot)
    }

    fn item_width(&self, _slot: usize) -> f64 {
        self.layout.item_width
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.scroll = command.position.clamp(0.0, self.layout.max_scroll(self.width));
    }
}

#[derive(Debug, Serialize)]
struct SlotReport {
    slot: usize,
    band: &'static str,
    logical_index: usize,
    center: f64,
    scale: f64,
    opacity: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    items: usize,
    scroll: f64,
    viewport_width: f64,
    loop_shift: Option<f64>,
    closest_slot: Option<usize>,
    pending_correction: bool,
    slots: Vec<SlotReport>,
}

fn band_name(band: Band) -> &'static str {
    match band {
        Band::Leading => "leading",
        Band::Primary => "primary",
        Band::Trailing => "trailing",
    }
}

fn build_report(config: &FilmstripConfig, labels: Vec<String>, options: &Options) -> Result<Report> {
    if options.width <= 0.0 {
        bail!("Viewport width must be positive");
    }

    let mut container = Container::new(labels);
    let Some(mut strip) = Filmstrip::activate(&mut container, &config.carousel, Instant::now()) else {
        bail!(
            "Need at least {} items to build a looping strip, got {}",
            config.carousel.min_items.max(3),
            container.len()
        );
    };

    let mut view = StaticView {
        layout: StripLayout::new(
            container.len(),
            config.ui.item_width_px as f64,
            config.ui.item_gap_px as f64,
        ),
        scroll: 0.0,
        width: options.width,
    };
    strip.on_layout_ready(&mut view);

    if let Some(scroll) = options.scroll {
        view.scroll = scroll.clamp(0.0, view.layout.max_scroll(view.width));
        strip.handle_scroll(
            ScrollEvent {
                origin: ScrollOrigin::User,
            },
            Instant::now(),
        );
        strip.on_frame(&view);
    }

    let frame = strip.focus_frame();
    let slots = strip
        .registry()
        .iter()
        .map(|(slot, item)| {
            let weight = frame.weight(slot).unwrap_or(Weight {
                scale: 1.0,
                opacity: 1.0,
            });
            SlotReport {
                slot,
                band: band_name(item.band),
                logical_index: item.logical_index,
                center: view.item_center(slot),
                scale: weight.scale,
                opacity: weight.opacity,
            }
        })
        .collect();

    Ok(Report {
        items: strip.registry().logical_len(),
        scroll: view.scroll,
        viewport_width: view.width,
        loop_shift: strip.loop_shift(),
        closest_slot: strip.closest(&view).map(|c| c.slot),
        pending_correction: strip.state().pending_correction,
        slots,
    })
}

pub fn run(config: &FilmstripConfig, labels: Vec<String>, options: Options) -> Result<()> {
    let report = build_report(config, labels, &options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let shift = report
        .loop_shift
        .map(|s| format!("{:.1}px", s))
        .unwrap_or_else(|| "unavailable".to_string());
    println!(
        "Items: {}  Scroll: {:.1}px  Viewport: {:.0}px  Loop shift: {}",
        report.items, report.scroll, report.viewport_width, shift
    );
    println!();
    println!(
        "  {:>4}  {:<8}  {:>5}  {:>9}  {:>6}  {:>7}",
        "slot", "band", "item", "center", "scale", "opacity"
    );
    for row in &report.slots {
        let marker = if report.closest_slot == Some(row.slot) { "▶" } else { " " };
        println!(
            "{} {:>4}  {:<8}  {:>5}  {:>9.1}  {:>6.3}  {:>7.3}",
            marker, row.slot, row.band, row.logical_index, row.center, row.scale, row.opacity
        );
    }
    if report.pending_correction {
        println!("\nA clone is centered; the strip would jump by the loop shift once settled.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item {i}")).collect()
    }

    fn options(scroll: Option<f64>) -> Options {
        Options {
            scroll,
            width: 640.0,
            json: true,
        }
    }

    #[test]
    fn test_report_centers_first_original() {
        let config = FilmstripConfig::default();
        let report = build_report(&config, labels(5), &options(None)).unwrap();
        assert_eq!(report.items, 5);
        assert_eq!(report.slots.len(), 15);
        assert_eq!(report.loop_shift, Some(5.0 * 208.0));
        assert_eq!(report.closest_slot, Some(5));
        let centered = &report.slots[5];
        assert_eq!(centered.band, "primary");
        assert!((centered.scale - 1.04).abs() < 1e-9);
        assert!((centered.opacity - 1.0).abs() < 1e-9);
        assert!(!report.pending_correction);
    }

    #[test]
    fn test_report_flags_centered_clone() {
        let config = FilmstripConfig::default();
        // Center slot 2, the leading clone of item 2: 2 * 208 + 96 - 320
        let report = build_report(&config, labels(5), &options(Some(192.0))).unwrap();
        assert_eq!(report.closest_slot, Some(2));
        assert_eq!(report.slots[2].band, "leading");
        assert_eq!(report.slots[2].logical_index, 2);
        assert!(report.pending_correction);
    }

    #[test]
    fn test_report_rejects_short_lists() {
        let config = FilmstripConfig::default();
        assert!(build_report(&config, labels(2), &options(None)).is_err());
    }

    #[test]
    fn test_report_serializes() {
        let config = FilmstripConfig::default();
        let report = build_report(&config, labels(3), &options(None)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["slots"].as_array().unwrap().len(), 9);
        assert_eq!(json["slots"][0]["band"], "leading");
    }
}
