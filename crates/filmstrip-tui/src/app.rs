use std::time::Instant;

use filmstrip_core::{
    Band, Container, Filmstrip, FilmstripConfig, Geometry, Interaction, KeyOutcome, NavKey,
    PaddedItem, Weight,
};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::input::Action;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// How the strip is currently behaving, for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fewer items than the loop needs; plain scrolling
    Inert,
    /// Reduced motion: looping only
    Reduced,
    Paused,
    Playing,
}

/// Application state
pub struct App {
    pub config: FilmstripConfig,
    pub container: Container<String>,
    pub strip: Option<Filmstrip>,
    pub viewport: Viewport,
    pub theme: Theme,
    pub should_quit: bool,
    pub status_message: Option<String>,
    strip_area: Option<Rect>,
    pointer_inside: bool,
    keyboard_focus: bool,
    drag_anchor: Option<u16>,
}

impl App {
    pub fn new(labels: Vec<String>, config: FilmstripConfig, theme: Theme, now: Instant) -> Self {
        let mut container = Container::new(labels);
        let strip = Filmstrip::activate(&mut container, &config.carousel, now);
        let status_message = if strip.is_none() {
            info!(items = container.len(), "Looping disabled");
            Some(format!(
                "Looping needs at least {} items",
                config.carousel.min_items.max(3)
            ))
        } else {
            None
        };
        let viewport = Viewport::new(container.len(), &config.ui, now);

        Self {
            config,
            container,
            strip,
            viewport,
            theme,
            should_quit: false,
            status_message,
            strip_area: None,
            pointer_inside: false,
            keyboard_focus: false,
            drag_anchor: None,
        }
    }

    pub fn strip_area(&self) -> Option<Rect> {
        self.strip_area
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn has_keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    /// Record where the strip is drawn. The first call is the initial layout
    /// pass; later width changes are resizes.
    pub fn set_strip_area(&mut self, area: Rect) {
        let first = self.strip_area.is_none();
        self.strip_area = Some(area);
        let resized = self.viewport.set_width_cells(area.width);
        if let Some(strip) = self.strip.as_mut() {
            if first {
                strip.on_layout_ready(&mut self.viewport);
            } else if resized {
                debug!(width = area.width, "Strip resized");
                strip.on_resize(&self.viewport);
            }
        }
    }

    /// Advance animation, deliver scroll events, run frame and timer hooks
    pub fn tick(&mut self, now: Instant) {
        self.viewport.advance(now);
        let events = self.viewport.take_events();
        if let Some(strip) = self.strip.as_mut() {
            for event in events {
                strip.handle_scroll(event, now);
            }
            strip.on_frame(&self.viewport);
            strip.on_tick(&mut self.viewport, now);
        }
    }

    /// Whether the loop should poll at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.viewport.is_moving()
            || self
                .strip
                .as_ref()
                .is_some_and(|s| s.frame_pending() || s.settle_armed())
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(key) => self.navigate(key),
            Action::Scroll(notches) => {
                let step = self.viewport.wheel_step();
                self.viewport.user_scroll(notches as f64 * step);
            }
            Action::Interact(interaction) => self.interact(interaction),
            Action::Press(column) => {
                self.drag_anchor = Some(column);
                self.interact(Interaction::TouchStart);
            }
            Action::DragTo(column) => {
                if let Some(anchor) = self.drag_anchor.replace(column) {
                    let delta = anchor as f64 - column as f64;
                    self.viewport.user_scroll(delta * self.viewport.cell_px());
                }
            }
            Action::Release => {
                self.drag_anchor = None;
                self.interact(Interaction::TouchEnd);
            }
            Action::ToggleFocus => {
                let interaction = if self.keyboard_focus {
                    Interaction::FocusOut
                } else {
                    Interaction::FocusIn
                };
                self.interact(interaction);
            }
            Action::None => {}
        }
    }

    /// Terminal window lost focus
    pub fn focus_lost(&mut self) {
        if self.keyboard_focus {
            self.interact(Interaction::FocusOut);
        }
        if self.pointer_inside {
            self.interact(Interaction::PointerLeave);
        }
    }

    /// Any pause source still active: hover, keyboard focus or a press
    fn interaction_held(&self) -> bool {
        self.pointer_inside || self.keyboard_focus || self.drag_anchor.is_some()
    }

    fn interact(&mut self, interaction: Interaction) {
        let resumes = match interaction {
            Interaction::PointerEnter => {
                self.pointer_inside = true;
                false
            }
            Interaction::PointerLeave => {
                self.pointer_inside = false;
                true
            }
            Interaction::FocusIn => {
                self.keyboard_focus = true;
                false
            }
            Interaction::FocusOut => {
                self.keyboard_focus = false;
                true
            }
            Interaction::TouchStart => false,
            Interaction::TouchEnd => true,
        };
        // The controller keeps one paused flag; only resume once every source has ended
        if resumes && self.interaction_held() {
            debug!(?interaction, "Pause still held by another interaction");
            return;
        }
        if let Some(strip) = self.strip.as_mut() {
            strip.handle_interaction(interaction);
        }
    }

    fn navigate(&mut self, key: NavKey) {
        let intercepts = self
            .strip
            .as_ref()
            .is_some_and(|strip| strip.keyboard_enabled() && key != NavKey::Other);
        // Stepping with the arrows focuses the strip, so Tab or focus loss resumes
        if intercepts && !self.keyboard_focus {
            self.interact(Interaction::FocusIn);
        }
        let outcome = match self.strip.as_mut() {
            Some(strip) => strip.handle_key(key, &mut self.viewport),
            None => KeyOutcome::Ignored,
        };
        if outcome == KeyOutcome::Handled {
            return;
        }
        // Default arrow behavior: scroll by one item
        let pitch = self.viewport.layout().pitch();
        match key {
            NavKey::ArrowLeft => self.viewport.user_scroll(-pitch),
            NavKey::ArrowRight => self.viewport.user_scroll(pitch),
            NavKey::Other => {}
        }
    }

    /// Host is shutting down
    pub fn teardown(&mut self) {
        if let Some(strip) = self.strip.as_mut() {
            strip.teardown();
        }
    }

    pub fn mode(&self) -> Mode {
        match &self.strip {
            None => Mode::Inert,
            Some(strip) if !strip.autoplay_enabled() => Mode::Reduced,
            Some(strip) if strip.state().paused => Mode::Paused,
            Some(_) => Mode::Playing,
        }
    }

    /// Slot nearest the viewport center
    pub fn active_slot(&self) -> Option<usize> {
        match &self.strip {
            Some(strip) => strip.closest(&self.viewport).map(|c| c.slot),
            None => {
                let center = self.viewport.viewport_center();
                (0..self.container.len()).min_by(|&a, &b| {
                    let da = (self.viewport.item_center(a) - center).abs();
                    let db = (self.viewport.item_center(b) - center).abs();
                    da.total_cmp(&db)
                })
            }
        }
    }

    pub fn active_item(&self) -> Option<PaddedItem> {
        let slot = self.active_slot()?;
        match &self.strip {
            Some(strip) => strip.registry().item(slot),
            None => Some(PaddedItem {
                logical_index: slot,
                band: Band::Primary,
            }),
        }
    }

    pub fn label(&self, slot: usize) -> &str {
        self.container
            .children()
            .get(slot)
            .map(|child| child.content.as_str())
            .unwrap_or("")
    }

    /// Visual weight of a slot; full weight when the strip is inert
    pub fn weight(&self, slot: usize) -> Weight {
        let peak = Weight {
            scale: self.config.carousel.focus.peak_scale,
            opacity: 1.0,
        };
        self.strip
            .as_ref()
            .and_then(|strip| strip.focus_frame().weight(slot))
            .unwrap_or(peak)
    }

    pub fn logical_len(&self) -> usize {
        self.strip
            .as_ref()
            .map(|strip| strip.registry().logical_len())
            .unwrap_or(self.container.len())
    }
}
