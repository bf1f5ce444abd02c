use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::eyre;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use bitsea_core::{FieldConfig, PRESETS};
use bitsea_field::BinaryField;

/// Target frame interval (~60Hz).
const TICK: Duration = Duration::from_millis(16);

/// Control ranges enforced by this surface. The field itself never clamps;
/// values outside these ranges (for example from a config file) are passed
/// through untouched until the first keyboard adjustment.
const DENSITY_RANGE: (usize, usize) = (50, 300);
const DENSITY_STEP: usize = 10;
const SPEED_RANGE: (f32, f32) = (0.1, 3.0);
const SPEED_STEP: f32 = 0.1;
const AMPLITUDE_RANGE: (f32, f32) = (0.0, 100.0);
const AMPLITUDE_STEP: f32 = 5.0;
const FREQUENCY_RANGE: (f32, f32) = (0.005, 0.05);
const FREQUENCY_STEP: f32 = 0.005;
const FONT_RANGE: (f32, f32) = (8.0, 24.0);
const FONT_STEP: f32 = 1.0;

#[derive(Debug, Parser)]
#[command(version, about = "A flowing sea of binary digits for your terminal")]
struct Cli {
    /// Start from a named preset (see --list-presets).
    #[arg(long)]
    preset: Option<String>,
    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed the animation deterministically.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the preset names and exit.
    #[arg(long)]
    list_presets: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.list_presets {
        for preset in PRESETS {
            println!("{}", preset.name);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => bitsea_config::load_from(path)?,
        None => bitsea_config::load()?,
    };
    let (config, preset_index) = match &cli.preset {
        Some(name) => {
            let index = PRESETS
                .iter()
                .position(|p| p.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| eyre!("unknown preset `{name}`, try --list-presets"))?;
            (PRESETS[index].apply(&config), Some(index))
        }
        None => (config, None),
    };

    let terminal = ratatui::init();
    let result = App::new(config, preset_index, cli.seed).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
struct App {
    /// Is the application running?
    running: bool,
    /// Configuration the current field was built from.
    config: FieldConfig,
    /// The animated field.
    field: BinaryField,
    /// Index into [`PRESETS`] when the current config came from a preset.
    preset_index: Option<usize>,
    /// Seed override from the CLI; fresh time-based seeds otherwise.
    fixed_seed: Option<u64>,
    /// Start of the current frame interval.
    last_tick: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    fn new(config: FieldConfig, preset_index: Option<usize>, fixed_seed: Option<u64>) -> Self {
        let field = BinaryField::new(config.clone(), seed_or_now(fixed_seed));
        Self {
            running: false,
            config,
            field,
            preset_index,
            fixed_seed,
            last_tick: Instant::now(),
        }
    }

    /// Run the application's main loop.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Animated field
            Constraint::Length(1), // Parameter readout
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        bitsea_field::render(&self.field, frame, chunks[0]);

        let accent = self.config.colors.primary.to_color();
        let preset_label = self
            .preset_index
            .map(|i| PRESETS[i].name)
            .unwrap_or("custom");
        let status = format!(
            "density {}  speed {:.1}  amplitude {:.0}  frequency {:.3}  size {:.0}  [{}]",
            self.config.density,
            self.config.speed,
            self.config.wave_amplitude,
            self.config.wave_frequency,
            self.config.font_size,
            preset_label,
        );
        frame.render_widget(
            Paragraph::new(status).style(Style::new().dark_gray()).centered(),
            chunks[1],
        );

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "p".bold().fg(accent),
            " preset  ".dark_gray(),
            "r".bold().fg(accent),
            " restart  ".dark_gray(),
            "d/D s/S a/A f/F g/G".bold().fg(accent),
            " density/speed/amplitude/frequency/size".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[2]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the remaining frame budget so the animation ticks at a
    /// steady rate whether or not keys arrive.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = TICK.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        if self.last_tick.elapsed() >= TICK {
            self.field.update();
            self.last_tick = Instant::now();
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.cycle_preset(),
            (_, KeyCode::Char('r')) => self.rebuild(),
            (_, KeyCode::Char('d')) => self.adjust(|c| {
                c.density = step_density(c.density, false);
            }),
            (_, KeyCode::Char('D')) => self.adjust(|c| {
                c.density = step_density(c.density, true);
            }),
            (_, KeyCode::Char('s')) => self.adjust(|c| {
                c.speed = step(c.speed, -SPEED_STEP, SPEED_RANGE);
            }),
            (_, KeyCode::Char('S')) => self.adjust(|c| {
                c.speed = step(c.speed, SPEED_STEP, SPEED_RANGE);
            }),
            (_, KeyCode::Char('a')) => self.adjust(|c| {
                c.wave_amplitude = step(c.wave_amplitude, -AMPLITUDE_STEP, AMPLITUDE_RANGE);
            }),
            (_, KeyCode::Char('A')) => self.adjust(|c| {
                c.wave_amplitude = step(c.wave_amplitude, AMPLITUDE_STEP, AMPLITUDE_RANGE);
            }),
            (_, KeyCode::Char('f')) => self.adjust(|c| {
                c.wave_frequency = step(c.wave_frequency, -FREQUENCY_STEP, FREQUENCY_RANGE);
            }),
            (_, KeyCode::Char('F')) => self.adjust(|c| {
                c.wave_frequency = step(c.wave_frequency, FREQUENCY_STEP, FREQUENCY_RANGE);
            }),
            (_, KeyCode::Char('g')) => self.adjust(|c| {
                c.font_size = step(c.font_size, -FONT_STEP, FONT_RANGE);
            }),
            (_, KeyCode::Char('G')) => self.adjust(|c| {
                c.font_size = step(c.font_size, FONT_STEP, FONT_RANGE);
            }),
            _ => {}
        }
    }

    /// Apply a manual parameter change and rebuild the field.
    fn adjust(&mut self, change: impl FnOnce(&mut FieldConfig)) {
        change(&mut self.config);
        self.preset_index = None;
        self.rebuild();
    }

    /// Replace the whole configuration with the next preset.
    fn cycle_preset(&mut self) {
        let next = match self.preset_index {
            Some(i) => (i + 1) % PRESETS.len(),
            None => 0,
        };
        self.preset_index = Some(next);
        self.config = PRESETS[next].apply(&self.config);
        self.rebuild();
    }

    /// Tear the field down and rebuild it from the current configuration.
    /// The population and frame counter start over.
    fn rebuild(&mut self) {
        self.field = BinaryField::new(self.config.clone(), seed_or_now(self.fixed_seed));
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// A fixed seed when one was given, otherwise the current time in
/// nanoseconds.
fn seed_or_now(fixed: Option<u64>) -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    fixed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

/// Step a float control, clamped to its documented range.
fn step(value: f32, delta: f32, (min, max): (f32, f32)) -> f32 {
    (value + delta).clamp(min, max)
}

/// Step the density control, clamped to its documented range.
fn step_density(value: usize, up: bool) -> usize {
    let stepped = if up {
        value.saturating_add(DENSITY_STEP)
    } else {
        value.saturating_sub(DENSITY_STEP)
    };
    stepped.clamp(DENSITY_RANGE.0, DENSITY_RANGE.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_clamp_to_their_ranges() {
        assert_eq!(step(0.1, -SPEED_STEP, SPEED_RANGE), 0.1);
        assert_eq!(step(3.0, SPEED_STEP, SPEED_RANGE), 3.0);
        assert_eq!(step(0.0, -AMPLITUDE_STEP, AMPLITUDE_RANGE), 0.0);
        assert_eq!(step_density(50, false), 50);
        assert_eq!(step_density(300, true), 300);
        assert_eq!(step_density(100, true), 110);
        // Out-of-range config values are pulled back in on first use.
        assert_eq!(step_density(20, true), 50);
        assert_eq!(step_density(1000, false), 300);
    }

    #[test]
    fn preset_cycle_replaces_the_configuration() {
        let mut app = App::new(FieldConfig::default(), None, Some(1));
        app.cycle_preset();
        assert_eq!(app.preset_index, Some(0));
        assert_eq!(app.config.density, PRESETS[0].density);
        assert_eq!(app.field.frame_count(), 0);
        assert_eq!(app.field.glyphs().len(), PRESETS[0].density);

        // A manual adjustment leaves preset mode.
        app.adjust(|c| c.speed = step(c.speed, SPEED_STEP, SPEED_RANGE));
        assert_eq!(app.preset_index, None);
    }
}
