// ui.rs - eframe front end
//
// The window never reads simulation state cell by cell. It keeps its own
// copy of what is on screen and patches it from the controller's full or
// sparse render output whenever the controller says a repaint is owed.

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::{Error, POLL_INTERVAL, RenderRequest, SimulationController};
use tracing::info;

pub const BOX_SIZE: f32 = 15.0;
pub const SPACING: f32 = 0.5;

const INSERT_HINT: &str = "Click on a cell to place the object, or Esc to cancel";

/// Modal notice shown after a failed command.
struct Notice {
    title: &'static str,
    message: String,
}

pub struct LifeApp {
    controller: SimulationController,
    shown: Vec<bool>,
    live_color: Color32,
    dead_color: Color32,
    speed_level: u8,
    notice: Option<Notice>,
}

impl LifeApp {
    pub fn new(controller: SimulationController) -> Self {
        let grid = controller.grid();
        let shown = vec![false; grid.rows() * grid.cols()];
        let speed_level = controller.speed().level();
        Self {
            controller,
            shown,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            speed_level,
            notice: None,
        }
    }

    /// Applies whatever repaint the controller has queued to `shown`.
    fn sync_board(&mut self) {
        let cells = match self.controller.take_render_request() {
            Some(RenderRequest::Full) => self.controller.full_render(),
            Some(RenderRequest::Sparse) => self.controller.render_diff(),
            None => return,
        };
        let cols = self.controller.grid().cols();
        for cell in cells {
            self.shown[cell.row * cols + cell.col] = cell.alive;
        }
    }

    /// The notice window is modal: while it is open the board ignores clicks.
    fn board_click(&mut self, row: usize, col: usize) {
        if self.notice.is_some() {
            return;
        }
        let result = self.controller.click(row, col);
        self.report(result);
    }

    fn report(&mut self, result: life_engine::Result<()>) {
        let Err(err) = result else { return };
        self.notice = Some(match err {
            Error::OutOfRange { .. } => Notice {
                title: "Out of Range",
                message: "Not enough room to place object!".to_string(),
            },
            other => Notice { title: "Error", message: other.to_string() },
        });
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        let seeds: Vec<String> = self.controller.catalog().seed_names().map(String::from).collect();
        let entities: Vec<String> = self.controller.catalog().entity_names().map(String::from).collect();
        let mut chosen_seed = None;
        let mut chosen_entity = None;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                ui.menu_button("Open Seed", |ui| {
                    for name in &seeds {
                        if ui.button(name).clicked() {
                            chosen_seed = Some(name.clone());
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("Insert", |ui| {
                    for name in &entities {
                        if ui.button(name).clicked() {
                            chosen_entity = Some(name.clone());
                            ui.close_menu();
                        }
                    }
                });
                if ui.add(egui::Button::new("Exit").shortcut_text("Ctrl+Q")).clicked() {
                    quit(ui.ctx());
                }
            });
        });

        if let Some(name) = chosen_seed {
            let result = self.controller.choose_seed(&name);
            self.report(result);
        }
        if let Some(name) = chosen_entity {
            let result = self.controller.choose_insert(&name);
            self.report(result);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Tick: {}", self.controller.turn())).strong().size(16.0));

            let button_text = if self.controller.is_running() { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.controller.start_pause();
            }

            if ui.button("⟲ Reset").clicked() {
                let result = self.controller.reset();
                self.report(result);
            }

            if ui.button("⏹ Clear").clicked() {
                self.controller.clear();
            }

            ui.separator();

            if ui.add(egui::Slider::new(&mut self.speed_level, 1..=5).text("Speed")).changed() {
                let result = self.controller.set_speed_level(self.speed_level);
                self.report(result);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        if let Some(pattern) = self.controller.pending_insert() {
            ui.label(egui::RichText::new(format!("{}: {INSERT_HINT}", pattern.name())).italics());
        }
    }

    /// Paints `shown` and returns the cell that was clicked, if any.
    fn board(&self, ui: &mut egui::Ui) -> Option<(usize, usize)> {
        let grid = self.controller.grid();
        let (rows, cols) = (grid.rows(), grid.cols());
        let pitch = BOX_SIZE + SPACING;
        let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let start_pos = response.rect.min;

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::GRAY);

        let click_pos = if response.clicked() { response.interact_pointer_pos() } else { None };
        let mut clicked = None;

        for row in 0..rows {
            for col in 0..cols {
                let x = start_pos.x + col as f32 * pitch;
                let y = start_pos.y + row as f32 * pitch;
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));

                let cell_color = if self.shown[row * cols + col] { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                if click_pos.is_some_and(|pos| rect.contains(pos)) {
                    clicked = Some((row, col));
                }
            }
        }

        clicked
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let grid = self.controller.grid();
        let total = grid.rows() * grid.cols();
        let live_cells = grid.population();
        ui.horizontal(|ui| {
            ui.label(format!("Live cells: {live_cells}"));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
        });
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else { return };
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(&notice.message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if !open || dismissed {
            self.notice = None;
        }
    }
}

fn quit(ctx: &egui::Context) {
    info!("Goodbye.");
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            quit(ctx);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.cancel_insert();
        }

        self.controller.poll(Instant::now());
        self.sync_board();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.menu_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);
            ui.separator();

            if let Some((row, col)) = self.board(ui) {
                self.board_click(row, col);
            }

            ui.separator();
            self.statistics(ui);
        });

        self.notice_window(ctx);

        // The poll reschedules itself only while running. Commands issued
        // during this frame are painted on the next one.
        if self.controller.is_running() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
        if self.controller.render_pending() {
            ctx.request_repaint();
        }
    }
}
