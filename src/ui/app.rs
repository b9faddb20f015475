//! Main application for the Gomoku GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use crate::config::GameConfig;
use crate::engine::Difficulty;
use crate::error::GameError;
use crate::game::GameMode;
use crate::rules::GameOutcome;
use crate::Stone;

use super::board_view::{BoardFrame, BoardView};
use super::game_state::GameState;
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create the app from a validated configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Result<Self, GameError> {
        info!(
            board_size = config.board_size,
            mode = ?config.mode,
            difficulty = config.difficulty.name(),
            "starting GUI"
        );
        Ok(Self {
            state: GameState::from_config(config)?,
            board_view: BoardView::default(),
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Player vs Player").clicked() {
                        self.state.set_mode(GameMode::PvP);
                        ui.close_menu();
                    }
                    if ui.button("Player vs Computer").clicked() {
                        self.state.set_mode(GameMode::VS_COMPUTER);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        let selected = self.state.session.difficulty() == difficulty;
                        if ui.radio(selected, difficulty.name()).clicked() {
                            self.state.set_difficulty(difficulty);
                            ui.close_menu();
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.session.mode() {
                        GameMode::PvE { .. } => {
                            format!("vs Computer - {}", self.state.session.difficulty().name())
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.state.session.is_active() {
                    ui.add_space(10.0);
                    self.render_ai_card(ui);
                } else {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Freestyle, five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, with the session's status line
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.session.current_turn() == Stone::Black;
            let (stone_char, accent, glyph) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let status = self.state.session.status_message();
                    let color = if self.state.is_ai_thinking() {
                        STATUS_BUSY
                    } else if self.state.session.is_active() {
                        STATUS_OK
                    } else {
                        WIN_HIGHLIGHT
                    };
                    ui.label(RichText::new(status).size(15.0).strong().color(color));
                    ui.label(
                        RichText::new(format!("Move #{}", self.state.session.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            ui.horizontal(|ui| {
                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(label).clicked() {
                        self.state.new_game();
                    }
                });
            });

            ui.add_space(8.0);
            let mut vs_computer = matches!(self.state.session.mode(), GameMode::PvE { .. });
            if ui.checkbox(&mut vs_computer, "Play against computer").changed() {
                self.state.set_mode(if vs_computer { GameMode::VS_COMPUTER } else { GameMode::PvP });
            }

            ui.add_enabled_ui(vs_computer, |ui| {
                ui.horizontal(|ui| {
                    for difficulty in Difficulty::ALL {
                        let selected = self.state.session.difficulty() == difficulty;
                        if ui.selectable_label(selected, difficulty.name()).clicked() {
                            self.state.set_difficulty(difficulty);
                        }
                    }
                });
            });
        });
    }

    /// Last AI decision and the pending delay
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        if self.state.session.mode().ai_color().is_none() {
            return;
        }
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(remaining) = self.state.ai_wait_remaining(Instant::now()) {
                ui.label(
                    RichText::new(format!("Thinking... {:.1}s", remaining.as_secs_f32()))
                        .size(12.0)
                        .color(STATUS_BUSY),
                );
            }

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(RichText::new(result.reason.label()).size(12.0).strong().color(STATUS_OK));
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("Played {pos}")).size(11.0).color(TEXT_PRIMARY));
                    }
                    ui.label(
                        RichText::new(format!("Score {} in {}µs", result.score, result.time_us))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.session.outcome() {
            GameOutcome::Won { winner, .. } => format!("{} WINS!", winner.name().to_uppercase()),
            GameOutcome::Draw => "DRAW".to_string(),
            GameOutcome::InProgress => return,
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(SURROUND_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let session = &self.state.session;
                let frame = BoardFrame {
                    board: session.board(),
                    current_turn: session.current_turn(),
                    last_move: session.last_move(),
                    winning_line: session.outcome().winning_line(),
                    accepts_input: session.is_human_turn(),
                };
                let clicked = self.board_view.show(ui, &frame);

                if let Some(pos) = clicked {
                    if let Err(err) = self.state.try_place_stone(pos) {
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.poll_ai(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep frames coming while the AI waits out its delay
        if self.state.is_ai_thinking() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
