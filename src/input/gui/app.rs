//! Main GUI application loop.

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, error};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, TouchPhase, WindowEvent},
    event_loop::EventLoop,
    keyboard::ModifiersState,
    window::Window,
};

use crate::controllers::interactive::controller::ExplorerController;
use crate::controllers::interactive::flight::scheduler::TickOutcome;
use crate::core::data::surface::SurfaceSize;
use crate::core::flight::controls::Intent;
use crate::input::gui::keymap::{input_key, modifiers};
use crate::input::keys::{KEY_BINDINGS, keys_label};
use crate::input::translator::{
    InputTranslator, KeyEvent, KeyState, PointerEvent, PointerPhase,
};
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    controller: ExplorerController,
    translator: InputTranslator,
    modifiers: ModifiersState,
    cursor: PhysicalPosition<f64>,
    /// The controller asked for another tick.
    tick_pending: bool,
    /// egui asked for a repaint without a new frame.
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        mut controller: ExplorerController,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );
        let tick_pending = controller.start();

        Self {
            window,
            presenter,
            controller,
            translator: InputTranslator::new(),
            modifiers: ModifiersState::empty(),
            cursor: PhysicalPosition::new(0.0, 0.0),
            tick_pending,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), winit::error::EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let egui_consumed = self.handle_egui_event(event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.redraw() {
                            error!(error = %err, "render failed");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    WindowEvent::Focused(false) => {
                        for intent in self.translator.release_all() {
                            self.apply(intent);
                        }
                    }
                    _ if egui_consumed && !self.translator.is_dragging() => {
                        self.redraw_pending = true;
                    }
                    _ => self.handle_input(event),
                }
            }
            Event::AboutToWait => {
                if self.tick_pending || self.redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn handle_egui_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.redraw_pending = true;
        }

        response.consumed
    }

    fn handle_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::ModifiersChanged(state) => self.modifiers = state.state(),
            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                let key_event = KeyEvent {
                    key: input_key(event.physical_key),
                    state: match event.state {
                        ElementState::Pressed => KeyState::Pressed,
                        ElementState::Released => KeyState::Released,
                    },
                    modifiers: modifiers(self.modifiers),
                };

                if let Some(intent) = self.translator.key(key_event) {
                    self.apply(intent);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = *position;
                self.pointer(PointerPhase::Move);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer(PointerPhase::Down),
                ElementState::Released => self.pointer(PointerPhase::Up),
            },
            WindowEvent::Touch(touch) => {
                self.cursor = touch.location;
                self.pointer(match touch.phase {
                    TouchPhase::Started => PointerPhase::Down,
                    TouchPhase::Moved => PointerPhase::Move,
                    TouchPhase::Ended | TouchPhase::Cancelled => PointerPhase::Up,
                });
            }
            _ => {}
        }
    }

    fn pointer(&mut self, phase: PointerPhase) {
        // Positions off the frame become out-of-range fractions, which the
        // translator drops while keeping the drag alive.
        let (u, v) = self
            .presenter
            .frame_fraction(self.cursor.x, self.cursor.y)
            .unwrap_or((-1.0, -1.0));

        if let Some(intent) = self.translator.pointer(PointerEvent::new(phase, u, v)) {
            self.apply(intent);
        }
    }

    fn apply(&mut self, intent: Intent) {
        if self.controller.apply(intent) {
            self.tick_pending = true;
        }
        self.redraw_pending = true;
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize_surface(width, height) {
            error!(error = %err, width, height, "surface resize failed");
            return;
        }

        debug!(width, height, "window resized");

        if self.controller.resize(SurfaceSize::new(width, height)) {
            self.tick_pending = true;
        }
        self.redraw_pending = true;
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.redraw_pending = false;

        if self.tick_pending {
            let outcome = self.controller.tick(&mut self.presenter);
            self.tick_pending = outcome == TickOutcome::Continue;
        }

        let egui_output = self.update_ui();
        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let help_visible = self.controller.help_visible();
        let status = self.controller.status().clone();

        self.egui_ctx.run(raw_input, |ctx| {
            if !help_visible {
                return;
            }

            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 260.0])
                .resizable(false)
                .show(ctx, |ui| {
                    egui::Grid::new("key_bindings").striped(true).show(ui, |ui| {
                        for binding in KEY_BINDINGS {
                            ui.label(keys_label(binding));
                            ui.label(binding.label);
                            ui.end_row();
                        }
                        ui.label("Drag");
                        ui.label("Zoom toward pointer");
                        ui.end_row();
                    });

                    ui.separator();
                    ui.label(format!(
                        "{} at block {}",
                        status.phase.display_name(),
                        status.pixel_block
                    ));
                    ui.label(format!(
                        "Center: {:.6} {:+.6}i",
                        status.center.real, status.center.imag
                    ));
                    ui.label(format!("Half width: {:.3e}", status.half_width));
                    ui.label(format!("Max iterations: {}", status.max_iterations));
                    if let Some(duration) = status.last_frame_duration {
                        ui.label(format!("Last frame: {} ms", duration.as_millis()));
                    }
                    if let Some(warning) = status.last_warning {
                        ui.colored_label(egui::Color32::LIGHT_RED, format!("{:?}", warning));
                    }
                });
        })
    }
}
