use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::{ExplorerController, InputOutcome, handle_input, present_frame};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::run_gui::GuiError;
use crate::input::gui::keys::input_for_key;

const KEY_HELP: &str = "Arrows pan | Enter zoom in | - zoom out | R reset | Esc quit";

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: ExplorerController,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ExplorerController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            controller,
            egui_ctx,
            egui_state,
        }
    }

    /// Presents the already rendered initial frame, then handles window events
    /// until the user quits or a frame cannot be shown.
    pub fn run(
        mut self,
        event_loop: EventLoop<()>,
        initial_frame: FrameData,
    ) -> Result<(), GuiError> {
        present_frame(&mut self.presenter, initial_frame)?;
        self.window.set_visible(true);
        self.window.request_redraw();

        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| {
            let Event::WindowEvent { ref event, window_id } = event else {
                return;
            };
            if window_id != self.window.id() {
                return;
            }

            let egui_response = self.egui_state.on_window_event(self.window, event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput { event: key_event, .. } => {
                    let PhysicalKey::Code(key_code) = key_event.physical_key else {
                        return;
                    };
                    let Some(input) = input_for_key(key_code, key_event.state) else {
                        return;
                    };

                    match handle_input(&mut self.controller, input, &mut self.presenter) {
                        Ok(InputOutcome::Presented) => self.window.request_redraw(),
                        Ok(InputOutcome::Quit) => elwt.exit(),
                        Err(err) => {
                            failure = Some(err.into());
                            elwt.exit();
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    let mut egui_output = self.update_ui();

                    self.egui_state.handle_platform_output(
                        self.window,
                        std::mem::take(&mut egui_output.platform_output),
                    );

                    if egui_output
                        .viewport_output
                        .values()
                        .any(|v| v.repaint_delay.is_zero())
                    {
                        self.window.request_redraw();
                    }

                    if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                        error!("Surface error: {}", err);
                        failure = Some(GuiError::Surface(err));
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    self.presenter.resize_surface(size.width, size.height);
                    self.window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    debug!("Scale factor changed to {}", scale_factor);
                    self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = self.window.inner_size();
                    self.presenter.resize_surface(size.width, size.height);
                    self.window.request_redraw();
                }
                _ => {
                    if egui_response.repaint {
                        self.window.request_redraw();
                    }
                }
            }
        })?;

        failure.map_or(Ok(()), Err)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let overlay = *self.presenter.overlay();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Navigator")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    for line in overlay.lines() {
                        ui.label(line);
                    }

                    if let Some(warning) = overlay.warning {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, warning.to_string());
                    }

                    ui.separator();
                    ui.small(KEY_HELP);
                });
        })
    }
}
