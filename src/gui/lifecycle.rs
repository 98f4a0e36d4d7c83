use crate::gui::*;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only create the window once.
        if self.window.is_some() {
            return;
        }

        let context = match Context::new(event_loop.owned_display_handle()) {
            Ok(ctx) => ctx,
            Err(err) => {
                error!(%err, "failed to create rendering context");
                event_loop.exit();
                return;
            }
        };
        self.context = Some(context);

        if let Err(err) = self.create_window(event_loop) {
            error!("{err:#}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.window.as_mut() else {
            return;
        };
        if win.window.id() != window_id {
            return;
        }
        let mut should_redraw = false;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Focused(focused) => {
                win.modifiers = ModifiersState::empty();
                if !focused {
                    win.cancel_pointer_drag();
                }
                should_redraw = true;
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                win.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                should_redraw = win.on_keyboard_input(&event);
            }
            WindowEvent::CursorLeft { .. } => {
                win.cancel_pointer_drag();
                should_redraw = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                should_redraw = win.on_cursor_moved(position);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                should_redraw = win.on_mouse_input(state, button);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                should_redraw = win.on_mouse_wheel(delta);
            }
            WindowEvent::ScaleFactorChanged { .. } | WindowEvent::Resized(_) => {
                win.sync_strip_width();
                should_redraw = true;
            }
            WindowEvent::RedrawRequested => {
                win.on_redraw_requested();
            }
            _ => (),
        }
        if should_redraw {
            win.window.request_redraw();
        }
    }
}
