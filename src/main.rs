/// Main application entry point
/// Handles window creation, input, and render loop
use glam::Vec3;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use voxel_painter::*;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowBuilder},
};

const TITLE: &str = "Voxel Painter";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Controls:");
    log::info!("  WASD - Walk | Arrows - Move along world axes");
    log::info!("  Space/Shift - Up/Down | R - Back to origin");
    log::info!("  Mouse - Look around (click to capture)");
    log::info!("  Tab - First/third person | F3 - Debug info | N - Normals");
    log::info!("  ESC - Release mouse / Exit");

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
            .build(&event_loop)?,
    );

    let context = softbuffer::Context::new(window.clone())?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())?;

    let window_size = window.inner_size();
    let mut framebuffer =
        Framebuffer::new(window_size.width as usize, window_size.height as usize);

    let world = scene::demo_world()?;
    log::info!("demo world ready: {} blocks", world.block_count());
    let mut session = Session::new(world, Vec3::new(0.0, 1.0, -4.0), PlayerConfig::default())?;
    session.options.show_debug_info = true;
    let points = scene::demo_points();

    let renderer = Renderer::default();
    let mut input = InputState::new();

    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();
    let mut mouse_captured = false;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(new_size) => {
                    framebuffer.resize(new_size.width as usize, new_size.height as usize);
                }
                WindowEvent::Focused(false) => {
                    input.reset();
                    mouse_captured = release_cursor(&window);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.repeat {
                        return;
                    }
                    let pressed = event.state == ElementState::Pressed;
                    let PhysicalKey::Code(keycode) = event.physical_key else {
                        return;
                    };
                    if let Some(key) = map_key(keycode) {
                        input.set_key(key, pressed);
                        return;
                    }
                    match keycode {
                        KeyCode::F3 if pressed => {
                            session.options.show_debug_info = !session.options.show_debug_info;
                            if !session.options.show_debug_info {
                                window.set_title(TITLE);
                            }
                        }
                        KeyCode::KeyN if pressed => {
                            session.options.debug_normals = !session.options.debug_normals;
                            log::info!(
                                "Debug normals: {}",
                                if session.options.debug_normals { "ON" } else { "OFF" }
                            );
                        }
                        KeyCode::Escape if pressed => {
                            if mouse_captured {
                                mouse_captured = release_cursor(&window);
                            } else {
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        mouse_captured = capture_cursor(&window);
                    }
                }
                WindowEvent::RedrawRequested => {
                    let tick = input.take_tick(&session.options);
                    session.tick(&tick);

                    let mut stats = session.render(&renderer, &mut framebuffer);
                    stats.points_drawn +=
                        renderer.render_points(&points, session.active_camera(), &mut framebuffer);

                    let (Some(width), Some(height)) = (
                        NonZeroU32::new(framebuffer.width as u32),
                        NonZeroU32::new(framebuffer.height as u32),
                    ) else {
                        return;
                    };
                    if let Err(err) = present(&mut surface, &framebuffer, width, height) {
                        log::error!("present failed: {err}");
                        elwt.exit();
                        return;
                    }

                    frame_count += 1;
                    if fps_timer.elapsed().as_secs() >= 1 {
                        log::debug!(
                            "FPS: {} | Blocks: {} | Faces: {} drawn, {} culled, {} clipped",
                            frame_count,
                            stats.blocks,
                            stats.faces_drawn,
                            stats.faces_culled,
                            stats.faces_clipped
                        );
                        if session.options.show_debug_info {
                            window.set_title(&format!(
                                "{TITLE} | {} fps | {}",
                                frame_count,
                                session.debug_line()
                            ));
                        }
                        frame_count = 0;
                        fps_timer = Instant::now();
                    }
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } if mouse_captured => {
                input.add_mouse_delta(delta.0 as f32, delta.1 as f32);
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;
    Ok(())
}

fn map_key(keycode: KeyCode) -> Option<Key> {
    let key = match keycode {
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::KeyW => Key::Forward,
        KeyCode::KeyS => Key::Backward,
        KeyCode::KeyA => Key::StrafeLeft,
        KeyCode::KeyD => Key::StrafeRight,
        KeyCode::Space => Key::Up,
        KeyCode::ShiftLeft => Key::Down,
        KeyCode::KeyR => Key::Home,
        KeyCode::Tab => Key::ToggleView,
        _ => return None,
    };
    Some(key)
}

fn present(
    surface: &mut softbuffer::Surface<Arc<Window>, Arc<Window>>,
    framebuffer: &Framebuffer,
    width: NonZeroU32,
    height: NonZeroU32,
) -> Result<(), softbuffer::SoftBufferError> {
    surface.resize(width, height)?;
    let mut buffer = surface.buffer_mut()?;
    buffer.copy_from_slice(framebuffer.color_buffer_slice());
    buffer.present()
}

/// Returns whether the cursor ended up captured.
fn capture_cursor(window: &Window) -> bool {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    match grabbed {
        Ok(()) => {
            window.set_cursor_visible(false);
            true
        }
        Err(err) => {
            log::warn!("could not capture cursor: {err}");
            false
        }
    }
}

fn release_cursor(window: &Window) -> bool {
    if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
        log::warn!("could not release cursor: {err}");
    }
    window.set_cursor_visible(true);
    false
}
