use hecs::World;
use log::info;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::MouseScrollDelta::*;
use winit::event::WindowEvent;
use winit::event::{DeviceEvent, DeviceId};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

use crate::input::Input;
use crate::scene::SceneTransform;
use crate::wgpu_ctx::WgpuCtx;
use crate::*;

const WINDOW_TITLE: &str = "House Walkthrough";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

#[derive(Default)]
pub struct App<'window> {
    window: Option<Arc<Window>>,
    wgpu_ctx: Option<WgpuCtx<'window>>,
    input_system: Input,
    world: World,
    scene_transform: SceneTransform,
    camera_entity: Option<hecs::Entity>,
    last_frame_time: Option<Instant>,
}

impl<'window> ApplicationHandler for App<'window> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let win_attr = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
            let window = Arc::new(
                event_loop
                    .create_window(win_attr)
                    .expect("Failed to create window"),
            );

            // Capture the mouse for free look; not every platform supports
            // confinement, so fall back to a locked cursor.
            window.set_cursor_visible(false);
            if window.set_cursor_grab(CursorGrabMode::Confined).is_err() {
                let _ = window.set_cursor_grab(CursorGrabMode::Locked);
            }

            self.window = Some(window.clone());
            self.wgpu_ctx = Some(WgpuCtx::new(window.clone()));

            self.world = World::new();
            self.scene_transform = SceneTransform::default();

            let size = window.inner_size();
            self.camera_entity = Some(crate::scene::spawn_camera(
                &mut self.world,
                Some((size.width, size.height)),
            ));
            crate::scene::spawn_lights(&mut self.world);
            crate::scene::spawn_house(&mut self.world);
            crate::scene::spawn_view_anchor(&mut self.world);

            info!(
                "scene ready: {} pieces, {} lights",
                crate::scene::piece_count(),
                crate::scene::LIGHT_COUNT
            );
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let (Some(wgpu_ctx), Some(window)) =
                    (self.wgpu_ctx.as_mut(), self.window.as_ref())
                {
                    wgpu_ctx.resize((new_size.width, new_size.height));

                    if let Some(camera_entity) = self.camera_entity {
                        if let Ok(camera) = self.world.query_one_mut::<&mut Camera>(camera_entity) {
                            camera.aspect = new_size.width as f32 / new_size.height.max(1) as f32;
                        }
                    }

                    window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Key::Named(NamedKey::Escape) = event.logical_key {
                    if event.state.is_pressed() {
                        event_loop.exit();
                    }
                }

                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input_system.handle_key_input(key, event.state);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = self
                    .last_frame_time
                    .map(|t| now.duration_since(t))
                    .unwrap_or_default();
                self.last_frame_time = Some(now);

                update_camera_system(&mut self.world, &self.input_system, dt);
                update_scene_transform_system(&mut self.scene_transform, &self.input_system, dt);
                toggle_light_system(&mut self.world, &self.input_system);
                update_view_anchor_system(&mut self.world, &self.input_system, dt);

                if let (Some(wgpu_ctx), Some(camera_entity)) =
                    (&mut self.wgpu_ctx, self.camera_entity)
                {
                    let frame_state = self
                        .world
                        .query_one_mut::<(&Transform, &Camera)>(camera_entity)
                        .ok()
                        .map(|(transform, camera)| {
                            let view_proj = calculate_view_projection(transform, camera);
                            let position: [f32; 3] = transform.position.into();
                            (view_proj, position)
                        });
                    if let Some((view_proj, position)) = frame_state {
                        wgpu_ctx.update_frame_uniform(view_proj, position, &self.world);
                    }

                    wgpu_ctx.draw(&self.world, self.scene_transform.base_matrix());
                }

                self.input_system.update();
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                LineDelta(_, y) => {
                    self.input_system.handle_mouse_scroll(y as f64);
                }
                PixelDelta(d) => {
                    self.input_system.handle_mouse_scroll(d.y);
                }
            },
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input_system.handle_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
