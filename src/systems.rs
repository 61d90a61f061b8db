use crate::scene::{RotateAxis, SceneTransform};
use crate::*;
use cgmath::{perspective, Deg, InnerSpace, Matrix4, Quaternion, Rad, Rotation3, Vector3, Zero};
use hecs::World;
use std::time::Duration;
use winit::keyboard::KeyCode;

/// Degrees per second the R/X/Y/Z keys turn the scene.
const ROTATE_RATE: f32 = 6.0;
/// World units per second for the translate nudge keys.
const TRANSLATE_RATE: f32 = 0.06;
/// Scale factor change per second.
const SCALE_RATE: f32 = 0.06;
/// World units per second the view-anchor eye moves.
const ANCHOR_RATE: f32 = 2.5;

const LIGHT_KEYS: [(KeyCode, u32); 5] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
];

pub fn update_camera_system(world: &mut World, input: &Input, dt: Duration) {
    for (_, (transform, camera, controller)) in
        world.query_mut::<(&mut Transform, &mut Camera, &mut CameraController)>()
    {
        let dt = dt.as_secs_f32();

        // Mouse look. The cursor is captured, so raw motion always steers.
        let mouse_delta = input.mouse_delta();
        controller.yaw -= Deg(mouse_delta.0 as f32 * controller.look_speed);
        controller.pitch -= Deg(mouse_delta.1 as f32 * controller.look_speed);
        controller.pitch = Deg(controller
            .pitch
            .0
            .clamp(-CameraController::PITCH_LIMIT, CameraController::PITCH_LIMIT));

        transform.rotation = Quaternion::from_axis_angle(Vector3::unit_y(), controller.yaw)
            * Quaternion::from_axis_angle(Vector3::unit_x(), controller.pitch);

        // Scroll narrows or widens the field of view.
        camera.zoom_by(input.scroll_delta() as f32);

        let forward = transform.rotation * -Vector3::unit_z();
        let right = transform.rotation * Vector3::unit_x();

        let mut movement = Vector3::zero();
        if input.is_key_down(KeyCode::KeyW) {
            movement += forward;
        }
        if input.is_key_down(KeyCode::KeyS) {
            movement -= forward;
        }
        if input.is_key_down(KeyCode::KeyA) {
            movement -= right;
        }
        if input.is_key_down(KeyCode::KeyD) {
            movement += right;
        }

        if movement != Vector3::zero() {
            movement = movement.normalize() * controller.move_speed * dt;
            transform.position += movement;
        }
    }
}

/// Applies the transform nudge keys: R rotates about the active axis, X/Y/Z
/// rotate and select an axis, I/K/J/L/O/P translate, C/V/B/N/M/U scale.
pub fn update_scene_transform_system(scene: &mut SceneTransform, input: &Input, dt: Duration) {
    let dt = dt.as_secs_f32();
    let rotate = Deg(ROTATE_RATE * dt);
    let translate = TRANSLATE_RATE * dt;
    let scale = SCALE_RATE * dt;

    if input.is_key_down(KeyCode::KeyR) {
        match scene.axis {
            RotateAxis::X => scene.rotate_x -= rotate,
            RotateAxis::Y => scene.rotate_y -= rotate,
            RotateAxis::Z => scene.rotate_z -= rotate,
        }
    }
    if input.is_key_down(KeyCode::KeyX) {
        scene.rotate_x += rotate;
        scene.axis = RotateAxis::X;
    }
    if input.is_key_down(KeyCode::KeyY) {
        scene.rotate_y += rotate;
        scene.axis = RotateAxis::Y;
    }
    if input.is_key_down(KeyCode::KeyZ) {
        scene.rotate_z += rotate;
        scene.axis = RotateAxis::Z;
    }

    if input.is_key_down(KeyCode::KeyI) {
        scene.translate.y += translate;
    }
    if input.is_key_down(KeyCode::KeyK) {
        scene.translate.y -= translate;
    }
    if input.is_key_down(KeyCode::KeyL) {
        scene.translate.x += translate;
    }
    if input.is_key_down(KeyCode::KeyJ) {
        scene.translate.x -= translate;
    }
    if input.is_key_down(KeyCode::KeyO) {
        scene.translate.z += translate;
    }
    if input.is_key_down(KeyCode::KeyP) {
        scene.translate.z -= translate;
    }

    if input.is_key_down(KeyCode::KeyC) {
        scene.scale.x += scale;
    }
    if input.is_key_down(KeyCode::KeyV) {
        scene.scale.x -= scale;
    }
    if input.is_key_down(KeyCode::KeyB) {
        scene.scale.y += scale;
    }
    if input.is_key_down(KeyCode::KeyN) {
        scene.scale.y -= scale;
    }
    if input.is_key_down(KeyCode::KeyM) {
        scene.scale.z += scale;
    }
    if input.is_key_down(KeyCode::KeyU) {
        scene.scale.z -= scale;
    }
}

/// Toggles lights on a key *press* edge so holding a digit doesn't strobe.
/// Each digit flips only its own light.
pub fn toggle_light_system(world: &mut World, input: &Input) {
    for (key, slot) in LIGHT_KEYS {
        if input.is_key_pressed(key) {
            for (_, light) in world.query_mut::<&mut PointLight>() {
                if light.slot == slot {
                    light.toggle();
                }
            }
        }
    }
}

pub fn update_view_anchor_system(world: &mut World, input: &Input, dt: Duration) {
    let step = ANCHOR_RATE * dt.as_secs_f32();
    for (_, anchor) in world.query_mut::<&mut ViewAnchor>() {
        if input.is_key_down(KeyCode::KeyH) {
            anchor.eye.x += step;
        }
        if input.is_key_down(KeyCode::KeyF) {
            anchor.eye.x -= step;
        }
        if input.is_key_down(KeyCode::KeyT) {
            anchor.eye.z += step;
        }
        if input.is_key_down(KeyCode::KeyG) {
            anchor.eye.z -= step;
        }
        if input.is_key_down(KeyCode::KeyQ) {
            anchor.eye.y += step;
        }
        if input.is_key_down(KeyCode::KeyE) {
            anchor.eye.y -= step;
        }
    }
}

pub fn calculate_view_matrix(transform: &Transform) -> Matrix4<f32> {
    let position = transform.position;
    let forward = transform.rotation * -Vector3::unit_z();
    let up = transform.rotation * Vector3::unit_y();
    let target = position + forward;

    Matrix4::look_at_rh(position, target, up)
}

pub fn calculate_view_projection(transform: &Transform, camera: &Camera) -> Matrix4<f32> {
    let view = calculate_view_matrix(transform);
    let proj = perspective(Rad::from(camera.zoom), camera.aspect, camera.near, camera.far);
    proj * view
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;
    use winit::event::ElementState;

    const DT: Duration = Duration::from_secs(1);

    fn world_with_camera() -> (World, hecs::Entity) {
        let mut world = World::new();
        let entity = crate::scene::spawn_camera(&mut world, Some((800, 600)));
        (world, entity)
    }

    fn hold(input: &mut Input, key: KeyCode) {
        input.handle_key_input(key, ElementState::Pressed);
    }

    #[test]
    fn forward_key_moves_speed_units_along_forward() {
        let (mut world, entity) = world_with_camera();
        let mut input = Input::new();
        hold(&mut input, KeyCode::KeyW);

        let (start, forward, speed) = {
            let (transform, controller) = world
                .query_one_mut::<(&Transform, &CameraController)>(entity)
                .unwrap();
            let forward = transform.rotation * -Vector3::unit_z();
            (transform.position, forward, controller.move_speed)
        };

        update_camera_system(&mut world, &input, DT);

        let transform = world.query_one_mut::<&Transform>(entity).unwrap();
        let moved = transform.position - start;
        assert!((moved.magnitude() - speed).abs() < 1e-4);
        assert!((moved - forward * speed).magnitude() < 1e-4);
    }

    #[test]
    fn strafe_key_moves_monotonically_along_right() {
        let (mut world, entity) = world_with_camera();
        let mut input = Input::new();
        hold(&mut input, KeyCode::KeyD);

        let mut last_x = world.query_one_mut::<&Transform>(entity).unwrap().position.x;
        for _ in 0..3 {
            update_camera_system(&mut world, &input, Duration::from_millis(100));
            let position = world.query_one_mut::<&Transform>(entity).unwrap().position;
            assert!(position.x > last_x);
            last_x = position.x;
        }
    }

    #[test]
    fn pitch_clamps_and_forward_stays_unit() {
        let (mut world, entity) = world_with_camera();
        let mut input = Input::new();
        // Drag far past the vertical limit.
        input.handle_mouse_motion((350.0, 4000.0));

        update_camera_system(&mut world, &input, DT);

        let (transform, controller) = world
            .query_one_mut::<(&Transform, &CameraController)>(entity)
            .unwrap();
        assert!(controller.pitch.0.abs() <= CameraController::PITCH_LIMIT);

        let forward = transform.rotation * -Vector3::unit_z();
        assert!((forward.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn scroll_zoom_stays_in_range() {
        let (mut world, entity) = world_with_camera();
        let mut input = Input::new();
        input.handle_mouse_scroll(1000.0);
        update_camera_system(&mut world, &input, DT);
        input.update();

        let zoom = world.query_one_mut::<&Camera>(entity).unwrap().zoom.0;
        assert_eq!(zoom, Camera::ZOOM_MIN);

        input.handle_mouse_scroll(-1000.0);
        update_camera_system(&mut world, &input, DT);
        let zoom = world.query_one_mut::<&Camera>(entity).unwrap().zoom.0;
        assert_eq!(zoom, Camera::ZOOM_MAX);
    }

    #[test]
    fn digit_key_toggles_only_its_light_once_per_press() {
        let mut world = World::new();
        crate::scene::spawn_lights(&mut world);
        let mut input = Input::new();
        hold(&mut input, KeyCode::Digit2);

        toggle_light_system(&mut world, &input);
        for (_, light) in world.query_mut::<&PointLight>() {
            assert_eq!(light.on, light.slot != 2);
        }

        // Held across the next frame: no further toggles.
        input.update();
        toggle_light_system(&mut world, &input);
        for (_, light) in world.query_mut::<&PointLight>() {
            assert_eq!(light.on, light.slot != 2);
        }
    }

    #[test]
    fn rotate_keys_select_the_active_axis() {
        let mut scene = SceneTransform::default();
        let mut input = Input::new();
        hold(&mut input, KeyCode::KeyX);
        update_scene_transform_system(&mut scene, &input, DT);
        assert_eq!(scene.axis, RotateAxis::X);
        assert!(scene.rotate_x.0 > 0.0);

        // R now rotates back about X.
        let mut input = Input::new();
        hold(&mut input, KeyCode::KeyR);
        let before = scene.rotate_x;
        update_scene_transform_system(&mut scene, &input, DT);
        assert!(scene.rotate_x < before);
        assert_eq!(scene.rotate_y.0, 0.0);
    }

    #[test]
    fn nudge_keys_translate_and_scale() {
        let mut scene = SceneTransform::default();
        let mut input = Input::new();
        hold(&mut input, KeyCode::KeyI);
        hold(&mut input, KeyCode::KeyC);
        update_scene_transform_system(&mut scene, &input, DT);
        assert!(scene.translate.y > 0.0);
        assert!(scene.scale.x > 1.0);
    }

    #[test]
    fn anchor_eye_moves_at_fixed_rate() {
        let mut world = World::new();
        let entity = crate::scene::spawn_view_anchor(&mut world);
        let mut input = Input::new();
        hold(&mut input, KeyCode::KeyH);

        let start = world.query_one_mut::<&ViewAnchor>(entity).unwrap().eye;
        update_view_anchor_system(&mut world, &input, DT);
        let eye = world.query_one_mut::<&ViewAnchor>(entity).unwrap().eye;
        assert!((eye.x - start.x - ANCHOR_RATE).abs() < 1e-5);
        assert_eq!(eye, Point3::new(start.x + ANCHOR_RATE, start.y, start.z));
    }
}
