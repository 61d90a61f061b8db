use crate::{Camera, CameraController, MaterialKind, PointLight, ScenePiece, Transform, ViewAnchor};
use cgmath::{Deg, Matrix4, Point3, Vector3};
use hecs::World;

/// Axis the `R` key currently rotates about. `X`/`Y`/`Z` select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateAxis {
    X,
    Y,
    Z,
}

/// Global modelling transform shared by every scene piece. Keyboard nudges
/// mutate it; once per frame it collapses into the base model matrix.
#[derive(Debug)]
pub struct SceneTransform {
    pub rotate_x: Deg<f32>,
    pub rotate_y: Deg<f32>,
    pub rotate_z: Deg<f32>,
    pub axis: RotateAxis,
    pub translate: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self {
            rotate_x: Deg(0.0),
            rotate_y: Deg(0.0),
            rotate_z: Deg(0.0),
            axis: RotateAxis::Z,
            translate: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl SceneTransform {
    /// translate, then X/Y/Z rotations, then scale. Piece offsets compose on
    /// the right of this matrix.
    pub fn base_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translate)
            * Matrix4::from_angle_x(self.rotate_x)
            * Matrix4::from_angle_y(self.rotate_y)
            * Matrix4::from_angle_z(self.rotate_z)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

struct PieceDef {
    material: MaterialKind,
    offset: [f32; 3],
    extent: [f32; 3],
}

/// The four rooms, one row per cube. Offsets and extents are in world units
/// relative to the shared base matrix; negative extents mirror the cube, and
/// the layout depends on them, so they stay as-is.
#[rustfmt::skip]
const HOUSE: &[PieceDef] = &[
    // Room 1
    PieceDef { material: MaterialKind::Ghost,   offset: [-0.45, -0.40, -2.80], extent: [1.0, 1.0, 1.0] },
    PieceDef { material: MaterialKind::Wall,    offset: [-8.0, 1.2, -5.0],     extent: [10.0, -4.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [-8.5, 1.2, 1.4],      extent: [0.5, -4.45, -6.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [-8.0, 1.2, 1.7],      extent: [10.0, -4.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [2.0, 1.2, -2.5],      extent: [0.5, -4.45, -2.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [2.0, 1.2, 1.65],      extent: [0.5, -4.45, -2.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [2.0, 1.2, -0.80],     extent: [0.5, -1.45, -1.7] },
    PieceDef { material: MaterialKind::Floor,   offset: [2.0, -2.92, 1.40],    extent: [-10.0, -0.30, -6.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [2.0, 1.2, 1.40],      extent: [-10.0, -0.30, -6.5] },
    // Room 2
    PieceDef { material: MaterialKind::Floor,   offset: [12.0, -2.92, 1.40],   extent: [-10.0, -0.30, -6.5] },
    PieceDef { material: MaterialKind::Ceiling, offset: [12.0, 1.2, 1.40],     extent: [-10.0, -0.30, -6.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [2.0, 1.2, -5.0],      extent: [4.5, -4.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [6.5, 1.2, -5.0],      extent: [1.70, -1.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [8.2, 1.2, -5.0],      extent: [3.80, -4.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [8.9, 1.2, 1.4],       extent: [0.5, -4.45, -6.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [2.0, 1.2, 1.7],       extent: [10.0, -4.45, -0.3] },
    // Room 3
    PieceDef { material: MaterialKind::Floor,   offset: [12.0, -2.92, -5.0],   extent: [-16.0, -0.30, -6.5] },
    PieceDef { material: MaterialKind::Ceiling, offset: [12.0, 1.2, -5.0],     extent: [-16.0, -0.30, -6.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [12.0, 1.2, -5.0],     extent: [0.5, -4.45, -6.5] },
    PieceDef { material: MaterialKind::Wall,    offset: [12.0, 1.2, -11.5],    extent: [-8.6, -4.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [3.5, 1.2, -11.5],     extent: [-1.6, -1.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [3.5, -1.3, -11.5],    extent: [-1.6, -1.65, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [1.9, 1.2, -11.5],     extent: [-5.9, -4.45, -0.3] },
    PieceDef { material: MaterialKind::Wall,    offset: [-4.1, 1.2, -5.1],     extent: [0.5, -4.45, -4.60] },
    PieceDef { material: MaterialKind::Wall,    offset: [-4.1, 1.2, -9.6],     extent: [0.5, -1.45, -2.0] },
    // Room 4
    PieceDef { material: MaterialKind::Floor,   offset: [8.0, -2.92, -5.0],    extent: [-2.6, -0.30, -6.5] },
];

pub const LIGHT_COUNT: usize = 5;

const LIGHT_POSITIONS: [[f32; 3]; LIGHT_COUNT] = [
    [1.50, 0.70, -7.90],
    [6.0, 0.70, 0.0],
    [-1.5, 1.5, 0.0],
    [-3.4, 0.70, -4.0],
    [1.5, -1.5, 0.70],
];

const LIGHT_AMBIENT: [f32; 3] = [0.05, 0.05, 0.05];
const LIGHT_DIFFUSE: [f32; 3] = [0.8, 0.8, 0.8];
const LIGHT_SPECULAR: [f32; 3] = [1.0, 1.0, 1.0];
const LIGHT_K_CONSTANT: f32 = 1.0;
const LIGHT_K_LINEAR: f32 = 0.09;
const LIGHT_K_QUADRATIC: f32 = 0.032;

pub fn piece_count() -> usize {
    HOUSE.len()
}

pub fn spawn_house(world: &mut World) {
    for (index, def) in HOUSE.iter().enumerate() {
        world.spawn((ScenePiece {
            index,
            material: def.material,
            offset: Vector3::from(def.offset),
            extent: Vector3::from(def.extent),
        },));
    }
}

pub fn spawn_lights(world: &mut World) {
    for (i, position) in LIGHT_POSITIONS.iter().enumerate() {
        world.spawn((PointLight {
            slot: i as u32 + 1,
            position: Point3::new(position[0], position[1], position[2]),
            ambient: Vector3::from(LIGHT_AMBIENT),
            diffuse: Vector3::from(LIGHT_DIFFUSE),
            specular: Vector3::from(LIGHT_SPECULAR),
            k_constant: LIGHT_K_CONSTANT,
            k_linear: LIGHT_K_LINEAR,
            k_quadratic: LIGHT_K_QUADRATIC,
            on: true,
        },));
    }
}

pub fn spawn_camera(world: &mut World, window_size: Option<(u32, u32)>) -> hecs::Entity {
    let aspect = if let Some((width, height)) = window_size {
        width as f32 / height as f32
    } else {
        800.0 / 600.0
    };

    world.spawn((
        Transform {
            position: Point3::new(0.0, -0.2, 5.2),
            ..Default::default()
        },
        Camera {
            aspect,
            ..Default::default()
        },
        CameraController::default(),
    ))
}

pub fn spawn_view_anchor(world: &mut World) -> hecs::Entity {
    world.spawn((ViewAnchor::default(),))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn house_has_twenty_six_pieces_in_stable_order() {
        let mut world = World::new();
        spawn_house(&mut world);

        let mut indices: Vec<usize> = world
            .query_mut::<&ScenePiece>()
            .into_iter()
            .map(|(_, piece)| piece.index)
            .collect();
        indices.sort_unstable();

        assert_eq!(indices.len(), 26);
        assert_eq!(indices, (0..26).collect::<Vec<_>>());
    }

    #[test]
    fn light_slots_are_unique_and_cover_one_through_five() {
        let mut world = World::new();
        spawn_lights(&mut world);

        let mut slots: Vec<u32> = world
            .query_mut::<&PointLight>()
            .into_iter()
            .map(|(_, light)| light.slot)
            .collect();
        slots.sort_unstable();

        assert_eq!(slots, vec![1, 2, 3, 4, 5]);
    }

    fn max_abs_diff(a: Matrix4<f32>, b: Matrix4<f32>) -> f32 {
        let a: [[f32; 4]; 4] = a.into();
        let b: [[f32; 4]; 4] = b.into();
        a.iter()
            .flatten()
            .zip(b.iter().flatten())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f32::max)
    }

    #[test]
    fn default_base_matrix_is_identity() {
        let scene = SceneTransform::default();
        assert!(max_abs_diff(scene.base_matrix(), Matrix4::identity()) < 1e-6);
    }

    #[test]
    fn base_matrix_applies_translation_after_scale() {
        let scene = SceneTransform {
            translate: Vector3::new(1.0, 2.0, 3.0),
            scale: Vector3::new(2.0, 2.0, 2.0),
            ..Default::default()
        };
        let base = scene.base_matrix();
        // Scale must not touch the translation column.
        assert!((base.w.x - 1.0).abs() < 1e-6);
        assert!((base.w.y - 2.0).abs() < 1e-6);
        assert!((base.w.z - 3.0).abs() < 1e-6);
        assert!((base.x.x - 2.0).abs() < 1e-6);
    }
}
