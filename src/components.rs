use cgmath::{Deg, Matrix4, Point3, Quaternion, Rad, Rotation3, Vector3};

#[derive(Debug)]
pub struct Transform {
    pub position: Point3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::from_axis_angle(Vector3::unit_y(), Rad(0.0)),
        }
    }
}

/// Projection state for the walkthrough camera. `zoom` is the vertical field
/// of view in degrees; scroll input narrows or widens it within
/// [`Camera::ZOOM_MIN`], [`Camera::ZOOM_MAX`].
#[derive(Debug)]
pub struct Camera {
    pub zoom: Deg<f32>,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub up_vector: Vector3<f32>,
}

impl Camera {
    pub const ZOOM_MIN: f32 = 1.0;
    pub const ZOOM_MAX: f32 = 45.0;

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = Deg((self.zoom.0 - delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX));
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: Deg(Self::ZOOM_MAX),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
            up_vector: Vector3::unit_y(),
        }
    }
}

#[derive(Debug)]
pub struct CameraController {
    pub move_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse travel.
    pub look_speed: f32,
    pub pitch: Deg<f32>,
    pub yaw: Deg<f32>,
}

impl CameraController {
    /// Pitch is clamped short of straight up/down to avoid flipping the view.
    pub const PITCH_LIMIT: f32 = 89.0;
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            look_speed: 0.1,
            pitch: Deg(0.0),
            yaw: Deg(0.0),
        }
    }
}

/// Which texture set a scene piece is drawn with. Indexes the renderer's
/// material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Ghost,
    Wall,
    Floor,
    Ceiling,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 4] = [
        MaterialKind::Ghost,
        MaterialKind::Wall,
        MaterialKind::Floor,
        MaterialKind::Ceiling,
    ];

    // "celling.jpg" matches the asset's actual (misspelled) filename.
    pub fn file_name(self) -> &'static str {
        match self {
            MaterialKind::Ghost => "ghost.jpg",
            MaterialKind::Wall => "wall.jpg",
            MaterialKind::Floor => "floor.jpg",
            MaterialKind::Ceiling => "celling.jpg",
        }
    }

    pub fn index(self) -> usize {
        match self {
            MaterialKind::Ghost => 0,
            MaterialKind::Wall => 1,
            MaterialKind::Floor => 2,
            MaterialKind::Ceiling => 3,
        }
    }
}

/// One textured cube of the house: a translate offset and scale extent
/// composed onto the shared base matrix each frame. `index` fixes the draw
/// order regardless of entity iteration order.
#[derive(Debug)]
pub struct ScenePiece {
    pub index: usize,
    pub material: MaterialKind,
    pub offset: Vector3<f32>,
    pub extent: Vector3<f32>,
}

impl ScenePiece {
    pub fn model_matrix(&self, base: Matrix4<f32>) -> Matrix4<f32> {
        base * Matrix4::from_translation(self.offset)
            * Matrix4::from_nonuniform_scale(self.extent.x, self.extent.y, self.extent.z)
    }
}

/// A positional light with distance attenuation. `slot` is the 1-based index
/// of its record in the shader's light array; slots must be unique or one
/// light silently overwrites another.
#[derive(Debug)]
pub struct PointLight {
    pub slot: u32,
    pub position: Point3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub k_constant: f32,
    pub k_linear: f32,
    pub k_quadratic: f32,
    pub on: bool,
}

impl PointLight {
    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// The color terms actually sent to the shader: stored coefficients while
    /// on, zero while off. The stored colors are never lost, so toggling off
    /// and back on restores the exact original contribution.
    pub fn contribution(&self) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
        if self.on {
            (self.ambient, self.diffuse, self.specular)
        } else {
            let zero = Vector3::new(0.0, 0.0, 0.0);
            (zero, zero, zero)
        }
    }
}

/// Secondary look-at eye point steered by H/F/T/G/Q/E. The render path does
/// not consume it.
#[derive(Debug)]
pub struct ViewAnchor {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl ViewAnchor {
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Default for ViewAnchor {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 1.0, 3.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    fn test_light() -> PointLight {
        PointLight {
            slot: 1,
            position: Point3::new(1.5, 0.7, -7.9),
            ambient: Vector3::new(0.05, 0.05, 0.05),
            diffuse: Vector3::new(0.8, 0.8, 0.8),
            specular: Vector3::new(1.0, 1.0, 1.0),
            k_constant: 1.0,
            k_linear: 0.09,
            k_quadratic: 0.032,
            on: true,
        }
    }

    #[test]
    fn light_toggle_round_trip_restores_contribution() {
        let mut light = test_light();
        let before = light.contribution();

        light.toggle();
        let (ambient, diffuse, specular) = light.contribution();
        assert_eq!(ambient, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(diffuse, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(specular, Vector3::new(0.0, 0.0, 0.0));

        light.toggle();
        assert_eq!(light.contribution(), before);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut camera = Camera::default();
        camera.zoom_by(100.0);
        assert_eq!(camera.zoom.0, Camera::ZOOM_MIN);
        camera.zoom_by(-100.0);
        assert_eq!(camera.zoom.0, Camera::ZOOM_MAX);
    }

    #[test]
    fn piece_model_matrix_composes_offset_then_extent() {
        let piece = ScenePiece {
            index: 0,
            material: MaterialKind::Wall,
            offset: Vector3::new(1.0, 2.0, 3.0),
            extent: Vector3::new(2.0, 2.0, 2.0),
        };
        let model = piece.model_matrix(Matrix4::identity());
        // Translation lands in the last column, untouched by the scale.
        assert_eq!(model.w.x, 1.0);
        assert_eq!(model.w.y, 2.0);
        assert_eq!(model.w.z, 3.0);
        assert_eq!(model.x.x, 2.0);
    }

    #[test]
    fn material_kinds_index_their_table_slots() {
        for (i, kind) in MaterialKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
