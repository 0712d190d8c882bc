use glam::{Mat4, Vec3};

/// Champ de vision vertical, en degrés.
pub const FIELD_OF_VIEW_DEG: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Recule la scène devant la caméra.
pub const TRANSLATION: Vec3 = Vec3::new(0.0, 0.0, -10.0);
/// Rotation fixe autour de l'axe Y, en radians.
pub const ROTATION_Y: f32 = 0.5;

/// Paramètres fixes de la caméra.
///
/// Les matrices sont recalculées à partir de l'identité à chaque frame : pas
/// d'accumulation, donc ni dérive ni animation. Animer la caméra demanderait
/// un angle dérivé du temps passé explicitement par la boucle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_y_radians: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub translation: Vec3,
    pub rotation_y: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_radians: FIELD_OF_VIEW_DEG.to_radians(),
            z_near: Z_NEAR,
            z_far: Z_FAR,
            translation: TRANSLATION,
            rotation_y: ROTATION_Y,
        }
    }
}

impl Camera {
    /// Projection perspective (conventions OpenGL, NDC z dans [-1, 1]).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_radians, aspect, self.z_near, self.z_far)
    }

    /// identité → translation → rotation Y.
    pub fn model_view(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_rotation_y(self.rotation_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_projection_encodes_aspect_ratio() {
        let camera = Camera::default();
        let f = 1.0 / (FIELD_OF_VIEW_DEG.to_radians() / 2.0).tan();

        let p = camera.projection(800.0 / 600.0);
        assert!(approx(p.y_axis.y, f));
        assert!(approx(p.x_axis.x, f / (800.0 / 600.0)));
        assert!(approx(p.z_axis.w, -1.0));
    }

    #[test]
    fn test_model_view_translates_then_rotates() {
        let mv = Camera::default().model_view();

        // L'origine de la scène se retrouve 10 unités devant la caméra.
        let origin = mv * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(approx(origin.z, -10.0));
        assert!(approx(origin.x, 0.0));

        // Un point sur +X tourne de 0.5 rad autour de Y avant la translation.
        let x = mv * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(approx(x.x, 0.5f32.cos()));
        assert!(approx(x.z, -10.0 - 0.5f32.sin()));
    }

    #[test]
    fn test_matrices_do_not_accumulate() {
        let camera = Camera::default();
        assert_eq!(camera.model_view(), camera.model_view());
        assert_eq!(camera.projection(1.5), camera.projection(1.5));
    }

    #[test]
    fn test_points_in_cloud_are_inside_clip_volume() {
        let camera = Camera::default();
        let clip = camera.projection(1.0) * camera.model_view() * Vec4::new(5.0, 5.0, 5.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.z > -1.0 && ndc.z < 1.0, "{ndc:?}");
    }
}
