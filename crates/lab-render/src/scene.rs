use lab_core::Result;
use lab_math::{Aabb3, DMat4, DVec3};
use lab_mesh::{create_cube, create_cylinder, create_plane, create_sphere, MeshData, TerrainGrid};

/// A named mesh placed in the world by its model matrix.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub mesh: MeshData,
    model: DMat4,
}

impl SceneObject {
    pub fn model(&self) -> DMat4 {
        self.model
    }

    /// Apply `transformation` after the current placement.
    pub fn transform(&mut self, transformation: DMat4) {
        self.model = transformation * self.model;
    }

    /// Drop every placement, leaving the mesh in its own local frame.
    pub fn reset_model_matrix(&mut self) {
        self.model = DMat4::IDENTITY;
    }

    pub fn world_bounds(&self) -> Option<Aabb3> {
        self.mesh.bounding_box().map(|bb| bb.transformed(&self.model))
    }
}

/// The set of meshes drawn each frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, mesh: MeshData, model: DMat4) -> &mut SceneObject {
        self.objects.push(SceneObject {
            name: name.to_string(),
            mesh,
            model,
        });
        let last = self.objects.len() - 1;
        &mut self.objects[last]
    }

    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Total triangle count across all objects
    pub fn total_triangles(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.triangle_count()).sum()
    }

    /// World-space bounding box of every placed object.
    pub fn bounds(&self) -> Option<Aabb3> {
        self.objects
            .iter()
            .filter_map(SceneObject::world_bounds)
            .reduce(|a, b| a.merge(&b))
    }
}

/// Side length of the terrain patch, which is recentered on the origin.
const TERRAIN_SIZE: f64 = 20.0;

/// The lab layout: rolling terrain, a ground plane and one of each primitive.
pub fn lab_scene() -> Result<Scene> {
    let mut scene = Scene::new();

    let terrain = TerrainGrid::new(100, 100)
        .extent(TERRAIN_SIZE, TERRAIN_SIZE)
        .build_with_heights(|x, z| 0.4 * (x * 0.5).sin() * (z * 0.5).cos())?;
    scene.add(
        "terrain",
        terrain,
        DMat4::from_translation(DVec3::new(-TERRAIN_SIZE / 2.0, -2.0, -TERRAIN_SIZE / 2.0)),
    );
    scene.add(
        "ground",
        create_plane(6.0, 6.0)?,
        DMat4::from_translation(DVec3::new(0.0, -1.0, 0.0)),
    );
    scene.add(
        "cube",
        create_cube(1.0, 1.0, 1.0)?,
        DMat4::from_translation(DVec3::new(-2.0, -0.5, 0.0)),
    );
    scene.add(
        "cylinder",
        create_cylinder(32, 1.5, 0.5)?,
        DMat4::from_translation(DVec3::new(0.0, -0.25, 0.0)),
    );
    scene.add(
        "sphere",
        create_sphere(32, 16, 0.6)?,
        DMat4::from_translation(DVec3::new(2.0, -0.4, 0.0)),
    );

    for object in scene.objects.iter_mut() {
        object.mesh.compute_normals();
    }

    log::debug!(
        "lab scene: {} objects, {} triangles",
        scene.len(),
        scene.total_triangles()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.total_triangles(), 0);
        assert!(scene.bounds().is_none());
    }

    #[test]
    fn test_add_and_bounds() {
        let mut scene = Scene::new();
        scene.add(
            "cube",
            create_cube(2.0, 2.0, 2.0).unwrap(),
            DMat4::from_translation(DVec3::new(5.0, 0.0, 0.0)),
        );
        scene.add("plane", create_plane(2.0, 2.0).unwrap(), DMat4::IDENTITY);

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.total_triangles(), 12 + 4);
        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min, DVec3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, DVec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_transform_and_reset() {
        let mut scene = Scene::new();
        let start = DMat4::from_translation(DVec3::new(0.0, 1.0, 0.0));
        scene.add("sphere", create_sphere(8, 4, 1.0).unwrap(), start);

        let sphere = scene.get_mut("sphere").unwrap();
        sphere.transform(DMat4::from_translation(DVec3::X));
        sphere.transform(DMat4::from_scale(DVec3::splat(2.0)));
        // Scale applies after the translations.
        assert_abs_diff_eq!(
            sphere.model().transform_point3(DVec3::ZERO),
            DVec3::new(2.0, 2.0, 0.0),
            epsilon = 1e-12
        );

        sphere.reset_model_matrix();
        assert_eq!(sphere.model(), DMat4::IDENTITY);
        let local = sphere.world_bounds().unwrap();
        assert_abs_diff_eq!(local.center(), DVec3::ZERO, epsilon = 1e-12);
    }

    #[test]
    fn test_lab_scene() {
        let scene = lab_scene().unwrap();
        let names: Vec<_> = scene.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["terrain", "ground", "cube", "cylinder", "sphere"]);
        assert!(scene.objects().iter().all(|o| o.mesh.normals().len() == o.mesh.vertex_count()));
        assert!(scene.get("missing").is_none());

        let terrain = scene.get("terrain").unwrap().world_bounds().unwrap();
        assert_abs_diff_eq!(terrain.center().x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(terrain.center().z, 0.0, epsilon = 1e-9);
    }
}
