use rapier2d::parry::shape::Cuboid;
use rapier2d::prelude::*;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Physics world that owns the simulation the characters live in.
///
/// World units are screen pixels with y growing downward, so gravity points
/// along +y.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts
    query_pipeline: QueryPipeline,

    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a new physics world with the given downward gravity (px/s²)
    pub fn with_gravity(gravity_y: Real) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity: vector![0.0, gravity_y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Refresh the query pipeline without stepping (e.g. right after spawning)
    pub fn update_queries(&mut self) {
        self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Number of rigid bodies in the world
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        ray_origin: Vector<Real>,
        ray_dir: Vector<Real>,
        max_toi: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![ray_origin.x, ray_origin.y], ray_dir);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            solid,
            filter,
        )
    }

    /// Colliders overlapping a box with the given half extents placed at `position`
    pub fn intersecting_colliders(
        &self,
        position: &Isometry<Real>,
        half_extents: Vector<Real>,
        filter: QueryFilter,
    ) -> Vec<ColliderHandle> {
        let shape = Cuboid::new(half_extents);
        let mut hits = Vec::new();
        self.query_pipeline.intersections_with_shape(
            &self.rigid_body_set,
            &self.collider_set,
            position,
            &shape,
            filter,
            |handle| {
                hits.push(handle);
                true
            },
        );
        hits
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Set the timestep used by the next `step`
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }

    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;

    #[test]
    fn test_gravity_points_down_screen() {
        let world = PhysicsWorld::with_gravity(2100.0);
        assert_eq!(world.gravity().y, 2100.0);
        assert_eq!(world.gravity().x, 0.0);
    }

    #[test]
    fn test_dynamic_body_falls_toward_positive_y() {
        let mut world = PhysicsWorld::with_gravity(2100.0);
        let handle = world.add_rigid_body(presets::player_body(100.0, 100.0));
        world.add_collider(presets::player_collider(32.0, 48.0), handle);

        for _ in 0..10 {
            world.step();
        }

        let body = world.get_rigid_body(handle).unwrap();
        assert!(body.translation().y > 100.0);
    }

    #[test]
    fn test_raycast_hits_platform() {
        let mut world = PhysicsWorld::with_gravity(2100.0);
        let platform = world.add_rigid_body(presets::platform_body(100.0, 200.0));
        world.add_collider(presets::platform_collider(200.0, 20.0), platform);
        world.update_queries();

        let hit = world.raycast(
            vector![100.0, 150.0],
            vector![0.0, 1.0],
            100.0,
            true,
            QueryFilter::default(),
        );
        let (_, toi) = hit.unwrap();
        assert!((toi - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_intersecting_colliders() {
        let mut world = PhysicsWorld::with_gravity(2100.0);
        let platform = world.add_rigid_body(presets::platform_body(100.0, 200.0));
        let collider = world.add_collider(presets::platform_collider(200.0, 20.0), platform);
        world.update_queries();

        let inside = Isometry::translation(150.0, 195.0);
        let hits = world.intersecting_colliders(&inside, vector![5.0, 5.0], QueryFilter::default());
        assert_eq!(hits, vec![collider]);

        let above = Isometry::translation(150.0, 100.0);
        let hits = world.intersecting_colliders(&above, vector![5.0, 5.0], QueryFilter::default());
        assert!(hits.is_empty());

        let excluded = QueryFilter::default().exclude_collider(collider);
        assert!(world.intersecting_colliders(&inside, vector![5.0, 5.0], excluded).is_empty());
    }

    #[test]
    fn test_remove_rigid_body() {
        let mut world = PhysicsWorld::with_gravity(2100.0);
        let handle = world.add_rigid_body(presets::platform_body(0.0, 0.0));
        assert_eq!(world.body_count(), 1);
        world.remove_rigid_body(handle);
        assert_eq!(world.body_count(), 0);
        assert!(world.get_rigid_body(handle).is_none());
    }
}
