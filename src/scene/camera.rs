use glam::Mat4;

/// Perspective camera with a cached projection matrix.
///
/// Parameter setters are cheap field writes;
/// [`update_projection`](Self::update_projection) rebuilds the cached matrix
/// once the host is done mutating.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    world: Mat4,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_y,
            aspect,
            near,
            far,
            world: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn world(&self) -> Mat4 {
        self.world
    }

    pub fn set_world(&mut self, world: Mat4) {
        self.world = world;
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(60f32.to_radians(), 16.0 / 9.0, 0.1, 100.0)
    }
}

/// Orthographic camera over a box volume.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
    world: Mat4,
    projection: Mat4,
}

impl OrthographicCamera {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
            world: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.left, self.right, self.bottom, self.top)
    }

    pub fn set_bounds(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
    }

    pub fn update_projection(&mut self) {
        self.projection = Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
    }

    pub fn world(&self) -> Mat4 {
        self.world
    }

    pub fn set_world(&mut self, world: Mat4) {
        self.world = world;
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self::new(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0)
    }
}

/// The closed set of camera variants the renderer knows how to reshape.
#[derive(Debug, Clone)]
pub enum Camera {
    Perspective(PerspectiveCamera),
    Orthographic(OrthographicCamera),
}

impl Camera {
    pub fn world(&self) -> Mat4 {
        match self {
            Camera::Perspective(camera) => camera.world(),
            Camera::Orthographic(camera) => camera.world(),
        }
    }

    pub fn set_world(&mut self, world: Mat4) {
        match self {
            Camera::Perspective(camera) => camera.set_world(world),
            Camera::Orthographic(camera) => camera.set_world(world),
        }
    }

    pub fn projection(&self) -> Mat4 {
        match self {
            Camera::Perspective(camera) => camera.projection(),
            Camera::Orthographic(camera) => camera.projection(),
        }
    }

    pub fn update_projection(&mut self) {
        match self {
            Camera::Perspective(camera) => camera.update_projection(),
            Camera::Orthographic(camera) => camera.update_projection(),
        }
    }

    /// Maps new viewport dimensions onto the variant's projection parameters
    /// and recomputes the projection matrix. Perspective cameras take the
    /// aspect ratio, orthographic cameras symmetric bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        match self {
            Camera::Perspective(camera) => camera.set_aspect(width / height),
            Camera::Orthographic(camera) => camera.set_bounds(-width, width, -height, height),
        }
        self.update_projection();
    }
}

impl From<PerspectiveCamera> for Camera {
    fn from(camera: PerspectiveCamera) -> Self {
        Camera::Perspective(camera)
    }
}

impl From<OrthographicCamera> for Camera {
    fn from(camera: OrthographicCamera) -> Self {
        Camera::Orthographic(camera)
    }
}
