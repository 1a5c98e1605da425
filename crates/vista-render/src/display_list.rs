//! Compiled fixed-shape models, built once and replayed by handle.

use log::{debug, warn};
use vista_core::ListHandle;
use vista_mesh::{box_model, cylinder_model, pyramid_model, sphere_model, TriangleMesh};

use crate::lod::MAX_LOD;
use crate::target::DrawTarget;

/// A mesh compiled under a process-wide unique handle.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    handle: ListHandle,
    mesh: Option<TriangleMesh>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> ListHandle {
        self.handle
    }

    /// Replace the list contents.
    pub fn compile(&mut self, mesh: TriangleMesh) {
        debug!("compiled {} ({} triangles)", self.handle, mesh.triangle_count());
        self.mesh = Some(mesh);
    }

    pub fn is_compiled(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn mesh(&self) -> Option<&TriangleMesh> {
        self.mesh.as_ref()
    }

    /// Replay the list; an uncompiled list draws nothing.
    pub fn render(&self, target: &mut dyn DrawTarget) {
        match &self.mesh {
            Some(mesh) => target.call_list(self.handle, mesh),
            None => warn!("rendering uncompiled display list {}", self.handle),
        }
    }

    fn compiled_with(&mut self, build: impl FnOnce() -> TriangleMesh) -> &DisplayList {
        if self.mesh.is_none() {
            self.compile(build());
        }
        self
    }
}

/// The shared unit models, one display list per shape and level of detail.
#[derive(Debug, Clone, Default)]
pub struct ModelCache {
    box_model: DisplayList,
    pyramid_model: DisplayList,
    sphere_models: [DisplayList; MAX_LOD + 1],
    cylinder_models: [DisplayList; MAX_LOD + 1],
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn box_list(&mut self) -> &DisplayList {
        self.box_model.compiled_with(|| box_model(false))
    }

    pub fn pyramid_list(&mut self) -> &DisplayList {
        self.pyramid_model.compiled_with(pyramid_model)
    }

    /// Unit sphere at `lod`, clamped to [`MAX_LOD`].
    pub fn sphere_list(&mut self, lod: usize) -> &DisplayList {
        let lod = lod.min(MAX_LOD);
        self.sphere_models[lod].compiled_with(|| sphere_model(lod))
    }

    /// Unit cylinder at `lod`, clamped to [`MAX_LOD`].
    pub fn cylinder_list(&mut self, lod: usize) -> &DisplayList {
        let lod = lod.min(MAX_LOD);
        self.cylinder_models[lod].compiled_with(|| cylinder_model(lod))
    }

    /// Number of lists compiled so far.
    pub fn compiled_count(&self) -> usize {
        [&self.box_model, &self.pyramid_model]
            .into_iter()
            .chain(&self.sphere_models)
            .chain(&self.cylinder_models)
            .filter(|list| list.is_compiled())
            .count()
    }
}
