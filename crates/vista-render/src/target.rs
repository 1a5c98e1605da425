//! The seam between renderables and a graphics API.

use log::warn;
use vista_core::ListHandle;
use vista_math::{DMat4, Rgb};
use vista_mesh::{LineStrip, StripRun, TriangleMesh, TubeMesh, VertexColors};

/// Which faces the rasterizer discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullFace {
    Front,
    Back,
}

/// Immediate-mode drawing surface with a matrix stack.
///
/// Renderables only ever talk to this trait; binding it to a real API is the
/// implementor's business.
pub trait DrawTarget {
    fn push_matrix(&mut self);
    fn pop_matrix(&mut self);
    /// Post-multiply the current matrix.
    fn mult_matrix(&mut self, matrix: &DMat4);
    fn set_color(&mut self, color: Rgb, opacity: f32);
    /// `None` disables face culling.
    fn set_cull_face(&mut self, face: Option<CullFace>);
    /// Replay a compiled display list.
    fn call_list(&mut self, handle: ListHandle, mesh: &TriangleMesh);
    fn draw_line_strip(&mut self, strip: &LineStrip, antialias: bool);
    /// Submit one triangle strip of a tube.
    fn draw_tube_strip(&mut self, mesh: &TubeMesh, run: &StripRun);
}

/// One recorded call on a [`CommandRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PushMatrix,
    PopMatrix,
    MultMatrix(DMat4),
    SetColor { color: Rgb, opacity: f32 },
    CullFace(Option<CullFace>),
    CallList {
        handle: ListHandle,
        triangles: usize,
        /// Current matrix when the list was called.
        matrix: DMat4,
    },
    LineStrip {
        points: usize,
        antialias: bool,
        color: Option<Rgb>,
    },
    TubeStrip {
        side: usize,
        first_ring: usize,
        indices: Vec<u32>,
    },
}

/// A [`DrawTarget`] that records every call, for tests and debugging.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    stack: Vec<DMat4>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            stack: vec![DMat4::IDENTITY],
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Matrix on top of the stack.
    pub fn current_matrix(&self) -> DMat4 {
        self.stack.last().copied().unwrap_or(DMat4::IDENTITY)
    }

    /// Number of pushes not yet popped.
    pub fn matrix_depth(&self) -> usize {
        self.stack.len() - 1
    }

    pub fn list_calls(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::CallList { .. }))
    }

    pub fn tube_strips(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::TubeStrip { .. }))
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for CommandRecorder {
    fn push_matrix(&mut self) {
        self.stack.push(self.current_matrix());
        self.commands.push(DrawCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            warn!("matrix stack underflow");
        }
        self.commands.push(DrawCommand::PopMatrix);
    }

    fn mult_matrix(&mut self, matrix: &DMat4) {
        if let Some(top) = self.stack.last_mut() {
            *top *= *matrix;
        }
        self.commands.push(DrawCommand::MultMatrix(*matrix));
    }

    fn set_color(&mut self, color: Rgb, opacity: f32) {
        self.commands.push(DrawCommand::SetColor { color, opacity });
    }

    fn set_cull_face(&mut self, face: Option<CullFace>) {
        self.commands.push(DrawCommand::CullFace(face));
    }

    fn call_list(&mut self, handle: ListHandle, mesh: &TriangleMesh) {
        self.commands.push(DrawCommand::CallList {
            handle,
            triangles: mesh.triangle_count(),
            matrix: self.current_matrix(),
        });
    }

    fn draw_line_strip(&mut self, strip: &LineStrip, antialias: bool) {
        let color = match &strip.colors {
            VertexColors::Uniform(c) => Some(*c),
            VertexColors::PerVertex(_) => None,
        };
        self.commands.push(DrawCommand::LineStrip {
            points: strip.points.len(),
            antialias,
            color,
        });
    }

    fn draw_tube_strip(&mut self, mesh: &TubeMesh, run: &StripRun) {
        self.commands.push(DrawCommand::TubeStrip {
            side: run.side,
            first_ring: run.first_ring,
            indices: mesh.strip_indices(run).to_vec(),
        });
    }
}
