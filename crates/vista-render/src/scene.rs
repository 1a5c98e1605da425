use log::{debug, warn};
use slotmap::{new_key_type, SlotMap};
use vista_core::Result;
use vista_math::Extent;

use crate::objects::Renderable;
use crate::target::DrawTarget;
use crate::view::View;

new_key_type! {
    pub struct ObjectId;
}

/// Objects drawn together, in the order they were added.
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, Box<dyn Renderable>>,
    order: Vec<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Renderable + 'static) -> ObjectId {
        self.add_boxed(Box::new(object))
    }

    pub fn add_boxed(&mut self, object: Box<dyn Renderable>) -> ObjectId {
        let id = self.objects.insert(object);
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Box<dyn Renderable>> {
        let object = self.objects.remove(id)?;
        self.order.retain(|&o| o != id);
        Some(object)
    }

    pub fn get(&self, id: ObjectId) -> Option<&dyn Renderable> {
        self.objects.get(id).map(|o| o.as_ref())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Box<dyn Renderable>> {
        self.objects.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &dyn Renderable)> {
        self.order
            .iter()
            .filter_map(|&id| self.objects.get(id).map(|o| (id, o.as_ref())))
    }

    /// World bounds of every drawable object.
    pub fn extent(&self) -> Result<Extent> {
        let mut extent = Extent::new();
        for (_, object) in self.iter().filter(|(_, o)| !o.is_degenerate()) {
            object.grow_extent(&mut extent)?;
        }
        Ok(extent)
    }

    /// Draw every object; degenerate objects are skipped.
    pub fn render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        let mut skipped = 0;
        for (id, object) in self.iter() {
            if object.is_degenerate() {
                skipped += 1;
                debug!("skipping degenerate object {id:?}");
                continue;
            }
            object.render(view, target)?;
        }
        if skipped > 0 {
            warn!("{skipped} degenerate objects were not drawn");
        }
        Ok(())
    }

    /// Selection pass over every drawable object.
    pub fn pick_render(&self, view: &mut View, target: &mut dyn DrawTarget) -> Result<()> {
        for (_, object) in self.iter().filter(|(_, o)| !o.is_degenerate()) {
            object.pick_render(view, target)?;
        }
        Ok(())
    }
}
