// Live drag proxies, kept in spawn order so the newest one draws on top
use crate::config::DraggableDescriptor;
use crate::geometry::{Point, Rect};
use crate::host::{ProxyHost, ProxyId};

#[derive(Debug, Clone, PartialEq)]
pub struct Proxy {
    pub id: ProxyId,
    /// Index of the item this proxy duplicates.
    pub source: usize,
    pub name: String,
    pub container: String,
    pub color: String,
    pub width: f64,
    pub height: f64,
    pub position: Point,
}

impl Proxy {
    pub fn rect(&self) -> Rect {
        Rect::centered_at(self.position, self.width, self.height)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Scene {
    proxies: Vec<Proxy>,
    next_id: u64,
}

impl Scene {
    pub fn live_proxies(&self) -> &[Proxy] {
        &self.proxies
    }

    pub fn get(&self, id: ProxyId) -> Option<&Proxy> {
        self.proxies.iter().find(|p| p.id == id)
    }
}

impl ProxyHost for Scene {
    fn spawn_proxy(&mut self, index: usize, item: &DraggableDescriptor, position: Point) -> ProxyId {
        let id = ProxyId(self.next_id);
        self.next_id += 1;
        self.proxies.push(Proxy {
            id,
            source: index,
            name: item.name.clone(),
            container: item.container.clone(),
            color: item.color.clone(),
            width: item.region.width,
            height: item.region.height,
            position,
        });
        id
    }

    fn move_proxy(&mut self, id: ProxyId, position: Point) {
        if let Some(p) = self.proxies.iter_mut().find(|p| p.id == id) {
            p.position = position;
        }
    }

    fn destroy_proxy(&mut self, id: ProxyId) {
        self.proxies.retain(|p| p.id != id);
    }
}
