use glam::Vec2;

/// Axis-aligned box in field space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Vertical spans touch or overlap (bounds inclusive)
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.max.y >= other.min.y && self.min.y <= other.max.y
    }

    /// Where `y` sits on this box's height, 0 = top edge, 100 = bottom edge.
    /// Unclamped: a ball grazing an edge lands slightly outside [0, 100].
    pub fn vertical_percent(&self, y: f32) -> f32 {
        (y - self.min.y) / self.height() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(aabb.min, Vec2::new(8.0, 17.0));
        assert_eq!(aabb.max, Vec2::new(12.0, 23.0));
        assert_eq!(aabb.center(), Vec2::new(10.0, 20.0));
        assert_eq!(aabb.height(), 6.0);
    }

    #[test]
    fn test_vertical_overlap_is_inclusive() {
        let paddle = Aabb::new(Vec2::new(20.0, 250.0), Vec2::new(30.0, 350.0));
        let touching_top = Aabb::new(Vec2::new(0.0, 235.0), Vec2::new(15.0, 250.0));
        let touching_bottom = Aabb::new(Vec2::new(0.0, 350.0), Vec2::new(15.0, 365.0));
        let above = Aabb::new(Vec2::new(0.0, 234.0), Vec2::new(15.0, 249.9));

        assert!(touching_top.overlaps_vertically(&paddle));
        assert!(touching_bottom.overlaps_vertically(&paddle));
        assert!(!above.overlaps_vertically(&paddle));
    }

    #[test]
    fn test_vertical_percent() {
        let paddle = Aabb::new(Vec2::new(20.0, 250.0), Vec2::new(30.0, 350.0));
        assert_eq!(paddle.vertical_percent(250.0), 0.0);
        assert_eq!(paddle.vertical_percent(300.0), 50.0);
        assert_eq!(paddle.vertical_percent(350.0), 100.0);
        assert!(paddle.vertical_percent(240.0) < 0.0);
    }
}
