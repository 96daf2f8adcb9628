use super::Vector3;
use flo_curves::Coordinate;

impl Coordinate for Vector3 {
    #[inline]
    fn from_components(components: &[f64]) -> Vector3 {
        Vector3::from_components(components[0], components[1], components[2])
    }

    #[inline]
    fn origin() -> Vector3 {
        Vector3{x: 0.0, y: 0.0, z: 0.0}
    }

    #[inline]
    fn len() -> usize { 3 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Vector3 only has three components")
        }
    }

    fn from_biggest_components(p1: Vector3, p2: Vector3) -> Vector3 {
        Vector3::from_components(
            f64::from_biggest_components(p1.x, p2.x),
            f64::from_biggest_components(p1.y, p2.y),
            f64::from_biggest_components(p1.z, p2.z),
        )
    }

    fn from_smallest_components(p1: Vector3, p2: Vector3) -> Vector3 {
        Vector3::from_components(
            f64::from_smallest_components(p1.x, p2.x),
            f64::from_smallest_components(p1.y, p2.y),
            f64::from_smallest_components(p1.z, p2.z),
        )
    }

    #[inline]
    fn distance_to(&self, target: &Vector3) -> f64 {
        let dist_x = target.x-self.x;
        let dist_y = target.y-self.y;
        let dist_z = target.z-self.z;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y + dist_z*dist_z)
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.x*target.x + self.y*target.y + self.z*target.z
    }
}
