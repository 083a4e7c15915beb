use super::Vec3;

/// Fraction of the sphere radius a point may sit behind the limb plane
/// while still counting as front-facing. Presentation tuning constant,
/// not a geometric law: `visible` holds while `z > -fraction * radius`.
pub const LIMB_DEPTH_FRACTION: f64 = 0.8;

/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoCoord {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoCoord {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// A point on the display sphere plus its front-hemisphere flag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub visible: bool,
}

/// Projects a geographic coordinate onto a sphere of the given radius,
/// offset by the current spin.
///
/// `rotation_deg` is a free-running accumulator; any value is accepted.
/// Out-of-range coordinates are not rejected, they land outside the
/// expected visible hemisphere.
pub fn project_to_sphere(coord: GeoCoord, rotation_deg: f64, radius: f64) -> SurfacePoint {
    project_with_limb_depth(coord, rotation_deg, radius, LIMB_DEPTH_FRACTION)
}

/// Same as [`project_to_sphere`] with an explicit limb-depth fraction.
pub fn project_with_limb_depth(
    coord: GeoCoord,
    rotation_deg: f64,
    radius: f64,
    limb_depth: f64,
) -> SurfacePoint {
    let lon = finite_or_zero(coord.lon_deg);
    let lat = finite_or_zero(coord.lat_deg);
    let rotation = finite_or_zero(rotation_deg);
    let radius = if radius.is_finite() && radius > 0.0 {
        radius
    } else {
        0.0
    };

    let phi = (90.0 - lat).to_radians();
    let theta = (lon + rotation).to_radians();

    let x = radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    SurfacePoint {
        position: Vec3::new(x, y, z),
        visible: z > -limb_depth * radius,
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
