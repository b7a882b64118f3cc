use std::ops::Add;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::camera::ViewPlane;
use crate::error::{Result, TracerError};
use crate::film::{clamp_intensity, Film, Rgb, BACKGROUND};
use crate::geometry::Primitive;
use crate::light::LightSource;
use crate::math::{Point3, Ray, Vec3, SHADOW_EPSILON};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PixelShade {
    Background,
    Surface { color: Rgb, shadowed: bool },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels whose camera ray hit the solid.
    pub hits: usize,
    /// Hit pixels where at least one light was occluded.
    pub shadowed: usize,
    /// Pixels left as background because their geometry could not be resolved.
    pub errors: usize,
}

impl Add for RenderStats {
    type Output = RenderStats;
    fn add(self, other: RenderStats) -> RenderStats {
        RenderStats {
            hits: self.hits + other.hits,
            shadowed: self.shadowed + other.shadowed,
            errors: self.errors + other.errors,
        }
    }
}

pub struct Renderer<P> {
    pub view_plane: ViewPlane,
    pub primitive: P,
    pub lights: Vec<LightSource>,
    pub width: usize,
    pub height: usize,
}

impl<P: Primitive + Sync> Renderer<P> {
    /// `horizontal_fov` is in radians.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        camera: Point3,
        look_at: Point3,
        up: Vec3,
        horizontal_fov: f64,
        width: usize,
        height: usize,
        primitive: P,
        lights: Vec<LightSource>,
    ) -> Result<Renderer<P>> {
        if width == 0 || height == 0 {
            return Err(TracerError::InvalidConfiguration(format!(
                "resolution must be non-zero, got {}x{}",
                width, height
            )));
        }
        let view_plane = ViewPlane::new(
            camera,
            look_at,
            up,
            horizontal_fov,
            width as f64 / height as f64,
        )?;
        Ok(Renderer {
            view_plane,
            primitive,
            lights,
            width,
            height,
        })
    }

    /// Shades the pixel at column `x`, row `y`, sampling its center.
    pub fn shade(&self, x: usize, y: usize) -> Result<PixelShade> {
        let u = (x as f64 + 0.5) / self.width as f64;
        let v = (y as f64 + 0.5) / self.height as f64;
        let ray = self.view_plane.get_ray(u, v)?;
        let hit = match self.primitive.intersect(ray)? {
            Some(hit) => hit,
            None => return Ok(PixelShade::Background),
        };

        let mut channels = [0.0f64; 3];
        let mut shadowed = false;
        for light in self.lights.iter() {
            let light_vector = light.position - hit.point;
            let shadow_ray = Ray::new(hit.point, light_vector.normalized()?)
                .offset_origin(hit.normal * SHADOW_EPSILON);
            let intensity = if self.primitive.intersect(shadow_ray)?.is_some() {
                shadowed = true;
                light.ambient
            } else {
                light.intensity(hit.normal, light_vector)?
            };
            channels[light.channel.index()] += intensity;
        }

        Ok(PixelShade::Surface {
            color: channels.map(clamp_intensity),
            shadowed,
        })
    }

    pub fn render(&self) -> (Film<Rgb>, RenderStats) {
        self.render_with_progress(&|_| {})
    }

    /// Renders rows in parallel. `progress` is called with the index of each
    /// finished row, in no particular order.
    pub fn render_with_progress(
        &self,
        progress: &(dyn Fn(usize) + Sync),
    ) -> (Film<Rgb>, RenderStats) {
        info!(
            "rendering {}x{} with {} light(s)",
            self.width,
            self.height,
            self.lights.len()
        );
        let start = Instant::now();
        let mut film = Film::new(self.width, self.height, BACKGROUND);

        let stats = film
            .buffer
            .par_chunks_mut(self.width)
            .enumerate()
            .map(|(y, row)| {
                let mut stats = RenderStats::default();
                for (x, pixel) in row.iter_mut().enumerate() {
                    match self.shade(x, y) {
                        Ok(PixelShade::Background) => {}
                        Ok(PixelShade::Surface { color, shadowed }) => {
                            *pixel = color;
                            stats.hits += 1;
                            if shadowed {
                                stats.shadowed += 1;
                            }
                        }
                        Err(e) => {
                            warn!("pixel ({}, {}) left as background: {}", x, y, e);
                            stats.errors += 1;
                        }
                    }
                }
                progress(y);
                stats
            })
            .reduce(RenderStats::default, |a, b| a + b);

        info!(
            "rendered in {:?}: {} hits, {} shadowed, {} errors",
            start.elapsed(),
            stats.hits,
            stats.shadowed,
            stats.errors
        );
        (film, stats)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{MengerSponge, PrimitiveEnum, RayHit, Sphere};
    use crate::light::Channel;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cube(depth: u32) -> MengerSponge {
        MengerSponge::new(Point3::new(-1.0, -1.0, -1.0), 2.0, depth).unwrap()
    }

    fn light(position: Point3, ambient: f64, channel: Channel) -> LightSource {
        LightSource::new(position, ambient, channel).unwrap()
    }

    fn cube_renderer(
        width: usize,
        height: usize,
        lights: Vec<LightSource>,
    ) -> Renderer<MengerSponge> {
        Renderer::new(
            Point3::new(0.0, 0.0, -10.0),
            Point3::ORIGIN,
            Vec3::Y,
            90f64.to_radians(),
            width,
            height,
            cube(0),
            lights,
        )
        .unwrap()
    }

    #[test]
    fn test_head_on_light() {
        let lights = vec![light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Red)];
        let renderer = cube_renderer(1, 1, lights);
        assert_eq!(
            renderer.shade(0, 0).unwrap(),
            PixelShade::Surface {
                color: [255, 0, 0],
                shadowed: false
            }
        );
    }

    #[test]
    fn test_occluded_light_contributes_ambient_only() {
        let lights = vec![
            light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Red),
            light(Point3::new(0.0, 0.0, 300.0), 40.0, Channel::Blue),
        ];
        let renderer = cube_renderer(1, 1, lights);
        assert_eq!(
            renderer.shade(0, 0).unwrap(),
            PixelShade::Surface {
                color: [255, 0, 40],
                shadowed: true
            }
        );
    }

    #[test]
    fn test_lights_sharing_a_channel_are_clamped() {
        let lights = vec![
            light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Green),
            light(Point3::new(0.0, 0.0, -400.0), 60.0, Channel::Green),
        ];
        let renderer = cube_renderer(1, 1, lights);
        assert_eq!(
            renderer.shade(0, 0).unwrap(),
            PixelShade::Surface {
                color: [0, 255, 0],
                shadowed: false
            }
        );

        let behind = vec![
            light(Point3::new(0.0, 0.0, 300.0), 200.0, Channel::Blue),
            light(Point3::new(0.0, 0.0, 400.0), 200.0, Channel::Blue),
        ];
        let renderer = cube_renderer(1, 1, behind);
        assert_eq!(
            renderer.shade(0, 0).unwrap(),
            PixelShade::Surface {
                color: [0, 0, 255],
                shadowed: true
            }
        );
    }

    #[test]
    fn test_missed_rays_are_background() {
        let lights = vec![light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Red)];
        let renderer = cube_renderer(9, 9, lights);
        assert_eq!(renderer.shade(0, 0).unwrap(), PixelShade::Background);
        assert_eq!(renderer.shade(8, 0).unwrap(), PixelShade::Background);
        assert!(matches!(
            renderer.shade(4, 4).unwrap(),
            PixelShade::Surface { .. }
        ));
    }

    #[test]
    fn test_parallel_render_matches_shade() {
        let lights = vec![
            light(Point3::new(1000.0, -700.0, -1000.0), 50.0, Channel::Blue),
            light(Point3::new(-1000.0, -1000.0, -1000.0), 50.0, Channel::Red),
        ];
        let renderer = Renderer::new(
            Point3::new(3.0, -2.5, -4.0),
            Point3::ORIGIN,
            Vec3::Y,
            70f64.to_radians(),
            24,
            16,
            cube(2),
            lights,
        )
        .unwrap();
        let (film, stats) = renderer.render();
        assert_eq!(film.width, 24);
        assert_eq!(film.height, 16);

        let mut expected = RenderStats::default();
        for y in 0..film.height {
            for x in 0..film.width {
                match renderer.shade(x, y) {
                    Ok(PixelShade::Background) => assert_eq!(film.at(x, y), BACKGROUND),
                    Ok(PixelShade::Surface { color, shadowed }) => {
                        assert_eq!(film.at(x, y), color, "({}, {})", x, y);
                        expected.hits += 1;
                        if shadowed {
                            expected.shadowed += 1;
                        }
                    }
                    Err(_) => expected.errors += 1,
                }
            }
        }
        assert_eq!(stats, expected);
        assert!(stats.hits > 0);
        assert!(stats.hits < film.total_pixels());
    }

    #[test]
    fn test_progress_reports_every_row() {
        let lights = vec![light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Red)];
        let renderer = cube_renderer(5, 7, lights);
        let rows = AtomicUsize::new(0);
        let (_, _) = renderer.render_with_progress(&|_| {
            rows.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(rows.load(Ordering::Relaxed), 7);
    }

    #[test]
    fn test_sphere_primitive() {
        let lights = vec![light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Red)];
        let renderer = Renderer::new(
            Point3::new(0.0, 0.0, -10.0),
            Point3::ORIGIN,
            Vec3::Y,
            90f64.to_radians(),
            1,
            1,
            PrimitiveEnum::from(Sphere::new(2.0, Point3::ORIGIN).unwrap()),
            lights,
        )
        .unwrap();
        assert_eq!(
            renderer.shade(0, 0).unwrap(),
            PixelShade::Surface {
                color: [255, 0, 0],
                shadowed: false
            }
        );
    }

    /// Fails to resolve a face for every ray heading towards +x.
    struct FaceLookupFails;

    impl Primitive for FaceLookupFails {
        fn intersect(&self, r: Ray) -> Result<Option<RayHit>> {
            if r.direction.x > 0.0 {
                return Err(TracerError::NoMatchingFace {
                    point: r.origin,
                    min_corner: Point3::ORIGIN,
                    max_corner: Point3::ORIGIN,
                });
            }
            Ok(None)
        }
    }

    #[test]
    fn test_geometry_errors_leave_background() {
        let renderer = Renderer::new(
            Point3::new(0.0, 0.0, -10.0),
            Point3::ORIGIN,
            Vec3::Y,
            90f64.to_radians(),
            4,
            2,
            FaceLookupFails,
            vec![light(Point3::new(0.0, 0.0, -300.0), 60.0, Channel::Red)],
        )
        .unwrap();
        let (film, stats) = renderer.render();

        let mut failed = 0;
        for y in 0..film.height {
            for x in 0..film.width {
                assert_eq!(film.at(x, y), BACKGROUND);
                if renderer.shade(x, y).is_err() {
                    failed += 1;
                }
            }
        }
        // right is -x seen from this camera, so the two left columns fail
        assert_eq!(failed, 4);
        assert_eq!(
            stats,
            RenderStats {
                hits: 0,
                shadowed: 0,
                errors: 4
            }
        );
    }

    #[test]
    fn test_invalid_setup_fails_before_rendering() {
        let result = Renderer::new(
            Point3::ORIGIN,
            Point3::ORIGIN,
            Vec3::Y,
            1.0,
            10,
            10,
            cube(1),
            Vec::new(),
        );
        assert!(matches!(result, Err(TracerError::DegenerateCamera(_))));

        let result = Renderer::new(
            Point3::new(0.0, 0.0, -10.0),
            Point3::ORIGIN,
            Vec3::Y,
            1.0,
            0,
            10,
            cube(1),
            Vec::new(),
        );
        assert!(matches!(result, Err(TracerError::InvalidConfiguration(_))));
    }
}
