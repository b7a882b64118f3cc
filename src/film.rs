use crate::light::MAX_INTENSITY;

/// Red, green and blue intensities of one pixel.
pub type Rgb = [u8; 3];

pub const BACKGROUND: Rgb = [0, 0, 0];

/// Row-major pixel grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value;
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl Film<Rgb> {
    /// Flat `r, g, b, r, g, b, ...` bytes, row by row.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer.iter().flat_map(|pixel| pixel.iter().copied()).collect()
    }
}

/// Clamps an unbounded intensity into a channel value. Fractions are truncated.
pub fn clamp_intensity(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, MAX_INTENSITY) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp_intensity() {
        assert_eq!(clamp_intensity(-20.0), 0);
        assert_eq!(clamp_intensity(0.0), 0);
        assert_eq!(clamp_intensity(127.9), 127);
        assert_eq!(clamp_intensity(255.0), 255);
        assert_eq!(clamp_intensity(612.5), 255);
        assert_eq!(clamp_intensity(f64::INFINITY), 255);
        assert_eq!(clamp_intensity(f64::NAN), 0);
    }

    #[test]
    fn test_film_indexing() {
        let mut film = Film::new(4, 3, BACKGROUND);
        assert_eq!(film.total_pixels(), 12);
        film.write_at(3, 1, [1, 2, 3]);
        assert_eq!(film.at(3, 1), [1, 2, 3]);
        assert_eq!(film.buffer[7], [1, 2, 3]);
        assert_eq!(film.at(0, 0), BACKGROUND);
    }

    #[test]
    fn test_to_rgb_bytes() {
        let mut film = Film::new(2, 1, BACKGROUND);
        film.write_at(1, 0, [10, 20, 30]);
        assert_eq!(film.to_rgb_bytes(), vec![0, 0, 0, 10, 20, 30]);
    }
}
