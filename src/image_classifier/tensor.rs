use image::{imageops, DynamicImage};

pub const CHANNELS: usize = 3;

/// RGB pixels scaled to `[0, 1]`, laid out height x width x channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl ImageTensor {
    pub fn from_image(
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if width == 0 || height == 0 {
            return Err(format!("invalid tensor size {}x{}", width, height).into());
        }

        let rgb = image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8();

        let data = rgb
            .pixels()
            .flat_map(|pixel| pixel.0)
            .map(|value| value as f32 / 255.0)
            .collect();

        Ok(Self {
            height: height as usize,
            width: width as usize,
            data,
        })
    }

    /// `[height, width, channels]`
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, CHANNELS]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[allow(dead_code)]
    pub fn get(&self, y: usize, x: usize, channel: usize) -> Option<f32> {
        if y >= self.height || x >= self.width || channel >= CHANNELS {
            return None;
        }
        self.data
            .get((y * self.width + x) * CHANNELS + channel)
            .copied()
    }
}
