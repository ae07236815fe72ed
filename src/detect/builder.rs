//! Obstacle map builder.

use image::{DynamicImage, GrayImage};
use log::debug;

use crate::config::DetectionSection;
use crate::error::{Error, Result};
use crate::grid::OccupancyGrid;

use super::{binarize, dilate, open, remove_small_regions};

/// Builds an occupancy grid from a circuit sketch.
///
/// The build is a pure function of the image and the settings: threshold,
/// stroke-merging dilation, optional refinement, then the mandatory
/// safety dilation. Hand-drawn components come out as solid blobs with a
/// clearance margin, so the route search treats them as walls instead of
/// threading between their strokes.
pub struct ObstacleMapBuilder {
    settings: DetectionSection,
}

impl ObstacleMapBuilder {
    /// Create a builder with the given detection settings
    pub fn new(settings: DetectionSection) -> Self {
        Self { settings }
    }

    /// Create a builder with default settings
    pub fn with_defaults() -> Self {
        Self::new(DetectionSection::default())
    }

    /// Build an obstacle map from any raster image.
    ///
    /// Color inputs are reduced to intensity first. Fails with
    /// [`Error::EmptyImage`] on a zero-sized input.
    pub fn build(&self, image: &DynamicImage) -> Result<OccupancyGrid> {
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }
        self.build_gray(&image.to_luma8())
    }

    /// Build an obstacle map from a grayscale image.
    pub fn build_gray(&self, gray: &GrayImage) -> Result<OccupancyGrid> {
        if gray.width() == 0 || gray.height() == 0 {
            return Err(Error::EmptyImage {
                width: gray.width(),
                height: gray.height(),
            });
        }

        let mut map = binarize(gray);
        let ink = map.obstacle_count();

        if self.settings.dilation_size > 1 {
            map = dilate(&map, self.settings.dilation_size);
        }
        if self.settings.remove_thin_strokes {
            map = open(&map, 3);
        }
        if self.settings.min_component_area > 0 {
            map = remove_small_regions(&map, self.settings.min_component_area);
        }
        if self.settings.safety_padding > 0 {
            map = dilate(&map, 2 * self.settings.safety_padding + 1);
        }

        debug!(
            "[ObstacleMap] {}x{}: {} ink px -> {} obstacle px (dilation={}, padding={})",
            map.width(),
            map.height(),
            ink,
            map.obstacle_count(),
            self.settings.dilation_size,
            self.settings.safety_padding,
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PixelCoord;
    use image::Luma;

    fn sketch() -> GrayImage {
        let mut img = GrayImage::from_pixel(64, 64, Luma([255]));
        // Zig-zag stroke, the hand-drawn resistor case.
        for i in 0..16 {
            img.put_pixel(20 + i, 30 + (i % 2), Luma([0]));
        }
        img
    }

    #[test]
    fn test_empty_image_fails_fast() {
        let builder = ObstacleMapBuilder::with_defaults();
        let img = DynamicImage::new_luma8(0, 0);
        assert!(matches!(
            builder.build(&img),
            Err(Error::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_zero_dilation_leaves_only_safety_padding() {
        let settings = DetectionSection {
            dilation_size: 0,
            safety_padding: 2,
            ..DetectionSection::default()
        };
        let built = ObstacleMapBuilder::new(settings).build_gray(&sketch()).unwrap();
        let expected = dilate(&binarize(&sketch()), 5);
        assert_eq!(built.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_dilation_merges_zigzag_into_blob() {
        let settings = DetectionSection {
            dilation_size: 5,
            safety_padding: 0,
            ..DetectionSection::default()
        };
        let map = ObstacleMapBuilder::new(settings).build_gray(&sketch()).unwrap();
        // The gap rows between the zig and the zag are filled in.
        for x in 22..34 {
            assert!(map.is_obstacle(PixelCoord::new(x, 30)));
            assert!(map.is_obstacle(PixelCoord::new(x, 31)));
        }
    }

    #[test]
    fn test_safety_padding_expands_clearance() {
        let tight = ObstacleMapBuilder::new(DetectionSection {
            dilation_size: 3,
            safety_padding: 0,
            ..DetectionSection::default()
        })
        .build_gray(&sketch())
        .unwrap();
        let padded = ObstacleMapBuilder::new(DetectionSection {
            dilation_size: 3,
            safety_padding: 4,
            ..DetectionSection::default()
        })
        .build_gray(&sketch())
        .unwrap();
        assert!(padded.obstacle_count() > tight.obstacle_count());
        // Every tight obstacle survives padding.
        for y in 0..64 {
            for x in 0..64 {
                let p = PixelCoord::new(x, y);
                if tight.is_obstacle(p) {
                    assert!(padded.is_obstacle(p));
                }
            }
        }
    }

    #[test]
    fn test_component_filter_drops_speckle() {
        let mut img = GrayImage::from_pixel(64, 64, Luma([255]));
        img.put_pixel(50, 50, Luma([0])); // lone dot
        for x in 10..26 {
            img.put_pixel(x, 10, Luma([0]));
        }
        let map = ObstacleMapBuilder::new(DetectionSection {
            dilation_size: 0,
            safety_padding: 0,
            min_component_area: 4,
            ..DetectionSection::default()
        })
        .build_gray(&img)
        .unwrap();
        assert!(map.is_free(PixelCoord::new(50, 50)));
        assert!(map.is_obstacle(PixelCoord::new(12, 10)));
    }

    #[test]
    fn test_color_input_is_reduced() {
        let mut img = image::RgbImage::from_pixel(32, 32, image::Rgb([255, 255, 255]));
        for x in 8..24 {
            img.put_pixel(x, 16, image::Rgb([0, 0, 0]));
        }
        let map = ObstacleMapBuilder::new(DetectionSection {
            dilation_size: 0,
            safety_padding: 0,
            ..DetectionSection::default()
        })
        .build(&DynamicImage::ImageRgb8(img))
        .unwrap();
        assert!(map.is_obstacle(PixelCoord::new(16, 16)));
    }
}
