//! Watershed-style coin segmentation pipeline.
//!
//! Every non-trivial operation is delegated to `imageproc`; this module only
//! sequences the classic recipe: grayscale conversion, inverse Otsu
//! threshold, morphological opening, distance transform and contour
//! extraction.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::contours::{find_contours, Contour};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::distance_transform::{euclidean_squared_distance_transform, Norm};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::morphology::{dilate, open};
use imageproc::point::Point;

/// Fraction of the peak distance-transform value separating sure foreground
/// from the unknown region.
const SURE_FG_RATIO: f64 = 0.7;

/// Color of the contour overlay drawn on the output image.
const CONTOUR_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Result of one segmentation pass.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Input image with the detected coin contours drawn in green.
    pub image: RgbImage,
    /// Number of detected coin regions.
    pub count: usize,
    /// Area of each detected region, in pixels.
    pub areas: Vec<f64>,
}

/// Segment coins in `input` and return the annotated image together with the
/// region count and per-region areas.
pub fn segment_coins(input: &RgbImage) -> Segmentation {
    let gray: GrayImage = image::imageops::grayscale(input);

    // Inverse binary Otsu threshold: coins become foreground.
    let level = otsu_level(&gray);
    let thresh = threshold(&gray, level, ThresholdType::BinaryInverted);

    // Noise removal with a 3x3 morphological opening.
    let opening = open(&thresh, Norm::LInf, 1);

    // Sure background via dilation. The external-contour pass below only
    // consumes the foreground, but the full watershed recipe computes it.
    let _sure_bg = dilate(&opening, Norm::LInf, 1);

    // Sure foreground: pixels far enough from the background, measured with
    // an L2 distance transform of the opened mask. `imageproc` measures the
    // distance to the nearest foreground pixel, so the mask is inverted to
    // get per-coin-pixel distance to the background.
    let mut background = opening.clone();
    image::imageops::invert(&mut background);
    let distances = euclidean_squared_distance_transform(&background);
    let max_distance = distances
        .pixels()
        .map(|p| p[0].sqrt())
        .fold(0.0, f64::max);
    let cutoff = SURE_FG_RATIO * max_distance;
    let sure_fg = GrayImage::from_fn(opening.width(), opening.height(), |x, y| {
        if distances.get_pixel(x, y)[0].sqrt() > cutoff {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });

    // External contours of the sure-foreground regions.
    let contours: Vec<Contour<i32>> = find_contours(&sure_fg);

    let mut output = input.clone();
    let mut areas = Vec::new();
    let mut count = 0;
    for contour in contours.iter().filter(|c| c.parent.is_none()) {
        areas.push(contour_area(&contour.points));
        draw_contour(&mut output, &contour.points);
        count += 1;
    }

    Segmentation {
        image: output,
        count,
        areas,
    }
}

/// Area enclosed by a closed contour, via the shoelace formula.
fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        twice_area += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    twice_area.abs() as f64 / 2.0
}

fn draw_contour(canvas: &mut RgbImage, points: &[Point<i32>]) {
    if points.is_empty() {
        return;
    }
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        draw_line_segment_mut(
            canvas,
            (p.x as f32, p.y as f32),
            (q.x as f32, q.y as f32),
            CONTOUR_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::drawing::draw_filled_circle_mut;

    /// Light background with dark filled discs, so the inverse Otsu
    /// threshold turns the discs into foreground.
    fn synthetic_coins(centers: &[(i32, i32)], radius: i32) -> RgbImage {
        let mut img = RgbImage::from_pixel(96, 96, Rgb([210, 210, 210]));
        for &center in centers {
            draw_filled_circle_mut(&mut img, center, radius, Rgb([35, 35, 35]));
        }
        img
    }

    #[test]
    fn detects_each_disc_as_one_region() {
        let img = synthetic_coins(&[(24, 24), (72, 72)], 12);
        let result = segment_coins(&img);
        assert_eq!(result.count, 2);
        assert_eq!(result.areas.len(), 2);
        assert!(result.areas.iter().all(|&a| a > 0.0));
    }

    #[test]
    fn output_image_keeps_input_dimensions() {
        let img = synthetic_coins(&[(48, 48)], 16);
        let result = segment_coins(&img);
        assert_eq!(result.image.dimensions(), img.dimensions());
    }

    #[test]
    fn shoelace_area_of_a_unit_square() {
        let square = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(0, 1),
        ];
        assert_eq!(contour_area(&square), 1.0);
    }

    #[test]
    fn degenerate_contours_have_zero_area() {
        assert_eq!(contour_area(&[]), 0.0);
        assert_eq!(contour_area(&[Point::new(3, 3)]), 0.0);
        assert_eq!(contour_area(&[Point::new(0, 0), Point::new(4, 4)]), 0.0);
    }
}
