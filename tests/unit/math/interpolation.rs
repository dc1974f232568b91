//! Tests for bilinear interpolation and constant-border sampling

#[cfg(test)]
mod tests {
    use chesswarp::math::interpolation::{bilinear, lerp, sample_bilinear};
    use chesswarp::spatial::raster::Image;

    fn two_pixel_image() -> Image {
        let mut image = Image::filled(2, 2, [0, 0, 0]);
        image.put_pixel(0, 0, [0, 0, 0]);
        image.put_pixel(0, 1, [100, 200, 50]);
        image.put_pixel(1, 0, [100, 200, 50]);
        image.put_pixel(1, 1, [200, 200, 200]);
        image
    }

    // Tests linear and bilinear blends at the cell corners and center
    // Verified by swapping the blend fraction
    #[test]
    fn test_lerp_and_bilinear_blend() {
        assert!((lerp(2.0, 6.0, 0.25) - 3.0_f64).abs() < 1e-12);
        assert!((lerp(2.0_f32, 6.0, 1.0) - 6.0).abs() < 1e-6);

        let center = bilinear(0.0, 10.0, 20.0, 30.0, 0.5, 0.5);
        assert!((center - 15.0_f64).abs() < 1e-12);
        let corner = bilinear(0.0, 10.0, 20.0, 30.0, 1.0, 0.0);
        assert!((corner - 10.0_f64).abs() < 1e-12);
    }

    // Tests integer coordinates return the stored pixel exactly
    // Verified by offsetting the sample position by half a pixel
    #[test]
    fn test_integer_coordinates_are_exact() {
        let image = two_pixel_image();

        assert_eq!(sample_bilinear(&image, 1.0, 0.0, 0), [100, 200, 50]);
        assert_eq!(sample_bilinear(&image, 1.0, 1.0, 0), [200, 200, 200]);
    }

    // Tests fractional coordinates blend neighbours with rounding
    // Verified by returning the floor neighbour without blending
    #[test]
    fn test_fractional_coordinates_blend() {
        let image = two_pixel_image();

        // Halfway between (0, 0) and (0, 1)
        assert_eq!(sample_bilinear(&image, 0.5, 0.0, 0), [50, 100, 25]);
        // Center of all four pixels
        assert_eq!(sample_bilinear(&image, 0.5, 0.5, 0), [100, 150, 75]);
    }

    // Tests samples beyond the image read as the border value
    // Verified by clamping coordinates to the nearest edge pixel
    #[test]
    fn test_outside_reads_border() {
        let image = Image::filled(3, 3, [255, 255, 255]);

        assert_eq!(sample_bilinear(&image, -5.0, 1.0, 0), [0, 0, 0]);
        assert_eq!(sample_bilinear(&image, 1.0, 10.0, 7), [7, 7, 7]);
        assert_eq!(sample_bilinear(&image, f64::NAN, 1.0, 0), [0, 0, 0]);
    }

    // Tests samples straddling the edge fade into the border
    // Verified by treating out-of-bounds neighbours as zero weight
    #[test]
    fn test_edge_blends_with_border() {
        let image = Image::filled(3, 3, [200, 200, 200]);

        assert_eq!(sample_bilinear(&image, 2.5, 1.0, 0), [100, 100, 100]);
        assert_eq!(sample_bilinear(&image, -0.25, 0.0, 0), [150, 150, 150]);
    }
}
