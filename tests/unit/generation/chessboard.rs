//! Tests for chessboard construction, the green ramp and parameter validation

#[cfg(test)]
mod tests {
    use chesswarp::generation::chessboard::{ChessboardConfig, build_chessboard, green_shades};
    use chesswarp::AnalysisError;

    const WHITE: [u8; 3] = [255, 255, 255];

    // Tests the default configuration matches the fixed 512px 6x6 board
    // Verified by changing the default grid dimensions
    #[test]
    fn test_default_config() {
        let config = ChessboardConfig::default();
        assert_eq!(config.size, 512);
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 6);
        assert_eq!(config.cell_size(), 85);
    }

    // Tests the green ramp runs from 30 to 220 in even steps
    // Verified by dividing by the row count instead of rows - 1
    #[test]
    fn test_green_shades_ramp() {
        assert_eq!(green_shades(6), vec![30, 68, 106, 144, 182, 220]);
        assert_eq!(green_shades(2), vec![30, 220]);
        assert_eq!(green_shades(1), vec![30]);
        assert!(green_shades(0).is_empty());
    }

    // Tests shades off the default grid round to the nearest level
    // Verified by truncating instead of rounding
    #[test]
    fn test_green_shades_round_to_nearest() {
        assert_eq!(green_shades(4), vec![30, 93, 157, 220]);
        assert_eq!(green_shades(7)[1], 62);
    }

    // Tests a wide grid at the dimension limit paints only cells inside the image
    // Verified by iterating every configured column
    #[test]
    fn test_wide_grid_at_limit() {
        let config = ChessboardConfig {
            size: 12,
            rows: 3,
            cols: 10_000,
        };
        let image = build_chessboard(&config).unwrap();

        assert_eq!(image.dim(), (12, 12));
        assert_eq!(image.pixel(0, 4), Some([0, 30, 0]));
        assert_eq!(image.pixel(0, 8), Some(WHITE));
        assert_eq!(image.pixel(4, 0), Some([0, 125, 0]));
    }

    // Tests cell colors of the default board
    // Verified by painting cells where the index sum is even
    #[test]
    fn test_default_board_cells() {
        let image = build_chessboard(&ChessboardConfig::default()).unwrap();

        assert_eq!(image.dim(), (512, 512));
        assert_eq!(image.pixel(0, 0), Some(WHITE));
        assert_eq!(image.pixel(0, 85), Some([0, 30, 0]));
        assert_eq!(image.pixel(84, 169), Some([0, 30, 0]));
        assert_eq!(image.pixel(85, 0), Some([0, 68, 0]));
        assert_eq!(image.pixel(509, 0), Some([0, 220, 0]));
        assert_eq!(image.pixel(509, 509), Some(WHITE));
    }

    // Tests the remainder strip left by integer cell sizes stays white
    // Verified by rounding the cell size up
    #[test]
    fn test_remainder_strip_is_background() {
        let image = build_chessboard(&ChessboardConfig::default()).unwrap();

        for i in 0..512 {
            assert_eq!(image.pixel(510, i), Some(WHITE));
            assert_eq!(image.pixel(511, i), Some(WHITE));
            assert_eq!(image.pixel(i, 510), Some(WHITE));
            assert_eq!(image.pixel(i, 511), Some(WHITE));
        }
    }

    // Tests the pattern invariant across several evenly divisible configurations
    // Verified by reversing the shade order
    #[test]
    fn test_pattern_and_monotone_shades() {
        let configs = [(60, 3, 3), (64, 4, 4), (120, 6, 4), (40, 2, 5), (30, 1, 1)];

        for (size, rows, cols) in configs {
            let config = ChessboardConfig { size, rows, cols };
            let image = build_chessboard(&config).unwrap();
            let cell = config.cell_size();
            let mut previous_green = 0u8;

            for i in 0..rows {
                for j in (0..cols).filter(|j| j * cell < size) {
                    let color = image.pixel(i * cell, j * cell).unwrap();
                    if (i + j) % 2 == 0 {
                        assert_eq!(color, WHITE, "cell ({i}, {j}) of {config:?}");
                    } else {
                        assert_eq!(color[0], 0);
                        assert_eq!(color[2], 0);
                        assert!(color[1] >= previous_green);
                        previous_green = color[1];
                    }
                }
            }
        }
    }

    // Tests extra columns past the image edge are clipped
    // Verified by sizing cells by the column count
    #[test]
    fn test_columns_beyond_edge_are_clipped() {
        let config = ChessboardConfig {
            size: 20,
            rows: 2,
            cols: 6,
        };
        let image = build_chessboard(&config).unwrap();

        assert_eq!(image.dim(), (20, 20));
        assert_eq!(image.pixel(0, 10), Some([0, 30, 0]));
        assert_eq!(image.pixel(10, 0), Some([0, 220, 0]));
        assert_eq!(image.pixel(10, 19), Some(WHITE));
    }

    // Tests cells collapse to nothing when rows exceed the size
    // Verified by clamping the cell size to one pixel
    #[test]
    fn test_more_rows_than_pixels_is_blank() {
        let config = ChessboardConfig {
            size: 4,
            rows: 8,
            cols: 8,
        };
        let image = build_chessboard(&config).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.pixel(y, x), Some(WHITE));
            }
        }
    }

    // Tests zero and oversized dimensions are rejected
    // Verified by removing each validation branch in turn
    #[test]
    fn test_invalid_configs_rejected() {
        let cases = [
            (ChessboardConfig { size: 0, rows: 6, cols: 6 }, "size"),
            (ChessboardConfig { size: 20_000, rows: 6, cols: 6 }, "size"),
            (ChessboardConfig { size: 512, rows: 0, cols: 6 }, "rows"),
            (ChessboardConfig { size: 512, rows: 6, cols: 0 }, "cols"),
            (ChessboardConfig { size: 512, rows: usize::MAX, cols: 6 }, "rows"),
            (ChessboardConfig { size: 512, rows: 6, cols: usize::MAX }, "cols"),
            (ChessboardConfig { size: 512, rows: 10_001, cols: 6 }, "rows"),
        ];

        for (config, expected) in cases {
            match build_chessboard(&config) {
                Err(AnalysisError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected InvalidParameter for {config:?}, got {other:?}"),
            }
        }
    }
}
