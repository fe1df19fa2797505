//! Watershed segmentation regression test
//!
//! Tests:
//!   (1) Two basins separated by a ridge, LINES and REGIONS output
//!   (2) Single basin on a monotone relief produces no lines
//!   (3) Synthetic sin/cos relief flooded from its regional minima:
//!       every pixel is labeled and every line pixel borders another
//!       basin
//!
//! Run with:
//! ```
//! cargo test -p morphbox-region --test watershed_reg
//! ```

use morphbox_core::{Image, PixelType};
use morphbox_morph::Sel;
use morphbox_region::{
    ConnectivityType, WatershedOptions, WatershedOutput, count_components, cwatershed,
    regional_minima, watershed,
};
use morphbox_test::{RegParams, image_from_rows};

fn ridge_relief() -> Image {
    image_from_rows(
        PixelType::Uint8,
        &[
            "10 10 10 10 10 10 10",
            "10  9  6 18  6  5 10",
            "10  9  6 18  6  8 10",
            "10  9  9 15  9  9 10",
            "10  9  9 15 12 10 10",
            "10 10 10 10 10 10 10",
        ],
    )
    .unwrap()
}

fn create_synthetic_image(size: u32) -> Image {
    let mut data = Vec::with_capacity((size * size) as usize);
    for i in 0..size {
        for j in 0..size {
            let (fi, fj) = (i as f32, j as f32);
            let v = 128.0
                + 26.3 * (0.438 * fi).sin()
                + 33.4 * (0.712 * fi).cos()
                + 18.6 * (0.561 * fj).sin()
                + 23.6 * (0.327 * fj).cos();
            data.push(v as i32);
        }
    }
    Image::from_vec(size, size, PixelType::Uint8, data).unwrap()
}

#[test]
fn watershed_reg() {
    let mut rp = RegParams::new("watershed");
    let cross = Sel::create_cross(1);

    // --- Test 1: two basins ---
    eprintln!("  Testing two basins split by a ridge");
    let relief = ridge_relief();
    let markers = relief.threshold(6).subtract_saturate(&relief.threshold(7)).unwrap();
    rp.compare_values(2.0, count_components(&markers, &cross).unwrap() as f64, 0.0);

    let lines = cwatershed(&relief, &markers, &cross, WatershedOutput::Lines).unwrap();
    // Rows 0-4 split on the ridge column. The bottom row is an equal-level
    // tie between the basins; FIFO order puts its line pixel one column
    // right of the ridge.
    let expected = image_from_rows(
        PixelType::Binary,
        &[
            "0 0 0 1 0 0 0",
            "0 0 0 1 0 0 0",
            "0 0 0 1 0 0 0",
            "0 0 0 1 0 0 0",
            "0 0 0 1 0 0 0",
            "0 0 0 0 1 0 0",
        ],
    )
    .unwrap();
    rp.compare_images(&expected, &lines);

    let regions = cwatershed(&relief, &markers, &cross, WatershedOutput::Regions).unwrap();
    let row = "1 1 1 1 2 2 2";
    let expected = image_from_rows(PixelType::Uint16, &[row, row, row, row, row, row]).unwrap();
    rp.compare_images(&expected, &regions);

    // --- Test 2: single basin ---
    eprintln!("  Testing a single basin on a monotone relief");
    let ramp = Image::from_vec(6, 5, PixelType::Uint8, (0..30).map(|i| (i % 6) + i / 6).collect())
        .unwrap();
    let mut seed = ramp.create_template().to_binary().into_mut();
    seed.set_pixel(0, 0, 1).unwrap();
    let seed: Image = seed.into();
    for bc in [Sel::create_cross(1), Sel::create_box(1)] {
        let lines = cwatershed(&ramp, &seed, &bc, WatershedOutput::Lines).unwrap();
        rp.check(lines.is_all(0), "no lines in a single basin");
        let regions = cwatershed(&ramp, &seed, &bc, WatershedOutput::Regions).unwrap();
        rp.check(regions.is_all(1), "single basin covers the image");
    }

    // --- Test 3: synthetic relief ---
    eprintln!("  Testing synthetic relief from regional minima");
    let relief = create_synthetic_image(40);
    for connectivity in [ConnectivityType::FourWay, ConnectivityType::EightWay] {
        let bc = connectivity.sel();
        let minima = regional_minima(&relief, &bc).unwrap();
        let basins = count_components(&minima, &bc).unwrap();
        rp.check(basins > 1, "several regional minima");

        let opts = WatershedOptions::new().with_connectivity(connectivity);
        let regions = watershed(&relief, &opts.clone().with_output(WatershedOutput::Regions)).unwrap();
        let (lo, hi) = regions.min_max();
        rp.check(lo >= 1, "every pixel is labeled");
        rp.compare_values(basins as f64, hi as f64, 0.0);

        let lines = watershed(&relief, &opts).unwrap();
        rp.check(lines.is_binary(), "lines are binary");
        rp.check(lines.count_nonzero() > 0, "basins are separated");
        let mut bordered = true;
        for (i, &v) in lines.data().iter().enumerate() {
            if v == 0 {
                continue;
            }
            let (x, y) = lines.coords_of(i);
            let own = regions.get_pixel(x, y).unwrap();
            bordered &= bc.neighbors().any(|(dy, dx)| {
                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                nx >= 0
                    && ny >= 0
                    && regions
                        .get_pixel(nx as u32, ny as u32)
                        .is_some_and(|l| l != own)
            });
        }
        rp.check(bordered, "every line pixel borders another basin");
    }

    // --- Test 4: flat images at the type maximum ---
    eprintln!("  Testing flat images at the type maximum");
    let cross = Sel::create_cross(1);
    for pt in [
        PixelType::Binary,
        PixelType::Uint8,
        PixelType::Uint16,
        PixelType::Int32,
    ] {
        let flat = Image::new_filled(5, 4, pt, pt.max_value()).unwrap();
        let minima = regional_minima(&flat, &cross).unwrap();
        rp.check(minima.is_all(1), "flat image is one regional minimum");
        let opts = WatershedOptions::new().with_output(WatershedOutput::Regions);
        let regions = watershed(&flat, &opts).unwrap();
        rp.check(regions.is_all(1), "flat image is one basin");
        let lines = watershed(&flat, &WatershedOptions::new()).unwrap();
        rp.check(lines.is_all(0), "flat image has no lines");
    }

    assert!(rp.cleanup(), "watershed regression test failed");
}
