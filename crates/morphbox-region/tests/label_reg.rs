//! Labeling regression test
//!
//! Tests:
//!   (1) Documented 2x5 example under the 4-connected cross
//!   (2) Random images against a breadth-first reference labeling,
//!       which checks the partition: background 0, foreground positive,
//!       one label per connected component, labels 1..=k without gaps
//!   (3) Component statistics and area opening agree with the labels
//!
//! Run with:
//! ```
//! cargo test -p morphbox-region --test label_reg
//! ```

use morphbox_core::{Image, PixelType};
use morphbox_morph::Sel;
use morphbox_region::{
    ConnectivityType, area_open, component_stats, find_connected_components, label,
};
use morphbox_test::{RegParams, binary_from_rows, image_from_rows};
use std::collections::VecDeque;

fn random_binary(w: u32, h: u32, density: u32) -> Image {
    let data = (0..w * h)
        .map(|_| i32::from(rand::random::<u32>() % 100 < density))
        .collect();
    Image::from_vec(w, h, PixelType::Binary, data).unwrap()
}

/// Breadth-first labeling, numbering components by their first pixel
fn reference_label(f: &Image, bc: &Sel) -> Image {
    let (w, h) = f.dims();
    let mut out = vec![0i32; f.pixel_count()];
    let mut next = 0;
    for start in 0..f.pixel_count() {
        if f.data()[start] == 0 || out[start] != 0 {
            continue;
        }
        next += 1;
        out[start] = next;
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            let (x, y) = f.coords_of(p);
            for (dy, dx) in bc.neighbors() {
                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let q = f.index_of(nx as u32, ny as u32);
                if f.data()[q] != 0 && out[q] == 0 {
                    out[q] = next;
                    queue.push_back(q);
                }
            }
        }
    }
    Image::from_vec(w, h, PixelType::Uint16, out).unwrap()
}

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // --- Test 1: documented example ---
    eprintln!("  Testing documented example");
    let f = binary_from_rows(&["0 1 0 1 1", "1 0 0 1 0"]).unwrap();
    let expected = image_from_rows(PixelType::Uint16, &["0 1 0 2 2", "3 0 0 2 0"]).unwrap();
    rp.compare_images(&expected, &label(&f, &Sel::create_cross(1)).unwrap());

    // --- Test 2: random partitions ---
    eprintln!("  Testing random images against reference labeling");
    for connectivity in [ConnectivityType::FourWay, ConnectivityType::EightWay] {
        let bc = connectivity.sel();
        for density in [20, 45, 70] {
            let f = random_binary(14, 11, density);
            let labels = label(&f, &bc).unwrap();
            rp.compare_images(&reference_label(&f, &bc), &labels);

            let k = labels.min_max().1;
            let mut seen = vec![false; k as usize + 1];
            for &l in labels.data() {
                seen[l as usize] = true;
            }
            rp.check(seen[1..].iter().all(|&s| s), "labels are contiguous");
            rp.compare_images(&f, &labels.to_binary());
        }
    }

    // --- Test 3: statistics and area opening ---
    eprintln!("  Testing component statistics");
    let f = random_binary(16, 16, 50);
    let bc = ConnectivityType::EightWay.sel();
    let comps = find_connected_components(&f, ConnectivityType::EightWay).unwrap();
    let labels = label(&f, &bc).unwrap();
    rp.compare_values(
        labels.min_max().1 as f64,
        comps.len() as f64,
        0.0,
    );
    let total: u32 = comps.iter().map(|c| c.pixel_count).sum();
    rp.compare_values(f.count_nonzero() as f64, total as f64, 0.0);
    rp.check(comps == component_stats(&labels), "stats match");
    for c in &comps {
        rp.check(
            c.bounds.w * c.bounds.h >= c.pixel_count,
            "bounds enclose the component",
        );
    }

    let min_area = 4;
    let kept = area_open(&f, min_area, &bc).unwrap();
    let expected_kept: u32 = comps
        .iter()
        .filter(|c| c.pixel_count >= min_area)
        .map(|c| c.pixel_count)
        .sum();
    rp.compare_values(expected_kept as f64, kept.count_nonzero() as f64, 0.0);
    let again = area_open(&kept, min_area, &bc).unwrap();
    rp.compare_images(&kept, &again);

    assert!(rp.cleanup(), "label regression test failed");
}
