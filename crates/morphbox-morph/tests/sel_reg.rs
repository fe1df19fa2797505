//! Structuring element regression test
//!
//! Tests:
//!   (1) Disk shapes per metric (sizes and extents)
//!   (2) Cross and box radius growth through Minkowski sums
//!   (3) Rotation by multiples of 45 degrees
//!   (4) Line segments at the principal angles
//!   (5) Matrix construction and rendering
//!
//! Run with:
//! ```
//! cargo test -p morphbox-morph --test sel_reg
//! ```

use morphbox_morph::{DiskMetric, MorphError, RotationDirection, Sel};
use morphbox_test::RegParams;

#[test]
fn sel_reg() {
    let mut rp = RegParams::new("sel");

    // --- Test 1: disks ---
    eprintln!("  Testing disks");
    for r in 0..6u32 {
        let n = 2 * r as usize + 1;
        let city = Sel::create_disk(r, DiskMetric::CityBlock);
        let chess = Sel::create_disk(r, DiskMetric::Chessboard);
        let eucl = Sel::create_disk(r, DiskMetric::Euclidean);
        let oct = Sel::create_disk(r, DiskMetric::Octagon);

        rp.compare_values((n * n) as f64, chess.len() as f64, 0.0);
        rp.compare_values((2 * r * r + 2 * r + 1) as f64, city.len() as f64, 0.0);
        rp.check(city.len() <= eucl.len(), "city-block inside euclidean");
        rp.check(eucl.len() <= chess.len(), "euclidean inside chessboard");
        if r > 0 {
            rp.check(city.len() <= oct.len(), "city-block inside octagon");
            rp.check(oct.len() <= chess.len(), "octagon inside chessboard");
        }
        for s in [&city, &chess, &eucl] {
            rp.check(s.extent() == (r, r), "disk extent equals radius");
            rp.check(*s == s.reflect(), "disk is symmetric");
        }
    }

    // --- Test 2: radius growth ---
    eprintln!("  Testing radius growth");
    rp.check(
        Sel::create_box(3) == Sel::create_box(1).sum_n(3),
        "box(3) is box(1) summed three times",
    );
    rp.check(
        Sel::create_cross(2) == Sel::create_cross(1).minkowski_sum(&Sel::create_cross(1)),
        "cross(2) is cross(1) + cross(1)",
    );
    rp.check(
        Sel::create_box(2).sum_n(0) == Sel::origin(),
        "zero-fold sum is the origin",
    );

    // --- Test 3: rotation ---
    eprintln!("  Testing rotation");
    let cross = Sel::create_cross(1);
    let x_shape = Sel::flat([(-1, -1), (-1, 1), (0, 0), (1, -1), (1, 1)]);
    rp.check(
        cross.rotate(45.0, RotationDirection::Clockwise) == x_shape,
        "rotated cross is an X",
    );
    rp.check(
        Sel::create_box(1).rotate(45.0, RotationDirection::AntiClockwise) == Sel::create_box(1),
        "rotated 3x3 box is a 3x3 box",
    );
    let arm = Sel::flat([(0, 0), (0, 1), (0, 2)]);
    let mut turned = arm.clone();
    for _ in 0..4 {
        turned = turned.rotate(90.0, RotationDirection::Clockwise);
    }
    rp.check(turned == arm, "four quarter turns are the identity");
    rp.check(
        arm.rotate(90.0, RotationDirection::Clockwise)
            == arm.rotate(270.0, RotationDirection::AntiClockwise),
        "clockwise 90 equals anti-clockwise 270",
    );

    // --- Test 4: lines ---
    eprintln!("  Testing lines");
    for (angle, last) in [(0.0, (0, 4)), (90.0, (4, 0)), (-90.0, (-4, 0))] {
        let line = Sel::create_line(5, angle);
        rp.compare_values(5.0, line.len() as f64, 0.0);
        rp.check(line.contains(0, 0), "line starts at the origin");
        rp.check(line.contains(last.0, last.1), "line reaches its far end");
    }
    let diag = Sel::create_line(10, 45.0);
    rp.check(
        diag.offsets().iter().all(|&(dy, dx)| dy == dx && dy >= 0),
        "45 degree line runs down the diagonal",
    );

    // --- Test 5: matrices ---
    eprintln!("  Testing matrices");
    let ring = Sel::from_matrix(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
    rp.compare_values(8.0, ring.len() as f64, 0.0);
    rp.check(!ring.contains(0, 0), "ring excludes the origin");
    rp.check(ring.to_string() == "xxx\nxox\nxxx\n", "ring renders");
    rp.check(
        matches!(
            Sel::from_matrix(&[[1u8, 1, 1, 1]]),
            Err(MorphError::MalformedSe(_))
        ),
        "even width is rejected",
    );
    let sphere = Sel::create_sphere(3, DiskMetric::Euclidean, 0);
    let m = sphere.to_matrix();
    rp.check(m.len() == 7 && m[3][3] == Some(3), "sphere peak at the centre");

    assert!(rp.cleanup(), "sel regression test failed");
}
