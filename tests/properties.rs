// Algebraic properties of the transform catalog, checked over a spread of
// buffer shapes including degenerate ones. These hold exactly, not
// approximately, because every average is truncating integer arithmetic.

use picture_engine::{transforms, Color, PixelBuffer};

const SHAPES: &[(u32, u32)] = &[(1, 1), (2, 5), (4, 2), (3, 3), (7, 4), (16, 9)];

/// Deterministic pseudo-random fill; a tiny LCG keyed on the coordinates so
/// every shape gets a distinct, reproducible pixel pattern.
fn scrambled(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    let mut state = 0x2545F4914F6CDD1Du64 ^ (u64::from(width) << 32 | u64::from(height));
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let bytes = state.to_le_bytes();
            buffer
                .set(x, y, Color::new(bytes[0], bytes[1], bytes[2]))
                .unwrap();
        }
    }
    buffer
}

#[test]
fn four_quarter_rotations_are_the_identity_on_every_shape() {
    for &(w, h) in SHAPES {
        let img = scrambled(w, h);
        let rotated = transforms::rotate90(&transforms::rotate90(&transforms::rotate90(
            &transforms::rotate90(&img),
        )));
        assert_eq!(rotated, img, "shape {w}x{h}");
    }
}

#[test]
fn rotate180_equals_flip_horizontal_of_flip_vertical() {
    for &(w, h) in SHAPES {
        let img = scrambled(w, h);
        assert_eq!(
            transforms::rotate180(&img),
            transforms::flip_horizontal(&transforms::flip_vertical(&img)),
            "shape {w}x{h}"
        );
    }
}

#[test]
fn flips_and_invert_are_involutions() {
    for &(w, h) in SHAPES {
        let img = scrambled(w, h);
        assert_eq!(transforms::flip_horizontal(&transforms::flip_horizontal(&img)), img);
        assert_eq!(transforms::flip_vertical(&transforms::flip_vertical(&img)), img);
        assert_eq!(transforms::invert(&transforms::invert(&img)), img);
    }
}

#[test]
fn opposite_quarter_rotations_cancel() {
    for &(w, h) in SHAPES {
        let img = scrambled(w, h);
        assert_eq!(transforms::rotate270(&transforms::rotate90(&img)), img);
        assert_eq!(transforms::rotate90(&transforms::rotate270(&img)), img);
    }
}

#[test]
fn grayscale_output_is_achromatic() {
    for &(w, h) in SHAPES {
        let gray = transforms::grayscale(&scrambled(w, h));
        for x in 0..w {
            for y in 0..h {
                let pixel = gray.get(x, y).unwrap();
                assert_eq!(pixel.red, pixel.green);
                assert_eq!(pixel.green, pixel.blue);
            }
        }
    }
}

#[test]
fn blend_of_one_and_mosaic_of_one_are_identities() {
    for &(w, h) in SHAPES {
        let img = scrambled(w, h);
        assert_eq!(transforms::blend(std::slice::from_ref(&img)).unwrap(), img);
        // Tile size 1 divides every dimension.
        assert_eq!(
            transforms::mosaic(std::slice::from_ref(&img), 1).unwrap(),
            img
        );
    }
}

#[test]
fn blend_with_self_is_the_identity() {
    for &(w, h) in SHAPES {
        let img = scrambled(w, h);
        let blended = transforms::blend(&[img.clone(), img.clone()]).unwrap();
        assert_eq!(blended, img, "averaging a buffer with itself changes nothing");
    }
}

#[test]
fn blur_fixes_uniform_images_and_small_images() {
    for &(w, h) in SHAPES {
        let mut uniform = PixelBuffer::new(w, h);
        for x in 0..w {
            for y in 0..h {
                uniform.set(x, y, Color::new(101, 150, 23)).unwrap();
            }
        }
        assert_eq!(transforms::blur(&uniform), uniform);

        if w < 3 || h < 3 {
            // Every pixel is a border pixel; blur is the identity outright.
            let img = scrambled(w, h);
            assert_eq!(transforms::blur(&img), img);
        }
    }
}

#[test]
fn blur_preserves_the_border_ring() {
    let img = scrambled(7, 4);
    let blurred = transforms::blur(&img);
    for x in 0..7 {
        assert_eq!(blurred.get(x, 0).unwrap(), img.get(x, 0).unwrap());
        assert_eq!(blurred.get(x, 3).unwrap(), img.get(x, 3).unwrap());
    }
    for y in 0..4 {
        assert_eq!(blurred.get(0, y).unwrap(), img.get(0, y).unwrap());
        assert_eq!(blurred.get(6, y).unwrap(), img.get(6, y).unwrap());
    }
}

#[test]
fn equal_buffers_always_hash_equally() {
    for &(w, h) in SHAPES {
        let a = scrambled(w, h);
        let b = scrambled(w, h);
        assert_eq!(a, b, "the fill is deterministic per shape");
        assert_eq!(a.content_hash(), b.content_hash());

        let rotated = transforms::rotate180(&transforms::rotate180(&a));
        assert_eq!(rotated, a);
        assert_eq!(rotated.content_hash(), a.content_hash());
    }
}
