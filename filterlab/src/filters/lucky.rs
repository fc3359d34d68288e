//! "Feeling lucky": a random, syntactically valid value for a random filter.

use rand::Rng;

use super::catalog::{self, FilterName};

const SHADOW_OFFSET_RANGE: (i32, i32) = (-10, 10);
const SHADOW_BLUR_MAX: u32 = 10;
const AMOUNT_MAX: u32 = 100;

pub fn pick_random() -> (FilterName, String) {
    pick_random_with(&mut rand::rng())
}

pub fn pick_random_with<R: Rng + ?Sized>(rng: &mut R) -> (FilterName, String) {
    let name = FilterName::ALL[rng.random_range(0..FilterName::ALL.len())];
    let value = random_value(rng, name);
    (name, value)
}

pub fn random_value<R: Rng + ?Sized>(rng: &mut R, name: FilterName) -> String {
    match name {
        FilterName::DropShadow => random_drop_shadow(rng),
        _ => format!(
            "{}{}",
            rng.random_range(0..=AMOUNT_MAX),
            catalog::unit(name)
        ),
    }
}

/// `<x>px <y>px <blur>px rgba(<r>, <g>, <b>, <a>)` where alpha is one of
/// 0.00, 0.01, ..., 1.00
pub fn random_drop_shadow<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (min, max) = SHADOW_OFFSET_RANGE;
    let offset_x = rng.random_range(min..=max);
    let offset_y = rng.random_range(min..=max);
    let blur = rng.random_range(0..=SHADOW_BLUR_MAX);
    let r: u8 = rng.random();
    let g: u8 = rng.random();
    let b: u8 = rng.random();
    let alpha_hundredths = rng.random_range(0..=100u32);

    format!(
        "{}px {}px {}px rgba({}, {}, {}, {}.{:02})",
        offset_x,
        offset_y,
        blur,
        r,
        g,
        b,
        alpha_hundredths / 100,
        alpha_hundredths % 100
    )
}
