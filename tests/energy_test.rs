#[macro_use]
extern crate assert_float_eq;

use energy_balance_rs::energy::{bmr, calories_burned, compute_energy, terrain_multiplier};
use energy_balance_rs::models::{BodyProfile, Gender, ProfileInput, WalkActivity};

fn make_profile(age: u32, height: f64, weight: f64, gender: Gender) -> BodyProfile {
    BodyProfile::new(age, height, weight, gender).unwrap()
}

#[test]
fn test_bmr_reference_male() {
    // 180 lb -> 81.818 kg, 70 in -> 177.8 cm
    let profile = make_profile(30, 70.0, 180.0, Gender::Male);
    assert_float_absolute_eq!(bmr(&profile), 1828.88, 0.01);
}

#[test]
fn test_bmr_reference_female() {
    let profile = make_profile(30, 70.0, 180.0, Gender::Female);
    assert_float_absolute_eq!(bmr(&profile), 1984.88, 0.01);
}

#[test]
fn test_calories_burned_reference() {
    let profile = make_profile(25, 65.0, 180.0, Gender::Female);
    let walk = WalkActivity::new(5.0, 3).unwrap();
    assert_float_absolute_eq!(calories_burned(&profile, &walk), 585.0, 1e-9);
}

#[test]
fn test_calories_burned_monotonic_in_distance() {
    let profile = make_profile(40, 68.0, 150.0, Gender::Male);
    for terrain in [-1, 0, 1, 4, 5, 7, 8, 10, 12] {
        let mut previous = 0.0;
        for step in 0..20 {
            let walk = WalkActivity::new(step as f64 * 0.5, terrain).unwrap();
            let burned = calories_burned(&profile, &walk);
            assert!(burned >= previous, "terrain {} step {}", terrain, step);
            previous = burned;
        }
    }
}

#[test]
fn test_terrain_bands_inclusive() {
    assert_eq!(terrain_multiplier(4), 1.0);
    assert_eq!(terrain_multiplier(5), 1.4);
    assert_eq!(terrain_multiplier(7), 1.4);
    assert_eq!(terrain_multiplier(8), 1.6);
}

#[test]
fn test_terrain_scales_result() {
    let profile = make_profile(30, 70.0, 200.0, Gender::Male);
    let flat = calories_burned(&profile, &WalkActivity::new(3.0, 2).unwrap());
    let hilly = calories_burned(&profile, &WalkActivity::new(3.0, 6).unwrap());
    let steep = calories_burned(&profile, &WalkActivity::new(3.0, 9).unwrap());

    assert_float_absolute_eq!(flat, 450.0, 1e-9);
    assert_float_absolute_eq!(hilly, 630.0, 1e-9);
    assert_float_absolute_eq!(steep, 720.0, 1e-9);
}

#[test]
fn test_compute_energy_from_raw_input() {
    let input = ProfileInput {
        age: "30".to_string(),
        height: "70".to_string(),
        weight: "180".to_string(),
        gender: "m".to_string(),
        distance: "2".to_string(),
        terrain: "5".to_string(),
    };
    let (profile, walk) = input.parse().unwrap();
    let energy = compute_energy(&profile, &walk);

    // 135 kcal/mile * 2 * 1.4
    assert_float_absolute_eq!(energy.calories_burned, 378.0, 1e-9);
    assert_float_absolute_eq!(energy.bmr, 1828.88, 0.01);
}
