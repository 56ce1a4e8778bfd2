use chromatone_core::{
    Color, ColorAdapter, ColorSpace, ColorTarget, DerivationEngine,
    DerivationState, PaletteAdapter,
};

fn base() -> Color {
    "#336699".parse().expect("valid hex")
}

fn clear_steps(state: &mut DerivationState) {
    while !state.palette().is_empty() {
        state.palette_mut().delete(0).expect("in range");
    }
}

#[test]
fn tonal_palette_darkens_as_steps_grow() {
    let adapter = PaletteAdapter::new();
    let engine = DerivationEngine::new(&adapter);
    let mut state = DerivationState::new(base());
    clear_steps(&mut state);
    for step in [800, 500, 50] {
        state.palette_mut().add(step).expect("valid step");
    }

    let palette = engine.tonal_palette(&state);
    let values: Vec<_> = palette.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![800, 500, 50]);

    let tones: Vec<f64> = palette
        .iter()
        .map(|s| adapter.perceptual_tone(&s.color))
        .collect();
    assert!(tones[0] < tones[1], "800 should be darker than 500: {tones:?}");
    assert!(tones[1] < tones[2], "500 should be darker than 50: {tones:?}");
    assert!((tones[2] - 95.0).abs() < 1.5, "step 50 near tone 95: {tones:?}");
}

#[test]
fn tones_mix_by_ratio_times_factor() {
    let adapter = PaletteAdapter::new();
    let engine = DerivationEngine::new(&adapter);
    let mut state = DerivationState::new(base());
    state.set_gray_ratio(0.5).expect("finite");
    for index in 0..state.grays().len() {
        state
            .grays_mut()
            .set_ratio_factor_value(index, 0.5)
            .expect("in range");
    }

    let adjusted = engine.luminance_adjusted(&state);
    let tones = engine.tones(&state);
    for (index, gray) in state.grays().iter().enumerate() {
        let expected =
            adapter.mix(&adjusted[index], &gray.color, 0.25, ColorSpace::Hsl);
        assert_eq!(tones[index], expected, "tone {index}");
    }
}

#[test]
fn luminance_adjusted_matches_each_gray() {
    let adapter = PaletteAdapter::new();
    let engine = DerivationEngine::new(&adapter);
    let state = DerivationState::new(base());

    let adjusted = engine.luminance_adjusted(&state);
    for (color, gray) in adjusted.iter().zip(state.grays().iter()) {
        let want = adapter.luminance(&gray.color);
        let got = adapter.luminance(color);
        assert!((want - got).abs() < 0.01, "want {want}, got {got}");
    }
    assert_eq!(state.base_color(), base());
}

#[test]
fn shades_and_tints_run_from_base_to_black_and_white() {
    let adapter = PaletteAdapter::new();
    let engine = DerivationEngine::new(&adapter);
    let mut state = DerivationState::new(base());
    state.set_color_space(ColorTarget::Shades, ColorSpace::Lab);
    state.set_color_space(ColorTarget::Tints, ColorSpace::Lrgb);
    state.shades_mut().add(0).expect("valid");
    state.shades_mut().add(100).expect("valid");
    state.tints_mut().add(0).expect("valid");
    state.tints_mut().add(100).expect("valid");

    let shades = engine.shades(&state);
    let tints = engine.tints(&state);
    let n = shades.len();
    assert_eq!(shades[n - 2].color, base());
    assert_eq!(shades[n - 1].color, Color::BLACK);
    assert_eq!(tints[n - 2].color, base());
    assert_eq!(tints[n - 1].color, Color::WHITE);

    // default shades step 10..90 darken monotonically
    let lum: Vec<f64> = shades[..5]
        .iter()
        .map(|s| adapter.luminance(&s.color))
        .collect();
    assert!(lum.windows(2).all(|w| w[0] > w[1]), "{lum:?}");
}

#[test]
fn ratio_text_follows_live_typing_rules() {
    let mut state = DerivationState::new(base());
    let before = state.grays().entries()[1].ratio_factor;

    assert_eq!(state.set_gray_ratio_factor(1, "abc"), Ok(false));
    assert_eq!(state.grays().entries()[1].ratio_factor, before);

    assert_eq!(state.set_gray_ratio_factor(1, "1.5"), Ok(true));
    assert_eq!(state.grays().entries()[1].ratio_factor, 1.0);

    assert_eq!(state.set_gray_ratio_factor(1, "-0.2"), Ok(true));
    assert_eq!(state.grays().entries()[1].ratio_factor, 0.0);
}

#[test]
fn deleting_a_gray_keeps_the_rest_in_order() {
    let adapter = PaletteAdapter::new();
    let engine = DerivationEngine::new(&adapter);
    let mut state = DerivationState::new(base());
    let colors: Vec<_> = state.grays().iter().map(|g| g.color).collect();

    state.grays_mut().delete(2).expect("in range");

    let left: Vec<_> = state.grays().iter().map(|g| g.color).collect();
    assert_eq!(left, [&colors[..2], &colors[3..]].concat());
    assert_eq!(engine.tones(&state).len(), 4);
}
