//! Tick driver: owns the simulation, active parameters, and play state.
//!
//! One [`Animator::tick`] call per animation frame. While playing, a tick
//! samples the pointer once, advances the stepper, and re-renders; while
//! paused it returns the retained frame untouched, so a paused surface
//! keeps showing the last completed state. Reset and preset selection are
//! honored at tick granularity; no partial step is ever observable.

use morphogen_core::{
    preset::preset_params, ColorScheme, Field, Params, Pointer, Recipe, SeedMode, SimError,
    Stepper,
};
use morphogen_sim::GrayScott;

use crate::pixel::colorize_fields;

/// Drives one Gray-Scott simulation and keeps its latest RGBA frame.
pub struct Animator {
    sim: GrayScott,
    params: Params,
    scheme: ColorScheme,
    seed_mode: SeedMode,
    rng_seed: u64,
    playing: bool,
    pointer: Option<Pointer>,
    frame: Vec<u8>,
}

impl Animator {
    /// Builds a playing animator with a freshly seeded simulation and an
    /// initial rendered frame.
    pub fn new(
        width: usize,
        height: usize,
        mode: SeedMode,
        rng_seed: u64,
        params: Params,
        scheme: ColorScheme,
    ) -> Result<Self, SimError> {
        params.validate()?;
        let sim = GrayScott::new(width, height, mode, rng_seed)?;
        let frame = colorize_fields(sim.substrate(), sim.activator(), &scheme)?;
        Ok(Self {
            sim,
            params,
            scheme,
            seed_mode: mode,
            rng_seed,
            playing: true,
            pointer: None,
            frame,
        })
    }

    /// Builds an animator from a [`Recipe`]: preset parameters plus JSON
    /// overrides, catalog scheme, and named seed mode.
    pub fn from_recipe(recipe: &Recipe) -> Result<Self, SimError> {
        recipe.validate()?;
        let params = preset_params(&recipe.preset)?.with_overrides(&recipe.overrides);
        let scheme = ColorScheme::from_name(&recipe.scheme)?;
        let mode = SeedMode::from_name(&recipe.seed_mode)?;
        Self::new(
            recipe.width,
            recipe.height,
            mode,
            recipe.rng_seed,
            params,
            scheme,
        )
    }

    /// Advances one animation tick and returns the current frame.
    ///
    /// Paused animators do not step; the retained frame comes back
    /// unchanged. The pointer is sampled exactly once, at the start of the
    /// tick.
    pub fn tick(&mut self) -> Result<&[u8], SimError> {
        if self.playing {
            let pointer = self.pointer;
            self.sim.step(&self.params, pointer)?;
            self.render()?;
        }
        Ok(&self.frame)
    }

    fn render(&mut self) -> Result<(), SimError> {
        self.frame = colorize_fields(self.sim.substrate(), self.sim.activator(), &self.scheme)?;
        Ok(())
    }

    /// Discards the field state and reseeds with the stored mode and seed.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.sim.reseed(self.seed_mode, self.rng_seed)?;
        self.render()
    }

    /// Replaces the active parameters wholesale with a catalog preset and
    /// resets the field for a clean demonstration of the pattern.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), SimError> {
        self.params = preset_params(name)?;
        self.reset()
    }

    /// Replaces the active parameters after validation.
    pub fn set_params(&mut self, params: Params) -> Result<(), SimError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// The parameters used for the next tick.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Swaps the color scheme and re-renders the retained frame.
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> Result<(), SimError> {
        self.scheme = scheme;
        self.render()
    }

    /// The active color scheme.
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Sets or clears the pointer sampled at the next tick.
    pub fn set_pointer(&mut self, pointer: Option<Pointer>) {
        self.pointer = pointer;
    }

    /// Pauses or resumes stepping.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// True while ticks advance the simulation.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Routes steps through the rayon loop instead of the sequential one.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.sim.set_parallel(parallel);
    }

    /// The last rendered RGBA frame (row-major, 4 bytes per cell).
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Completed ticks since construction or the last reset.
    pub fn tick_count(&self) -> u64 {
        self.sim.tick()
    }

    /// The substrate (A) field after the last completed tick.
    pub fn substrate(&self) -> &Field {
        self.sim.substrate()
    }

    /// The activator (B) field after the last completed tick.
    pub fn activator(&self) -> &Field {
        self.sim.activator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn animator(width: usize, height: usize) -> Animator {
        Animator::new(
            width,
            height,
            SeedMode::CenterBlob,
            42,
            Params::default(),
            ColorScheme::thermal(),
        )
        .unwrap()
    }

    #[test]
    fn new_renders_an_initial_frame() {
        let anim = animator(16, 12);
        assert_eq!(anim.frame().len(), 16 * 12 * 4);
        assert_eq!(anim.tick_count(), 0);
        assert!(anim.is_playing());
    }

    #[test]
    fn tick_advances_and_rerenders() {
        let mut anim = animator(16, 16);
        let before = anim.frame().to_vec();
        anim.tick().unwrap();
        assert_eq!(anim.tick_count(), 1);
        assert_ne!(anim.frame(), &before[..], "frame should change on step");
    }

    #[test]
    fn paused_tick_retains_the_frame_and_state() {
        let mut anim = animator(16, 16);
        anim.tick().unwrap();
        let frozen = anim.frame().to_vec();
        anim.set_playing(false);
        for _ in 0..5 {
            let frame = anim.tick().unwrap();
            assert_eq!(frame, &frozen[..]);
        }
        assert_eq!(anim.tick_count(), 1, "paused ticks must not step");
        anim.set_playing(true);
        anim.tick().unwrap();
        assert_eq!(anim.tick_count(), 2);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut anim = animator(20, 20);
        let initial = anim.frame().to_vec();
        for _ in 0..10 {
            anim.tick().unwrap();
        }
        anim.reset().unwrap();
        assert_eq!(anim.tick_count(), 0);
        assert_eq!(anim.frame(), &initial[..]);
    }

    #[test]
    fn apply_preset_replaces_params_wholesale_and_resets() {
        let mut anim = animator(16, 16);
        anim.set_params(Params {
            feed_rate: 0.001,
            ..Params::default()
        })
        .unwrap();
        for _ in 0..3 {
            anim.tick().unwrap();
        }
        anim.apply_preset("coral-growth").unwrap();
        assert_eq!(anim.tick_count(), 0);
        assert_eq!(
            *anim.params(),
            preset_params("coral-growth").unwrap(),
            "preset selection must replace the whole record"
        );
    }

    #[test]
    fn apply_preset_rejects_unknown_names() {
        let mut anim = animator(16, 16);
        let before = *anim.params();
        assert!(anim.apply_preset("nope").is_err());
        assert_eq!(*anim.params(), before);
    }

    #[test]
    fn set_params_validates() {
        let mut anim = animator(16, 16);
        let bad = Params {
            dt: f64::NAN,
            ..Params::default()
        };
        assert!(anim.set_params(bad).is_err());
    }

    #[test]
    fn set_scheme_rerenders_without_stepping() {
        let mut anim = animator(16, 16);
        anim.tick().unwrap();
        let thermal = anim.frame().to_vec();
        anim.set_scheme(ColorScheme::ocean()).unwrap();
        assert_eq!(anim.tick_count(), 1);
        assert_ne!(anim.frame(), &thermal[..]);
    }

    #[test]
    fn pointer_drawing_feeds_the_brush() {
        let mut drawn = animator(24, 24);
        let mut plain = animator(24, 24);
        drawn.set_pointer(Some(Pointer::pressed(5, 5)));
        for _ in 0..3 {
            drawn.tick().unwrap();
            plain.tick().unwrap();
        }
        assert_ne!(drawn.frame(), plain.frame());
    }

    #[test]
    fn hovering_pointer_is_inert() {
        let mut hover = animator(24, 24);
        let mut plain = animator(24, 24);
        hover.set_pointer(Some(Pointer::hovering(5, 5)));
        for _ in 0..3 {
            hover.tick().unwrap();
            plain.tick().unwrap();
        }
        assert_eq!(hover.frame(), plain.frame());
    }

    #[test]
    fn parallel_ticks_match_sequential_ticks() {
        let mut seq = animator(32, 20);
        let mut par = animator(32, 20);
        par.set_parallel(true);
        for _ in 0..10 {
            seq.tick().unwrap();
            par.tick().unwrap();
        }
        assert_eq!(seq.frame(), par.frame());
    }

    // -- Recipes --

    #[test]
    fn from_recipe_applies_preset_and_overrides() {
        let mut recipe = Recipe::new("maze", "ocean", 32, 32, 7);
        recipe.overrides = json!({"feed_rate": 0.031});
        let anim = Animator::from_recipe(&recipe).unwrap();
        assert!((anim.params().feed_rate - 0.031).abs() < f64::EPSILON);
        assert!((anim.params().kill_rate - 0.057).abs() < f64::EPSILON);
    }

    #[test]
    fn from_recipe_rejects_unknown_catalog_keys() {
        let bad_preset = Recipe::new("zebra", "ocean", 32, 32, 7);
        assert!(Animator::from_recipe(&bad_preset).is_err());
        let bad_scheme = Recipe::new("maze", "lava", 32, 32, 7);
        assert!(Animator::from_recipe(&bad_scheme).is_err());
        let mut bad_mode = Recipe::new("maze", "ocean", 32, 32, 7);
        bad_mode.seed_mode = "spiral".into();
        assert!(Animator::from_recipe(&bad_mode).is_err());
    }

    #[test]
    fn identical_recipes_give_identical_frames() {
        let mut recipe = Recipe::new("turing-spots", "thermal", 40, 30, 99);
        recipe.seed_mode = "scatter".into();
        let mut a = Animator::from_recipe(&recipe).unwrap();
        let mut b = Animator::from_recipe(&recipe).unwrap();
        for _ in 0..20 {
            a.tick().unwrap();
            b.tick().unwrap();
        }
        assert_eq!(a.frame(), b.frame());
    }
}
