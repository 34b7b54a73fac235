use polywave::{SceneConfig, WaveScene};
use wasm_bindgen::prelude::*;

// ---- Waves Demo ----

#[wasm_bindgen]
pub struct WavesDemo {
    scene: WaveScene<f32>,
}

#[wasm_bindgen]
impl WavesDemo {
    /// `width`/`height` are in device pixels; the host owns DPR scaling.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, waves: usize, seed: u64) -> Result<WavesDemo, JsError> {
        let config = SceneConfig::new(width, height).with_waves(waves).with_seed(seed);
        let scene = WaveScene::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WavesDemo { scene })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.pointer_moved(x, y);
    }

    pub fn update(&mut self) {
        self.scene.frame();
    }

    pub fn wave_count(&self) -> usize {
        self.scene.rings().len()
    }

    /// Returns flat [x0, y0, x1, y1, ...] for ring `index`, in drawing order.
    pub fn positions(&self, index: usize) -> Vec<f32> {
        let Some(ring) = self.scene.rings().get(index) else {
            return Vec::new();
        };
        let pos = ring.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// CSS hex fill color for ring `index`.
    pub fn color(&self, index: usize) -> String {
        self.scene
            .rings()
            .get(index)
            .map(|r| r.color().to_string())
            .unwrap_or_default()
    }

    /// Returns [x, y] of the pointer, for drawing a cursor.
    pub fn pointer(&self) -> Vec<f32> {
        let p = self.scene.pointer().position();
        vec![p.x, p.y]
    }
}
