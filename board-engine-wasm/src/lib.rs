use board_engine::{BoardConfig, Markup, PlayMode, Timeline, Tool};
use wasm_bindgen::prelude::*;

/// Board handle for the browser view layer.
///
/// Wraps a [`Timeline`] and the markers drawn over it. Values cross the
/// boundary as plain integers and JSON strings.
#[wasm_bindgen]
pub struct WasmBoard {
    timeline: Timeline,
    markup: Markup,
}

#[wasm_bindgen]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<WasmBoard, JsError> {
        Self::with_config(&BoardConfig {
            size,
            ..BoardConfig::default()
        })
    }

    /// Construct from a JSON `BoardConfig`, e.g. `{"size":9,"play_mode":"black_only"}`.
    pub fn from_config(json: &str) -> Result<WasmBoard, JsError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        Self::with_config(&config)
    }

    pub fn size(&self) -> u8 {
        self.timeline.size()
    }

    // -- Game actions --

    /// Play at the cursor. Returns the placement as JSON:
    /// `{"success":bool,"captured":[[x,y],...]}`.
    pub fn play(&mut self, col: u8, row: u8) -> String {
        let placement = self.timeline.play((col, row));
        if placement.success {
            self.markup.clear_step(self.timeline.step());
        }
        serde_json::to_string(&placement)
            .unwrap_or_else(|_| r#"{"success":false,"captured":[]}"#.to_string())
    }

    pub fn is_legal(&self, col: u8, row: u8) -> bool {
        let view = self.timeline.view();
        let stone = self.timeline.play_mode().color_for(view.moves().len());
        view.is_legal((col, row), stone)
    }

    /// Returns false for an unknown mode name.
    pub fn set_play_mode(&mut self, mode: &str) -> bool {
        match mode.parse::<PlayMode>() {
            Ok(mode) => {
                self.timeline.set_play_mode(mode);
                true
            }
            Err(_) => false,
        }
    }

    pub fn play_mode(&self) -> String {
        self.timeline.play_mode().to_string()
    }

    pub fn clear(&mut self) {
        self.timeline.clear();
        self.markup.clear();
    }

    // -- Navigation --

    pub fn jump_to(&mut self, step: i32) {
        self.timeline.jump_to(step as isize);
    }

    pub fn back(&mut self) -> bool {
        self.timeline.back()
    }

    pub fn forward(&mut self) -> bool {
        self.timeline.forward()
    }

    pub fn to_start(&mut self) {
        self.timeline.to_start();
    }

    pub fn to_latest(&mut self) {
        self.timeline.to_latest();
    }

    pub fn step(&self) -> usize {
        self.timeline.step()
    }

    pub fn total_moves(&self) -> usize {
        self.timeline.total_moves()
    }

    pub fn is_at_start(&self) -> bool {
        self.timeline.is_at_start()
    }

    pub fn is_at_latest(&self) -> bool {
        self.timeline.is_at_latest()
    }

    // -- View accessors --

    /// Flat board at the cursor, `row * size + col`: 1 black, -1 white, 0 empty.
    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.timeline.view().board())
    }

    /// 1 for Black, -1 for White.
    pub fn current_turn(&self) -> i8 {
        let view = self.timeline.view();
        self.timeline
            .play_mode()
            .color_for(view.moves().len())
            .cell()
    }

    pub fn captures_json(&self) -> String {
        serde_json::to_string(self.timeline.view().captures())
            .unwrap_or_else(|_| r#"{"black":0,"white":0}"#.to_string())
    }

    /// Moves up to the cursor.
    pub fn moves_json(&self) -> String {
        serde_json::to_string(self.timeline.view().moves()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Ko point at the cursor as `[x,y]`, or `null`.
    pub fn ko_json(&self) -> String {
        serde_json::to_string(&self.timeline.view().ko()).unwrap_or_else(|_| "null".to_string())
    }

    /// Number of the move whose stone sits at the point, or 0.
    pub fn move_number_at(&self, col: u8, row: u8) -> usize {
        self.timeline.view().move_number_at((col, row)).unwrap_or(0)
    }

    /// The group containing the point as a JSON array of `[x,y]`.
    pub fn group_at(&self, col: u8, row: u8) -> String {
        serde_json::to_string(&self.timeline.view().group_of((col, row)))
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Liberties of the group containing the point; 0 for an empty point.
    pub fn liberties_at(&self, col: u8, row: u8) -> usize {
        let view = self.timeline.view();
        view.liberties(&view.group_of((col, row)))
    }

    /// Game record of the moves up to the cursor.
    pub fn record(&self) -> String {
        self.timeline.view().to_record_string()
    }

    // -- Markup --

    /// Toggle a marker on the current step. Returns false for an unknown tool.
    pub fn toggle_marker(&mut self, col: u8, row: u8, tool: &str) -> bool {
        match tool.parse::<Tool>() {
            Ok(tool) => {
                self.markup.toggle(self.timeline.step(), (col, row), tool);
                true
            }
            Err(_) => false,
        }
    }

    /// Markers of the current step.
    pub fn markers_json(&self) -> String {
        serde_json::to_string(self.markup.at(self.timeline.step()))
            .unwrap_or_else(|_| "[]".to_string())
    }
}

impl WasmBoard {
    fn with_config(config: &BoardConfig) -> Result<WasmBoard, JsError> {
        Ok(WasmBoard {
            timeline: Timeline::from_config(config)?,
            markup: Markup::new(),
        })
    }
}
