//! WebAssembly bindings for the board engine.
//!
//! This module exposes a game session to JavaScript through wasm-bindgen.
//! Everything crosses the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::actions::Command;
use crate::board::PlayerId;
use crate::game::{GameConfig, GameSession};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed session wrapper
#[wasm_bindgen]
pub struct WasmSession {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session on a fresh standard board
    #[wasm_bindgen(constructor)]
    pub fn new(player_count: u8) -> Result<WasmSession, JsValue> {
        let config = GameConfig {
            player_count,
            ..GameConfig::default()
        };
        let session = GameSession::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSession { session })
    }

    /// Full session snapshot as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.session.view()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> usize {
        self.session.current_player_index()
    }

    /// Legal settlement nodes for a player as a JSON array of ids
    #[wasm_bindgen(js_name = getSettlementSpots)]
    pub fn get_settlement_spots(&self, player: u8) -> String {
        let spots = self.session.settlement_spots(PlayerId::new(player));
        serde_json::to_string(&spots).unwrap_or_else(|_| "[]".to_string())
    }

    /// Legal road edges for a player as a JSON array of ids
    #[wasm_bindgen(js_name = getRoadSpots)]
    pub fn get_road_spots(&self, player: u8) -> String {
        let spots = self.session.road_spots(PlayerId::new(player));
        serde_json::to_string(&spots).unwrap_or_else(|_| "[]".to_string())
    }

    /// Apply a command from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyCommand)]
    pub fn apply_command(&mut self, player: u8, command_json: &str) -> Result<String, JsValue> {
        let command: Command = serde_json::from_str(command_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid command JSON: {}", e)))?;

        match self.session.apply(PlayerId::new(player), command) {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Command failed: {}", e))),
        }
    }

    /// Winner's seat, if the game is over
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.session.winner().map(|p| p.index() as u8)
    }
}
