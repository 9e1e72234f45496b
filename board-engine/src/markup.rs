//! Board annotations drawn over a timeline.
//!
//! Markers live beside the engine, keyed by timeline step and point. They
//! never affect legality or captures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Marker {
    Triangle,
    Square,
    Circle,
    Cross,
    Label { text: String },
    /// A stone drawn for illustration only.
    SetupStone { stone: Stone },
}

/// The drawing tool that produced a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Triangle,
    Square,
    Circle,
    Cross,
    /// Sequential letters: A, B, ..., Z, AA, AB, ...
    Label,
    /// Sequential numbers starting at 1.
    Number,
    BlackStone,
    WhiteStone,
}

impl std::str::FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triangle" => Ok(Tool::Triangle),
            "square" => Ok(Tool::Square),
            "circle" => Ok(Tool::Circle),
            "cross" | "x" => Ok(Tool::Cross),
            "label" => Ok(Tool::Label),
            "number" => Ok(Tool::Number),
            "black_stone" | "stone_black" => Ok(Tool::BlackStone),
            "white_stone" | "stone_white" => Ok(Tool::WhiteStone),
            _ => Err(format!("unknown tool: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub pos: Point,
    pub marker: Marker,
}

#[derive(Debug, Clone, Default)]
pub struct Markup {
    steps: BTreeMap<usize, Vec<Annotation>>,
    labels_drawn: usize,
    numbers_drawn: usize,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&self, step: usize) -> &[Annotation] {
        self.steps.get(&step).map(Vec::as_slice).unwrap_or_default()
    }

    /// Remove the marker at `pos` on `step` if there is one, otherwise add a
    /// marker drawn with `tool`. Returns true when a marker was added.
    pub fn toggle(&mut self, step: usize, pos: Point, tool: Tool) -> bool {
        let annotations = self.steps.entry(step).or_default();
        if let Some(i) = annotations.iter().position(|a| a.pos == pos) {
            annotations.remove(i);
            return false;
        }

        let marker = match tool {
            Tool::Triangle => Marker::Triangle,
            Tool::Square => Marker::Square,
            Tool::Circle => Marker::Circle,
            Tool::Cross => Marker::Cross,
            Tool::Label => {
                let text = letter_label(self.labels_drawn);
                self.labels_drawn += 1;
                Marker::Label { text }
            }
            Tool::Number => {
                self.numbers_drawn += 1;
                Marker::Label {
                    text: self.numbers_drawn.to_string(),
                }
            }
            Tool::BlackStone => Marker::SetupStone {
                stone: Stone::Black,
            },
            Tool::WhiteStone => Marker::SetupStone {
                stone: Stone::White,
            },
        };
        annotations.push(Annotation { pos, marker });
        true
    }

    pub fn clear_step(&mut self, step: usize) {
        self.steps.remove(&step);
    }

    /// Drop every marker and restart the label and number sequences.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn letter_label(mut n: usize) -> String {
    let mut text = Vec::new();
    loop {
        text.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    text.reverse();
    String::from_utf8_lossy(&text).into_owned()
}
